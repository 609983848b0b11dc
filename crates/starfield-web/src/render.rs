//! Canvas2D renderer for the starfield.

use crate::dom;
use anyhow::Result;
use starfield_core::color::{css_rgba, css_transparent};
use starfield_core::{Starfield, GLOW_ALPHA_FACTOR, GLOW_RADIUS_FACTOR, LINE_COLOR, TRAIL_COLOR};
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Draw one frame from the current simulation state.
    ///
    /// Order matches the visual layering: trail underneath, constellation
    /// lines, then glows and star discs on top.
    pub fn render(&self, field: &Starfield) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        if field.config.show_trail {
            for blob in field.trail_blobs() {
                self.fill_glow(
                    blob.pos.x as f64,
                    blob.pos.y as f64,
                    blob.radius as f64,
                    TRAIL_COLOR,
                    blob.alpha,
                );
            }
        }

        if field.config.show_constellations {
            self.ctx.set_line_width(1.0);
            for line in field.edge_lines() {
                self.ctx
                    .set_stroke_style_str(&css_rgba(LINE_COLOR, line.opacity));
                self.ctx.begin_path();
                self.ctx.move_to(line.from.x as f64, line.from.y as f64);
                self.ctx.line_to(line.to.x as f64, line.to.y as f64);
                self.ctx.stroke();
            }
        }

        for sprite in field.sprites() {
            let x = sprite.pos.x as f64;
            let y = sprite.pos.y as f64;
            if sprite.glow {
                self.fill_glow(
                    x,
                    y,
                    (sprite.radius * GLOW_RADIUS_FACTOR) as f64,
                    sprite.color,
                    sprite.brightness * GLOW_ALPHA_FACTOR,
                );
            }
            self.ctx
                .set_fill_style_str(&css_rgba(sprite.color, sprite.brightness));
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, y, sprite.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
    }

    /// A soft disc fading from `alpha` at the center to transparent at `radius`.
    fn fill_glow(&self, x: f64, y: f64, radius: f64, color: [u8; 3], alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &css_rgba(color, alpha));
        let _ = gradient.add_color_stop(1.0, &css_transparent(color));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
