//! Starfield simulation state and per-frame update math.
//!
//! The [`Starfield`] owns the star set, the precomputed constellation edges,
//! the last known pointer position, and the optional pointer trail. It is
//! platform-agnostic: the web frontend feeds it pointer/resize events and
//! reads back draw parameters each frame.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;

/// A single animated point-light particle.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    /// Unboosted radius, in viewport pixels.
    pub radius: f32,
    pub base_brightness: f32,
    pub twinkle_phase: f32,
    /// Phase advance per frame, in radians.
    pub twinkle_speed: f32,
    /// Index into [`STAR_PALETTE`].
    pub color: usize,
}

/// A precomputed line between two nearby stars.
///
/// Indices refer to the star vector the edge was generated from; resizing
/// regenerates stars and edges together so they can never dangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

/// One recorded pointer position with its decaying prune alpha.
#[derive(Clone, Copy, Debug)]
pub struct TrailSample {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Tunable parameters. Defaults match the production values.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub star_density: f32,
    pub min_stars: usize,
    pub max_stars: usize,
    pub connection_distance: f32,
    pub influence_radius: f32,
    pub line_opacity: f32,
    pub line_highlight_opacity: f32,
    pub show_constellations: bool,
    pub show_trail: bool,
    pub trail_length: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_density: STAR_DENSITY,
            min_stars: MIN_STARS,
            max_stars: MAX_STARS,
            connection_distance: CONNECTION_DISTANCE,
            influence_radius: INFLUENCE_RADIUS,
            line_opacity: LINE_OPACITY,
            line_highlight_opacity: LINE_HIGHLIGHT_OPACITY,
            show_constellations: true,
            show_trail: false,
            trail_length: TRAIL_LENGTH,
        }
    }
}

/// Per-star draw parameters for one frame.
#[derive(Clone, Copy, Debug)]
pub struct StarSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub brightness: f32,
    pub color: [u8; 3],
    /// Set when the pointer is within the influence radius; the renderer adds
    /// a soft glow disc of radius `GLOW_RADIUS_FACTOR * radius` behind the star.
    pub glow: bool,
}

/// Per-edge draw parameters for one frame.
#[derive(Clone, Copy, Debug)]
pub struct EdgeLine {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Per-trail-sample draw parameters for one frame.
#[derive(Clone, Copy, Debug)]
pub struct TrailBlob {
    pub pos: Vec2,
    pub alpha: f32,
    pub radius: f32,
}

/// Target star count for a viewport: `clamp(floor(area * density), min, max)`.
pub fn star_count_for_area(width: f32, height: f32, config: &FieldConfig) -> usize {
    let raw = (width * height * config.star_density).floor() as usize;
    raw.clamp(config.min_stars, config.max_stars)
}

/// Linear pointer influence: 1 at distance 0, falling to 0 at `radius` and beyond.
#[inline]
pub fn influence_at(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        0.0
    } else {
        1.0 - distance / radius
    }
}

/// Brightness with the proximity boost applied, capped at full brightness.
#[inline]
pub fn boosted_brightness(twinkle_brightness: f32, influence: f32) -> f32 {
    (twinkle_brightness + influence * BRIGHTNESS_BOOST).min(1.0)
}

/// Radius with the proximity boost applied.
#[inline]
pub fn boosted_radius(base_radius: f32, influence: f32) -> f32 {
    base_radius + influence * RADIUS_BOOST
}

pub struct Starfield {
    pub config: FieldConfig,
    width: f32,
    height: f32,
    stars: Vec<Star>,
    edges: Vec<Edge>,
    pointer: Option<Vec2>,
    trail: SmallVec<[TrailSample; TRAIL_LENGTH]>,
    rng: StdRng,
}

impl Starfield {
    /// Build a field sized to `width * height` viewport pixels.
    ///
    /// The same `(config, width, height, seed)` always produces the same star
    /// and edge sets.
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            stars: Vec::new(),
            edges: Vec::new(),
            pointer: None,
            trail: SmallVec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate();
        log::info!(
            "starfield: {} stars, {} constellation edges at {}x{}",
            field.stars.len(),
            field.edges.len(),
            width,
            height
        );
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn trail(&self) -> &[TrailSample] {
        &self.trail
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Resize the field and rebuild stars and edges in one step.
    ///
    /// Callers never observe a star vector and an edge list from different
    /// generations: both are replaced before this returns, and the single
    /// `&mut` borrow keeps frame rendering out until then.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
        log::debug!(
            "starfield resized to {}x{}: {} stars, {} edges",
            width,
            height,
            self.stars.len(),
            self.edges.len()
        );
    }

    fn regenerate(&mut self) {
        let count = star_count_for_area(self.width, self.height, &self.config);
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            self.stars.push(Star {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                radius: self.rng.gen_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX),
                base_brightness: self.rng.gen_range(BASE_BRIGHTNESS_MIN..BASE_BRIGHTNESS_MAX),
                twinkle_phase: self.rng.gen::<f32>() * std::f32::consts::TAU,
                twinkle_speed: self.rng.gen_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
                color: self.rng.gen_range(0..STAR_PALETTE.len()),
            });
        }
        self.edges = build_edges(&self.stars, self.config.connection_distance);
    }

    /// Record the pointer position, in the same viewport-pixel space as stars.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        self.pointer = Some(pos);
        if self.config.show_trail {
            self.trail.push(TrailSample { pos, alpha: 1.0 });
            while self.trail.len() > self.config.trail_length {
                self.trail.remove(0);
            }
        }
    }

    /// Pointer left the surface: drop the position and the whole trail at once.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
        self.trail.clear();
    }

    /// One simulation step: advance twinkle phases and decay the trail.
    pub fn advance(&mut self) {
        for star in &mut self.stars {
            star.twinkle_phase += star.twinkle_speed;
        }
        if !self.trail.is_empty() {
            for sample in &mut self.trail {
                sample.alpha *= TRAIL_DECAY;
            }
            self.trail.retain(|s| s.alpha > TRAIL_ALPHA_FLOOR);
        }
    }

    /// Draw parameters for star `index` under the current pointer state.
    pub fn sprite(&self, index: usize) -> StarSprite {
        let star = &self.stars[index];
        let twinkle = star.base_brightness + TWINKLE_AMPLITUDE * star.twinkle_phase.sin();
        let influence = self
            .pointer
            .map(|p| influence_at(p.distance(star.pos), self.config.influence_radius))
            .unwrap_or(0.0);
        StarSprite {
            pos: star.pos,
            radius: boosted_radius(star.radius, influence),
            brightness: boosted_brightness(twinkle, influence),
            color: STAR_PALETTE[star.color],
            glow: influence > 0.0,
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = StarSprite> + '_ {
        (0..self.stars.len()).map(|i| self.sprite(i))
    }

    /// Opacity for an edge: highlighted when either endpoint is near the pointer.
    pub fn edge_opacity(&self, edge: &Edge) -> f32 {
        if let Some(p) = self.pointer {
            let r = self.config.influence_radius;
            if p.distance(self.stars[edge.a].pos) < r || p.distance(self.stars[edge.b].pos) < r {
                return self.config.line_highlight_opacity;
            }
        }
        self.config.line_opacity
    }

    pub fn edge_lines(&self) -> impl Iterator<Item = EdgeLine> + '_ {
        self.edges.iter().map(|edge| EdgeLine {
            from: self.stars[edge.a].pos,
            to: self.stars[edge.b].pos,
            opacity: self.edge_opacity(edge),
        })
    }

    /// Trail samples as draw blobs, oldest first and faintest.
    pub fn trail_blobs(&self) -> impl Iterator<Item = TrailBlob> + '_ {
        let len = self.trail.len() as f32;
        self.trail.iter().enumerate().map(move |(i, sample)| {
            let fade = i as f32 / len;
            TrailBlob {
                pos: sample.pos,
                alpha: fade * TRAIL_MAX_ALPHA,
                radius: fade * TRAIL_MAX_RADIUS,
            }
        })
    }
}

/// All unordered star pairs closer than `max_distance`.
///
/// O(n²) over the star set; with the count capped at `MAX_STARS` this stays
/// under 80k pair checks per regeneration, which is fine without a spatial
/// index.
pub fn build_edges(stars: &[Star], max_distance: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for a in 0..stars.len() {
        for b in (a + 1)..stars.len() {
            let distance = stars[a].pos.distance(stars[b].pos);
            if distance < max_distance {
                edges.push(Edge { a, b, distance });
            }
        }
    }
    edges
}
