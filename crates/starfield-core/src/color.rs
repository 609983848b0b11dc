//! CSS color string helpers for the Canvas2D renderer.

/// Format an RGB triple plus alpha as a CSS `rgba(...)` color.
///
/// Alpha is clamped to \[0, 1\] and printed with three decimals, which is
/// plenty for canvas fill/stroke styles.
pub fn css_rgba(rgb: [u8; 3], alpha: f32) -> String {
    let a = alpha.clamp(0.0, 1.0);
    format!("rgba({},{},{},{:.3})", rgb[0], rgb[1], rgb[2], a)
}

/// Fully transparent variant of a palette color, for gradient end stops.
pub fn css_transparent(rgb: [u8; 3]) -> String {
    format!("rgba({},{},{},0)", rgb[0], rgb[1], rgb[2])
}
