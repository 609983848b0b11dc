use starfield_core::color::{css_rgba, css_transparent};
use starfield_core::{LINE_COLOR, STAR_PALETTE};

#[test]
fn css_rgba_formats_channels_and_alpha() {
    assert_eq!(css_rgba([96, 165, 250], 0.3), "rgba(96,165,250,0.300)");
    assert_eq!(css_rgba([255, 255, 255], 1.0), "rgba(255,255,255,1.000)");
}

#[test]
fn css_rgba_clamps_alpha() {
    assert_eq!(css_rgba([0, 0, 0], -0.5), "rgba(0,0,0,0.000)");
    assert_eq!(css_rgba([0, 0, 0], 1.5), "rgba(0,0,0,1.000)");
}

#[test]
fn css_transparent_keeps_channels() {
    assert_eq!(css_transparent([251, 191, 36]), "rgba(251,191,36,0)");
}

#[test]
fn palette_has_five_colors_and_blue_lines() {
    assert_eq!(STAR_PALETTE.len(), 5);
    assert_eq!(LINE_COLOR, [96, 165, 250]);
}
