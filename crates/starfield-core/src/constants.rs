// Simulation tuning constants shared by the core and the web frontend.

// Star population
pub const STAR_DENSITY: f32 = 0.000_15; // stars per square viewport pixel
pub const MIN_STARS: usize = 100;
pub const MAX_STARS: usize = 400;

// Star appearance ranges at generation time
pub const STAR_RADIUS_MIN: f32 = 1.0;
pub const STAR_RADIUS_MAX: f32 = 3.0;
pub const BASE_BRIGHTNESS_MIN: f32 = 0.3;
pub const BASE_BRIGHTNESS_MAX: f32 = 0.8;
pub const TWINKLE_SPEED_MIN: f32 = 0.01; // radians per frame
pub const TWINKLE_SPEED_MAX: f32 = 0.03;
pub const TWINKLE_AMPLITUDE: f32 = 0.3;

// Constellations
pub const CONNECTION_DISTANCE: f32 = 120.0; // max edge length in viewport pixels
pub const LINE_OPACITY: f32 = 0.3;
pub const LINE_HIGHLIGHT_OPACITY: f32 = 0.8;

// Pointer interaction
pub const INFLUENCE_RADIUS: f32 = 185.0;
pub const BRIGHTNESS_BOOST: f32 = 0.7; // added at influence 1.0
pub const RADIUS_BOOST: f32 = 2.0; // added at influence 1.0
pub const GLOW_RADIUS_FACTOR: f32 = 3.0; // glow disc radius relative to star radius
pub const GLOW_ALPHA_FACTOR: f32 = 0.5; // glow core alpha relative to star brightness

// Pointer trail (disabled by default)
pub const TRAIL_LENGTH: usize = 10;
pub const TRAIL_DECAY: f32 = 0.95; // per-frame alpha multiplier
pub const TRAIL_ALPHA_FLOOR: f32 = 0.01; // samples below this are pruned
pub const TRAIL_MAX_ALPHA: f32 = 0.5; // newest sample alpha when drawn
pub const TRAIL_MAX_RADIUS: f32 = 20.0; // newest sample blob radius

// Fixed palette; stars pick uniformly. Lines and the trail use the first entry.
pub const STAR_PALETTE: [[u8; 3]; 5] = [
    [96, 165, 250],  // blue
    [167, 139, 250], // purple
    [244, 114, 182], // pink
    [251, 191, 36],  // amber
    [255, 255, 255], // white
];

pub const LINE_COLOR: [u8; 3] = STAR_PALETTE[0];
pub const TRAIL_COLOR: [u8; 3] = STAR_PALETTE[0];
