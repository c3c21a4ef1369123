pub const NUM_STARS: usize = 100;

pub const MIN_STAR_RADIUS: u8 = 1;
pub const MAX_STAR_RADIUS: u8 = 10;
pub const MIN_STAR_SEGMENTS: u32 = 3;
pub const MAX_STAR_SEGMENTS: u32 = 14;
pub const MIN_STAR_ALPHA: u8 = 150;

/// Distance beyond the viewport before a star is recycled
pub const DELETE_BORDER_LIMIT: f32 = 50.0;
/// Width of the band outside the viewport where new stars appear
pub const SPAWN_BORDER_LIMIT: f32 = 30.0;

pub const SPEED_SCALE: f32 = 0.4;

/// Simulated wind time advances this much slower than real time
pub const TIME_DAMPING: f64 = 0.1;
pub const WIND_OFFSET_SCALE: f32 = 0.1;
pub const WIND_STEP: i32 = 1;
pub const WIND_BOOSTED_STEP: i32 = 10;

pub const GRID_LINES: usize = 12;
pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const GRID_COLOUR: [u8; 4] = [10, 170, 230, 255];

pub const RADAR_INSET: f32 = 5.0;
pub const RADAR_PANEL_SIZE: f32 = 200.0;
pub const RADAR_RING_RATIO: f32 = 0.8;
pub const RADAR_FILL_FACTOR: f32 = 0.3;
