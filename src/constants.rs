/// Scene and texture tuning constants for the web frontend.
///
/// Trajectory timing lives in `core::coin`; everything here is presentation
/// only (mesh proportions, face raster styling, camera lens).
// Coin mesh proportions (world units)
pub const COIN_RADIUS: f32 = 1.6;
pub const COIN_DEPTH: f32 = 0.28;
pub const COIN_SEGMENTS: u32 = 64;

// Rim material, a plain metallic amber
pub const RIM_COLOR: [f32; 4] = [0.961, 0.62, 0.043, 1.0];

// Face raster (2D canvas) styling
pub const TEXTURE_SIZE: u32 = 1024;
pub const HEADS_BG: &str = "#fbbf24";
pub const HEADS_TEXT: &str = "#451a03";
pub const TAILS_BG: &str = "#f1f5f9";
pub const TAILS_TEXT: &str = "#0f172a";
pub const FACE_FONT: &str = "900 130px Inter, sans-serif";
pub const FACE_TEXT_MAX_WIDTH: f64 = 850.0;
pub const FACE_RING_RADIUS: f64 = 460.0;
pub const FACE_RING_WIDTH: f64 = 14.0;
pub const FACE_RING_ALPHA: f64 = 0.15;

// Camera lens
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 100.0;

// Scene light
pub const LIGHT_DIR: [f32; 3] = [0.4, 0.7, 0.6];
pub const AMBIENT_LIGHT: f32 = 0.45;
