// Page wiring and visual constants for the web frontend.
// Simulation tuning lives in `core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "webgl-canvas";
pub const START_BUTTON_ID: &str = "startButton";

// Assets (relative to the page)
pub const PHOTO_PATH: &str = "20181110-DSC00675.jpg";
pub const LEAF_SPRITE_PATH: &str = "pic02.png";

// User-agent fragments that select touch input instead of mouse input
pub const MOBILE_UA_MARKERS: [&str; 5] = ["ipad", "iphone", "ipod", "android", "webos"];

// Colours (0xRRGGBB, sRGB)
pub const BACKGROUND_COLOR: u32 = 0xFFFFFF;
pub const SPHERE_COLOR: u32 = 0x50C878;
pub const OUTLINE_COLOR: u32 = 0xFFFF00;
pub const BAMBOO_COLOR: u32 = 0x6B8E23;
pub const CUBE_COLOR: u32 = 0x00FF00;
pub const PANEL_TINT: u32 = 0xFFFFFF;

// Bamboo sprite size as a size-attenuated point size
pub const BAMBOO_SPRITE_SIZE: f32 = 5.0;
