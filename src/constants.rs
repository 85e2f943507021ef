//! Shared constants for card layout and upstream access
//!

/// Width of the rendered card in pixels.
pub const CANVAS_WIDTH: u32 = 1000;
/// Height of the rendered card in pixels.
pub const CANVAS_HEIGHT: u32 = 400;

/// The profile picture is always resized to a square of this many pixels.
pub const PICTURE_SIZE: u32 = 200;
/// Left edge of the picture region.
pub const PICTURE_X: u32 = 400;
/// Top edge of the picture region.
pub const PICTURE_Y: u32 = 50;

/// Highest value a background colour channel can take.
pub const MAX_BACKGROUND_CHANNEL: u8 = 254;

/// Resolution the label point sizes are rendered at.
pub const TEXT_DPI: f32 = 144.0;
/// Point size of the name and job title labels.
pub const LABEL_POINTS: u16 = 16;
/// Point size of the caption.
pub const CAPTION_POINTS: u16 = 7;

/// Baseline of the name label.
pub const NAME_BASELINE: i32 = 300;
/// Baseline of the job title label.
pub const JOB_TITLE_BASELINE: i32 = 350;
/// Left edge of the caption.
pub const CAPTION_X: i32 = 10;
/// Baseline of the caption.
pub const CAPTION_BASELINE: i32 = 390;

/// Fixed job title printed under the name.
pub const JOB_TITLE: &str = "Software Developer @ Razorpay";
/// Fixed caption printed at the bottom of the card.
pub const CAPTION: &str = "Fun fact: Everytime you refresh you'll get a new color in background";

/// Font file used for the name label.
pub const NAME_FONT_FILE: &str = "user-name.ttf";
/// Font file used for the job title label.
pub const JOB_TITLE_FONT_FILE: &str = "other-content.ttf";
/// Font file used for the caption.
pub const CAPTION_FONT_FILE: &str = "post-script.ttf";

/// Provider used when the request doesn't name one.
pub const DEFAULT_PROVIDER: &str = "facebook";
/// Default base URL of the GitHub users API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/";
/// Default base URL of Instagram profile pages.
pub const DEFAULT_INSTAGRAM_URL: &str = "https://instagram.com/";

/// Content type of PNG pictures.
pub const PNG_CONTENT_TYPE: &str = "image/png";
/// Content type of JPEG pictures and of the rendered card.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";
/// Content type reported when sniffing can't identify the bytes.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// User agent sent on every upstream request; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
