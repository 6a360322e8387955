//! Animation tuning constants.
//!
//! These are the defaults behind the `*Config` structs; components read them
//! through their config so pages and tests can override any of them.

// Starfield: grid
pub const GRID_CELL_SIZE: f32 = 80.0;
pub const GRID_TIME_RATE: f32 = 5.0; // grid phase units per unit of simulated time
pub const GRID_SCROLL_RATE: f32 = 0.1; // grid phase units per scrolled pixel
pub const GRID_RGB: [u8; 3] = [255, 255, 255];
pub const GRID_STROKE_ALPHA: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 1.0;

// Starfield: simulated time advances by a fixed step per frame
pub const TIME_STEP_PER_FRAME: f32 = 0.01;

// Starfield: population
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0;
pub const STARS_LOW_BUDGET: usize = 20;
pub const STARS_HIGH_BUDGET: usize = 40;

// Starfield: motion and projection
pub const FOCAL_LENGTH: f32 = 128.0;
pub const STAR_BASE_SPEED: f32 = 0.5; // depth units per frame
pub const STAR_SCROLL_SPEED_FACTOR: f32 = 0.002; // extra depth units per frame per scrolled pixel
pub const STAR_MAX_RADIUS: f32 = 2.0;
pub const STAR_MAX_OPACITY: f32 = 0.7;
pub const STAR_RGB: [u8; 3] = [255, 255, 255];

// Starfield: pointer connections
pub const CONNECTION_RADIUS: f32 = 150.0;
pub const CONNECTION_MAX_OPACITY: f32 = 0.3;
pub const CONNECTION_RGB: [u8; 3] = [0, 255, 65];

// Typing label timings (milliseconds)
pub const TYPING_CHAR_INTERVAL_MS: u32 = 50;
pub const TYPING_FULL_DWELL_MS: u32 = 2000;
pub const TYPING_EMPTY_DWELL_MS: u32 = 500;

// Tilt cards
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_HOVER_SCALE: f32 = 1.02;

// Scroll reveal activation lines, as fractions of viewport height from the top
pub const TITLE_START_LINE: f32 = 0.85;
pub const STAGGER_START_LINE: f32 = 0.90;
pub const CARD_HIGHLIGHT_ENTER: f32 = 0.70;
pub const CARD_HIGHLIGHT_LEAVE: f32 = 0.30;
pub const CONTACT_HIGHLIGHT_ENTER: f32 = 0.80;
pub const CONTACT_HIGHLIGHT_LEAVE: f32 = 0.20;

// Entrance timings (seconds) and offsets (px)
pub const TITLE_ENTRANCE_SEC: f32 = 0.8;
pub const TITLE_OFFSET_X: f32 = -50.0;
pub const UNDERLINE_SEC: f32 = 1.0;
pub const UNDERLINE_DELAY_SEC: f32 = 0.1;
pub const STAGGER_ENTRANCE_SEC: f32 = 0.6;
pub const STAGGER_STEP_SEC: f32 = 0.1;
pub const STAGGER_OFFSET_Y: f32 = 30.0;
pub const CONTACT_BACK_OVERSHOOT: f32 = 1.7;

// Scrubbed parallax
pub const ORB_PRIMARY_TRAVEL: f32 = 400.0;
pub const ORB_PRIMARY_LAG_SEC: f32 = 1.5;
pub const ORB_SECONDARY_TRAVEL: f32 = -200.0;
pub const ORB_SECONDARY_LAG_SEC: f32 = 2.0;
pub const LOGO_MAX_SCALE: f32 = 1.5;
pub const LOGO_SCALE_RANGE_PX: f32 = 300.0;
pub const LOGO_LAG_SEC: f32 = 1.0;
pub const WORDMARK_TRAVEL_VH: f32 = 0.5; // fraction of viewport height
pub const WORDMARK_MAX_ROTATION_DEG: f32 = 5.0;
pub const WORDMARK_MAX_SCALE: f32 = 1.2;
pub const WORDMARK_BASE_OPACITY: f32 = 0.1;
pub const WORDMARK_LAG_SEC: f32 = 1.0;
