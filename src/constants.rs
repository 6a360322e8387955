//! DOM hooks shared by the shell, the stage and the host page.
//!
//! Element keys used by the reveal engine are element ids; generated
//! elements get ids built by the helpers below.

pub const ROOT_ID: &str = "root-container";
pub const STARFIELD_CANVAS_ID: &str = "starfield";

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const NAV_LOGO_ID: &str = "nav-logo";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_SCROLLED_CLASS: &str = "scrolled";
pub const NAV_OPEN_CLASS: &str = "open";
/// `scrollY` above which the nav bar switches to its compact look.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 20.0;

// Parallax layers
pub const ORB_PRIMARY_ID: &str = "ambient-orb-1";
pub const ORB_SECONDARY_ID: &str = "ambient-orb-2";
pub const WORDMARK_ID: &str = "brand-wordmark";

// Hero
pub const CONTACT_LIST_ID: &str = "contact-cards";

// Classes
pub const CARD_CLASS: &str = "cyber-card";
pub const STAGGER_ITEM_CLASS: &str = "stagger-item";
pub const TILT_CARD_CLASS: &str = "tilt-card";
pub const TYPING_LABEL_CLASS: &str = "typing-label";
pub const HIGHLIGHT_CLASS: &str = "highlight-active";
pub const SECTION_TITLE_CLASS: &str = "section-title";
pub const TITLE_LINE_CLASS: &str = "title-line";

// Page-level attribute overrides
pub const ATTR_TEXT: &str = "data-text";
pub const ATTR_SPEED: &str = "data-speed";
pub const ATTR_DELAY: &str = "data-delay";
pub const ATTR_REPEAT: &str = "data-repeat";
pub const ATTR_MAX_DEG: &str = "data-max-deg";
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_REVEAL: &str = "data-reveal";

/// Sections filled from the resume, in page order.
pub const SECTION_IDS: [&str; 6] = [
    "about",
    "experience",
    "skills",
    "projects",
    "education",
    "certifications",
];

pub fn title_key(section: &str) -> String {
    format!("{section}-title")
}

pub fn title_line_key(section: &str) -> String {
    format!("{section}-title-line")
}

pub fn item_key(section: &str, index: usize) -> String {
    format!("{section}-item-{index}")
}

pub fn contact_key(index: usize) -> String {
    format!("contact-{index}")
}

pub fn content_key(section: &str) -> String {
    format!("{section}-content")
}
