//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the site.
pub const CSS: &str = include_str!("styles.css");

/// Section toggling and other page interactions.
pub const JS: &str = include_str!("scripts.js");
