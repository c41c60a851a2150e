//! Portfolio - a server-rendered personal portfolio site.
//!
//! Shows a profile, a catalog of project artifacts and a detail page per
//! artifact with collapsible sections. Content comes from a versioned
//! dataset compiled into the binary or loaded from a TOML/YAML/JSON file.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod models;
pub mod render;
pub mod server;
