//! Configuration handling

pub mod site;

pub use site::{ServerConfig, SiteConfig};
