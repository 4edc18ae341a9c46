pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::EmailJsClient;
pub use config::{EmailJsConfig, SiteConfig};
pub use crate::core::{contact::ContactSection, validator::is_valid_email};
pub use utils::error::{ContactError, Result};
