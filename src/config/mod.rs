#[cfg(feature = "cli")]
pub mod cli;
pub mod emailjs;
pub mod site;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use emailjs::EmailJsConfig;
pub use site::{ContactConfig, SiteConfig, SiteIdentity};
