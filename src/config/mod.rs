//! Configuration module for Frontpage
//!
//! Configuration is assembled from built-in defaults overridden by
//! environment variables, then validated. There is no config file; the CLI
//! supplies the homepage URL and output directory directly.

mod env;
mod types;
mod validation;

pub use env::{load_config, normalize_homepage_url};
pub use types::{Config, FetchConfig, SummaryConfig, UploadConfig};
pub use validation::validate;
