#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};
pub use toml_config::{CatalogConfig, SiteConfig};

use crate::core::store::ProjectStore;
use crate::utils::error::Result;

/// Loads the catalog file when one is given, otherwise the built-in catalog
/// with default site settings.
pub fn load_catalog(path: Option<&str>) -> Result<(SiteConfig, ProjectStore)> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            CatalogConfig::from_file(path)?.into_parts()
        }
        None => {
            tracing::debug!("No catalog file given, using the built-in catalog");
            Ok((SiteConfig::default(), ProjectStore::builtin()))
        }
    }
}
