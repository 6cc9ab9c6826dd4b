pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::memory::{MemoryGrid, MemoryModal};
pub use adapters::storage::LocalStorage;
pub use config::{CatalogConfig, SiteConfig};
pub use crate::core::{catalog::CatalogPage, page::PageBuilder, store::ProjectStore};
pub use utils::error::{CatalogError, Result};
