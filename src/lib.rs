pub mod catalog;
pub mod config;
pub mod directory;
pub mod metadata;
pub mod model;
pub mod preview;
pub mod templates;
pub mod themes;

use std::path::Path;

use crate::catalog::CatalogError;
use crate::config::Config;
use crate::directory::InMemoryRestaurants;
use crate::themes::InMemoryThemes;

/// Build the repositories from the configured seed file, or from the built-in
/// sample catalog when no seed is configured.
pub fn load_catalog(
    cfg: &Config,
    config_path: Option<&Path>,
) -> Result<(InMemoryRestaurants, InMemoryThemes), CatalogError> {
    let seed = match cfg.resolved_seed_path(config_path) {
        Some(path) => catalog::load_seed(&path)?,
        None => catalog::builtin(),
    };
    seed.into_repositories(&cfg.catalog.default_theme)
}
