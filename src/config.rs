//! Configuration loader and validator for the menu preview renderer.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub preview: Preview,
    pub catalog: Catalog,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    /// Product name appended to every page title.
    pub product_name: String,
    pub output_dir: String,
}

/// Staged preview timeline, both delays measured from activation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preview {
    pub skeleton_delay_ms: u64,
    pub ready_delay_ms: u64,
}

/// Where restaurant and theme data come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Optional YAML seed file; the built-in sample data is used when absent.
    #[serde(default)]
    pub seed_path: Option<String>,
    pub default_theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: App {
                product_name: "منوساز".into(),
                output_dir: "./out".into(),
            },
            preview: Preview {
                skeleton_delay_ms: 1500,
                ready_delay_ms: 3000,
            },
            catalog: Catalog {
                seed_path: None,
                default_theme: "minimal-cafe".into(),
            },
        }
    }
}

impl Config {
    /// Ensure required directories exist (creates `app.output_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.output_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.app.output_dir)
    }

    pub fn skeleton_delay(&self) -> Duration {
        Duration::from_millis(self.preview.skeleton_delay_ms)
    }

    pub fn ready_delay(&self) -> Duration {
        Duration::from_millis(self.preview.ready_delay_ms)
    }

    /// Seed path resolved relative to the directory holding the config file.
    pub fn resolved_seed_path(&self, config_path: Option<&Path>) -> Option<PathBuf> {
        let seed = self.catalog.seed_path.as_deref()?;
        let seed = Path::new(seed);
        if seed.is_absolute() {
            return Some(seed.to_path_buf());
        }
        match config_path.and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => Some(dir.join(seed)),
            _ => Some(seed.to_path_buf()),
        }
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.product_name.trim().is_empty() {
        return Err(ConfigError::Invalid("app.product_name must be non-empty"));
    }
    if cfg.app.output_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.output_dir must be non-empty"));
    }

    if cfg.preview.skeleton_delay_ms == 0 {
        return Err(ConfigError::Invalid("preview.skeleton_delay_ms must be > 0"));
    }
    if cfg.preview.ready_delay_ms <= cfg.preview.skeleton_delay_ms {
        return Err(ConfigError::Invalid(
            "preview.ready_delay_ms must be greater than preview.skeleton_delay_ms",
        ));
    }

    if cfg.catalog.default_theme.trim().is_empty() {
        return Err(ConfigError::Invalid("catalog.default_theme must be non-empty"));
    }
    if let Some(seed) = &cfg.catalog.seed_path {
        if seed.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog.seed_path must be non-empty when set"));
        }
    }

    Ok(())
}

/// Returns an example YAML configuration.
pub fn example() -> &'static str {
    r#"app:
  product_name: "منوساز"
  output_dir: "./out"

preview:
  skeleton_delay_ms: 1500
  ready_delay_ms: 3000

catalog:
  # seed_path: "catalog.yaml"
  default_theme: "minimal-cafe"
"#
}
