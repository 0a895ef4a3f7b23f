//! Runtime configuration I/O.
//!
//! Directory detection and config loading, kept apart from `config.rs` so
//! the config types stay free of filesystem policy.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Directories the app reads from.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// `~/.config/folio` on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Resolve directories from the platform conventions.
    pub fn from_system() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::IoError("could not determine the user config directory".to_string())
        })?;
        Ok(Self {
            config_dir: base.join("folio"),
        })
    }

    /// Rooted at an arbitrary directory; used by tests.
    pub fn for_testing(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

/// Load the effective configuration.
///
/// An explicit path must exist and parse. The default location is optional:
/// when it's missing the built-in defaults are used.
pub fn load_config(
    dir_context: &DirectoryContext,
    explicit_path: Option<&Path>,
) -> Result<Config, ConfigError> {
    if let Some(path) = explicit_path {
        tracing::debug!("Loading config from {}", path.display());
        return Config::load_from_file(path);
    }

    let default_path = dir_context.config_path();
    if !default_path.exists() {
        tracing::debug!(
            "No config at {}, using defaults",
            default_path.display()
        );
        return Ok(Config::default());
    }

    tracing::debug!("Loading config from {}", default_path.display());
    Config::load_from_file(&default_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackgroundKind;

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = DirectoryContext::for_testing(temp.path());

        let config = load_config(&ctx, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_location_is_read_when_present() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = DirectoryContext::for_testing(temp.path());
        std::fs::create_dir_all(&ctx.config_dir).unwrap();
        std::fs::write(ctx.config_path(), r#"{"background": "none"}"#).unwrap();

        let config = load_config(&ctx, None).unwrap();
        assert_eq!(config.background, BackgroundKind::None);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = DirectoryContext::for_testing(temp.path());
        let missing = temp.path().join("nope.json");

        assert!(matches!(
            load_config(&ctx, Some(&missing)),
            Err(ConfigError::IoError(_))
        ));
    }
}
