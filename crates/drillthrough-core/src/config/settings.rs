use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::SAMPLE_START;
use crate::error::GraphError;

pub const CONFIG_FILE_NAME: &str = "drillthrough.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Position a drill session starts from.
    pub start_position: String,
    /// JSON content file. The built-in sample graph is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
    pub show_probabilities: bool,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self::default_init()
    }
}

impl DrillConfig {
    /// Read config from a TOML file. A relative `content_path` is taken
    /// relative to the directory holding the config file.
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)
            .map_err(|e| GraphError::Config(format!("{}: {e}", path.display())))?;
        if let (Some(content), Some(dir)) = (config.content_path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        Ok(config)
    }

    /// Like [`DrillConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, GraphError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default_init());
        }
        Self::load(path)
    }

    /// Write config as TOML.
    pub fn save(&self, path: &Path) -> Result<(), GraphError> {
        let text = toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Default config for `drillthrough init`.
    pub fn default_init() -> Self {
        Self {
            start_position: SAMPLE_START.to_string(),
            content_path: None,
            show_probabilities: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = DrillConfig {
            start_position: "mount".into(),
            content_path: Some(PathBuf::from("graphs/guard.json")),
            show_probabilities: false,
        };
        config.save(&path).unwrap();

        let loaded = DrillConfig::load(&path).unwrap();
        assert_eq!(loaded.start_position, "mount");
        assert!(!loaded.show_probabilities);
        assert_eq!(
            loaded.content_path,
            Some(dir.path().join("graphs/guard.json"))
        );
    }

    #[test]
    fn test_relative_content_path_follows_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("other").join("dir");
        std::fs::create_dir_all(&nested).unwrap();
        let path = nested.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "content_path = \"guard.json\"\n").unwrap();

        let config = DrillConfig::load(&path).unwrap();
        assert_eq!(config.content_path, Some(nested.join("guard.json")));
    }

    #[test]
    fn test_absolute_content_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("abs.json");
        let path = dir.path().join("sub").join(CONFIG_FILE_NAME);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        DrillConfig {
            content_path: Some(content.clone()),
            ..DrillConfig::default_init()
        }
        .save(&path)
        .unwrap();
        assert_eq!(DrillConfig::load(&path).unwrap().content_path, Some(content));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DrillConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DrillConfig::default_init());
        assert_eq!(config.start_position, "closed_guard");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "show_probabilities = false\n").unwrap();
        let config = DrillConfig::load(&path).unwrap();
        assert_eq!(config.start_position, "closed_guard");
        assert!(!config.show_probabilities);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "start_position = [").unwrap();
        assert!(matches!(
            DrillConfig::load(&path),
            Err(GraphError::Config(_))
        ));
    }
}
