//! Configuration management

use crate::error::{HolterError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-workspace directory holding config and storage
pub const HOLTER_DIR: &str = ".holter";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory CSV exports are written to, relative to the workspace root
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    pub editor: String,
    pub created: DateTime<Utc>,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            export_dir: default_export_dir(),
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .holter/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(HOLTER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HolterError::NotHolterDirectory(path.to_path_buf())
            } else {
                HolterError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .holter/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let holter_dir = path.join(HOLTER_DIR);
        let config_path = holter_dir.join("config.toml");

        if !holter_dir.exists() {
            fs::create_dir(&holter_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute export directory for a workspace rooted at `root`
    pub fn resolve_export_dir(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.export_dir = PathBuf::from("exports");

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".holter/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.export_dir, config.export_dir);
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            HolterError::NotHolterDirectory(_) => {}
            other => panic!("Expected NotHolterDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_without_export_dir_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(HOLTER_DIR)).unwrap();
        fs::write(
            temp.path().join(".holter/config.toml"),
            "editor = \"vim\"\ncreated = \"2024-01-05T10:00:00Z\"\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.editor, "vim");
    }

    #[test]
    fn test_load_corrupt_config_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(HOLTER_DIR)).unwrap();
        fs::write(temp.path().join(".holter/config.toml"), "editor = [").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(HolterError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_resolve_export_dir() {
        let root = Path::new("/diary");
        let mut config = Config::new();
        assert_eq!(config.resolve_export_dir(root), PathBuf::from("/diary/."));

        config.export_dir = PathBuf::from("out");
        assert_eq!(config.resolve_export_dir(root), PathBuf::from("/diary/out"));
    }
}
