//! Config management use case

use crate::error::{HolterError, Result};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

/// Service for managing diary configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(HolterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_dir, editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(HolterError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = PathBuf::from(value);
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(HolterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(HolterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_dir, editor",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let workspace = init(temp.path()).unwrap();
        (temp, ConfigService::new(workspace))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("export_dir").unwrap(), ".");
        assert!(!service.get("editor").unwrap().is_empty());
        assert!(service.get("created").unwrap().contains('T'));
    }

    #[test]
    fn test_set_export_dir() {
        let (_temp, service) = service();
        service.set("export_dir", "exports").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "exports");
    }

    #[test]
    fn test_set_editor() {
        let (_temp, service) = service();
        service.set("editor", "vim -n").unwrap();
        assert_eq!(service.list().unwrap().editor, "vim -n");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        let err = service.set("created", "2020-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(matches!(service.get("mode"), Err(HolterError::Config(_))));
        assert!(service.set("mode", "x").is_err());
    }

    #[test]
    fn test_empty_export_dir_rejected() {
        let (_temp, service) = service();
        assert!(service.set("export_dir", " ").is_err());
    }
}
