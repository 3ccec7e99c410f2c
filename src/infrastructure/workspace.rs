//! Diary workspace discovery and layout

use crate::error::{HolterError, Result};
use crate::infrastructure::config::HOLTER_DIR;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory containing a `.holter/` directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root.
    /// First checks HOLTER_ROOT environment variable, then walks up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("HOLTER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_holter_dir(&path) {
                return Ok(Workspace::new(path));
            }
            return Err(HolterError::Config(format!(
                "HOLTER_ROOT is set to '{}' but no .holter directory found. \
                Run 'holter init' in that directory or unset HOLTER_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_holter_dir(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .ok_or_else(|| HolterError::NotHolterDirectory(start.to_path_buf()))
    }

    fn has_holter_dir(path: &Path) -> bool {
        path.join(HOLTER_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn holter_dir(&self) -> PathBuf {
        self.root.join(HOLTER_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_holter_dir(&self.root)
    }

    /// Create the .holter directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let holter_dir = self.holter_dir();

        if holter_dir.exists() {
            return Err(HolterError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&holter_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Key-value store kept inside .holter
    pub fn store(&self) -> FileSystemStore {
        FileSystemStore::new(self.holter_dir())
    }
}
