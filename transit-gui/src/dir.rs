use std::path::{Path, PathBuf};

use crate::config::DEFAULT_FILE_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct TransitDirectory(PathBuf);

impl TransitDirectory {
    pub fn new(p: PathBuf) -> Self {
        TransitDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(TransitDirectory::new)
    }
}

impl TransitDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(self.0.as_path())?;
        Ok(())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_file(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
}

/// Get the absolute path to the transit configuration folder.
///
/// This a "Transit" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.transit`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".transit");

        #[cfg(not(target_os = "linux"))]
        path.push("Transit");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}
