use crate::error::AppError;
use std::fs;
use std::path::PathBuf;

/// Plain-text file holding the last version that was fully written to disk.
#[derive(Debug, Clone)]
pub struct VersionMarker {
    path: PathBuf,
}

impl VersionMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionMarker { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the stored version, or an empty string after creating an empty marker.
    pub fn load_or_create(&self) -> Result<String, AppError> {
        if !self.path.exists() {
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
            }
            fs::write(&self.path, "").map_err(|e| AppError::io(&self.path, e))?;
            return Ok(String::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| AppError::io(&self.path, e))?;
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }

    pub fn store(&self, version: &str) -> Result<(), AppError> {
        fs::write(&self.path, version).map_err(|e| AppError::io(&self.path, e))
    }
}
