use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::errors::UploadError;
use crate::domain::ports::UploadStore;
use crate::domain::validation::is_contained_path;

/// Files uploaded next to records, stored under one root directory.
/// Record paths are relative to the root and never leave it.
pub struct LocalUploads {
    root: PathBuf,
}

impl LocalUploads {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, UploadError> {
        if is_contained_path(path) {
            Ok(self.root.join(Path::new(path)))
        } else {
            Err(UploadError::OutsideRoot(path.to_string()))
        }
    }
}

impl UploadStore for LocalUploads {
    fn remove(&self, path: &str) -> Result<(), UploadError> {
        match std::fs::remove_file(self.resolve(path)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(UploadError::NotFound(path.to_string())),
            Err(e) => Err(UploadError::Io {
                path: path.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
