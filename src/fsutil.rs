use std::path::Path;

use crate::error::{Result, VphysError};

/// Create a directory and any missing parents, like `mkdir -p`.
///
/// An existing directory is not an error. An existing non-directory at
/// `path` is reported as [`VphysError::NotADirectory`].
pub fn mkdir_p(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match std::fs::create_dir_all(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "directory ready");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => {
            if path.exists() && !path.is_dir() {
                Err(VphysError::NotADirectory(path.to_path_buf()))
            } else {
                Err(e.into())
            }
        }
    }
}
