use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Make the containing directory absolute so messages and archive paths
/// are unambiguous
pub fn containing_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::ContainingDirNotFound(path.to_path_buf()));
    }

    Ok(std::path::absolute(path)?)
}
