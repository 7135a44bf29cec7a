use crate::error::Error;
use crate::platform::PlatformTarget;
use crate::result::Result;
use std::fs;

/// Deduce the game name from the highest priority build folder present.
///
/// Only the chosen folder is listed. The first file (by name) ending
/// in the platform's marker extension provides the name, extension stripped.
pub fn resolve(candidates: &[PlatformTarget]) -> Result<String> {
    let target = candidates
        .iter()
        .find(|t| t.exists())
        .ok_or_else(|| Error::NoBuildDirectory {
            tried: candidates.iter().map(|t| t.directory.clone()).collect(),
        })?;

    log::debug!("deducing game name from {} build", target.platform);

    let read_dir_failed = |source| Error::ReadDir {
        path: target.directory.clone(),
        source,
    };

    // Symlinks to files count, like they do when archiving
    let mut names = Vec::new();
    for entry in fs::read_dir(&target.directory).map_err(read_dir_failed)? {
        let entry = entry.map_err(read_dir_failed)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();

    names
        .iter()
        .find_map(|name| {
            name.strip_suffix(target.marker_extension.as_str())
                .filter(|stem| !stem.is_empty())
        })
        .map(str::to_string)
        .ok_or_else(|| Error::NameDeductionFailed {
            dir: target.directory.clone(),
            extension: target.marker_extension.clone(),
        })
}
