use crate::error::Error;
use crate::result::Result;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// List every regular file below `root` as a `/`-separated path relative to it.
///
/// Entries are visited depth-first and sorted by name at each level, so an
/// unchanged tree always yields the same list. Entries that vanish while the
/// tree is being walked are skipped.
///
/// Symlinks to files are archived as the file they point to. Symlinked
/// directories are not descended into.
pub fn list_files(root: &Path) -> Result<Vec<String>> {
    walk(root, |_| {})
}

/// `visit` sees every entry before it is checked for being a file
fn walk(root: &Path, mut visit: impl FnMut(&Path)) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_vanished(err.io_error()) => {
                log::debug!("skipping vanished entry: {}", err);
                continue;
            }
            Err(err) => {
                return Err(Error::Walk {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    source: err,
                });
            }
        };

        visit(entry.path());

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        files.push(member_name(relative));
    }

    Ok(files)
}

fn is_vanished(err: Option<&io::Error>) -> bool {
    err.is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// Archive member name for a relative path, independent of the host separator
pub fn member_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
