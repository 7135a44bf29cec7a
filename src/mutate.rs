use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::Path;

/// Name the web export's entry page must have to be served
pub const WEB_INDEX: &str = "index.html";

/// What a build correction did on this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The correction was already in place
    AlreadyApplied,
    /// The platform folder is absent
    NotApplicable,
}

/// Rename `<name>.html` to `index.html` in the web build.
///
/// An existing `index.html` is never overwritten. A missing source page with
/// no `index.html` means the export is incomplete.
pub fn rename_web_index(web_dir: &Path, name: &str) -> Result<Outcome> {
    if !web_dir.is_dir() {
        return Ok(Outcome::NotApplicable);
    }

    let index = web_dir.join(WEB_INDEX);
    if index.exists() {
        return Ok(Outcome::AlreadyApplied);
    }

    let source = web_dir.join(format!("{}.html", name));
    if !source.is_file() {
        return Err(Error::MutationTargetMissing { path: source });
    }

    fs::rename(&source, &index).map_err(|e| Error::Rename {
        from: source.clone(),
        to: index.clone(),
        source: e,
    })?;
    log::debug!("renamed {} to {}", source.display(), index.display());
    Ok(Outcome::Applied)
}

/// Delete the debug console executable from the Windows build
pub fn remove_console_executable(windows_dir: &Path, name: &str, suffix: &str) -> Result<Outcome> {
    if !windows_dir.is_dir() {
        return Ok(Outcome::NotApplicable);
    }

    let console = windows_dir.join(format!("{}{}", name, suffix));
    if !console.is_file() {
        return Ok(Outcome::AlreadyApplied);
    }

    fs::remove_file(&console).map_err(|e| Error::Remove {
        path: console.clone(),
        source: e,
    })?;
    log::debug!("removed {}", console.display());
    Ok(Outcome::Applied)
}
