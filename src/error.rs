use std::path::PathBuf;
use thiserror::Error;

/// Exit status for input errors (sysexits `EX_DATAERR`)
pub const EXIT_INPUT_ERROR: i32 = 66;

/// Exit status for any other failure
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no build directories exist! Tried searching for {}", display_paths(.tried))]
    NoBuildDirectory { tried: Vec<PathBuf> },

    #[error("unable to deduce game name from {}: no file with extension '{extension}'", .dir.display())]
    NameDeductionFailed { dir: PathBuf, extension: String },

    #[error("expected build file is missing: {}", .path.display())]
    MutationTargetMissing { path: PathBuf },

    /// `member` is `None` when creating or finishing the archive itself failed
    #[error("failed to {} {}: {source}", packaging_action(.member), .archive.display())]
    ArchivePackagingFailed {
        archive: PathBuf,
        member: Option<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration in {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("containing directory not found: {}", .0.display())]
    ContainingDirNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error stems from the supplied build tree or configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::NoBuildDirectory { .. }
                | Error::NameDeductionFailed { .. }
                | Error::ConfigNotFound(_)
                | Error::InvalidConfig { .. }
                | Error::ContainingDirNotFound(_)
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            EXIT_INPUT_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

fn packaging_action(member: &Option<String>) -> String {
    match member {
        Some(member) => format!("package '{}' into", member),
        None => "write".to_string(),
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
