use crate::config::Config;
use crate::context::Context;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Web,
}

impl Platform {
    /// All platforms in name-deduction priority order, which is also the
    /// order archives are built in
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::Web];

    /// Label used both as the build folder name and in the archive name
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::Web => "Web",
        }
    }

    /// Marker extension identifying the file the game name is taken from
    pub fn default_marker(&self) -> &'static str {
        match self {
            Platform::Windows | Platform::Linux => ".pck",
            Platform::Web => ".png",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One candidate platform build folder inside the containing directory
#[derive(Debug, Clone)]
pub struct PlatformTarget {
    pub platform: Platform,
    pub directory: PathBuf,
    pub marker_extension: String,
}

impl PlatformTarget {
    pub fn exists(&self) -> bool {
        self.directory.is_dir()
    }
}

/// Build the fixed set of candidate targets in priority order
pub fn targets(ctx: &Context, config: &Config) -> Vec<PlatformTarget> {
    Platform::ALL
        .iter()
        .map(|&platform| PlatformTarget {
            platform,
            directory: ctx.root.join(platform.label()),
            marker_extension: config.markers.for_platform(platform).to_string(),
        })
        .collect()
}

/// Look up the target for a platform
pub fn find(targets: &[PlatformTarget], platform: Platform) -> Option<&PlatformTarget> {
    targets.iter().find(|t| t.platform == platform)
}
