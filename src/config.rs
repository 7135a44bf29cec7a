use crate::context::Context;
use crate::error::Error;
use crate::platform::Platform;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the containing directory
pub const CONFIG_FILENAME: &str = "build-zipper.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl Compression {
    pub fn method(&self) -> zip::CompressionMethod {
        match self {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    pub windows: String,
    pub linux: String,
    pub web: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            windows: Platform::Windows.default_marker().to_string(),
            linux: Platform::Linux.default_marker().to_string(),
            web: Platform::Web.default_marker().to_string(),
        }
    }
}

impl Markers {
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Linux => &self.linux,
            Platform::Web => &self.web,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub compression: Compression,

    /// Suffix appended to the game name to form the console executable
    pub console_suffix: String,

    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            console_suffix: ".console.exe".to_string(),
            markers: Markers::default(),
        }
    }
}

impl Config {
    /// Load configuration for this run.
    ///
    /// An explicit `--config` file must exist. Without one, `build-zipper.toml`
    /// in the containing directory is used when present, otherwise defaults.
    pub fn load(ctx: &Context) -> Result<Self> {
        match &ctx.config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.clone()));
                }
                Self::load_file(path)
            }
            None => {
                let path = ctx.root.join(CONFIG_FILENAME);
                if path.is_file() {
                    Self::load_file(&path)
                } else {
                    log::debug!("no {} found, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        for platform in Platform::ALL {
            if self.markers.for_platform(platform).is_empty() {
                return Err(invalid(&format!(
                    "marker extension for {} must not be empty",
                    platform
                )));
            }
        }
        if self.console_suffix.is_empty() {
            return Err(invalid("console-suffix must not be empty"));
        }
        Ok(())
    }
}
