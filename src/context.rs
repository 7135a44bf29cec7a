use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Suppress interactive prompts and status messages
    pub silent: bool,

    /// Report every archived member
    pub verbose: bool,

    /// Containing directory holding the platform build folders
    pub root: PathBuf,

    /// Explicit configuration file, if one was given on the command line
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(root: PathBuf, silent: bool) -> Self {
        Self {
            silent,
            verbose: false,
            root,
            config_path: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }
}
