use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for build-zipper
#[derive(Debug)]
pub struct Args {
    /// Suppress interactive prompts and status messages
    pub silent: bool,

    /// Report every archived file
    pub verbose: bool,

    /// Directory containing the Windows, Linux and Web build folders
    pub path: Option<PathBuf>,

    /// Path to alternative configuration file
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    fn command() -> Command {
        Command::new("build-zipper")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package Windows, Linux and Web game exports into zip archives")
            .arg(
                Arg::new("silent")
                    .short('s')
                    .long("silent")
                    .action(ArgAction::SetTrue)
                    .help("Suppress interactive prompts and status messages")
            )
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .env("BUILD_ZIPPER_PATH")
                    .help("Directory containing the platform build folders (default: current directory)")
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Path to alternative configuration file (default: build-zipper.toml in the containing directory)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("List every file added to an archive")
            )
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            silent: matches.get_flag("silent"),
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            config: matches.get_one::<String>("config").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::from_matches(Args::command().try_get_matches_from(argv).unwrap())
    }

    #[test]
    fn test_silent_flag_forms() {
        assert!(parse(&["build-zipper", "--silent"]).silent);
        assert!(parse(&["build-zipper", "-s"]).silent);
        assert!(!parse(&["build-zipper"]).silent);
    }

    #[test]
    fn test_path_and_config() {
        let args = parse(&["build-zipper", "-p", "exports", "--config", "zip.toml"]);
        assert_eq!(args.path, Some(PathBuf::from("exports")));
        assert_eq!(args.config, Some(PathBuf::from("zip.toml")));
        assert!(!args.verbose);
    }
}
