/*!
 * Configuration handling for sls
 */

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

const VERSION_TEXT: &str = concat!(
    "(SuperUtils) ",
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (C) 2024 ",
    env!("CARGO_PKG_AUTHORS"),
);

const AFTER_HELP: &str = "\
This command is part of the SuperUtils collection (sls - super ls)
Copyright (C) 2024 vh8t
Author: vh8t
GitHub: https://github.com/vh8t
Website: https://vh8t.xyz";

/// Command-line arguments for sls
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "sls",
    version = VERSION_TEXT,
    about = "List information about file (the current directory by default)",
    override_usage = "sls [flags] [file]",
    after_help = AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// directory/file path (default: current directory)
    #[clap(default_value = ".")]
    pub file: String,

    /// show hidden files
    #[clap(short = 'a', long = "all")]
    pub all: bool,

    /// print filesize in human-readable format
    #[clap(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// exit with a nonzero status when the listing fails
    #[clap(long)]
    pub strict: bool,

    /// print shell completions and exit
    #[clap(long = "generate", value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,

    /// show this help message and exit
    #[clap(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// output version information and exit
    #[clap(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory or file to list
    pub target: PathBuf,

    /// Include entries whose name starts with `.`
    pub show_hidden: bool,

    /// Humanize the size column
    pub human_readable: bool,

    /// Map listing failures to nonzero exit codes
    pub strict_exit: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target: PathBuf::from(args.file),
            show_hidden: args.all,
            human_readable: args.human_readable,
            strict_exit: args.strict,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            show_hidden: false,
            human_readable: false,
            strict_exit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_the_current_directory() {
        let config = Config::from_args(Args::try_parse_from(["sls"]).unwrap());
        assert_eq!(config.target, PathBuf::from("."));
        assert!(!config.show_hidden);
        assert!(!config.human_readable);
        assert!(!config.strict_exit);
    }

    #[test]
    fn short_and_long_flags() {
        let args = Args::try_parse_from(["sls", "-a", "-h", "/tmp"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.target, PathBuf::from("/tmp"));
        assert!(config.show_hidden);
        assert!(config.human_readable);

        let args = Args::try_parse_from(["sls", "--all", "--human-readable", "--strict"]).unwrap();
        let config = Config::from_args(args);
        assert!(config.show_hidden && config.human_readable && config.strict_exit);
    }

    #[test]
    fn combined_short_flags() {
        let args = Args::try_parse_from(["sls", "-ah"]).unwrap();
        assert!(args.all && args.human_readable);
    }

    #[test]
    fn help_and_version_exit_successfully() {
        let err = Args::try_parse_from(["sls", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);

        let err = Args::try_parse_from(["sls", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn help_carries_the_collection_footer() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("SuperUtils collection (sls - super ls)"));
        assert!(help.contains("Copyright (C) 2024 vh8t"));
        assert!(help.contains("Author: vh8t"));
        assert!(help.contains("GitHub: https://github.com/vh8t"));
        assert!(help.contains("Website: https://vh8t.xyz"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["sls", "--recursive"]).is_err());
    }
}
