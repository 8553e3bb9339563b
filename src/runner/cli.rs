use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Verify that a module sits in a `src/main/python` layout.
///
/// Exits silently when every directory invariant holds.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "srclayout", version, about, long_about = None)]
pub struct Cli {
    /// Seed module file to resolve from instead of the built-in one
    #[arg(short, long, value_name = "PATH")]
    pub module: Option<PathBuf>,

    /// Print the resolved directories as NAME=path lines
    #[arg(short, long)]
    pub print: bool,

    /// Print the resolved directories as JSON (implies --print)
    #[arg(long)]
    pub json: bool,

    /// Report every violated invariant, not just the first
    #[arg(long, conflicts_with = "no_check")]
    pub all: bool,

    /// Resolve only, skip the invariant check
    #[arg(long)]
    pub no_check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn wants_output(&self) -> bool {
        self.print || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_plain_check() {
        let cli = Cli::try_parse_from(["srclayout"]).unwrap();
        assert_eq!(cli, Cli::default());
        assert!(!cli.wants_output());
    }

    #[test]
    fn parses_module_and_flags() {
        let cli =
            Cli::try_parse_from(["srclayout", "-m", "src/main/python/constants.py", "--json", "-vv"])
                .unwrap();
        assert_eq!(cli.module, Some(PathBuf::from("src/main/python/constants.py")));
        assert!(cli.json);
        assert!(cli.wants_output());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn all_conflicts_with_no_check() {
        let err = Cli::try_parse_from(["srclayout", "--all", "--no-check"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
