//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// ragcheck - Verify a LlamaIndex agentic RAG demo is ready to run.
#[derive(Debug, Default, Parser)]
#[command(name = "ragcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter to query for installed packages
    #[arg(long, env = "RAGCHECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Print the check report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "ragcheck",
            "--project",
            "/srv/demo",
            "--python",
            "/usr/bin/python3",
            "--json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.project, Some(PathBuf::from("/srv/demo")));
        assert_eq!(cli.python, Some(PathBuf::from("/usr/bin/python3")));
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["ragcheck", "run"]).is_err());
    }
}
