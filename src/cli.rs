//! CLI argument parsing module for nuget-drift

use crate::output::{OutputConfig, Verbosity};
use crate::reconcile::PrefixFilter;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Detects NuGet packages referenced at inconsistent versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nuget-drift",
    version,
    about = "Report NuGet packages referenced at more than one version across packages.config files"
)]
pub struct CliArgs {
    /// Root directory to scan recursively for packages.config files
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Only report packages whose id starts with one of these prefixes (comma separated)
    #[arg(short, long, value_delimiter = ',', action = ArgAction::Append)]
    pub prefixes: Vec<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output and debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no report, exit code only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Exit code policy
    /// Exit with 0 even when conflicts are found
    #[arg(long)]
    pub report_only: bool,
}

impl CliArgs {
    /// Build the prefix filter from --prefixes
    pub fn prefix_filter(&self) -> PrefixFilter {
        PrefixFilter::new().with_prefixes(&self.prefixes)
    }

    /// Verbosity implied by --quiet and --verbose (quiet wins)
    pub fn verbosity(&self) -> Verbosity {
        self.output_config().verbosity
    }

    /// Output configuration from CLI flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.json, self.verbose, self.quiet, self.no_color)
    }

    /// Whether to draw a progress spinner on stderr
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json && !self.verbose
    }
}
