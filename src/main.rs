//! nuget-drift - report NuGet packages referenced at inconsistent versions
//!
//! Scans a directory tree for packages.config files and lists every package
//! whose referenced version differs between projects.
//!
//! Exit codes:
//! - 0: no reportable conflicts (or --report-only)
//! - 1: the scan failed or the command line was invalid
//! - 2: at least one reportable conflict

use clap::Parser;
use nuget_drift::cli::CliArgs;
use nuget_drift::logging;
use nuget_drift::output::{self, create_formatter};
use nuget_drift::reconcile::reconcile;
use nuget_drift::scanner::Scanner;
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit code when conflicts were reported
const CONFLICTS_FOUND: u8 = 2;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // Exit status 2 is reserved for reported conflicts
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };
    logging::init(args.verbose);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("nuget-drift v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.dir.display());
    }

    let config = args.output_config();
    if !config.color {
        colored::control::set_override(false);
    }

    // Nothing reaches stdout until every manifest has been decoded
    let state = Scanner::new(&args.dir)
        .with_progress(args.show_progress())
        .scan()?;
    let reconciled = reconcile(&state);

    let formatter = create_formatter(config);
    let filter = args.prefix_filter();

    let mut stdout = io::stdout().lock();
    let has_problems = output::report(
        &reconciled,
        &filter,
        state.stats(),
        formatter.as_ref(),
        &mut stdout,
    )?;
    stdout.flush()?;

    if has_problems && !args.report_only {
        Ok(ExitCode::from(CONFLICTS_FOUND))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
