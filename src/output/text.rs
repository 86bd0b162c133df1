//! Text output formatter for human-readable display
//!
//! One block per conflicting package:
//!
//! ```text
//! Package Foo has 2 referenced versions
//! 1.0:
//! 	projA/packages.config
//! 2.0:
//! 	projB/packages.config
//! ```
//!
//! Manifest paths are indented with a tab. A summary line follows the
//! blocks unless output is quiet.

use crate::domain::{ConflictReport, PackageConflict};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_filter(
        &self,
        report: &ConflictReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefixes = if report.is_filtered() {
            report.prefixes.join(", ")
        } else {
            "none (all packages)".to_string()
        };
        if self.color {
            writeln!(writer, "{} {}", "Prefix filter:".dimmed(), prefixes)
        } else {
            writeln!(writer, "Prefix filter: {}", prefixes)
        }
    }

    fn format_summary(
        &self,
        report: &ConflictReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let manifests = plural(report.stats.manifests, "manifest", "manifests");
        let scanned = if self.verbosity == Verbosity::Verbose {
            format!(
                "Scanned {} ({})",
                manifests,
                plural(report.stats.references, "package reference", "package references")
            )
        } else {
            format!("Scanned {}", manifests)
        };

        if !report.has_problems() {
            let verdict = "no version conflicts found";
            return if self.color {
                writeln!(writer, "{}: {}", scanned, verdict.green())
            } else {
                writeln!(writer, "{}: {}", scanned, verdict)
            };
        }

        let verdict = format!(
            "{} with version conflicts",
            plural(report.conflict_count(), "package", "packages")
        );
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}: {}", scanned, verdict.red().bold())
        } else {
            writeln!(writer, "{}: {}", scanned, verdict)
        }
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ConflictReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_filter(report, writer)?;
        }

        for conflict in &report.conflicts {
            self.format_conflict(conflict, writer)?;
        }

        self.format_summary(report, writer)
    }

    fn format_conflict(
        &self,
        conflict: &PackageConflict,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "Package {} has {} referenced versions",
                conflict.id.bold(),
                conflict.version_count().to_string().yellow()
            )?;
        } else {
            writeln!(
                writer,
                "Package {} has {} referenced versions",
                conflict.id,
                conflict.version_count()
            )?;
        }

        for usage in &conflict.versions {
            if self.color {
                writeln!(writer, "{}:", usage.version.cyan())?;
            } else {
                writeln!(writer, "{}:", usage.version)?;
            }
            for manifest in &usage.manifests {
                writeln!(writer, "\t{}", manifest.display())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScanStats, VersionUsage};
    use std::path::PathBuf;

    fn usage(version: &str, manifests: &[&str]) -> VersionUsage {
        VersionUsage {
            version: version.to_string(),
            manifests: manifests.iter().map(PathBuf::from).collect(),
        }
    }

    fn foo_conflict() -> PackageConflict {
        PackageConflict {
            id: "Foo".to_string(),
            versions: vec![
                usage("1.0", &["projA/packages.config"]),
                usage("2.0", &["projB/packages.config", "projC/packages.config"]),
            ],
        }
    }

    fn render(formatter: &TextFormatter, report: &ConflictReport) -> String {
        let mut out = Vec::new();
        formatter.format(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn stats(manifests: usize, references: usize) -> ScanStats {
        ScanStats {
            manifests,
            references,
        }
    }

    #[test]
    fn test_format_conflict_block() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut out = Vec::new();
        formatter.format_conflict(&foo_conflict(), &mut out).unwrap();

        let expected = "Package Foo has 2 referenced versions\n\
                        1.0:\n\
                        \tprojA/packages.config\n\
                        2.0:\n\
                        \tprojB/packages.config\n\
                        \tprojC/packages.config\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_format_report_with_summary() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let report = ConflictReport::new(vec![foo_conflict()]).with_stats(stats(3, 5));

        let output = render(&formatter, &report);
        assert!(output.starts_with("Package Foo has 2 referenced versions\n"));
        assert!(output.ends_with("\nScanned 3 manifests: 1 package with version conflicts\n"));
        assert!(!output.contains("Prefix filter"));
    }

    #[test]
    fn test_format_no_conflicts() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let report = ConflictReport::default().with_stats(stats(1, 4));

        let output = render(&formatter, &report);
        assert_eq!(output, "Scanned 1 manifest: no version conflicts found\n");
    }

    #[test]
    fn test_format_verbose_shows_filter_and_references() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let report = ConflictReport::new(vec![foo_conflict()])
            .with_prefixes(vec!["Foo".to_string(), "Micro".to_string()])
            .with_stats(stats(3, 7));

        let output = render(&formatter, &report);
        assert!(output.starts_with("Prefix filter: Foo, Micro\n"));
        assert!(output.contains("Scanned 3 manifests (7 package references)"));
    }

    #[test]
    fn test_format_verbose_unfiltered() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let output = render(&formatter, &ConflictReport::default());
        assert!(output.contains("Prefix filter: none (all packages)"));
    }

    #[test]
    fn test_format_quiet_writes_nothing() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        let report = ConflictReport::new(vec![foo_conflict()]);
        assert!(render(&formatter, &report).is_empty());
    }

    #[test]
    fn test_format_with_color_keeps_content() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, true);
        let report = ConflictReport::new(vec![foo_conflict()]).with_stats(stats(3, 3));

        let output = render(&formatter, &report);
        assert!(output.contains("Foo"));
        assert!(output.contains("\tprojA/packages.config"));
    }
}
