//! Command-line configuration.

use crate::report::{output_base, ReportPaths};
use crate::types::{Result, ScriptMapError};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Classify and map third-party JavaScript dependencies.
///
/// Input should be one script URL or <script> tag per line.
#[derive(Parser, Debug, Clone)]
#[command(name = "scriptmap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  scriptmap scripts.txt --primary-domain example.com")]
pub struct Config {
    /// Input file with one script URL or <script> tag per line ("-" for stdin)
    pub input: PathBuf,

    /// Primary application domain (e.g. example.com) used to distinguish first/third-party
    #[arg(long, env = "SCRIPTMAP_PRIMARY_DOMAIN")]
    pub primary_domain: String,

    /// Prefix for output files
    #[arg(short, long, default_value = "scriptmap")]
    pub output_prefix: String,

    /// Also write the records and summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the summary report to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: no console report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// The primary domain, trimmed. Empty values are rejected.
    pub fn primary_domain(&self) -> Result<String> {
        let domain = self.primary_domain.trim();
        if domain.is_empty() {
            return Err(ScriptMapError::Config(
                "primary domain must not be empty".to_string(),
            ));
        }

        if domain.contains("://") || domain.contains('/') {
            warn!(
                "Primary domain '{}' looks like a URL; expected a bare domain such as example.com",
                domain
            );
        }

        Ok(domain.to_string())
    }

    /// Paths of the reports to write.
    pub fn report_paths(&self) -> Result<ReportPaths> {
        let base = output_base(&self.output_prefix)?;
        Ok(ReportPaths::from_base(&base, self.json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["scriptmap", "scripts.txt", "--primary-domain", "example.com"]);
        assert_eq!(config.input, PathBuf::from("scripts.txt"));
        assert_eq!(config.output_prefix, "scriptmap");
        assert!(!config.json);
        assert!(!config.stdout);

        let paths = config.report_paths().unwrap();
        assert_eq!(paths.summary, PathBuf::from("scriptmap_summary.md"));
        assert_eq!(paths.json, None);
    }

    #[test]
    fn test_output_prefix_and_json() {
        let config = parse(&[
            "scriptmap",
            "-",
            "--primary-domain",
            "example.com",
            "-o",
            "audit.md",
            "--json",
        ]);
        let paths = config.report_paths().unwrap();
        assert_eq!(paths.inventory, PathBuf::from("audit_inventory.md"));
        assert_eq!(paths.json, Some(PathBuf::from("audit_inventory.json")));
    }

    #[test]
    fn test_primary_domain_validation() {
        let config = parse(&["scriptmap", "in.txt", "--primary-domain", "  example.com "]);
        assert_eq!(config.primary_domain().unwrap(), "example.com");

        let config = parse(&["scriptmap", "in.txt", "--primary-domain", "   "]);
        assert!(matches!(
            config.primary_domain(),
            Err(ScriptMapError::Config(_))
        ));
    }
}
