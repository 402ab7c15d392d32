//! Colored console output for a completed run.

use super::summary::ScanSummary;
use super::ReportPaths;
use crate::types::ScriptRecord;
use colored::Colorize;

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    verbose: bool,
    quiet: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print the completion report.
    pub fn print_complete(&self, records: &[ScriptRecord], paths: &ReportPaths) {
        if self.quiet {
            return;
        }

        let summary = ScanSummary::from_records(records);

        println!("{} ScriptMap complete.", "[*]".bright_blue());
        println!("  Scripts detected: {}", summary.total.to_string().bright_white());
        println!(
            "  First-party:      {}",
            summary.first_party.to_string().green()
        );
        println!(
            "  Third-party:      {}",
            format_third_party(summary.third_party)
        );
        println!("  Summary report:   {}", paths.summary.display());
        println!("  Inventory table:  {}", paths.inventory.display());
        if let Some(ref json) = paths.json {
            println!("  JSON export:      {}", json.display());
        }

        if self.verbose {
            for record in records {
                self.print_record(record);
            }
        }
    }

    /// Print one classified record.
    pub fn print_record(&self, record: &ScriptRecord) {
        if self.quiet {
            return;
        }

        let party = if record.first_party {
            record.party_label().green()
        } else {
            record.party_label().yellow()
        };

        println!(
            "{} {} [{}] {}",
            "[.]".dimmed(),
            record.domain_label().bright_white(),
            record.category.as_str().bright_cyan(),
            party
        );
        for note in &record.notes {
            println!("    +-- {}", note.dimmed());
        }
    }
}

/// Format the third-party count, highlighted when non-zero.
fn format_third_party(count: usize) -> colored::ColoredString {
    if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().yellow().bold()
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_output_creation() {
        let output = ConsoleOutput::new(true, false);
        assert!(output.verbose);
        assert!(!output.quiet);
    }

    #[test]
    fn test_format_third_party() {
        colored::control::set_override(false);
        assert_eq!(format_third_party(0).to_string(), "0");
        assert_eq!(format_third_party(7).to_string(), "7");
    }
}
