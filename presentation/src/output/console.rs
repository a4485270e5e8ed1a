//! Console output formatter for campaign summaries

use chorus_application::{CampaignSummary, WorkerOutcome};
use colored::Colorize;

/// Formats campaign summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete campaign summary
    pub fn format(summary: &CampaignSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Campaign Results ===".cyan().bold()));

        for report in &summary.reports {
            let status = match report.outcome {
                Some(WorkerOutcome::Completed) => "completed".green().to_string(),
                Some(WorkerOutcome::CredentialsExhausted) => {
                    "credentials exhausted".yellow().to_string()
                }
                None => "worker failed".red().to_string(),
            };
            output.push_str(&format!(
                "  {} {}: {} ({} new records)\n",
                "*".cyan(),
                report.adapter.bold(),
                status,
                report.records_merged
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Records in output:".bold(),
            summary.total_records
        ));

        output
    }

    /// One-line summary
    pub fn format_short(summary: &CampaignSummary) -> String {
        let merged: usize = summary.reports.iter().map(|r| r.records_merged).sum();
        format!(
            "{} adapters, {} new records, {} total",
            summary.reports.len(),
            merged,
            summary.total_records
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_application::AdapterReport;

    fn summary() -> CampaignSummary {
        CampaignSummary {
            reports: vec![
                AdapterReport {
                    adapter: "A".to_string(),
                    outcome: Some(WorkerOutcome::Completed),
                    records_merged: 6,
                },
                AdapterReport {
                    adapter: "B".to_string(),
                    outcome: Some(WorkerOutcome::CredentialsExhausted),
                    records_merged: 2,
                },
            ],
            total_records: 20,
        }
    }

    #[test]
    fn test_format_lists_every_adapter() {
        let text = ConsoleFormatter::format(&summary());
        assert!(text.contains("A"));
        assert!(text.contains("B"));
        assert!(text.contains("6 new records"));
        assert!(text.contains("20"));
    }

    #[test]
    fn test_format_short() {
        assert_eq!(
            ConsoleFormatter::format_short(&summary()),
            "2 adapters, 8 new records, 20 total"
        );
    }
}
