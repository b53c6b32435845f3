//! Console output formatter for consultation results

use colored::Colorize;
use council_domain::{ConsultationReport, ProviderStatus, RoundResult};
use serde_json::json;

const RULE_WIDTH: usize = 60;

/// Formats consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One round: answers first, then failures, each in provider key order
    pub fn format_round(result: &RoundResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("ROUND {}", result.round)));

        for (_, name, text) in result.successes() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("--- {} ---", name).yellow().bold(),
                text
            ));
        }

        for (_, name, reason) in result.failures() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("--- {} (ERROR) ---", name).red().bold(),
                reason
            ));
        }

        output
    }

    /// Closing banner plus the providers that could not take part
    pub fn format_summary(report: &ConsultationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("CONSULTATION COMPLETE"));

        if !report.unavailable.is_empty() {
            let keys: Vec<_> = report.unavailable.iter().map(|k| k.as_str()).collect();
            output.push_str(&format!(
                "{} {}\n",
                "Unavailable agents:".dimmed(),
                keys.join(", ")
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(report: &ConsultationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// `{"error": "<message>"}`, pretty-printed
    pub fn format_error_json(message: &str) -> String {
        serde_json::to_string_pretty(&json!({ "error": message }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// `--list-agents` output
    pub fn format_status_listing(statuses: &[ProviderStatus]) -> String {
        let mut output = format!("{}\n", "Available AI Agents:".bold());

        for status in statuses {
            let label = format!("[{}]", status.reason);
            let label = if status.available {
                label.green()
            } else {
                label.red()
            };
            output.push_str(&format!("  {}: {} {}\n", status.key, status.name, label));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(RULE_WIDTH);
        format!("\n{}\n{}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }
}
