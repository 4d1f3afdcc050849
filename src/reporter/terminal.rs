use colored::Colorize;

use crate::aggregator::{IssueRecord, RunSummary};
use crate::reporter::Reporter;
use crate::rules::FlowScanResult;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_label(&self, severity: &str) -> colored::ColoredString {
        let label = format!("[{severity}]");
        match severity {
            "error" => label.red().bold(),
            "warning" => label.yellow(),
            "note" => label.cyan(),
            _ => label.normal(),
        }
    }

    fn flow_header(&self, flow_name: &str, results: &[FlowScanResult]) -> String {
        // Recover type/path metadata by display-name lookup.
        match results.iter().find(|r| r.flow_name == flow_name) {
            Some(result) => format!(
                "{} ({})  {}",
                result.flow_label.bold(),
                result.flow_type,
                result.source_path.display().to_string().dimmed()
            ),
            None => flow_name.bold().to_string(),
        }
    }

    fn format_issue(&self, issue: &IssueRecord) -> String {
        let mut line = format!(
            "  {} {}: {} ({})",
            self.severity_label(issue.severity.as_str()),
            issue.rule.bold(),
            issue.name,
            issue.element_type
        );
        if let Some(detail) = &issue.detail {
            line.push_str(&format!(" — {detail}"));
        }
        if self.verbose {
            line.push_str(&format!("\n      {}", issue.rule_description.dimmed()));
        }
        line
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, summary: &RunSummary, results: &[FlowScanResult]) -> String {
        let mut output = String::new();

        if summary.issues.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "✓".green().bold(),
                format!(
                    "No issues found in {} flow{} scanned.",
                    summary.flows_number,
                    if summary.flows_number == 1 { "" } else { "s" }
                )
                .green()
            ));
            return output;
        }

        // One block per flow, in first-seen issue order.
        let mut flow_order: Vec<&str> = Vec::new();
        for issue in &summary.issues {
            if !flow_order.contains(&issue.flow_name.as_str()) {
                flow_order.push(&issue.flow_name);
            }
        }

        for flow_name in flow_order {
            output.push_str(&self.flow_header(flow_name, results));
            output.push('\n');
            for issue in summary.issues.iter().filter(|i| i.flow_name == flow_name) {
                output.push_str(&self.format_issue(issue));
                output.push('\n');
            }
            output.push('\n');
        }

        output.push_str(&format!("{}\n", summary.message.bold()));
        for (severity, count) in summary.tally().iter() {
            output.push_str(&format!(
                "  {} {}\n",
                self.severity_label(severity.as_str()),
                count
            ));
        }

        output
    }
}
