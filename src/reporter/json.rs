//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::ContentReport;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single document as JSON
    pub fn report(&self, report: &ContentReport) -> String {
        self.render(report, "{}")
    }

    /// Report multiple documents as JSON array
    pub fn report_many(&self, reports: &[ContentReport]) -> String {
        self.render(reports, "[]")
    }

    /// Report with summary
    pub fn report_with_summary(&self, reports: &[ContentReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: reports,
            summary: stats,
        };
        self.render(&output, "{}")
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|e| {
            log::error!("failed to serialize report: {}", e);
            fallback.to_string()
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [ContentReport],
    summary: &'a AggregateStats,
}
