//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::FileReport;
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

    /// Serialize any value with the configured layout
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.unwrap_or_else(|_| "null".to_string())
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &FileReport) -> String {
        self.render(result)
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, results: &[FileReport]) -> String {
        self.render(results)
    }

    /// Report with summary
    pub fn report_with_summary(&self, results: &[FileReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score,
                average_grade: stats.average_grade.to_string(),
                total_suggestions: stats.total_suggestions,
            },
        };
        self.render(&output)
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
    results: &'a [FileReport],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_analyzed: usize,
    average_score: u8,
    average_grade: String,
    total_suggestions: usize,
}
