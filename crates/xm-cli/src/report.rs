//! Check outcomes and their human and JSON renderings.
//!
//! stdout carries the rendered report; log events stay on stderr.

use serde::Serialize;
use std::path::Path;
use xm_descriptor::{Descriptor, DescriptorError};

use crate::exit_codes::ExitCode;

/// Outcome of checking a single descriptor file.
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    /// Path as given on the command line.
    pub path: String,

    /// True when the descriptor parsed cleanly.
    pub valid: bool,

    /// Number of additions the descriptor carries (valid files only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,

    /// Load failure rendering (failed files only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    exit_code: ExitCode,
}

impl FileOutcome {
    pub fn ok(path: &Path, descriptor: &Descriptor) -> Self {
        FileOutcome {
            path: path.display().to_string(),
            valid: true,
            entries: Some(descriptor.entry_count()),
            error: None,
            exit_code: ExitCode::Clean,
        }
    }

    pub fn failed(path: &Path, err: &DescriptorError) -> Self {
        FileOutcome {
            path: path.display().to_string(),
            valid: false,
            entries: None,
            error: Some(err.to_string()),
            exit_code: ExitCode::from_error(err),
        }
    }

    /// One `✓`/`✗` line for this outcome.
    pub fn render_human(&self, use_color: bool) -> String {
        let (green, red, reset) = if use_color {
            ("\x1b[32m", "\x1b[31m", "\x1b[0m")
        } else {
            ("", "", "")
        };

        match &self.error {
            None => format!("{green}✓{reset} {}", self.path),
            Some(error) => format!("{red}✗{reset} {}: {}", self.path, error),
        }
    }
}

/// Totals for a `check` invocation.
#[derive(Debug, Default, Serialize)]
struct CheckSummary {
    checked: usize,
    valid: usize,
    invalid: usize,
}

/// Aggregated outcomes for a `check` invocation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    files: Vec<FileOutcome>,
    summary: CheckSummary,
}

impl CheckReport {
    pub fn new() -> Self {
        CheckReport {
            files: Vec::new(),
            summary: CheckSummary::default(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.summary.checked += 1;
        if outcome.valid {
            self.summary.valid += 1;
        } else {
            self.summary.invalid += 1;
        }
        self.files.push(outcome);
    }

    /// Worst exit code across all checked files.
    pub fn exit_code(&self) -> ExitCode {
        self.files
            .iter()
            .fold(ExitCode::Clean, |acc, outcome| acc.worst(outcome.exit_code))
    }

    /// Per-file lines followed by a summary line.
    pub fn render_human(&self, use_color: bool) -> String {
        let (green, red, reset) = if use_color {
            ("\x1b[32m", "\x1b[31m", "\x1b[0m")
        } else {
            ("", "", "")
        };

        let mut output = String::new();
        for outcome in &self.files {
            output.push_str(&outcome.render_human(use_color));
            output.push('\n');
        }

        if self.summary.invalid == 0 {
            output.push_str(&format!(
                "{green}✓{reset} All {} descriptors valid\n",
                self.summary.checked
            ));
        } else {
            output.push_str(&format!(
                "{red}✗{reset} {} of {} descriptors invalid\n",
                self.summary.invalid, self.summary.checked
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use xm_descriptor::load_from_str;

    fn valid_outcome(path: &str) -> FileOutcome {
        let descriptor = load_from_str("base", r#"{"libs": ["libz.dylib"]}"#).unwrap();
        FileOutcome::ok(Path::new(path), &descriptor)
    }

    fn missing_outcome(path: &str) -> FileOutcome {
        let err = DescriptorError::NotFound {
            path: PathBuf::from(path),
        };
        FileOutcome::failed(Path::new(path), &err)
    }

    #[test]
    fn test_outcome_render_human_ok() {
        let line = valid_outcome("a.json").render_human(false);
        assert_eq!(line, "✓ a.json");
    }

    #[test]
    fn test_outcome_render_human_failed() {
        let line = missing_outcome("b.json").render_human(false);
        assert!(line.starts_with("✗ b.json: "));
        assert!(line.contains("not found"));
    }

    #[test]
    fn test_outcome_render_human_color() {
        let line = valid_outcome("a.json").render_human(true);
        assert!(line.contains("\x1b[32m"));
        assert!(line.contains("\x1b[0m"));
    }

    #[test]
    fn test_report_exit_code_worst_wins() {
        let mut report = CheckReport::new();
        report.push(valid_outcome("a.json"));
        assert_eq!(report.exit_code(), ExitCode::Clean);

        report.push(missing_outcome("b.json"));
        assert_eq!(report.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_report_summary_counts() {
        let mut report = CheckReport::new();
        report.push(valid_outcome("a.json"));
        report.push(missing_outcome("b.json"));
        report.push(valid_outcome("c.json"));

        assert_eq!(report.summary.checked, 3);
        assert_eq!(report.summary.valid, 2);
        assert_eq!(report.summary.invalid, 1);
    }

    #[test]
    fn test_report_render_human_all_valid() {
        let mut report = CheckReport::new();
        report.push(valid_outcome("a.json"));
        report.push(valid_outcome("b.json"));

        let text = report.render_human(false);
        assert!(text.contains("✓ a.json\n"));
        assert!(text.ends_with("✓ All 2 descriptors valid\n"));
    }

    #[test]
    fn test_report_render_human_with_failures() {
        let mut report = CheckReport::new();
        report.push(valid_outcome("a.json"));
        report.push(missing_outcome("b.json"));

        let text = report.render_human(false);
        assert!(text.ends_with("✗ 1 of 2 descriptors invalid\n"));
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = CheckReport::new();
        report.push(valid_outcome("a.json"));
        report.push(missing_outcome("b.json"));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["summary"]["checked"], 2);
        assert_eq!(value["files"][0]["valid"], true);
        assert_eq!(value["files"][0]["entries"], 1);
        assert!(value["files"][0].get("error").is_none());
        assert_eq!(value["files"][1]["valid"], false);
        assert!(value["files"][1]["error"]
            .as_str()
            .unwrap()
            .contains("not found"));
    }
}
