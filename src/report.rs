//! Boxed plain-text reports printed at the end of a run.

use crate::output::RunSummary;
use std::fmt;

/// Width of the top and bottom border.
pub const BORDER_WIDTH: usize = 50;

const TITLE: &str = "PDF to image conversion";

/// Report for a completed run: input count, output count, output directory.
pub fn success_report(summary: &RunSummary) -> String {
    let lines = [
        format!("Input files     : {}", summary.input_files),
        format!("Output files    : {}", summary.output_files),
        format!("Output directory: {}", summary.output_dir.display()),
    ];
    boxed(&format!("{TITLE}: completed"), &lines)
}

/// Report for a failed run, carrying only the error message.
pub fn failure_report(error: &dyn fmt::Display) -> String {
    let message = error.to_string();
    let lines: Vec<String> = message.lines().map(str::to_string).collect();
    boxed(&format!("{TITLE}: failed"), &lines)
}

fn boxed(heading: &str, body: &[String]) -> String {
    let border = "*".repeat(BORDER_WIDTH);
    let mut lines = vec![border.clone(), "*".into(), format!("* {heading}"), "*".into()];
    lines.extend(body.iter().map(|line| format!("* {line}")));
    lines.push("*".into());
    lines.push(border);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Pdf2ImgError;
    use std::path::PathBuf;

    #[test]
    fn success_report_lists_counts_and_dir() {
        let report = success_report(&RunSummary {
            input_files: 4,
            output_files: 5,
            output_dir: PathBuf::from("/data/in"),
            deleted_inputs: false,
        });
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&"*".repeat(50).as_str()));
        assert_eq!(lines.last(), Some(&"*".repeat(50).as_str()));
        assert!(report.contains("* PDF to image conversion: completed"));
        assert!(report.contains("* Input files     : 4"));
        assert!(report.contains("* Output files    : 5"));
        assert!(report.contains("* Output directory: /data/in"));
    }

    #[test]
    fn box_layout_is_exact() {
        let border = "*".repeat(50);
        let expected = format!("{border}\n*\n* heading\n*\n* one\n* two\n*\n{border}\n");
        assert_eq!(boxed("heading", &["one".into(), "two".into()]), expected);
    }

    #[test]
    fn failure_report_prefixes_every_message_line() {
        let err = Pdf2ImgError::NotADirectory {
            path: "/nope".into(),
        };
        let report = failure_report(&err);
        assert!(report.contains("* PDF to image conversion: failed"));
        assert!(report.contains("* '/nope' is not an existing directory"));
        assert!(report.contains("* Specify a directory that exists."));
        assert!(!report.contains("Input files"));
        for line in report.lines() {
            assert!(line.starts_with('*'), "unboxed line: {line:?}");
        }
    }
}
