//! End-of-run summary printing.

use crate::config::SummaryFormat;
use crate::FixReport;

/// Renders the summary for `report`, or `None` when nothing should be printed.
pub fn render_summary(report: &FixReport, format: &SummaryFormat) -> Option<String> {
    match format {
        SummaryFormat::None => None,
        SummaryFormat::Json => {
            Some(serde_json::to_string(report).unwrap_or_else(|_| "{}".into()))
        }
        SummaryFormat::Plain => {
            let mut out = String::new();
            for function in &report.commented {
                out.push_str(&format!(
                    "Commented out {} (lines {}-{})\n",
                    function.name, function.line, function.closing_line
                ));
            }
            let count = report.commented.len();
            let verb = if report.written {
                "updated"
            } else if report.dry_run {
                "dry run, not written"
            } else {
                "unchanged"
            };
            out.push_str(&format!(
                "{} definition{} commented out in {} ({} lines, {})",
                count,
                if count == 1 { "" } else { "s" },
                report.file.display(),
                report.total_lines,
                verb
            ));
            if !report.missing.is_empty() {
                out.push_str(&format!("\nNot found: {}", report.missing.join(", ")));
            }
            Some(out)
        }
    }
}

/// Prints the summary for `report` to stdout.
pub fn print_summary(report: &FixReport, format: &SummaryFormat) {
    if let Some(text) = render_summary(report, format) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commenter::CommentedFunction;
    use std::path::PathBuf;

    fn report() -> FixReport {
        FixReport {
            file: PathBuf::from("out.js"),
            total_lines: 12,
            commented: vec![CommentedFunction {
                name: "_glClear".to_string(),
                line: 3,
                closing_line: 5,
            }],
            missing: vec!["_glFlush".to_string()],
            dry_run: false,
            written: true,
        }
    }

    #[test]
    fn test_plain_summary() {
        let text = render_summary(&report(), &SummaryFormat::Plain).expect("plain prints");
        assert_eq!(
            text,
            "Commented out _glClear (lines 3-5)\n\
             1 definition commented out in out.js (12 lines, updated)\n\
             Not found: _glFlush"
        );
    }

    #[test]
    fn test_plain_summary_dry_run() {
        let mut report = report();
        report.dry_run = true;
        report.written = false;
        report.missing.clear();
        let text = render_summary(&report, &SummaryFormat::Plain).expect("plain prints");
        assert!(text.ends_with("(12 lines, dry run, not written)"));
    }

    #[test]
    fn test_json_summary_is_parseable() {
        let text = render_summary(&report(), &SummaryFormat::Json).expect("json prints");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(value["total_lines"], 12);
        assert_eq!(value["commented"][0]["name"], "_glClear");
        assert_eq!(value["commented"][0]["closing_line"], 5);
        assert_eq!(value["missing"][0], "_glFlush");
        assert_eq!(value["written"], true);
    }

    #[test]
    fn test_none_prints_nothing() {
        assert!(render_summary(&report(), &SummaryFormat::None).is_none());
    }
}
