//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Kept out of the core library so
//! msglint can be used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the outcome of a check run.
pub fn print(result: &CommandResult, verbose: bool) {
    if result.issues.is_empty() {
        print_success(result.source_files_checked);
    } else {
        report(&result.issues);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    // User text is quoted, fixed messages are not
    let message = match issue {
        Issue::UnlocalizedAttribute(_) | Issue::UnlocalizedText(_) => {
            format!("\"{}\"", issue.message())
        }
        Issue::MessageExpression(_) | Issue::ParseError(_) => issue.message(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message,
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let (line, col) = (ctx.line(), ctx.col());
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col
            );

            let caret = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            let gutter = "|".blue();
            let _ = writeln!(writer, "{:>width$} {}", "", gutter, width = max_line_width);
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                line.to_string().blue(),
                gutter,
                ctx.source_line,
                width = max_line_width
            );

            // col is 1-based; pad by display width so CJK and emoji line up
            let prefix: String = ctx.source_line.chars().take(col.saturating_sub(1)).collect();
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                gutter,
                "",
                caret,
                width = max_line_width,
                padding = UnicodeWidthStr::width(prefix.as_str())
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
            "problem"
        } else {
            "problems"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SourceContext, SourceLocation};
    use crate::issues::{
        MessageExpressionIssue, ParseErrorIssue, UnlocalizedAttributeIssue, UnlocalizedTextIssue,
    };

    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(issues: &[Issue]) -> String {
        let mut output = Vec::new();
        report_to(issues, &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn text_issue(file: &str, line: usize, col: usize, text: &str) -> Issue {
        Issue::UnlocalizedText(UnlocalizedTextIssue {
            context: SourceContext::new(
                SourceLocation::new(file, line, col),
                format!("<p>{}</p>", text),
            ),
            text: text.to_string(),
        })
    }

    #[test]
    fn test_report_empty() {
        let mut output = Vec::new();
        report_to(&[], &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_report_message_expression() {
        let issue = Issue::MessageExpression(MessageExpressionIssue {
            context: SourceContext::new(
                SourceLocation::new("./src/app.tsx", 3, 12),
                "const m = t`Hi ${user.name}`;",
            ),
        });

        let output = render(&[issue]);

        assert!(output.contains(
            "error: Should be ${variable}, not ${object.property} or ${my_function()}  message-expression"
        ));
        assert!(output.contains("--> ./src/app.tsx:3:12"));
        assert!(output.contains("3 | const m = t`Hi ${user.name}`;"));
        assert!(output.contains(&format!(" |{}^", " ".repeat(12))));
        assert!(output.contains("hint:"));
    }

    #[test]
    fn test_report_unlocalized_attribute() {
        let issue = Issue::UnlocalizedAttribute(UnlocalizedAttributeIssue {
            context: SourceContext::new(
                SourceLocation::new("./src/form.tsx", 7, 8),
                "<input placeholder=\"Search\" />",
            ),
            tag: "input".to_string(),
            attribute: "placeholder".to_string(),
            text: "Search".to_string(),
        });

        let output = render(&[issue]);

        assert!(output.contains("warning: \"Search\"  unlocalized-attribute"));
        assert!(output.contains("= note: in `placeholder` of <input>"));
        assert!(output.contains("1 problem (0 errors, 1 warning)"));
    }

    #[test]
    fn test_report_parse_error() {
        let issue = Issue::ParseError(ParseErrorIssue {
            file_path: "./src/broken.tsx".to_string(),
            error: "Failed to parse ./src/broken.tsx: Unexpected token".to_string(),
        });

        let output = render(&[issue]);

        assert!(output.contains("error: Failed to parse"));
        assert!(output.contains("--> ./src/broken.tsx\n"));
        assert!(!output.contains("|"));
    }

    #[test]
    fn test_report_summary() {
        let output = render(&[
            text_issue("./src/a.tsx", 1, 4, "Hello"),
            text_issue("./src/a.tsx", 2, 4, "World"),
        ]);
        assert!(output.contains("2 problems (2 errors, 0 warnings)"));
    }

    #[test]
    fn test_report_sorting_by_file_and_line() {
        let output = render(&[
            text_issue("./src/b.tsx", 20, 4, "B20"),
            text_issue("./src/a.tsx", 10, 4, "A10"),
            text_issue("./src/a.tsx", 5, 4, "A5"),
        ]);

        let a5 = output.find("\"A5\"").unwrap();
        let a10 = output.find("\"A10\"").unwrap();
        let b20 = output.find("\"B20\"").unwrap();
        assert!(a5 < a10 && a10 < b20);
    }

    #[test]
    fn test_report_line_numbers_are_aligned() {
        let output = render(&[
            text_issue("./src/a.tsx", 5, 4, "Short"),
            text_issue("./src/a.tsx", 120, 4, "Long"),
        ]);
        assert!(output.contains("  5 | <p>Short</p>"));
        assert!(output.contains("120 | <p>Long</p>"));
    }

    #[test]
    fn test_report_unicode_caret_alignment() {
        // "你好" is 4 columns wide, so the caret under "World" is shifted by 2
        let issue = Issue::UnlocalizedText(UnlocalizedTextIssue {
            context: SourceContext::new(SourceLocation::new("./a.tsx", 1, 6), "<p>你好World</p>"),
            text: "World".to_string(),
        });

        let output = render(&[issue]);

        assert!(output.contains("1 | <p>你好World</p>"));
        assert!(output.contains(&format!(" |{}^\n", " ".repeat(8))));
    }

    #[test]
    fn test_print_success() {
        let mut output = Vec::new();
        print_success_to(10, &mut output);
        let output = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(output.contains("Checked 10 source files - no issues found"));

        let mut output = Vec::new();
        print_success_to(1, &mut output);
        let output = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(output.contains("Checked 1 source file - no issues found"));
    }

    #[test]
    fn test_parse_warning_only_when_not_verbose() {
        let mut output = Vec::new();
        print_parse_warning_to(2, false, &mut output);
        assert!(strip_ansi(&String::from_utf8(output).unwrap()).contains("2 file(s)"));

        let mut output = Vec::new();
        print_parse_warning_to(2, true, &mut output);
        assert!(output.is_empty());

        let mut output = Vec::new();
        print_parse_warning_to(0, false, &mut output);
        assert!(output.is_empty());
    }
}
