use super::CommandResult;
use crate::issues::{Issue, Severity};

pub fn finish(mut issues: Vec<Issue>, source_files_checked: usize) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        error_count,
        warning_count,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
