use crate::issues::Issue;

/// Result of running a check.
#[derive(Debug)]
pub struct CommandResult {
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files that were found.
    pub source_files_checked: usize,
}
