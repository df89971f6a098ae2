use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMessagesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub source_root: String,
    pub ignore_test_files: bool,
    pub ignore_texts: Vec<String>,
    pub ignore_attributes: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            source_root: c.source_root,
            ignore_test_files: c.ignore_test_files,
            ignore_texts: c.ignore_texts,
            ignore_attributes: c.ignore_attributes,
        }
    }
}

// ============================================================
// Scan Types (scan_messages)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// One issue, flattened for JSON consumers.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// Absent for file-level issues (parse errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, col, source_line) = match issue.location() {
            ReportLocation::Source(ctx) => (
                ctx.file_path().to_string(),
                Some(ctx.line()),
                Some(ctx.col()),
                Some(ctx.source_line.clone()),
            ),
            ReportLocation::File { path } => (path.to_string(), None, None, None),
        };
        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            file_path,
            line,
            col,
            message: issue.message(),
            source_line,
            details: issue.details(),
            hint: issue.hint().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMessagesResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub source_files_checked: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}
