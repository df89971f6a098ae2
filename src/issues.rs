//! Issue types for i18n analysis results.
//!
//! Each issue is self-contained with all information needed by reporters
//! (CLI, MCP) to display it.

use std::collections::HashSet;

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;
use crate::core::violation::DISALLOWED_EXPRESSION_MESSAGE;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    MessageExpression,
    UnlocalizedAttribute,
    UnlocalizedText,
    ParseError,
}

impl Rule {
    /// Parse a rule name used in directives (case insensitive).
    ///
    /// Only rules that can be suppressed per line are recognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "message-expression" => Some(Self::MessageExpression),
            "unlocalized-attribute" => Some(Self::UnlocalizedAttribute),
            "unlocalized-text" => Some(Self::UnlocalizedText),
            _ => None,
        }
    }

    /// Rules that can be disabled via comments (everything but parse errors).
    pub fn suppressible() -> HashSet<Self> {
        [
            Self::MessageExpression,
            Self::UnlocalizedAttribute,
            Self::UnlocalizedText,
        ]
        .into_iter()
        .collect()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MessageExpression => write!(f, "message-expression"),
            Rule::UnlocalizedAttribute => write!(f, "unlocalized-attribute"),
            Rule::UnlocalizedText => write!(f, "unlocalized-text"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// Message template embedding a member access, arbitrary call or other
/// complex expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageExpressionIssue {
    pub context: SourceContext,
}

impl MessageExpressionIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MessageExpression
    }
}

/// String attribute on a markup element that is shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlocalizedAttributeIssue {
    pub context: SourceContext,
    /// Tag name of the owning element.
    pub tag: String,
    pub attribute: String,
    /// Trimmed attribute text.
    pub text: String,
}

impl UnlocalizedAttributeIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnlocalizedAttribute
    }
}

/// Inline JSX text outside any translation component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlocalizedTextIssue {
    pub context: SourceContext,
    /// Trimmed text content.
    pub text: String,
}

impl UnlocalizedTextIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnlocalizedText
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An i18n issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MessageExpression(MessageExpressionIssue),
    UnlocalizedAttribute(UnlocalizedAttributeIssue),
    UnlocalizedText(UnlocalizedTextIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MessageExpression(_) => MessageExpressionIssue::severity(),
            Issue::UnlocalizedAttribute(_) => UnlocalizedAttributeIssue::severity(),
            Issue::UnlocalizedText(_) => UnlocalizedTextIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MessageExpression(_) => MessageExpressionIssue::rule(),
            Issue::UnlocalizedAttribute(_) => UnlocalizedAttributeIssue::rule(),
            Issue::UnlocalizedText(_) => UnlocalizedTextIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for zero-cost dispatch on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MessageExpressionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        DISALLOWED_EXPRESSION_MESSAGE.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("assign the value to a variable first, e.g. `const name = user.name`")
    }
}

impl Report for UnlocalizedAttributeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in `{}` of <{}>", self.attribute, self.tag))
    }
}

impl Report for UnlocalizedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("wrap the text in <Trans>")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
