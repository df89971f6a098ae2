//! Suppression directives in source comments.
//!
//! Supports rule-specific disable comments:
//! - `msglint-disable-next-line` - disable all rules for next line
//! - `msglint-disable-next-line message-expression` - disable only that rule
//! - `msglint-disable-next-line unlocalized-text unlocalized-attribute` - disable both
//! - `msglint-disable` / `msglint-enable` - range-based disabling

use std::collections::{HashMap, HashSet};

use swc_common::{SourceMap, comments::SingleThreadedComments};

use crate::issues::Rule;

/// Parsed msglint directive.
#[derive(Debug, Clone)]
pub enum Directive {
    Disable { rules: HashSet<Rule> },
    Enable { rules: HashSet<Rule> },
    DisableNextLine { rules: HashSet<Rule> },
}

impl Directive {
    /// Parse directive from comment text.
    /// Returns None if not a msglint directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Order matters: check longer prefix first
        if let Some(rest) = text.strip_prefix("msglint-disable-next-line") {
            return Self::with_rules(rest).map(|rules| Self::DisableNextLine { rules });
        }
        if let Some(rest) = text.strip_prefix("msglint-disable") {
            return Self::with_rules(rest).map(|rules| Self::Disable { rules });
        }
        if let Some(rest) = text.strip_prefix("msglint-enable") {
            return Self::with_rules(rest).map(|rules| Self::Enable { rules });
        }

        None
    }

    /// The directive name must end at a word boundary (`msglint-disabled` is not a directive).
    fn with_rules(rest: &str) -> Option<HashSet<Rule>> {
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(Self::parse_rules(rest))
    }

    fn parse_rules(rest: &str) -> HashSet<Rule> {
        let parsed: HashSet<_> = rest.split_whitespace().filter_map(Rule::parse).collect();

        // No (valid) rules specified = all rules
        if parsed.is_empty() {
            Rule::suppressible()
        } else {
            parsed
        }
    }
}

/// Range representing disabled lines [start, end] inclusive.
#[derive(Debug, Clone, Copy)]
struct DisabledRange {
    start: usize,
    end: usize, // usize::MAX for open-ended
}

/// Tracks disabled lines per rule for a single file.
#[derive(Debug, Default, Clone)]
pub struct DisableContext {
    disabled_lines: HashMap<Rule, HashSet<usize>>,
    disabled_ranges: HashMap<Rule, Vec<DisabledRange>>,
}

impl DisableContext {
    /// Check if a line should be ignored for a specific rule.
    pub fn should_ignore(&self, line: usize, rule: Rule) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }

    /// Build DisableContext from SWC comments.
    ///
    /// Must be called while the comment store is still alive, i.e. right after
    /// parsing.
    pub fn from_comments(comments: &SingleThreadedComments, source_map: &SourceMap) -> Self {
        let (leading, trailing) = comments.borrow_all();

        let mut all_comments: Vec<(usize, String)> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .map(|cmt| {
                (
                    source_map.lookup_char_pos(cmt.span.lo).line,
                    cmt.text.to_string(),
                )
            })
            .collect();
        all_comments.sort_by_key(|(line, _)| *line);

        Self::from_line_comments(all_comments.iter().map(|(line, text)| (*line, text.as_str())))
    }

    /// Build DisableContext from `(line, comment text)` pairs sorted by line.
    fn from_line_comments<'a>(comments: impl Iterator<Item = (usize, &'a str)>) -> Self {
        let mut ctx = Self::default();
        let mut open_ranges: HashMap<Rule, usize> = HashMap::new();

        for (line, text) in comments {
            let Some(directive) = Directive::parse(text) else {
                continue;
            };
            match directive {
                Directive::Disable { rules } => {
                    for rule in rules {
                        // Only start a new range if not already open
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable { rules } => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            ctx.disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange {
                                    start,
                                    end: line.saturating_sub(1),
                                });
                        }
                    }
                }
                Directive::DisableNextLine { rules } => {
                    for rule in rules {
                        ctx.disabled_lines.entry(rule).or_default().insert(line + 1);
                    }
                }
            }
        }

        // Unclosed ranges extend to end of file
        for (rule, start) in open_ranges {
            ctx.disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        ctx
    }
}
