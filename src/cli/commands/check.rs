use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, helper::finish};
use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
};

/// Rules selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MessageExpression,
    UnlocalizedAttribute,
    UnlocalizedText,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::MessageExpression,
            CheckRule::UnlocalizedAttribute,
            CheckRule::UnlocalizedText,
        ]
    }
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::MessageExpression => Rule::MessageExpression,
            CheckRule::UnlocalizedAttribute => Rule::UnlocalizedAttribute,
            CheckRule::UnlocalizedText => Rule::UnlocalizedText,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(cmd.common.source_root.as_deref(), cmd.common.verbose)?;

    let selected = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules
    };
    let mut rules: Vec<Rule> = selected.into_iter().map(Rule::from).collect();
    rules.sort();
    rules.dedup();

    let mut issues = ctx.check(&rules);
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(issues, ctx.files.len()))
}
