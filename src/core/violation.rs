use std::fmt;

use crate::core::tree::{NodeId, Position};
use crate::issues::Rule;

/// Text of the disallowed-expression message, shown verbatim to users.
pub const DISALLOWED_EXPRESSION_MESSAGE: &str =
    "Should be ${variable}, not ${object.property} or ${my_function()}";

/// What a rule found, with the data needed to render a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// A message template embeds something other than a plain variable or
    /// an allowed macro call.
    DisallowedExpressionInMessage,
    /// A string attribute on a markup element that should be translated.
    UnlocalizedAttribute {
        tag: String,
        attribute: String,
        text: String,
    },
    /// Inline JSX text outside any translation component.
    UnlocalizedText { text: String },
}

impl MessageKind {
    pub fn rule(&self) -> Rule {
        match self {
            MessageKind::DisallowedExpressionInMessage => Rule::MessageExpression,
            MessageKind::UnlocalizedAttribute { .. } => Rule::UnlocalizedAttribute,
            MessageKind::UnlocalizedText { .. } => Rule::UnlocalizedText,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::DisallowedExpressionInMessage => {
                write!(f, "{}", DISALLOWED_EXPRESSION_MESSAGE)
            }
            MessageKind::UnlocalizedAttribute { text, .. } => write!(f, "{}", text),
            MessageKind::UnlocalizedText { text } => write!(f, "{}", text),
        }
    }
}

/// One reported finding inside a single file. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub node: NodeId,
    pub position: Position,
    pub kind: MessageKind,
}

impl Violation {
    pub fn rule(&self) -> Rule {
        self.kind.rule()
    }
}
