//! Node classification predicates.
//!
//! Pure, total functions over tag names, attribute names and tree nodes.
//! Anything that does not have the expected shape (a non-identifier tag, a
//! missing callee, a dangling node id) simply classifies as `false`.

mod tags;

pub use tags::{HTML_TAGS, SVG_TAGS};

use crate::core::tree::{NodeId, SyntaxNode, SyntaxTree};

/// Tags that turn a tagged template into a message declaration:
/// `` t`Hello` ``, `` msg`Hello` ``, `` defineMessage`Hello` ``.
pub const MESSAGE_TAGS: &[&str] = &["t", "msg", "defineMessage"];

/// Macro calls allowed inside a message template: `` t`${plural(n, {...})}` ``.
pub const TEMPLATE_MACROS: &[&str] = &["plural", "select", "selectOrdinal"];

/// Component that marks its whole subtree as translatable.
pub const TRANS_COMPONENT: &str = "Trans";

/// Components that are only messages when they carry [`REQUIRED_ATTRIBUTES`].
pub const CHOICE_COMPONENTS: &[&str] = &["Plural", "Select"];

// Shared by Plural and Select.
pub const REQUIRED_ATTRIBUTES: &[&str] = &["value", "other"];

/// Attributes on native HTML elements that carry user-visible text.
pub const DENIED_HTML_ATTRIBUTES: &[&str] = &["placeholder", "alt", "aria-label", "value"];

/// Checks if every character is an ASCII uppercase letter, `_` or `-`.
///
/// Constant-style tokens such as `SUBMIT_BUTTON` are never user-facing text.
/// The empty string is not a token.
///
/// # Examples
///
/// ```
/// use msglint::core::classify::is_upper_case_token;
///
/// assert!(is_upper_case_token("PRIMARY_ACTION"));
/// assert!(is_upper_case_token("X-SMALL"));
/// assert!(!is_upper_case_token("Submit"));
/// assert!(!is_upper_case_token(""));
/// ```
pub fn is_upper_case_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '_' || c == '-')
}

pub fn is_known_html_tag(name: &str) -> bool {
    HTML_TAGS.contains(&name)
}

pub fn is_known_svg_tag(name: &str) -> bool {
    SVG_TAGS.contains(&name)
}

/// True if all of [`REQUIRED_ATTRIBUTES`] are present.
pub fn has_required_attribute_set(attribute_names: &[&str]) -> bool {
    REQUIRED_ATTRIBUTES
        .iter()
        .all(|required| attribute_names.contains(required))
}

/// `<Trans>` always; `<Plural>` / `<Select>` only with the required attributes.
pub fn is_recognized_message_tag(tag_name: &str, attribute_names: &[&str]) -> bool {
    if tag_name == TRANS_COMPONENT {
        return true;
    }
    CHOICE_COMPONENTS.contains(&tag_name) && has_required_attribute_set(attribute_names)
}

/// Whether a string-valued attribute may stay untranslated on this element.
///
/// Checked in order: SVG elements allow everything, native HTML elements allow
/// everything except [`DENIED_HTML_ATTRIBUTES`], recognized message components
/// allow everything, anything else (custom components) allows nothing.
pub fn is_allowed_markup_attribute(
    tag_name: &str,
    attribute_name: &str,
    attribute_names: &[&str],
) -> bool {
    if is_known_svg_tag(tag_name) {
        return true;
    }
    if is_known_html_tag(tag_name) {
        return !DENIED_HTML_ATTRIBUTES.contains(&attribute_name);
    }
    is_recognized_message_tag(tag_name, attribute_names)
}

/// True for `` t`...` ``, `` msg`...` `` and `` defineMessage`...` ``.
///
/// Member (`i18n.t`) and computed tags are never message tags.
pub fn is_tagged_message_template(tree: &SyntaxTree, node: NodeId) -> bool {
    match tree.data(node) {
        Some(SyntaxNode::TaggedTemplateExpression { tag: Some(tag), .. }) => tree
            .identifier_name(*tag)
            .is_some_and(|name| MESSAGE_TAGS.contains(&name)),
        _ => false,
    }
}

/// Name of a call's callee when it is a bare identifier.
pub fn callee_name(tree: &SyntaxTree, node: NodeId) -> Option<&str> {
    match tree.data(node)? {
        SyntaxNode::CallExpression {
            callee: Some(callee),
            ..
        } => tree.identifier_name(*callee),
        _ => None,
    }
}

/// `plural(...)`, `select(...)` or `selectOrdinal(...)`.
pub fn is_template_macro_call(tree: &SyntaxTree, node: NodeId) -> bool {
    callee_name(tree, node).is_some_and(|name| TEMPLATE_MACROS.contains(&name))
}

/// Attribute names of a `JSXElement`, in source order.
pub fn element_attribute_names(tree: &SyntaxTree, element: NodeId) -> Vec<&str> {
    match tree.data(element) {
        Some(SyntaxNode::JSXElement { attributes, .. }) => attributes
            .iter()
            .filter_map(|&attribute| match tree.data(attribute) {
                Some(SyntaxNode::JSXAttribute { name, .. }) => Some(name.as_str()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Identifier tag name of a `JSXElement`.
pub fn element_name(tree: &SyntaxTree, element: NodeId) -> Option<&str> {
    match tree.data(element)? {
        SyntaxNode::JSXElement {
            name: Some(name), ..
        } => Some(name),
        _ => None,
    }
}

/// `<Trans>`, or `<Plural>` / `<Select>` with the required attributes.
pub fn is_translation_component(tree: &SyntaxTree, element: NodeId) -> bool {
    element_name(tree, element).is_some_and(|name| {
        is_recognized_message_tag(name, &element_attribute_names(tree, element))
    })
}
