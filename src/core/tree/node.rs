//! Arena-backed syntax tree types.
//!
//! Every node lives in a single `Vec` owned by [`SyntaxTree`]. Parent and child
//! links are plain [`NodeId`] indices, so upward lookup never needs shared
//! ownership and the tree can be sent across threads as plain data.

use std::fmt;

/// Index of a node inside its [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// 1-based line and column of a node's first character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// One static segment of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateQuasi {
    /// Cooked value; `None` when the segment holds an invalid escape sequence.
    pub cooked: Option<String>,
}

/// Kind-specific payload of a node.
///
/// Only the kinds the i18n rules classify carry structure; everything else is
/// [`SyntaxNode::Other`] with an ESTree-style label for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Program,
    /// `quasis.len() == expressions.len() + 1` for trees built from source.
    TemplateLiteral {
        quasis: Vec<TemplateQuasi>,
        expressions: Vec<NodeId>,
    },
    TaggedTemplateExpression {
        tag: Option<NodeId>,
        template: Option<NodeId>,
    },
    /// `callee` is `None` for `super(...)` and `import(...)`.
    CallExpression {
        callee: Option<NodeId>,
        arguments: Vec<NodeId>,
    },
    Identifier {
        name: String,
    },
    MemberExpression,
    StringLiteral {
        value: String,
    },
    /// `name` is `None` for member (`<a.b>`) and namespaced (`<a:b>`) tag names.
    JSXElement {
        name: Option<String>,
        attributes: Vec<NodeId>,
    },
    JSXAttribute {
        name: String,
        value: Option<NodeId>,
    },
    JSXExpressionContainer {
        expression: Option<NodeId>,
    },
    JSXText {
        value: String,
    },
    Other {
        kind: &'static str,
    },
}

impl SyntaxNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Program => NodeKind::Program,
            SyntaxNode::TemplateLiteral { .. } => NodeKind::TemplateLiteral,
            SyntaxNode::TaggedTemplateExpression { .. } => NodeKind::TaggedTemplateExpression,
            SyntaxNode::CallExpression { .. } => NodeKind::CallExpression,
            SyntaxNode::Identifier { .. } => NodeKind::Identifier,
            SyntaxNode::MemberExpression => NodeKind::MemberExpression,
            SyntaxNode::StringLiteral { .. } => NodeKind::StringLiteral,
            SyntaxNode::JSXElement { .. } => NodeKind::JSXElement,
            SyntaxNode::JSXAttribute { .. } => NodeKind::JSXAttribute,
            SyntaxNode::JSXExpressionContainer { .. } => NodeKind::JSXExpressionContainer,
            SyntaxNode::JSXText { .. } => NodeKind::JSXText,
            SyntaxNode::Other { .. } => NodeKind::Other,
        }
    }
}

/// Field-less kind tag of a [`SyntaxNode`], used for ancestor search and
/// visitor subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    TemplateLiteral,
    TaggedTemplateExpression,
    CallExpression,
    Identifier,
    MemberExpression,
    StringLiteral,
    JSXElement,
    JSXAttribute,
    JSXExpressionContainer,
    JSXText,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "Program",
            NodeKind::TemplateLiteral => "TemplateLiteral",
            NodeKind::TaggedTemplateExpression => "TaggedTemplateExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::Identifier => "Identifier",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::StringLiteral => "Literal",
            NodeKind::JSXElement => "JSXElement",
            NodeKind::JSXAttribute => "JSXAttribute",
            NodeKind::JSXExpressionContainer => "JSXExpressionContainer",
            NodeKind::JSXText => "JSXText",
            NodeKind::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// An arena slot: payload plus structural links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub data: SyntaxNode,
    /// Non-owning link to the enclosing node; `None` at the root.
    pub parent: Option<NodeId>,
    /// Direct children in source order.
    pub children: Vec<NodeId>,
    pub position: Position,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

/// A read-only syntax tree. Nodes are allocated in pre-order, so the root is
/// always `NodeId(0)` for trees produced by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node under `parent` and return its id.
    ///
    /// The node is registered as the last child of `parent` when the parent
    /// exists. Kind-specific links (template expressions, callee, ...) are the
    /// caller's responsibility.
    pub fn push(&mut self, data: SyntaxNode, parent: Option<NodeId>, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent,
            children: Vec::new(),
            position,
        });
        if let Some(parent) = parent
            && let Some(parent_node) = self.nodes.get_mut(parent.0)
        {
            parent_node.children.push(id);
        }
        id
    }

    /// Replace the payload of an existing node. Unknown ids are ignored.
    pub fn set_data(&mut self, id: NodeId, data: SyntaxNode) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.data = data;
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn data(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.get(id).map(|node| &node.data)
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.get(id).map(|node| node.position)
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all node ids in allocation (pre-order) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Name of an `Identifier` node, `None` for any other kind.
    pub fn identifier_name(&self, id: NodeId) -> Option<&str> {
        match self.data(id)? {
            SyntaxNode::Identifier { name } => Some(name),
            _ => None,
        }
    }
}
