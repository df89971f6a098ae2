//! Lowering of an swc module into the arena [`SyntaxTree`].
//!
//! The builder keeps a stack of open nodes while visiting. Nodes are allocated
//! in pre-order, so the first node allocated while visiting a sub-expression is
//! that sub-expression's own node. `capture` relies on this to record
//! kind-specific links (template expressions, callee, attribute value).

use swc_common::{BytePos, SourceMap, Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementName, JSXExpr, JSXExprContainer, JSXText, Lit, Module, Str, TaggedTpl, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::node::{NodeId, Position, SyntaxNode, SyntaxTree, TemplateQuasi};

pub struct TreeBuilder<'a> {
    source_map: &'a SourceMap,
    tree: SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            tree: SyntaxTree::new(),
            stack: Vec::new(),
        }
    }

    pub fn build(mut self, module: &Module) -> SyntaxTree {
        self.visit_module(module);
        self.tree
    }

    fn position(&self, lo: BytePos) -> Position {
        if lo.is_dummy() {
            // Synthesized nodes inherit the enclosing node's position
            return self
                .stack
                .last()
                .and_then(|&parent| self.tree.position(parent))
                .unwrap_or_default();
        }
        let loc = self.source_map.lookup_char_pos(lo);
        Position::new(loc.line, loc.col_display + 1)
    }

    /// Allocate a node and make it the parent of everything visited until
    /// the matching `close`.
    fn open(&mut self, data: SyntaxNode, span: Span) -> NodeId {
        let position = self.position(span.lo);
        let id = self
            .tree
            .push(data, self.stack.last().copied(), position);
        self.stack.push(id);
        id
    }

    fn close(&mut self, id: NodeId, data: SyntaxNode) {
        self.tree.set_data(id, data);
        self.stack.pop();
    }

    fn leaf(&mut self, data: SyntaxNode, lo: BytePos) -> NodeId {
        let position = self.position(lo);
        self.tree.push(data, self.stack.last().copied(), position)
    }

    /// Run `visit` and return the first node it allocated, if any.
    fn capture(&mut self, visit: impl FnOnce(&mut Self)) -> Option<NodeId> {
        let next = self.tree.len();
        visit(self);
        (self.tree.len() > next).then_some(NodeId(next))
    }
}

impl Visit for TreeBuilder<'_> {
    fn visit_module(&mut self, node: &Module) {
        let id = self.open(SyntaxNode::Program, node.span);
        node.visit_children_with(self);
        self.close(id, SyntaxNode::Program);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            // Parentheses are not part of the ESTree shape
            Expr::Paren(paren) => paren.expr.visit_with(self),
            Expr::Ident(ident) => {
                self.leaf(
                    SyntaxNode::Identifier {
                        name: ident.sym.to_string(),
                    },
                    ident.span.lo,
                );
            }
            Expr::Member(_) => {
                let id = self.open(SyntaxNode::MemberExpression, expr.span());
                expr.visit_children_with(self);
                self.close(id, SyntaxNode::MemberExpression);
            }
            // These allocate their own node in the dedicated visitors below
            Expr::Tpl(_)
            | Expr::TaggedTpl(_)
            | Expr::Call(_)
            | Expr::JSXElement(_)
            | Expr::Lit(Lit::Str(_)) => expr.visit_children_with(self),
            _ => {
                let data = SyntaxNode::Other {
                    kind: expr_kind(expr),
                };
                let id = self.open(data.clone(), expr.span());
                expr.visit_children_with(self);
                self.close(id, data);
            }
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let id = self.open(
            SyntaxNode::TemplateLiteral {
                quasis: Vec::new(),
                expressions: Vec::new(),
            },
            node.span,
        );
        let expressions = node
            .exprs
            .iter()
            .filter_map(|expr| self.capture(|b| expr.visit_with(b)))
            .collect();
        let quasis = node
            .quasis
            .iter()
            .map(|quasi| TemplateQuasi {
                cooked: quasi
                    .cooked
                    .as_ref()
                    .and_then(|cooked| cooked.as_str())
                    .map(str::to_owned),
            })
            .collect();
        self.close(
            id,
            SyntaxNode::TemplateLiteral {
                quasis,
                expressions,
            },
        );
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        let id = self.open(
            SyntaxNode::TaggedTemplateExpression {
                tag: None,
                template: None,
            },
            node.span,
        );
        let tag = self.capture(|b| node.tag.visit_with(b));
        let template = self.capture(|b| node.tpl.visit_with(b));
        self.close(id, SyntaxNode::TaggedTemplateExpression { tag, template });
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let id = self.open(
            SyntaxNode::CallExpression {
                callee: None,
                arguments: Vec::new(),
            },
            node.span,
        );
        let callee = match &node.callee {
            Callee::Expr(expr) => self.capture(|b| expr.visit_with(b)),
            Callee::Super(_) | Callee::Import(_) => None,
        };
        let arguments = node
            .args
            .iter()
            .filter_map(|arg| self.capture(|b| arg.expr.visit_with(b)))
            .collect();
        self.close(id, SyntaxNode::CallExpression { callee, arguments });
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let name = match &node.opening.name {
            JSXElementName::Ident(ident) => Some(ident.sym.to_string()),
            JSXElementName::JSXMemberExpr(_) | JSXElementName::JSXNamespacedName(_) => None,
        };
        let id = self.open(
            SyntaxNode::JSXElement {
                name: name.clone(),
                attributes: Vec::new(),
            },
            node.span,
        );
        let attributes = node
            .opening
            .attrs
            .iter()
            .filter_map(|attr| match attr {
                JSXAttrOrSpread::JSXAttr(attr) => self.capture(|b| attr.visit_with(b)),
                JSXAttrOrSpread::SpreadElement(spread) => {
                    spread.visit_with(self);
                    None
                }
            })
            .collect();
        for child in &node.children {
            child.visit_with(self);
        }
        self.close(id, SyntaxNode::JSXElement { name, attributes });
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = match &node.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
        };
        let id = self.open(
            SyntaxNode::JSXAttribute {
                name: name.clone(),
                value: None,
            },
            node.span,
        );
        let value = match &node.value {
            Some(JSXAttrValue::JSXFragment(fragment)) => {
                fragment.visit_with(self);
                None
            }
            Some(value) => self.capture(|b| value.visit_with(b)),
            None => None,
        };
        self.close(id, SyntaxNode::JSXAttribute { name, value });
    }

    fn visit_jsx_expr_container(&mut self, node: &JSXExprContainer) {
        let id = self.open(
            SyntaxNode::JSXExpressionContainer { expression: None },
            node.span,
        );
        let expression = match &node.expr {
            JSXExpr::Expr(expr) => self.capture(|b| expr.visit_with(b)),
            JSXExpr::JSXEmptyExpr(_) => None,
        };
        self.close(id, SyntaxNode::JSXExpressionContainer { expression });
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let raw_value: &str = &node.value;
        // Point at the first non-whitespace character
        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let lo = if raw_value.trim().is_empty() {
            node.span.lo
        } else {
            node.span.lo + BytePos(trim_start_offset as u32)
        };
        self.leaf(
            SyntaxNode::JSXText {
                value: raw_value.to_string(),
            },
            lo,
        );
    }

    fn visit_str(&mut self, node: &Str) {
        self.leaf(
            SyntaxNode::StringLiteral {
                value: node.value.as_str().unwrap_or_default().to_string(),
            },
            node.span.lo,
        );
    }
}

/// ESTree-style label for expression kinds without a dedicated variant.
fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::SuperProp(_) => "SuperMemberExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Lit(_) => "Literal",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Class(_) => "ClassExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::MetaProp(_) => "MetaProperty",
        Expr::Await(_) => "AwaitExpression",
        Expr::JSXFragment(_) => "JSXFragment",
        Expr::TsAs(_) | Expr::TsConstAssertion(_) => "TSAsExpression",
        Expr::TsNonNull(_) => "TSNonNullExpression",
        Expr::TsSatisfies(_) => "TSSatisfiesExpression",
        Expr::TsTypeAssertion(_) => "TSTypeAssertion",
        Expr::OptChain(_) => "ChainExpression",
        _ => "Expression",
    }
}
