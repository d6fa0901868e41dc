//! Syntax tree nodes.
//!
//! A [`Node`] pairs a tag with an ordered list of children it owns
//! exclusively. Trees are strict: no sharing, no cycles, and a node never
//! outlives the tree it belongs to. Ownership of a whole tree moves from the
//! front end to the normalizer and on to the consumer.
//!
//! Example: a block declaring `x`
//! ```
//! use sxtag::prelude::*;
//!
//! let block = Node::new(StdOp::Block, Span::new(0, 12, 1, 1)).with_child(
//!     Node::new(StdOp::Decl, Span::new(2, 10, 1, 3))
//!         .with_text("x")
//!         .with_child(Node::new(StdOp::Name, Span::new(6, 7, 1, 7)).with_text("x")),
//! );
//! assert_eq!(block.count(), 3);
//! assert_eq!(block.children[0].bound_name(), Some("x"));
//! assert!(!block.contains_raw());
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    op::{Op, RawOp},
    operator::Operator,
    optype::OpType,
    scope::ScopeId,
    span::Span,
    std_op::StdOp,
};

/// One element of a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub op: Op,
    pub span: Span,
    /// Identifier, literal text or other scalar payload.
    pub text: Option<Box<str>>,
    /// Operator of `BINARY`, `UNARY` and compound assignment nodes.
    pub operator: Option<Operator>,
    pub children: Vec<Node>,
    /// Scope opened by this node, set by the normalizer on scope-introducing nodes.
    pub scope: Option<ScopeId>,
}

impl Node {
    pub fn new(op: impl Into<Op>, span: Span) -> Self {
        Self {
            op: op.into(),
            span,
            text: None,
            operator: None,
            children: Vec::new(),
            scope: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<Box<str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<Operator>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[inline]
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true if this node carries the shared tag `op`.
    #[inline]
    pub fn is(&self, op: StdOp) -> bool {
        self.op == Op::Std(op)
    }

    /// Raw tag of this node, if it has one.
    #[inline]
    pub fn raw_op(&self) -> Option<RawOp> {
        self.op.try_as_raw()
    }

    /// Name bound by this node: its payload, or the payload of its first
    /// `NAME` child.
    ///
    /// Only meaningful for declaration nodes, but defined for every node.
    pub fn bound_name(&self) -> Option<&str> {
        self.text().or_else(|| {
            self.children
                .iter()
                .find(|child| child.is(StdOp::Name))
                .and_then(Node::text)
        })
    }

    /// Every name bound by this node: its payload if present, otherwise the
    /// payload of each direct `NAME` child (`int a, b;` style declarators).
    pub fn bound_names(&self) -> SmallVec<[&str; 1]> {
        match self.text() {
            Some(text) => SmallVec::from_elem(text, 1),
            None => self
                .children
                .iter()
                .filter(|child| child.is(StdOp::Name))
                .filter_map(Node::text)
                .collect(),
        }
    }

    /// First direct child carrying the shared tag `op`.
    pub fn child(&self, op: StdOp) -> Option<&Node> {
        self.children.iter().find(|child| child.is(op))
    }

    /// Pre-order iterator over this node and all its descendants.
    pub fn iter(&self) -> Iter<'_> {
        let mut stack = SmallVec::new();
        stack.push(self);
        Iter { stack }
    }

    /// Number of nodes in this subtree, this one included.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest root-to-leaf path, a lone node having depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(&Node, usize); 16]> = SmallVec::new();
        stack.push((self, 1));
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Returns true if any node of this subtree carries a raw tag.
    pub fn contains_raw(&self) -> bool {
        self.iter().any(|node| node.op.is_raw())
    }

    /// Raw tags found in this subtree, in pre-order.
    pub fn raw_ops(&self) -> impl Iterator<Item = (RawOp, Span)> + '_ {
        self.iter()
            .filter_map(|node| node.raw_op().map(|op| (op, node.span)))
    }

    /// Structural equality ignoring scope annotations.
    pub fn same_shape(&self, other: &Node) -> bool {
        self.op == other.op
            && self.span == other.span
            && self.text == other.text
            && self.operator == other.operator
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_shape(b))
    }

    fn fmt_line(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        write!(f, "{:indent$}{}", "", self.op, indent = indent * 2)?;
        if let Some(operator) = self.operator {
            write!(f, " `{}`", operator)?;
        }
        if let Some(text) = self.text() {
            write!(f, " {:?}", text)?;
        }
        write!(f, " @{}", self.span)?;
        if self.scope.is_some() {
            write!(f, " [scope]")?;
        }
        writeln!(f)
    }
}

/// Indented dump, one node per line.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack: SmallVec<[(&Node, usize); 16]> = SmallVec::new();
        stack.push((self, 0));
        while let Some((node, indent)) = stack.pop() {
            node.fmt_line(f, indent)?;
            stack.extend(node.children.iter().rev().map(|child| (child, indent + 1)));
        }
        Ok(())
    }
}

/// Pre-order iterator returned by [`Node::iter`].
pub struct Iter<'a> {
    stack: SmallVec<[&'a Node; 16]>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::java::JavaRawOp;

    fn leaf(op: impl Into<Op>, start: u32) -> Node {
        Node::new(op, Span::new(start, start + 1, 1, start + 1))
    }

    #[test]
    fn preorder_visits_parents_first() {
        let tree = leaf(StdOp::FileRoot, 0)
            .with_child(leaf(StdOp::Block, 1).with_child(leaf(StdOp::Return, 2)))
            .with_child(leaf(StdOp::Pass, 3));

        let order: Vec<_> = tree.iter().map(|n| n.span.start).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn raw_ops_are_reported_with_spans() {
        let tree = leaf(StdOp::Block, 0)
            .with_child(leaf(JavaRawOp::TypeCast, 5))
            .with_child(leaf(StdOp::Pass, 7));

        assert!(tree.contains_raw());
        let raw: Vec<_> = tree.raw_ops().collect();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].0, RawOp::Java(JavaRawOp::TypeCast));
        assert_eq!(raw[0].1.start, 5);
    }

    #[test]
    fn bound_name_prefers_the_payload() {
        let named = leaf(StdOp::Decl, 0).with_child(leaf(StdOp::Name, 1).with_text("a"));
        assert_eq!(named.bound_name(), Some("a"));
        let explicit = named.clone().with_text("b");
        assert_eq!(explicit.bound_name(), Some("b"));
        assert_eq!(leaf(StdOp::Decl, 0).bound_name(), None);

        let pair = leaf(StdOp::Decl, 0)
            .with_child(leaf(StdOp::Type, 1).with_text("int"))
            .with_child(leaf(StdOp::Name, 2).with_text("a"))
            .with_child(leaf(StdOp::Name, 3).with_text("b"));
        assert_eq!(pair.bound_names().as_slice(), &["a", "b"]);
    }

    #[test]
    fn display_indents_children() {
        let tree = leaf(StdOp::Block, 0).with_child(leaf(StdOp::Name, 1).with_text("x"));
        let dump = tree.to_string();
        assert_eq!(dump, "BLOCK @1:1\n  NAME \"x\" @1:2\n");
    }
}
