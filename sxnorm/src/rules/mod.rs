//! Per-language rewrite rules.
//!
//! Each language owns one [`RewriteRules`] implementation holding exactly one
//! rule per raw tag of that language, written as a total `match` over the
//! language's raw enum. Rules only look at the raw node and its children, which
//! the normalizer has already made canonical.

pub mod ecma;
pub mod java;

use smallvec::SmallVec;
use sxtag::prelude::*;

use crate::error::{NormalizeError, NormalizeResult};

/// Canonical nodes produced by one rule, usually a single one.
pub type Rewritten = SmallVec<[Node; 1]>;

pub trait RewriteRules: Send + Sync {
    /// Language whose raw tags this rule set understands.
    fn language(&self) -> Language;

    /// Rewrite `node`, tagged `op`, into canonical nodes.
    ///
    /// The children of `node` are already canonical. Returns
    /// [`NormalizeError::UnmappedRawTag`] for raw tags of another language.
    fn rewrite(&self, op: RawOp, node: Node) -> NormalizeResult<Rewritten>;
}

/// Rule set of `language`.
pub fn rules_for(language: Language) -> &'static dyn RewriteRules {
    match language {
        Language::Java => &java::JavaRules,
        Language::Ecma => &ecma::EcmaRules,
    }
}

pub(crate) fn unmapped(op: RawOp, language: Language, span: Span) -> NormalizeError {
    NormalizeError::UnmappedRawTag { op, language, span }
}

/// A raw node taken apart so a rule can pick its children.
pub(crate) struct RawNode {
    pub op: RawOp,
    pub span: Span,
    pub text: Option<Box<str>>,
    pub operator: Option<Operator>,
    pub children: Vec<Node>,
}

impl RawNode {
    pub fn new(op: impl Into<RawOp>, node: Node) -> Self {
        Self {
            op: op.into(),
            span: node.span,
            text: node.text,
            operator: node.operator,
            children: node.children,
        }
    }

    pub fn malformed(&self, reason: impl Into<String>) -> NormalizeError {
        NormalizeError::MalformedRawNode {
            op: self.op,
            span: self.span,
            reason: reason.into(),
        }
    }

    /// Fail unless the node has exactly `n` children.
    pub fn arity(&self, n: usize) -> NormalizeResult<()> {
        if self.children.len() != n {
            return Err(self.malformed(format!(
                "expected {} child{}, found {}",
                n,
                if n == 1 { "" } else { "ren" },
                self.children.len()
            )));
        }
        Ok(())
    }

    /// Fail unless the node has at least `n` children.
    pub fn at_least(&self, n: usize) -> NormalizeResult<()> {
        if self.children.len() < n {
            return Err(self.malformed(format!(
                "expected at least {} children, found {}",
                n,
                self.children.len()
            )));
        }
        Ok(())
    }

    pub fn position(&self, op: StdOp) -> Option<usize> {
        self.children.iter().position(|child| child.is(op))
    }

    /// Remove and return the first child tagged `op`.
    pub fn take(&mut self, op: StdOp) -> Option<Node> {
        self.position(op).map(|i| self.children.remove(i))
    }

    /// Remove and return the last child tagged `op`.
    pub fn take_last(&mut self, op: StdOp) -> Option<Node> {
        let i = self.children.iter().rposition(|child| child.is(op))?;
        Some(self.children.remove(i))
    }

    /// Bound name: the payload, or the payload of the first `NAME` child.
    pub fn name(&self) -> Option<Box<str>> {
        self.text.clone().or_else(|| {
            self.children
                .iter()
                .find(|child| child.is(StdOp::Name))
                .and_then(|child| child.text.clone())
        })
    }

    /// Replace every child matching `pred` by one `op` node holding them, at
    /// the place of the first one. Nothing happens with fewer than `min`
    /// matches.
    pub fn fold(&mut self, pred: impl Fn(&Node) -> bool, op: StdOp, min: usize) {
        let Some(first) = self.children.iter().position(&pred) else {
            return;
        };
        if self.children.iter().filter(|child| pred(child)).count() < min {
            return;
        }

        let mut folded = Vec::new();
        let mut kept = Vec::with_capacity(self.children.len());
        for child in self.children.drain(..) {
            if pred(&child) {
                folded.push(child);
            } else {
                kept.push(child);
            }
        }

        kept.insert(first, wrap(op, folded));
        self.children = kept;
    }

    /// Same node under the canonical tag `op`.
    pub fn retag(self, op: impl Into<Op>) -> Node {
        let mut node = Node::new(op, self.span).with_children(self.children);
        node.text = self.text;
        node.operator = self.operator;
        node
    }
}

/// New `op` node around `children`, spanning all of them.
pub(crate) fn wrap(op: StdOp, children: Vec<Node>) -> Node {
    let span = children
        .iter()
        .map(|child| child.span)
        .reduce(Span::cover)
        .unwrap_or(Span::DUMMY);
    Node::new(op, span).with_children(children)
}

/// Canonical declaration of `name`, with a leading `PROPS` child naming its
/// kind followed by the children of `raw`.
pub(crate) fn decl(raw: RawNode, kind: &str, name: Box<str>) -> Node {
    Node::new(StdOp::Decl, raw.span)
        .with_text(name)
        .with_child(Node::new(StdOp::Props, raw.span).with_text(kind))
        .with_children(raw.children)
}
