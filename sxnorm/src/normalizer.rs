//! Raw to canonical normalization of one tree.
//!
//! Normalization runs in two phases over an explicit stack, so arbitrarily
//! deep trees never exhaust the call stack:
//!  1. a post-order rewrite that drops discarded subtrees and hands each raw
//!     node, with its already canonical children, to the rule set of the
//!     normalizer's language;
//!  2. a pre-order binding walk that opens a scope for every scope-introducing
//!     node and registers declared names in the innermost open scope.
//!
//! Rewriting first means a raw node that becomes a block or a declaration is
//! bound exactly like one written canonically.
use log::{debug, trace};
use serde::Serialize;
use smallvec::SmallVec;
use sxtag::prelude::*;

use crate::{
    config::NormalizerConfig,
    error::{NormalizeError, NormalizeResult},
    rules::{Rewritten, RewriteRules, rules_for},
};

/// Counters gathered while normalizing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    /// Input nodes entered by the rewrite phase.
    pub visited: usize,
    /// Raw nodes handed to a rule.
    pub rewritten: usize,
    /// Discarded subtrees dropped.
    pub discarded: usize,
    pub scopes: usize,
    pub bindings: usize,
}

impl std::ops::AddAssign for NormalizeStats {
    fn add_assign(&mut self, other: Self) {
        self.visited += other.visited;
        self.rewritten += other.rewritten;
        self.discarded += other.discarded;
        self.scopes += other.scopes;
        self.bindings += other.bindings;
    }
}

/// A fully canonical tree together with the scopes recorded over it.
#[derive(Debug, Clone)]
pub struct CanonicalTree {
    root: Node,
    scopes: ScopeTree,
    language: Language,
    stats: NormalizeStats,
}

impl CanonicalTree {
    pub(crate) fn new(root: Node, scopes: ScopeTree, language: Language, stats: NormalizeStats) -> Self {
        Self {
            root,
            scopes,
            language,
            stats,
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Scopes recorded by the binding phase, empty if it was disabled.
    #[inline]
    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn stats(&self) -> NormalizeStats {
        self.stats
    }

    /// Scope opened by `node`, if it opened one.
    pub fn scope_of(&self, node: &Node) -> Option<&Scope> {
        node.scope.and_then(|id| self.scopes.get(id))
    }

    /// Declaring node of `binding`, located by its pre-order index.
    pub fn declaration(&self, binding: &Binding) -> Option<&Node> {
        self.root.iter().nth(binding.node)
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn into_parts(self) -> (Node, ScopeTree) {
        (self.root, self.scopes)
    }
}

/// Normalizer for the trees of one source language.
///
/// Stateless between calls: one instance may normalize any number of trees,
/// from any number of threads.
pub struct Normalizer {
    language: Language,
    rules: &'static dyn RewriteRules,
    config: NormalizerConfig,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("language", &self.language)
            .field("config", &self.config)
            .finish()
    }
}

enum Frame {
    Enter(Node, usize),
    /// Children of `node` are the results pushed since `base`.
    Exit { node: Node, base: usize },
}

enum Step<'a> {
    Enter(&'a mut Node),
    Leave,
}

impl Normalizer {
    pub fn new(language: Language) -> Self {
        Self::with_config(language, NormalizerConfig::default())
    }

    pub fn with_config(language: Language, config: NormalizerConfig) -> Self {
        Self {
            language,
            rules: rules_for(language),
            config,
        }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize `root`, consuming it.
    ///
    /// Fails on the first raw node that cannot be rewritten; nothing of a
    /// failed tree is returned.
    pub fn normalize(&self, root: Node) -> NormalizeResult<CanonicalTree> {
        let mut stats = NormalizeStats::default();
        let mut root = self.rewrite(root, &mut stats)?;

        let scopes = if self.config.bind_scopes {
            self.bind(&mut root, &mut stats)
        } else {
            ScopeTree::new()
        };

        debug!(
            "normalized {} tree: {} nodes visited, {} rewritten, {} discarded, {} scopes, {} bindings",
            self.language, stats.visited, stats.rewritten, stats.discarded, stats.scopes, stats.bindings
        );
        Ok(CanonicalTree::new(root, scopes, self.language, stats))
    }

    fn rewrite(&self, root: Node, stats: &mut NormalizeStats) -> NormalizeResult<Node> {
        let root_span = root.span;
        let mut stack: Vec<Frame> = vec![Frame::Enter(root, 1)];
        let mut out: Vec<Node> = Vec::new();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(mut node, depth) => {
                    stats.visited += 1;
                    if depth > self.config.max_depth {
                        return Err(NormalizeError::DepthLimitExceeded {
                            limit: self.config.max_depth,
                            span: node.span,
                        });
                    }
                    if node.op.is_discarded() {
                        trace!("dropping discarded subtree at {}", node.span);
                        stats.discarded += 1;
                        continue;
                    }

                    let children = std::mem::take(&mut node.children);
                    stack.push(Frame::Exit {
                        node,
                        base: out.len(),
                    });
                    stack.extend(
                        children
                            .into_iter()
                            .rev()
                            .map(|child| Frame::Enter(child, depth + 1)),
                    );
                }
                Frame::Exit { mut node, base } => {
                    node.children = out.split_off(base);
                    match node.op {
                        Op::Raw(op) => {
                            let produced = self.apply(op, node)?;
                            stats.rewritten += 1;
                            for node in produced {
                                debug_assert!(!node.op.is_raw(), "rule for {} produced {}", op, node.op);
                                if node.op.is_discarded() {
                                    stats.discarded += 1;
                                } else {
                                    out.push(node);
                                }
                            }
                        }
                        _ => out.push(node),
                    }
                }
            }
        }

        match out.len() {
            0 => Err(NormalizeError::DiscardedRoot { span: root_span }),
            1 => Ok(out.remove(0)),
            _ => Ok(Node::new(StdOp::List, root_span).with_children(out)),
        }
    }

    fn apply(&self, op: RawOp, node: Node) -> NormalizeResult<Rewritten> {
        if op.owner() != self.language {
            return Err(NormalizeError::UnmappedRawTag {
                op,
                language: self.language,
                span: node.span,
            });
        }
        trace!("rewriting {} at {}", op, node.span);
        self.rules.rewrite(op, node)
    }

    /// A root that opens no scope of its own still gets an outermost scope,
    /// attributed to it but not recorded on the node, to hold top-level
    /// declarations.
    fn bind(&self, root: &mut Node, stats: &mut NormalizeStats) -> ScopeTree {
        let mut scopes = ScopeTree::new();
        let mut active: SmallVec<[ScopeId; 16]> = SmallVec::new();
        if !root.op.has_own_scope() {
            active.push(scopes.open(None, root.op, root.span));
        }

        // Pre-order position of the node being entered, as in `Node::iter`.
        let mut index = 0;
        let mut stack: Vec<Step<'_>> = vec![Step::Enter(root)];
        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Enter(node) => {
                    index += 1;
                    node
                }
                Step::Leave => {
                    active.pop();
                    continue;
                }
            };

            if node.op.is_decl() {
                // A scope-introducing declaration binds in its enclosing scope.
                if let Some(&scope) = active.last() {
                    for name in node.bound_names() {
                        trace!("binding `{}` at {}", name, node.span);
                        scopes.bind(
                            scope,
                            Binding {
                                name: name.into(),
                                op: node.op,
                                span: node.span,
                                node: index - 1,
                            },
                        );
                        stats.bindings += 1;
                    }
                }
            }

            if node.op.has_own_scope() {
                let id = scopes.open(active.last().copied(), node.op, node.span);
                node.scope = Some(id);
                active.push(id);
                stack.push(Step::Leave);
            }

            stack.extend(node.children.iter_mut().rev().map(Step::Enter));
        }

        stats.scopes = scopes.len();
        scopes
    }
}
