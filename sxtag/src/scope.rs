//! Lexical scopes recorded while a tree is normalized.
//!
//! Scopes live in a [`ScopeTree`] arena and are addressed by [`ScopeId`]. Each
//! scope keeps a back-reference to its parent, so the scopes of one file form a
//! strict parent chain mirroring the nesting of the scope-introducing nodes,
//! never a graph.
//!
//! Bindings are only recorded. Several bindings of the same name in one scope
//! are all kept in registration order; deciding whether that is an error, a
//! shadowing or a redefinition is left to the consumer.
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::{op::Op, span::Span};

new_key_type! {
    /// Handle of a scope inside its [`ScopeTree`].
    pub struct ScopeId;
}

/// A name bound by a declaration node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binding {
    pub name: Box<str>,
    /// Tag of the declaring node.
    pub op: Op,
    /// Span of the declaring node. Not necessarily unique within a file.
    pub span: Span,
    /// Pre-order index of the declaring node in the tree the scopes were
    /// recorded over, the position `Node::iter` yields it at.
    pub node: usize,
}

/// One lexical frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scope {
    parent: Option<ScopeId>,
    children: SmallVec<[ScopeId; 4]>,
    op: Op,
    span: Span,
    bindings: Vec<Binding>,
}

impl Scope {
    /// Enclosing scope, `None` for the outermost one.
    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Directly nested scopes, in tree order.
    #[inline]
    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Tag of the node that opened this scope.
    #[inline]
    pub fn op(&self) -> Op {
        self.op
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// All bindings registered directly in this scope, in registration order.
    #[inline]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Bindings of `name` in this scope, in registration order.
    pub fn lookup<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| &*b.name == name)
    }

    /// Returns true if `name` is bound at least once in this scope.
    pub fn binds(&self, name: &str) -> bool {
        self.lookup(name).next().is_some()
    }

    /// Distinct bound names, in order of first registration.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            if !names.contains(&&*binding.name) {
                names.push(&binding.name);
            }
        }
        names
    }
}

/// Arena of every scope opened in one file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScopeTree {
    scopes: SlotMap<ScopeId, Scope>,
    root: Option<ScopeId>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope for a node tagged `op`, nested in `parent`.
    ///
    /// The first scope opened without a parent becomes the root.
    pub fn open(&mut self, parent: Option<ScopeId>, op: Op, span: Span) -> ScopeId {
        let id = self.scopes.insert(Scope {
            parent,
            children: SmallVec::new(),
            op,
            span,
            bindings: Vec::new(),
        });

        match parent {
            Some(parent) => {
                if let Some(scope) = self.scopes.get_mut(parent) {
                    scope.children.push(id);
                }
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }

        trace!("opened scope {:?} for {} at {} (parent {:?})", id, op, span, parent);
        id
    }

    /// Register `binding` in `scope`. Unknown scopes are ignored.
    pub fn bind(&mut self, scope: ScopeId, binding: Binding) {
        if let Some(scope) = self.scopes.get_mut(scope) {
            scope.bindings.push(binding);
        }
    }

    /// Outermost scope, usually the one of the file root.
    #[inline]
    pub fn root(&self) -> Option<ScopeId> {
        self.root
    }

    #[inline]
    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    #[inline]
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes.get(id).and_then(Scope::parent)
    }

    /// Number of scopes.
    #[inline]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Total number of bindings over all scopes.
    pub fn binding_count(&self) -> usize {
        self.scopes.values().map(|s| s.bindings.len()).sum()
    }

    /// Iterate over every scope, in opening order.
    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes.iter()
    }

    /// Iterate from `id` outwards: `id` itself, its parent, ..., the root.
    pub fn ancestors(&self, id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        let mut next = self.scopes.contains_key(id).then_some(id);
        std::iter::from_fn(move || {
            let current = next?;
            next = self.parent(current);
            Some(current)
        })
    }

    /// Nearest scope, starting at `from` and walking outwards, that binds `name`.
    ///
    /// Which of the bindings found there wins is the caller's decision; see
    /// [`Scope::lookup`].
    pub fn resolve(&self, from: ScopeId, name: &str) -> Option<ScopeId> {
        self.ancestors(from)
            .find(|id| self.scopes.get(*id).is_some_and(|scope| scope.binds(name)))
    }

    /// Every binding of `name` in the whole file, with the scope it lives in.
    pub fn bindings_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (ScopeId, &'a Binding)> + 'a {
        self.scopes
            .iter()
            .flat_map(move |(id, scope)| scope.lookup(name).map(move |b| (id, b)))
    }
}

impl std::ops::Index<ScopeId> for ScopeTree {
    type Output = Scope;

    fn index(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }
}
