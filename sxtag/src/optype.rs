//! The capability implemented by every node tag.
//!
//! A tag's structural role is summarised by four orthogonal flags. They are a
//! pure function of the tag identity: no tag ever changes class at runtime and
//! there is no hidden state behind the lookups, so consumers may branch on the
//! flags instead of on the tag itself whenever only the role matters ("does
//! this node introduce a scope?" rather than "is this exactly a block?").
use bitflags::bitflags;

use crate::lang::Language;

bitflags! {
    /// Structural flags attached to a tag at definition time.
    #[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OpFlags: u8 {
        /// Surface-only construct of one source language.
        ///
        /// Raw tags must be rewritten before the tree reaches a canonical
        /// consumer. They never carry any other flag.
        const RAW = 1 << 0;

        /// A node carrying this tag opens a new lexical scope.
        const OWN_SCOPE = 1 << 1;

        /// A node carrying this tag binds a name in the enclosing scope.
        const DECL = 1 << 2;

        /// Placeholder tag. Nodes carrying it are removed from the tree.
        const DISCARDED = 1 << 3;
    }
}

/// Common interface implemented by every tag vocabulary.
///
/// Implementors provide [`flags`](OpType::flags) through a total `match` over
/// their variants; the four predicates are derived from it.
pub trait OpType: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    fn flags(&self) -> OpFlags;

    /// Stable upper-case name of the tag, raw tags carrying the `RAW_` prefix.
    fn name(&self) -> &'static str;

    /// Source language owning this tag, `None` for the shared vocabulary.
    fn language(&self) -> Option<Language> {
        None
    }

    /// Returns true if this tag must not appear in a canonical tree.
    #[inline]
    fn is_raw(&self) -> bool {
        self.flags().contains(OpFlags::RAW)
    }

    /// Returns true if a node carrying this tag introduces a lexical scope.
    #[inline]
    fn has_own_scope(&self) -> bool {
        self.flags().contains(OpFlags::OWN_SCOPE)
    }

    /// Returns true if a node carrying this tag binds a name.
    #[inline]
    fn is_decl(&self) -> bool {
        self.flags().contains(OpFlags::DECL)
    }

    /// Returns true if a node carrying this tag is dropped during normalization.
    #[inline]
    fn is_discarded(&self) -> bool {
        self.flags().contains(OpFlags::DISCARDED)
    }
}
