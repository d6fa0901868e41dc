//! Per-language vocabularies.
//!
//! Each supported source language contributes a closed enum of raw tags
//! (surface constructs the front end emits before enough context is available
//! to pick a canonical shape) and, optionally, a small set of language-specific
//! canonical tags that survive normalization.
//!
//! Adding a language means adding a [`Language`] variant, a raw enum wrapped in
//! [`RawOp`](crate::op::RawOp), and one rewrite rule per raw tag on the
//! normalizer side. The shared vocabulary in [`std_op`](crate::std_op) is never
//! touched.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

pub mod ecma;
pub mod java;

/// Source languages with a raw vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    Java,
    /// JavaScript and its module dialects.
    Ecma,
}

impl Language {
    /// Creates a [`Language`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        Language::iter().find(|lang| lang.to_str() == s)
    }

    /// Returns the string representation of the [`Language`].
    pub fn to_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Ecma => "ecmascript",
        }
    }

    /// Guess the language from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "java" => Some(Language::Java),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::Ecma),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
