//! Unified tag type carried by every [`Node`](crate::node::Node).
//!
//! [`Op`] is a tagged union over the shared vocabulary, the language-specific
//! canonical tags and the raw subspace. Raw tags are grouped per language under
//! [`RawOp`], so a normalizer can dispatch on the language first and then match
//! exhaustively on that language's raw enum.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs, IntoEnumIterator};

use crate::{
    lang::{Language, ecma::EcmaRawOp, java::{JavaOp, JavaRawOp}},
    optype::{OpFlags, OpType},
    std_op::StdOp,
};

/// Raw tags of every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawOp {
    Java(JavaRawOp),
    Ecma(EcmaRawOp),
}

impl RawOp {
    /// Iterate over every raw tag of every language.
    pub fn all() -> impl Iterator<Item = RawOp> {
        JavaRawOp::iter()
            .map(RawOp::Java)
            .chain(EcmaRawOp::iter().map(RawOp::Ecma))
    }

    /// Iterate over the raw tags of one language.
    pub fn of(language: Language) -> impl Iterator<Item = RawOp> {
        RawOp::all().filter(move |op| op.owner() == language)
    }

    /// Language whose front end emits this tag.
    pub fn owner(&self) -> Language {
        match self {
            RawOp::Java(_) => Language::Java,
            RawOp::Ecma(_) => Language::Ecma,
        }
    }
}

impl OpType for RawOp {
    fn flags(&self) -> OpFlags {
        match self {
            RawOp::Java(op) => op.flags(),
            RawOp::Ecma(op) => op.flags(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RawOp::Java(op) => op.name(),
            RawOp::Ecma(op) => op.name(),
        }
    }

    fn language(&self) -> Option<Language> {
        Some(self.owner())
    }
}

/// Any node tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// Shared, language-agnostic tag.
    Std(StdOp),
    /// Java tag kept in canonical trees.
    Java(JavaOp),
    /// Surface tag, must be rewritten.
    Raw(RawOp),
}

impl Op {
    /// Iterate over the whole taxonomy, canonical tags first.
    pub fn all() -> impl Iterator<Item = Op> {
        StdOp::iter()
            .map(Op::Std)
            .chain(JavaOp::iter().map(Op::Java))
            .chain(RawOp::all().map(Op::Raw))
    }

    /// Iterate over the canonical tags only.
    pub fn canonical() -> impl Iterator<Item = Op> {
        Op::all().filter(|op| !op.is_raw())
    }

    /// Looks a tag up by name across every vocabulary.
    pub fn from_name(name: &str) -> Option<Op> {
        Op::all().find(|op| op.name() == name)
    }
}

impl OpType for Op {
    fn flags(&self) -> OpFlags {
        match self {
            Op::Std(op) => op.flags(),
            Op::Java(op) => op.flags(),
            Op::Raw(op) => op.flags(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Op::Std(op) => op.name(),
            Op::Java(op) => op.name(),
            Op::Raw(op) => op.name(),
        }
    }

    fn language(&self) -> Option<Language> {
        match self {
            Op::Std(op) => op.language(),
            Op::Java(op) => op.language(),
            Op::Raw(op) => op.language(),
        }
    }
}

impl From<StdOp> for Op {
    fn from(op: StdOp) -> Self {
        Op::Std(op)
    }
}

impl From<JavaOp> for Op {
    fn from(op: JavaOp) -> Self {
        Op::Java(op)
    }
}

impl From<RawOp> for Op {
    fn from(op: RawOp) -> Self {
        Op::Raw(op)
    }
}

impl From<JavaRawOp> for RawOp {
    fn from(op: JavaRawOp) -> Self {
        RawOp::Java(op)
    }
}

impl From<EcmaRawOp> for RawOp {
    fn from(op: EcmaRawOp) -> Self {
        RawOp::Ecma(op)
    }
}

impl From<JavaRawOp> for Op {
    fn from(op: JavaRawOp) -> Self {
        Op::Raw(RawOp::Java(op))
    }
}

impl From<EcmaRawOp> for Op {
    fn from(op: EcmaRawOp) -> Self {
        Op::Raw(RawOp::Ecma(op))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for RawOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
