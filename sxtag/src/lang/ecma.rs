//! ECMAScript raw vocabulary.
//!
//! ECMAScript has no canonical tags of its own: every construct below folds
//! into the shared vocabulary.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    lang::Language,
    optype::{OpFlags, OpType},
};

/// ECMAScript surface constructs eliminated by normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EcmaRawOp {
    /// `let a = 1, b;` with one `ITEM` child per declarator.
    VariableList,
    /// Template literal before its parts are classified.
    TemplateString,
    /// `...expr` in an argument or literal position.
    Spread,
    /// `export default <expr|decl>`
    ExportDefault,
    /// `a += b`, `a ??= b`, ... with the operator in the node's operator field.
    CompoundAssign,
    /// `a?.b`
    OptionalChain,
}

impl EcmaRawOp {
    pub fn from_str(s: &str) -> Option<Self> {
        EcmaRawOp::iter().find(|op| op.to_str() == s)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            EcmaRawOp::VariableList => "RAW_VARIABLE_LIST",
            EcmaRawOp::TemplateString => "RAW_TEMPLATE_STRING",
            EcmaRawOp::Spread => "RAW_SPREAD",
            EcmaRawOp::ExportDefault => "RAW_EXPORT_DEFAULT",
            EcmaRawOp::CompoundAssign => "RAW_COMPOUND_ASSIGN",
            EcmaRawOp::OptionalChain => "RAW_OPTIONAL_CHAIN",
        }
    }
}

impl OpType for EcmaRawOp {
    #[inline]
    fn flags(&self) -> OpFlags {
        OpFlags::RAW
    }

    fn name(&self) -> &'static str {
        self.to_str()
    }

    fn language(&self) -> Option<Language> {
        Some(Language::Ecma)
    }
}
