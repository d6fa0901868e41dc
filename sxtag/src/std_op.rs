//! Canonical, language-agnostic vocabulary.
//!
//! Every tag a downstream consumer has to understand lives here. Operator
//! kinds are not tags: a `BINARY` or `UNARY` node carries its
//! [`Operator`](crate::operator::Operator) as a discriminant field instead.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::optype::{OpFlags, OpType};

/// Shared node kinds produced after normalization.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StdOp {
    None,
    /// Placeholder removed from its parent during normalization.
    Discarded,
    Special,
    List,
    DeclList,
    /// Root of one compilation unit.
    FileRoot,
    Fold,
    /// Language region embedded in a host file.
    Lang,
    CopyOf,
    Name,
    Props,
    Modifier,
    Modifiers,
    Expr,
    ExprList,
    Init,
    Block,
    /// Not a block: wraps a single statement where the grammar expects one.
    BlockWrap,
    BlockConditional,
    Condition,
    Part,
    Item,
    Call,
    DynamicCall,
    Argument,
    Arguments,
    New,
    Assign,
    Ternary,
    Binary,
    Unary,
    Literal,
    Parenthesized,
    Chain,
    UnresolvedId,
    Return,
    Continue,
    Pass,
    Break,
    Throw,
    Delete,
    If,
    Try,
    TryResource,
    Catch,
    Finally,
    Complete,
    Case,
    CaseItem,
    Label,
    Extends,
    Implements,
    TemplateParsed,
    TemplateText,
    Super,
    This,
    Import,
    ImportItem,
    Export,
    Alias,
    Source,
    Type,
    TypeParameters,
    TypeArguments,
    TypeExpr,
    TypeConstraint,
    TypeUnion,
    TypeIntersection,
    TypeCast,
    Members,
    /// Binds the name carried in its payload (or first `NAME` child).
    Decl,
    Key,
    ArrayAccessor,
    BuiltinCall,
    Default,
    From,
    Declare,
    Namespace,
    Debug,
    Assert,
    PackageName,
    ArrayDims,
    ArrayDim,
    Value,
    Async,
    Ellipsis,
    Await,
    Yield,
    Start,
    Stop,
    Step,
    Index,
    ForOf,
    ForIn,
    ForInit,
    ForCondition,
    ForUpdate,
}

impl StdOp {
    /// Looks a tag up by its upper-case name (`"FILE_ROOT"`, `"DECL"`, ...).
    pub fn from_str(s: &str) -> Option<Self> {
        StdOp::iter().find(|op| op.name() == s)
    }

    /// Iterates over the tags introducing a scope.
    pub fn scoped() -> impl Iterator<Item = StdOp> {
        StdOp::iter().filter(|op| op.has_own_scope())
    }
}

impl OpType for StdOp {
    fn flags(&self) -> OpFlags {
        match self {
            StdOp::FileRoot
            | StdOp::Lang
            | StdOp::Block
            | StdOp::BlockConditional
            | StdOp::Condition => OpFlags::OWN_SCOPE,

            StdOp::Decl => OpFlags::DECL,

            StdOp::Discarded => OpFlags::DISCARDED,

            StdOp::None
            | StdOp::Special
            | StdOp::List
            | StdOp::DeclList
            | StdOp::Fold
            | StdOp::CopyOf
            | StdOp::Name
            | StdOp::Props
            | StdOp::Modifier
            | StdOp::Modifiers
            | StdOp::Expr
            | StdOp::ExprList
            | StdOp::Init
            | StdOp::BlockWrap
            | StdOp::Part
            | StdOp::Item
            | StdOp::Call
            | StdOp::DynamicCall
            | StdOp::Argument
            | StdOp::Arguments
            | StdOp::New
            | StdOp::Assign
            | StdOp::Ternary
            | StdOp::Binary
            | StdOp::Unary
            | StdOp::Literal
            | StdOp::Parenthesized
            | StdOp::Chain
            | StdOp::UnresolvedId
            | StdOp::Return
            | StdOp::Continue
            | StdOp::Pass
            | StdOp::Break
            | StdOp::Throw
            | StdOp::Delete
            | StdOp::If
            | StdOp::Try
            | StdOp::TryResource
            | StdOp::Catch
            | StdOp::Finally
            | StdOp::Complete
            | StdOp::Case
            | StdOp::CaseItem
            | StdOp::Label
            | StdOp::Extends
            | StdOp::Implements
            | StdOp::TemplateParsed
            | StdOp::TemplateText
            | StdOp::Super
            | StdOp::This
            | StdOp::Import
            | StdOp::ImportItem
            | StdOp::Export
            | StdOp::Alias
            | StdOp::Source
            | StdOp::Type
            | StdOp::TypeParameters
            | StdOp::TypeArguments
            | StdOp::TypeExpr
            | StdOp::TypeConstraint
            | StdOp::TypeUnion
            | StdOp::TypeIntersection
            | StdOp::TypeCast
            | StdOp::Members
            | StdOp::Key
            | StdOp::ArrayAccessor
            | StdOp::BuiltinCall
            | StdOp::Default
            | StdOp::From
            | StdOp::Declare
            | StdOp::Namespace
            | StdOp::Debug
            | StdOp::Assert
            | StdOp::PackageName
            | StdOp::ArrayDims
            | StdOp::ArrayDim
            | StdOp::Value
            | StdOp::Async
            | StdOp::Ellipsis
            | StdOp::Await
            | StdOp::Yield
            | StdOp::Start
            | StdOp::Stop
            | StdOp::Step
            | StdOp::Index
            | StdOp::ForOf
            | StdOp::ForIn
            | StdOp::ForInit
            | StdOp::ForCondition
            | StdOp::ForUpdate => OpFlags::empty(),
        }
    }

    fn name(&self) -> &'static str {
        (*self).into()
    }
}
