//! Java vocabulary.
//!
//! [`JavaRawOp`] covers what the Java grammar cannot classify on its own:
//! declarations whose binding role depends on their position, casts and
//! instantiations before type resolution, module directives before module
//! semantics are known. [`JavaOp`] holds the Java constructs that have no
//! shared counterpart but are kept as-is in canonical trees.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{
    lang::Language,
    optype::{OpFlags, OpType},
};

/// Java-specific tags allowed in canonical trees.
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
pub enum JavaOp {
    Throws,
    /// One resource of a try-with-resources statement.
    Resource,
    TypeWildcard,
    Bound,
    /// Target list of a qualified `exports`/`opens` directive.
    To,
    /// Implementation list of a `provides` directive.
    With,
    DirectiveRequires,
    DirectiveExports,
    DirectiveOpens,
    DirectiveUses,
    DirectiveProvides,
    Initializer,
    StaticInitializer,
}

impl JavaOp {
    pub fn from_str(s: &str) -> Option<Self> {
        JavaOp::iter().find(|op| op.name() == s)
    }
}

impl OpType for JavaOp {
    fn flags(&self) -> OpFlags {
        match self {
            JavaOp::Throws
            | JavaOp::Resource
            | JavaOp::TypeWildcard
            | JavaOp::Bound
            | JavaOp::To
            | JavaOp::With
            | JavaOp::DirectiveRequires
            | JavaOp::DirectiveExports
            | JavaOp::DirectiveOpens
            | JavaOp::DirectiveUses
            | JavaOp::DirectiveProvides
            | JavaOp::Initializer
            | JavaOp::StaticInitializer => OpFlags::empty(),
        }
    }

    fn name(&self) -> &'static str {
        (*self).into()
    }

    fn language(&self) -> Option<Language> {
        Some(Language::Java)
    }
}

/// Java surface constructs eliminated by normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JavaRawOp {
    /// `package a.b.c;`
    DeclPackage,
    /// `String value() default "";` inside an `@interface`.
    DeclAnnotationElement,
    /// Explicit receiver parameter, `void m(Outer this)`.
    DeclReceivedParameter,
    /// `catch (IOException | SQLException e)`
    DeclCatchParameter,
    /// Generic type application, `List<String>`.
    TypeInstantiation,
    /// Class literal, `String.class`.
    ClassReference,
    /// `this(...)` or `super(...)` as the first constructor statement.
    ExplicitCtorInvoke,
    /// One `[expr]` of an array creation expression.
    ArrayDimExpr,
    /// `new int[n][]` with optional initializer.
    ArrayInstantiation,
    /// `(T) expr`, possibly with an intersection target `(A & B) expr`.
    TypeCast,
    /// Qualified method invocation, `recv.<T>name(args)`.
    MethodAccess,
    /// `Type::method` or `Type::new`.
    MethodReference,
    DirectiveRequires,
    DirectiveExports,
    DirectiveOpens,
    DirectiveUses,
    DirectiveProvides,
    /// Inner class creation through an outer instance, `outer.new Inner(args)`.
    NewQualified,
}

impl JavaRawOp {
    pub fn from_str(s: &str) -> Option<Self> {
        JavaRawOp::iter().find(|op| op.to_str() == s)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            JavaRawOp::DeclPackage => "RAW_DECL_PACKAGE",
            JavaRawOp::DeclAnnotationElement => "RAW_DECL_ANNOTATION_ELEMENT",
            JavaRawOp::DeclReceivedParameter => "RAW_DECL_RECEIVED_PARAMETER",
            JavaRawOp::DeclCatchParameter => "RAW_DECL_CATCH_PARAMETER",
            JavaRawOp::TypeInstantiation => "RAW_TYPE_INSTANTIATION",
            JavaRawOp::ClassReference => "RAW_CLASS_REFERENCE",
            JavaRawOp::ExplicitCtorInvoke => "RAW_EXPLICIT_CTOR_INVOKE",
            JavaRawOp::ArrayDimExpr => "RAW_ARRAY_DIM_EXPR",
            JavaRawOp::ArrayInstantiation => "RAW_ARRAY_INSTANTIATION",
            JavaRawOp::TypeCast => "RAW_TYPE_CAST",
            JavaRawOp::MethodAccess => "RAW_METHOD_ACCESS",
            JavaRawOp::MethodReference => "RAW_METHOD_REFERENCE",
            JavaRawOp::DirectiveRequires => "RAW_DIRECTIVE_REQUIRES",
            JavaRawOp::DirectiveExports => "RAW_DIRECTIVE_EXPORTS",
            JavaRawOp::DirectiveOpens => "RAW_DIRECTIVE_OPENS",
            JavaRawOp::DirectiveUses => "RAW_DIRECTIVE_USES",
            JavaRawOp::DirectiveProvides => "RAW_DIRECTIVE_PROVIDES",
            JavaRawOp::NewQualified => "RAW_NEW_QUALIFIED",
        }
    }

    /// The canonical directive a raw module directive resolves to, if this is one.
    pub fn directive(&self) -> Option<JavaOp> {
        match self {
            JavaRawOp::DirectiveRequires => Some(JavaOp::DirectiveRequires),
            JavaRawOp::DirectiveExports => Some(JavaOp::DirectiveExports),
            JavaRawOp::DirectiveOpens => Some(JavaOp::DirectiveOpens),
            JavaRawOp::DirectiveUses => Some(JavaOp::DirectiveUses),
            JavaRawOp::DirectiveProvides => Some(JavaOp::DirectiveProvides),
            _ => None,
        }
    }
}

impl OpType for JavaRawOp {
    #[inline]
    fn flags(&self) -> OpFlags {
        OpFlags::RAW
    }

    fn name(&self) -> &'static str {
        self.to_str()
    }

    fn language(&self) -> Option<Language> {
        Some(Language::Java)
    }
}
