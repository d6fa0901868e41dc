//! Operator kinds attached to `BINARY` and `UNARY` nodes.
//!
//! Operators are a discriminant field of the node rather than distinct tags,
//! which keeps the tag vocabulary from multiplying across operators. Each
//! operator belongs to exactly one [`OperatorClass`] so analyses that only care
//! about, say, comparisons do not need to enumerate them.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumTryAs, IntoEnumIterator};

/// Coarse grouping of operators.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorClass {
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
    /// Reference identity (`===`, `is`)
    Identity,
    /// Container membership (`in`, `not in`)
    Membership,
    /// Runtime type tests and conversions (`instanceof`, `as`, `typeof`)
    TypeTest,
    /// Null coalescing (`??`)
    Coalesce,
}

/// Binary operators
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    /// Logical or
    Or,
    /// Logical and
    And,
    /// Bitwise or
    BwOr,
    /// Bitwise exclusive or
    BwXor,
    /// Bitwise and
    BwAnd,
    /// Equality
    Eq,
    /// Inequality
    Neq,
    /// Strict (identity) equality
    EqId,
    /// Strict (identity) inequality
    NeqId,
    Lt,
    Le,
    Gt,
    Ge,
    /// Membership test
    In,
    /// Runtime type test
    Instanceof,
    /// Arithmetic shift right
    Shr,
    /// Logical (zero filling) shift right
    ShrLogical,
    /// Shift left
    Shl,
    Add,
    Sub,
    Mul,
    /// Matrix multiplication
    MulMat,
    Div,
    /// Floor (integer) division
    IDiv,
    Mod,
    Pow,
    /// Null coalescing
    Coalesce,
    /// Checked conversion
    As,
    NotIn,
    Is,
    IsNot,
}

impl BinaryOp {
    /// Creates a [`BinaryOp`] from its surface symbol.
    pub fn from_str(s: &str) -> Option<Self> {
        BinaryOp::iter().find(|op| op.to_str() == s)
    }

    /// Returns the surface symbol of the [`BinaryOp`].
    pub fn to_str(&self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BwOr => "|",
            BinaryOp::BwXor => "^",
            BinaryOp::BwAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::EqId => "===",
            BinaryOp::NeqId => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::In => "in",
            BinaryOp::Instanceof => "instanceof",
            BinaryOp::Shr => ">>",
            BinaryOp::ShrLogical => ">>>",
            BinaryOp::Shl => "<<",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::MulMat => "@",
            BinaryOp::Div => "/",
            BinaryOp::IDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Coalesce => "??",
            BinaryOp::As => "as",
            BinaryOp::NotIn => "not in",
            BinaryOp::Is => "is",
            BinaryOp::IsNot => "is not",
        }
    }

    /// Returns the class this operator belongs to.
    pub fn class(&self) -> OperatorClass {
        match self {
            BinaryOp::Add
            | BinaryOp::Sub
            | BinaryOp::Mul
            | BinaryOp::MulMat
            | BinaryOp::Div
            | BinaryOp::IDiv
            | BinaryOp::Mod
            | BinaryOp::Pow => OperatorClass::Arithmetic,
            BinaryOp::Eq
            | BinaryOp::Neq
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => OperatorClass::Comparison,
            BinaryOp::Or | BinaryOp::And => OperatorClass::Logical,
            BinaryOp::BwOr
            | BinaryOp::BwXor
            | BinaryOp::BwAnd
            | BinaryOp::Shr
            | BinaryOp::ShrLogical
            | BinaryOp::Shl => OperatorClass::Bitwise,
            BinaryOp::EqId | BinaryOp::NeqId | BinaryOp::Is | BinaryOp::IsNot => {
                OperatorClass::Identity
            }
            BinaryOp::In | BinaryOp::NotIn => OperatorClass::Membership,
            BinaryOp::Instanceof | BinaryOp::As => OperatorClass::TypeTest,
            BinaryOp::Coalesce => OperatorClass::Coalesce,
        }
    }

    /// Returns true if `a op b` can be read as `b op a`.
    pub fn is_commutative(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Mul
                | BinaryOp::Eq
                | BinaryOp::Neq
                | BinaryOp::EqId
                | BinaryOp::NeqId
                | BinaryOp::BwOr
                | BinaryOp::BwXor
                | BinaryOp::BwAnd
        )
    }

    /// Returns true if the right operand may be skipped at runtime.
    pub fn is_short_circuit(&self) -> bool {
        matches!(self, BinaryOp::Or | BinaryOp::And | BinaryOp::Coalesce)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    /// Numeric identity, `+x`
    Plus,
    /// Negation, `-x`
    Minus,
    /// Logical not
    Not,
    /// Bitwise complement
    BwNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    /// `typeof x`
    TypeOf,
    /// `void x`
    Void,
}

impl UnaryOp {
    /// Creates a prefix [`UnaryOp`] from its surface symbol.
    ///
    /// Postfix operators share their symbol with the prefix form and are
    /// therefore never returned.
    pub fn from_str(s: &str) -> Option<Self> {
        UnaryOp::iter().find(|op| op.is_prefix() && op.to_str() == s)
    }

    /// Returns the surface symbol of the [`UnaryOp`].
    pub fn to_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BwNot => "~",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Void => "void",
        }
    }

    /// Returns true unless the operator is written after its operand.
    pub fn is_prefix(&self) -> bool {
        !matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }

    /// Returns the class this operator belongs to.
    pub fn class(&self) -> OperatorClass {
        match self {
            UnaryOp::Plus
            | UnaryOp::Minus
            | UnaryOp::PreIncrement
            | UnaryOp::PreDecrement
            | UnaryOp::PostIncrement
            | UnaryOp::PostDecrement => OperatorClass::Arithmetic,
            UnaryOp::Not | UnaryOp::Void => OperatorClass::Logical,
            UnaryOp::BwNot => OperatorClass::Bitwise,
            UnaryOp::TypeOf => OperatorClass::TypeTest,
        }
    }
}

/// Operator carried by an expression node.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operator {
    pub fn class(&self) -> OperatorClass {
        match self {
            Operator::Binary(op) => op.class(),
            Operator::Unary(op) => op.class(),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Operator::Binary(op) => op.to_str(),
            Operator::Unary(op) => op.to_str(),
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Operator::Binary(op)
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Operator::Unary(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_symbols_are_unique() {
        for op in BinaryOp::iter() {
            assert_eq!(BinaryOp::from_str(op.to_str()), Some(op));
        }
    }

    #[test]
    fn every_class_is_inhabited() {
        for class in OperatorClass::iter() {
            let binary = BinaryOp::iter().any(|op| op.class() == class);
            let unary = UnaryOp::iter().any(|op| op.class() == class);
            assert!(binary || unary, "{class:?} has no operator");
        }
    }

    #[test]
    fn postfix_forms_are_not_parsed() {
        assert_eq!(UnaryOp::from_str("++"), Some(UnaryOp::PreIncrement));
        assert_eq!(UnaryOp::from_str("--"), Some(UnaryOp::PreDecrement));
        assert_eq!(UnaryOp::from_str("typeof"), Some(UnaryOp::TypeOf));
        assert!(!UnaryOp::PostIncrement.is_prefix());
    }

    #[test]
    fn classes() {
        assert_eq!(BinaryOp::Coalesce.class(), OperatorClass::Coalesce);
        assert_eq!(BinaryOp::Instanceof.class(), OperatorClass::TypeTest);
        assert_eq!(BinaryOp::NotIn.class(), OperatorClass::Membership);
        assert_eq!(
            Operator::from(BinaryOp::IsNot).class(),
            OperatorClass::Identity
        );
        assert!(BinaryOp::Coalesce.is_short_circuit());
        assert!(!BinaryOp::Sub.is_commutative());
    }
}
