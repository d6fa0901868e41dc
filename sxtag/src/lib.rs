//! Sxtag: the closed operation-type taxonomy shared by source front ends.
//!
//! Every syntax tree node carries an [`Op`](op::Op) tag drawn from one of three
//! subspaces:
//!  - the shared vocabulary [`StdOp`](std_op::StdOp), understood by every
//!    downstream pass;
//!  - language-specific canonical tags such as [`JavaOp`](lang::java::JavaOp);
//!  - raw tags ([`RawOp`](op::RawOp)), surface constructs a grammar emits before
//!    it can pick a canonical shape. They must be rewritten away before a tree
//!    reaches semantic analysis.
//!
//! All tags implement [`OpType`](optype::OpType), which exposes four structural
//! flags (raw, own scope, declaration, discarded) computed by a total `match`,
//! so adding a variant without classifying it is a compile error.
//!
//! Example
//! ```
//! use sxtag::prelude::*;
//!
//! assert!(Op::from(StdOp::Block).has_own_scope());
//! assert!(Op::from(StdOp::Decl).is_decl());
//! assert!(Op::from(JavaRawOp::TypeCast).is_raw());
//! assert_eq!(Op::all().filter(|op| op.is_discarded()).count(), 1);
//! ```

/// Per-language vocabularies.
pub mod lang;
/// Syntax tree nodes.
pub mod node;
/// Unified tag type.
pub mod op;
/// Operator kinds carried by expression nodes.
pub mod operator;
/// Structural flags and the tag capability trait.
pub mod optype;
/// Scope arena and bindings.
pub mod scope;
/// Source spans.
pub mod span;
/// Shared canonical vocabulary.
pub mod std_op;

pub mod prelude {
    //! Convenient re-exports for front ends and consumers.
    pub use crate::lang::{Language, ecma::EcmaRawOp, java::JavaOp, java::JavaRawOp};
    pub use crate::node::Node;
    pub use crate::op::{Op, RawOp};
    pub use crate::operator::{BinaryOp, Operator, OperatorClass, UnaryOp};
    pub use crate::optype::{OpFlags, OpType};
    pub use crate::scope::{Binding, Scope, ScopeId, ScopeTree};
    pub use crate::span::Span;
    pub use crate::std_op::StdOp;
}
