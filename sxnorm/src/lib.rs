//! Sxnorm: rewrites the raw tags emitted by source front ends into the shared
//! canonical vocabulary of [`sxtag`], and records the lexical scopes of the
//! resulting tree.
//!
//! Example
//! ```
//! use sxnorm::prelude::*;
//! use sxtag::prelude::*;
//!
//! let span = |start| Span::new(start, start + 1, 1, start + 1);
//! let tree = Node::new(StdOp::FileRoot, span(0)).with_child(
//!     Node::new(JavaRawOp::DirectiveRequires, span(1)).with_text("java.base"),
//! );
//!
//! let canonical = Normalizer::new(Language::Java).normalize(tree).unwrap();
//! let directive = &canonical.root().children[0];
//! assert_eq!(directive.op, Op::Java(JavaOp::DirectiveRequires));
//! assert_eq!(directive.text(), Some("java.base"));
//! assert!(!canonical.root().contains_raw());
//! ```

/// Concurrent normalization of many files.
pub mod batch;
/// Normalizer settings.
pub mod config;
pub mod error;
/// Single-tree normalization.
pub mod normalizer;
/// Per-language rewrite rules.
pub mod rules;

pub mod prelude {
    pub use crate::batch::normalize_batch;
    pub use crate::config::NormalizerConfig;
    pub use crate::error::{ConfigError, NormalizeError, NormalizeResult};
    pub use crate::normalizer::{CanonicalTree, NormalizeStats, Normalizer};
    pub use crate::rules::{RewriteRules, rules_for};
}
