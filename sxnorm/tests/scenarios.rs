mod common;

use common::at;
use sxnorm::prelude::*;
use sxtag::prelude::*;

fn java(tree: Node) -> CanonicalTree {
    Normalizer::new(Language::Java).normalize(tree).unwrap()
}

#[test]
fn qualified_creation_with_raw_arguments() {
    // outer.new Inner((long) x, String.class)
    let tree = at(StdOp::FileRoot, 0).with_child(
        at(JavaRawOp::NewQualified, 1)
            .with_child(at(StdOp::Name, 2).with_text("outer"))
            .with_child(at(StdOp::Type, 3).with_text("Inner"))
            .with_child(
                at(JavaRawOp::TypeCast, 4)
                    .with_child(at(StdOp::Type, 5).with_text("long"))
                    .with_child(at(StdOp::Name, 6).with_text("x")),
            )
            .with_child(
                at(JavaRawOp::ClassReference, 7).with_child(at(StdOp::Type, 8).with_text("String")),
            ),
    );
    let out = java(tree);

    let new = &out.root().children[0];
    assert!(new.is(StdOp::New));
    assert_eq!(new.span, Span::new(1, 2, 1, 2));

    let chain = &new.children[0];
    assert!(chain.is(StdOp::Chain));
    assert_eq!(chain.children[0].text(), Some("outer"));
    assert_eq!(chain.children[1].text(), Some("Inner"));

    let arguments = &new.children[1];
    assert!(arguments.is(StdOp::Arguments));
    let ops: Vec<_> = arguments.children.iter().map(|c| c.op).collect();
    assert_eq!(ops, vec![Op::Std(StdOp::TypeCast), Op::Std(StdOp::TypeExpr)]);
    let starts: Vec<_> = arguments.children.iter().map(|c| c.span.start).collect();
    assert_eq!(starts, vec![4, 7]);
    assert_eq!(new.children.len(), 2);
    assert!(!out.root().contains_raw());
}

#[test]
fn requires_directive_keeps_its_target() {
    let tree = at(StdOp::FileRoot, 0).with_child(
        at(JavaRawOp::DirectiveRequires, 1)
            .with_text("java.sql")
            .with_child(at(StdOp::Modifier, 2).with_text("transitive")),
    );
    let out = java(tree);

    let directive = &out.root().children[0];
    assert_eq!(directive.op, Op::Java(JavaOp::DirectiveRequires));
    assert_eq!(directive.text(), Some("java.sql"));
    assert_eq!(directive.children.len(), 1);
    assert_eq!(directive.span, Span::new(1, 2, 1, 2));
}

#[test]
fn discarded_placeholder_is_dropped_and_declaration_bound() {
    let tree = at(StdOp::FileRoot, 0).with_child(
        at(StdOp::Block, 1)
            .with_child(
                at(StdOp::Decl, 2)
                    .with_text("x")
                    .with_child(at(StdOp::Type, 3).with_text("int")),
            )
            .with_child(at(StdOp::Discarded, 4).with_child(at(StdOp::Name, 5).with_text("junk"))),
    );
    let out = java(tree);

    let block = &out.root().children[0];
    assert_eq!(block.children.len(), 1);
    assert!(block.children[0].is(StdOp::Decl));

    let scope = out.scope_of(block).unwrap();
    assert_eq!(scope.names(), vec!["x"]);
    assert_eq!(scope.bindings()[0].span, Span::new(2, 3, 1, 3));
    assert!(out.scope_of(out.root()).unwrap().bindings().is_empty());

    let stats = out.stats();
    assert_eq!(stats.discarded, 1);
    assert_eq!(stats.visited, 5);
    assert_eq!(stats.scopes, 2);
    assert_eq!(stats.bindings, 1);
}

#[test]
fn raw_declarations_are_bound_after_rewriting() {
    let tree = at(StdOp::FileRoot, 0)
        .with_child(at(JavaRawOp::DeclPackage, 1).with_text("com.example"))
        .with_child(
            at(StdOp::Block, 2).with_child(
                at(JavaRawOp::DeclCatchParameter, 3)
                    .with_child(at(StdOp::Type, 4).with_text("IOException"))
                    .with_child(at(StdOp::Type, 5).with_text("SQLException"))
                    .with_child(at(StdOp::Name, 6).with_text("e")),
            ),
        );
    let out = java(tree);
    let scopes = out.scopes();

    let file = out.root().scope.unwrap();
    let block = out.root().children[1].scope.unwrap();
    assert_eq!(scopes[file].names(), vec!["com.example"]);
    assert_eq!(scopes[block].names(), vec!["e"]);
    assert_eq!(scopes.resolve(block, "com.example"), Some(file));
    assert_eq!(scopes.resolve(file, "e"), None);
}

#[test]
fn duplicate_names_are_recorded() {
    let tree = at(StdOp::FileRoot, 0)
        .with_child(at(StdOp::Decl, 1).with_text("x"))
        .with_child(at(StdOp::Decl, 2).with_text("x"));
    let out = java(tree);

    let file = out.scope_of(out.root()).unwrap();
    let spans: Vec<_> = file.lookup("x").map(|b| b.span.start).collect();
    assert_eq!(spans, vec![1, 2]);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let tree = at(StdOp::FileRoot, 0)
        .with_child(
            at(JavaRawOp::MethodAccess, 1)
                .with_child(at(StdOp::Name, 2).with_text("list"))
                .with_child(at(StdOp::Name, 3).with_text("add"))
                .with_child(at(StdOp::Arguments, 4).with_child(at(StdOp::Literal, 5).with_text("1"))),
        )
        .with_child(at(StdOp::Block, 6).with_child(at(StdOp::Decl, 7).with_text("y")));
    let normalizer = Normalizer::new(Language::Java);

    let once = normalizer.normalize(tree).unwrap();
    let twice = normalizer.normalize(once.root().clone()).unwrap();

    assert!(twice.root().same_shape(once.root()));
    // Fresh scope arenas hand out the same ids.
    assert_eq!(twice.root(), once.root());
    assert_eq!(twice.stats().rewritten, 0);
    assert_eq!(twice.scopes().len(), once.scopes().len());
    assert_eq!(twice.scopes().binding_count(), once.scopes().binding_count());
}

#[test]
fn depth_limit_is_enforced() {
    fn chain(depth: u32) -> Node {
        let mut node = at(StdOp::Pass, depth);
        for start in (0..depth).rev() {
            node = at(StdOp::Block, start).with_child(node);
        }
        node
    }

    let config = NormalizerConfig {
        max_depth: 50,
        ..NormalizerConfig::default()
    };
    let normalizer = Normalizer::with_config(Language::Java, config);

    let err = normalizer.normalize(chain(50)).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::DepthLimitExceeded {
            limit: 50,
            span: Span::new(50, 51, 1, 51),
        }
    );
    assert!(normalizer.normalize(chain(49)).is_ok());
}

fn expressions(depth: usize) -> Node {
    let mut node = at(StdOp::Pass, 0);
    for _ in 0..depth {
        node = at(StdOp::Expr, 0).with_child(node);
    }
    node
}

// Tear down level by level, the derived drop glue is recursive.
fn dismantle(mut node: Node) {
    while let Some(child) = node.children.pop() {
        node = child;
    }
}

#[test]
fn deep_trees_do_not_recurse() {
    let config = NormalizerConfig {
        max_depth: 20_000,
        ..NormalizerConfig::default()
    };
    let out = Normalizer::with_config(Language::Java, config)
        .normalize(expressions(10_000))
        .unwrap();
    assert_eq!(out.stats().visited, 10_001);
    dismantle(out.into_root());
}

#[test]
fn default_depth_limit_fails_cleanly() {
    let limit = NormalizerConfig::default().max_depth;
    let normalizer = Normalizer::new(Language::Java);

    let err = normalizer.normalize(expressions(limit)).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::DepthLimitExceeded {
            limit,
            span: Span::new(0, 1, 1, 1),
        }
    );

    let out = normalizer.normalize(expressions(limit - 1)).unwrap();
    assert_eq!(out.stats().visited, limit);
    dismantle(out.into_root());
}
