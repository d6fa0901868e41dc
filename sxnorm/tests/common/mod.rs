#![allow(dead_code)]

use rand::Rng;
use sxtag::prelude::*;

pub fn at(op: impl Into<Op>, start: u32) -> Node {
    Node::new(op, Span::new(start, start + 1, 1, start + 1))
}

/// Smallest well-formed tree rooted at a raw node tagged `op`.
pub fn minimal(op: RawOp) -> Node {
    match op {
        RawOp::Java(op) => {
            let node = at(op, 0);
            match op {
                JavaRawOp::DeclPackage => node.with_text("com.example"),
                JavaRawOp::DeclAnnotationElement => node
                    .with_child(at(StdOp::Type, 1).with_text("String"))
                    .with_child(at(StdOp::Name, 2).with_text("value")),
                JavaRawOp::DeclReceivedParameter => {
                    node.with_child(at(StdOp::Type, 1).with_text("Outer"))
                }
                JavaRawOp::DeclCatchParameter => node
                    .with_child(at(StdOp::Type, 1).with_text("Exception"))
                    .with_child(at(StdOp::Name, 2).with_text("e")),
                JavaRawOp::TypeInstantiation => node
                    .with_child(at(StdOp::Name, 1).with_text("List"))
                    .with_child(at(StdOp::TypeArguments, 2)),
                JavaRawOp::ClassReference => node.with_child(at(StdOp::Type, 1).with_text("String")),
                JavaRawOp::ExplicitCtorInvoke => node
                    .with_child(at(StdOp::This, 1))
                    .with_child(at(StdOp::Arguments, 2)),
                JavaRawOp::ArrayDimExpr => node.with_child(at(StdOp::Literal, 1).with_text("4")),
                JavaRawOp::ArrayInstantiation => node
                    .with_child(at(StdOp::Type, 1).with_text("int"))
                    .with_child(
                        at(JavaRawOp::ArrayDimExpr, 2).with_child(at(StdOp::Literal, 3).with_text("4")),
                    ),
                JavaRawOp::TypeCast => node
                    .with_child(at(StdOp::Type, 1).with_text("long"))
                    .with_child(at(StdOp::Name, 2).with_text("x")),
                JavaRawOp::MethodAccess => node
                    .with_child(at(StdOp::Name, 1).with_text("list"))
                    .with_child(at(StdOp::Name, 2).with_text("size"))
                    .with_child(at(StdOp::Arguments, 3)),
                JavaRawOp::MethodReference => node
                    .with_child(at(StdOp::Type, 1).with_text("String"))
                    .with_child(at(StdOp::Name, 2).with_text("valueOf")),
                JavaRawOp::DirectiveRequires
                | JavaRawOp::DirectiveExports
                | JavaRawOp::DirectiveOpens
                | JavaRawOp::DirectiveUses
                | JavaRawOp::DirectiveProvides => node.with_text("java.base"),
                JavaRawOp::NewQualified => node
                    .with_child(at(StdOp::Name, 1).with_text("outer"))
                    .with_child(at(StdOp::Type, 2).with_text("Inner"))
                    .with_child(at(StdOp::Arguments, 3)),
            }
        }
        RawOp::Ecma(op) => {
            let node = at(op, 0);
            match op {
                EcmaRawOp::VariableList => {
                    node.with_child(at(StdOp::Item, 1).with_child(at(StdOp::Name, 2).with_text("a")))
                }
                EcmaRawOp::TemplateString => node.with_child(at(StdOp::Literal, 1).with_text("hi")),
                EcmaRawOp::Spread => node.with_child(at(StdOp::Name, 1).with_text("rest")),
                EcmaRawOp::ExportDefault => node.with_child(at(StdOp::Name, 1).with_text("main")),
                EcmaRawOp::CompoundAssign => node
                    .with_operator(BinaryOp::Add)
                    .with_child(at(StdOp::Name, 1).with_text("a"))
                    .with_child(at(StdOp::Literal, 2).with_text("1")),
                EcmaRawOp::OptionalChain => node
                    .with_child(at(StdOp::Name, 1).with_text("a"))
                    .with_child(at(StdOp::Name, 2).with_text("b")),
            }
        }
    }
}

const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Random Java tree under a `FILE_ROOT`, mixing scopes, declarations,
/// discarded subtrees and raw nodes. Spans are unique.
pub fn random_tree(rng: &mut impl Rng, budget: usize) -> Node {
    let mut next = 0;
    let mut root = Node::new(StdOp::FileRoot, span(&mut next));
    for _ in 0..rng.random_range(1..=4) {
        root.push(random_node(rng, budget, &mut next, true));
    }
    root
}

fn span(next: &mut u32) -> Span {
    *next += 1;
    Span::new(*next, *next + 1, 1, *next)
}

fn name(rng: &mut impl Rng) -> &'static str {
    NAMES[rng.random_range(0..NAMES.len())]
}

fn random_node(rng: &mut impl Rng, budget: usize, next: &mut u32, may_discard: bool) -> Node {
    let here = span(next);
    if budget == 0 || rng.random_bool(0.3) {
        return match rng.random_range(0..=6) {
            0 => Node::new(StdOp::Name, here).with_text(name(rng)),
            1 => Node::new(StdOp::Pass, here),
            2 => Node::new(StdOp::Decl, here).with_text(name(rng)),
            3 => Node::new(JavaRawOp::DeclPackage, here).with_text(name(rng)),
            4 => Node::new(JavaRawOp::DirectiveRequires, here).with_text(name(rng)),
            5 if may_discard => Node::new(StdOp::Discarded, here),
            _ => Node::new(StdOp::Literal, here).with_text("0"),
        };
    }

    match rng.random_range(0..=7) {
        0 => {
            let count = rng.random_range(0..=4);
            Node::new(StdOp::Block, here).with_children(children(rng, budget, next, count, true))
        }
        1 => {
            let count = rng.random_range(1..=3);
            Node::new(StdOp::BlockConditional, here)
                .with_children(children(rng, budget, next, count, true))
        }
        2 => {
            let condition = Node::new(StdOp::Condition, span(next))
                .with_children(children(rng, budget, next, 1, false));
            Node::new(StdOp::If, here)
                .with_child(condition)
                .with_children(children(rng, budget, next, 1, true))
        }
        3 => {
            let count = rng.random_range(0..=2);
            Node::new(StdOp::Decl, here)
                .with_child(Node::new(StdOp::Name, span(next)).with_text(name(rng)))
                .with_children(children(rng, budget, next, count, true))
        }
        4 => Node::new(JavaRawOp::TypeCast, here)
            .with_child(Node::new(StdOp::Type, span(next)).with_text("int"))
            .with_children(children(rng, budget, next, 1, false)),
        5 => Node::new(JavaRawOp::ArrayDimExpr, here)
            .with_children(children(rng, budget, next, 1, false)),
        6 if may_discard => {
            Node::new(StdOp::Discarded, here).with_children(children(rng, budget, next, 2, true))
        }
        _ => {
            let count = rng.random_range(1..=3);
            Node::new(StdOp::Expr, here).with_children(children(rng, budget, next, count, true))
        }
    }
}

fn children(
    rng: &mut impl Rng,
    budget: usize,
    next: &mut u32,
    count: usize,
    may_discard: bool,
) -> Vec<Node> {
    (0..count)
        .map(|_| random_node(rng, budget - 1, next, may_discard))
        .collect()
}

/// Names a scope of `owner` must hold: every declaration below it, in
/// pre-order, not nested in a deeper scope.
pub fn expected_bindings(owner: &Node) -> Vec<&str> {
    let mut names = Vec::new();
    let mut stack: Vec<&Node> = owner.children.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.op.is_decl() {
            names.extend(node.bound_names());
        }
        if !node.op.has_own_scope() {
            stack.extend(node.children.iter().rev());
        }
    }
    names
}

/// Input nodes the rewrite phase enters: everything except the insides of
/// discarded subtrees.
pub fn reachable(root: &Node) -> usize {
    let mut count = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        count += 1;
        if !node.op.is_discarded() {
            stack.extend(node.children.iter());
        }
    }
    count
}
