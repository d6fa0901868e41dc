use smallvec::smallvec;
use sxtag::prelude::*;

use super::{RawNode, RewriteRules, Rewritten, decl, unmapped, wrap};
use crate::error::NormalizeResult;

/// Rules for the raw tags of the Java front end.
pub struct JavaRules;

impl RewriteRules for JavaRules {
    fn language(&self) -> Language {
        Language::Java
    }

    fn rewrite(&self, op: RawOp, node: Node) -> NormalizeResult<Rewritten> {
        let RawOp::Java(op) = op else {
            return Err(unmapped(op, Language::Java, node.span));
        };
        let raw = RawNode::new(op, node);

        let node = match op {
            JavaRawOp::DeclPackage => declaration(raw, "package", None)?,
            JavaRawOp::DeclAnnotationElement => declaration(raw, "annotation_element", None)?,
            JavaRawOp::DeclReceivedParameter => {
                declaration(raw, "receiver_parameter", Some("this"))?
            }
            JavaRawOp::DeclCatchParameter => catch_parameter(raw)?,
            JavaRawOp::TypeInstantiation => {
                raw.at_least(1)?;
                raw.retag(StdOp::Type)
            }
            JavaRawOp::ClassReference => {
                if raw.children.is_empty() && raw.text.is_none() {
                    return Err(raw.malformed("class literal without a type"));
                }
                raw.retag(StdOp::TypeExpr)
            }
            JavaRawOp::ExplicitCtorInvoke => explicit_ctor_invoke(raw)?,
            JavaRawOp::ArrayDimExpr => {
                raw.arity(1)?;
                raw.retag(StdOp::ArrayDim)
            }
            JavaRawOp::ArrayInstantiation => array_instantiation(raw)?,
            JavaRawOp::TypeCast => type_cast(raw)?,
            JavaRawOp::MethodAccess => method_access(raw)?,
            JavaRawOp::MethodReference => {
                raw.at_least(2)?;
                let mut node = raw.retag(StdOp::Chain);
                node.text = Some("::".into());
                node
            }
            JavaRawOp::DirectiveRequires => directive(raw, JavaOp::DirectiveRequires)?,
            JavaRawOp::DirectiveExports => directive(raw, JavaOp::DirectiveExports)?,
            JavaRawOp::DirectiveOpens => directive(raw, JavaOp::DirectiveOpens)?,
            JavaRawOp::DirectiveUses => directive(raw, JavaOp::DirectiveUses)?,
            JavaRawOp::DirectiveProvides => directive(raw, JavaOp::DirectiveProvides)?,
            JavaRawOp::NewQualified => new_qualified(raw)?,
        };

        Ok(smallvec![node])
    }
}

fn declaration(raw: RawNode, kind: &str, default_name: Option<&str>) -> NormalizeResult<Node> {
    let Some(name) = raw.name().or_else(|| default_name.map(Into::into)) else {
        return Err(raw.malformed(format!("{} declaration without a name", kind)));
    };
    Ok(decl(raw, kind, name))
}

/// `catch (A | B e)`: the alternatives become one `TYPE_UNION`.
fn catch_parameter(mut raw: RawNode) -> NormalizeResult<Node> {
    if raw.position(StdOp::Type).is_none() && raw.position(StdOp::TypeUnion).is_none() {
        return Err(raw.malformed("catch parameter without a caught type"));
    }
    raw.fold(|child| child.is(StdOp::Type), StdOp::TypeUnion, 2);
    declaration(raw, "catch_parameter", None)
}

/// `this(args)`, `super(args)` or `outer.super(args)`.
fn explicit_ctor_invoke(mut raw: RawNode) -> NormalizeResult<Node> {
    let Some(at) = raw
        .children
        .iter()
        .position(|child| child.is(StdOp::This) || child.is(StdOp::Super))
    else {
        return Err(raw.malformed("constructor invocation without `this` or `super`"));
    };

    let mut before: Vec<Node> = raw.children.drain(..=at).collect();
    let target = before.pop();
    let (type_arguments, qualifiers): (Vec<Node>, Vec<Node>) = before
        .into_iter()
        .partition(|child| child.is(StdOp::TypeArguments));

    let callee = match (target, qualifiers.is_empty()) {
        (Some(target), true) => target,
        (Some(target), false) => {
            let mut chain = qualifiers;
            chain.push(target);
            wrap(StdOp::Chain, chain)
        }
        (None, _) => return Err(raw.malformed("constructor invocation without a target")),
    };

    let arguments = raw
        .take(StdOp::Arguments)
        .unwrap_or_else(|| Node::new(StdOp::Arguments, raw.span));

    Ok(Node::new(StdOp::Call, raw.span)
        .with_child(callee)
        .with_children(type_arguments)
        .with_child(arguments)
        .with_children(raw.children))
}

/// `new int[n][m]`: every dimension, sized or not, lands in one `ARRAY_DIMS`.
fn array_instantiation(mut raw: RawNode) -> NormalizeResult<Node> {
    let Some(ty) = raw.take(StdOp::Type) else {
        return Err(raw.malformed("array creation without an element type"));
    };

    let mut dims = Vec::new();
    let mut rest = Vec::new();
    for child in raw.children.drain(..) {
        if child.is(StdOp::ArrayDim) {
            dims.push(child);
        } else if child.is(StdOp::ArrayDims) {
            dims.extend(child.children);
        } else {
            rest.push(child);
        }
    }
    if dims.is_empty() && rest.is_empty() {
        return Err(raw.malformed("array creation without dimensions or initializer"));
    }

    let mut node = Node::new(StdOp::New, raw.span).with_child(ty);
    if !dims.is_empty() {
        node.push(wrap(StdOp::ArrayDims, dims));
    }
    Ok(node.with_children(rest))
}

/// `(A & B) expr`: the last child is the operand, the others are targets.
fn type_cast(mut raw: RawNode) -> NormalizeResult<Node> {
    raw.at_least(2)?;
    let Some(operand) = raw.children.pop() else {
        return Err(raw.malformed("cast without an operand"));
    };

    let mut targets = std::mem::take(&mut raw.children);
    let target = match targets.len() {
        1 => targets.remove(0),
        _ => wrap(StdOp::TypeIntersection, targets),
    };

    let mut node = Node::new(StdOp::TypeCast, raw.span)
        .with_child(target)
        .with_child(operand);
    node.text = raw.text;
    Ok(node)
}

/// `recv.<T>name(args)` into `CALL [CHAIN[recv, NAME], TYPE_ARGUMENTS?, ARGUMENTS]`.
fn method_access(mut raw: RawNode) -> NormalizeResult<Node> {
    let type_arguments = raw.take(StdOp::TypeArguments);
    let arguments = raw.take(StdOp::Arguments);
    let Some(method) = raw.take_last(StdOp::Name) else {
        return Err(raw.malformed("method access without a method name"));
    };
    if raw.children.is_empty() {
        return Err(raw.malformed("method access without a receiver"));
    }

    let mut chain = std::mem::take(&mut raw.children);
    chain.push(method);

    let mut node = Node::new(StdOp::Call, raw.span).with_child(wrap(StdOp::Chain, chain));
    if let Some(type_arguments) = type_arguments {
        node.push(type_arguments);
    }
    Ok(node.with_child(arguments.unwrap_or_else(|| Node::new(StdOp::Arguments, raw.span))))
}

fn directive(raw: RawNode, op: JavaOp) -> NormalizeResult<Node> {
    if raw.name().is_none() && raw.children.is_empty() {
        return Err(raw.malformed("module directive without a target"));
    }
    Ok(raw.retag(op))
}

/// `outer.new Inner(a, b) { ... }` into
/// `NEW [CHAIN[outer, TYPE], TYPE_ARGUMENTS?, ARGUMENTS[a, b], MEMBERS?]`.
fn new_qualified(mut raw: RawNode) -> NormalizeResult<Node> {
    if raw.children.first().is_none_or(|first| first.is(StdOp::Type)) {
        return Err(raw.malformed("qualified creation without a qualifier"));
    }
    let qualifier = raw.children.remove(0);
    let Some(ty) = raw.take(StdOp::Type) else {
        return Err(raw.malformed("qualified creation without a type"));
    };
    let type_arguments = raw.take(StdOp::TypeArguments);
    let members = raw.take(StdOp::Members);

    let arguments = match raw.take(StdOp::Arguments) {
        Some(arguments) if raw.children.is_empty() => arguments,
        Some(_) => return Err(raw.malformed("arguments both listed and wrapped")),
        None if raw.children.is_empty() => Node::new(StdOp::Arguments, raw.span),
        None => wrap(StdOp::Arguments, std::mem::take(&mut raw.children)),
    };

    let mut node = Node::new(StdOp::New, raw.span).with_child(wrap(StdOp::Chain, vec![qualifier, ty]));
    if let Some(type_arguments) = type_arguments {
        node.push(type_arguments);
    }
    node.push(arguments);
    if let Some(members) = members {
        node.push(members);
    }
    Ok(node)
}
