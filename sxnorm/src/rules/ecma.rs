use smallvec::smallvec;
use sxtag::prelude::*;

use super::{RawNode, RewriteRules, Rewritten, unmapped, wrap};
use crate::error::{NormalizeError, NormalizeResult};

/// Rules for the raw tags of the ECMAScript front end.
pub struct EcmaRules;

impl RewriteRules for EcmaRules {
    fn language(&self) -> Language {
        Language::Ecma
    }

    fn rewrite(&self, op: RawOp, node: Node) -> NormalizeResult<Rewritten> {
        let RawOp::Ecma(op) = op else {
            return Err(unmapped(op, Language::Ecma, node.span));
        };
        let raw = RawNode::new(op, node);

        let node = match op {
            EcmaRawOp::VariableList => variable_list(raw)?,
            EcmaRawOp::TemplateString => template_string(raw),
            EcmaRawOp::Spread => {
                raw.arity(1)?;
                raw.retag(StdOp::Ellipsis)
            }
            EcmaRawOp::ExportDefault => {
                raw.at_least(1)?;
                let default = Node::new(StdOp::Default, raw.span);
                let mut node = raw.retag(StdOp::Export);
                node.children.insert(0, default);
                node
            }
            EcmaRawOp::CompoundAssign => compound_assign(raw)?,
            EcmaRawOp::OptionalChain => {
                raw.at_least(2)?;
                let mut node = raw.retag(StdOp::Chain);
                node.text = Some("?.".into());
                node
            }
        };

        Ok(smallvec![node])
    }
}

/// `let a = 1, b;` into `DECL_LIST [MODIFIER?, DECL a, DECL b]`.
///
/// Each `ITEM` is `[NAME, value?]`; destructuring patterns are expected to be
/// expanded by the front end.
fn variable_list(mut raw: RawNode) -> NormalizeResult<Node> {
    let modifier = raw.take(StdOp::Modifier);
    if raw.children.is_empty() {
        return Err(raw.malformed("variable list without declarators"));
    }

    let mut decls = Vec::with_capacity(raw.children.len());
    for mut item in std::mem::take(&mut raw.children) {
        if !item.is(StdOp::Item) {
            return Err(raw.malformed(format!("unexpected `{}` in a variable list", item.op)));
        }
        let Some(at) = item.children.iter().position(|c| c.is(StdOp::Name)) else {
            return Err(raw.malformed("declarator without a name"));
        };
        let name = item.children.remove(at);
        let Some(text) = name.text.clone() else {
            return Err(raw.malformed("declarator name without text"));
        };

        let mut decl = Node::new(StdOp::Decl, item.span)
            .with_text(text)
            .with_child(Node::new(StdOp::Props, item.span).with_text("variable"))
            .with_child(name);
        if !item.children.is_empty() {
            decl.push(wrap(StdOp::Init, item.children));
        }
        decls.push(decl);
    }

    let mut node = Node::new(StdOp::DeclList, raw.span);
    node.text = raw.text;
    if let Some(modifier) = modifier {
        node.push(modifier);
    }
    Ok(node.with_children(decls))
}

fn template_string(raw: RawNode) -> Node {
    let mut node = raw.retag(StdOp::TemplateParsed);
    for part in &mut node.children {
        if part.is(StdOp::Literal) {
            part.op = Op::Std(StdOp::TemplateText);
        }
    }
    node
}

/// `a op= b` into `ASSIGN(op) [a, b]`. The target is evaluated once, so it is
/// kept as the single first child.
fn compound_assign(raw: RawNode) -> NormalizeResult<Node> {
    let Some(Operator::Binary(op)) = raw.operator else {
        return Err(raw.malformed("compound assignment without a binary operator"));
    };

    let [target, value] = match <[Node; 2]>::try_from(raw.children) {
        Ok(pair) => pair,
        Err(children) => {
            return Err(NormalizeError::MalformedRawNode {
                op: raw.op,
                span: raw.span,
                reason: format!("expected a target and a value, found {} children", children.len()),
            });
        }
    };

    Ok(Node::new(StdOp::Assign, raw.span)
        .with_operator(op)
        .with_child(target)
        .with_child(value))
}
