//! Function-descriptor normalizer.
//!
//! Option values wear many function-like coats: method shorthand,
//! `function` expressions, block arrows, expression arrows, and the
//! parenthesized-object-literal arrow (`() => ({ ... })`, which must be
//! unwrapped to its inner expression rather than mistaken for a block).
//! Everything in the engine that needs "the function behind this property"
//! goes through [`parse_func_node`], which resolves all of those into one
//! borrowed [`RawFunc`] record or reports "not a function" with `None`.

use script_source::SourceText;
use smol_str::SmolStr;
use swc_common::Spanned;
use swc_ecma_ast::{
    BlockStmt, BlockStmtOrExpr, Expr, Param, Pat, Prop, PropName,
};

use crate::types::{FuncBody, FuncInfo};

/// Borrowed view of a normalized function: name, parameter nodes, body,
/// `async` flag. Converted to an owned [`FuncInfo`] via [`RawFunc::to_info`]
/// once the caller has decided to keep it.
#[derive(Debug)]
pub(crate) struct RawFunc<'a> {
    pub name: SmolStr,
    pub params: RawParams<'a>,
    pub body: Option<RawBody<'a>>,
    pub is_async: bool,
}

/// Parameter list of either arrow (`Pat`) or function (`Param`) origin.
#[derive(Debug)]
pub(crate) enum RawParams<'a> {
    Pats(&'a [Pat]),
    Params(&'a [Param]),
}

/// A body that is still a syntax-tree reference.
#[derive(Debug)]
pub(crate) enum RawBody<'a> {
    Block(&'a BlockStmt),
    Expr(&'a Expr),
}

impl RawFunc<'_> {
    /// Verbatim parameter slices, in declaration order.
    pub fn param_texts(&self, src: &SourceText<'_>) -> Vec<String> {
        match self.params {
            RawParams::Pats(pats) => pats
                .iter()
                .map(|pat| src.slice(pat.span().lo.0, pat.span().hi.0).to_string())
                .collect(),
            RawParams::Params(params) => params
                .iter()
                .map(|param| {
                    src.slice(param.pat.span().lo.0, param.pat.span().hi.0)
                        .to_string()
                })
                .collect(),
        }
    }

    /// The body as verbatim text, block or expression.
    pub fn body_text(&self, src: &SourceText<'_>) -> Option<FuncBody> {
        match self.body {
            Some(RawBody::Block(block)) => Some(FuncBody::Block(
                src.slice(block.span.lo.0, block.span.hi.0).to_string(),
            )),
            Some(RawBody::Expr(expr)) => Some(FuncBody::Expr(
                src.slice(expr.span().lo.0, expr.span().hi.0).to_string(),
            )),
            None => None,
        }
    }

    /// Renders the owned record the aggregator stores.
    pub fn to_info(&self, src: &SourceText<'_>) -> FuncInfo {
        FuncInfo {
            name: self.name.clone(),
            params: self.param_texts(src),
            body: self.body_text(src),
            is_async: self.is_async,
        }
    }
}

/// Normalizes a property/method node into a [`RawFunc`].
///
/// Returns `None` for anything that is not one of the supported callable
/// shapes (a bare value reference, a shorthand property, an accessor).
pub(crate) fn parse_func_node(prop: &Prop) -> Option<RawFunc<'_>> {
    match prop {
        Prop::KeyValue(kv) => {
            let name = prop_name_text(&kv.key)?;
            match &*kv.value {
                Expr::Arrow(arrow) => {
                    let body = match &*arrow.body {
                        BlockStmtOrExpr::BlockStmt(block) => RawBody::Block(block),
                        // `() => ({ ... })`: the real value sits inside the
                        // parenthesized expression.
                        BlockStmtOrExpr::Expr(expr) => RawBody::Expr(match &**expr {
                            Expr::Paren(paren) => &paren.expr,
                            other => other,
                        }),
                    };
                    Some(RawFunc {
                        name,
                        params: RawParams::Pats(&arrow.params),
                        body: Some(body),
                        is_async: arrow.is_async,
                    })
                }
                Expr::Fn(fn_expr) => Some(RawFunc {
                    name,
                    params: RawParams::Params(&fn_expr.function.params),
                    body: fn_expr.function.body.as_ref().map(RawBody::Block),
                    is_async: fn_expr.function.is_async,
                }),
                _ => None,
            }
        }
        Prop::Method(method) => Some(RawFunc {
            name: prop_name_text(&method.key)?,
            params: RawParams::Params(&method.function.params),
            body: method.function.body.as_ref().map(RawBody::Block),
            is_async: method.function.is_async,
        }),
        _ => None,
    }
}

/// Text of a property name, re-rendered from the interned symbol.
///
/// Identifiers must never be sliced out of the source here: a slice taken
/// near a name can drag the property's leading comment into the generated
/// member position, hoisting the comment into nonsense output. Rendering
/// from the symbol guarantees a trivia-free identifier.
pub(crate) fn prop_name_text(name: &PropName) -> Option<SmolStr> {
    match name {
        PropName::Ident(ident) => Some(SmolStr::new(ident.sym.as_str())),
        PropName::Str(s) => Some(SmolStr::new(s.value.to_string_lossy())),
        PropName::Num(n) => Some(match &n.raw {
            Some(raw) => SmolStr::new(raw.as_str()),
            None => SmolStr::new(n.value.to_string()),
        }),
        PropName::Computed(_) | PropName::BigInt(_) => None,
    }
}
