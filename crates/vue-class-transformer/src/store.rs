//! State-binding resolution for spread-mapped vuex helpers.
//!
//! A spread entry like `...mapState({ ... })` or `...ns.mapGetters([...])`
//! can appear inside `computed` or `methods`; the resolver does not care
//! which. Each resolved binding lands in the aggregator's unified store
//! list, which later drives both field synthesis and the vuex-class import.

use smol_str::SmolStr;
use swc_common::Spanned;
use swc_ecma_ast::{
    ArrayLit, Callee, Expr, ObjectLit, Prop, PropOrSpread, SpreadElement,
};

use crate::context::Cx;
use crate::func::parse_func_node;
use crate::types::{BindingKind, StoreGetter, StoreInfo};

/// Resolves one spread entry into zero or more state bindings.
///
/// Unrecognized spreads (not a call, not a `mapX` helper, unsupported
/// argument shape) produce a warning and no bindings.
pub(crate) fn resolve_spread(cx: &mut Cx<'_>, spread: &SpreadElement) {
    let Expr::Call(call) = &*spread.expr else {
        cx.warn(Some(spread.span()), "spread entry is not a helper call, dropped");
        return;
    };
    let Callee::Expr(callee) = &call.callee else {
        cx.warn(Some(spread.span()), "spread entry is not a helper call, dropped");
        return;
    };

    let (helper, namespace): (&str, Option<SmolStr>) = match &**callee {
        Expr::Ident(ident) => (ident.sym.as_str(), None),
        Expr::Member(member) => {
            let (Expr::Ident(obj), Some(prop)) = (&*member.obj, member.prop.as_ident()) else {
                cx.warn(Some(spread.span()), "unsupported helper callee shape, dropped");
                return;
            };
            (prop.sym.as_str(), Some(SmolStr::new(obj.sym.as_str())))
        }
        _ => {
            cx.warn(Some(spread.span()), "unsupported helper callee shape, dropped");
            return;
        }
    };

    let Some(kind) = BindingKind::from_helper(helper) else {
        cx.warn(
            Some(spread.span()),
            format!("spread of unrecognized helper `{helper}`, dropped"),
        );
        return;
    };

    match call.args.first().map(|arg| &*arg.expr) {
        Some(Expr::Object(obj)) => resolve_object_arg(cx, obj, kind, namespace),
        Some(Expr::Array(arr)) => resolve_array_arg(cx, arr, kind, namespace),
        _ => cx.warn(
            Some(call.span),
            format!("`{helper}` argument must be an object or string array, dropped"),
        ),
    }
}

/// Mapping-object form: `mapState({ isPartner: state => state.me.partner })`.
/// Each property key becomes a field name, its function value the decorator
/// argument. String aliases (`countAlias: "count"`) are not expressible as
/// a vuex-class decorator argument and are skipped with a warning.
fn resolve_object_arg(
    cx: &mut Cx<'_>,
    obj: &ObjectLit,
    kind: BindingKind,
    namespace: Option<SmolStr>,
) {
    for entry in &obj.props {
        let PropOrSpread::Prop(prop) = entry else {
            cx.warn(Some(entry.span()), "nested spread in helper argument, dropped");
            continue;
        };
        if let Some(raw) = parse_func_node(prop) {
            let Some(body) = raw.body_text(cx.src) else {
                continue;
            };
            let params = raw.param_texts(cx.src);
            cx.info.push_store(StoreInfo {
                kind,
                name: raw.name,
                namespace: namespace.clone(),
                getter: StoreGetter::Mapped { params, body },
            });
        } else if is_string_alias(prop) {
            cx.warn(
                Some(prop.span()),
                "string alias in helper argument is not supported, dropped",
            );
        } else {
            cx.warn(
                Some(prop.span()),
                "unsupported entry in helper argument, dropped",
            );
        }
    }
}

/// String-array form: `mapState(["count"])`. Each element is both the field
/// name and the store lookup key.
fn resolve_array_arg(
    cx: &mut Cx<'_>,
    arr: &ArrayLit,
    kind: BindingKind,
    namespace: Option<SmolStr>,
) {
    for element in arr.elems.iter().flatten() {
        let Expr::Lit(swc_ecma_ast::Lit::Str(s)) = &*element.expr else {
            cx.warn(
                Some(element.span()),
                "non-string element in helper argument, dropped",
            );
            continue;
        };
        let name = SmolStr::new(s.value.to_string_lossy());
        cx.info.push_store(StoreInfo {
            kind,
            name: name.clone(),
            namespace: namespace.clone(),
            getter: StoreGetter::Key(name),
        });
    }
}

fn is_string_alias(prop: &Prop) -> bool {
    matches!(
        prop,
        Prop::KeyValue(kv) if matches!(&*kv.value, Expr::Lit(swc_ecma_ast::Lit::Str(_)))
    )
}
