//! Selective traversal over the component module.
//!
//! Only a fixed allow-list of container shapes is descended into: the
//! module root, `export default { ... }`, and `export default Vue.extend({
//! ... })`. Everything below the options object is handled by the option's
//! own handler; the traversal never walks an unrecognized subtree.

use smol_str::SmolStr;
use swc_common::Spanned;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, KeyValueProp, Module, ModuleDecl, ModuleItem, ObjectLit, Prop,
    PropOrSpread,
};

use crate::classify::{classify, OptionKind};
use crate::context::Cx;
use crate::func::prop_name_text;
use crate::handlers::{
    handle_computed, handle_container, handle_data, handle_lifecycle, handle_methods,
    handle_name, handle_props, handle_unrecognized, handle_watch, ContainerKind,
};

/// Populates the aggregator from the module. Produces no new tree; the
/// synthesizer reads everything from the context afterwards.
pub(crate) fn run(cx: &mut Cx<'_>, module: &Module) {
    for item in &module.body {
        if let ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) = item {
            visit_default_export(cx, &export.expr);
        }
    }
}

fn visit_default_export(cx: &mut Cx<'_>, expr: &Expr) {
    match expr {
        Expr::Object(obj) => visit_options(cx, obj),
        Expr::Call(call) if is_base_factory(call) => {
            if let Some(Expr::Object(obj)) = call.args.first().map(|arg| &*arg.expr) {
                visit_options(cx, obj);
            }
        }
        Expr::Paren(paren) => visit_default_export(cx, &paren.expr),
        // `export default SomeClass` and friends: nothing to convert.
        _ => {}
    }
}

/// `Vue.extend(...)`, case-insensitively.
fn is_base_factory(call: &CallExpr) -> bool {
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    let Expr::Member(member) = &**callee else {
        return false;
    };
    let (Expr::Ident(obj), Some(prop)) = (&*member.obj, member.prop.as_ident()) else {
        return false;
    };
    obj.sym.eq_ignore_ascii_case("vue") && prop.sym.eq_ignore_ascii_case("extend")
}

fn visit_options(cx: &mut Cx<'_>, obj: &ObjectLit) {
    for entry in &obj.props {
        let prop = match entry {
            // mixin-style spreads cannot be decomposed; they stay valid as
            // component options, so they ride along in the decorator argument
            PropOrSpread::Spread(spread) => {
                let text = cx.slice(spread.span()).to_string();
                cx.warn(
                    Some(spread.span()),
                    format!("spread at the option level, carried into the component decorator: {text}"),
                );
                cx.info.push_carryover(text);
                continue;
            }
            PropOrSpread::Prop(prop) => prop,
        };
        let Some(name) = option_name(prop) else {
            cx.warn(Some(prop.span()), "unsupported option shape, dropped");
            continue;
        };
        match classify(&name) {
            OptionKind::Name => match as_key_value(prop) {
                Some(kv) => handle_name(cx, kv),
                None => cx.warn(Some(prop.span()), "unsupported name option shape, dropped"),
            },
            OptionKind::Data => handle_data(cx, prop),
            OptionKind::Components => dispatch_container(cx, ContainerKind::Components, prop),
            OptionKind::Directives => dispatch_container(cx, ContainerKind::Directives, prop),
            OptionKind::Filters => dispatch_container(cx, ContainerKind::Filters, prop),
            OptionKind::Computed => dispatch_value(cx, prop, handle_computed),
            OptionKind::Methods => dispatch_value(cx, prop, handle_methods),
            OptionKind::Props => dispatch_value(cx, prop, handle_props),
            OptionKind::Watch => dispatch_value(cx, prop, handle_watch),
            OptionKind::Lifecycle => handle_lifecycle(cx, prop),
            OptionKind::Other => handle_unrecognized(cx, prop),
        }
    }
}

fn dispatch_container(cx: &mut Cx<'_>, kind: ContainerKind, prop: &Prop) {
    match as_key_value(prop) {
        Some(kv) => handle_container(cx, kind, kv),
        None => cx.warn(Some(prop.span()), "unsupported container option shape, dropped"),
    }
}

fn dispatch_value(cx: &mut Cx<'_>, prop: &Prop, handler: fn(&mut Cx<'_>, &Expr)) {
    match as_key_value(prop) {
        Some(kv) => handler(cx, &kv.value),
        None => cx.warn(Some(prop.span()), "unsupported option shape, dropped"),
    }
}

fn as_key_value(prop: &Prop) -> Option<&KeyValueProp> {
    match prop {
        Prop::KeyValue(kv) => Some(kv),
        _ => None,
    }
}

fn option_name(prop: &Prop) -> Option<SmolStr> {
    match prop {
        Prop::KeyValue(kv) => prop_name_text(&kv.key),
        Prop::Method(method) => prop_name_text(&method.key),
        Prop::Shorthand(ident) => Some(SmolStr::new(ident.sym.as_str())),
        Prop::Getter(getter) => prop_name_text(&getter.key),
        Prop::Setter(setter) => prop_name_text(&setter.key),
        Prop::Assign(_) => None,
    }
}
