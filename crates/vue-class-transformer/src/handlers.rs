//! Per-option handlers.
//!
//! Each handler consumes one top-level option node, normalizes it through
//! the function normalizer where needed, and pushes fragments into the
//! aggregator. Anything a handler cannot express degrades to a warning and
//! a dropped fragment; handlers never fail the conversion.

use smol_str::SmolStr;
use swc_common::Spanned;
use swc_ecma_ast::{
    Expr, KeyValueProp, Lit, ObjectLit, Prop, PropOrSpread, Stmt,
};

use crate::context::Cx;
use crate::func::{parse_func_node, prop_name_text, RawBody};
use crate::names::watch_handler_name;
use crate::store::resolve_spread;
use crate::types::{
    ComputedMember, ContainerOption, DataField, MethodMember, PropConfig, PropField, WatchMember,
};

/// `name: "LoginForm"`. The value becomes the class identifier.
pub(crate) fn handle_name(cx: &mut Cx<'_>, kv: &KeyValueProp) {
    match &*kv.value {
        Expr::Lit(Lit::Str(s)) => cx.info.set_name(SmolStr::new(s.value.to_string_lossy())),
        Expr::Ident(ident) => cx.info.set_name(SmolStr::new(ident.sym.as_str())),
        other => cx.warn(Some(other.span()), "component name is not a string, dropped"),
    }
}

/// `data` in any of its callable shapes. Statements before the trailing
/// `return { ... }` are hoisted to top level verbatim since they may carry
/// side effects; each returned property becomes a private field.
pub(crate) fn handle_data(cx: &mut Cx<'_>, prop: &Prop) {
    let Some(raw) = parse_func_node(prop) else {
        cx.warn(Some(prop.span()), "unsupported data declaration shape, dropped");
        return;
    };
    match raw.body {
        Some(RawBody::Block(block)) => {
            let mut returned = None;
            for stmt in &block.stmts {
                match stmt {
                    Stmt::Return(ret) => returned = ret.arg.as_deref(),
                    other => {
                        let text = cx.slice(other.span()).to_string();
                        cx.info.push_data_statement(text);
                    }
                }
            }
            match returned {
                Some(Expr::Object(obj)) => collect_data_fields(cx, obj),
                _ => cx.warn(
                    Some(block.span),
                    "data does not return an object literal, fields dropped",
                ),
            }
        }
        Some(RawBody::Expr(Expr::Object(obj))) => collect_data_fields(cx, obj),
        _ => cx.warn(Some(prop.span()), "unsupported data declaration shape, dropped"),
    }
}

fn collect_data_fields(cx: &mut Cx<'_>, obj: &ObjectLit) {
    for entry in &obj.props {
        let PropOrSpread::Prop(prop) = entry else {
            cx.warn(Some(entry.span()), "spread in data object, dropped");
            continue;
        };
        match &**prop {
            Prop::KeyValue(kv) => {
                let Some(name) = prop_name_text(&kv.key) else {
                    cx.warn(Some(kv.span()), "computed key in data object, dropped");
                    continue;
                };
                let init = cx.slice(kv.value.span()).to_string();
                cx.info.push_data_field(DataField {
                    name,
                    init: Some(init),
                });
            }
            Prop::Shorthand(ident) => {
                let name = SmolStr::new(ident.sym.as_str());
                cx.info.push_data_field(DataField {
                    name: name.clone(),
                    init: Some(name.to_string()),
                });
            }
            other => cx.warn(Some(other.span()), "unsupported data field shape, dropped"),
        }
    }
}

/// Which of the three pass-through container options a node is.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ContainerKind {
    Components,
    Directives,
    Filters,
}

/// `components` / `directives` / `filters`: kept as an opaque slice of the
/// whole `key: { ... }` property, later merged into the decorator argument.
/// Nested member names are captured for the watcher collision set.
pub(crate) fn handle_container(cx: &mut Cx<'_>, kind: ContainerKind, kv: &KeyValueProp) {
    let text = cx.slice(kv.span()).to_string();
    let member_names = match &*kv.value {
        Expr::Object(obj) => obj
            .props
            .iter()
            .filter_map(|entry| match entry {
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::KeyValue(kv) => prop_name_text(&kv.key),
                    Prop::Method(method) => prop_name_text(&method.key),
                    Prop::Shorthand(ident) => Some(SmolStr::new(ident.sym.as_str())),
                    _ => None,
                },
                PropOrSpread::Spread(_) => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    let option = ContainerOption { text, member_names };
    match kind {
        ContainerKind::Components => cx.info.set_components(option),
        ContainerKind::Directives => cx.info.set_directives(option),
        ContainerKind::Filters => cx.info.set_filters(option),
    }
}

/// `computed`. Plain members become getters; a `{ get() {}, set(v) {} }`
/// pair recurses one level; spreads go to the state-binding resolver.
pub(crate) fn handle_computed(cx: &mut Cx<'_>, value: &Expr) {
    let Expr::Object(obj) = value else {
        cx.warn(Some(value.span()), "computed option is not an object, dropped");
        return;
    };
    for entry in &obj.props {
        let prop = match entry {
            PropOrSpread::Spread(spread) => {
                resolve_spread(cx, spread);
                continue;
            }
            PropOrSpread::Prop(prop) => prop,
        };
        if let Prop::KeyValue(kv) = &**prop {
            if let Expr::Object(pair) = &*kv.value {
                handle_accessor_pair(cx, &kv.key, pair);
                continue;
            }
        }
        match parse_func_node(prop) {
            Some(raw) => {
                let func = raw.to_info(cx.src);
                cx.info.push_computed(ComputedMember {
                    is_setter: false,
                    func,
                });
            }
            None => cx.warn(Some(prop.span()), "unsupported computed member shape, dropped"),
        }
    }
}

/// The nested `name: { get() {}, set(v) {} }` computed form. Entries other
/// than `get`/`set` are ignored; the accessor keeps the outer key's name.
fn handle_accessor_pair(cx: &mut Cx<'_>, key: &swc_ecma_ast::PropName, pair: &ObjectLit) {
    let Some(accessor_name) = prop_name_text(key) else {
        cx.warn(Some(key.span()), "computed key is not a plain name, dropped");
        return;
    };
    for entry in &pair.props {
        let PropOrSpread::Prop(prop) = entry else { continue };
        let Some(raw) = parse_func_node(prop) else { continue };
        let is_setter = match raw.name.as_str() {
            "get" => false,
            "set" => true,
            _ => continue,
        };
        let mut func = raw.to_info(cx.src);
        func.name = accessor_name.clone();
        cx.info.push_computed(ComputedMember { is_setter, func });
    }
}

/// `methods`. Functions become private methods; non-function values keep
/// their identity as private field initializers; spreads go to the
/// state-binding resolver.
pub(crate) fn handle_methods(cx: &mut Cx<'_>, value: &Expr) {
    let Expr::Object(obj) = value else {
        cx.warn(Some(value.span()), "methods option is not an object, dropped");
        return;
    };
    for entry in &obj.props {
        let prop = match entry {
            PropOrSpread::Spread(spread) => {
                resolve_spread(cx, spread);
                continue;
            }
            PropOrSpread::Prop(prop) => prop,
        };
        if let Some(raw) = parse_func_node(prop) {
            cx.info.push_method(MethodMember::Method(raw.to_info(cx.src)));
            continue;
        }
        match &**prop {
            Prop::KeyValue(kv) => {
                let Some(name) = prop_name_text(&kv.key) else {
                    cx.warn(Some(kv.span()), "computed key in methods, dropped");
                    continue;
                };
                let init = cx.slice(kv.value.span()).to_string();
                cx.info.push_method(MethodMember::Field(DataField {
                    name,
                    init: Some(init),
                }));
            }
            Prop::Shorthand(ident) => {
                let name = SmolStr::new(ident.sym.as_str());
                cx.info.push_method(MethodMember::Field(DataField {
                    name: name.clone(),
                    init: Some(name.to_string()),
                }));
            }
            other => cx.warn(Some(other.span()), "unsupported methods member shape, dropped"),
        }
    }
}

/// `props`: the array-of-names form and the object form. Array names and
/// bare type references both synthesize a `required: false` configuration.
pub(crate) fn handle_props(cx: &mut Cx<'_>, value: &Expr) {
    match value {
        Expr::Array(arr) => {
            for element in arr.elems.iter().flatten() {
                let Expr::Lit(Lit::Str(s)) = &*element.expr else {
                    cx.warn(Some(element.span()), "non-string prop name, dropped");
                    continue;
                };
                cx.info.push_prop(PropField {
                    name: SmolStr::new(s.value.to_string_lossy()),
                    config: PropConfig::Bare,
                });
            }
        }
        Expr::Object(obj) => {
            for entry in &obj.props {
                let PropOrSpread::Prop(prop) = entry else { continue };
                let Prop::KeyValue(kv) = &**prop else { continue };
                let Some(name) = prop_name_text(&kv.key) else {
                    cx.warn(Some(kv.span()), "computed key in props, dropped");
                    continue;
                };
                let text = cx.slice(kv.value.span()).to_string();
                let config = match &*kv.value {
                    Expr::Object(_) => PropConfig::Full(text),
                    _ => PropConfig::Typed(text),
                };
                cx.info.push_prop(PropField { name, config });
            }
        }
        other => cx.warn(Some(other.span()), "unrecognized props configuration, dropped"),
    }
}

/// `watch`: object form only. Simple entries are a direct handler function;
/// complex entries hold a `handler` plus sibling flags like `deep: true`.
pub(crate) fn handle_watch(cx: &mut Cx<'_>, value: &Expr) {
    let Expr::Object(obj) = value else {
        cx.warn(Some(value.span()), "watch option is not an object, dropped");
        return;
    };
    for entry in &obj.props {
        let PropOrSpread::Prop(prop) = entry else {
            cx.warn(Some(entry.span()), "spread in watch option, dropped");
            continue;
        };
        if let Prop::KeyValue(kv) = &**prop {
            if let Expr::Object(config) = &*kv.value {
                handle_complex_watch(cx, kv, config);
                continue;
            }
        }
        let Some(raw) = parse_func_node(prop) else {
            cx.warn(Some(prop.span()), "unsupported watch entry shape, dropped");
            continue;
        };
        let path = raw.name.clone();
        let func = raw.to_info(cx.src);
        cx.info.push_watch(WatchMember {
            method_name: watch_handler_name(&path),
            path,
            func,
            options: vec![],
        });
    }
}

fn handle_complex_watch(cx: &mut Cx<'_>, kv: &KeyValueProp, config: &ObjectLit) {
    let Some(path) = prop_name_text(&kv.key) else {
        cx.warn(Some(kv.span()), "watch key is not a plain name, dropped");
        return;
    };
    let mut handler = None;
    let mut options = Vec::new();
    for entry in &config.props {
        let PropOrSpread::Prop(prop) = entry else {
            options.push(cx.slice(entry.span()).to_string());
            continue;
        };
        let is_handler = match &**prop {
            Prop::KeyValue(inner) => prop_name_text(&inner.key).as_deref() == Some("handler"),
            Prop::Method(method) => prop_name_text(&method.key).as_deref() == Some("handler"),
            _ => false,
        };
        if is_handler {
            handler = parse_func_node(prop);
        } else {
            options.push(cx.slice(prop.span()).to_string());
        }
    }
    let Some(raw) = handler else {
        cx.warn(Some(kv.span()), format!("watcher `{path}` has no usable handler, dropped"));
        return;
    };
    let func = raw.to_info(cx.src);
    cx.info.push_watch(WatchMember {
        method_name: watch_handler_name(&path),
        path,
        func,
        options,
    });
}

/// A lifecycle hook, wrapped later as a protected method.
pub(crate) fn handle_lifecycle(cx: &mut Cx<'_>, prop: &Prop) {
    match parse_func_node(prop) {
        Some(raw) => {
            let func = raw.to_info(cx.src);
            cx.info.push_lifecycle(func);
        }
        None => cx.warn(Some(prop.span()), "unsupported lifecycle hook shape, dropped"),
    }
}

/// An option outside the allow-list. Its verbatim text is carried into the
/// decorator argument so a rewrite never silently loses it, and a warning
/// flags it for manual review. Carryover alone never triggers a rewrite.
pub(crate) fn handle_unrecognized(cx: &mut Cx<'_>, prop: &Prop) {
    let text = cx.slice(prop.span()).to_string();
    cx.warn(
        Some(prop.span()),
        format!("unsupported option, carried into the component decorator: {text}"),
    );
    cx.info.push_carryover(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_script;
    use crate::traverse;
    use crate::types::FuncBody;
    use pretty_assertions::assert_eq;
    use script_source::SourceText;

    fn convert_options(source: &str) -> (crate::types::ComponentInfo, usize) {
        let parsed = parse_script(source).expect("fixture parses");
        let src = SourceText::new(source, parsed.base_offset);
        let mut cx = Cx::new(&src, "test.ts");
        traverse::run(&mut cx, &parsed.module);
        let warnings = cx.warnings.len();
        (cx.info, warnings)
    }

    #[test]
    fn name_option_sets_the_class_name() {
        let (info, _) = convert_options("export default { name: \"LoginForm\" }");
        assert_eq!(info.name.as_deref(), Some("LoginForm"));
    }

    #[test]
    fn data_hoists_statements_and_collects_fields() {
        let (info, warnings) = convert_options(
            "export default { data() { const x = 1; return { y: x, vm } } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.statements_in_data_scope, vec!["const x = 1;".to_string()]);
        assert_eq!(info.data.len(), 2);
        assert_eq!(info.data[0].name, "y");
        assert_eq!(info.data[0].init.as_deref(), Some("x"));
        assert_eq!(info.data[1].name, "vm");
        assert_eq!(info.data[1].init.as_deref(), Some("vm"));
    }

    #[test]
    fn data_object_arrow_form() {
        let (info, warnings) =
            convert_options("export default { data: () => ({ count: 0 }) }");
        assert_eq!(warnings, 0);
        assert_eq!(info.data.len(), 1);
        assert_eq!(info.data[0].init.as_deref(), Some("0"));
    }

    #[test]
    fn data_without_object_return_warns() {
        let (info, warnings) = convert_options("export default { data() { return 1; } }");
        assert!(info.data.is_empty());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn components_kept_verbatim_with_member_names() {
        let (info, _) = convert_options(
            "export default { components: { LoginForm, \"x-panel\": Panel } }",
        );
        let components = info.components.expect("components captured");
        assert_eq!(
            components.text,
            "components: { LoginForm, \"x-panel\": Panel }"
        );
        assert_eq!(components.member_names, vec!["LoginForm", "x-panel"]);
    }

    #[test]
    fn computed_getter_and_accessor_pair() {
        let (info, warnings) = convert_options(
            "export default { computed: { total() { return this.a + this.b; }, alias: { get() { return this.v; }, set(v) { this.v = v; } } } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.computed.len(), 3);
        assert!(!info.computed[0].is_setter);
        assert_eq!(info.computed[0].func.name, "total");
        assert_eq!(info.computed[1].func.name, "alias");
        assert!(!info.computed[1].is_setter);
        assert!(info.computed[2].is_setter);
        assert_eq!(info.computed[2].func.params, vec!["v".to_string()]);
    }

    #[test]
    fn methods_keep_non_function_values_as_fields() {
        let (info, warnings) = convert_options(
            "export default { methods: { save() {}, fetch: axios, axios } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.methods.len(), 3);
        assert!(matches!(&info.methods[0], MethodMember::Method(func) if func.name == "save"));
        assert!(matches!(
            &info.methods[1],
            MethodMember::Field(field) if field.name == "fetch" && field.init.as_deref() == Some("axios")
        ));
        assert!(matches!(
            &info.methods[2],
            MethodMember::Field(field) if field.name == "axios" && field.init.as_deref() == Some("axios")
        ));
    }

    #[test]
    fn props_array_form() {
        let (info, warnings) = convert_options("export default { props: [\"a\", \"b\"] }");
        assert_eq!(warnings, 0);
        assert_eq!(info.props.len(), 2);
        assert_eq!(info.props[0].name, "a");
        assert_eq!(info.props[0].config, PropConfig::Bare);
    }

    #[test]
    fn props_object_form() {
        let (info, warnings) = convert_options(
            "export default { props: { size: Number, item: { type: Object, required: true } } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.props[0].config, PropConfig::Typed("Number".into()));
        assert_eq!(
            info.props[1].config,
            PropConfig::Full("{ type: Object, required: true }".into())
        );
    }

    #[test]
    fn props_unrecognized_shape_warns() {
        let (info, warnings) = convert_options("export default { props: makeProps() }");
        assert!(info.props.is_empty());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn watch_simple_and_complex_forms() {
        let (info, warnings) = convert_options(
            "export default { watch: { onTrial(val) { this.t = val; }, \"obj.id\": { handler(obj) { this.load(obj); }, deep: true } } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.watch.len(), 2);
        assert_eq!(info.watch[0].path, "onTrial");
        assert_eq!(info.watch[0].method_name, "onOnTrialChange");
        assert!(info.watch[0].options.is_empty());
        assert_eq!(info.watch[1].path, "obj.id");
        assert_eq!(info.watch[1].method_name, "onObjIdChange");
        assert_eq!(info.watch[1].options, vec!["deep: true".to_string()]);
        assert_eq!(
            info.watch[1].func.body,
            Some(FuncBody::Block("{ this.load(obj); }".into()))
        );
    }

    #[test]
    fn watch_without_handler_is_dropped() {
        let (info, warnings) =
            convert_options("export default { watch: { broken: { deep: true } } }");
        assert!(info.watch.is_empty());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn lifecycle_hooks_collect_in_order() {
        let (info, warnings) = convert_options(
            "export default { mounted() { this.init(); }, beforeDestroy() { this.teardown(); } }",
        );
        assert_eq!(warnings, 0);
        assert_eq!(info.lifecycle_hooks.len(), 2);
        assert_eq!(info.lifecycle_hooks[0].name, "mounted");
        assert_eq!(info.lifecycle_hooks[1].name, "beforeDestroy");
    }

    #[test]
    fn unrecognized_option_warns_and_carries_over() {
        let (info, warnings) = convert_options("export default { inheritAttrs: false }");
        assert_eq!(warnings, 1);
        assert_eq!(info.carryover, vec!["inheritAttrs: false".to_string()]);
        assert!(!info.is_conversion_required);
    }
}
