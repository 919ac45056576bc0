//! Declaration synthesis.
//!
//! Builds the replacement script from the aggregator: the fixed tsx import,
//! the decorator imports, carried-over imports, rewritten top-level
//! statements, hoisted data-scope statements, and the class declaration
//! with its fixed member order.

use script_source::SourceText;
use swc_common::{Span, Spanned};
use swc_ecma_ast::{Decl, Expr, Module, ModuleDecl, ModuleItem, Stmt};

use crate::consts::{NAMESPACE_BINDING, NAMESPACE_FACTORY, REPLACED_MODULES, TSX_FIELD, TSX_IMPORT};
use crate::names::class_name_from_stem;
use crate::types::{
    ComponentInfo, FuncBody, FuncInfo, MethodMember, PropConfig, StoreGetter,
};

const INDENT: &str = "  ";

/// Assembles the full replacement script. Only called once the aggregator
/// has flagged a conversion; passthrough is decided by the caller.
pub(crate) fn generate(
    src: &SourceText<'_>,
    module: &Module,
    info: &ComponentInfo,
    class_fallback: &str,
) -> String {
    let mut out = String::new();

    for import in render_imports(src, module, info) {
        out.push_str(&import);
        out.push('\n');
    }

    let snippets = render_top_level(src, module);
    if !snippets.is_empty() {
        out.push('\n');
        for snippet in snippets {
            out.push_str(&snippet);
            out.push('\n');
        }
    }

    if !info.statements_in_data_scope.is_empty() {
        out.push('\n');
        for statement in &info.statements_in_data_scope {
            out.push_str(statement);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&render_class(info, class_fallback));
    out
}

fn render_imports(src: &SourceText<'_>, module: &Module, info: &ComponentInfo) -> Vec<String> {
    let mut imports = vec![TSX_IMPORT.to_string()];

    let mut decorator_bindings = vec!["Component", "Vue"];
    if !info.props.is_empty() {
        decorator_bindings.push("Prop");
    }
    if !info.watch.is_empty() {
        decorator_bindings.push("Watch");
    }
    imports.push(format!(
        "import {{ {} }} from \"vue-property-decorator\";",
        decorator_bindings.join(", ")
    ));

    if let Some(vuex_class) = render_vuex_class_import(info) {
        imports.push(vuex_class);
    }

    for item in &module.body {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
            continue;
        };
        let specifier = import.src.value.to_string_lossy().to_lowercase();
        if !REPLACED_MODULES.contains(&specifier.as_str()) {
            imports.push(src.slice(import.span.lo.0, import.span.hi.0).to_string());
        }
    }
    imports
}

/// `import { State, namespace } from "vuex-class";`, present only when at
/// least one state binding was resolved. Namespaced bindings use their own
/// namespace variable, so only un-namespaced kinds are imported directly.
fn render_vuex_class_import(info: &ComponentInfo) -> Option<String> {
    if info.stores.is_empty() {
        return None;
    }
    let mut bindings: Vec<&str> = Vec::new();
    for store in info.stores.iter().filter(|store| store.namespace.is_none()) {
        let binding = store.kind.as_str();
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
    }
    if info.stores.iter().any(|store| store.namespace.is_some()) {
        bindings.push(NAMESPACE_BINDING);
    }
    Some(format!(
        "import {{ {} }} from \"vuex-class\";",
        bindings.join(", ")
    ))
}

/// Top-level statements between the imports and the default export,
/// carried verbatim except for the ambient-namespace declaration rewrite:
/// `const ns = createNamespacedHelpers("me")` becomes
/// `const ns = namespace("me")`.
fn render_top_level(src: &SourceText<'_>, module: &Module) -> Vec<String> {
    let mut snippets = Vec::new();
    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(_))
            | ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(_))
            | ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(_)) => {}
            ModuleItem::Stmt(stmt) => snippets.push(rewrite_namespace_factory(src, stmt)),
            ModuleItem::ModuleDecl(decl) => {
                snippets.push(src.slice(decl.span().lo.0, decl.span().hi.0).to_string());
            }
        }
    }
    snippets
}

fn rewrite_namespace_factory(src: &SourceText<'_>, stmt: &Stmt) -> String {
    let span = stmt.span();
    let text = src.slice(span.lo.0, span.hi.0).to_string();
    let Stmt::Decl(Decl::Var(var)) = stmt else {
        return text;
    };

    let mut callee_spans: Vec<Span> = Vec::new();
    for decl in &var.decls {
        let Some(init) = decl.init.as_deref() else { continue };
        let Expr::Call(call) = init else { continue };
        let Some(callee) = call.callee.as_expr() else { continue };
        let Expr::Ident(ident) = &**callee else { continue };
        if ident.sym.as_str() == NAMESPACE_FACTORY {
            callee_spans.push(ident.span);
        }
    }

    let mut rewritten = text;
    for callee in callee_spans.iter().rev() {
        let lo = (callee.lo.0 - span.lo.0) as usize;
        let hi = (callee.hi.0 - span.lo.0) as usize;
        rewritten.replace_range(lo..hi, NAMESPACE_BINDING);
    }
    rewritten
}

fn render_class(info: &ComponentInfo, class_fallback: &str) -> String {
    let mut members: Vec<String> = vec![TSX_FIELD.to_string()];
    members.extend(render_store_fields(info));
    members.extend(info.data.iter().map(|field| {
        render_field("private", &field.name, field.init.as_deref())
    }));
    members.extend(info.computed.iter().map(render_accessor));
    members.extend(info.props.iter().map(render_prop));
    members.extend(info.watch.iter().map(|watch| {
        let mut decorator = format!("@Watch(\"{}\"", escape_string_literal(&watch.path));
        if !watch.options.is_empty() {
            decorator.push_str(&format!(", {{ {} }}", watch.options.join(", ")));
        }
        decorator.push(')');
        let mut func = watch.func.clone();
        func.name = watch.method_name.clone();
        format!("{decorator}\n{}", render_method("private", &func))
    }));
    members.extend(info.methods.iter().map(|member| match member {
        MethodMember::Method(func) => render_method("private", func),
        MethodMember::Field(field) => render_field("private", &field.name, field.init.as_deref()),
    }));
    members.extend(
        info.lifecycle_hooks
            .iter()
            .map(|hook| render_method("protected", hook)),
    );

    let class_name = info
        .name
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| class_name_from_stem(class_fallback));

    let mut out = render_component_decorator(info);
    out.push_str(&format!(
        "\nexport default class {class_name} extends Vue {{\n"
    ));
    let body = members
        .iter()
        .map(|member| indent(member))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push_str(&body);
    out.push_str("\n}\n");
    out
}

/// `@Component` bare, or `@Component({ ... })` holding the pass-through
/// container options and any carried-over unrecognized options.
fn render_component_decorator(info: &ComponentInfo) -> String {
    let mut args: Vec<&str> = Vec::new();
    for container in [&info.components, &info.filters, &info.directives]
        .into_iter()
        .flatten()
    {
        args.push(&container.text);
    }
    args.extend(info.carryover.iter().map(String::as_str));

    if args.is_empty() {
        return "@Component".to_string();
    }
    let mut out = "@Component({\n".to_string();
    for arg in args {
        out.push_str(&indent(arg));
        out.push_str(",\n");
    }
    out.push_str("})");
    out
}

fn render_store_fields(info: &ComponentInfo) -> Vec<String> {
    info.stores
        .iter()
        .map(|store| {
            let tool = match &store.namespace {
                Some(ns) => format!("{ns}.{}", store.kind.as_str()),
                None => store.kind.as_str().to_string(),
            };
            let arg = match &store.getter {
                StoreGetter::Key(key) => format!("\"{}\"", escape_string_literal(key)),
                StoreGetter::Mapped { params, body } => {
                    let body = match body {
                        FuncBody::Block(block) => block.clone(),
                        // an object-literal arrow body must stay parenthesized
                        FuncBody::Expr(expr) if expr.starts_with('{') => format!("({expr})"),
                        FuncBody::Expr(expr) => expr.clone(),
                    };
                    format!("({}) => {}", params.join(", "), body)
                }
            };
            format!(
                "@{tool}({arg})\n{}",
                render_field("private", &store.name, None)
            )
        })
        .collect()
}

fn render_accessor(member: &crate::types::ComputedMember) -> String {
    let keyword = if member.is_setter { "set" } else { "get" };
    format!(
        "private {keyword} {}({}) {}",
        member_name(&member.func.name),
        member.func.params.join(", "),
        render_body(member.func.body.as_ref())
    )
}

fn render_prop(prop: &crate::types::PropField) -> String {
    let config = match &prop.config {
        PropConfig::Bare => "{ required: false }".to_string(),
        PropConfig::Typed(type_text) => format!("{{ required: false, type: {type_text} }}"),
        PropConfig::Full(object_text) => object_text.clone(),
    };
    format!(
        "@Prop({config})\n{}",
        render_field("public", &prop.name, None)
    )
}

fn render_method(modifier: &str, func: &FuncInfo) -> String {
    let asyncness = if func.is_async { "async " } else { "" };
    format!(
        "{modifier} {asyncness}{}({}) {}",
        member_name(&func.name),
        func.params.join(", "),
        render_body(func.body.as_ref())
    )
}

fn render_field(modifier: &str, name: &str, init: Option<&str>) -> String {
    match init {
        Some(init) => format!("{modifier} {} = {init};", member_name(name)),
        None => format!("{modifier} {};", member_name(name)),
    }
}

fn render_body(body: Option<&FuncBody>) -> String {
    match body {
        Some(FuncBody::Block(block)) => block.clone(),
        Some(FuncBody::Expr(expr)) => format!("{{ return {expr}; }}"),
        None => "{}".to_string(),
    }
}

fn member_name(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", escape_string_literal(name))
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn escape_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
