//! Vue Option API to class API transformation.
//!
//! This crate rewrites a component script written in the object-literal
//! ("Option") style into an equivalent `vue-property-decorator` class,
//! preserving runtime semantics. It handles:
//! - All the common option kinds: `name`, `data`, `computed`, `methods`,
//!   `props`, `watch`, lifecycle hooks, and the `components` /
//!   `directives` / `filters` pass-through containers
//! - Spread-mapped vuex helpers (`...mapState(...)` and friends), rewritten
//!   as `vuex-class` decorated fields
//! - Deterministic watcher handler naming with collision resolution
//!
//! Scripts that use no option API at all pass through byte-identical.
//!
//! # Example
//!
//! ```
//! use vue_class_transformer::{convert_script, ConvertOptions};
//!
//! let source = r#"
//! export default {
//!   name: "Counter",
//!   data() {
//!     return { count: 0 };
//!   },
//! };
//! "#;
//!
//! let result = convert_script(source, ConvertOptions::default());
//! assert!(result.converted);
//! println!("{}", result.code);
//! ```

mod classify;
mod consts;
mod context;
mod emit;
mod func;
mod handlers;
mod names;
mod parse;
mod store;
mod traverse;
mod types;

pub use parse::ScriptParseError;
pub use types::{
    BindingKind, ComputedMember, DataField, FuncBody, FuncInfo, MethodMember, PropConfig,
    PropField, StoreGetter, StoreInfo, WatchMember,
};
pub use vue_diagnostics::{Warning, Warnings};

use context::Cx;
use script_source::SourceText;

/// Options for one conversion call.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Identifier of the source file, used in warnings and as the class
    /// name fallback when the component declares no `name`.
    pub file: Option<String>,
}

/// The outcome of one conversion call.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The replacement script, or the original text verbatim when nothing
    /// needed converting.
    pub code: String,
    /// Whether any option API was detected and rewritten.
    pub converted: bool,
    /// Everything that was dropped or carried over along the way.
    pub warnings: Vec<Warning>,
}

/// Converts one component script.
///
/// Never fails: a script that cannot be parsed, or that contains no option
/// API, is returned unchanged (with a warning in the unparsable case).
pub fn convert_script(source: &str, options: ConvertOptions) -> ConvertResult {
    let file = options.file.as_deref().unwrap_or("component.vue");

    let parsed = match parse::parse_script(source) {
        Ok(parsed) => parsed,
        Err(err) => {
            return ConvertResult {
                code: source.to_string(),
                converted: false,
                warnings: vec![Warning::new(file, err.line, err.to_string())],
            };
        }
    };

    let src = SourceText::new(source, parsed.base_offset);
    let mut cx = Cx::new(&src, file);
    traverse::run(&mut cx, &parsed.module);
    names::resolve_watch_collisions(&mut cx.info);

    if !cx.info.is_conversion_required {
        return ConvertResult {
            code: source.to_string(),
            converted: false,
            warnings: cx.warnings.into_vec(),
        };
    }

    let code = emit::generate(&src, &parsed.module, &cx.info, &file_stem(file));
    ConvertResult {
        code,
        converted: true,
        warnings: cx.warnings.into_vec(),
    }
}

/// Base name of the file without directories or extension; seeds the class
/// name fallback.
fn file_stem(file: &str) -> String {
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match base.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_stem_strips_directories_and_extensions() {
        assert_eq!(file_stem("src/views/login-form.vue"), "login-form");
        assert_eq!(file_stem("panel.vue"), "panel");
        assert_eq!(file_stem("panel"), "panel");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn unparsable_input_passes_through_with_a_warning() {
        let source = "export default { data() {";
        let result = convert_script(source, ConvertOptions::default());
        assert!(!result.converted);
        assert_eq!(result.code, source);
        assert_eq!(result.warnings.len(), 1);
    }
}
