//! TypeScript snippet parsing.

use std::sync::Arc;

use swc_common::{FileName, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

/// A parsed script together with the offset the parser assigned to its
/// first byte. Every span in `module` is relative to the source map, so
/// slicing the original text requires subtracting `base_offset`.
#[derive(Debug)]
pub(crate) struct ParsedScript {
    pub module: Module,
    pub base_offset: u32,
}

/// The script could not be parsed as a TypeScript module.
#[derive(Debug, Clone, Error)]
#[error("syntax error{}: {message}", line.map(|l| format!(" on line {l}")).unwrap_or_default())]
pub struct ScriptParseError {
    /// 1-indexed line of the first error, when the parser located one.
    pub line: Option<usize>,
    /// Parser message.
    pub message: String,
}

/// Parses a component script as a non-TSX TypeScript module.
pub(crate) fn parse_script(script: &str) -> Result<ParsedScript, ScriptParseError> {
    let cm: Arc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("vue-component-script".into()).into(),
        script.to_string(),
    );
    let base_offset = fm.start_pos.0;
    let syntax = Syntax::Typescript(TsSyntax {
        tsx: false,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
    let module = parser.parse_module().map_err(|err| {
        let line = cm
            .lookup_line(err.span().lo)
            .ok()
            .map(|loc| loc.line + 1);
        ScriptParseError {
            line,
            message: err.kind().msg().into_owned(),
        }
    })?;

    // Recovered errors still mean the snippet is not trustworthy input.
    if let Some(err) = parser.take_errors().into_iter().next() {
        let line = cm
            .lookup_line(err.span().lo)
            .ok()
            .map(|loc| loc.line + 1);
        return Err(ScriptParseError {
            line,
            message: err.kind().msg().into_owned(),
        });
    }

    Ok(ParsedScript {
        module,
        base_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_component_module() {
        let parsed = parse_script("import Vue from \"vue\";\nexport default {};\n")
            .expect("valid module");
        assert_eq!(parsed.module.body.len(), 2);
    }

    #[test]
    fn reports_syntax_errors_with_a_line() {
        let err = parse_script("export default {\n  data() {\n").expect_err("invalid module");
        assert!(err.line.is_some());
        assert!(!err.message.is_empty());
    }

    #[test]
    fn spans_line_up_with_the_base_offset() {
        let source = "const x = 1;";
        let parsed = parse_script(source).expect("valid module");
        let span = parsed.module.body[0].span();
        let lo = (span.lo.0 - parsed.base_offset) as usize;
        let hi = (span.hi.0 - parsed.base_offset) as usize;
        assert_eq!(&source[lo..hi], "const x = 1;");
    }
}
