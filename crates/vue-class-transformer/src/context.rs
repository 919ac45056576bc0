//! Per-conversion context threaded through traversal and handlers.

use script_source::SourceText;
use swc_common::Span;
use vue_diagnostics::{Warning, Warnings};

use crate::types::ComponentInfo;

/// Everything one conversion call needs: the snippet text, the file
/// identifier for diagnostics, the aggregator and the warning channel.
///
/// One `Cx` per file; creating a fresh one is the whole "reset" story, so
/// callers may convert files concurrently without any shared state.
pub(crate) struct Cx<'a> {
    pub src: &'a SourceText<'a>,
    pub file: &'a str,
    pub info: ComponentInfo,
    pub warnings: Warnings,
}

impl<'a> Cx<'a> {
    pub fn new(src: &'a SourceText<'a>, file: &'a str) -> Self {
        Self {
            src,
            file,
            info: ComponentInfo::default(),
            warnings: Warnings::new(),
        }
    }

    /// Slices the original snippet by span.
    pub fn slice(&self, span: Span) -> &'a str {
        self.src.slice(span.lo.0, span.hi.0)
    }

    /// Records a warning located at the start of `span`.
    pub fn warn(&mut self, span: Option<Span>, message: impl Into<String>) {
        let line = span.and_then(|s| self.src.line_of(s.lo.0));
        self.warnings.push(Warning::new(self.file, line, message));
    }
}
