//! Raw snippet text access for the option-to-class engine.
//!
//! The transformation engine re-emits most expression and body text verbatim,
//! sliced out of the original component script by byte span, and reports
//! warnings with 1-indexed line numbers. This crate owns both concerns:
//! [`SourceText`] wraps one snippet together with the parser's base offset,
//! and [`LineIndex`] provides offset → line/column lookup.

mod line_index;

pub use line_index::{LineCol, LineIndex};

/// One component-definition snippet plus the byte offset the parser assigned
/// to its first byte.
///
/// Parsers that manage several files in one address space (swc's source map
/// does) hand out absolute byte positions; all methods here take those
/// absolute positions and translate them back into the snippet.
#[derive(Debug)]
pub struct SourceText<'a> {
    text: &'a str,
    base: u32,
    index: LineIndex,
}

impl<'a> SourceText<'a> {
    /// Wraps a snippet. `base` is the absolute offset of `text[0]`.
    pub fn new(text: &'a str, base: u32) -> Self {
        Self {
            text,
            base,
            index: LineIndex::new(text),
        }
    }

    /// The full snippet text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Slices the snippet by absolute byte positions.
    ///
    /// Out-of-range or inverted positions yield an empty slice rather than a
    /// panic; the engine treats a missing slice as an empty fragment.
    pub fn slice(&self, lo: u32, hi: u32) -> &'a str {
        let lo = lo.saturating_sub(self.base) as usize;
        let hi = hi.saturating_sub(self.base) as usize;
        self.text.get(lo..hi).unwrap_or("")
    }

    /// Returns the 1-indexed line containing an absolute byte position.
    pub fn line_of(&self, pos: u32) -> Option<usize> {
        let rel = pos.checked_sub(self.base)?;
        self.index
            .line_col(text_size::TextSize::from(rel))
            .map(|lc| lc.line as usize + 1)
    }
}
