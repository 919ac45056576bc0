//! Line index for offset → line/column conversion.

use text_size::TextSize;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column (byte offset within the line).
    pub col: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// An index over the byte offsets where each line of a snippet starts.
///
/// Diagnostics carry line numbers, not byte offsets, so every warning the
/// engine emits goes through one of these. Lookup is O(log n).
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the offset where line `i` begins.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index for a snippet.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self { line_starts }
    }

    /// Returns the number of lines in the snippet.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a snippet-relative byte offset to a line/column position.
    ///
    /// Returns `None` if the offset is out of bounds.
    pub fn line_col(&self, offset: TextSize) -> Option<LineCol> {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = *self.line_starts.get(line)?;
        let col = u32::from(offset) - u32::from(line_start);

        Some(LineCol {
            line: line as u32,
            col,
        })
    }

    /// Returns the byte offset where a line starts.
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line() {
        let index = LineIndex::new("export default {}");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::from(0)), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(TextSize::from(7)), Some(LineCol::new(0, 7)));
    }

    #[test]
    fn multiple_lines() {
        let index = LineIndex::new("export default {\n  name: \"x\",\n}");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(TextSize::from(17)), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(TextSize::from(30)), Some(LineCol::new(2, 0)));
    }

    #[test]
    fn line_starts() {
        let index = LineIndex::new("a\nb\n");
        assert_eq!(index.line_start(0), Some(TextSize::from(0)));
        assert_eq!(index.line_start(1), Some(TextSize::from(2)));
        assert_eq!(index.line_start(2), Some(TextSize::from(4)));
        assert_eq!(index.line_start(3), None);
    }
}
