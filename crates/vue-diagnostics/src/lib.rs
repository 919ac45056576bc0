//! Structured warnings for the option-to-class engine.
//!
//! The engine never aborts a file: every anomaly (an option outside the
//! allow-list, an unsupported props shape, an unparseable data declaration)
//! degrades to "drop or preserve the fragment, warn, continue". Warnings are
//! plain values returned to the caller; nothing here writes to a logger or
//! to stderr, so the engine stays pure and callers decide how to surface
//! them.

use std::fmt;

/// A single warning tied to a file and, when known, a 1-indexed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Identifier of the file being converted (path or synthetic name).
    pub file: String,
    /// 1-indexed line in the original snippet, when it could be resolved.
    pub line: Option<usize>,
    /// Human-readable description of what was skipped or preserved.
    pub message: String,
}

impl Warning {
    /// Creates a new warning.
    pub fn new(file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.file, line, self.message),
            None => write!(f, "{}: {}", self.file, self.message),
        }
    }
}

/// An ordered collection of warnings gathered over one conversion.
#[derive(Debug, Clone, Default)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning.
    pub fn push(&mut self, warning: Warning) {
        self.0.push(warning);
    }

    /// Returns true if no warnings were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the warnings in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.0.iter()
    }

    /// Consumes the collection, yielding the underlying vector.
    pub fn into_vec(self) -> Vec<Warning> {
        self.0
    }
}

impl IntoIterator for Warnings {
    type Item = Warning;
    type IntoIter = std::vec::IntoIter<Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_with_line() {
        let warning = Warning::new("App.vue", Some(12), "unsupported option API `metaInfo`");
        assert_eq!(
            warning.to_string(),
            "App.vue:12: unsupported option API `metaInfo`"
        );
    }

    #[test]
    fn display_without_line() {
        let warning = Warning::new("App.vue", None, "failed to parse component script");
        assert_eq!(
            warning.to_string(),
            "App.vue: failed to parse component script"
        );
    }

    #[test]
    fn collection_preserves_order() {
        let mut warnings = Warnings::new();
        warnings.push(Warning::new("a.vue", Some(1), "first"));
        warnings.push(Warning::new("a.vue", Some(2), "second"));
        let messages: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
