//! Option classification.
//!
//! Every property of the component options object is classified exactly
//! once into a tagged kind, and the traversal dispatches on that tag with
//! an exhaustive `match`. Adding a new option means adding a variant and
//! letting the compiler point at every dispatch site.

use crate::consts::is_lifecycle_hook;

/// The kind of a top-level component option, keyed by its property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptionKind {
    /// `name: "Foo"`.
    Name,
    /// `data() { ... }` or `data: () => ({ ... })`.
    Data,
    /// `components: { ... }`.
    Components,
    /// `directives: { ... }`.
    Directives,
    /// `filters: { ... }`.
    Filters,
    /// `computed: { ... }`.
    Computed,
    /// `methods: { ... }`.
    Methods,
    /// `props: { ... }` or `props: [...]`.
    Props,
    /// `watch: { ... }`.
    Watch,
    /// One of the fixed lifecycle hook names.
    Lifecycle,
    /// Anything else; carried into the component decorator argument.
    Other,
}

/// Classifies a top-level option by name.
pub(crate) fn classify(name: &str) -> OptionKind {
    match name {
        "name" => OptionKind::Name,
        "data" => OptionKind::Data,
        "components" => OptionKind::Components,
        "directives" => OptionKind::Directives,
        "filters" => OptionKind::Filters,
        "computed" => OptionKind::Computed,
        "methods" => OptionKind::Methods,
        "props" => OptionKind::Props,
        "watch" => OptionKind::Watch,
        hook if is_lifecycle_hook(hook) => OptionKind::Lifecycle,
        _ => OptionKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_options() {
        assert_eq!(classify("name"), OptionKind::Name);
        assert_eq!(classify("data"), OptionKind::Data);
        assert_eq!(classify("computed"), OptionKind::Computed);
        assert_eq!(classify("watch"), OptionKind::Watch);
        assert_eq!(classify("mounted"), OptionKind::Lifecycle);
        assert_eq!(classify("beforeDestroy"), OptionKind::Lifecycle);
    }

    #[test]
    fn case_sensitive_and_unknown() {
        assert_eq!(classify("Data"), OptionKind::Other);
        assert_eq!(classify("inheritAttrs"), OptionKind::Other);
        assert_eq!(classify("setup"), OptionKind::Other);
    }
}
