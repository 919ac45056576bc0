//! Fixed name lists and generated-code constants.

/// Lifecycle hooks the engine converts, in the order Vue invokes them.
/// Anything matching one of these names at the option level becomes a
/// protected method.
pub const LIFECYCLE_HOOKS: [&str; 11] = [
    "beforeCreate",
    "created",
    "beforeMount",
    "mounted",
    "beforeUpdate",
    "updated",
    "activated",
    "deactivated",
    "beforeDestroy",
    "destroyed",
    "errorCaptured",
];

/// Module specifiers whose imports are replaced by generated ones rather
/// than carried over.
pub const REPLACED_MODULES: [&str; 2] = ["vue", "vuex"];

/// The vuex helper that declares an ambient namespace variable
/// (`const ns = createNamespacedHelpers("me")`).
pub const NAMESPACE_FACTORY: &str = "createNamespacedHelpers";

/// Its vuex-class equivalent (`const ns = namespace("me")`).
pub const NAMESPACE_BINDING: &str = "namespace";

/// Fixed first import of every generated file.
pub const TSX_IMPORT: &str = "import * as tsx from \"vue-tsx-support\";";

/// Fixed first member of every generated class.
pub const TSX_FIELD: &str =
    "public _tsx!: tsx.DeclareProps<tsx.AutoProps<this>> & tsx.DeclareOnEvents<ComEvents>;";

/// Returns true if `name` is one of the convertible lifecycle hooks.
pub fn is_lifecycle_hook(name: &str) -> bool {
    LIFECYCLE_HOOKS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_hooks() {
        assert!(is_lifecycle_hook("mounted"));
        assert!(is_lifecycle_hook("errorCaptured"));
        assert!(!is_lifecycle_hook("setup"));
        assert!(!is_lifecycle_hook("Mounted"));
    }
}
