//! Normalized fragments collected during traversal, and the per-call
//! aggregator that owns them.

use smol_str::SmolStr;

/// A function-like option value after normalization.
///
/// All surface shapes (`key() {}`, `key: function () {}`, `key: () => {}`,
/// `key: () => (expr)`) reduce to this one record. `body` is `None` only
/// when the source had no body at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncInfo {
    /// Member name, re-rendered from the interned symbol (never a source
    /// slice, so leading comment trivia cannot ride along).
    pub name: SmolStr,
    /// Verbatim parameter slices, in order. Defaults and patterns survive.
    pub params: Vec<String>,
    /// The function body, when present.
    pub body: Option<FuncBody>,
    /// Whether the source function was `async`.
    pub is_async: bool,
}

/// A normalized function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuncBody {
    /// A block body, verbatim including braces.
    Block(String),
    /// A single-expression arrow body; synthesized as `{ return <expr>; }`.
    Expr(String),
}

/// A plain field: a `data` property or a non-function `methods` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    pub name: SmolStr,
    /// Verbatim initializer text; `None` emits a bare declaration.
    pub init: Option<String>,
}

/// One computed accessor. `func.name` is the accessor name; for the nested
/// `{ get() {}, set(v) {} }` form it is the outer property key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedMember {
    pub is_setter: bool,
    pub func: FuncInfo,
}

/// One `methods` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodMember {
    /// A real method, emitted private.
    Method(FuncInfo),
    /// A non-function value (`fetch: axios`, shorthand `axios`), preserved
    /// as a field initializer so its identity semantics survive.
    Field(DataField),
}

/// One `props` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropField {
    pub name: SmolStr,
    pub config: PropConfig,
}

/// How a prop was declared, which decides its `@Prop` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropConfig {
    /// Array-of-names form: `@Prop({ required: false })`, no type entry.
    Bare,
    /// Bare type reference: `@Prop({ required: false, type: <text> })`.
    Typed(String),
    /// Full configuration object, passed through verbatim.
    Full(String),
}

/// One watcher: the watched path, the synthesized handler name (rewritten
/// by the collision post-pass), the handler function and its declarative
/// flags (`deep: true`, ...) as verbatim slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchMember {
    pub path: SmolStr,
    pub method_name: SmolStr,
    pub func: FuncInfo,
    pub options: Vec<String>,
}

/// The vuex-class binding a `mapX` helper resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    State,
    Getter,
    Mutation,
    Action,
}

impl BindingKind {
    /// Maps a `mapX` helper name to its binding kind.
    pub fn from_helper(helper: &str) -> Option<Self> {
        match helper {
            "mapState" => Some(Self::State),
            "mapGetters" => Some(Self::Getter),
            "mapMutations" => Some(Self::Mutation),
            "mapActions" => Some(Self::Action),
            _ => None,
        }
    }

    /// The vuex-class decorator (and import binding) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::State => "State",
            Self::Getter => "Getter",
            Self::Mutation => "Mutation",
            Self::Action => "Action",
        }
    }
}

/// The decorator argument of a resolved state binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreGetter {
    /// Object-argument form; re-rendered as `(params) => body`.
    Mapped { params: Vec<String>, body: FuncBody },
    /// String-array form; the element is both field name and lookup key.
    Key(SmolStr),
}

/// One resolved state binding, whichever option it was spread into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub kind: BindingKind,
    pub name: SmolStr,
    pub namespace: Option<SmolStr>,
    pub getter: StoreGetter,
}

/// An opaque `components` / `directives` / `filters` fragment: the verbatim
/// property slice plus the nested member names the collision resolver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOption {
    pub text: String,
    pub member_names: Vec<SmolStr>,
}

/// Everything collected about the component currently being converted.
///
/// One instance per conversion call, owned by the caller of the traversal;
/// handlers mutate it, the collision post-pass and the synthesizer read it,
/// and it is dropped when the file's output has been produced. Nothing here
/// survives across files.
#[derive(Debug, Default)]
pub struct ComponentInfo {
    pub name: Option<SmolStr>,
    pub data: Vec<DataField>,
    pub components: Option<ContainerOption>,
    pub directives: Option<ContainerOption>,
    pub filters: Option<ContainerOption>,
    pub computed: Vec<ComputedMember>,
    pub methods: Vec<MethodMember>,
    pub props: Vec<PropField>,
    pub watch: Vec<WatchMember>,
    pub lifecycle_hooks: Vec<FuncInfo>,
    pub statements_in_data_scope: Vec<String>,
    pub stores: Vec<StoreInfo>,
    /// Unrecognized top-level option entries, preserved verbatim inside the
    /// `@Component({ ... })` argument. Never flips `is_conversion_required`.
    pub carryover: Vec<String>,
    /// Flips the instant any handler records a non-empty fragment. Gates
    /// whether the file is rewritten at all.
    pub is_conversion_required: bool,
}

impl ComponentInfo {
    pub fn set_name(&mut self, name: SmolStr) {
        self.name = Some(name);
        self.is_conversion_required = true;
    }

    pub fn push_data_field(&mut self, field: DataField) {
        self.data.push(field);
        self.is_conversion_required = true;
    }

    pub fn push_data_statement(&mut self, statement: String) {
        self.statements_in_data_scope.push(statement);
        self.is_conversion_required = true;
    }

    pub fn set_components(&mut self, option: ContainerOption) {
        self.components = Some(option);
        self.is_conversion_required = true;
    }

    pub fn set_directives(&mut self, option: ContainerOption) {
        self.directives = Some(option);
        self.is_conversion_required = true;
    }

    pub fn set_filters(&mut self, option: ContainerOption) {
        self.filters = Some(option);
        self.is_conversion_required = true;
    }

    pub fn push_computed(&mut self, member: ComputedMember) {
        self.computed.push(member);
        self.is_conversion_required = true;
    }

    pub fn push_method(&mut self, member: MethodMember) {
        self.methods.push(member);
        self.is_conversion_required = true;
    }

    pub fn push_prop(&mut self, prop: PropField) {
        self.props.push(prop);
        self.is_conversion_required = true;
    }

    pub fn push_watch(&mut self, watch: WatchMember) {
        self.watch.push(watch);
        self.is_conversion_required = true;
    }

    pub fn push_lifecycle(&mut self, hook: FuncInfo) {
        self.lifecycle_hooks.push(hook);
        self.is_conversion_required = true;
    }

    pub fn push_store(&mut self, store: StoreInfo) {
        self.stores.push(store);
        self.is_conversion_required = true;
    }

    pub fn push_carryover(&mut self, text: String) {
        self.carryover.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_flag_starts_false() {
        let info = ComponentInfo::default();
        assert!(!info.is_conversion_required);
    }

    #[test]
    fn handler_writes_flip_the_flag() {
        let mut info = ComponentInfo::default();
        info.push_data_field(DataField {
            name: "count".into(),
            init: Some("0".into()),
        });
        assert!(info.is_conversion_required);
    }

    #[test]
    fn carryover_does_not_flip_the_flag() {
        let mut info = ComponentInfo::default();
        info.push_carryover("inheritAttrs: false".into());
        assert!(!info.is_conversion_required);
    }

    #[test]
    fn binding_kind_mapping() {
        assert_eq!(BindingKind::from_helper("mapState"), Some(BindingKind::State));
        assert_eq!(
            BindingKind::from_helper("mapGetters"),
            Some(BindingKind::Getter)
        );
        assert_eq!(
            BindingKind::from_helper("mapMutations"),
            Some(BindingKind::Mutation)
        );
        assert_eq!(
            BindingKind::from_helper("mapActions"),
            Some(BindingKind::Action)
        );
        assert_eq!(BindingKind::from_helper("mapWhatever"), None);
        assert_eq!(BindingKind::Mutation.as_str(), "Mutation");
    }
}
