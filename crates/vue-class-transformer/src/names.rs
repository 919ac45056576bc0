//! Watcher handler naming and the collision post-pass.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::types::{ComponentInfo, MethodMember};

/// Synthesizes the handler method name for a watched path:
/// `"obj.id"` becomes `onObjIdChange`. Dotted segments are capitalized and
/// concatenated; non-alphanumeric characters are stripped.
pub(crate) fn watch_handler_name(path: &str) -> SmolStr {
    let joined: String = path
        .split('.')
        .map(|segment| {
            let clean: String = segment.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
            capitalize(&clean)
        })
        .collect();
    SmolStr::new(format!("on{joined}Change"))
}

/// Fallback class name from a file stem: `account-card` becomes
/// `AccountCard`. Segments split on anything non-alphanumeric.
pub(crate) fn class_name_from_stem(stem: &str) -> String {
    let name: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(capitalize)
        .collect();
    if name.is_empty() {
        "Component".to_string()
    } else {
        name
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// All member names the synthesized class will carry besides the watchers
/// themselves. Built once, after traversal, as a pure function of the
/// fully populated aggregator.
pub(crate) fn existing_member_names(info: &ComponentInfo) -> FxHashSet<SmolStr> {
    let mut names = FxHashSet::default();
    names.extend(info.data.iter().map(|field| field.name.clone()));
    names.extend(info.computed.iter().map(|member| member.func.name.clone()));
    names.extend(info.methods.iter().map(|member| match member {
        MethodMember::Method(func) => func.name.clone(),
        MethodMember::Field(field) => field.name.clone(),
    }));
    names.extend(info.props.iter().map(|prop| prop.name.clone()));
    names.extend(info.lifecycle_hooks.iter().map(|hook| hook.name.clone()));
    for container in [&info.components, &info.directives, &info.filters]
        .into_iter()
        .flatten()
    {
        names.extend(container.member_names.iter().cloned());
    }
    names
}

/// Renames colliding watcher methods. The rename appends an underscore and
/// a 4-character content hash of the name that collided, repeating until
/// unique, so identical input always produces identical output.
pub(crate) fn resolve_watch_collisions(info: &mut ComponentInfo) {
    let existing = existing_member_names(info);
    for watch in &mut info.watch {
        let base = watch.method_name.clone();
        let mut name = base.clone();
        while existing.contains(&name) {
            name = SmolStr::new(format!("{base}_{}", short_hash(&name)));
        }
        watch.method_name = name;
    }
}

fn short_hash(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex()[..4].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataField, FuncInfo, WatchMember};
    use pretty_assertions::assert_eq;

    fn watcher(path: &str) -> WatchMember {
        WatchMember {
            path: path.into(),
            method_name: watch_handler_name(path),
            func: FuncInfo {
                name: path.into(),
                params: vec![],
                body: None,
                is_async: false,
            },
            options: vec![],
        }
    }

    #[test]
    fn class_name_from_kebab_stem() {
        assert_eq!(class_name_from_stem("account-card"), "AccountCard");
        assert_eq!(class_name_from_stem("panel"), "Panel");
        assert_eq!(class_name_from_stem("---"), "Component");
    }

    #[test]
    fn dotted_path_naming() {
        assert_eq!(watch_handler_name("obj.id"), "onObjIdChange");
        assert_eq!(watch_handler_name("value"), "onValueChange");
        assert_eq!(watch_handler_name("$route.query"), "onRouteQueryChange");
    }

    #[test]
    fn collision_appends_hash_suffix() {
        let mut info = ComponentInfo::default();
        info.push_data_field(DataField {
            name: "onValueChange".into(),
            init: None,
        });
        info.push_watch(watcher("value"));

        resolve_watch_collisions(&mut info);
        let renamed = info.watch[0].method_name.clone();
        assert!(renamed.starts_with("onValueChange_"));
        assert_eq!(renamed.len(), "onValueChange".len() + 5);

        // stable across repeated runs
        resolve_watch_collisions(&mut info);
        let mut again = ComponentInfo::default();
        again.push_data_field(DataField {
            name: "onValueChange".into(),
            init: None,
        });
        again.push_watch(watcher("value"));
        resolve_watch_collisions(&mut again);
        assert_eq!(again.watch[0].method_name, renamed);
    }

    #[test]
    fn no_collision_keeps_the_name() {
        let mut info = ComponentInfo::default();
        info.push_watch(watcher("obj.id"));
        resolve_watch_collisions(&mut info);
        assert_eq!(info.watch[0].method_name, "onObjIdChange");
    }
}
