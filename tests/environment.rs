use pretty_assertions::assert_eq;
use vilang::interpreter::{
    environment::{Environment, ScopeId},
    value::Value,
};

#[test]
fn define_and_get_in_root() {
    let mut env = Environment::new();
    env.define(ScopeId::ROOT, "a", Value::Number(1.0));

    assert_eq!(env.get(ScopeId::ROOT, "a"), Some(&Value::Number(1.0)));
    assert_eq!(env.get(ScopeId::ROOT, "b"), None);
    assert_eq!(env.parent(ScopeId::ROOT), None);
}

#[test]
fn lookup_falls_back_to_parent() {
    let mut env = Environment::new();
    env.define(ScopeId::ROOT, "a", Value::from("gốc"));
    let child = env.push_scope(ScopeId::ROOT);
    let grandchild = env.push_scope(child);

    assert_eq!(env.parent(grandchild), Some(child));
    assert_eq!(env.get(grandchild, "a"), Some(&Value::from("gốc")));
}

#[test]
fn define_shadows_without_touching_parent() {
    let mut env = Environment::new();
    env.define(ScopeId::ROOT, "a", Value::Number(1.0));
    let child = env.push_scope(ScopeId::ROOT);
    env.define(child, "a", Value::Number(2.0));

    assert_eq!(env.get(child, "a"), Some(&Value::Number(2.0)));
    assert_eq!(env.get(ScopeId::ROOT, "a"), Some(&Value::Number(1.0)));
}

#[test]
fn set_updates_nearest_definition() {
    let mut env = Environment::new();
    env.define(ScopeId::ROOT, "a", Value::Number(1.0));
    let child = env.push_scope(ScopeId::ROOT);

    assert!(env.set(child, "a", Value::Number(5.0)));
    assert_eq!(env.get(ScopeId::ROOT, "a"), Some(&Value::Number(5.0)));
    assert_eq!(env.snapshot(child).len(), 1);
}

#[test]
fn set_on_undefined_name_fails() {
    let mut env = Environment::new();
    let child = env.push_scope(ScopeId::ROOT);

    assert!(!env.set(child, "a", Value::Bool(true)));
    assert_eq!(env.get(child, "a"), None);
    assert_eq!(env.get(ScopeId::ROOT, "a"), None);
}

#[test]
fn snapshot_prefers_inner_scopes_and_is_ordered() {
    let mut env = Environment::new();
    env.define(ScopeId::ROOT, "b", Value::Number(1.0));
    env.define(ScopeId::ROOT, "a", Value::Number(1.0));
    let child = env.push_scope(ScopeId::ROOT);
    env.define(child, "b", Value::Number(2.0));
    env.define(child, "c", Value::Number(3.0));

    let snapshot: Vec<_> = env.snapshot(child).into_iter().collect();

    assert_eq!(snapshot,
               vec![("a".to_string(), Value::Number(1.0)),
                    ("b".to_string(), Value::Number(2.0)),
                    ("c".to_string(), Value::Number(3.0))]);
    assert_eq!(env.snapshot(ScopeId::ROOT).len(), 2);
}
