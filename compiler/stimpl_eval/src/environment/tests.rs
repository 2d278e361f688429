use super::*;
use pretty_assertions::assert_eq;

fn int_env(pairs: &[(&str, i64)]) -> Environment {
    pairs.iter().fold(Environment::empty(), |env, (name, n)| {
        env.extend(Name::from(*name), Some(Value::int(*n)), RuntimeType::Integer)
    })
}

#[test]
fn empty_has_no_bindings() {
    let env = Environment::empty();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert!(env.lookup("x").is_none());
}

#[test]
fn extend_then_lookup() {
    let env = int_env(&[("x", 1)]);
    let binding = env.lookup("x").unwrap();
    assert_eq!(binding.name().as_str(), "x");
    assert_eq!(binding.value(), Some(&Value::int(1)));
    assert_eq!(binding.ty(), RuntimeType::Integer);
}

#[test]
fn extend_does_not_affect_original() {
    let env = Environment::empty();
    let env2 = env.extend(Name::from("x"), Some(Value::int(1)), RuntimeType::Integer);
    assert!(env.lookup("x").is_none());
    assert!(env2.lookup("x").is_some());

    let env3 = env2.extend(Name::from("x"), Some(Value::int(2)), RuntimeType::Integer);
    assert_eq!(env2.lookup("x").unwrap().value(), Some(&Value::int(1)));
    assert_eq!(env3.lookup("x").unwrap().value(), Some(&Value::int(2)));
}

#[test]
fn most_recent_binding_shadows() {
    let env = int_env(&[("x", 1), ("y", 2), ("x", 3)]);
    assert_eq!(env.lookup("x").unwrap().value(), Some(&Value::int(3)));
    assert_eq!(env.lookup("y").unwrap().value(), Some(&Value::int(2)));
    // Shadowed binding is still part of the chain.
    assert_eq!(env.len(), 3);
}

#[test]
fn iter_is_newest_first() {
    let env = int_env(&[("a", 1), ("b", 2), ("a", 3)]);
    let values: Vec<_> = env.iter().map(|b| b.value().cloned()).collect();
    assert_eq!(
        values,
        vec![Some(Value::int(3)), Some(Value::int(2)), Some(Value::int(1))]
    );
}

#[test]
fn visible_skips_shadowed() {
    let env = int_env(&[("a", 1), ("b", 2), ("a", 3)]);
    let visible: Vec<_> = env
        .visible()
        .into_iter()
        .map(|b| (b.name().to_string(), b.value().cloned()))
        .collect();
    assert_eq!(
        visible,
        vec![
            ("a".to_string(), Some(Value::int(3))),
            ("b".to_string(), Some(Value::int(2))),
        ]
    );
}

#[test]
fn unit_binding_has_no_value() {
    let env = Environment::empty().extend(Name::from("u"), None, RuntimeType::Unit);
    let binding = env.lookup("u").unwrap();
    assert_eq!(binding.value(), None);
    assert_eq!(binding.ty(), RuntimeType::Unit);
}

#[test]
fn ptr_eq_is_node_identity() {
    let env = int_env(&[("x", 1)]);
    let same = env.clone();
    let rebuilt = int_env(&[("x", 1)]);
    assert!(env.ptr_eq(&same));
    assert!(!env.ptr_eq(&rebuilt));
    assert!(Environment::empty().ptr_eq(&Environment::empty()));
    assert!(!env.ptr_eq(&Environment::empty()));
}

#[test]
fn shared_tail_survives_head_drop() {
    let base = int_env(&[("x", 1)]);
    let branch = base.extend(Name::from("y"), Some(Value::int(2)), RuntimeType::Integer);
    drop(base);
    assert_eq!(branch.lookup("x").unwrap().value(), Some(&Value::int(1)));
}

#[test]
fn long_chain_drops_without_overflow() {
    let mut env = Environment::empty();
    for n in 0..200_000 {
        env = env.extend(Name::from("i"), Some(Value::int(n)), RuntimeType::Integer);
    }
    assert_eq!(env.len(), 200_000);
    drop(env);
}

#[test]
fn display_shows_visible_bindings() {
    let env = Environment::empty()
        .extend(Name::from("s"), Some(Value::string("hi")), RuntimeType::String)
        .extend(Name::from("n"), Some(Value::int(1)), RuntimeType::Integer)
        .extend(Name::from("n"), Some(Value::int(2)), RuntimeType::Integer)
        .extend(Name::from("u"), None, RuntimeType::Unit);
    assert_eq!(
        env.to_string(),
        "{u: Unit (Unit), n: 2 (Integer), s: \"hi\" (String)}"
    );
    assert_eq!(Environment::empty().to_string(), "{}");
}
