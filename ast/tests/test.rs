use ast::ast::{Expr, FnDef, Program, Type};
use ast::env::{Env, UnboundName};

#[test]
fn empty_env_has_no_bindings() {
    let env: Env<Type> = Env::empty();
    assert!(env.is_empty());
    assert_eq!(env.lookup("x"), Err(UnboundName("x".to_string())));
}

#[test]
fn extending_does_not_touch_the_original() {
    let base = Env::empty().extended("x", 1);
    let inner = base.extended("y", 2);
    assert_eq!(inner.lookup("x"), Ok(&1));
    assert_eq!(inner.lookup("y"), Ok(&2));
    assert!(base.lookup("y").is_err());
    assert_eq!(base.lookup("x"), Ok(&1));
}

#[test]
fn latest_binding_shadows() {
    let outer = Env::empty().extended("x", Type::Int);
    let inner = outer.extended("x", Type::Bool);
    assert_eq!(inner.lookup("x"), Ok(&Type::Bool));
    assert_eq!(outer.lookup("x"), Ok(&Type::Int));
    let names: Vec<_> = inner.iter().map(|(n, t)| (n.to_string(), *t)).collect();
    assert_eq!(
        names,
        vec![("x".to_string(), Type::Bool), ("x".to_string(), Type::Int)]
    );
}

#[test]
fn siblings_share_a_parent() {
    let parent = Env::empty().extended("a", "shared".to_string());
    let left = parent.extended("b", "left".to_string());
    let right = parent.extended("b", "right".to_string());
    drop(parent);
    assert_eq!(left.lookup("b").unwrap(), "left");
    assert_eq!(right.lookup("b").unwrap(), "right");
    assert_eq!(left.lookup("a").unwrap(), "shared");
    assert_eq!(right.lookup("a").unwrap(), "shared");
}

#[test]
fn deep_chain_drops() {
    let mut env = Env::empty();
    for i in 0..200_000 {
        env = env.extended(format!("v{}", i), i);
    }
    assert_eq!(env.lookup("v0"), Ok(&0));
    drop(env);
}

#[test]
fn later_definition_wins_in_function_table() {
    let first = FnDef::new("f", &[], Type::Int, Expr::int(1));
    let second = FnDef::new("f", &[("x", Type::Bool)], Type::Bool, Expr::var("x"));
    let p = Program::new(vec![first, second.clone()], Expr::unit());
    let table = p.function_table();
    assert_eq!(table.len(), 1);
    assert_eq!(table["f"], &second);
}
