#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn seeded_with_version() {
    let env = Environment::new();
    assert_eq!(env.get("_VERSION"), Value::string("Lua 5.3 (BETA)"));
}

#[test]
fn seeded_with_builtins() {
    let env = Environment::new();
    assert!(env.has_builtin("print"));
    assert!(env.has_builtin("type"));
    assert!(!Environment::empty().has_builtin("print"));
}

#[test]
fn unknown_names_read_as_nil() {
    assert_eq!(Environment::new().get("nope"), Value::Nil);
}

#[test]
fn set_overwrites() {
    let mut env = Environment::empty();
    env.set("x", Value::Number(1.0));
    env.set("x", Value::Bool(true));
    assert_eq!(env.get("x"), Value::Bool(true));
}

#[test]
fn values_and_functions_do_not_collide() {
    let mut env = Environment::new();
    env.set("print", Value::Number(1.0));
    assert_eq!(env.get("print"), Value::Number(1.0));
    let out = PrintHandlerImpl::Buffer(crate::BufferPrintHandler::new());
    env.call_builtin("print", &[Value::string("still works")], &out)
        .unwrap();
    assert_eq!(out.get_output_string(), "still works\n");
}

#[test]
fn calling_undefined_builtin() {
    let env = Environment::new();
    let err = env
        .call_builtin("missing", &[], &PrintHandlerImpl::Silent)
        .unwrap_err();
    assert_eq!(err.to_string(), "attempt to call a nil value (global 'missing')");
}

#[test]
fn custom_builtin() {
    fn answer(_: &[Value], _: &PrintHandlerImpl) -> EvalResult {
        Ok(Value::Number(42.0))
    }
    let mut env = Environment::empty();
    env.define_builtin("answer", answer);
    assert_eq!(
        env.call_builtin("answer", &[], &PrintHandlerImpl::Silent)
            .unwrap(),
        Value::Number(42.0)
    );
}
