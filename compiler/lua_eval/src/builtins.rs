//! Built-in functions.

use crate::errors::{bad_argument, EvalResult};
use crate::{Environment, PrintHandlerImpl, Value};

/// Install the standard built-ins.
pub fn register(env: &mut Environment) {
    env.define_builtin("print", print);
    env.define_builtin("type", type_of);
}

/// `print(...)`: arguments separated by tabs, then a newline. Returns nil.
pub fn print(args: &[Value], out: &PrintHandlerImpl) -> EvalResult {
    let mut line = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(b'\t');
        }
        line.extend_from_slice(&arg.render_bytes());
    }
    line.push(b'\n');
    out.write(&line)?;
    Ok(Value::Nil)
}

/// `type(v)`: the type name of `v` as a string.
pub fn type_of(args: &[Value], _out: &PrintHandlerImpl) -> EvalResult {
    let value = args
        .first()
        .ok_or_else(|| bad_argument(1, "type", "value expected"))?;
    Ok(Value::string(value.type_name()))
}
