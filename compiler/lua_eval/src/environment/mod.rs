//! Global environment.
//!
//! Two flat tables that live for the whole session and only grow: `vals`
//! for names read in expression position and `funcs` for names in call
//! position. The same identifier may appear in both without conflict.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::errors::{call_nil, EvalResult};
use crate::{builtins, PrintHandlerImpl, Value};

/// The value of `_VERSION`.
pub const VERSION: &str = "Lua 5.3 (BETA)";

/// A built-in function. Takes the evaluated arguments and the output sink.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> EvalResult;

pub struct Environment {
    vals: FxHashMap<String, Value>,
    funcs: FxHashMap<String, BuiltinFn>,
}

impl Environment {
    /// Environment seeded with `_VERSION` and the standard built-ins.
    pub fn new() -> Self {
        let mut env = Self::empty();
        env.set("_VERSION", Value::string(VERSION));
        builtins::register(&mut env);
        env
    }

    /// Environment with nothing defined.
    pub fn empty() -> Self {
        Environment {
            vals: FxHashMap::default(),
            funcs: FxHashMap::default(),
        }
    }

    /// Read a variable. Names never assigned read as nil.
    pub fn get(&self, name: &str) -> Value {
        self.vals.get(name).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        trace!(%name, %value, "set");
        self.vals.insert(name, value);
    }

    pub fn define_builtin(&mut self, name: impl Into<String>, func: BuiltinFn) {
        self.funcs.insert(name.into(), func);
    }

    pub fn has_builtin(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Call a built-in by name.
    pub fn call_builtin(&self, name: &str, args: &[Value], out: &PrintHandlerImpl) -> EvalResult {
        let func = self.funcs.get(name).ok_or_else(|| call_nil(name))?;
        trace!(name, argc = args.len(), "call");
        func(args, out)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
