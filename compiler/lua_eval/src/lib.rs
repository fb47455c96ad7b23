//! Tree-walking evaluator for the luai Lua subset.
//!
//! # Architecture
//!
//! - [`Value`]: closed sum of nil, boolean, number and byte string
//! - [`evaluate_binary`] / [`evaluate_unary`]: enum dispatch onto the
//!   operator kernel, one named function per operator
//! - [`Environment`]: the global value table and the built-in function table
//! - [`PrintHandlerImpl`]: where `print` output goes
//! - [`Interpreter`]: executes statements against an environment
//!
//! There is no implicit coercion anywhere in the kernel. An operand of the
//! wrong type is an [`EvalError`], and so is comparing values of different
//! types with `==`.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
pub mod operators;
mod print_handler;
pub mod unary_operators;
mod value;

pub use environment::{BuiltinFn, Environment, VERSION};
pub use errors::{EvalError, EvalResult, Verb};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{format_number, Value};
