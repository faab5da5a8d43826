//! A tree-walking interpreter for a small Scheme-like dialect.
//!
//! ```
//! use wisp_scheme::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! assert_eq!(interp.run("(+ 1 2)").unwrap(), "3");
//! ```

mod builtins;
mod error;
mod eval;
mod gc;
mod heap;
mod intern;
mod interpreter;
mod parser;
mod scope;
mod serialize;
mod token;
mod tracer;
mod value;

pub use error::{ErrorKind, InterpError, InterpResult};
pub use interpreter::Interpreter;
pub use tracer::{NoopTracer, StderrTracer, Tracer};
