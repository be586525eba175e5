use std::io;

use ast::ast::Program;

mod cast;
mod error;
mod eval;
mod value;

pub use cast::cast;
pub use error::RunTimeError;
pub use eval::Interpreter;
pub use value::Value;

pub type RTResult<T> = Result<T, RunTimeError>;

/// Evaluates `program` with `GetInput` reading stdin and `Print` writing stdout.
pub fn eval(program: &Program) -> RTResult<Value> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(stdin.lock(), stdout.lock());
    interpreter.eval_program(program)
}
