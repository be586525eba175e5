use ast::ast::{Program, Type};
use typecheck::typecheck_program;

mod error;
mod typecheck;

pub use error::TypingError;
pub use typecheck::{check_function, declare_functions, infer_type};

pub type TCResult<T> = Result<T, TypingError>;

pub fn typecheck(p: &Program) -> TCResult<()> {
    typecheck_program(p).map(|_| ())
}

/// Checks the whole program and returns the static type of its main expression.
pub fn program_type(p: &Program) -> TCResult<Type> {
    typecheck_program(p)
}
