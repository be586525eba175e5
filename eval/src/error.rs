use ast::ast::Type;
use ast::env::UnboundName;
use thiserror::Error;

use crate::value::Value;

#[derive(Error, Debug)]
pub enum RunTimeError {
    #[error("Runtime type error: expected a value of type {expected} but found {found}")]
    TypeError { expected: Type, found: Value },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Could not find unbound variable {0}")]
    UnboundName(String),
    #[error("Function not defined: {0}")]
    UndefinedFunction(String),
    #[error("Function '{name}' expects {expected} arguments but was given {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid cast of {value} to {target}")]
    CastFailure { value: Value, target: Type },
    #[error("Reached end of input while waiting for a line")]
    EndOfInput,
    #[error("I/O error on standard streams: {0}")]
    Io(#[from] std::io::Error),
}

impl RunTimeError {
    /// Only a failed cast is recoverable; everything else aborts the evaluation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RunTimeError::CastFailure { .. })
    }
}

impl From<UnboundName> for RunTimeError {
    fn from(UnboundName(name): UnboundName) -> Self {
        RunTimeError::UnboundName(name)
    }
}
