use ast::ast::Type;
use ast::env::UnboundName;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypingError {
    #[error("Couldn't match expected type '{expected}' with actual type '{actual}'")]
    TypeMismatch { expected: Type, actual: Type },
    #[error("Variable '{0}' is not in scope")]
    UnboundName(String),
    #[error("Call to undefined function '{0}'")]
    UndefinedFunction(String),
    #[error("Function '{name}' expects {expected} arguments but was given {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Found multiple definitions of '{0}' while typechecking")]
    MultipleDefinitions(String),
}

impl From<UnboundName> for TypingError {
    fn from(UnboundName(name): UnboundName) -> Self {
        TypingError::UnboundName(name)
    }
}
