pub mod ast;
pub mod display;
pub mod env;
