use ast::ast::{IntType, Type};
use log::debug;

use crate::error::RunTimeError;
use crate::value::Value;
use crate::RTResult;

/// Converts `value` to `target`, or fails with `CastFailure` when no rule applies.
///
/// | target   | accepted sources                                              |
/// |----------|---------------------------------------------------------------|
/// | `String` | any value; `Int` as decimal, `Bool` as `true`/`false`, `()`   |
/// | `Int`    | `Int`, `Bool` (1/0), `String` matching `-?[0-9]+` within range |
/// | `Unit`   | `Unit`                                                        |
/// | `Bool`   | `Bool`, the exact strings `"true"` and `"false"`              |
pub fn cast(value: Value, target: &Type) -> RTResult<Value> {
    debug!("Casting {} to {}", value, target);
    let converted = match (target, &value) {
        (Type::String, Value::Int(i)) => Some(Value::String(i.to_string())),
        (Type::String, Value::Bool(b)) => Some(Value::String(b.to_string())),
        (Type::String, Value::String(_)) => Some(value.clone()),
        (Type::String, Value::Unit) => Some(Value::String("()".to_string())),

        (Type::Int, Value::String(s)) => parse_int(s).map(Value::Int),
        (Type::Int, Value::Bool(b)) => Some(Value::Int(IntType::from(*b))),
        (Type::Int, Value::Int(_)) => Some(value.clone()),

        (Type::Unit, Value::Unit) => Some(Value::Unit),

        (Type::Bool, Value::Bool(_)) => Some(value.clone()),
        (Type::Bool, Value::String(s)) if s == "true" => Some(Value::Bool(true)),
        (Type::Bool, Value::String(s)) if s == "false" => Some(Value::Bool(false)),

        _ => None,
    };
    converted.ok_or(RunTimeError::CastFailure {
        value,
        target: *target,
    })
}

fn parse_int(text: &str) -> Option<IntType> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
