//! Conversion from `serde_json::Value` into [`Arg`].
//!
//! Useful when template arguments arrive as JSON (request bodies, fixtures).
//! Objects keep their document order.

use serde_json::Value;

use crate::arg::{Arg, Key};
use crate::error::{TemplateError, TemplateResult};

impl TryFrom<Value> for Arg {
    type Error = TemplateError;

    fn try_from(value: Value) -> TemplateResult<Self> {
        json_to_arg(value)
    }
}

fn json_to_arg(value: Value) -> TemplateResult<Arg> {
    Ok(match value {
        Value::Null => Arg::Null,
        Value::Bool(b) => Arg::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Arg::Int(i)
            } else if n.is_u64() {
                return Err(TemplateError::Serialization(format!(
                    "integer {n} does not fit in i64"
                )));
            } else {
                // Non-integer numbers always have an f64 representation.
                Arg::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Arg::Text(s),
        Value::Array(items) => Arg::Collection(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| Ok((Key::from(i), json_to_arg(v)?)))
                .collect::<TemplateResult<_>>()?,
        ),
        Value::Object(fields) => Arg::Collection(
            fields
                .into_iter()
                .map(|(k, v)| Ok((Key::Name(k), json_to_arg(v)?)))
                .collect::<TemplateResult<_>>()?,
        ),
    })
}

/// Convert a JSON array of arguments into a positional argument list.
///
/// A non-array value is treated as a single argument.
pub fn args_from_json(value: Value) -> TemplateResult<Vec<Arg>> {
    match value {
        Value::Array(items) => items.into_iter().map(Arg::try_from).collect(),
        other => Ok(vec![Arg::try_from(other)?]),
    }
}
