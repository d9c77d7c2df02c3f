//! Wire encoding of amounts.
//!
//! The gateway expects amounts the way a JSON number prints: integral values
//! without a fractional part (`100`, not `100.0`), everything else as-is.

use serde::Serializer;
use serde_json::{Number, Value};

/// Largest integer an f64 represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn as_exact_integer(amount: f64) -> Option<i64> {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() <= MAX_EXACT_INTEGER {
        Some(amount as i64)
    } else {
        None
    }
}

/// Render an amount for a query string.
pub fn amount_query_value(amount: f64) -> String {
    match as_exact_integer(amount) {
        Some(n) => n.to_string(),
        None => amount.to_string(),
    }
}

/// Render an amount as a JSON number. Non-finite input becomes `null`.
pub fn amount_json_value(amount: f64) -> Value {
    match as_exact_integer(amount) {
        Some(n) => Value::Number(n.into()),
        None => Number::from_f64(amount).map_or(Value::Null, Value::Number),
    }
}

/// `serialize_with` adapter for amount fields of request models.
pub fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_exact_integer(*amount) {
        Some(n) => serializer.serialize_i64(n),
        None => serializer.serialize_f64(*amount),
    }
}
