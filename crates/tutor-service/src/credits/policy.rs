//! Interpretation of stored credits values.

use serde_json::Value;

/// Balance of a user with no row, or with no usable credits value.
pub const DEFAULT_CREDITS: u64 = 15;

/// Narrows a raw stored credits value to a balance.
///
/// Only a JSON integer that is zero or positive is taken as-is. Null,
/// strings (including numeric ones), booleans, fractional and negative
/// numbers all count as "absent" and yield [`DEFAULT_CREDITS`]; none of
/// them is an error.
pub fn narrow_credits(raw: Option<&Value>) -> u64 {
    raw.and_then(Value::as_u64).unwrap_or(DEFAULT_CREDITS)
}
