//! Coercion of the explicit order entry into an integer.

use serde_json::{Number, Value};

use super::DEFAULT_ORDER;
use crate::{ConfigError, ConfigMap, ConfigResult, ResourceLocation};

/// Reads the explicit order declared under `key`.
///
/// Absent and null entries fall back to [`DEFAULT_ORDER`]. Integers are used
/// as-is, strings must hold an integer literal, and floats are accepted only
/// when integral. Anything else, or a value outside the `i32` range, is
/// reported as [`ConfigError::InvalidOrder`].
pub(crate) fn extract_order(
    config: &ConfigMap,
    key: &str,
    location: &ResourceLocation,
) -> ConfigResult<i32> {
    let Some(value) = config.get(key) else {
        return Ok(DEFAULT_ORDER);
    };
    let coerced = match value {
        Value::Null => return Ok(DEFAULT_ORDER),
        Value::Number(number) => number_to_order(number),
        Value::String(text) => text.parse::<i32>().ok(),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    coerced.ok_or_else(|| ConfigError::invalid_order(location, key, value))
}

fn number_to_order(number: &Number) -> Option<i32> {
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).ok();
    }
    if number.is_u64() {
        return None;
    }
    number.as_f64().and_then(integral_float_to_order)
}

fn integral_float_to_order(value: f64) -> Option<i32> {
    let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
    if value.fract() != 0.0 || !range.contains(&value) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is integral and within the i32 range"
    )]
    let order = value as i32;
    Some(order)
}
