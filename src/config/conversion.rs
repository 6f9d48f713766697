// Author: Dustin Pilgrim
// License: MIT

use crate::ast::ValueType;
use crate::{ConfigError, Value};

fn type_mismatch(expected: ValueType, value: &Value, code: u32) -> ConfigError {
    ConfigError::TypeError {
        message: format!("Expected {}, got {} {:?}", expected, value.value_type(), value),
        hint: Some(format!("Use a {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_mismatch(ValueType::String, &value, 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_mismatch(ValueType::Integer, &value, 402)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Double(d) => Ok(d),
            _ => Err(type_mismatch(ValueType::Double, &value, 403)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Double(d) => Ok(d as f32),
            _ => Err(type_mismatch(ValueType::Double, &value, 403)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(type_mismatch(ValueType::Boolean, &value, 404)),
        }
    }
}

/// Narrower integer types go through `i64` and fail when the value does not fit.
macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ConfigError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| ConfigError::TypeError {
                        message: format!("Integer {} out of range for {}", n, stringify!($ty)),
                        hint: Some(format!(
                            "Use an integer between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(405),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, u8, u16, u32, u64, usize);

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
