//! Request parameters and their values.
//!
//! # Design
//! Values keep their original type (`ParamValue`) and are rendered on demand
//! through `Display`. Rendering never depends on the process locale: integers
//! are plain decimal digits, floats use Rust's shortest round-trip form and
//! booleans are `true`/`false`.

use std::fmt;

/// Where a parameter ends up when the request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Replaces a `{name}` placeholder in the resource path.
    UrlSegment,
    /// Always appended to the query string.
    QueryString,
    /// Sent as an HTTP header.
    Header,
    /// Query string for body-less methods, form body otherwise.
    GetOrPost,
    /// Raw request body; the parameter name is its content type.
    RequestBody,
}

/// A parameter value, stored typed and stringified on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Unsigned(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl PartialEq<str> for ParamValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, ParamValue::Text(s) if s == other)
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                ParamValue::Integer(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                ParamValue::Unsigned(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for ParamValue {
    fn from(x: f32) -> Self {
        ParamValue::Float(f64::from(x))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<char> for ParamValue {
    fn from(c: char) -> Self {
        ParamValue::Text(c.to_string())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Text(s.clone())
    }
}

/// A single named request parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParamValue,
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_grouping() {
        assert_eq!(ParamValue::from(1).to_string(), "1");
        assert_eq!(ParamValue::from(1_234_567_i64).to_string(), "1234567");
        assert_eq!(ParamValue::from(-42_i32).to_string(), "-42");
        assert_eq!(ParamValue::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn floats_use_shortest_form() {
        assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
        assert_eq!(ParamValue::from(2.0_f64).to_string(), "2");
        assert_eq!(ParamValue::from(0.25_f32).to_string(), "0.25");
    }

    #[test]
    fn bools_and_chars_render() {
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from('x').to_string(), "x");
    }

    #[test]
    fn text_compares_with_str() {
        let value = ParamValue::from("world");
        assert_eq!(value, "world");
        assert_ne!(ParamValue::from(1), "1");
    }

    #[test]
    fn parameter_new_converts_value() {
        let param = Parameter::new("Id", 7_u8, ParameterKind::UrlSegment);
        assert_eq!(param.name, "Id");
        assert_eq!(param.value, ParamValue::Unsigned(7));
        assert_eq!(param.kind, ParameterKind::UrlSegment);
    }
}
