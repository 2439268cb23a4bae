//! Lenient conversions from a `JsonValue` to Rust scalars.
//!
//! None of these conversions fail. Each takes a fallback that is returned when the active variant
//! has no meaningful conversion.

use super::JsonValue;
use crate::codec::{escape_json_string, integer_to_string, number_to_string, parse_float_prefix, parse_integer_prefix};

impl JsonValue {
	/// Booleans as-is, numbers are true when non-zero, strings are true when non-empty.
	/// `Undefined`, arrays and objects yield `default`.
	#[must_use]
	pub fn as_boolean(&self, default: bool) -> bool {
		match self {
			JsonValue::Boolean(b) => *b,
			JsonValue::Integer(i) => *i != 0,
			JsonValue::Number(n) => *n != 0.0,
			JsonValue::String(s) => !s.is_empty(),
			JsonValue::Undefined | JsonValue::Array(_) | JsonValue::Object(_) => default,
		}
	}

	/// Booleans become 1.0/0.0, strings are read by their longest numeric prefix (`0.0` if none).
	/// Like C `strtod`, the prefix may be hexadecimal, `inf` or `nan`.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn as_number(&self, default: f64) -> f64 {
		match self {
			JsonValue::Boolean(b) => f64::from(u8::from(*b)),
			JsonValue::Integer(i) => *i as f64,
			JsonValue::Number(n) => *n,
			JsonValue::String(s) => parse_float_prefix(s.as_bytes()),
			JsonValue::Undefined | JsonValue::Array(_) | JsonValue::Object(_) => default,
		}
	}

	/// Booleans become 1/0, floating point numbers are truncated toward zero (saturating),
	/// strings are read by their longest decimal integer prefix (`0` if none).
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub fn as_long_long(&self, default: i64) -> i64 {
		match self {
			JsonValue::Boolean(b) => i64::from(*b),
			JsonValue::Integer(i) => *i,
			JsonValue::Number(n) => *n as i64,
			JsonValue::String(s) => parse_integer_prefix(s.as_bytes()),
			JsonValue::Undefined | JsonValue::Array(_) | JsonValue::Object(_) => default,
		}
	}

	/// Same as [`JsonValue::as_long_long`].
	#[must_use]
	pub fn as_long(&self, default: i64) -> i64 {
		self.as_long_long(default)
	}

	/// [`JsonValue::as_long_long`] narrowed to 32 bits (two's complement truncation).
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub fn as_int(&self, default: i32) -> i32 {
		self.as_long_long(i64::from(default)) as i32
	}

	/// Textual form of a scalar.
	///
	/// Numbers use the canonical formatting of the serializers, booleans become `"true"`/`"false"`.
	/// Arrays and objects yield the placeholders `"Array[]"` and `"Object{}"`, `Undefined` yields
	/// `default`.
	#[must_use]
	pub fn as_string(&self, default: &str) -> String {
		match self {
			JsonValue::Undefined => default.to_owned(),
			JsonValue::Boolean(b) => b.to_string(),
			JsonValue::Integer(i) => integer_to_string(*i),
			JsonValue::Number(n) => number_to_string(*n),
			JsonValue::String(s) => s.clone(),
			JsonValue::Array(_) => String::from("Array[]"),
			JsonValue::Object(_) => String::from("Object{}"),
		}
	}

	/// Borrow the string payload, or `default` for every other variant.
	#[must_use]
	pub fn as_const_string<'a>(&'a self, default: &'a str) -> &'a str {
		match self {
			JsonValue::String(s) => s,
			_ => default,
		}
	}

	/// [`JsonValue::as_string`] passed through the JSON string escaper.
	#[must_use]
	pub fn as_escaped_string(&self, default: &str) -> String {
		escape_json_string(&self.as_string(default))
	}
}
