//! The dynamically-typed [`JsonValue`] and its container types.
//!
//! A value exclusively owns its string, array or object payload. `Clone` performs a deep copy;
//! [`JsonValue::take`] moves the payload out in O(1) and leaves `Undefined` behind.
//!
//! Shared lookups that miss (absent key, index out of range, wrong variant) return a reference to
//! one process-wide immutable `Undefined` value instead of allocating.

mod access;
mod array;
mod coerce;
mod compare;
mod convert;
mod object;

pub use array::JsonArray;
pub use object::JsonObject;

use crate::{
	parse::parse_json,
	stringify::{StringifyOptions, stringify_with},
};
use std::fmt::{self, Display};

/// The shared value returned by shared lookups that miss.
static UNDEFINED: JsonValue = JsonValue::Undefined;

/// The variant tag of a [`JsonValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
	Undefined,
	Boolean,
	Number,
	Integer,
	String,
	Array,
	Object,
}

impl ValueType {
	/// Lowercase name of the type (`"undefined"`, `"integer"`, ...).
	#[must_use]
	pub fn as_str(self) -> &'static str {
		use ValueType::*;
		match self {
			Undefined => "undefined",
			Boolean => "boolean",
			Number => "number",
			Integer => "integer",
			String => "string",
			Array => "array",
			Object => "object",
		}
	}
}

impl Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Any JSON-like datum.
///
/// `Undefined` doubles as JSON `null`. `Integer` and `Number` are distinct numeric kinds: the
/// parser produces `Integer` for plain digit runs and `Number` for anything with a fraction or an
/// exponent. Values built through the `From` conversions never hold a non-finite `Number`; NaN
/// and infinities become `Undefined`.
///
/// Equality is loose: see the [`PartialEq`] implementation.
#[derive(Clone, Debug, Default)]
pub enum JsonValue {
	#[default]
	Undefined,
	Boolean(bool),
	Integer(i64),
	/// A finite double. Build it through [`JsonValue::from_number`] or `From<f64>` to keep that
	/// guarantee; a non-finite payload constructed directly is serialized as `null`.
	Number(f64),
	String(String),
	Array(JsonArray),
	Object(JsonObject),
}

impl JsonValue {
	/// The shared immutable `Undefined` value.
	///
	/// ```
	/// use loosejson::JsonValue;
	/// let value = JsonValue::new_object();
	/// assert!(std::ptr::eq(&value["missing"], JsonValue::empty()));
	/// ```
	#[must_use]
	pub fn empty() -> &'static JsonValue {
		&UNDEFINED
	}

	/// Create a new empty array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	/// Create a `Number`, or `Undefined` if `value` is NaN or infinite.
	#[must_use]
	pub fn from_number(value: f64) -> JsonValue {
		if value.is_finite() {
			JsonValue::Number(value)
		} else {
			JsonValue::Undefined
		}
	}

	/// Parse text with the lenient parser. Never fails; see [`crate::parse_json`].
	#[must_use]
	pub fn parse_str(json: &str) -> JsonValue {
		parse_json(json.as_bytes())
	}

	/// Parse a byte buffer with the lenient parser.
	#[must_use]
	pub fn parse_bytes(json: &[u8]) -> JsonValue {
		parse_json(json)
	}

	/// The active variant.
	#[must_use]
	pub fn value_type(&self) -> ValueType {
		match self {
			JsonValue::Undefined => ValueType::Undefined,
			JsonValue::Boolean(_) => ValueType::Boolean,
			JsonValue::Integer(_) => ValueType::Integer,
			JsonValue::Number(_) => ValueType::Number,
			JsonValue::String(_) => ValueType::String,
			JsonValue::Array(_) => ValueType::Array,
			JsonValue::Object(_) => ValueType::Object,
		}
	}

	/// Lowercase name of the active variant.
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		self.value_type().as_str()
	}

	#[must_use]
	pub fn is_undefined(&self) -> bool {
		matches!(self, JsonValue::Undefined)
	}

	#[must_use]
	pub fn is_boolean(&self) -> bool {
		matches!(self, JsonValue::Boolean(_))
	}

	/// True for both numeric kinds, `Integer` and `Number`.
	#[must_use]
	pub fn is_number(&self) -> bool {
		matches!(self, JsonValue::Integer(_) | JsonValue::Number(_))
	}

	#[must_use]
	pub fn is_integer(&self) -> bool {
		matches!(self, JsonValue::Integer(_))
	}

	/// True only for the floating point kind.
	#[must_use]
	pub fn is_floating_point(&self) -> bool {
		matches!(self, JsonValue::Number(_))
	}

	#[must_use]
	pub fn is_string(&self) -> bool {
		matches!(self, JsonValue::String(_))
	}

	#[must_use]
	pub fn is_array(&self) -> bool {
		matches!(self, JsonValue::Array(_))
	}

	#[must_use]
	pub fn is_object(&self) -> bool {
		matches!(self, JsonValue::Object(_))
	}

	/// Alias of [`JsonValue::is_object`].
	#[must_use]
	pub fn is_dict(&self) -> bool {
		self.is_object()
	}

	/// Move the value out, leaving `Undefined` in its place.
	///
	/// ```
	/// use loosejson::JsonValue;
	/// let mut source = JsonValue::from(vec![1, 2, 3]);
	/// let target = source.take();
	/// assert!(source.is_undefined());
	/// assert_eq!(target.size(), 3);
	/// ```
	pub fn take(&mut self) -> JsonValue {
		std::mem::take(self)
	}

	/// Release the payload and become `Undefined`.
	pub fn reset(&mut self) {
		*self = JsonValue::Undefined;
	}

	/// Borrow the array payload, if any.
	#[must_use]
	pub fn as_array(&self) -> Option<&JsonArray> {
		match self {
			JsonValue::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Mutably borrow the array payload, if any.
	pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
		match self {
			JsonValue::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Consume the value and return the array payload, if any.
	#[must_use]
	pub fn into_array(self) -> Option<JsonArray> {
		match self {
			JsonValue::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Borrow the object payload, if any.
	#[must_use]
	pub fn as_object(&self) -> Option<&JsonObject> {
		match self {
			JsonValue::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Mutably borrow the object payload, if any.
	pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
		match self {
			JsonValue::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Consume the value and return the object payload, if any.
	#[must_use]
	pub fn into_object(self) -> Option<JsonObject> {
		match self {
			JsonValue::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Compact JSON with object keys in sorted order.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify_with(self, &StringifyOptions::new_compact().with_sorted(true))
	}

	/// Multi-line JSON with object keys in native (unspecified) order.
	#[must_use]
	pub fn pretty_stringify(&self) -> String {
		stringify_with(self, &StringifyOptions::new_pretty())
	}
}

/// `{}` writes compact JSON, `{:#}` writes pretty JSON; object keys are sorted in both cases.
impl Display for JsonValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let options = if f.alternate() {
			StringifyOptions::new_pretty()
		} else {
			StringifyOptions::new_compact()
		};
		f.write_str(&stringify_with(self, &options.with_sorted(true)))
	}
}
