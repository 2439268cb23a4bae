//! Conversions from Rust types into `JsonValue`.
//!
//! Integer types become `JsonValue::Integer`, floating point types become `JsonValue::Number`
//! (or `Undefined` when not finite). Sequences become arrays and string-keyed maps become objects.

use super::{JsonArray, JsonObject, JsonValue};
use std::collections::{BTreeMap, HashMap};

/// Implement `From<Integer>` for `JsonValue` for types with lossless i64 conversion.
macro_rules! impl_from_integer_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Integer(i64::from(input))
				}
			}
		)+
	};
}

/// Implement `From<Integer>` for `JsonValue` for types that may wrap when cast to i64.
macro_rules! impl_from_integer_wrapping {
	($($t:ty),+ $(,)?) => {
		$(
			#[allow(clippy::cast_possible_wrap)]
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Integer(input as i64)
				}
			}
		)+
	};
}

impl_from_integer_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_from_integer_wrapping!(isize, u64, usize);

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::from_number(input)
	}
}

impl From<f32> for JsonValue {
	fn from(input: f32) -> Self {
		JsonValue::from_number(f64::from(input))
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_owned())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.clone())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

/// `None` becomes `Undefined`.
impl<T> From<Option<T>> for JsonValue
where
	T: Into<JsonValue>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Undefined, Into::into)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	T: Into<JsonValue>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T> From<&[T]> for JsonValue
where
	T: Clone + Into<JsonValue>,
{
	fn from(input: &[T]) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T, const N: usize> From<[T; N]> for JsonValue
where
	T: Into<JsonValue>,
{
	fn from(input: [T; N]) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T> From<HashMap<String, T>> for JsonValue
where
	T: Into<JsonValue>,
{
	fn from(input: HashMap<String, T>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl<T> From<BTreeMap<String, T>> for JsonValue
where
	T: Into<JsonValue>,
{
	fn from(input: BTreeMap<String, T>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl JsonValue {
	/// Build an object from key/value pairs. Later pairs overwrite earlier ones with the same key.
	///
	/// ```
	/// use loosejson::JsonValue;
	/// let value = JsonValue::from_pairs([("name", JsonValue::from("x")), ("size", JsonValue::from(3))]);
	/// assert_eq!(value.stringify(), r#"{"name":"x","size":3}"#);
	/// ```
	pub fn from_pairs<K, V, I>(pairs: I) -> JsonValue
	where
		K: Into<String>,
		V: Into<JsonValue>,
		I: IntoIterator<Item = (K, V)>,
	{
		JsonValue::Object(pairs.into_iter().collect())
	}
}
