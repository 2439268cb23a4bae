//! Serialization of [`JsonValue`] graphs to JSON text.
//!
//! Scalars render the same way in every form: `Undefined` as `null`, booleans as `true`/`false`,
//! integers as plain decimals, floating point numbers through
//! [`number_to_string`](crate::codec::number_to_string) and strings quoted and escaped.
//!
//! The compact form has no whitespace at all. The pretty form puts every array element and object
//! entry on its own line, indented by [`StringifyOptions::indent`] spaces per nesting level.
//! Empty containers render as `[]` and `{}` in both forms.
//!
//! Object entries follow the map's native (unspecified) order unless sorting is requested, in
//! which case keys are ordered byte-wise.

mod options;

pub use options::StringifyOptions;

use crate::{
	codec::{escape_json_string_into, integer_to_string, number_to_string},
	value::{JsonArray, JsonObject, JsonValue},
};

/// Compact JSON text.
///
/// ```
/// use loosejson::{JsonValue, stringify};
/// let value = JsonValue::from_pairs([("b", JsonValue::from(vec![1, 2])), ("a", JsonValue::from("x/y"))]);
/// assert_eq!(stringify(&value, true), r#"{"a":"x\/y","b":[1,2]}"#);
/// ```
#[must_use]
pub fn stringify(value: &JsonValue, sorted: bool) -> String {
	stringify_with(value, &StringifyOptions::new_compact().with_sorted(sorted))
}

/// Multi-line JSON text indented by four spaces per level.
///
/// ```
/// use loosejson::{JsonValue, pretty_stringify};
/// let value = JsonValue::from_pairs([("a", JsonValue::from(vec![1]))]);
/// assert_eq!(pretty_stringify(&value, true), "{\n    \"a\":[\n        1\n    ]\n}");
/// ```
#[must_use]
pub fn pretty_stringify(value: &JsonValue, sorted: bool) -> String {
	stringify_with(value, &StringifyOptions::new_pretty().with_sorted(sorted))
}

/// Serialize `value` according to `options`.
#[must_use]
pub fn stringify_with(value: &JsonValue, options: &StringifyOptions) -> String {
	let mut buffer = String::new();
	stringify_into(&mut buffer, value, options);
	buffer
}

/// Append the serialization of `value` to `buffer`.
pub fn stringify_into(buffer: &mut String, value: &JsonValue, options: &StringifyOptions) {
	Writer { buffer, options }.write_value(value, 0);
}

pub(crate) fn stringify_array_with(array: &JsonArray, options: &StringifyOptions) -> String {
	let mut buffer = String::new();
	Writer {
		buffer: &mut buffer,
		options,
	}
	.write_array(array, 0);
	buffer
}

pub(crate) fn stringify_object_with(object: &JsonObject, options: &StringifyOptions) -> String {
	let mut buffer = String::new();
	Writer {
		buffer: &mut buffer,
		options,
	}
	.write_object(object, 0);
	buffer
}

struct Writer<'a> {
	buffer: &'a mut String,
	options: &'a StringifyOptions,
}

impl Writer<'_> {
	fn write_value(&mut self, value: &JsonValue, level: usize) {
		match value {
			JsonValue::Undefined => self.buffer.push_str("null"),
			JsonValue::Boolean(b) => self.buffer.push_str(if *b { "true" } else { "false" }),
			JsonValue::Integer(i) => self.buffer.push_str(&integer_to_string(*i)),
			JsonValue::Number(n) => self.buffer.push_str(&number_to_string(*n)),
			JsonValue::String(s) => self.write_string(s),
			JsonValue::Array(array) => self.write_array(array, level),
			JsonValue::Object(object) => self.write_object(object, level),
		}
	}

	fn write_string(&mut self, text: &str) {
		self.buffer.push('"');
		escape_json_string_into(self.buffer, text);
		self.buffer.push('"');
	}

	fn write_array(&mut self, array: &JsonArray, level: usize) {
		if array.is_empty() {
			self.buffer.push_str("[]");
			return;
		}

		self.buffer.push('[');
		for (i, value) in array.iter().enumerate() {
			self.write_separator(i > 0, level + 1);
			self.write_value(value, level + 1);
		}
		self.write_closing(']', level);
	}

	fn write_object(&mut self, object: &JsonObject, level: usize) {
		if object.is_empty() {
			self.buffer.push_str("{}");
			return;
		}

		let entries = if self.options.sorted {
			object.sorted_entries()
		} else {
			object.iter().collect()
		};

		self.buffer.push('{');
		for (i, (key, value)) in entries.into_iter().enumerate() {
			self.write_separator(i > 0, level + 1);
			self.write_string(key);
			self.buffer.push(':');
			self.write_value(value, level + 1);
		}
		self.write_closing('}', level);
	}

	/// Comma between elements, then a line break and indentation in pretty mode.
	fn write_separator(&mut self, comma: bool, level: usize) {
		if comma {
			self.buffer.push(',');
		}
		if self.options.pretty {
			self.buffer.push('\n');
			self.write_indent(level);
		}
	}

	fn write_closing(&mut self, bracket: char, level: usize) {
		if self.options.pretty {
			self.buffer.push('\n');
			self.write_indent(level);
		}
		self.buffer.push(bracket);
	}

	fn write_indent(&mut self, level: usize) {
		let width = level * self.options.indent;
		self.buffer.extend(std::iter::repeat_n(' ', width));
	}
}
