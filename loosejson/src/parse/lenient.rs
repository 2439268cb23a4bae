//! The forgiving recursive-descent parser.
//!
//! Parsing never fails. Bytes that cannot start or continue a value are skipped, truncated input
//! yields whatever was parsed so far and input without any value yields `Undefined`. Closing
//! brackets are not matched against their opening counterparts: `}` and `]` end any container.

use super::{ByteCursor, MAX_DEPTH};
use crate::{
	codec::{parse_float_prefix, parse_integer_prefix, read_hex4, unescape_json_string},
	value::{JsonArray, JsonObject, JsonValue},
};
use std::ffi::CStr;

/// Digit runs longer than this are read as floating point numbers.
const MAX_INTEGER_LENGTH: usize = 20;

/// Parse a byte buffer.
///
/// ```
/// use loosejson::parse_json;
/// let value = parse_json(br#"{"a":1,"b":[true,null,"x\/y"]}"#);
/// assert_eq!(value["a"].as_long(0), 1);
/// assert!(value["b"][1].is_undefined());
/// assert_eq!(value["b"][2].as_const_string(""), "x/y");
///
/// // malformed input degrades instead of failing
/// assert_eq!(parse_json(b"[1, 2").size(), 2);
/// assert!(parse_json(b"garbage").is_undefined());
/// ```
#[must_use]
pub fn parse_json(data: &[u8]) -> JsonValue {
	let mut parser = LenientParser::new(data);
	parser.parse_value()
}

/// Parse a string slice.
#[must_use]
pub fn parse_json_str(json: &str) -> JsonValue {
	parse_json(json.as_bytes())
}

/// Parse a null-terminated string. The terminator is not part of the input.
#[must_use]
pub fn parse_json_cstr(json: &CStr) -> JsonValue {
	parse_json(json.to_bytes())
}

struct LenientParser<'a> {
	cursor: ByteCursor<'a>,
	depth: usize,
}

impl<'a> LenientParser<'a> {
	fn new(data: &'a [u8]) -> Self {
		LenientParser {
			cursor: ByteCursor::new(data),
			depth: 0,
		}
	}

	fn parse_value(&mut self) -> JsonValue {
		while let Some(byte) = self.cursor.peek() {
			match byte {
				b'{' | b'[' if self.depth < MAX_DEPTH => {
					self.cursor.advance();
					self.depth += 1;
					let value = if byte == b'{' {
						self.parse_object()
					} else {
						self.parse_array()
					};
					self.depth -= 1;
					return value;
				}
				b'"' => {
					self.cursor.advance();
					return JsonValue::String(self.parse_string());
				}
				b'n' | b't' | b'f' => {
					if let Some(value) = self.parse_literal(byte) {
						return value;
					}
					self.skip("value");
				}
				b'-' | b'+' | b'0'..=b'9' => return self.parse_number(),
				_ => self.skip("value"),
			}
		}
		JsonValue::Undefined
	}

	/// `null`, `true` or `false`, matched byte for byte.
	fn parse_literal(&mut self, first: u8) -> Option<JsonValue> {
		let (tag, value): (&[u8], JsonValue) = match first {
			b'n' => (b"null", JsonValue::Undefined),
			b't' => (b"true", JsonValue::Boolean(true)),
			b'f' => (b"false", JsonValue::Boolean(false)),
			_ => return None,
		};
		if !self.cursor.starts_with(tag) {
			return None;
		}
		self.cursor.advance_by(tag.len());
		Some(value)
	}

	fn parse_number(&mut self) -> JsonValue {
		let start = self.cursor.position();
		let mut is_float = false;
		while let Some(byte) = self.cursor.peek() {
			match byte {
				b'0'..=b'9' | b'+' | b'-' => {}
				b'.' | b'e' | b'E' => is_float = true,
				_ => break,
			}
			self.cursor.advance();
		}

		let text = self.cursor.slice_from(start);
		if is_float || text.len() > MAX_INTEGER_LENGTH {
			JsonValue::from_number(parse_float_prefix(text))
		} else {
			JsonValue::Integer(parse_integer_prefix(text))
		}
	}

	/// Scan the raw string payload after an opening quote and unescape it.
	fn parse_string(&mut self) -> String {
		let start = self.cursor.position();
		while let Some(byte) = self.cursor.peek() {
			match byte {
				b'"' | 0x00..=0x1F => break,
				b'\\' => match self.cursor.peek_at(1) {
					Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => self.cursor.advance_by(2),
					Some(b'u') if read_hex4(self.cursor.remaining(), 2).is_some() => self.cursor.advance_by(6),
					_ => {
						// invalid escape: the string ends right after the backslash
						self.cursor.advance();
						break;
					}
				},
				_ => self.cursor.advance(),
			}
		}

		let text = unescape_json_string(self.cursor.slice_from(start));
		if self.cursor.peek() == Some(b'"') {
			self.cursor.advance();
		}
		text
	}

	fn parse_object(&mut self) -> JsonValue {
		let mut object = JsonObject::new();
		let mut pending_key: Option<String> = None;

		while let Some(byte) = self.cursor.peek() {
			match byte {
				b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' => self.cursor.advance(),
				b'}' | b']' => {
					self.cursor.advance();
					break;
				}
				b'"' if pending_key.is_none() => {
					self.cursor.advance();
					pending_key = Some(self.parse_string());
				}
				_ => match pending_key.take() {
					Some(key) => {
						let value = self.parse_value();
						object.insert(key, value);
					}
					None => self.skip("object"),
				},
			}
		}

		JsonValue::Object(object)
	}

	fn parse_array(&mut self) -> JsonValue {
		let mut array = JsonArray::new();

		while let Some(byte) = self.cursor.peek() {
			match byte {
				b' ' | b'\t' | b'\n' | b'\r' | b',' => self.cursor.advance(),
				b'}' | b']' => {
					self.cursor.advance();
					break;
				}
				_ => {
					let value = self.parse_value();
					array.push(value);
				}
			}
		}

		JsonValue::Array(array)
	}

	fn skip(&mut self, context: &str) {
		if let Some(byte) = self.cursor.consume() {
			log::trace!(
				"skipping unexpected byte {:?} at position {} in {context}",
				char::from(byte),
				self.cursor.position() - 1
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn parse(json: &str) -> JsonValue {
		parse_json_str(json)
	}

	#[test]
	fn parses_the_reference_document() {
		let value = parse(r#"{"a":1,"b":[true,null,"x\/y"]}"#);
		assert!(value.is_object());
		assert_eq!(value.size(), 2);
		assert!(matches!(value["a"], JsonValue::Integer(1)));
		let b = &value["b"];
		assert_eq!(b.size(), 3);
		assert!(matches!(b[0], JsonValue::Boolean(true)));
		assert!(b[1].is_undefined());
		assert_eq!(b[2].as_const_string(""), "x/y");
		assert_eq!(value.stringify(), r#"{"a":1,"b":[true,null,"x\/y"]}"#);
	}

	#[rstest]
	#[case("null", JsonValue::Undefined)]
	#[case("true", JsonValue::Boolean(true))]
	#[case("false", JsonValue::Boolean(false))]
	#[case("0", JsonValue::Integer(0))]
	#[case("-17", JsonValue::Integer(-17))]
	#[case("+5", JsonValue::Integer(5))]
	#[case("2.5", JsonValue::Number(2.5))]
	#[case("1e3", JsonValue::Number(1000.0))]
	#[case("-2E-2", JsonValue::Number(-0.02))]
	#[case("\"text\"", JsonValue::from("text"))]
	#[case("  \n 42 ", JsonValue::Integer(42))]
	fn parses_scalars(#[case] json: &str, #[case] expected: JsonValue) {
		let value = parse(json);
		assert_eq!(value.value_type(), expected.value_type(), "{json}");
		assert_eq!(value, expected);
	}

	#[test]
	fn classifies_numbers() {
		assert!(parse("12345678901234567890").is_integer());
		assert!(matches!(parse("123456789012345678901"), JsonValue::Number(n) if n == 123_456_789_012_345_678_901.0));
		assert!(matches!(parse("99999999999999999999"), JsonValue::Integer(i64::MAX)));
		assert!(parse("1.0").is_floating_point());
		assert!(parse("1e999").is_undefined());
		assert!(matches!(parse("1-2"), JsonValue::Integer(1)));
		assert!(matches!(parse("-"), JsonValue::Integer(0)));
	}

	#[test]
	fn literals_must_match_exactly() {
		assert!(matches!(parse("nope 7"), JsonValue::Integer(7)));
		assert!(matches!(parse("tru"), JsonValue::Undefined));
		assert!(matches!(parse("fals true"), JsonValue::Boolean(true)));
		assert_eq!(parse("[nul]").stringify(), "[null]");
	}

	#[test]
	fn decodes_string_escapes() {
		let json = r#""tab\tquote\"slash\/back\\ é 😀""#;
		assert_eq!(parse(json).as_const_string(""), "tab\tquote\"slash/back\\ é 😀");
	}

	#[test]
	fn strings_stop_at_control_bytes_and_invalid_escapes() {
		assert_eq!(parse("\"ab\ncd\"").as_const_string(""), "ab");
		assert_eq!(parse(r#""ab\qcd""#).as_const_string(""), "ab");
		assert_eq!(parse(r#""ab\u12""#).as_const_string(""), "ab");
		assert_eq!(parse(r#""unterminated"#).as_const_string(""), "unterminated");
	}

	#[test]
	fn invalid_escape_inside_array_keeps_parsing() {
		let value = parse(r#"["a\qb", 1]"#);
		assert_eq!(value[0].as_const_string(""), "a");
		// the rest of the input is read as a second, unterminated string
		assert_eq!(value.size(), 2);
		assert_eq!(value[1].as_const_string(""), ", 1]");
	}

	#[test]
	fn parses_nested_containers() {
		let value = parse(r#"{"list": [1, [2, 3], {"k": "v"}], "empty": {}, "none": []}"#);
		assert_eq!(value["list"][1][1].as_long(0), 3);
		assert_eq!(value["list"][2]["k"].as_const_string(""), "v");
		assert!(value["empty"].is_object());
		assert_eq!(value["empty"].size(), 0);
		assert!(value["none"].is_array());
	}

	#[test]
	fn closing_brackets_are_interchangeable() {
		assert_eq!(parse("[1,2}").stringify(), "[1,2]");
		assert_eq!(parse(r#"{"a":1]"#).stringify(), r#"{"a":1}"#);
	}

	#[test]
	fn duplicate_keys_keep_the_last_value() {
		let value = parse(r#"{"a":1,"a":2}"#);
		assert_eq!(value.size(), 1);
		assert_eq!(value["a"].as_long(0), 2);
	}

	#[test]
	fn skips_garbage() {
		assert_eq!(parse("xx[1,@2]").stringify(), "[1,2]");
		assert_eq!(parse(r#"{x "a" ; 1}"#).stringify(), r#"{"a":1}"#);
		assert_eq!(parse(r#"{"a" "b"}"#).stringify(), r#"{"a":"b"}"#);
	}

	#[test]
	fn truncated_input_yields_partial_values() {
		assert_eq!(parse("[1, 2").stringify(), "[1,2]");
		assert_eq!(parse(r#"{"a": [true"#).stringify(), r#"{"a":[true]}"#);
		assert_eq!(parse(r#"{"a""#).stringify(), "{}");
		assert_eq!(parse("[1, x").stringify(), "[1,null]");
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("garbage")]
	#[case("}")]
	fn input_without_a_value_is_undefined(#[case] json: &str) {
		assert!(parse(json).is_undefined());
	}

	#[test]
	fn trailing_content_is_ignored() {
		assert!(matches!(parse("1 2 3"), JsonValue::Integer(1)));
		assert_eq!(parse("[] trailing").size(), 0);
	}

	#[test]
	fn parses_c_strings() {
		let json = c"[1, \"two\"]";
		let value = parse_json_cstr(json);
		assert_eq!(value.stringify(), r#"[1,"two"]"#);
	}

	#[test]
	fn deep_nesting_does_not_overflow_the_stack() {
		let depth = MAX_DEPTH * 4;
		let json = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
		let value = parse(&json);
		assert!(value.is_array());

		let mut level = &value;
		let mut count = 0;
		while level.is_array() {
			level = &level[0];
			count += 1;
		}
		assert_eq!(count, MAX_DEPTH);
		assert_eq!(level.as_long(0), 1);
	}
}
