//! The opt-in strict parser.
//!
//! Accepts RFC 8259 JSON only and reports the first problem as an error:
//! - whitespace between tokens, nothing after the top-level value
//! - the literals `null`, `true` and `false`
//! - strings with the standard escapes; surrogate escapes must come in valid pairs
//! - numbers per the JSON grammar (no leading `+`, no leading zeros, digits required after `.`
//!   and the exponent marker)
//!
//! Numbers follow the same classification as the lenient parser: a number without fraction and
//! exponent becomes `Integer` when it fits into an `i64` and `Number` otherwise.
//!
//! Errors carry the byte position and a snapshot of the input right before it, wrapped in
//! messages describing what was being parsed.

use super::{ByteCursor, MAX_DEPTH};
use crate::{
	codec::read_hex4,
	value::{JsonArray, JsonObject, JsonValue},
};
use anyhow::Result;
use loosejson_derive::context;

/// Parse JSON text strictly.
///
/// ```
/// use loosejson::parse_json_strict;
/// let value = parse_json_strict(r#"{"a": [1, 2.5]}"#).unwrap();
/// assert!(value["a"][0].is_integer());
/// assert!(value["a"][1].is_floating_point());
///
/// let error = parse_json_strict("[1,]").unwrap_err();
/// assert_eq!(error.root_cause().to_string(), "unexpected character ']' at position 3: [1,");
/// ```
///
/// # Errors
/// Returns an error if `json` is not exactly one valid JSON value surrounded by optional
/// whitespace.
pub fn parse_json_strict(json: &str) -> Result<JsonValue> {
	parse_json_bytes_strict(json.as_bytes())
}

/// Parse a byte buffer strictly. The buffer must be valid UTF-8 inside strings.
///
/// # Errors
/// See [`parse_json_strict`].
#[context("while parsing JSON")]
pub fn parse_json_bytes_strict(json: &[u8]) -> Result<JsonValue> {
	let mut cursor = ByteCursor::new(json);
	let value = parse_value(&mut cursor, 0)?;
	cursor.skip_whitespace();
	if !cursor.is_at_end() {
		return Err(cursor.format_error("unexpected trailing characters"));
	}
	Ok(value)
}

fn parse_value(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	cursor.skip_whitespace();
	match cursor.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_DEPTH => Err(cursor.format_error("maximum nesting depth exceeded")),
		b'[' => parse_array(cursor, depth),
		b'{' => parse_object(cursor, depth),
		b'"' => parse_quoted_string(cursor).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number(cursor),
		b't' => parse_tag(cursor, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(cursor, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(cursor, "null").map(|()| JsonValue::Undefined),
		c => Err(cursor.format_error(&format!("unexpected character '{}'", char::from(c)))),
	}
}

#[context("while parsing tag '{}'", tag)]
fn parse_tag(cursor: &mut ByteCursor, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if cursor.expect_next_byte()? != c {
			return Err(cursor.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

#[context("while parsing a quoted JSON string")]
fn parse_quoted_string(cursor: &mut ByteCursor) -> Result<String> {
	if cursor.expect_next_byte()? != b'"' {
		return Err(cursor.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match cursor.expect_next_byte()? {
			b'"' => break,
			b'\\' => match cursor.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let c = parse_unicode_escape(cursor)?;
					let mut buf = [0u8; 4];
					bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
				}
				_ => return Err(cursor.format_error("invalid escape sequence")),
			},
			0x00..=0x1F => return Err(cursor.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| cursor.format_error("invalid UTF-8 in string"))
}

/// The code point of a `\u` escape whose `\u` has already been consumed.
fn parse_unicode_escape(cursor: &mut ByteCursor) -> Result<char> {
	let unit = parse_hex4(cursor)?;
	let code_point = match unit {
		0xD800..=0xDBFF => {
			if !cursor.starts_with(b"\\u") {
				return Err(cursor.format_error("unpaired surrogate"));
			}
			cursor.advance_by(2);
			let low = parse_hex4(cursor)?;
			if !(0xDC00..=0xDFFF).contains(&low) {
				return Err(cursor.format_error("invalid low surrogate"));
			}
			0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(cursor.format_error("unpaired surrogate")),
		_ => unit,
	};
	char::from_u32(code_point).ok_or_else(|| cursor.format_error("invalid unicode code point"))
}

fn parse_hex4(cursor: &mut ByteCursor) -> Result<u32> {
	let unit = read_hex4(cursor.remaining(), 0).ok_or_else(|| cursor.format_error("expected four hex digits"))?;
	cursor.advance_by(4);
	Ok(unit)
}

#[context("while parsing a number")]
fn parse_number(cursor: &mut ByteCursor) -> Result<JsonValue> {
	let start = cursor.position();
	let mut is_float = false;

	if cursor.peek() == Some(b'-') {
		cursor.advance();
	}

	match cursor.peek() {
		Some(b'0') => {
			cursor.advance();
			if let Some(b'0'..=b'9') = cursor.peek() {
				return Err(cursor.format_error("leading zeros are not allowed"));
			}
		}
		Some(b'1'..=b'9') => {
			skip_digits(cursor);
		}
		_ => return Err(cursor.format_error("expected digits in number")),
	}

	if cursor.peek() == Some(b'.') {
		is_float = true;
		cursor.advance();
		if skip_digits(cursor) == 0 {
			return Err(cursor.format_error("expected digits after decimal point"));
		}
	}

	if let Some(b'e' | b'E') = cursor.peek() {
		is_float = true;
		cursor.advance();
		if let Some(b'+' | b'-') = cursor.peek() {
			cursor.advance();
		}
		if skip_digits(cursor) == 0 {
			return Err(cursor.format_error("expected digits after exponent"));
		}
	}

	let text = std::str::from_utf8(cursor.slice_from(start))?;
	if !is_float && let Ok(integer) = text.parse::<i64>() {
		return Ok(JsonValue::Integer(integer));
	}

	let number = text.parse::<f64>()?;
	if !number.is_finite() {
		return Err(cursor.format_error("number out of range"));
	}
	Ok(JsonValue::Number(number))
}

fn skip_digits(cursor: &mut ByteCursor) -> usize {
	let mut count = 0;
	while let Some(b'0'..=b'9') = cursor.peek() {
		cursor.advance();
		count += 1;
	}
	count
}

#[context("while parsing an array")]
fn parse_array(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	if cursor.expect_next_byte()? != b'[' {
		return Err(cursor.format_error("expected '[' while parsing an array"));
	}

	let mut array = JsonArray::new();
	cursor.skip_whitespace();
	if cursor.expect_peeked_byte()? == b']' {
		cursor.advance();
		return Ok(JsonValue::Array(array));
	}

	loop {
		array.push(parse_value(cursor, depth + 1)?);

		cursor.skip_whitespace();
		match cursor.expect_next_byte()? {
			b',' => {}
			b']' => break,
			_ => return Err(cursor.format_error("expected ',' or ']'")),
		}
	}
	Ok(JsonValue::Array(array))
}

#[context("while parsing an object")]
fn parse_object(cursor: &mut ByteCursor, depth: usize) -> Result<JsonValue> {
	if cursor.expect_next_byte()? != b'{' {
		return Err(cursor.format_error("expected '{' while parsing an object"));
	}

	let mut object = JsonObject::new();
	cursor.skip_whitespace();
	if cursor.expect_peeked_byte()? == b'}' {
		cursor.advance();
		return Ok(JsonValue::Object(object));
	}

	loop {
		cursor.skip_whitespace();
		if cursor.expect_peeked_byte()? != b'"' {
			return Err(cursor.format_error("expected '\"' at the start of a key"));
		}
		let key = parse_quoted_string(cursor)?;

		cursor.skip_whitespace();
		if cursor.expect_next_byte()? != b':' {
			return Err(cursor.format_error("expected ':'"));
		}

		let value = parse_value(cursor, depth + 1)?;
		object.insert(key, value);

		cursor.skip_whitespace();
		match cursor.expect_next_byte()? {
			b',' => {}
			b'}' => break,
			_ => return Err(cursor.format_error("expected ',' or '}'")),
		}
	}
	Ok(JsonValue::Object(object))
}
