//! Escaping and unescaping of JSON string payloads.

/// Escape `input` so it can be placed between double quotes in JSON text.
///
/// `\b \f \n \r \t` become two-character escapes, `"` and `\` are always escaped and `/` is
/// escaped unless it directly follows a backslash of the source string. Every other character,
/// including other control characters, is passed through unchanged.
///
/// ```
/// use loosejson::escape_json_string;
/// assert_eq!(escape_json_string("x/y"), r"x\/y");
/// assert_eq!(escape_json_string("a\"b\n"), r#"a\"b\n"#);
/// ```
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len() + 2);
	escape_json_string_into(&mut output, input);
	output
}

/// Append the escaped form of `input` to `buffer`.
///
/// See [`escape_json_string`] for the rules.
pub fn escape_json_string_into(buffer: &mut String, input: &str) {
	let mut previous = None;
	for c in input.chars() {
		match c {
			'\u{08}' => buffer.push_str("\\b"),
			'\u{0c}' => buffer.push_str("\\f"),
			'\n' => buffer.push_str("\\n"),
			'\r' => buffer.push_str("\\r"),
			'\t' => buffer.push_str("\\t"),
			'"' => buffer.push_str("\\\""),
			'\\' => buffer.push_str("\\\\"),
			'/' if previous == Some('\\') => buffer.push('/'),
			'/' => buffer.push_str("\\/"),
			c => buffer.push(c),
		}
		previous = Some(c);
	}
}

/// Decode the escape sequences of a raw JSON string payload (without the surrounding quotes).
///
/// - `\b \f \n \r \t \" \\ \/` become the byte they name.
/// - `\uXXXX` (exactly four hex digits) becomes the UTF-8 encoding of the code point. A high
///   surrogate immediately followed by another `\uXXXX` is combined into one supplementary code
///   point. Unpaired surrogates become U+FFFD.
/// - Any other escaped character is kept as the two literal bytes (backslash and character).
/// - A trailing lone backslash is dropped.
///
/// Bytes that do not form valid UTF-8 are replaced with U+FFFD.
///
/// ```
/// use loosejson::unescape_json_string;
/// assert_eq!(unescape_json_string(br"x\/y"), "x/y");
/// assert_eq!(unescape_json_string(br"\uD83D\uDE00"), "😀");
/// assert_eq!(unescape_json_string(br"\q"), r"\q");
/// ```
#[must_use]
pub fn unescape_json_string(input: &[u8]) -> String {
	let mut bytes = Vec::with_capacity(input.len());
	let mut pos = 0;

	while pos < input.len() {
		let byte = input[pos];
		if byte != b'\\' {
			bytes.push(byte);
			pos += 1;
			continue;
		}

		let Some(&escaped) = input.get(pos + 1) else {
			break;
		};
		pos += 2;

		match escaped {
			b'"' | b'\\' | b'/' => bytes.push(escaped),
			b'b' => bytes.push(b'\x08'),
			b'f' => bytes.push(b'\x0C'),
			b'n' => bytes.push(b'\n'),
			b'r' => bytes.push(b'\r'),
			b't' => bytes.push(b'\t'),
			b'u' => match read_hex4(input, pos) {
				Some(unit) => {
					pos += 4;
					let c = if (0xD800..=0xDBFF).contains(&unit) {
						match read_low_surrogate(input, pos) {
							Some(low) => {
								pos += 6;
								char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
							}
							None => None,
						}
					} else {
						char::from_u32(unit)
					};
					push_char(&mut bytes, c.unwrap_or(char::REPLACEMENT_CHARACTER));
				}
				None => bytes.extend_from_slice(b"\\u"),
			},
			other => {
				bytes.push(b'\\');
				bytes.push(other);
			}
		}
	}

	match String::from_utf8(bytes) {
		Ok(text) => text,
		Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
	}
}

/// Read exactly four hex digits starting at `pos`.
pub(crate) fn read_hex4(input: &[u8], pos: usize) -> Option<u32> {
	let digits = input.get(pos..pos + 4)?;
	digits
		.iter()
		.try_fold(0u32, |acc, &b| Some((acc << 4) | (b as char).to_digit(16)?))
}

/// A `\uXXXX` low surrogate (`DC00`-`DFFF`) starting at `pos`.
fn read_low_surrogate(input: &[u8], pos: usize) -> Option<u32> {
	if input.get(pos..pos + 2)? != b"\\u" {
		return None;
	}
	read_hex4(input, pos + 2).filter(|unit| (0xDC00..=0xDFFF).contains(unit))
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
	let mut buf = [0u8; 4];
	bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("x/y", r"x\/y")]
	#[case("say \"hi\"", r#"say \"hi\""#)]
	#[case("back\\slash", r"back\\slash")]
	#[case("\u{08}\u{0c}\n\r\t", r"\b\f\n\r\t")]
	#[case(r"\/", r"\\/")]
	#[case("Unicode: 😊", "Unicode: 😊")]
	#[case("Control:\x01", "Control:\x01")]
	fn escapes(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_json_string(input), expected);
	}

	#[test]
	fn escape_into_appends() {
		let mut buffer = String::from("\"");
		escape_json_string_into(&mut buffer, "a/b");
		buffer.push('"');
		assert_eq!(buffer, r#""a\/b""#);
	}

	#[rstest]
	#[case(r"plain", "plain")]
	#[case(r"he\nllo", "he\nllo")]
	#[case(r"he\b\f\n\r\tllo", "he\x08\x0C\n\r\tllo")]
	#[case(r#"hello \"world\""#, "hello \"world\"")]
	#[case(r"he\u0041llo", "heAllo")]
	#[case(r"\u00e9", "é")]
	#[case(r"\u20AC", "€")]
	#[case(r"\uD834\uDD1E", "𝄞")]
	#[case(r"\ud83d\ude00!", "😀!")]
	#[case(r"\uD834", "\u{FFFD}")]
	#[case(r"\uD834x", "\u{FFFD}x")]
	#[case(r"\uDD1E", "\u{FFFD}")]
	#[case(r"\u004G", r"\u004G")]
	#[case(r"\q", r"\q")]
	#[case("end\\", "end")]
	fn unescapes(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(unescape_json_string(input.as_bytes()), expected);
	}

	#[test]
	fn unescape_keeps_four_hex_digits_only() {
		assert_eq!(unescape_json_string(br"\u0041BC"), "ABC");
	}

	#[test]
	fn unescape_replaces_invalid_utf8() {
		assert_eq!(unescape_json_string(b"a\xffb"), "a\u{FFFD}b");
	}

	#[rstest]
	#[case("")]
	#[case("x/y")]
	#[case(r"\/")]
	#[case(r"\\")]
	#[case(r#"\""#)]
	#[case("tab\tnew\nline")]
	#[case("quote \" slash / back \\ end")]
	#[case("ünïcödé ✓ 😀")]
	fn escape_then_unescape_is_identity(#[case] input: &str) {
		let escaped = escape_json_string(input);
		assert_eq!(unescape_json_string(escaped.as_bytes()), input);
	}

	#[test]
	fn read_hex4_requires_four_digits() {
		assert_eq!(read_hex4(b"00e9", 0), Some(0xE9));
		assert_eq!(read_hex4(b"00e", 0), None);
		assert_eq!(read_hex4(b"00eg", 0), None);
	}
}
