//! Canonical number formatting and the prefix readers that turn text back into numbers.
//!
//! Formatting follows the conventions of the serializers: integers print as plain decimals,
//! floating point numbers always carry a fractional part (`1.0`), large or tiny magnitudes use
//! scientific notation and non-finite values print as `null`.
//!
//! The readers mirror C's `strtod`/`strtoll`: they accept the longest numeric prefix, ignore
//! whatever follows and return `0` when there is no number at all.

/// Exponents (base 10) beyond this magnitude are printed in scientific notation.
const MAX_FIXED_EXPONENT: i32 = 8;

/// Fractional digits rendered before trailing zeros are trimmed.
const FIXED_PRECISION: usize = 6;

/// Fractional digits of the mantissa in scientific notation.
const SCIENTIFIC_PRECISION: usize = 16;

/// Format a floating point number.
///
/// ```
/// use loosejson::number_to_string;
/// assert_eq!(number_to_string(1.0), "1.0");
/// assert_eq!(number_to_string(-0.0), "-0.0");
/// assert_eq!(number_to_string(0.25), "0.25");
/// assert_eq!(number_to_string(1e20), "1.0000000000000000e+20");
/// assert_eq!(number_to_string(f64::NAN), "null");
/// ```
#[must_use]
pub fn number_to_string(value: f64) -> String {
	if !value.is_finite() {
		return String::from("null");
	}

	if value == 0.0 {
		let zero = if value.is_sign_negative() { "-0.0" } else { "0.0" };
		return String::from(zero);
	}

	let exponent = value.abs().log10().floor() as i32;
	if exponent.abs() > MAX_FIXED_EXPONENT {
		return format_scientific(value);
	}

	let mut text = format!("{value:.FIXED_PRECISION$}");
	// keep at least one digit after the decimal point
	while text.len() > 2 {
		let bytes = text.as_bytes();
		if bytes[bytes.len() - 2] != b'.' && bytes[bytes.len() - 1] == b'0' {
			text.pop();
		} else {
			break;
		}
	}
	text
}

/// Format an integer as plain decimal digits.
#[must_use]
pub fn integer_to_string(value: i64) -> String {
	value.to_string()
}

/// `%.16e`-style output: `d.dddddddddddddddde±XX`.
fn format_scientific(value: f64) -> String {
	let text = format!("{value:.SCIENTIFIC_PRECISION$e}");
	match text.split_once('e') {
		Some((mantissa, exponent)) => {
			let exponent = exponent.parse::<i32>().unwrap_or(0);
			let sign = if exponent < 0 { '-' } else { '+' };
			format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
		}
		None => text,
	}
}

/// Read the longest floating point prefix of `input`, like C `strtod`.
///
/// Leading ASCII whitespace is skipped and an optional sign is accepted. The remaining prefix is
/// one of:
/// - decimal: `digits[.digits][(e|E)[+-]digits]` where either the integer or the fractional
///   digits may be empty (but not both); an exponent marker that is not followed by digits is
///   not part of the number
/// - hexadecimal: `0x` followed by `hexdigits[.hexdigits][(p|P)[+-]digits]`
/// - `inf`, `infinity` or `nan`, case-insensitive
///
/// Returns `0.0` if no number was found; overflowing values become infinite.
///
/// ```
/// use loosejson::codec::parse_float_prefix;
/// assert_eq!(parse_float_prefix(b"  -12.5e2xyz"), -1250.0);
/// assert_eq!(parse_float_prefix(b"1.2.3"), 1.2);
/// assert_eq!(parse_float_prefix(b"0x1.8p1"), 3.0);
/// assert_eq!(parse_float_prefix(b"-Infinity"), f64::NEG_INFINITY);
/// assert_eq!(parse_float_prefix(b"abc"), 0.0);
/// ```
#[must_use]
pub fn parse_float_prefix(input: &[u8]) -> f64 {
	let mut pos = skip_whitespace(input);

	let negative = match input.get(pos) {
		Some(b'-') => {
			pos += 1;
			true
		}
		Some(b'+') => {
			pos += 1;
			false
		}
		_ => false,
	};

	let rest = &input[pos..];
	let magnitude = if starts_with_ignore_case(rest, b"inf") {
		f64::INFINITY
	} else if starts_with_ignore_case(rest, b"nan") {
		f64::NAN
	} else if let Some(value) = parse_hex_float(rest) {
		value
	} else {
		parse_decimal_float(rest)
	};

	if negative { -magnitude } else { magnitude }
}

/// Unsigned decimal float prefix, `0.0` if there are no digits.
fn parse_decimal_float(input: &[u8]) -> f64 {
	let integer_digits = count_digits(input, 0);
	let mut pos = integer_digits;

	let mut fraction_digits = 0;
	if input.get(pos) == Some(&b'.') {
		fraction_digits = count_digits(input, pos + 1);
		if integer_digits > 0 || fraction_digits > 0 {
			pos += 1 + fraction_digits;
		}
	}

	if integer_digits == 0 && fraction_digits == 0 {
		return 0.0;
	}

	if let Some(b'e' | b'E') = input.get(pos) {
		let mut exponent_pos = pos + 1;
		if let Some(b'+' | b'-') = input.get(exponent_pos) {
			exponent_pos += 1;
		}
		let exponent_digits = count_digits(input, exponent_pos);
		if exponent_digits > 0 {
			pos = exponent_pos + exponent_digits;
		}
	}

	std::str::from_utf8(&input[..pos])
		.ok()
		.and_then(|text| text.parse::<f64>().ok())
		.unwrap_or(0.0)
}

/// Unsigned `0x` float prefix. `None` unless at least one hex digit follows the `0x`.
fn parse_hex_float(input: &[u8]) -> Option<f64> {
	if !starts_with_ignore_case(input, b"0x") {
		return None;
	}
	let mut pos = 2;
	let mut mantissa = 0.0_f64;
	let mut exponent: i32 = 0;
	let mut digits = 0;

	while let Some(digit) = input.get(pos).and_then(|b| char::from(*b).to_digit(16)) {
		mantissa = mantissa * 16.0 + f64::from(digit);
		digits += 1;
		pos += 1;
	}
	if input.get(pos) == Some(&b'.') {
		let mut fraction_pos = pos + 1;
		while let Some(digit) = input.get(fraction_pos).and_then(|b| char::from(*b).to_digit(16)) {
			mantissa = mantissa * 16.0 + f64::from(digit);
			exponent = exponent.saturating_sub(4);
			digits += 1;
			fraction_pos += 1;
		}
		pos = fraction_pos;
	}
	if digits == 0 {
		return None;
	}

	if let Some(b'p' | b'P') = input.get(pos) {
		let mut exponent_pos = pos + 1;
		let negative = match input.get(exponent_pos) {
			Some(b'-') => {
				exponent_pos += 1;
				true
			}
			Some(b'+') => {
				exponent_pos += 1;
				false
			}
			_ => false,
		};
		let exponent_digits = count_digits(input, exponent_pos);
		if exponent_digits > 0 {
			let binary = input[exponent_pos..exponent_pos + exponent_digits]
				.iter()
				.fold(0_i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
			exponent = if negative {
				exponent.saturating_sub(binary)
			} else {
				exponent.saturating_add(binary)
			};
		}
	}

	Some(mantissa * 2.0_f64.powi(exponent))
}

fn starts_with_ignore_case(input: &[u8], prefix: &[u8]) -> bool {
	input.len() >= prefix.len() && input[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Read the longest decimal integer prefix of `input`.
///
/// Leading ASCII whitespace is skipped and an optional sign is accepted. Returns `0` if no digits
/// were found and saturates at `i64::MIN`/`i64::MAX` on overflow.
///
/// ```
/// use loosejson::codec::parse_integer_prefix;
/// assert_eq!(parse_integer_prefix(b" 42abc"), 42);
/// assert_eq!(parse_integer_prefix(b"-7.9"), -7);
/// assert_eq!(parse_integer_prefix(b"99999999999999999999"), i64::MAX);
/// ```
#[must_use]
pub fn parse_integer_prefix(input: &[u8]) -> i64 {
	let mut pos = skip_whitespace(input);

	let negative = match input.get(pos) {
		Some(b'-') => {
			pos += 1;
			true
		}
		Some(b'+') => {
			pos += 1;
			false
		}
		_ => false,
	};

	let mut value: i64 = 0;
	for &byte in input[pos..].iter().take_while(|b| b.is_ascii_digit()) {
		let digit = i64::from(byte - b'0');
		let next = value
			.checked_mul(10)
			.and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
		match next {
			Some(v) => value = v,
			None => return if negative { i64::MIN } else { i64::MAX },
		}
	}
	value
}

/// Position of the first byte that is not C-locale whitespace.
fn skip_whitespace(input: &[u8]) -> usize {
	input
		.iter()
		.position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C'))
		.unwrap_or(input.len())
}

fn count_digits(input: &[u8], pos: usize) -> usize {
	input
		.get(pos..)
		.map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
