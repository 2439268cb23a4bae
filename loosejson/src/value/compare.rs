//! Loose equality between values.

use super::JsonValue;

/// Values with the same variant compare their payloads (containers element by element).
///
/// Values with different variants are unequal if either side is `Undefined`, an array or an
/// object. Otherwise the left side is coerced to the type of the right side and compared, so
/// `Integer(1) == String("1")` and `Integer(1) == Number(1.0)` hold. Because the coercion is
/// one-sided the relation is not symmetric: `String("1.0") == Integer(1)` holds while
/// `Integer(1) == String("1.0")` does not.
impl PartialEq for JsonValue {
	fn eq(&self, other: &Self) -> bool {
		use JsonValue::*;
		match (self, other) {
			(Undefined, Undefined) => true,
			(Boolean(a), Boolean(b)) => a == b,
			(Integer(a), Integer(b)) => a == b,
			(Number(a), Number(b)) => a == b,
			(String(a), String(b)) => a == b,
			(Array(a), Array(b)) => a == b,
			(Object(a), Object(b)) => a == b,
			(Undefined | Array(_) | Object(_), _) | (_, Undefined | Array(_) | Object(_)) => false,
			(_, Boolean(b)) => self.as_boolean(false) == *b,
			(_, Integer(i)) => self.as_long_long(0) == *i,
			(_, Number(n)) => self.as_number(0.0) == *n,
			(_, String(s)) => self.as_string("") == *s,
		}
	}
}
