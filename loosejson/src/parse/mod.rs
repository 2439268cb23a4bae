//! Parsers turning JSON text into [`JsonValue`](crate::JsonValue) graphs.
//!
//! - [`parse_json`] and friends: the default, forgiving parser. It never fails.
//! - [`parse_json_strict`]: an opt-in parser for well-formed JSON that reports errors.
//!
//! Both operate on a [`ByteCursor`] over the complete input in a single pass.

mod cursor;
mod lenient;
mod strict;

pub use cursor::ByteCursor;
pub use lenient::{parse_json, parse_json_cstr, parse_json_str};
pub use strict::{parse_json_bytes_strict, parse_json_strict};

/// Maximum nesting of arrays and objects.
///
/// The lenient parser flattens deeper containers into their parent, the strict parser rejects
/// them.
pub const MAX_DEPTH: usize = 256;
