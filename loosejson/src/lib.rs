//! A dynamically-typed JSON value with a forgiving parser and compact/pretty serializers.
//!
//! [`JsonValue`] holds undefined/null, booleans, 64-bit integers, finite doubles, strings,
//! arrays and objects. The default parser never fails: malformed input degrades into a
//! partial or undefined value. A strict parser is available as an opt-in.
//!
//! ```
//! use loosejson::{JsonValue, parse_json_str, stringify};
//!
//! let mut value = parse_json_str(r#"{"a":1,"b":[true,null,"x\/y"]}"#);
//! assert_eq!(value["a"].as_long(0), 1);
//! assert_eq!(value["b"][2].as_const_string(""), "x/y");
//!
//! value["c"] = JsonValue::from(2.5);
//! assert_eq!(stringify(&value, true), r#"{"a":1,"b":[true,null,"x\/y"],"c":2.5}"#);
//! ```

pub mod codec;
pub mod parse;
pub mod read;
pub mod stringify;
pub mod value;

pub use codec::{escape_json_string, number_to_string, unescape_json_string};
pub use parse::{parse_json, parse_json_bytes_strict, parse_json_cstr, parse_json_str, parse_json_strict};
pub use read::{parse_file, read_json_file, read_json_file_strict, read_ndjson_iter};
pub use stringify::{StringifyOptions, pretty_stringify, stringify, stringify_into, stringify_with};
pub use value::{JsonArray, JsonObject, JsonValue, ValueType};
