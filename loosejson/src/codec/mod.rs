//! Text codecs shared by the parser and the serializers.
//!
//! - [`escape`]: escaping and unescaping of JSON string payloads.
//! - [`number`]: canonical number formatting and the prefix readers used to turn text back
//!   into numbers.

mod escape;
mod number;

pub use escape::*;
pub use number::*;
