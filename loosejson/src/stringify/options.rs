/// Output configuration for the serializers.
///
/// ```
/// use loosejson::{JsonValue, StringifyOptions, stringify_with};
/// let value = JsonValue::from(vec![1, 2]);
/// let options = StringifyOptions::new_pretty().with_indent(2);
/// assert_eq!(stringify_with(&value, &options), "[\n  1,\n  2\n]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringifyOptions {
	/// Break containers over multiple lines.
	pub pretty: bool,
	/// Emit object entries ordered by key.
	pub sorted: bool,
	/// Spaces per nesting level in pretty output.
	pub indent: usize,
}

impl Default for StringifyOptions {
	fn default() -> Self {
		Self {
			pretty: false,
			sorted: false,
			indent: 4,
		}
	}
}

impl StringifyOptions {
	/// Single-line output without whitespace.
	#[must_use]
	pub fn new_compact() -> Self {
		Self::default()
	}

	/// Multi-line output indented by four spaces per level.
	#[must_use]
	pub fn new_pretty() -> Self {
		Self {
			pretty: true,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_sorted(mut self, sorted: bool) -> Self {
		self.sorted = sorted;
		self
	}

	#[must_use]
	pub fn with_indent(mut self, indent: usize) -> Self {
		self.indent = indent;
		self
	}
}
