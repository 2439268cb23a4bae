//! JSON array type, an ordered sequence of values.
use super::JsonValue;
use crate::stringify::{StringifyOptions, stringify_array_with};
use std::fmt::{self, Debug, Display};

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self(Vec::with_capacity(capacity))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Element at `index`, if in range.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
		self.0.get_mut(index)
	}

	/// Append a value, converting it into a `JsonValue`.
	pub fn push(&mut self, value: impl Into<JsonValue>) {
		self.0.push(value.into());
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, JsonValue> {
		self.0.iter_mut()
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<JsonValue> {
		self.0
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

/// Compact JSON, object keys sorted.
impl Display for JsonArray {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&stringify_array_with(self, &StringifyOptions::new_compact().with_sorted(true)))
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	T: Into<JsonValue>,
{
	fn from(input: Vec<T>) -> Self {
		input.into_iter().collect()
	}
}

impl<T> From<&[T]> for JsonArray
where
	T: Clone + Into<JsonValue>,
{
	fn from(input: &[T]) -> Self {
		input.iter().cloned().collect()
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	T: Into<JsonValue>,
{
	fn from(input: [T; N]) -> Self {
		input.into_iter().collect()
	}
}

impl<T> FromIterator<T> for JsonArray
where
	T: Into<JsonValue>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		JsonArray(iter.into_iter().map(Into::into).collect())
	}
}

impl IntoIterator for JsonArray {
	type Item = JsonValue;
	type IntoIter = std::vec::IntoIter<JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
