//! JSON object type, an unordered mapping from string keys to values.
use super::JsonValue;
use crate::stringify::{StringifyOptions, stringify_object_with};
use std::{
	collections::{BTreeMap, HashMap},
	fmt::{self, Debug, Display},
};

/// A JSON object backed by a `HashMap<String, JsonValue>`.
///
/// Iteration order is unspecified. Use [`JsonObject::sorted_entries`] (or a sorted serializer)
/// when a deterministic order is required.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub HashMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(HashMap::new())
	}

	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self(HashMap::with_capacity(capacity))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Get a reference to the value for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		self.0.get_mut(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Set `key` to `value`, returning the previous value if there was one.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
		self.0.insert(key.into(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	pub fn iter_mut(&mut self) -> std::collections::hash_map::IterMut<'_, String, JsonValue> {
		self.0.iter_mut()
	}

	/// All entries ordered by key (byte-wise).
	#[must_use]
	pub fn sorted_entries(&self) -> Vec<(&String, &JsonValue)> {
		let mut entries: Vec<_> = self.0.iter().collect();
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
		entries
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.sorted_entries()).finish()
	}
}

/// Compact JSON, keys sorted.
impl Display for JsonObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&stringify_object_with(self, &StringifyOptions::new_compact().with_sorted(true)))
	}
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
	K: Into<String>,
	V: Into<JsonValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		JsonObject(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl<T> From<HashMap<String, T>> for JsonObject
where
	T: Into<JsonValue>,
{
	fn from(input: HashMap<String, T>) -> Self {
		input.into_iter().collect()
	}
}

impl<T> From<BTreeMap<String, T>> for JsonObject
where
	T: Into<JsonValue>,
{
	fn from(input: BTreeMap<String, T>) -> Self {
		input.into_iter().collect()
	}
}

impl IntoIterator for JsonObject {
	type Item = (String, JsonValue);
	type IntoIter = std::collections::hash_map::IntoIter<String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonObject {
	type Item = (&'a String, &'a JsonValue);
	type IntoIter = std::collections::hash_map::Iter<'a, String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
