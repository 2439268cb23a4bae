//! Indexing, auto-vivification and container maintenance.
//!
//! Shared indexing never fails: a miss yields [`JsonValue::empty`]. Mutable indexing turns the
//! value into the container it needs (discarding a previous payload of another kind) and grows it
//! until the requested element exists.

use super::{JsonArray, JsonObject, JsonValue, UNDEFINED};
use std::ops::{Index, IndexMut};

impl JsonValue {
	/// Number of elements of an array or entries of an object, 0 for anything else.
	#[must_use]
	pub fn size(&self) -> usize {
		match self {
			JsonValue::Array(array) => array.len(),
			JsonValue::Object(object) => object.len(),
			_ => 0,
		}
	}

	/// Ensure capacity for at least `capacity` elements (arrays) or entries (objects) in total.
	/// Other variants are left unchanged.
	pub fn reserve(&mut self, capacity: usize) {
		match self {
			JsonValue::Array(array) => array.0.reserve(capacity.saturating_sub(array.len())),
			JsonValue::Object(object) => object.0.reserve(capacity.saturating_sub(object.len())),
			_ => {}
		}
	}

	/// Remove all elements or entries. Other variants are left unchanged.
	pub fn clear(&mut self) {
		match self {
			JsonValue::Array(array) => array.0.clear(),
			JsonValue::Object(object) => object.0.clear(),
			_ => {}
		}
	}

	/// Store `value` at index `size()`, exactly like `self[self.size()] = value`.
	///
	/// A non-array is replaced by an array first, which is padded with `Undefined` up to the old
	/// size: adding to an object with two entries yields `[null,null,value]`.
	/// Returns the stored element.
	pub fn add(&mut self, value: impl Into<JsonValue>) -> &mut JsonValue {
		let index = self.size();
		let slot = &mut self[index];
		*slot = value.into();
		slot
	}

	/// Remove an element (arrays, `key` coerced to an index) or an entry (objects, `key` coerced
	/// to a string). Out-of-range indexes, missing keys and other variants are ignored.
	pub fn erase(&mut self, key: impl Into<JsonValue>) {
		let key = key.into();
		match self {
			JsonValue::Array(array) => {
				if let Ok(index) = usize::try_from(key.as_long_long(-1))
					&& index < array.len()
				{
					array.0.remove(index);
				}
			}
			JsonValue::Object(object) => {
				object.0.remove(&key.as_string(""));
			}
			_ => {}
		}
	}

	/// The keys of an object (in unspecified order), empty for anything else.
	#[must_use]
	pub fn indexes(&self) -> Vec<String> {
		match self {
			JsonValue::Object(object) => object.keys().cloned().collect(),
			_ => Vec::new(),
		}
	}

	/// True if this is an object containing `key`.
	#[must_use]
	pub fn has_key(&self, key: &str) -> bool {
		match self {
			JsonValue::Object(object) => object.contains_key(key),
			_ => false,
		}
	}

	/// Element at `index` if this is an array and the index is in range.
	#[must_use]
	pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
		self.as_array().and_then(|array| array.get(index))
	}

	/// Entry for `key` if this is an object containing it.
	#[must_use]
	pub fn get_key(&self, key: &str) -> Option<&JsonValue> {
		self.as_object().and_then(|object| object.get(key))
	}

	fn vivify_array(&mut self) -> &mut JsonArray {
		if !self.is_array() {
			*self = JsonValue::new_array();
		}
		match self {
			JsonValue::Array(array) => array,
			_ => unreachable!("value was just replaced by an array"),
		}
	}

	fn vivify_object(&mut self) -> &mut JsonObject {
		if !self.is_object() {
			*self = JsonValue::new_object();
		}
		match self {
			JsonValue::Object(object) => object,
			_ => unreachable!("value was just replaced by an object"),
		}
	}
}

impl Index<usize> for JsonValue {
	type Output = JsonValue;

	fn index(&self, index: usize) -> &JsonValue {
		self.get_index(index).unwrap_or(&UNDEFINED)
	}
}

impl IndexMut<usize> for JsonValue {
	fn index_mut(&mut self, index: usize) -> &mut JsonValue {
		let array = self.vivify_array();
		if index >= array.0.len() {
			array.0.resize_with(index + 1, JsonValue::default);
		}
		&mut array.0[index]
	}
}

impl Index<&str> for JsonValue {
	type Output = JsonValue;

	fn index(&self, key: &str) -> &JsonValue {
		self.get_key(key).unwrap_or(&UNDEFINED)
	}
}

impl IndexMut<&str> for JsonValue {
	fn index_mut(&mut self, key: &str) -> &mut JsonValue {
		self.vivify_object().0.entry(key.to_owned()).or_default()
	}
}

impl Index<&String> for JsonValue {
	type Output = JsonValue;

	fn index(&self, key: &String) -> &JsonValue {
		&self[key.as_str()]
	}
}

impl IndexMut<&String> for JsonValue {
	fn index_mut(&mut self, key: &String) -> &mut JsonValue {
		&mut self[key.as_str()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn shared_lookups_that_miss_return_the_sentinel() {
		let array = JsonValue::from(vec![1]);
		let object = JsonValue::from_pairs([("a", 1)]);
		let scalar = JsonValue::from(5);
		for miss in [&array[1], &array["a"], &object["b"], &object[0], &scalar[0], &scalar["x"]] {
			assert!(std::ptr::eq(miss, JsonValue::empty()));
		}
		assert_eq!(array[0].as_long(0), 1);
		assert_eq!(object["a"].as_long(0), 1);
		let key = String::from("a");
		assert_eq!(object[&key].as_long(0), 1);
	}

	#[test]
	fn mutable_index_grows_arrays() {
		let mut value = JsonValue::Undefined;
		value[3] = JsonValue::from(7);
		assert!(value.is_array());
		assert_eq!(value.size(), 4);
		assert!(value[0].is_undefined());
		assert_eq!(value[3].as_long(0), 7);
	}

	#[test]
	fn mutable_index_replaces_other_variants() {
		let mut value = JsonValue::from("text");
		value["key"] = JsonValue::from(true);
		assert!(value.is_object());
		assert_eq!(value.size(), 1);

		value[0] = JsonValue::from(1);
		assert!(value.is_array());
		assert!(!value.has_key("key"));
		assert_eq!(value.size(), 1);
	}

	#[test]
	fn auto_vivification_builds_nested_structures() {
		let mut value = JsonValue::Undefined;
		value["a"]["b"][2] = JsonValue::from("deep");
		assert_eq!(value.stringify(), r#"{"a":{"b":[null,null,"deep"]}}"#);
		let key = String::from("a");
		value[&key]["c"] = JsonValue::from(1);
		assert_eq!(value["a"].size(), 2);
	}

	#[test]
	fn add_appends() {
		let mut value = JsonValue::from(5);
		value.add(1);
		*value.add("two") = JsonValue::from(2);
		value.add(JsonValue::new_object())["k"] = JsonValue::from(3);
		assert_eq!(value.stringify(), r#"[1,2,{"k":3}]"#);
	}

	#[test]
	fn add_on_an_object_pads_to_its_size() {
		let mut added = JsonValue::from_pairs([("a", 1), ("b", 2)]);
		assert_eq!(added.add(9).as_long(0), 9);

		let mut indexed = JsonValue::from_pairs([("a", 1), ("b", 2)]);
		let index = indexed.size();
		indexed[index] = JsonValue::from(9);

		assert_eq!(added.stringify(), "[null,null,9]");
		assert_eq!(added.stringify(), indexed.stringify());
	}

	#[test]
	fn size_reserve_clear() {
		let mut value = JsonValue::from(vec![1, 2, 3]);
		assert_eq!(value.size(), 3);
		value.reserve(100);
		assert!(value.as_array().map_or(0, |a| a.0.capacity()) >= 100);
		value.clear();
		assert_eq!(value.size(), 0);
		assert!(value.is_array());

		let mut object = JsonValue::from_pairs([("a", 1)]);
		object.reserve(10);
		object.clear();
		assert!(object.is_object());
		assert_eq!(object.size(), 0);

		let mut scalar = JsonValue::from("abc");
		scalar.reserve(10);
		scalar.clear();
		assert_eq!(scalar.as_const_string(""), "abc");
		assert_eq!(scalar.size(), 0);
	}

	#[test]
	fn erase_from_arrays() {
		let mut value = JsonValue::from(vec!["a", "b", "c"]);
		value.erase(1);
		assert_eq!(value.stringify(), r#"["a","c"]"#);
		value.erase("1");
		assert_eq!(value.stringify(), r#"["a"]"#);
		value.erase(5);
		value.erase(-1);
		assert_eq!(value.size(), 1);
	}

	#[test]
	fn erase_from_objects() {
		let mut value = JsonValue::from_pairs([("a", 1), ("1", 2)]);
		value.erase("a");
		assert!(!value.has_key("a"));
		value.erase(1);
		assert_eq!(value.size(), 0);
		value.erase("missing");

		let mut scalar = JsonValue::from(3);
		scalar.erase(0);
		assert_eq!(scalar.as_long(0), 3);
	}

	#[test]
	fn indexes_and_has_key() {
		let value = JsonValue::from_pairs([("x", 1), ("y", 2)]);
		let mut keys = value.indexes();
		keys.sort();
		assert_eq!(keys, vec!["x", "y"]);
		assert!(value.has_key("x"));
		assert!(!value.has_key("z"));
		assert!(JsonValue::from(vec![1]).indexes().is_empty());
		assert!(!JsonValue::from(vec![1]).has_key("0"));
	}

	#[test]
	fn optional_lookups() {
		let value = JsonValue::parse_str(r#"{"list":[10,20]}"#);
		assert_eq!(value.get_key("list").and_then(|l| l.get_index(1)), Some(&JsonValue::Integer(20)));
		assert!(value.get_key("nope").is_none());
		assert!(value.get_index(0).is_none());
	}
}
