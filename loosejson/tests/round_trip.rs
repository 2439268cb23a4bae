//! Integration tests for parsing, mutating and serializing value graphs.
//!
//! These tests verify that serialized values parse back to equal values and that the ownership
//! rules (deep copies, moves, shared lookups) hold on larger graphs.

use anyhow::Result;
use loosejson::*;
use pretty_assertions::assert_eq;

/// A deterministic graph that covers every variant and a few awkward strings and numbers.
fn sample_graph() -> JsonValue {
	let mut root = JsonValue::new_object();
	root["null"] = JsonValue::Undefined;
	root["flags"] = JsonValue::from(vec![true, false]);
	root["integers"] = JsonValue::from(vec![0, -1, i64::MAX, i64::MIN]);
	root["numbers"] = JsonValue::from(vec![0.5, -2.25, 1e20, 1.5e-9, -0.0, 123_456.75]);
	root["strings"] = JsonValue::from(vec![
		"",
		"plain",
		"quote \" backslash \\ slash /",
		"\\/",
		"tab\tnewline\nreturn\rback\u{08}feed\u{0c}",
		"ünïcödé ✓ 😀",
	]);
	root["nested"]["deeper"][3]["key"] = JsonValue::from("value");
	root["empty_array"] = JsonValue::new_array();
	root["empty_object"] = JsonValue::new_object();
	root["weird key \"/\\"] = JsonValue::from(1);
	root
}

#[test]
fn compact_round_trip() {
	let graph = sample_graph();
	for sorted in [false, true] {
		let text = stringify(&graph, sorted);
		let parsed = parse_json_str(&text);
		assert_eq!(parsed, graph, "{text}");
	}
}

#[test]
fn pretty_round_trip() {
	let graph = sample_graph();
	let text = pretty_stringify(&graph, true);
	assert_eq!(parse_json_str(&text), graph);
}

#[test]
fn round_trip_preserves_numeric_kinds() -> Result<()> {
	let graph = JsonValue::from(vec![JsonValue::Integer(1), JsonValue::Number(1.0), JsonValue::Number(1e20)]);
	let text = stringify(&graph, false);
	assert_eq!(text, "[1,1.0,1.0000000000000000e+20]");

	for parsed in [parse_json_str(&text), parse_json_strict(&text)?] {
		assert!(parsed[0].is_integer());
		assert!(parsed[1].is_floating_point());
		assert!(parsed[2].is_floating_point());
	}
	Ok(())
}

#[test]
fn sorted_output_is_stable() {
	let graph = sample_graph();
	let first = stringify(&graph, true);
	let reparsed = parse_json_str(&first);
	assert_eq!(stringify(&reparsed, true), first);
	assert_eq!(pretty_stringify(&reparsed, true), pretty_stringify(&graph, true));
}

#[test]
fn strict_and_lenient_agree_on_serialized_output() -> Result<()> {
	let text = stringify(&sample_graph(), true);
	assert_eq!(parse_json_strict(&text)?, parse_json_str(&text));
	Ok(())
}

#[test]
fn reference_document() {
	let value = parse_json(br#"{"a":1,"b":[true,null,"x\/y"]}"#);
	assert!(matches!(value["a"], JsonValue::Integer(1)));
	assert_eq!(value["b"].size(), 3);
	assert!(matches!(value["b"][0], JsonValue::Boolean(true)));
	assert!(value["b"][1].is_undefined());
	assert_eq!(value["b"][2].as_const_string(""), "x/y");
	assert_eq!(stringify(&value, true), r#"{"a":1,"b":[true,null,"x\/y"]}"#);
}

#[test]
fn auto_vivification() {
	let mut value = JsonValue::Undefined;
	value[2] = JsonValue::from(5);
	assert!(value.is_array());
	assert_eq!(value.size(), 3);
	assert!(value[0].is_undefined());
	assert!(value[1].is_undefined());
	assert_eq!(value[2].as_int(0), 5);
}

#[test]
fn missing_lookups_share_the_sentinel() {
	let value = sample_graph();
	let missing = &value["does not exist"];
	assert!(missing.is_undefined());
	assert!(std::ptr::eq(missing, JsonValue::empty()));
	assert!(std::ptr::eq(&value["flags"][99], JsonValue::empty()));
	assert!(std::ptr::eq(&value["flags"]["key"], JsonValue::empty()));
}

#[test]
fn clones_are_deep() {
	let original = JsonValue::from((0..1000).collect::<Vec<i32>>());
	let mut copy = original.clone();
	for i in 0..1000_usize {
		copy[i] = JsonValue::from("changed");
	}
	copy.add(1000);

	assert_eq!(original.size(), 1000);
	assert_eq!(copy.size(), 1001);
	assert!((0..1000_usize).all(|i| original[i].as_long(-1) == i64::try_from(i).unwrap()));
}

#[test]
fn take_moves_without_copying() {
	let mut source = JsonValue::from((0..1000).collect::<Vec<i32>>());
	let address = source.as_array().map(|array| array.as_vec().as_ptr());

	let target = source.take();
	assert!(source.is_undefined());
	assert_eq!(target.size(), 1000);
	assert_eq!(target.as_array().map(|array| array.as_vec().as_ptr()), address);

	// the moved-from value can be reused
	source["again"] = JsonValue::from(true);
	assert!(source["again"].as_boolean(false));
}

#[test]
fn escape_and_unescape_are_inverse() {
	for text in ["", "a/b", "\\/", "\"\\\"", "line\nbreak\ttab", "😀 ü /\\/ \u{08}\u{0c}\r"] {
		assert_eq!(unescape_json_string(escape_json_string(text).as_bytes()), text);
	}
}

#[test]
fn number_formatting_reference_values() {
	assert_eq!(number_to_string(0.0), "0.0");
	assert_eq!(number_to_string(-0.0), "-0.0");
	assert_eq!(number_to_string(f64::NAN), "null");
	assert_eq!(number_to_string(1e20), "1.0000000000000000e+20");
	assert_eq!(number_to_string(1.0), "1.0");
}

#[test]
fn display_matches_the_serializers() {
	let graph = sample_graph();
	assert_eq!(graph.to_string(), stringify(&graph, true));
	assert_eq!(format!("{graph:#}"), pretty_stringify(&graph, true));
}
