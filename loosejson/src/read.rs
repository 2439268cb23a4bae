//! Loading JSON from files and readers.
//!
//! The parser knows nothing about the filesystem: these helpers read the complete input into
//! memory first and then parse the whole buffer.

use crate::{
	parse::{parse_json, parse_json_bytes_strict, parse_json_str, parse_json_strict},
	value::JsonValue,
};
use anyhow::{Context, Result, anyhow};
use loosejson_derive::context;
use std::{fs, io::BufRead, path::Path};

/// Read and leniently parse a file.
///
/// A file that cannot be read is logged as a warning and yields `Undefined`, indistinguishable
/// from a file that contains no JSON value. Use [`read_json_file`] to observe the error.
///
/// ```no_run
/// use loosejson::parse_file;
/// let config = parse_file("config.json");
/// let port = config["port"].as_int(8080);
/// ```
#[must_use]
pub fn parse_file(path: impl AsRef<Path>) -> JsonValue {
	match read_json_file(path) {
		Ok(value) => value,
		Err(err) => {
			log::warn!("{err:#}");
			JsonValue::Undefined
		}
	}
}

/// Read and leniently parse a file.
///
/// # Errors
/// Returns an error if the file cannot be read. Parsing itself never fails.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<JsonValue> {
	let data = read_file(path.as_ref())?;
	Ok(parse_json(&data))
}

/// Read and strictly parse a file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not contain valid JSON.
pub fn read_json_file_strict(path: impl AsRef<Path>) -> Result<JsonValue> {
	let path = path.as_ref();
	let data = read_file(path)?;
	parse_json_bytes_strict(&data).with_context(|| format!("in file {path:?}"))
}

#[context("while reading file {:?}", path)]
fn read_file(path: &Path) -> Result<Vec<u8>> {
	let data = fs::read(path)?;
	log::debug!("read {} bytes from {path:?}", data.len());
	Ok(data)
}

/// Process a single line of NDJSON. Empty or whitespace-only lines yield `None`.
fn process_line(line: std::io::Result<String>, index: usize, strict: bool) -> Option<Result<JsonValue>> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) if strict => Some(parse_json_strict(&line).with_context(|| format!("error in line {}", index + 1))),
		Ok(line) => Some(Ok(parse_json_str(&line))),
		Err(e) => Some(Err(anyhow!("line {}: {}", index + 1, e))),
	}
}

/// Iterate over newline-delimited JSON values from a buffered reader.
///
/// Each non-empty line is parsed on its own; empty lines are skipped. With `strict` set, lines
/// go through the strict parser and errors name the line number. Otherwise only I/O errors are
/// reported.
///
/// ```
/// use loosejson::read::read_ndjson_iter;
/// use std::io::Cursor;
/// let reader = Cursor::new("{\"key\":1}\n\n{\"key\":2}\n");
/// let keys: Vec<i64> = read_ndjson_iter(reader, true)
/// 	.map(|item| item.unwrap()["key"].as_long(0))
/// 	.collect();
/// assert_eq!(keys, vec![1, 2]);
/// ```
pub fn read_ndjson_iter(reader: impl BufRead, strict: bool) -> impl Iterator<Item = Result<JsonValue>> {
	reader
		.lines()
		.enumerate()
		.filter_map(move |(index, line)| process_line(line, index, strict))
}
