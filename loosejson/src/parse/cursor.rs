//! A byte-level cursor over an in-memory buffer.
//!
//! The `ByteCursor` struct supports peeking at the next byte without consuming it, advancing,
//! consuming bytes one by one and slicing out the bytes consumed since a remembered position.
//! Errors carry the position and a snapshot of the most recently consumed bytes.

use anyhow::{Error, Result, anyhow};

const DEBUG_SNAPSHOT_SIZE: usize = 16;

/// A cursor over a byte slice with support for peeking, consuming and error reporting.
///
/// # Fields
///
/// * `data` - The complete input.
/// * `position` - Index of the next unread byte; never exceeds `data.len()`.
pub struct ByteCursor<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> ByteCursor<'a> {
	/// Creates a new `ByteCursor` positioned at the first byte of `data`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		ByteCursor { data, position: 0 }
	}

	/// Formats an error message including the current byte position and a snapshot of the bytes
	/// consumed right before it. `<EOF>` marks an exhausted input.
	///
	/// # Arguments
	///
	/// * `msg` - The error message to include.
	///
	/// # Returns
	///
	/// An `anyhow::Error` containing the formatted error message.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(DEBUG_SNAPSHOT_SIZE);
		let mut snapshot = String::from_utf8_lossy(&self.data[start..self.position]).into_owned();
		if self.is_at_end() {
			snapshot.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snapshot}", self.position)
	}

	/// Index of the next unread byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.data.len()
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.data.get(self.position).copied()
	}

	/// Peeks `offset` bytes ahead of the next byte without consuming anything.
	#[inline]
	#[must_use]
	pub fn peek_at(&self, offset: usize) -> Option<u8> {
		self.data.get(self.position + offset).copied()
	}

	/// Moves past the next byte. Does nothing at the end of the input.
	#[inline]
	pub fn advance(&mut self) {
		self.advance_by(1);
	}

	/// Moves past up to `count` bytes.
	#[inline]
	pub fn advance_by(&mut self, count: usize) {
		self.position = (self.position + count).min(self.data.len());
	}

	/// Consumes and returns the next byte.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Expects and returns the next byte, advancing the cursor.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peek() {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.format_error("unexpected end"))
		}
	}

	/// Returns the next byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// The unread rest of the input.
	#[must_use]
	pub fn remaining(&self) -> &'a [u8] {
		&self.data[self.position..]
	}

	/// True if the unread input begins with `tag`.
	#[must_use]
	pub fn starts_with(&self, tag: &[u8]) -> bool {
		self.remaining().starts_with(tag)
	}

	/// The bytes between `start` and the current position.
	///
	/// `start` must be a position previously returned by [`ByteCursor::position`].
	#[must_use]
	pub fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.data[start.min(self.position)..self.position]
	}

	/// Skips over any ASCII whitespace bytes.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}
}
