//! A byte cursor over WKT text with peeking, consuming and positional error reporting.

use crate::GeoError;

/// Number of bytes before the error position quoted in parse errors.
const ERROR_CONTEXT_SIZE: usize = 16;

pub struct WktCursor<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> WktCursor<'a> {
	#[must_use]
	pub fn new(text: &'a str) -> Self {
		Self {
			bytes: text.as_bytes(),
			position: 0,
		}
	}

	/// Byte offset of the next unread byte.
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes `expected` after optional whitespace.
	pub fn expect_byte(&mut self, expected: u8) -> Result<(), GeoError> {
		self.skip_whitespace();
		match self.peek() {
			Some(byte) if byte == expected => {
				self.advance();
				Ok(())
			}
			Some(byte) => Err(self.format_error(&format!(
				"expected '{}', found '{}'",
				char::from(expected),
				char::from(byte)
			))),
			None => Err(self.format_error(&format!("expected '{}', found end of input", char::from(expected)))),
		}
	}

	/// Skips whitespace and consumes `byte` if it comes next.
	pub fn consume_if(&mut self, byte: u8) -> bool {
		self.skip_whitespace();
		if self.peek() == Some(byte) {
			self.advance();
			true
		} else {
			false
		}
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}

	/// Reads a run of ASCII letters after optional whitespace. Returns an empty string if
	/// no letter follows.
	pub fn parse_keyword(&mut self) -> String {
		self.skip_whitespace();
		let start = self.position;
		while let Some(b'a'..=b'z' | b'A'..=b'Z') = self.peek() {
			self.advance();
		}
		String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned()
	}

	/// Reads a number with optional sign, fraction and exponent after optional whitespace.
	pub fn parse_number(&mut self) -> Result<f64, GeoError> {
		self.skip_whitespace();
		let start = self.position;

		if let Some(b'+' | b'-') = self.peek() {
			self.advance();
		}

		let mut has_digits = self.skip_digits();
		if let Some(b'.') = self.peek() {
			self.advance();
			has_digits |= self.skip_digits();
		}
		if !has_digits {
			return Err(self.format_error("expected a number"));
		}

		if let Some(b'e' | b'E') = self.peek() {
			self.advance();
			if let Some(b'+' | b'-') = self.peek() {
				self.advance();
			}
			if !self.skip_digits() {
				return Err(self.format_error("expected digits after exponent"));
			}
		}

		let text = String::from_utf8_lossy(&self.bytes[start..self.position]);
		text
			.parse::<f64>()
			.map_err(|e| self.format_error(&format!("invalid number '{text}': {e}")))
	}

	fn skip_digits(&mut self) -> bool {
		let start = self.position;
		while let Some(b'0'..=b'9') = self.peek() {
			self.advance();
		}
		self.position > start
	}

	/// Builds a parse error at the current position, quoting the preceding input.
	#[must_use]
	pub fn format_error(&self, message: &str) -> GeoError {
		let start = self.position.saturating_sub(ERROR_CONTEXT_SIZE);
		let mut context = String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned();
		if self.is_at_end() {
			context.push_str("<EOF>");
		}
		GeoError::Parse {
			message: format!("{message} after '{context}'"),
			position: self.position,
		}
	}
}
