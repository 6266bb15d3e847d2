//! Recursive-descent JSON parser over an in-memory string.
//!
//! Errors carry the byte offset and a short snippet of the surrounding
//! input, so callers can report where a document went wrong.

use super::{JsonArray, JsonObject, JsonValue};
use anyhow::{Error, Result, anyhow};
use std::collections::BTreeMap;

/// Parse a complete JSON document into a [`JsonValue`].
///
/// Trailing content after the root value is rejected.
///
/// # Errors
/// Returns an error describing the first offending byte offset.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut scanner = Scanner::new(json);
	let value = scanner.parse_value()?;
	scanner.skip_whitespace();
	if scanner.peek().is_some() {
		return Err(scanner.error("unexpected trailing content"));
	}
	Ok(value)
}

const SNIPPET_LENGTH: usize = 16;

struct Scanner<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Scanner<'a> {
	fn new(input: &'a str) -> Self {
		Self {
			bytes: input.as_bytes(),
			pos: 0,
		}
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn bump(&mut self) -> Option<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Some(byte)
	}

	fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.pos += 1;
		}
	}

	fn error(&self, msg: &str) -> Error {
		let start = self.pos.saturating_sub(SNIPPET_LENGTH);
		let snippet = String::from_utf8_lossy(&self.bytes[start..self.pos]);
		if self.pos >= self.bytes.len() {
			anyhow!("{msg} at offset {}: {snippet}<EOF>", self.pos)
		} else {
			anyhow!("{msg} at offset {}: {snippet}", self.pos)
		}
	}

	fn expect(&mut self, expected: u8) -> Result<()> {
		match self.bump() {
			Some(byte) if byte == expected => Ok(()),
			_ => Err(self.error(&format!("expected '{}'", expected as char))),
		}
	}

	fn parse_value(&mut self) -> Result<JsonValue> {
		self.skip_whitespace();
		match self.peek() {
			Some(b'{') => self.parse_object(),
			Some(b'[') => self.parse_array(),
			Some(b'"') => Ok(JsonValue::String(self.parse_string()?)),
			Some(b't') => self.parse_literal("true", JsonValue::Boolean(true)),
			Some(b'f') => self.parse_literal("false", JsonValue::Boolean(false)),
			Some(b'n') => self.parse_literal("null", JsonValue::Null),
			Some(b'-' | b'0'..=b'9') => Ok(JsonValue::Number(self.parse_number()?)),
			_ => Err(self.error("expected a JSON value")),
		}
	}

	fn parse_literal(&mut self, tag: &str, value: JsonValue) -> Result<JsonValue> {
		for expected in tag.bytes() {
			if self.bump() != Some(expected) {
				return Err(self.error(&format!("invalid literal, expected '{tag}'")));
			}
		}
		Ok(value)
	}

	fn parse_object(&mut self) -> Result<JsonValue> {
		self.expect(b'{')?;
		let mut entries = BTreeMap::new();

		self.skip_whitespace();
		if self.peek() == Some(b'}') {
			self.pos += 1;
			return Ok(JsonValue::Object(JsonObject(entries)));
		}

		loop {
			self.skip_whitespace();
			let key = self.parse_string()?;
			self.skip_whitespace();
			self.expect(b':')?;
			let value = self.parse_value()?;
			entries.insert(key, value);

			self.skip_whitespace();
			match self.bump() {
				Some(b',') => {}
				Some(b'}') => break,
				_ => return Err(self.error("expected ',' or '}' in object")),
			}
		}
		Ok(JsonValue::Object(JsonObject(entries)))
	}

	fn parse_array(&mut self) -> Result<JsonValue> {
		self.expect(b'[')?;
		let mut entries = Vec::new();

		self.skip_whitespace();
		if self.peek() == Some(b']') {
			self.pos += 1;
			return Ok(JsonValue::Array(JsonArray(entries)));
		}

		loop {
			entries.push(self.parse_value()?);
			self.skip_whitespace();
			match self.bump() {
				Some(b',') => {}
				Some(b']') => break,
				_ => return Err(self.error("expected ',' or ']' in array")),
			}
		}
		Ok(JsonValue::Array(JsonArray(entries)))
	}

	fn parse_string(&mut self) -> Result<String> {
		self.expect(b'"')?;
		let mut text = String::new();
		loop {
			match self.bump() {
				None => return Err(self.error("unterminated string")),
				Some(b'"') => break,
				Some(b'\\') => match self.bump() {
					Some(b'"') => text.push('"'),
					Some(b'\\') => text.push('\\'),
					Some(b'/') => text.push('/'),
					Some(b'b') => text.push('\u{08}'),
					Some(b'f') => text.push('\u{0c}'),
					Some(b'n') => text.push('\n'),
					Some(b'r') => text.push('\r'),
					Some(b't') => text.push('\t'),
					Some(b'u') => text.push(self.parse_unicode_escape()?),
					_ => return Err(self.error("invalid escape sequence")),
				},
				Some(byte) if byte < 0x80 => text.push(byte as char),
				Some(byte) => {
					// multi-byte UTF-8 sequence, copy it through verbatim
					let len = utf8_sequence_length(byte);
					let start = self.pos - 1;
					for _ in 1..len {
						self.bump().ok_or_else(|| self.error("truncated UTF-8 sequence"))?;
					}
					let chunk = std::str::from_utf8(&self.bytes[start..self.pos])
						.map_err(|_| self.error("invalid UTF-8 sequence"))?;
					text.push_str(chunk);
				}
			}
		}
		Ok(text)
	}

	fn parse_unicode_escape(&mut self) -> Result<char> {
		let first = self.parse_hex_unit()?;
		let code_point = if (0xD800..0xDC00).contains(&first) {
			// high surrogate, must be followed by an escaped low surrogate
			if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
				return Err(self.error("unpaired surrogate in unicode escape"));
			}
			let second = self.parse_hex_unit()?;
			if !(0xDC00..0xE000).contains(&second) {
				return Err(self.error("invalid low surrogate in unicode escape"));
			}
			0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
		} else {
			first
		};
		char::from_u32(code_point).ok_or_else(|| self.error("invalid unicode code point"))
	}

	fn parse_hex_unit(&mut self) -> Result<u32> {
		let mut unit = 0u32;
		for _ in 0..4 {
			let digit = match self.bump() {
				Some(b @ b'0'..=b'9') => u32::from(b - b'0'),
				Some(b @ b'a'..=b'f') => u32::from(b - b'a') + 10,
				Some(b @ b'A'..=b'F') => u32::from(b - b'A') + 10,
				_ => return Err(self.error("invalid hex digit in unicode escape")),
			};
			unit = unit * 16 + digit;
		}
		Ok(unit)
	}

	fn parse_number(&mut self) -> Result<f64> {
		let start = self.pos;

		if self.peek() == Some(b'-') {
			self.pos += 1;
		}

		let mut integer_digits = false;
		while let Some(b'0'..=b'9') = self.peek() {
			integer_digits = true;
			self.pos += 1;
		}
		if !integer_digits {
			return Err(self.error("expected digits in number"));
		}

		if self.peek() == Some(b'.') {
			self.pos += 1;
			let mut fraction_digits = false;
			while let Some(b'0'..=b'9') = self.peek() {
				fraction_digits = true;
				self.pos += 1;
			}
			if !fraction_digits {
				return Err(self.error("expected digits after decimal point"));
			}
		}

		if let Some(b'e' | b'E') = self.peek() {
			self.pos += 1;
			if let Some(b'+' | b'-') = self.peek() {
				self.pos += 1;
			}
			let mut exponent_digits = false;
			while let Some(b'0'..=b'9') = self.peek() {
				exponent_digits = true;
				self.pos += 1;
			}
			if !exponent_digits {
				return Err(self.error("expected digits in exponent"));
			}
		}

		let text = std::str::from_utf8(&self.bytes[start..self.pos]).unwrap();
		text.parse::<f64>().map_err(|_| self.error("invalid number"))
	}
}

fn utf8_sequence_length(first_byte: u8) -> usize {
	match first_byte {
		0xC0..=0xDF => 2,
		0xE0..=0xEF => 3,
		_ => 4,
	}
}
