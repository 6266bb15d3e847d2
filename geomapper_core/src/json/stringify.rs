use super::JsonValue;

/// Serialize a [`JsonValue`] to compact JSON without extra whitespace.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => n.to_string(),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

/// Serialize a [`JsonValue`] to multi-line JSON with two-space indentation.
pub fn stringify_pretty(json: &JsonValue) -> String {
	let mut out = String::new();
	write_pretty(json, 0, &mut out);
	out
}

fn write_pretty(json: &JsonValue, depth: usize, out: &mut String) {
	let indent = "  ".repeat(depth + 1);
	match json {
		JsonValue::Array(arr) if !arr.is_empty() => {
			out.push_str("[\n");
			for (index, value) in arr.iter().enumerate() {
				if index > 0 {
					out.push_str(",\n");
				}
				out.push_str(&indent);
				write_pretty(value, depth + 1, out);
			}
			out.push('\n');
			out.push_str(&"  ".repeat(depth));
			out.push(']');
		}
		JsonValue::Object(obj) if !obj.is_empty() => {
			out.push_str("{\n");
			for (index, (key, value)) in obj.iter().enumerate() {
				if index > 0 {
					out.push_str(",\n");
				}
				out.push_str(&indent);
				out.push_str(&format!("\"{}\": ", escape_json_string(key)));
				write_pretty(value, depth + 1, out);
			}
			out.push('\n');
			out.push_str(&"  ".repeat(depth));
			out.push('}');
		}
		_ => out.push_str(&stringify(json)),
	}
}

/// Escape a string for embedding in a JSON document (without the quotes).
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;

	#[test]
	fn stringify_primitives() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("\"Hello, World!\"")?), "\"Hello, World!\"");
		assert_eq!(stringify(&parse_json_str("42")?), "42");
		assert_eq!(stringify(&parse_json_str("42.5")?), "42.5");
		assert_eq!(stringify(&parse_json_str("true")?), "true");
		assert_eq!(stringify(&parse_json_str("null")?), "null");
		Ok(())
	}

	#[test]
	fn stringify_special_characters() -> Result<()> {
		let json = parse_json_str("\"Line1\\nLine2\\tTab\\\\\"")?;
		assert_eq!(stringify(&json), "\"Line1\\nLine2\\tTab\\\\\"");
		Ok(())
	}

	#[test]
	fn stringify_nested() -> Result<()> {
		let json = parse_json_str(r#"{"nested":{"array":["value",{"k":3.14}],"boolean":true}}"#)?;
		assert_eq!(
			stringify(&json),
			r#"{"nested":{"array":["value",{"k":3.14}],"boolean":true}}"#
		);
		Ok(())
	}

	#[test]
	fn escape_control_characters() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
	}

	#[test]
	fn pretty_output() -> Result<()> {
		let json = parse_json_str(r#"{"a":1,"b":[1,2]}"#)?;
		let expected = "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}";
		assert_eq!(stringify_pretty(&json), expected);
		Ok(())
	}

	#[test]
	fn pretty_empty_containers() -> Result<()> {
		assert_eq!(stringify_pretty(&parse_json_str("{}")?), "{}");
		assert_eq!(stringify_pretty(&parse_json_str("[]")?), "[]");
		Ok(())
	}
}
