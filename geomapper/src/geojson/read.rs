//! Readers for whole GeoJSON documents and newline-delimited feature
//! streams, with synchronous iterator and asynchronous stream interfaces.

use super::feature::{DecodeOptions, decode_feature, decode_feature_collection};
use crate::geo::{GeoCollection, GeoFeature};
use anyhow::{Error, Result, anyhow};
use futures::{Stream, StreamExt, future::ready, stream};
use geomapper_core::json::JsonValue;
use std::io::{BufRead, Read};

/// Read and decode one FeatureCollection document from a reader.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	let value = JsonValue::parse_str(&buffer)?;
	Ok(decode_feature_collection(&value, &DecodeOptions::default())?)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None), // Skip empty or whitespace-only lines
		Ok(line) => JsonValue::parse_str(&line)
			.and_then(|value| Ok(decode_feature(&value, &DecodeOptions::default())?))
			.map(Some)
			.map_err(|e| anyhow!("line {}: {}", index + 1, e)),
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Iterate over newline-delimited Feature documents.
///
/// Empty lines are skipped; errors carry the 1-based line number.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

/// Stream newline-delimited Feature documents, decoding lines concurrently
/// on the Tokio runtime, buffered by CPU count.
pub fn read_ndgeojson_stream(reader: impl BufRead) -> impl Stream<Item = Result<GeoFeature>> {
	stream::iter(reader.lines().enumerate())
		.map(|(index, line)| tokio::spawn(async move { process_line(line, index).transpose() }))
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::StreamExt;
	use std::io::{BufReader, Cursor};

	#[test]
	fn read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry.as_ref().unwrap().type_name(), "Point");
		Ok(())
	}

	#[test]
	fn read_geojson_rejects_invalid() {
		assert!(read_geojson(Cursor::new("{broken")).is_err());
	}

	#[test]
	fn read_ndgeojson_iter_with_empty_lines() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;
		let input = format!("{json}\n\n{json}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			let feature = result.unwrap();
			assert_eq!(feature.geometry.unwrap().type_name(), "Point");
		}
	}

	#[test]
	fn read_ndgeojson_iter_reports_line_numbers() {
		let json = r#"{"type":"Feature","geometry":null,"properties":{}}"#;
		let input = format!("{json}\nnot json\n{json}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 3);
		assert!(results[0].is_ok());
		assert!(results[1].as_ref().unwrap_err().to_string().starts_with("line 2:"));
		assert!(results[2].is_ok());
	}

	#[tokio::test]
	async fn read_ndgeojson_stream_basic() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2,2]},"properties":{}}"#;
		let input = format!("{json}\n{json}");
		let mut stream = read_ndgeojson_stream(BufReader::new(Cursor::new(input)));
		let mut count = 0;
		while let Some(result) = stream.next().await {
			let feature = result.unwrap();
			assert_eq!(feature.geometry.unwrap().type_name(), "Point");
			count += 1;
		}
		assert_eq!(count, 2);
	}
}
