pub mod bbox;
pub mod convert;
pub mod distance;

use anyhow::{Context, Result, bail};
use geokit_geometry::{
	Geometry, GeometryCollection,
	geojson::{GeoJson, parse_geojson_str},
	wkt::parse_wkt,
};
use std::{fs, path::Path};

/// Reads the input argument: the content of the file it names, or the argument itself.
pub fn read_input(input: &str) -> Result<String> {
	let path = Path::new(input);
	if path.is_file() {
		log::debug!("reading input from {path:?}");
		fs::read_to_string(path).with_context(|| format!("reading {path:?}"))
	} else {
		Ok(input.to_string())
	}
}

/// Parses GeoJSON if the text starts with `{`, WKT otherwise.
pub fn parse_input(text: &str) -> Result<GeoJson> {
	let text = text.trim();
	if text.starts_with('{') {
		Ok(parse_geojson_str(text).context("parsing GeoJSON input")?)
	} else {
		Ok(GeoJson::Geometry(parse_wkt(text).context("parsing WKT input")?))
	}
}

/// Flattens a document to a single geometry. Feature collections become geometry collections.
pub fn into_geometry(document: GeoJson) -> Result<Geometry> {
	Ok(match document {
		GeoJson::Geometry(geometry) => geometry,
		GeoJson::Feature(feature) => match feature.geometry {
			Some(geometry) => geometry,
			None => bail!("feature has no geometry"),
		},
		GeoJson::FeatureCollection(collection) => Geometry::from(
			collection
				.features
				.into_iter()
				.filter_map(|feature| feature.geometry)
				.collect::<GeometryCollection>(),
		),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn detects_format() -> Result<()> {
		let wkt = into_geometry(parse_input("  POINT(1 2)")?)?;
		let json = into_geometry(parse_input(r#"{"type":"Point","coordinates":[1,2]}"#)?)?;
		assert_eq!(wkt, json);
		assert!(parse_input("{ nope").is_err());
		assert!(parse_input("POINT(1)").is_err());
		Ok(())
	}

	#[test]
	fn reads_files_and_literals() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		file.write_all(b"LINESTRING(0 0, 1 1)")?;
		let path = file.path().to_str().unwrap();
		assert_eq!(read_input(path)?, "LINESTRING(0 0, 1 1)");
		assert_eq!(read_input("POINT(1 2)")?, "POINT(1 2)");
		Ok(())
	}

	#[test]
	fn feature_collection_becomes_geometry_collection() -> Result<()> {
		let text = r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
			{"type":"Feature","geometry":null,"properties":{}}
		]}"#;
		let geometry = into_geometry(parse_input(text)?)?;
		assert_eq!(geometry.to_wkt(), "GEOMETRYCOLLECTION(POINT(1 2))");
		assert!(into_geometry(parse_input(r#"{"type":"Feature","geometry":null}"#)?).is_err());
		Ok(())
	}
}
