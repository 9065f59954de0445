use crate::{
	CoordinateArray, GeoCollection, GeoError, GeoFeature, GeoProperties, Geometry, GeometryCollection, GeometryType,
	Result,
};
use serde_json::{Map, Value};

/// A decoded GeoJSON document.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

/// Parses GeoJSON text. JSON syntax errors are reported as [`GeoError::Parse`] with the
/// byte offset of the error.
pub fn parse_geojson_str(text: &str) -> Result<GeoJson> {
	let value: Value = serde_json::from_str(text).map_err(|e| GeoError::Parse {
		message: e.to_string(),
		position: byte_offset(text, e.line(), e.column()),
	})?;
	decode_geojson(&value)
}

/// Converts a serde_json line/column pair (1-based) into a byte offset.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
	let preceding: usize = text.split_inclusive('\n').take(line.saturating_sub(1)).map(str::len).sum();
	preceding + column.saturating_sub(1)
}

/// Decodes a geometry, `Feature` or `FeatureCollection` object.
pub fn decode_geojson(value: &Value) -> Result<GeoJson> {
	let object = as_object(value)?;
	let type_name = type_name(object)?;
	if type_name.eq_ignore_ascii_case("Feature") {
		Ok(GeoJson::Feature(decode_feature_object(object)?))
	} else if type_name.eq_ignore_ascii_case("FeatureCollection") {
		Ok(GeoJson::FeatureCollection(decode_feature_collection_object(object)?))
	} else {
		Ok(GeoJson::Geometry(decode_geometry_object(object)?))
	}
}

/// Decodes a geometry object, including nested `GeometryCollection`s.
pub fn decode_geometry(value: &Value) -> Result<Geometry> {
	decode_geometry_object(as_object(value)?)
}

pub fn decode_feature(value: &Value) -> Result<GeoFeature> {
	let object = as_object(value)?;
	expect_type(object, "Feature")?;
	decode_feature_object(object)
}

pub fn decode_feature_collection(value: &Value) -> Result<GeoCollection> {
	let object = as_object(value)?;
	expect_type(object, "FeatureCollection")?;
	decode_feature_collection_object(object)
}

fn decode_geometry_object(object: &Map<String, Value>) -> Result<Geometry> {
	let geometry_type = GeometryType::from_name(type_name(object)?)?;

	if geometry_type == GeometryType::GeometryCollection {
		let Some(Value::Array(entries)) = object.get("geometries") else {
			return Err(GeoError::InvalidGeometryCollection(
				"'geometries' must be an array of geometry objects".into(),
			));
		};
		let geometries = entries
			.iter()
			.map(|entry| match entry {
				Value::Object(child) => decode_geometry_object(child),
				other => Err(GeoError::InvalidGeometryCollection(format!(
					"expected a geometry object, found {other}"
				))),
			})
			.collect::<Result<Vec<_>>>()?;
		return Ok(Geometry::GeometryCollection(GeometryCollection::new(geometries)));
	}

	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| GeoError::StructuralMismatch(format!("{} is missing 'coordinates'", geometry_type.name())))?;
	Geometry::from_array(geometry_type, &json_to_coordinates(coordinates)?)
}

fn decode_feature_object(object: &Map<String, Value>) -> Result<GeoFeature> {
	let geometry = match object.get("geometry") {
		None | Some(Value::Null) => None,
		Some(value) => Some(decode_geometry(value)?),
	};
	let properties = match object.get("properties") {
		None | Some(Value::Null) => GeoProperties::new(),
		Some(Value::Object(map)) => GeoProperties::from(map.clone()),
		Some(other) => {
			return Err(GeoError::StructuralMismatch(format!(
				"feature properties must be an object, found {other}"
			)));
		}
	};
	Ok(GeoFeature {
		id: object.get("id").filter(|id| !id.is_null()).cloned(),
		geometry,
		properties,
		bbox: object.contains_key("bbox"),
	})
}

fn decode_feature_collection_object(object: &Map<String, Value>) -> Result<GeoCollection> {
	let Some(Value::Array(entries)) = object.get("features") else {
		return Err(GeoError::StructuralMismatch(
			"'features' must be an array of feature objects".into(),
		));
	};
	let features = entries.iter().map(decode_feature).collect::<Result<Vec<_>>>()?;
	Ok(GeoCollection::from(features))
}

/// Translates a JSON `coordinates` value into the nested-array form.
pub fn json_to_coordinates(value: &Value) -> Result<CoordinateArray> {
	match value {
		Value::Number(number) => number
			.as_f64()
			.map(CoordinateArray::Number)
			.ok_or_else(|| GeoError::InvalidCoordinate(format!("{number} is not representable as f64"))),
		Value::Array(list) => Ok(CoordinateArray::Array(
			list.iter().map(json_to_coordinates).collect::<Result<Vec<_>>>()?,
		)),
		other => Err(GeoError::StructuralMismatch(format!(
			"coordinates must contain only arrays and numbers, found {other}"
		))),
	}
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
	value
		.as_object()
		.ok_or_else(|| GeoError::UnsupportedGeometryType(format!("expected a GeoJSON object, found {value}")))
}

fn type_name(object: &Map<String, Value>) -> Result<&str> {
	match object.get("type") {
		Some(Value::String(name)) => Ok(name),
		Some(other) => Err(GeoError::UnsupportedGeometryType(other.to_string())),
		None => Err(GeoError::UnsupportedGeometryType("missing 'type'".into())),
	}
}

fn expect_type(object: &Map<String, Value>, expected: &str) -> Result<()> {
	let name = type_name(object)?;
	if name.eq_ignore_ascii_case(expected) {
		Ok(())
	} else {
		Err(GeoError::UnsupportedGeometryType(format!("expected {expected}, found {name}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeometryTrait, MultiPoint, Point};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn multi_point() {
		let geometry = decode_geometry(&json!({"type": "MultiPoint", "coordinates": [[100, 0], [101, 1]]})).unwrap();
		let expected = MultiPoint::new(vec![Point::new(0.0, 100.0).unwrap(), Point::new(1.0, 101.0).unwrap()]);
		assert_eq!(geometry, Geometry::MultiPoint(expected));
	}

	#[test]
	fn type_is_case_insensitive() {
		let geometry = decode_geometry(&json!({"type": "linestring", "coordinates": [[0, 0], [1, 1]]})).unwrap();
		assert_eq!(geometry.geometry_type(), GeometryType::LineString);
		let document = decode_geojson(&json!({"type": "feature", "geometry": null})).unwrap();
		assert!(matches!(document, GeoJson::Feature(_)));
	}

	#[test]
	fn nested_geometry_collection() {
		let value = json!({
			"type": "GeometryCollection",
			"geometries": [
				{"type": "Point", "coordinates": [4, 6]},
				{"type": "GeometryCollection", "geometries": [
					{"type": "LineString", "coordinates": [[4, 6], [7, 10]]}
				]}
			]
		});
		let Geometry::GeometryCollection(collection) = decode_geometry(&value).unwrap() else {
			panic!("expected a collection");
		};
		assert_eq!(collection.len(), 2);
		assert_eq!(
			collection.to_wkt(),
			"GEOMETRYCOLLECTION(POINT(4 6), GEOMETRYCOLLECTION(LINESTRING(4 6, 7 10)))"
		);
	}

	#[test]
	fn invalid_geometry_collection() {
		for value in [
			json!({"type": "GeometryCollection"}),
			json!({"type": "GeometryCollection", "geometries": {"type": "Point"}}),
			json!({"type": "GeometryCollection", "geometries": [[1, 2]]}),
		] {
			assert!(
				matches!(decode_geometry(&value), Err(GeoError::InvalidGeometryCollection(_))),
				"{value}"
			);
		}
	}

	#[test]
	fn unsupported_type() {
		assert_eq!(
			decode_geojson(&json!({"type": "Circle", "coordinates": [0, 0]})),
			Err(GeoError::UnsupportedGeometryType("Circle".into()))
		);
		assert!(matches!(
			decode_geojson(&json!({"coordinates": [0, 0]})),
			Err(GeoError::UnsupportedGeometryType(_))
		));
		assert!(matches!(
			decode_geojson(&json!([1, 2])),
			Err(GeoError::UnsupportedGeometryType(_))
		));
	}

	#[test]
	fn structural_errors() {
		let cases = [
			json!({"type": "Point", "coordinates": [[1, 2]]}),
			json!({"type": "Point", "coordinates": [1, 2, 3]}),
			json!({"type": "Point"}),
			json!({"type": "LineString", "coordinates": [[1, "2"], [3, 4]]}),
			json!({"type": "Polygon", "coordinates": []}),
		];
		for value in cases {
			assert!(matches!(decode_geometry(&value), Err(GeoError::StructuralMismatch(_))), "{value}");
		}
		assert!(matches!(
			decode_geometry(&json!({"type": "Point", "coordinates": [0, 95]})),
			Err(GeoError::InvalidCoordinate(_))
		));
		assert!(matches!(
			decode_geometry(&json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]})),
			Err(GeoError::MalformedRing(_))
		));
	}

	#[test]
	fn feature_collection() {
		let value = json!({
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"id": "a",
					"bbox": [1, 2, 1, 2],
					"geometry": {"type": "Point", "coordinates": [1, 2]},
					"properties": {"name": "first", "rank": 1}
				},
				{"type": "Feature", "geometry": null, "properties": null}
			]
		});
		let GeoJson::FeatureCollection(collection) = decode_geojson(&value).unwrap() else {
			panic!("expected a feature collection");
		};
		let [first, second] = collection.features.as_slice() else {
			panic!("expected two features");
		};
		assert_eq!(first.id, Some(json!("a")));
		assert!(first.bbox);
		assert_eq!(first.properties.get("rank"), Some(&json!(1)));
		assert_eq!(first.geometry.as_ref().map(Geometry::type_name), Some("Point"));
		assert_eq!(second.geometry, None);
		assert!(second.properties.is_empty());
		assert!(!second.bbox);
	}

	#[test]
	fn feature_collection_requires_features() {
		assert!(matches!(
			decode_feature_collection(&json!({"type": "FeatureCollection"})),
			Err(GeoError::StructuralMismatch(_))
		));
		assert!(matches!(
			decode_feature(&json!({"type": "Point", "coordinates": [0, 0]})),
			Err(GeoError::UnsupportedGeometryType(_))
		));
	}

	#[test]
	fn parse_text() {
		let GeoJson::Geometry(geometry) = parse_geojson_str(r#"{"type":"Point","coordinates":[1.5,2]}"#).unwrap() else {
			panic!("expected a geometry");
		};
		assert_eq!(geometry.to_wkt(), "POINT(1.5 2)");

		let Err(GeoError::Parse { position, .. }) = parse_geojson_str("{\n  \"type\": ]") else {
			panic!("expected a parse error");
		};
		assert!((12..=13).contains(&position), "{position}");
	}
}
