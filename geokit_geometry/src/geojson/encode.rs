use super::GeoJson;
use crate::{BBox, CompositeGeometryTrait, CoordinateArray, GeoCollection, GeoFeature, Geometry};
use serde_json::{Map, Value, json};

/// Encodes a geometry object. Collections carry `geometries`, all other types `coordinates`.
pub fn geometry_to_geojson(geometry: &Geometry) -> Value {
	match geometry {
		Geometry::GeometryCollection(collection) => json!({
			"type": geometry.type_name(),
			"geometries": collection.iter().map(geometry_to_geojson).collect::<Vec<_>>(),
		}),
		_ => json!({
			"type": geometry.type_name(),
			"coordinates": coordinates_to_json(&geometry.to_array()),
		}),
	}
}

/// Encodes a `Feature`. `id` is written when set, `bbox` when the feature's flag is set and
/// the geometry has at least one point.
pub fn feature_to_geojson(feature: &GeoFeature) -> Value {
	let mut object = Map::new();
	object.insert("type".into(), Value::from("Feature"));
	if let Some(id) = &feature.id {
		object.insert("id".into(), id.clone());
	}
	if feature.bbox
		&& let Some(bbox) = feature.geometry.as_ref().and_then(|g| BBox::from_geometry(g).ok())
	{
		object.insert("bbox".into(), json!(bbox.as_array()));
	}
	object.insert(
		"geometry".into(),
		feature.geometry.as_ref().map_or(Value::Null, geometry_to_geojson),
	);
	object.insert("properties".into(), feature.properties.to_json());
	Value::Object(object)
}

pub fn collection_to_geojson(collection: &GeoCollection) -> Value {
	json!({
		"type": "FeatureCollection",
		"features": collection.features.iter().map(feature_to_geojson).collect::<Vec<_>>(),
	})
}

/// Translates the nested-array form into a JSON `coordinates` value.
pub fn coordinates_to_json(array: &CoordinateArray) -> Value {
	match array {
		CoordinateArray::Number(value) => Value::from(*value),
		CoordinateArray::Array(list) => Value::Array(list.iter().map(coordinates_to_json).collect()),
	}
}

impl GeoJson {
	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			GeoJson::Geometry(geometry) => geometry_to_geojson(geometry),
			GeoJson::Feature(feature) => feature_to_geojson(feature),
			GeoJson::FeatureCollection(collection) => collection_to_geojson(collection),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryCollection, LineString, Point, geojson::decode_geojson};
	use pretty_assertions::assert_eq;

	fn p(lat: f64, lon: f64) -> Point {
		Point::new(lat, lon).unwrap()
	}

	#[test]
	fn point() {
		let value = geometry_to_geojson(&Geometry::from(p(2.0, 1.5)));
		assert_eq!(value, json!({"type": "Point", "coordinates": [1.5, 2.0]}));
	}

	#[test]
	fn geometry_collection() {
		let collection = GeometryCollection::new(vec![
			Geometry::from(p(6.0, 4.0)),
			Geometry::from(LineString::new(vec![p(6.0, 4.0), p(10.0, 7.0)]).unwrap()),
		]);
		assert_eq!(collection.len(), 2);
		assert_eq!(
			geometry_to_geojson(&Geometry::from(collection)),
			json!({
				"type": "GeometryCollection",
				"geometries": [
					{"type": "Point", "coordinates": [4.0, 6.0]},
					{"type": "LineString", "coordinates": [[4.0, 6.0], [7.0, 10.0]]}
				]
			})
		);
	}

	#[test]
	fn feature_with_id_and_bbox() {
		let line = LineString::new(vec![p(0.0, 0.0), p(2.0, 3.0)]).unwrap();
		let mut feature = GeoFeature::new(Geometry::from(line));
		feature.set_id(json!(7));
		feature.set_property("name".into(), "road");
		feature.set_bbox(true);
		assert_eq!(
			feature_to_geojson(&feature),
			json!({
				"type": "Feature",
				"id": 7,
				"bbox": [0.0, 0.0, 3.0, 2.0],
				"geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [3.0, 2.0]]},
				"properties": {"name": "road"}
			})
		);
	}

	#[test]
	fn feature_without_geometry() {
		let feature = GeoFeature {
			id: None,
			geometry: None,
			properties: Default::default(),
			bbox: true,
		};
		assert_eq!(
			feature_to_geojson(&feature),
			json!({"type": "Feature", "geometry": null, "properties": {}})
		);
	}

	#[test]
	fn decode_encode_is_idempotent() {
		let documents = [
			json!({"type": "MultiPoint", "coordinates": [[100, 0], [101, 1]]}),
			json!({"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10]]]}),
			json!({"type": "MultiPolygon", "coordinates": []}),
			json!({"type": "GeometryCollection", "geometries": []}),
			json!({
				"type": "FeatureCollection",
				"features": [
					{"type": "Feature", "id": "x", "bbox": [], "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": {"a": [1, {"b": null}]}},
					{"type": "Feature", "geometry": null, "properties": {}}
				]
			}),
		];
		for document in documents {
			let decoded = decode_geojson(&document).unwrap();
			let encoded = decoded.to_json();
			assert_eq!(decode_geojson(&encoded).unwrap(), decoded);
			assert_eq!(decode_geojson(&encoded).unwrap().to_json(), encoded);
		}
	}

	#[test]
	fn open_ring_is_closed_on_encode() {
		let decoded = decode_geojson(&json!({"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10]]]})).unwrap();
		assert_eq!(
			decoded.to_json(),
			json!({"type": "Polygon", "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]]})
		);
	}
}
