use super::*;
use serde_json::Value;

/// A geometry decorated with an optional id and a properties map.
///
/// When `bbox` is set, the GeoJSON encoding carries the bounding box of the geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<Value>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
	pub bbox: bool,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: GeoProperties::new(),
			bbox: false,
		}
	}

	pub fn set_id(&mut self, id: Value) {
		self.id = Some(id);
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		Value: From<T>,
	{
		self.properties.insert(key, Value::from(value));
	}

	pub fn set_bbox(&mut self, bbox: bool) {
		self.bbox = bbox;
	}
}
