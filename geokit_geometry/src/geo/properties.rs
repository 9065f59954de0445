use serde_json::{Map, Value};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Properties map of a [`GeoFeature`](super::GeoFeature).
///
/// Values are kept as decoded JSON values and passed through untouched.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, Value>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties::default()
	}
	pub fn insert(&mut self, key: String, value: Value) {
		self.properties.insert(key, value);
	}
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.properties.iter()
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::Object(self.properties.clone().into_iter().collect::<Map<String, Value>>())
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, Value);
	type IntoIter = btree_map::IntoIter<String, Value>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, Value)>> for GeoProperties {
	fn from(value: Vec<(&str, Value)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl From<Map<String, Value>> for GeoProperties {
	fn from(value: Map<String, Value>) -> Self {
		value.into_iter().collect()
	}
}

impl FromIterator<(String, Value)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(&self.properties).finish()
	}
}
