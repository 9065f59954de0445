//! Reference ellipsoids and the unit table used to express distances.

use crate::{GeoError, Result};
use std::collections::BTreeMap;

/// Meters per unit for the unit tokens every ellipsoid understands.
pub const DEFAULT_UNITS: [(&str, f64); 9] = [
	("m", 1.0),
	("km", 1000.0),
	("cm", 0.01),
	("mm", 0.001),
	("mi", 1609.344),
	("ft", 0.3048),
	("in", 0.0254),
	("yd", 0.9144),
	("nm", 1852.0),
];

/// Parameters of a reference body: semi-major axis in meters, flattening, and a table
/// mapping unit tokens to meters per unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
	name: String,
	semi_major_axis: f64,
	flattening: f64,
	units: BTreeMap<String, f64>,
}

impl Ellipsoid {
	/// WGS-84 semi-major axis in meters.
	pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
	/// WGS-84 flattening.
	pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

	/// Creates an ellipsoid with the default unit table.
	#[must_use]
	pub fn new(name: &str, semi_major_axis: f64, flattening: f64) -> Self {
		Self {
			name: name.to_string(),
			semi_major_axis,
			flattening,
			units: DEFAULT_UNITS.iter().map(|(k, v)| ((*k).to_string(), *v)).collect(),
		}
	}

	/// The Earth, modelled with WGS-84 parameters.
	#[must_use]
	pub fn earth() -> Self {
		Self::new("Earth", Self::WGS84_SEMI_MAJOR_AXIS, Self::WGS84_FLATTENING)
	}

	/// Returns a copy of this ellipsoid that additionally understands `unit`.
	#[must_use]
	pub fn with_unit(mut self, unit: &str, meters_per_unit: f64) -> Self {
		self.units.insert(unit.to_string(), meters_per_unit);
		self
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn semi_major_axis(&self) -> f64 {
		self.semi_major_axis
	}

	#[must_use]
	pub fn flattening(&self) -> f64 {
		self.flattening
	}

	#[must_use]
	pub fn semi_minor_axis(&self) -> f64 {
		self.semi_major_axis * (1.0 - self.flattening)
	}

	/// Mean radius `(2a + b) / 3` in meters.
	#[must_use]
	pub fn mean_radius(&self) -> f64 {
		(2.0 * self.semi_major_axis + self.semi_minor_axis()) / 3.0
	}

	/// Mean radius expressed in `unit`.
	pub fn radius(&self, unit: &str) -> Result<f64> {
		Ok(self.mean_radius() / self.multiplier(unit)?)
	}

	/// Meters per `unit`.
	pub fn multiplier(&self, unit: &str) -> Result<f64> {
		self
			.units
			.get(unit)
			.copied()
			.ok_or_else(|| GeoError::UnknownUnit(unit.to_string()))
	}

	/// All known unit tokens, sorted.
	pub fn units(&self) -> impl Iterator<Item = &str> {
		self.units.keys().map(String::as_str)
	}
}

impl Default for Ellipsoid {
	fn default() -> Self {
		Self::earth()
	}
}
