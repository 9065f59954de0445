//! YAML configuration of the geodesic context.
//!
//! # Example YAML
//! ```yaml
//! ellipsoid:
//!   name: Mars
//!   semi_major_axis: 3396190.0
//!   flattening: 0.005886
//!   units:
//!     furlong: 201.168
//! formula: vincenty
//! unit: km
//! ```

use anyhow::{Context, Result, ensure};
use geokit_geometry::{
	Ellipsoid,
	geodesy::{DistanceFormula, GeodesyContext},
};
use serde::Deserialize;
use std::{
	collections::BTreeMap,
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeokitConfig {
	/// Reference ellipsoid. Defaults to WGS-84 Earth.
	#[serde(default)]
	pub ellipsoid: Option<EllipsoidConfig>,

	/// Default distance formula, `haversine` or `vincenty`.
	#[serde(default)]
	pub formula: Option<String>,

	/// Default distance unit. Defaults to `m`.
	#[serde(default)]
	pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EllipsoidConfig {
	pub name: String,

	/// Equatorial radius in meters.
	pub semi_major_axis: f64,

	pub flattening: f64,

	/// Additional units, given in meters per unit.
	#[serde(default)]
	pub units: BTreeMap<String, f64>,
}

impl EllipsoidConfig {
	pub fn to_ellipsoid(&self) -> Result<Ellipsoid> {
		ensure!(
			self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0,
			"semi_major_axis of ellipsoid '{}' must be positive, got {}",
			self.name,
			self.semi_major_axis
		);
		ensure!(
			(0.0..1.0).contains(&self.flattening),
			"flattening of ellipsoid '{}' must be within [0, 1), got {}",
			self.name,
			self.flattening
		);

		let mut ellipsoid = Ellipsoid::new(&self.name, self.semi_major_axis, self.flattening);
		for (unit, meters) in &self.units {
			ensure!(
				meters.is_finite() && *meters > 0.0,
				"unit '{unit}' must have a positive length, got {meters}"
			);
			ellipsoid = ellipsoid.with_unit(unit, *meters);
		}
		Ok(ellipsoid)
	}
}

impl GeokitConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		GeokitConfig::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	/// The default unit, `m` unless configured.
	#[must_use]
	pub fn unit(&self) -> &str {
		self.unit.as_deref().unwrap_or("m")
	}

	pub fn formula(&self) -> Result<DistanceFormula> {
		Ok(match &self.formula {
			Some(formula) => formula.parse()?,
			None => DistanceFormula::default(),
		})
	}

	/// Builds the geodesic context and checks that the default unit is known to its ellipsoid.
	pub fn to_context(&self) -> Result<GeodesyContext> {
		let ellipsoid = match &self.ellipsoid {
			Some(config) => config.to_ellipsoid()?,
			None => Ellipsoid::earth(),
		};
		ellipsoid
			.multiplier(self.unit())
			.with_context(|| format!("default unit of ellipsoid '{}'", ellipsoid.name()))?;
		log::debug!("using ellipsoid '{}' with unit '{}'", ellipsoid.name(), self.unit());
		Ok(GeodesyContext::new(ellipsoid, self.formula()?))
	}
}
