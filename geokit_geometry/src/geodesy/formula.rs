use crate::{GeoError, Result};
use std::{fmt::Display, str::FromStr};

/// Selects the algorithm used for distance calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceFormula {
	/// Closed-form great-circle distance on a sphere of the ellipsoid's mean radius.
	#[default]
	Haversine,
	/// Iterative solution of the inverse geodesic problem on the ellipsoid.
	Vincenty,
}

impl FromStr for DistanceFormula {
	type Err = GeoError;

	fn from_str(s: &str) -> Result<Self> {
		if s.eq_ignore_ascii_case("haversine") {
			Ok(DistanceFormula::Haversine)
		} else if s.eq_ignore_ascii_case("vincenty") {
			Ok(DistanceFormula::Vincenty)
		} else {
			Err(GeoError::Parse {
				message: format!("unknown distance formula '{s}', expected HAVERSINE or VINCENTY"),
				position: 0,
			})
		}
	}
}

impl Display for DistanceFormula {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			DistanceFormula::Haversine => "HAVERSINE",
			DistanceFormula::Vincenty => "VINCENTY",
		})
	}
}
