use super::{CoordinateArray, FromCoordinateArray, GeometryTrait, MultiPoint, SingleGeometryTrait};
use crate::{GeoError, Result, wkt};
use std::fmt::{Debug, Display};

/// A geographic position given by longitude and latitude in degrees.
///
/// Points are validated on construction: both values must be finite, the longitude
/// within `[-180, 180]` and the latitude within `[-90, 90]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
	longitude: f64,
	latitude: f64,
}

impl Point {
	/// Constructs a point from latitude and longitude, in that order.
	pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
		if !latitude.is_finite() || !longitude.is_finite() {
			return Err(GeoError::InvalidCoordinate(format!(
				"coordinates must be finite, got latitude {latitude} and longitude {longitude}"
			)));
		}
		if !(-90.0..=90.0).contains(&latitude) {
			return Err(GeoError::InvalidCoordinate(format!(
				"latitude {latitude} is outside of [-90, 90]"
			)));
		}
		if !(-180.0..=180.0).contains(&longitude) {
			return Err(GeoError::InvalidCoordinate(format!(
				"longitude {longitude} is outside of [-180, 180]"
			)));
		}
		Ok(Self { longitude, latitude })
	}

	/// Constructs a point from a `[longitude, latitude]` position, the order used by WKT and GeoJSON.
	pub fn from_position(position: [f64; 2]) -> Result<Self> {
		Self::new(position[1], position[0])
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.longitude
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.latitude
	}

	/// Returns `[longitude, latitude]`.
	#[must_use]
	pub fn as_position(&self) -> [f64; 2] {
		[self.longitude, self.latitude]
	}

	/// Latitude in radians.
	#[must_use]
	pub fn lat_rad(&self) -> f64 {
		self.latitude.to_radians()
	}

	/// Longitude in radians.
	#[must_use]
	pub fn lon_rad(&self) -> f64 {
		self.longitude.to_radians()
	}
}

/// Decodes a list of `[longitude, latitude]` positions.
pub(crate) fn points_from_array(array: &CoordinateArray) -> Result<Vec<Point>> {
	array
		.as_slice("positions")?
		.iter()
		.map(Point::from_array)
		.collect()
}

impl GeometryTrait for Point {
	fn points(&self) -> Vec<Point> {
		vec![*self]
	}

	/// Returns the point as `[longitude, latitude]`.
	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::position(self.longitude, self.latitude)
	}

	fn to_wkt(&self) -> String {
		wkt::point_to_wkt(self)
	}
}

impl FromCoordinateArray for Point {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Self::from_position(array.as_position()?)
	}
}

impl SingleGeometryTrait<MultiPoint> for Point {
	fn into_multi(self) -> MultiPoint {
		MultiPoint::new(vec![self])
	}
}

impl Debug for Point {
	/// Formats the point as `[longitude, latitude]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.as_position().fmt(f)
	}
}

impl Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

impl TryFrom<[f64; 2]> for Point {
	type Error = GeoError;

	/// Interprets the array as `[longitude, latitude]`.
	fn try_from(value: [f64; 2]) -> Result<Self> {
		Self::from_position(value)
	}
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let point = Point::new(52.520008, 13.404954).unwrap();
		assert_eq!(point.latitude(), 52.520008);
		assert_eq!(point.longitude(), 13.404954);
		assert_eq!(point.as_position(), [13.404954, 52.520008]);
	}

	#[rstest]
	#[case(91.0, 0.0)]
	#[case(-90.5, 0.0)]
	#[case(0.0, 180.1)]
	#[case(0.0, -181.0)]
	#[case(f64::NAN, 0.0)]
	#[case(0.0, f64::INFINITY)]
	fn rejects_invalid_coordinates(#[case] lat: f64, #[case] lon: f64) {
		assert!(matches!(Point::new(lat, lon), Err(GeoError::InvalidCoordinate(_))));
	}

	#[rstest]
	#[case(90.0, 180.0)]
	#[case(-90.0, -180.0)]
	#[case(0.0, 0.0)]
	fn accepts_boundaries(#[case] lat: f64, #[case] lon: f64) {
		assert!(Point::new(lat, lon).is_ok());
	}

	#[test]
	fn array_form_is_lon_lat() {
		let point = Point::new(0.0, 100.0).unwrap();
		assert_eq!(point.to_array(), CoordinateArray::from([100.0, 0.0]));
		assert_eq!(Point::from_array(&CoordinateArray::from([101.0, 1.0])).unwrap(), Point::new(1.0, 101.0).unwrap());
	}

	#[test]
	fn from_array_rejects_wrong_depth() {
		let array = CoordinateArray::from(vec![[1.0, 2.0]]);
		assert!(matches!(Point::from_array(&array), Err(GeoError::StructuralMismatch(_))));
	}

	#[test]
	fn points_is_singleton() {
		let point = Point::new(1.0, 2.0).unwrap();
		assert_eq!(point.points(), vec![point]);
	}

	#[test]
	fn debug_and_display() {
		let point = Point::new(2.0, 1.5).unwrap();
		assert_eq!(format!("{point:?}"), "[1.5, 2.0]");
		assert_eq!(point.to_string(), "POINT(1.5 2)");
	}

	#[test]
	fn into_multi() {
		use crate::CompositeGeometryTrait;
		let point = Point::new(1.0, 2.0).unwrap();
		let multi = point.into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&point));
	}

	#[test]
	fn bounds_of_a_point() {
		let bounds = Point::new(7.0, 3.0).unwrap().compute_bounds().unwrap();
		assert_eq!(bounds.as_array(), [3.0, 7.0, 3.0, 7.0]);
	}
}
