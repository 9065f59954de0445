use super::{
	CoordinateArray, FromCoordinateArray, GeometryTrait, MultiLineString, Point, SingleGeometryTrait, points_from_array,
};
use crate::{GeoError, Result, wkt};
use std::fmt::Display;

/// An ordered sequence of at least two points.
///
/// Duplicate and coincident points are allowed.
#[derive(Clone, PartialEq)]
pub struct LineString(Vec<Point>);

impl LineString {
	pub fn new(points: Vec<Point>) -> Result<Self> {
		if points.len() < 2 {
			return Err(GeoError::StructuralMismatch(format!(
				"a line string needs at least 2 points, got {}",
				points.len()
			)));
		}
		Ok(Self(points))
	}
}

impl GeometryTrait for LineString {
	fn points(&self) -> Vec<Point> {
		self.0.clone()
	}

	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Point::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::line_string_to_wkt(self)
	}
}

impl FromCoordinateArray for LineString {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Self::new(points_from_array(array)?)
	}
}

impl SingleGeometryTrait<MultiLineString> for LineString {
	fn into_multi(self) -> MultiLineString {
		MultiLineString::new(vec![self])
	}
}

impl Display for LineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(LineString, Point);
