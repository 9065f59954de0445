use super::{CoordinateArray, GeometryTrait, Point, points_from_array};
use crate::{GeoError, Result};

/// A closed sequence of points bounding a polygon or one of its holes.
///
/// The first and last points are always identical. An open input is closed by appending
/// its first point; the comparison uses exact coordinate equality.
#[derive(Clone, PartialEq)]
pub struct Ring(Vec<Point>);

impl Ring {
	/// Builds a ring, closing it if necessary.
	///
	/// A closed ring must consist of at least 4 points.
	pub fn new(mut points: Vec<Point>) -> Result<Self> {
		let first = *points
			.first()
			.ok_or_else(|| GeoError::MalformedRing("a ring must not be empty".into()))?;
		if points.last() != Some(&first) {
			points.push(first);
		}
		if points.len() < 4 {
			return Err(GeoError::MalformedRing(format!(
				"a closed ring needs at least 4 points, got {}",
				points.len()
			)));
		}
		Ok(Self(points))
	}

	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.first() == self.0.last()
	}

	pub(crate) fn from_array(array: &CoordinateArray) -> Result<Self> {
		Self::new(points_from_array(array)?)
	}

	pub(crate) fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Point::to_array).collect())
	}
}

crate::impl_composite_geometry!(Ring, Point);
