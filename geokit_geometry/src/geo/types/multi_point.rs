use super::{CoordinateArray, FromCoordinateArray, GeometryTrait, Point, points_from_array};
use crate::{Result, wkt};
use std::fmt::Display;

/// An ordered, possibly empty collection of points.
#[derive(Clone, PartialEq, Default)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
	#[must_use]
	pub fn new(points: Vec<Point>) -> Self {
		Self(points)
	}
}

impl GeometryTrait for MultiPoint {
	fn points(&self) -> Vec<Point> {
		self.0.clone()
	}

	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Point::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::multi_point_to_wkt(self)
	}
}

impl FromCoordinateArray for MultiPoint {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Ok(Self(points_from_array(array)?))
	}
}

impl FromIterator<Point> for MultiPoint {
	fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for MultiPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(MultiPoint, Point);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeoError};

	#[test]
	fn from_array() {
		let multi = MultiPoint::from_array(&CoordinateArray::from(vec![[100.0, 0.0], [101.0, 1.0]])).unwrap();
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.as_slice()[0].to_array(), CoordinateArray::from([100.0, 0.0]));
		assert_eq!(multi.as_slice()[1].to_array(), CoordinateArray::from([101.0, 1.0]));
	}

	#[test]
	fn may_be_empty() {
		let multi = MultiPoint::from_array(&CoordinateArray::Array(vec![])).unwrap();
		assert!(multi.is_empty());
		assert!(multi.compute_bounds().is_none());
		assert_eq!(multi.to_wkt(), "MULTIPOINT EMPTY");
	}

	#[test]
	fn rejects_invalid_points() {
		let array = CoordinateArray::from(vec![[200.0, 0.0]]);
		assert!(matches!(MultiPoint::from_array(&array), Err(GeoError::InvalidCoordinate(_))));
	}

	#[test]
	fn collect_from_iterator() {
		let multi: MultiPoint = (0..3).map(|i| Point::new(f64::from(i), 0.0).unwrap()).collect();
		assert_eq!(multi.len(), 3);
		assert_eq!(multi.points()[2].latitude(), 2.0);
	}
}
