use super::{CoordinateArray, FromCoordinateArray, GeometryTrait, Point, Polygon};
use crate::{Result, wkt};
use std::fmt::Display;

/// An ordered, possibly empty collection of polygons.
#[derive(Clone, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
	#[must_use]
	pub fn new(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}
}

impl GeometryTrait for MultiPolygon {
	fn points(&self) -> Vec<Point> {
		self.0.iter().flat_map(Polygon::points).collect()
	}

	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Polygon::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::multi_polygon_to_wkt(self)
	}
}

impl FromCoordinateArray for MultiPolygon {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Ok(Self(
			array
				.as_slice("polygons")?
				.iter()
				.map(Polygon::from_array)
				.collect::<Result<Vec<_>>>()?,
		))
	}
}

impl FromIterator<Polygon> for MultiPolygon {
	fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for MultiPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(MultiPolygon, Polygon);
crate::impl_point_sequence_eq!(MultiPolygon);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeoError};
	use pretty_assertions::assert_eq;

	fn sample() -> MultiPolygon {
		MultiPolygon::from_array(&CoordinateArray::from(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0]]],
		]))
		.unwrap()
	}

	#[test]
	fn closes_every_ring() {
		let multi = sample();
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.as_slice()[1].exterior().len(), 5);
		assert_eq!(multi.points().len(), 13);
	}

	#[test]
	fn to_wkt() {
		assert_eq!(
			sample().to_wkt(),
			"MULTIPOLYGON(((0 0, 5 0, 2.5 4, 0 0), (2 1, 2.5 2, 3 1, 2 1)), ((6 0, 9 0, 9 4, 6 4, 6 0)))"
		);
	}

	#[test]
	fn rejects_shallow_arrays() {
		let array = CoordinateArray::from(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]);
		assert!(matches!(MultiPolygon::from_array(&array), Err(GeoError::StructuralMismatch(_))));
	}

	#[test]
	fn bounds() {
		assert_eq!(sample().compute_bounds().unwrap().as_array(), [0.0, 0.0, 9.0, 4.0]);
	}
}
