use super::{
	CompositeGeometryTrait, CoordinateArray, FromCoordinateArray, GeometryTrait, MultiPolygon, Point, Ring,
	SingleGeometryTrait,
};
use crate::{GeoError, Result, wkt};
use std::fmt::Display;

/// A polygon made of an exterior ring followed by zero or more holes.
///
/// Holes are not validated for containment, and winding order is not enforced.
#[derive(Clone)]
pub struct Polygon(Vec<Ring>);

impl Polygon {
	/// Builds a polygon from point lists; every open ring is closed automatically.
	pub fn new(rings: Vec<Vec<Point>>) -> Result<Self> {
		Self::from_rings(rings.into_iter().map(Ring::new).collect::<Result<Vec<_>>>()?)
	}

	pub fn from_rings(rings: Vec<Ring>) -> Result<Self> {
		if rings.is_empty() {
			return Err(GeoError::StructuralMismatch("a polygon needs at least one ring".into()));
		}
		Ok(Self(rings))
	}

	#[must_use]
	pub fn exterior(&self) -> &Ring {
		&self.0[0]
	}

	#[must_use]
	pub fn holes(&self) -> &[Ring] {
		&self.0[1..]
	}
}

impl GeometryTrait for Polygon {
	fn points(&self) -> Vec<Point> {
		self.0.iter().flat_map(|ring| ring.iter().copied()).collect()
	}

	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Ring::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::polygon_to_wkt(self)
	}
}

impl FromCoordinateArray for Polygon {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Self::from_rings(
			array
				.as_slice("rings")?
				.iter()
				.map(Ring::from_array)
				.collect::<Result<Vec<_>>>()?,
		)
	}
}

impl SingleGeometryTrait<MultiPolygon> for Polygon {
	fn into_multi(self) -> MultiPolygon {
		MultiPolygon::new(vec![self])
	}
}

impl Display for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(Polygon, Ring);
crate::impl_point_sequence_eq!(Polygon);

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn p(lat: f64, lon: f64) -> Point {
		Point::new(lat, lon).unwrap()
	}

	#[test]
	fn open_ring_is_closed() {
		let polygon = Polygon::new(vec![vec![p(2.0, 3.0), p(2.0, 4.0), p(3.0, 4.0)]]).unwrap();
		let points = polygon.points();
		assert_eq!(points.len(), 4);
		assert_eq!(points.first(), points.last());
		assert_eq!(polygon.to_wkt(), "POLYGON((3 2, 4 2, 4 3, 3 2))");
	}

	#[test]
	fn exterior_and_holes() {
		let polygon = Polygon::from_array(&CoordinateArray::from(vec![
			vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
			vec![[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 2.0]],
		]))
		.unwrap();
		assert_eq!(polygon.exterior().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.len(), 2);
	}

	#[test]
	fn to_array_mirrors_geojson_nesting() {
		let polygon = Polygon::new(vec![vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)]]).unwrap();
		assert_eq!(
			polygon.to_array(),
			CoordinateArray::from(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]])
		);
	}

	#[test]
	fn structural_errors() {
		assert!(matches!(
			Polygon::from_array(&CoordinateArray::Array(vec![])),
			Err(GeoError::StructuralMismatch(_))
		));
		assert!(matches!(
			Polygon::from_array(&CoordinateArray::from(vec![[0.0, 0.0], [1.0, 1.0]])),
			Err(GeoError::StructuralMismatch(_))
		));
		assert!(matches!(
			Polygon::from_array(&CoordinateArray::from(vec![vec![[0.0, 0.0], [1.0, 1.0]]])),
			Err(GeoError::MalformedRing(_))
		));
	}

	#[test]
	fn equality_compares_point_sequences() {
		let a = Polygon::new(vec![vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)]]).unwrap();
		let b = Polygon::new(vec![vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(0.0, 0.0)]]).unwrap();
		let c = Polygon::new(vec![vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]]).unwrap();
		assert_eq!(a, b);
		assert_ne!(a, c);
	}
}
