use super::{CoordinateArray, GeometryTrait, Point};
use crate::{Geometry, wkt};
use std::fmt::Display;

/// An ordered, possibly empty collection of geometries of any type, including nested collections.
#[derive(Clone, Default)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}
}

impl GeometryTrait for GeometryCollection {
	fn points(&self) -> Vec<Point> {
		self.0.iter().flat_map(Geometry::points).collect()
	}

	/// Returns the list of the children's array representations.
	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(Geometry::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::geometry_collection_to_wkt(self)
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(GeometryCollection, Geometry);
crate::impl_point_sequence_eq!(GeometryCollection);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, LineString};

	fn sample() -> GeometryCollection {
		GeometryCollection::new(vec![
			Geometry::from(Point::new(6.0, 4.0).unwrap()),
			Geometry::from(
				LineString::new(vec![Point::new(6.0, 4.0).unwrap(), Point::new(10.0, 7.0).unwrap()]).unwrap(),
			),
		])
	}

	#[test]
	fn points_span_all_children() {
		let points = sample().points();
		assert_eq!(points.len(), 3);
		assert_eq!(points[2].as_position(), [7.0, 10.0]);
	}

	#[test]
	fn to_array_lists_children() {
		assert_eq!(
			sample().to_array(),
			CoordinateArray::Array(vec![
				CoordinateArray::from([4.0, 6.0]),
				CoordinateArray::from(vec![[4.0, 6.0], [7.0, 10.0]]),
			])
		);
	}

	#[test]
	fn nested_collections() {
		let outer = GeometryCollection::new(vec![Geometry::from(sample()), Geometry::from(GeometryCollection::default())]);
		assert_eq!(outer.len(), 2);
		assert_eq!(outer.points().len(), 3);
		assert_eq!(
			outer.to_wkt(),
			"GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POINT(4 6), LINESTRING(4 6, 7 10)), GEOMETRYCOLLECTION EMPTY)"
		);
	}
}
