use super::{CoordinateArray, Point};
use crate::{BBox, Result};
use std::fmt::Debug;

/// Defines the basic interface shared by every geometry type.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the flattened, ordered sequence of constituent points.
	///
	/// A point returns itself, containers concatenate their children in order.
	/// Duplicates (like the closing point of a ring) are kept.
	fn points(&self) -> Vec<Point>;

	/// Converts the geometry into its nested-array coordinate representation.
	fn to_array(&self) -> CoordinateArray;

	/// Returns the Well-Known Text representation of the geometry.
	fn to_wkt(&self) -> String;

	/// Computes the bounding box of all points, or `None` if the geometry is empty.
	fn compute_bounds(&self) -> Option<BBox> {
		BBox::from_points(&self.points()).ok()
	}
}

/// Geometries that can be rebuilt from their nested-array coordinate representation.
///
/// Geometry collections carry no type tags in their array form and therefore cannot.
pub trait FromCoordinateArray: Sized {
	/// Builds the geometry, validating depth and minimum element counts.
	fn from_array(array: &CoordinateArray) -> Result<Self>;
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `Point` can be converted into a `MultiPoint`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Read-only access to geometries that are made of simpler elements.
/// For example, a polygon is made of rings, and a multi line string is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the inner elements.
	fn as_slice(&self) -> &[Item];

	/// Consumes the composite geometry and returns the inner elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over the inner elements.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
