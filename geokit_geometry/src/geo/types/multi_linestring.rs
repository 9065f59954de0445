use super::{CoordinateArray, FromCoordinateArray, GeometryTrait, LineString, Point};
use crate::{Result, wkt};
use std::fmt::Display;

/// An ordered, possibly empty collection of line strings.
#[derive(Clone, Default)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
	#[must_use]
	pub fn new(lines: Vec<LineString>) -> Self {
		Self(lines)
	}
}

impl GeometryTrait for MultiLineString {
	fn points(&self) -> Vec<Point> {
		self.0.iter().flat_map(LineString::points).collect()
	}

	fn to_array(&self) -> CoordinateArray {
		CoordinateArray::Array(self.0.iter().map(LineString::to_array).collect())
	}

	fn to_wkt(&self) -> String {
		wkt::multi_line_string_to_wkt(self)
	}
}

impl FromCoordinateArray for MultiLineString {
	fn from_array(array: &CoordinateArray) -> Result<Self> {
		Ok(Self(
			array
				.as_slice("line strings")?
				.iter()
				.map(LineString::from_array)
				.collect::<Result<Vec<_>>>()?,
		))
	}
}

impl FromIterator<LineString> for MultiLineString {
	fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for MultiLineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

crate::impl_composite_geometry!(MultiLineString, LineString);
crate::impl_point_sequence_eq!(MultiLineString);
