use crate::{GeoError, Result};
use std::fmt::Debug;

/// Format-agnostic nested-array form of a geometry's coordinates.
///
/// The nesting mirrors GeoJSON `coordinates`: a position is an array of two numbers,
/// a line string is an array of positions, a polygon an array of rings, and so on.
/// Both codecs translate their input into this form before a geometry is built from it.
#[derive(Clone, PartialEq)]
pub enum CoordinateArray {
	Number(f64),
	Array(Vec<CoordinateArray>),
}

impl CoordinateArray {
	#[must_use]
	pub fn position(longitude: f64, latitude: f64) -> Self {
		Self::Array(vec![Self::Number(longitude), Self::Number(latitude)])
	}

	/// Returns the entries of an array, or a structural error naming `what` was expected.
	pub fn as_slice(&self, what: &str) -> Result<&[CoordinateArray]> {
		match self {
			Self::Array(list) => Ok(list),
			Self::Number(v) => Err(GeoError::StructuralMismatch(format!(
				"expected an array of {what}, found the number {v}"
			))),
		}
	}

	/// Interprets the value as a `[longitude, latitude]` pair.
	pub fn as_position(&self) -> Result<[f64; 2]> {
		match self.as_slice("numbers")? {
			[Self::Number(lon), Self::Number(lat)] => Ok([*lon, *lat]),
			list => Err(GeoError::StructuralMismatch(format!(
				"a position must consist of exactly two numbers, found {} entries",
				list.len()
			))),
		}
	}

	/// Nesting depth: 0 for a number, 1 for a position, 2 for a list of positions…
	///
	/// Empty arrays count as depth 1.
	#[must_use]
	pub fn depth(&self) -> usize {
		match self {
			Self::Number(_) => 0,
			Self::Array(list) => 1 + list.first().map_or(0, CoordinateArray::depth),
		}
	}
}

impl From<f64> for CoordinateArray {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<[f64; 2]> for CoordinateArray {
	fn from(value: [f64; 2]) -> Self {
		Self::position(value[0], value[1])
	}
}

impl<T> From<Vec<T>> for CoordinateArray
where
	CoordinateArray: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Self::Array(value.into_iter().map(CoordinateArray::from).collect())
	}
}

impl Debug for CoordinateArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(v) => v.fmt(f),
			Self::Array(list) => f.debug_list().entries(list).finish(),
		}
	}
}
