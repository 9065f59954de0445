use super::*;
use crate::{BBox, GeoError, Result};
use std::fmt::{Debug, Display};

/// The closed family of geometry types.
///
/// Codecs dispatch on the variant through exhaustive matches, so adding a variant is a
/// compile-time checked change.
#[derive(Clone)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	Polygon(Polygon),
	MultiPoint(MultiPoint),
	MultiLineString(MultiLineString),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

/// Tag of a [`Geometry`] variant, shared by the WKT and GeoJSON codecs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	/// The GeoJSON `type` name, e.g. `"MultiPoint"`.
	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// The WKT keyword, e.g. `"MULTIPOINT"`.
	#[must_use]
	pub fn wkt_keyword(&self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPoint => "MULTIPOINT",
			GeometryType::MultiLineString => "MULTILINESTRING",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
			GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
		}
	}

	/// Looks up a type by name, ignoring case. Accepts GeoJSON names and WKT keywords alike.
	pub fn from_name(name: &str) -> Result<Self> {
		[
			GeometryType::Point,
			GeometryType::LineString,
			GeometryType::Polygon,
			GeometryType::MultiPoint,
			GeometryType::MultiLineString,
			GeometryType::MultiPolygon,
			GeometryType::GeometryCollection,
		]
		.into_iter()
		.find(|t| t.name().eq_ignore_ascii_case(name))
		.ok_or_else(|| GeoError::UnsupportedGeometryType(name.to_string()))
	}

	/// Whether the type may contain zero elements.
	#[must_use]
	pub fn may_be_empty(&self) -> bool {
		matches!(
			self,
			GeometryType::MultiPoint
				| GeometryType::MultiLineString
				| GeometryType::MultiPolygon
				| GeometryType::GeometryCollection
		)
	}
}

impl Geometry {
	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().name()
	}

	/// Builds a geometry of the given type from its nested-array representation.
	///
	/// Collections cannot be rebuilt this way since their array form has no type tags.
	pub fn from_array(geometry_type: GeometryType, array: &CoordinateArray) -> Result<Self> {
		Ok(match geometry_type {
			GeometryType::Point => Geometry::Point(Point::from_array(array)?),
			GeometryType::LineString => Geometry::LineString(LineString::from_array(array)?),
			GeometryType::Polygon => Geometry::Polygon(Polygon::from_array(array)?),
			GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::from_array(array)?),
			GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineString::from_array(array)?),
			GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::from_array(array)?),
			GeometryType::GeometryCollection => {
				return Err(GeoError::InvalidGeometryCollection(
					"a geometry collection cannot be built from untyped coordinate arrays".into(),
				));
			}
		})
	}

	pub fn points(&self) -> Vec<Point> {
		match self {
			Geometry::Point(g) => g.points(),
			Geometry::LineString(g) => g.points(),
			Geometry::Polygon(g) => g.points(),
			Geometry::MultiPoint(g) => g.points(),
			Geometry::MultiLineString(g) => g.points(),
			Geometry::MultiPolygon(g) => g.points(),
			Geometry::GeometryCollection(g) => g.points(),
		}
	}

	pub fn to_array(&self) -> CoordinateArray {
		match self {
			Geometry::Point(g) => g.to_array(),
			Geometry::LineString(g) => g.to_array(),
			Geometry::Polygon(g) => g.to_array(),
			Geometry::MultiPoint(g) => g.to_array(),
			Geometry::MultiLineString(g) => g.to_array(),
			Geometry::MultiPolygon(g) => g.to_array(),
			Geometry::GeometryCollection(g) => g.to_array(),
		}
	}

	pub fn to_wkt(&self) -> String {
		match self {
			Geometry::Point(g) => g.to_wkt(),
			Geometry::LineString(g) => g.to_wkt(),
			Geometry::Polygon(g) => g.to_wkt(),
			Geometry::MultiPoint(g) => g.to_wkt(),
			Geometry::MultiLineString(g) => g.to_wkt(),
			Geometry::MultiPolygon(g) => g.to_wkt(),
			Geometry::GeometryCollection(g) => g.to_wkt(),
		}
	}

	pub fn compute_bounds(&self) -> Option<BBox> {
		BBox::from_points(&self.points()).ok()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => false,
			Geometry::MultiPoint(g) => g.is_empty(),
			Geometry::MultiLineString(g) => g.is_empty(),
			Geometry::MultiPolygon(g) => g.is_empty(),
			Geometry::GeometryCollection(g) => g.is_empty(),
		}
	}

	/// Wraps singular geometries into their multi counterpart; other geometries are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::GeometryCollection(_) => self,
		}
	}
}

impl PartialEq for Geometry {
	/// Geometries are equal when they are of the same type and their ordered point sequences are equal.
	fn eq(&self, other: &Self) -> bool {
		self.geometry_type() == other.geometry_type() && self.points() == other.points()
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl Display for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

macro_rules! impl_from_variant {
	($($t:ident),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$t(value)
			}
		}
	)*}
}

impl_from_variant!(
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection
);
