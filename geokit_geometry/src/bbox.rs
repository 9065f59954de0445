//! Bounding boxes computed by scanning the extremal coordinates of a geometry.

use crate::{GeoError, Geometry, Point, Polygon, Result};

/// Axis-aligned bounding box in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
	pub min_lon: f64,
	pub min_lat: f64,
	pub max_lon: f64,
	pub max_lat: f64,
}

impl BBox {
	/// Scans the points, tracking the running minimum and maximum of latitude and longitude.
	///
	/// The scan is seeded at the opposite extremes (`±90`, `±180`), so a single point
	/// updates all four values.
	pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Result<Self> {
		let mut bbox = BBox {
			min_lon: 180.0,
			min_lat: 90.0,
			max_lon: -180.0,
			max_lat: -90.0,
		};
		let mut count = 0usize;
		for point in points {
			bbox.min_lon = bbox.min_lon.min(point.longitude());
			bbox.min_lat = bbox.min_lat.min(point.latitude());
			bbox.max_lon = bbox.max_lon.max(point.longitude());
			bbox.max_lat = bbox.max_lat.max(point.latitude());
			count += 1;
		}
		if count == 0 {
			return Err(GeoError::StructuralMismatch(
				"cannot compute the bounding box of an empty point set".into(),
			));
		}
		Ok(bbox)
	}

	pub fn from_geometry(geometry: &Geometry) -> Result<Self> {
		Self::from_points(&geometry.points())
	}

	/// Returns `(min_lon, min_lat, max_lon, max_lat)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.min_lon, self.min_lat, self.max_lon, self.max_lat)
	}

	/// Returns `[min_lon, min_lat, max_lon, max_lat]`, the GeoJSON `bbox` order.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.min_lon, self.min_lat, self.max_lon, self.max_lat]
	}

	/// Builds the closed rectangle NW → NE → SE → SW → NW.
	pub fn to_polygon(&self) -> Result<Polygon> {
		let north_west = Point::new(self.max_lat, self.min_lon)?;
		Polygon::new(vec![vec![
			north_west,
			Point::new(self.max_lat, self.max_lon)?,
			Point::new(self.min_lat, self.max_lon)?,
			Point::new(self.min_lat, self.min_lon)?,
			north_west,
		]])
	}
}

/// Returns the bounding rectangle of a geometry as a closed polygon.
pub fn get_bbox(geometry: &Geometry) -> Result<Polygon> {
	BBox::from_geometry(geometry)?.to_polygon()
}
