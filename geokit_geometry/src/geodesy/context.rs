use super::{DistanceFormula, GeodesicCalculator, ReferenceCalculator};
use crate::{CompositeGeometryTrait, Ellipsoid, GeoError, Geometry, Point, Polygon, Result};
use std::{
	f64::consts::{FRAC_PI_2, PI},
	sync::Arc,
};

/// The explicit computation context of the distance engine: the active ellipsoid,
/// the default distance formula and the calculator implementation.
///
/// Contexts are plain values. Computations using different ellipsoids can run
/// concurrently, each with its own context.
#[derive(Clone, Debug)]
pub struct GeodesyContext {
	ellipsoid: Ellipsoid,
	formula: DistanceFormula,
	calculator: Arc<dyn GeodesicCalculator>,
}

impl Default for GeodesyContext {
	/// Earth with the Haversine formula.
	fn default() -> Self {
		Self::new(Ellipsoid::earth(), DistanceFormula::default())
	}
}

impl GeodesyContext {
	#[must_use]
	pub fn new(ellipsoid: Ellipsoid, formula: DistanceFormula) -> Self {
		Self {
			ellipsoid,
			formula,
			calculator: Arc::new(ReferenceCalculator),
		}
	}

	#[must_use]
	pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
		self.ellipsoid = ellipsoid;
		self
	}

	#[must_use]
	pub fn with_formula(mut self, formula: DistanceFormula) -> Self {
		self.formula = formula;
		self
	}

	/// Replaces the calculator, e.g. with an accelerated implementation.
	#[must_use]
	pub fn with_calculator(mut self, calculator: Arc<dyn GeodesicCalculator>) -> Self {
		self.calculator = calculator;
		self
	}

	#[must_use]
	pub fn ellipsoid(&self) -> &Ellipsoid {
		&self.ellipsoid
	}

	#[must_use]
	pub fn formula(&self) -> DistanceFormula {
		self.formula
	}

	/// Distance in `unit` using the context's default formula.
	pub fn distance(&self, from: &Point, to: &Point, unit: &str) -> Result<f64> {
		self.distance_with(from, to, unit, self.formula)
	}

	/// Distance in `unit` using the given formula.
	pub fn distance_with(&self, from: &Point, to: &Point, unit: &str, formula: DistanceFormula) -> Result<f64> {
		match formula {
			DistanceFormula::Haversine => self.haversine(from, to, unit),
			DistanceFormula::Vincenty => self.vincenty(from, to, unit),
		}
	}

	/// Great-circle distance in `unit` on a sphere of the ellipsoid's mean radius.
	pub fn haversine(&self, from: &Point, to: &Point, unit: &str) -> Result<f64> {
		Ok(self.calculator.haversine(from, to) * self.ellipsoid.radius(unit)?)
	}

	/// Ellipsoidal distance in `unit`.
	///
	/// The distance is floored to millimeters before conversion. Fails with
	/// [`GeoError::ConvergenceFailure`] when the iteration does not converge, which
	/// happens for nearly antipodal points.
	pub fn vincenty(&self, from: &Point, to: &Point, unit: &str) -> Result<f64> {
		let multiplier = self.ellipsoid.multiplier(unit)?;
		Ok(self.calculator.vincenty(from, to, &self.ellipsoid)? / multiplier)
	}

	/// Initial bearing from `from` to `to` in degrees, within `[0, 360)`.
	#[must_use]
	pub fn initial_bearing(&self, from: &Point, to: &Point) -> f64 {
		self.calculator.initial_bearing(from, to)
	}

	/// Bearing on arrival at `to` in degrees, within `[0, 360)`.
	#[must_use]
	pub fn final_bearing(&self, from: &Point, to: &Point) -> f64 {
		(self.calculator.initial_bearing(to, from) + 180.0) % 360.0
	}

	/// Projects a point `distance` away from `start` along `bearing` (degrees),
	/// on a sphere of the ellipsoid's radius in `unit`.
	pub fn relative_point(&self, start: &Point, distance: f64, bearing: f64, unit: &str) -> Result<Point> {
		let angular = distance / self.ellipsoid.radius(unit)?;
		let bearing = bearing.to_radians();
		let (lat1, lon1) = (start.lat_rad(), start.lon_rad());

		let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
		let lon2 = lon1 + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

		point_from_radians(lat2, lon2)
	}

	/// Interpolates along the great circle from `from` to `to`.
	///
	/// `fraction` must be within `[0, 1]`; 0 returns `from`, 1 returns `to`.
	pub fn fraction_along(&self, from: &Point, to: &Point, fraction: f64) -> Result<Point> {
		if !(0.0..=1.0).contains(&fraction) {
			return Err(GeoError::OutOfRangeFraction(fraction));
		}
		if fraction == 0.0 {
			return Ok(*from);
		}
		if fraction == 1.0 {
			return Ok(*to);
		}
		if fraction == 0.5 {
			return self.midpoint(from, to);
		}

		let delta = self.calculator.haversine(from, to);
		if delta == 0.0 {
			return Ok(*from);
		}
		let a = ((1.0 - fraction) * delta).sin() / delta.sin();
		let b = (fraction * delta).sin() / delta.sin();

		let (lat1, lon1) = (from.lat_rad(), from.lon_rad());
		let (lat2, lon2) = (to.lat_rad(), to.lon_rad());
		let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
		let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
		let z = a * lat1.sin() + b * lat2.sin();

		point_from_radians(z.atan2(x.hypot(y)), y.atan2(x))
	}

	/// The great-circle midpoint between two points.
	pub fn midpoint(&self, from: &Point, to: &Point) -> Result<Point> {
		let (lat1, lon1) = (from.lat_rad(), from.lon_rad());
		let lat2 = to.lat_rad();
		let d_lon = to.lon_rad() - lon1;

		let bx = lat2.cos() * d_lon.cos();
		let by = lat2.cos() * d_lon.sin();
		let lat = (lat1.sin() + lat2.sin()).atan2((lat1.cos() + bx).hypot(by));
		let lon = lon1 + by.atan2(lat1.cos() + bx);

		point_from_radians(lat, lon)
	}

	/// The rectangle enclosing the circle of `radius` around `center`, as the closed
	/// polygon NW → NE → SE → SW → NW.
	///
	/// Longitudes wrap across the antimeridian, so the western edge may lie east of the
	/// eastern one. A circle reaching a pole spans all longitudes.
	pub fn bbox_by_radius(&self, center: &Point, radius: f64, unit: &str) -> Result<Polygon> {
		let angular = radius / self.ellipsoid.radius(unit)?;
		let lat = center.lat_rad();

		let reaches_north_pole = lat + angular >= FRAC_PI_2;
		let reaches_south_pole = lat - angular <= -FRAC_PI_2;

		let north = if reaches_north_pole {
			90.0
		} else {
			self.relative_point(center, radius, 0.0, unit)?.latitude()
		};
		let south = if reaches_south_pole {
			-90.0
		} else {
			self.relative_point(center, radius, 180.0, unit)?.latitude()
		};

		let ratio = angular.sin() / lat.cos();
		let (west, east) = if reaches_north_pole || reaches_south_pole || ratio >= 1.0 {
			(-180.0, 180.0)
		} else {
			let d_lon = ratio.asin().to_degrees();
			(
				wrap_longitude(center.longitude() - d_lon),
				wrap_longitude(center.longitude() + d_lon),
			)
		};
		log::trace!("bbox around {center:?} with radius {radius}{unit}: N {north} S {south} W {west} E {east}");

		let north_west = Point::new(north, west)?;
		Polygon::new(vec![vec![
			north_west,
			Point::new(north, east)?,
			Point::new(south, east)?,
			Point::new(south, west)?,
			north_west,
		]])
	}

	/// Converts a distance between two units of the ellipsoid's unit table.
	pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
		Ok(value * self.ellipsoid.multiplier(from_unit)? / self.ellipsoid.multiplier(to_unit)?)
	}

	/// Sum of the distances between consecutive points, using the default formula.
	pub fn path_length(&self, points: &[Point], unit: &str) -> Result<f64> {
		points
			.windows(2)
			.map(|pair| self.distance(&pair[0], &pair[1], unit))
			.sum()
	}

	/// Total length of every line and ring of a geometry. Points have no length.
	pub fn geometry_length(&self, geometry: &Geometry, unit: &str) -> Result<f64> {
		let polygon_length = |polygon: &Polygon| -> Result<f64> {
			polygon.iter().map(|ring| self.path_length(ring.as_slice(), unit)).sum()
		};
		match geometry {
			Geometry::Point(_) | Geometry::MultiPoint(_) => Ok(0.0),
			Geometry::LineString(line) => self.path_length(line.as_slice(), unit),
			Geometry::Polygon(polygon) => polygon_length(polygon),
			Geometry::MultiLineString(lines) => lines.iter().map(|line| self.path_length(line.as_slice(), unit)).sum(),
			Geometry::MultiPolygon(polygons) => polygons.iter().map(polygon_length).sum(),
			Geometry::GeometryCollection(collection) => {
				collection.iter().map(|child| self.geometry_length(child, unit)).sum()
			}
		}
	}
}

fn wrap_longitude(lon: f64) -> f64 {
	if lon < -180.0 {
		lon + 360.0
	} else if lon > 180.0 {
		lon - 360.0
	} else {
		lon
	}
}

fn point_from_radians(lat: f64, lon: f64) -> Result<Point> {
	let lat = lat.to_degrees().clamp(-90.0, 90.0);
	let lon = (lon + 3.0 * PI) % (2.0 * PI) - PI;
	Point::new(lat, lon.to_degrees().clamp(-180.0, 180.0))
}
