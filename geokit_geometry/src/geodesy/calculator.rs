//! The pure computations behind the distance engine.
//!
//! [`GeodesicCalculator`] is the seam for interchangeable implementations (for example an
//! accelerated one). [`ReferenceCalculator`] is the reference implementation every other
//! implementation has to agree with.

use crate::{Ellipsoid, GeoError, Point, Result};
use std::fmt::Debug;

/// Iteration budget of the Vincenty inverse formula.
pub const VINCENTY_MAX_ITERATIONS: usize = 100;
/// Convergence threshold for `λ` in the Vincenty inverse formula.
pub const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Distance and bearing primitives on which [`GeodesyContext`](super::GeodesyContext) is built.
pub trait GeodesicCalculator: Debug + Send + Sync {
	/// Central angle between two points in radians, on a sphere.
	fn haversine(&self, from: &Point, to: &Point) -> f64;

	/// Ellipsoidal distance in meters, floored to millimeters.
	fn vincenty(&self, from: &Point, to: &Point, ellipsoid: &Ellipsoid) -> Result<f64>;

	/// Initial great-circle bearing in degrees, within `[0, 360)`.
	fn initial_bearing(&self, from: &Point, to: &Point) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceCalculator;

impl GeodesicCalculator for ReferenceCalculator {
	fn haversine(&self, from: &Point, to: &Point) -> f64 {
		let d_lat = to.lat_rad() - from.lat_rad();
		let d_lon = to.lon_rad() - from.lon_rad();

		let a = (d_lat / 2.0).sin().powi(2) + from.lat_rad().cos() * to.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
		// rounding can push antipodal pairs slightly past 1
		let a = a.clamp(0.0, 1.0);
		2.0 * a.sqrt().atan2((1.0 - a).sqrt())
	}

	fn vincenty(&self, from: &Point, to: &Point, ellipsoid: &Ellipsoid) -> Result<f64> {
		let a = ellipsoid.semi_major_axis();
		let b = ellipsoid.semi_minor_axis();
		let f = ellipsoid.flattening();

		let l = to.lon_rad() - from.lon_rad();
		let (sin_u1, cos_u1) = ((1.0 - f) * from.lat_rad().tan()).atan().sin_cos();
		let (sin_u2, cos_u2) = ((1.0 - f) * to.lat_rad().tan()).atan().sin_cos();

		let mut lambda = l;
		for iteration in 1..=VINCENTY_MAX_ITERATIONS {
			let (sin_lambda, cos_lambda) = lambda.sin_cos();
			let sin_sigma =
				((cos_u2 * sin_lambda).powi(2) + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2)).sqrt();
			if sin_sigma == 0.0 {
				// coincident points
				return Ok(0.0);
			}
			let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
			let sigma = sin_sigma.atan2(cos_sigma);
			let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
			let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

			// cos²α is zero on equatorial lines
			let mut cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
			if !cos_2sigma_m.is_finite() {
				cos_2sigma_m = 0.0;
			}

			let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
			let lambda_prev = lambda;
			lambda = l
				+ (1.0 - c)
					* f * sin_alpha
					* (sigma
						+ c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

			if (lambda - lambda_prev).abs() <= VINCENTY_TOLERANCE {
				log::trace!("vincenty converged after {iteration} iterations");

				let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
				let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
				let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
				let delta_sigma = big_b
					* sin_sigma
					* (cos_2sigma_m
						+ big_b / 4.0
							* (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
								- big_b / 6.0
									* cos_2sigma_m * (-3.0 + 4.0 * sin_sigma * sin_sigma)
									* (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
				let distance = b * big_a * (sigma - delta_sigma);

				// millimeter precision
				return Ok((distance * 1000.0).floor() / 1000.0);
			}
		}

		log::warn!("vincenty formula did not converge between {from:?} and {to:?}");
		Err(GeoError::ConvergenceFailure(VINCENTY_MAX_ITERATIONS))
	}

	fn initial_bearing(&self, from: &Point, to: &Point) -> f64 {
		let d_lon = to.lon_rad() - from.lon_rad();
		let y = d_lon.sin() * to.lat_rad().cos();
		let x = from.lat_rad().cos() * to.lat_rad().sin() - from.lat_rad().sin() * to.lat_rad().cos() * d_lon.cos();
		(y.atan2(x).to_degrees() + 360.0) % 360.0
	}
}
