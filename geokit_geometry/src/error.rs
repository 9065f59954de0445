//! Error type used by the crate.

use thiserror::Error;

/// Errors raised by geometry construction, the codecs and the geodesic engine.
///
/// Every error is reported at the point of detection. The computations are deterministic,
/// so retrying an operation always reproduces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
	/// Latitude or longitude out of range, or not finite.
	#[error("invalid coordinate: {0}")]
	InvalidCoordinate(String),

	/// A polygon ring that cannot be closed or has too few points.
	#[error("malformed ring: {0}")]
	MalformedRing(String),

	/// Unknown WKT keyword or GeoJSON `type` tag.
	#[error("unsupported geometry type '{0}'")]
	UnsupportedGeometryType(String),

	/// Nested coordinate array does not have the shape the geometry type expects.
	#[error("structural mismatch: {0}")]
	StructuralMismatch(String),

	/// Unit token not present in the ellipsoid's multiplier table.
	#[error("unknown unit '{0}'")]
	UnknownUnit(String),

	/// Interpolation fraction outside of `[0, 1]`.
	#[error("fraction {0} is outside of [0, 1]")]
	OutOfRangeFraction(f64),

	/// Vincenty iteration budget exhausted.
	#[error("vincenty formula failed to converge after {0} iterations")]
	ConvergenceFailure(usize),

	/// Collection input that is not a list of geometries.
	#[error("invalid geometry collection: {0}")]
	InvalidGeometryCollection(String),

	/// Syntax error in WKT text or JSON text.
	#[error("{message} at position {position}")]
	Parse { message: String, position: usize },
}

/// Result alias with [`GeoError`] as the error type.
pub type Result<T> = std::result::Result<T, GeoError>;
