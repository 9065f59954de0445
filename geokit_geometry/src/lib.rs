//! Geometry model, WKT and GeoJSON codecs, and geodesic computations.
//!
//! - [`Geometry`] and its variants are immutable values that validate coordinates and rings
//!   on construction.
//! - [`wkt`] and [`geojson`] translate geometries to and from text and `serde_json` values.
//! - [`geodesy`] computes distances, bearings and projected points on an [`Ellipsoid`]
//!   selected through an explicit [`GeodesyContext`](geodesy::GeodesyContext).
//!
//! ```
//! use geokit_geometry::{CompositeGeometryTrait, Geometry, geodesy::GeodesyContext, wkt::parse_wkt};
//!
//! let Geometry::LineString(line) = parse_wkt("LINESTRING(13.405 52.52, 2.3522 48.8566)").unwrap() else {
//! 	panic!()
//! };
//! let km = GeodesyContext::default().path_length(line.as_slice(), "km").unwrap();
//! assert!((km - 877.46).abs() < 0.1);
//! ```

mod bbox;
mod ellipsoid;
mod error;
mod geo;
pub mod geodesy;
pub mod geojson;
pub mod wkt;

pub use bbox::*;
pub use ellipsoid::*;
pub use error::*;
pub use geo::*;
