//! # geokit
//!
//! Command line toolkit around [`geokit_geometry`]: WKT/GeoJSON conversion, distances and
//! bearings, and bounding boxes, configured through an optional YAML file.

pub mod config;

pub use geokit_geometry as geometry;
