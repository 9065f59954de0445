use crate::{
	CompositeGeometryTrait, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
	Polygon,
};

fn position(point: &Point) -> String {
	format!("{} {}", point.longitude(), point.latitude())
}

/// `(lon lat, lon lat, ...)`
fn point_list<'a>(points: impl IntoIterator<Item = &'a Point>) -> String {
	join(points.into_iter().map(position))
}

/// `((...), (...))`
fn ring_list(polygon: &Polygon) -> String {
	join(polygon.iter().map(|ring| point_list(ring.iter())))
}

fn join(items: impl Iterator<Item = String>) -> String {
	format!("({})", items.collect::<Vec<_>>().join(", "))
}

fn tagged(keyword: &str, body: Option<String>) -> String {
	match body {
		Some(body) => format!("{keyword}{body}"),
		None => format!("{keyword} EMPTY"),
	}
}

pub fn point_to_wkt(point: &Point) -> String {
	format!("POINT({})", position(point))
}

pub fn line_string_to_wkt(line: &LineString) -> String {
	format!("LINESTRING{}", point_list(line.iter()))
}

pub fn polygon_to_wkt(polygon: &Polygon) -> String {
	format!("POLYGON{}", ring_list(polygon))
}

/// Always writes the parenthesized form, `MULTIPOINT((10 40), (40 30))`.
pub fn multi_point_to_wkt(multi: &MultiPoint) -> String {
	let body = (!multi.is_empty()).then(|| join(multi.iter().map(|point| format!("({})", position(point)))));
	tagged("MULTIPOINT", body)
}

pub fn multi_line_string_to_wkt(multi: &MultiLineString) -> String {
	let body = (!multi.is_empty()).then(|| join(multi.iter().map(|line| point_list(line.iter()))));
	tagged("MULTILINESTRING", body)
}

pub fn multi_polygon_to_wkt(multi: &MultiPolygon) -> String {
	let body = (!multi.is_empty()).then(|| join(multi.iter().map(ring_list)));
	tagged("MULTIPOLYGON", body)
}

pub fn geometry_collection_to_wkt(collection: &GeometryCollection) -> String {
	let body = (!collection.is_empty()).then(|| join(collection.iter().map(geometry_to_wkt)));
	tagged("GEOMETRYCOLLECTION", body)
}

pub fn geometry_to_wkt(geometry: &Geometry) -> String {
	match geometry {
		Geometry::Point(g) => point_to_wkt(g),
		Geometry::LineString(g) => line_string_to_wkt(g),
		Geometry::Polygon(g) => polygon_to_wkt(g),
		Geometry::MultiPoint(g) => multi_point_to_wkt(g),
		Geometry::MultiLineString(g) => multi_line_string_to_wkt(g),
		Geometry::MultiPolygon(g) => multi_polygon_to_wkt(g),
		Geometry::GeometryCollection(g) => geometry_collection_to_wkt(g),
	}
}
