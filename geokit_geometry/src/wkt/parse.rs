use super::cursor::WktCursor;
use crate::{CoordinateArray, GeoError, Geometry, GeometryCollection, GeometryType, Result};

/// Maximum nesting of geometry collections, the same limit serde_json applies to GeoJSON.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a single WKT geometry. Keywords are case-insensitive; trailing input is an error.
pub fn parse_wkt(text: &str) -> Result<Geometry> {
	let mut cursor = WktCursor::new(text);
	let geometry = parse_geometry(&mut cursor, 0)?;
	cursor.skip_whitespace();
	if !cursor.is_at_end() {
		return Err(cursor.format_error("unexpected trailing input"));
	}
	log::trace!("parsed WKT {}", geometry.type_name());
	Ok(geometry)
}

fn parse_geometry(cursor: &mut WktCursor, depth: usize) -> Result<Geometry> {
	if depth > MAX_NESTING_DEPTH {
		return Err(cursor.format_error(&format!(
			"geometry collections nested deeper than {MAX_NESTING_DEPTH} levels"
		)));
	}
	let keyword = cursor.parse_keyword();
	if keyword.is_empty() {
		return Err(cursor.format_error("expected a geometry keyword"));
	}
	let geometry_type = GeometryType::from_name(&keyword)?;

	cursor.skip_whitespace();
	if let Some(b'a'..=b'z' | b'A'..=b'Z') = cursor.peek() {
		let word = cursor.parse_keyword();
		if !word.eq_ignore_ascii_case("EMPTY") {
			return Err(cursor.format_error(&format!("expected '(' or EMPTY, found '{word}'")));
		}
		return empty_geometry(geometry_type);
	}

	let array = match geometry_type {
		GeometryType::Point => {
			cursor.expect_byte(b'(')?;
			let position = parse_position(cursor)?;
			cursor.expect_byte(b')')?;
			position
		}
		GeometryType::LineString => parse_nested(cursor, 1, false)?,
		GeometryType::Polygon => parse_nested(cursor, 2, false)?,
		GeometryType::MultiPoint => CoordinateArray::Array(parse_list(cursor, true, parse_multi_point_entry)?),
		GeometryType::MultiLineString => parse_nested(cursor, 2, true)?,
		GeometryType::MultiPolygon => parse_nested(cursor, 3, true)?,
		GeometryType::GeometryCollection => {
			let geometries = parse_list(cursor, true, |c| parse_geometry(c, depth + 1))?;
			return Ok(Geometry::GeometryCollection(GeometryCollection::new(geometries)));
		}
	};
	Geometry::from_array(geometry_type, &array)
}

fn empty_geometry(geometry_type: GeometryType) -> Result<Geometry> {
	if !geometry_type.may_be_empty() {
		return Err(GeoError::StructuralMismatch(format!(
			"{} EMPTY is not supported",
			geometry_type.wkt_keyword()
		)));
	}
	if geometry_type == GeometryType::GeometryCollection {
		return Ok(Geometry::GeometryCollection(GeometryCollection::default()));
	}
	Geometry::from_array(geometry_type, &CoordinateArray::Array(Vec::new()))
}

/// `(item, item, ...)`; an empty `()` is accepted only if `allow_empty` is set.
fn parse_list<T>(
	cursor: &mut WktCursor,
	allow_empty: bool,
	mut parse_item: impl FnMut(&mut WktCursor) -> Result<T>,
) -> Result<Vec<T>> {
	cursor.expect_byte(b'(')?;
	let mut items = Vec::new();
	if cursor.consume_if(b')') {
		if allow_empty {
			return Ok(items);
		}
		return Err(cursor.format_error("empty list"));
	}
	loop {
		items.push(parse_item(cursor)?);
		if cursor.consume_if(b',') {
			continue;
		}
		cursor.expect_byte(b')')?;
		return Ok(items);
	}
}

/// Parenthesized lists nested `depth` levels deep, with positions at the innermost level.
fn parse_nested(cursor: &mut WktCursor, depth: usize, allow_empty: bool) -> Result<CoordinateArray> {
	let items = if depth <= 1 {
		parse_list(cursor, allow_empty, parse_position)?
	} else {
		parse_list(cursor, allow_empty, |c| parse_nested(c, depth - 1, false))?
	};
	Ok(CoordinateArray::Array(items))
}

/// `lon lat`
fn parse_position(cursor: &mut WktCursor) -> Result<CoordinateArray> {
	let longitude = cursor.parse_number()?;
	let latitude = cursor.parse_number()?;
	Ok(CoordinateArray::position(longitude, latitude))
}

/// Either `(lon lat)` or a bare `lon lat`.
fn parse_multi_point_entry(cursor: &mut WktCursor) -> Result<CoordinateArray> {
	if cursor.consume_if(b'(') {
		let position = parse_position(cursor)?;
		cursor.expect_byte(b')')?;
		Ok(position)
	} else {
		parse_position(cursor)
	}
}
