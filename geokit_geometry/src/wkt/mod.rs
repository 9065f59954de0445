//! Well-Known Text reading and writing.
//!
//! Coordinates are written as `longitude latitude`. Numbers use the shortest representation
//! that reads back to the same value, items are separated by `", "`, and empty multi
//! geometries and collections are written as `TYPE EMPTY`.

mod cursor;
mod parse;
mod write;

pub use cursor::WktCursor;
pub use parse::{MAX_NESTING_DEPTH, parse_wkt};
pub use write::*;
