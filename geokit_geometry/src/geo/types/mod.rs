// The geometry family: `Point` as the leaf, `LineString` and `Polygon` (made of `Ring`s) as
// the singular shapes, their multi counterparts and the heterogeneous `GeometryCollection`.
// All of them are immutable value types sharing `GeometryTrait`; the typed ones can be rebuilt
// from the nested-array representation through `FromCoordinateArray`.

mod coordinates;
mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
