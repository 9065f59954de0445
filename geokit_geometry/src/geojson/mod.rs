//! GeoJSON decoding from and encoding to `serde_json` values.

mod decode;
mod encode;

pub use decode::*;
pub use encode::*;
