//! Distance, bearing and projection math on a reference ellipsoid.

mod calculator;
mod context;
mod dms;
mod formula;

pub use calculator::*;
pub use context::*;
pub use dms::*;
pub use formula::*;
