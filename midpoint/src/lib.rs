//! Integer line rasterization by way of the midpoint algorithm.
//!
//! Every segment is classified into one of eight octants, folded into
//! octant 0 (`dx >= dy >= 0`), stepped there, and each pixel is unfolded
//! back on the way out.

pub type Coord = i32;
pub type Point = (Coord, Coord);

pub mod octant;
pub mod line;

pub use octant::Octant;
pub use line::{Line, rasterize};
