use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::ops::Neg;

use super::Point;

/// One of the eight symmetric regions a segment's direction can fall in.
///
/// Octant 0 is the canonical one: `dx >= 0`, `dy >= 0`, `dy <= dx`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Octant {
	Octant0, Octant1, Octant2, Octant3,
	Octant4, Octant5, Octant6, Octant7,
}
impl From<u8> for Octant {
	fn from(n: u8) -> Self {
		use Octant::*;
		match n % 8 {
			0 => Octant0, 1 => Octant1,
			2 => Octant2, 3 => Octant3,
			4 => Octant4, 5 => Octant5,
			6 => Octant6, _ => Octant7,
		}
	}
}

impl Octant {
	pub const ALL: [Octant; 8] = {
		use Octant::*;
		[Octant0, Octant1, Octant2, Octant3, Octant4, Octant5, Octant6, Octant7]
	};

	pub const fn index(self) -> u8 { self as u8 }

	/// Classifies the segment running from `a` to `b`.
	pub fn classify(a: Point, b: Point) -> Self {
		// i32 deltas can overflow; i64 ones can't
		let delta = (b.0 as i64 - a.0 as i64, b.1 as i64 - a.1 as i64);
		Octant::from_delta(delta)
	}

	/// Steep deltas (`|dy| > |dx|`) land in 1, 2, 5 or 6; shallow ones and
	/// exact diagonals in 0, 3, 4 or 7. Any delta with a zero component,
	/// the degenerate `(0, 0)` included, is octant 0.
	pub fn from_delta(delta: (i64, i64)) -> Self {
		use Octant::*;

		let steep = delta.1.abs() > delta.0.abs();
		let signs: (Ordering, Ordering) = (delta.0.cmp(&0), delta.1.cmp(&0));

		match (steep, signs) {
			(true,  (Greater, Greater)) => Octant1,
			(true,  (Less,    Greater)) => Octant2,
			(true,  (Less,    Less   )) => Octant5,
			(true,  (Greater, Less   )) => Octant6,

			(false, (Greater, Greater)) => Octant0,
			(false, (Less,    Greater)) => Octant3,
			(false, (Less,    Less   )) => Octant4,
			(false, (Greater, Less   )) => Octant7,

			// axis-aligned and zero-length segments
			(_, (Equal, _)) | (_, (_, Equal)) => Octant0,
		}
	}

	/// Folds a point from this octant into octant 0.
	///
	/// Negating `i32::MIN` overflows, so rasterization folds `i64`s.
	pub fn to_canonical<T: Copy + Neg<Output = T>>(self, p: (T, T)) -> (T, T) {
		use Octant::*;
		match self {
			Octant0 => ( p.0,  p.1), Octant1 => ( p.1,  p.0),
			Octant2 => ( p.1, -p.0), Octant3 => (-p.0,  p.1),
			Octant4 => (-p.0, -p.1), Octant5 => (-p.1, -p.0),
			Octant6 => (-p.1,  p.0), Octant7 => ( p.0, -p.1),
		}
	}

	/// Unfolds a point from octant 0 back into this octant.
	/// Kept as its own table rather than derived from `to_canonical`.
	pub fn from_canonical<T: Copy + Neg<Output = T>>(self, p: (T, T)) -> (T, T) {
		use Octant::*;
		match self {
			Octant0 => ( p.0,  p.1), Octant1 => ( p.1,  p.0),
			Octant2 => (-p.1,  p.0), Octant3 => (-p.0,  p.1),
			Octant4 => (-p.0, -p.1), Octant5 => (-p.1, -p.0),
			Octant6 => ( p.1, -p.0), Octant7 => ( p.0, -p.1),
		}
	}
}
