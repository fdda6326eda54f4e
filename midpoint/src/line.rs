use std::iter::FusedIterator;

use super::{Coord, Point, Octant};

/// Canonical-space point. Folding `i32::MIN` and doubling a delta both
/// need headroom past `Coord`.
type Wide = (i64, i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sweep {
	/// Canonical x never changes; y walks up to and including `last_y`.
	Column { last_y: i64 },

	/// Midpoint stepping along canonical x, stopping before `end_x`.
	Step { end_x: i64, decision: i64, inc_e: i64, inc_ne: i64 },
}

/// Lazily walks the pixels of a segment.
///
/// Points come out in increasing canonical x (or canonical y, for
/// vertical segments), which is not always the order the endpoints were
/// given in. A horizontal segment drawn right-to-left starts at its left
/// end, for example.
///
/// [`Line::new`] is half-open: the stepping sweep never emits the
/// endpoint with the larger canonical x, so a sloped or horizontal segment
/// yields exactly `max(|dx|, |dy|)` points. Vertical segments (and single
/// points) always include both ends. [`Line::closed`] includes the far
/// endpoint in every case.
///
/// Any pair of `i32` endpoints works, `i32::MIN` and `i32::MAX` included.
#[derive(Clone, Debug)]
pub struct Line {
	position: Wide,
	sweep: Sweep,
	octant: Octant,
}
impl Line {
	pub fn new(a: Point, b: Point) -> Self {
		Line::build(a, b, false)
	}

	pub fn closed(a: Point, b: Point) -> Self {
		Line::build(a, b, true)
	}

	fn build(a: Point, b: Point, closed: bool) -> Self {
		let octant = Octant::classify(a, b);

		let mut a = octant.to_canonical(widen(a));
		let mut b = octant.to_canonical(widen(b));

		if a.0 == b.0 {
			let (first_y, last_y) = if a.1 <= b.1 { (a.1, b.1) } else { (b.1, a.1) };
			return Line {
				position: (a.0, first_y),
				sweep: Sweep::Column { last_y },
				octant,
			};
		}

		if b.0 < a.0 {
			std::mem::swap(&mut a, &mut b);
		}

		let delta = (b.0 - a.0, b.1 - a.1);

		Line {
			position: a,
			sweep: Sweep::Step {
				end_x: if closed { b.0 + 1 } else { b.0 },
				decision: 2 * delta.1 - delta.0,
				inc_e: 2 * delta.1,
				inc_ne: 2 * (delta.1 - delta.0),
			},
			octant,
		}
	}

	pub fn octant(&self) -> Octant { self.octant }
}

fn widen(p: Point) -> Wide {
	(p.0 as i64, p.1 as i64)
}

impl Iterator for Line {
	type Item = Point;

	fn next(&mut self) -> Option<Self::Item> {
		let p = self.position;

		match &mut self.sweep {
			Sweep::Column { last_y } => {
				if p.1 > *last_y { return None; }
				self.position.1 += 1;
			},
			Sweep::Step { end_x, decision, inc_e, inc_ne } => {
				if p.0 >= *end_x { return None; }

				if *decision > 0 {
					self.position.1 += 1;
					*decision += *inc_ne;
				} else {
					*decision += *inc_e;
				}

				self.position.0 += 1;
			},
		}

		// every emitted pixel lies between two i32 endpoints
		let (x, y) = self.octant.from_canonical(p);
		Some((x as Coord, y as Coord))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let left = match self.sweep {
			Sweep::Column { last_y } => last_y - self.position.1 + 1,
			Sweep::Step { end_x, .. } => end_x - self.position.0,
		};
		let left = left.max(0) as usize;
		(left, Some(left))
	}
}
impl ExactSizeIterator for Line {}
impl FusedIterator for Line {}

/// Collects every pixel of the half-open segment from `a` to `b`.
pub fn rasterize(a: Point, b: Point) -> Vec<Point> {
	Line::new(a, b).collect()
}
