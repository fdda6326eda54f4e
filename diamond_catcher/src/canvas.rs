use midpoint::{Coord, Line, Point};

/// `0x00RRGGBB`
pub type Rgb = u32;

/// Builds an [`Rgb`] from channels in `0.0..=1.0`.
pub fn rgb(r: f32, g: f32, b: f32) -> Rgb {
	let ch = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
	(ch(r) << 16) | (ch(g) << 8) | ch(b)
}

/// A software pixel target addressed in scene coordinates: the origin is
/// the centre of the buffer and +y points up.
pub struct Canvas {
	buf: Box<[Rgb]>,
	size: (usize, usize),
	point_size: usize,
	closed_lines: bool,
}
impl Canvas {
	pub fn new(size: (usize, usize), point_size: usize) -> Self {
		Canvas {
			buf: vec![0; size.0 * size.1].into_boxed_slice(),
			size,
			point_size: point_size.max(1),
			closed_lines: false,
		}
	}

	pub fn with_closed_lines(mut self, closed: bool) -> Self {
		self.closed_lines = closed;
		self
	}

	pub fn size(&self) -> (usize, usize) { self.size }

	/// Row-major, top row first.
	pub fn pixels(&self) -> &[Rgb] { &self.buf }

	pub fn clear(&mut self, c: Rgb) {
		self.buf.fill(c);
	}

	/// Buffer column and row of a scene point, if it's on the canvas.
	fn to_cell(&self, p: Point) -> Option<(usize, usize)> {
		let col = p.0 as i64 + (self.size.0 / 2) as i64;
		let row = (self.size.1 / 2) as i64 - p.1 as i64;

		let on_canvas =
			col >= 0 && col < self.size.0 as i64 &&
			row >= 0 && row < self.size.1 as i64;

		on_canvas.then_some((col as usize, row as usize))
	}

	#[inline]
	fn cell_to_index(&self, (col, row): (usize, usize)) -> usize {
		col + row * self.size.0
	}

	pub fn pixel(&self, p: Point) -> Option<Rgb> {
		self.to_cell(p).map(|cell| self.buf[self.cell_to_index(cell)])
	}

	/// Stamps the brush centred on `p`. Whatever falls off the canvas is
	/// clipped; returns `None` if the centre pixel itself was off.
	pub fn plot(&mut self, p: Point, c: Rgb) -> Option<()> {
		let half = (self.point_size / 2) as Coord;
		let span = self.point_size as Coord;

		for dy in 0..span {
			for dx in 0..span {
				if let Some(cell) = self.to_cell((p.0 - half + dx, p.1 + half - dy)) {
					let i = self.cell_to_index(cell);
					self.buf[i] = c;
				}
			}
		}

		self.to_cell(p).map(|_| ())
	}

	/// Rasterizes the segment and plots every point of it.
	pub fn line(&mut self, a: Point, b: Point, c: Rgb) {
		let line = if self.closed_lines { Line::closed(a, b) } else { Line::new(a, b) };

		let (octant, total) = (line.octant(), line.len());

		let clipped = line.filter(|&p| self.plot(p, c).is_none()).count();

		log::trace!("line {a:?} -> {b:?}: octant {octant:?}, {total} points, {clipped} clipped");
	}
}
