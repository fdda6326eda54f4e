use midpoint::Coord;

/// Tunables for a game session. The defaults reproduce the original
/// arcade feel; nothing is read from disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
	/// Canvas size in pixels. The scene origin sits in the middle.
	pub canvas_size: (usize, usize),
	
	/// Side of the square brush every rasterized point is stamped with.
	pub point_size: usize,
	
	/// Draw lines with both endpoints instead of the half-open default.
	pub closed_lines: bool,
	
	/// Microseconds between gravity ticks (native timer).
	pub tick_interval_us: u64,
	
	/// Frames between gravity ticks (web timer). Below 1.0 means several
	/// ticks per frame.
	pub tick_interval_frames: f32,
	
	/// Upper bound on ticks replayed in one frame after a stall.
	pub max_ticks_per_frame: usize,
	
	pub basket_step: Coord,
	pub basket_limit: Coord,
	
	/// Distance the gem falls per tick before any speed-up.
	pub gravity: f32,
	
	/// Added to the fall speed on every catch.
	pub speedup: f32,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			canvas_size: (500, 500),
			point_size: 3,
			closed_lines: false,
			tick_interval_us: 1_000,
			tick_interval_frames: 1.0 / 16.0,
			max_ticks_per_frame: 250,
			basket_step: 20,
			basket_limit: 225,
			gravity: 0.1,
			speedup: 0.01,
		}
	}
}
