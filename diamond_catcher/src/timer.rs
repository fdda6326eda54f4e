use std::time::{Duration, Instant};

use crate::Config;

/// Turns elapsed time into a number of gravity ticks to run this frame.
///
/// There are two implementations because `std::time::Instant` isn't
/// available in WASM builds; there we just count frames instead.
pub enum TickTimer {
	/// Steps every `interval` microseconds of wall-clock time. Leftover
	/// time carries over to the next frame.
	Micro { interval: u64, last: Option<Instant>, cap: usize },

	/// Steps after a set amount of frames. Fractional intervals mean
	/// multiple steps per frame.
	Frames { interval: f32, left: usize, cap: usize },
}
impl TickTimer {
	pub fn micro(interval: u64, cap: usize) -> Self {
		TickTimer::Micro { interval: interval.max(1), last: None, cap }
	}

	pub fn frames(interval: f32, cap: usize) -> Self {
		TickTimer::Frames { interval, left: 0, cap }
	}

	pub fn from_config(config: &Config) -> Self {
		if cfg!(target_arch = "wasm32") {
			TickTimer::frames(config.tick_interval_frames, config.max_ticks_per_frame)
		} else {
			TickTimer::micro(config.tick_interval_us, config.max_ticks_per_frame)
		}
	}

	/// Returns how many times the game should tick.
	pub fn tick(&mut self) -> usize {
		self.tick_with(Instant::now)
	}

	// `now` is only called by the microsecond timer; `Instant::now` panics
	// on wasm32-unknown-unknown.
	fn tick_with(&mut self, now: impl FnOnce() -> Instant) -> usize {
		use TickTimer::*;
		match self {
			Micro { interval, last, cap } => {
				let now = now();
				let Some(last_tick) = *last else {
					*last = Some(now);
					return 0;
				};

				let since = now.saturating_duration_since(last_tick);
				let times = (since.as_micros() / *interval as u128) as usize;

				if times > *cap {
					log::debug!("dropping {} ticks after a stall", times - *cap);
					*last = Some(now);
					*cap
				} else {
					*last = Some(last_tick + Duration::from_micros(times as u64 * *interval));
					times
				}
			},
			Frames { interval, left, cap } => {
				if *left > 0 {
					*left -= 1; 0
				} else if *interval > 1.0 {
					*left = (interval.round() as usize).saturating_sub(1); 1
				} else {
					(interval.recip().round() as usize).min(*cap)
				}
			},
		}
	}

	/// Forgets any time that has passed. Call while the game isn't running.
	pub fn reset(&mut self) {
		use TickTimer::*;
		match self {
			Micro { last, .. } => *last = None,
			Frames { left, .. } => *left = 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn micro_starts_idle() {
		let mut t = TickTimer::micro(1_000, 250);
		assert_eq!(t.tick_with(Instant::now), 0);
	}

	#[test]
	fn micro_carries_remainder() {
		let start = Instant::now();
		let mut t = TickTimer::micro(1_000, 250);
		t.tick_with(|| start);

		assert_eq!(t.tick_with(|| start + Duration::from_micros(2_500)), 2);
		// the half interval left over is not lost
		assert_eq!(t.tick_with(|| start + Duration::from_micros(3_000)), 1);
		assert_eq!(t.tick_with(|| start + Duration::from_micros(3_999)), 0);
	}

	#[test]
	fn micro_caps_after_stall() {
		let start = Instant::now();
		let mut t = TickTimer::micro(1_000, 250);
		t.tick_with(|| start);

		assert_eq!(t.tick_with(|| start + Duration::from_secs(5)), 250);
		assert_eq!(t.tick_with(|| start + Duration::from_secs(5) + Duration::from_micros(1_000)), 1);
	}

	#[test]
	fn micro_reset_forgets() {
		let start = Instant::now();
		let mut t = TickTimer::micro(1_000, 250);
		t.tick_with(|| start);
		t.reset();
		assert_eq!(t.tick_with(|| start + Duration::from_millis(100)), 0);
	}

	#[test]
	fn frames_every_third() {
		let mut t = TickTimer::frames(3.0, 250);
		let ticks: Vec<_> = (0..6).map(|_| t.tick_with(Instant::now)).collect();
		assert_eq!(ticks, [1, 0, 0, 1, 0, 0]);
	}

	#[test]
	fn frames_fractional() {
		let mut t = TickTimer::frames(1.0 / 16.0, 250);
		assert_eq!(t.tick_with(Instant::now), 16);

		let mut t = TickTimer::frames(0.001, 250);
		assert_eq!(t.tick_with(Instant::now), 250);
	}
}
