//! Xorshift64, enough to scatter gems around.

pub struct Rng {
	state: u64,
}

impl Rng {
	/// A zero state would make xorshift emit zeroes forever.
	pub fn seeded(seed: u64) -> Self {
		Rng { state: if seed == 0 { Rng::default().state } else { seed } }
	}
	
	#[cfg(not(target_arch = "wasm32"))]
	pub fn from_clock() -> Self {
		use std::time::{SystemTime, UNIX_EPOCH};
		
		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|d| d.as_nanos() as u64)
			.unwrap_or_default();
		Rng::seeded(nanos ^ Rng::default().state)
	}
	
	// SystemTime::now panics on wasm32-unknown-unknown
	#[cfg(target_arch = "wasm32")]
	pub fn from_clock() -> Self {
		Rng::default()
	}
	
	pub fn next_u64(&mut self) -> u64 {
		self.state ^= self.state << 13;
		self.state ^= self.state >> 7;
		self.state ^= self.state << 17;
		self.state
	}
	
	pub fn coin(&mut self) -> bool {
		self.next_u64() >> 63 == 1
	}
	
	/// Uniform-ish integer in `lo..=hi`. Modulo bias is irrelevant at
	/// these range sizes.
	pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
		debug_assert!(lo <= hi);
		let span = (hi as i64 - lo as i64 + 1) as u64;
		(lo as i64 + (self.next_u64() % span) as i64) as i32
	}
}

impl Default for Rng {
	fn default() -> Self {
		Rng { state: 0xcafebabedeadbeef }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	
	#[test]
	fn range_stays_inclusive() {
		let mut rng = Rng::seeded(7);
		let mut seen_lo = false;
		let mut seen_hi = false;
		for _ in 0..10_000 {
			let n = rng.range(-3, 3);
			assert!((-3..=3).contains(&n));
			seen_lo |= n == -3;
			seen_hi |= n == 3;
		}
		assert!(seen_lo && seen_hi);
	}
	
	#[test]
	fn zero_seed_is_not_stuck() {
		let mut rng = Rng::seeded(0);
		assert_ne!(rng.next_u64(), 0);
	}
	
	#[test]
	fn same_seed_same_stream() {
		let mut a = Rng::seeded(360);
		let mut b = Rng::seeded(360);
		for _ in 0..16 {
			assert_eq!(a.next_u64(), b.next_u64());
		}
	}
}
