use midpoint::Coord;

use crate::Config;
use crate::random::Rng;

pub const BASKET_Y: Coord = -230;
pub const BASKET_WIDTH: Coord = 70;
pub const BASKET_HEIGHT: Coord = 20;

pub const GEM_WIDTH: Coord = 40;
pub const GEM_HEIGHT: Coord = 40;
pub const GEM_SPAWN_TOP: f32 = 250.0;
pub const GEM_SPAWN_X: (Coord, Coord) = (-250, 210);

/// A gem whose bottom drops below this is lost.
pub const FLOOR: f32 = -250.0;

/// How far a lost gem is shoved further down, out of the basket's reach.
const LOST_DROP: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction { Left, Right }

/// Something worth telling the player about, produced by [`Game::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
	Caught { score: u32 },
	GameOver { final_score: u32 },
}

/// What a click on the control strip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Paused,
	Resumed,
	Restarted,
	Exit,
}

/// Axis-aligned box in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub left: f32,
	pub right: f32,
	pub bottom: f32,
	pub top: f32,
}
impl Bounds {
	/// Touching edges don't count.
	pub fn overlaps(&self, other: &Bounds) -> bool {
		self.right > other.left && self.left < other.right &&
		self.top > other.bottom && self.bottom < other.top
	}
}

/// Gem colour; each channel is either fully off or fully on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GemColor { pub r: bool, pub g: bool, pub b: bool }

pub struct Game {
	config: Config,
	rng: Rng,

	basket_x: Coord,
	gem_x: Coord,
	gem_top: f32,
	velocity: f32,
	gem_color: GemColor,

	score: u32,
	paused: bool,
	over: bool,
	flash: bool,
}

impl Game {
	pub fn new(config: Config) -> Self {
		Game::with_rng(config, Rng::from_clock())
	}

	pub fn with_rng(config: Config, rng: Rng) -> Self {
		let mut game = Game {
			config,
			rng,
			basket_x: 0,
			gem_x: 0,
			gem_top: GEM_SPAWN_TOP,
			velocity: 0.0,
			gem_color: GemColor { r: true, g: true, b: true },
			score: 0,
			paused: false,
			over: false,
			flash: false,
		};
		game.reset();
		game
	}

	/// Puts everything back the way a fresh game starts. The RNG keeps
	/// going, so the new gem lands somewhere else.
	pub fn reset(&mut self) {
		self.basket_x = 0;
		self.velocity = 0.0;
		self.score = 0;
		self.paused = false;
		self.over = false;
		self.flash = false;
		self.respawn_gem();
	}

	fn respawn_gem(&mut self) {
		self.gem_x = self.rng.range(GEM_SPAWN_X.0, GEM_SPAWN_X.1);
		self.gem_top = GEM_SPAWN_TOP;
		self.gem_color = self.roll_color();
	}

	/// An all-black gem would be invisible on the black backdrop.
	fn roll_color(&mut self) -> GemColor {
		loop {
			let c = GemColor { r: self.rng.coin(), g: self.rng.coin(), b: self.rng.coin() };
			if c.r || c.g || c.b { return c; }
		}
	}

	pub fn running(&self) -> bool { !self.paused && !self.over }

	pub fn basket_x(&self) -> Coord { self.basket_x }
	pub fn gem_x(&self) -> Coord { self.gem_x }
	pub fn gem_top(&self) -> f32 { self.gem_top }
	pub fn gem_color(&self) -> GemColor { self.gem_color }
	pub fn score(&self) -> u32 { self.score }
	pub fn paused(&self) -> bool { self.paused }
	pub fn over(&self) -> bool { self.over }
	pub fn flash(&self) -> bool { self.flash }

	pub fn basket_bounds(&self) -> Bounds {
		let half = (BASKET_WIDTH / 2) as f32;
		let x = self.basket_x as f32;
		Bounds {
			left: x - half,
			right: x + half,
			bottom: BASKET_Y as f32,
			top: (BASKET_Y + BASKET_HEIGHT) as f32,
		}
	}

	pub fn gem_bounds(&self) -> Bounds {
		Bounds {
			left: self.gem_x as f32,
			right: (self.gem_x + GEM_WIDTH) as f32,
			bottom: self.gem_top - GEM_HEIGHT as f32,
			top: self.gem_top,
		}
	}

	/// Advances gravity by one step. Does nothing while paused or over.
	pub fn tick(&mut self) -> Option<Event> {
		if !self.running() { return None; }

		self.gem_top -= self.config.gravity + self.velocity;

		if self.gem_bounds().bottom < FLOOR {
			let final_score = self.score;

			self.over = true;
			self.score = 0;
			self.flash = true;
			self.gem_top -= LOST_DROP;

			return Some(Event::GameOver { final_score });
		}

		if self.gem_bounds().overlaps(&self.basket_bounds()) {
			self.score += 1;
			self.velocity += self.config.speedup;
			self.respawn_gem();

			log::debug!("gem respawned at x = {}, fall speed {:.2}", self.gem_x, self.config.gravity + self.velocity);

			return Some(Event::Caught { score: self.score });
		}

		None
	}

	/// Returns whether the basket actually moved.
	pub fn move_basket(&mut self, dir: Direction) -> bool {
		if !self.running() { return false; }

		let step = self.config.basket_step;
		let limit = self.config.basket_limit;
		let before = self.basket_x;

		self.basket_x = match dir {
			Direction::Left => (self.basket_x - step).max(-limit),
			Direction::Right => (self.basket_x + step).min(limit),
		};

		self.basket_x != before
	}

	pub fn toggle_pause(&mut self) -> Action {
		self.paused = !self.paused;
		if self.paused { Action::Paused } else { Action::Resumed }
	}

	/// Hit-tests a click given in canvas pixels (origin top-left, +y down)
	/// against the three controls and carries out whatever was hit.
	/// `Exit` is left to the caller.
	pub fn click(&mut self, (x, y): (f32, f32)) -> Option<Action> {
		let (w, h) = self.config.canvas_size;
		let x = x - (w / 2) as f32;
		let y = (h as f32 - y) - (h / 2) as f32;

		log::trace!("click at scene ({x}, {y})");

		if -5.0 < x && x < 5.0 && 220.0 < y && y < 240.0 {
			Some(self.toggle_pause())
		} else if (-230.0..=-210.0).contains(&x) && (210.0..=220.0).contains(&y) {
			self.reset();
			Some(Action::Restarted)
		} else if (230.0..=250.0).contains(&x) && (220.0..=240.0).contains(&y) {
			Some(Action::Exit)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn game() -> Game {
		Game::with_rng(Config::default(), Rng::seeded(360))
	}

	#[test]
	fn fresh_game() {
		let g = game();
		assert_eq!(g.basket_x(), 0);
		assert_eq!(g.gem_top(), GEM_SPAWN_TOP);
		assert_eq!(g.score(), 0);
		assert!(g.running());
		assert!(!g.flash());
		assert!((GEM_SPAWN_X.0..=GEM_SPAWN_X.1).contains(&g.gem_x()));
	}

	#[test]
	fn gravity() {
		let mut g = game();
		g.gem_x = 200;
		assert_eq!(g.tick(), None);
		assert!((g.gem_top() - 249.9).abs() < 1e-4);

		g.velocity = 0.5;
		g.tick();
		assert!((g.gem_top() - 249.3).abs() < 1e-4);
	}

	#[test]
	fn paused_gem_hangs() {
		let mut g = game();
		assert_eq!(g.toggle_pause(), Action::Paused);
		for _ in 0..100 { assert_eq!(g.tick(), None); }
		assert_eq!(g.gem_top(), GEM_SPAWN_TOP);
		assert_eq!(g.toggle_pause(), Action::Resumed);
		g.tick();
		assert!(g.gem_top() < GEM_SPAWN_TOP);
	}

	#[test]
	fn catch() {
		let mut g = game();
		g.gem_x = -20;
		g.gem_top = -175.0;

		assert_eq!(g.tick(), Some(Event::Caught { score: 1 }));
		assert_eq!(g.score(), 1);
		assert_eq!(g.gem_top(), GEM_SPAWN_TOP);
		assert!((g.velocity - 0.01).abs() < 1e-6);
		assert!(g.running());
	}

	#[test]
	fn edge_contact_is_not_a_catch() {
		let mut g = game();
		// gem's right edge lands exactly on the basket's left edge
		g.gem_x = -35 - GEM_WIDTH;
		g.gem_top = -190.0;
		assert_eq!(g.tick(), None);
	}

	#[test]
	fn lost_gem_ends_game() {
		let mut g = game();
		g.score = 7;
		g.gem_x = 200;
		g.gem_top = -209.95;

		assert_eq!(g.tick(), Some(Event::GameOver { final_score: 7 }));
		assert!(g.over());
		assert!(g.flash());
		assert_eq!(g.score(), 0);
		assert!(g.gem_top() < -259.0);

		// nothing moves after game over
		let top = g.gem_top();
		assert_eq!(g.tick(), None);
		assert_eq!(g.gem_top(), top);
		assert!(!g.move_basket(Direction::Left));
	}

	#[test]
	fn basket_clamps() {
		let mut g = game();
		for _ in 0..20 { g.move_basket(Direction::Left); }
		assert_eq!(g.basket_x(), -225);
		assert!(!g.move_basket(Direction::Left));

		for _ in 0..30 { g.move_basket(Direction::Right); }
		assert_eq!(g.basket_x(), 225);

		g.move_basket(Direction::Left);
		assert_eq!(g.basket_x(), 205);
	}

	#[test]
	fn basket_frozen_while_paused() {
		let mut g = game();
		g.toggle_pause();
		assert!(!g.move_basket(Direction::Right));
		assert_eq!(g.basket_x(), 0);
	}

	#[test]
	fn click_pause() {
		let mut g = game();
		assert_eq!(g.click((250.0, 20.0)), Some(Action::Paused));
		assert!(g.paused());
		assert_eq!(g.click((250.0, 20.0)), Some(Action::Resumed));
		// the bars' edges aren't part of the button
		assert_eq!(g.click((255.0, 20.0)), None);
	}

	#[test]
	fn click_restart() {
		let mut g = game();
		g.score = 3;
		g.basket_x = 100;
		g.over = true;

		assert_eq!(g.click((30.0, 35.0)), Some(Action::Restarted));
		assert_eq!(g.score(), 0);
		assert_eq!(g.basket_x(), 0);
		assert!(g.running());
	}

	#[test]
	fn click_exit() {
		let mut g = game();
		assert_eq!(g.click((490.0, 20.0)), Some(Action::Exit));
		assert!(g.running());
	}

	#[test]
	fn click_elsewhere() {
		let mut g = game();
		assert_eq!(g.click((250.0, 250.0)), None);
		assert_eq!(g.click((0.0, 0.0)), None);
	}

	#[test]
	fn gems_are_never_black() {
		let mut g = game();
		for _ in 0..500 {
			let c = g.roll_color();
			assert!(c.r || c.g || c.b);
		}
	}
}
