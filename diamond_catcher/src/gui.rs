use eframe::egui;

use crate::Config;
use crate::canvas::Canvas;
use crate::display::{canvas_display, color_image};
use crate::game::{Action, Direction, Event, Game};
use crate::scene;
use crate::timer::TickTimer;

pub struct CatcherGui {
	game: Game,
	canvas: Canvas,
	texture: Option<egui::TextureHandle>,
	timer: TickTimer,
}

impl CatcherGui {
	pub fn new(config: Config) -> Self {
		CatcherGui {
			game: Game::new(config),
			canvas: Canvas::new(config.canvas_size, config.point_size)
				.with_closed_lines(config.closed_lines),
			texture: None,
			timer: TickTimer::from_config(&config),
		}
	}

	/// Lines to greet the player with before the window opens.
	pub fn banner(&self) -> Vec<String> {
		let mut lines: Vec<String> = [
			"=== Catch the Diamonds ===",
			"Controls:",
			"  LEFT/RIGHT arrows: Move catcher",
			"  Click restart button (left arrow): Restart",
			"  Click pause button (middle): Pause/Resume",
			"  Click exit button (X): Quit",
		].iter().map(|s| s.to_string()).collect();

		lines.push(format!("Score: {}", self.game.score()));
		lines
	}

	fn handle_keys(&mut self, ctx: &egui::Context) {
		let (left, right) = ctx.input(|i| (
			i.key_pressed(egui::Key::ArrowLeft),
			i.key_pressed(egui::Key::ArrowRight),
		));

		if left { self.game.move_basket(Direction::Left); }
		if right { self.game.move_basket(Direction::Right); }
	}

	fn run_ticks(&mut self) {
		if !self.game.running() {
			self.timer.reset();
			return;
		}

		for _ in 0..self.timer.tick() {
			match self.game.tick() {
				Some(Event::Caught { score }) => log::info!("Score: {score}"),
				Some(Event::GameOver { final_score }) => {
					log::info!("Game Over! Final Score: {final_score}");
					break;
				},
				None => {},
			}
		}
	}

	/// Returns true if the player asked to leave.
	fn handle_click(&mut self, pos: (f32, f32)) -> bool {
		match self.game.click(pos) {
			Some(Action::Paused) => log::info!("Game paused"),
			Some(Action::Resumed) => log::info!("Game resumed"),
			Some(Action::Restarted) => log::info!("Game restarted!"),
			Some(Action::Exit) => {
				log::info!("Goodbye! Final Score: {}", self.game.score());
				return true;
			},
			None => {},
		}
		false
	}

	fn upload(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
		let image = color_image(&self.canvas);
		let options = egui::TextureOptions::NEAREST;

		// handles are refcounted, cloning one doesn't copy pixels
		if let Some(texture) = &mut self.texture {
			texture.set(image, options);
			texture.clone()
		} else {
			let texture = ctx.load_texture("scene", image, options);
			self.texture = Some(texture.clone());
			texture
		}
	}
}

impl eframe::App for CatcherGui {
	fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
		self.handle_keys(ctx);
		self.run_ticks();

		scene::draw(&mut self.canvas, &self.game);
		let texture = self.upload(ctx);

		egui::TopBottomPanel::top("Status").show(ctx, |ui| {
			ui.horizontal(|ui| {
				ui.monospace(format!("Score: {}", self.game.score()));
				ui.separator();
				if self.game.over() {
					ui.colored_label(egui::Color32::RED, "Game over. Click the arrow to restart.");
				} else if self.game.paused() {
					ui.label("Paused");
				} else {
					ui.label("←/→ to move");
				}
			});
		});

		let mut exit = false;
		egui::CentralPanel::default()
			.frame(egui::Frame::none().fill(egui::Color32::BLACK))
			.show(ctx, |ui| {
				ui.vertical_centered(|ui| {
					let (_, click) = canvas_display(ui, &texture, 1.0);
					if let Some(pos) = click {
						exit = self.handle_click(pos);
					}
				});
			});

		if exit {
			#[cfg(not(target_arch = "wasm32"))]
			frame.close();
		}
		#[cfg(target_arch = "wasm32")]
		let _ = frame;

		if self.game.running() {
			ctx.request_repaint();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn banner_lists_controls_then_score() {
		let gui = CatcherGui::new(Config::default());
		let banner = gui.banner();

		assert_eq!(banner[0], "=== Catch the Diamonds ===");
		assert!(banner.iter().any(|l| l.contains("LEFT/RIGHT")));
		assert_eq!(banner.last().map(String::as_str), Some("Score: 0"));
	}
}
