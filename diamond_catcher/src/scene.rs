//! Everything on screen, built out of nothing but rasterized line segments.

use crate::canvas::{rgb, Canvas, Rgb};
use crate::game::{Game, GemColor, BASKET_HEIGHT, BASKET_WIDTH, BASKET_Y, GEM_HEIGHT, GEM_WIDTH};

pub const BACKGROUND: Rgb = 0x000000;
pub const RED: Rgb = 0xFF0000;
pub const AMBER: Rgb = 0xFFFF00;

/// How far each slanted side of the basket leans in at the bottom.
const BASKET_LEAN: i32 = 10;

pub fn draw(canvas: &mut Canvas, game: &Game) {
	canvas.clear(BACKGROUND);

	draw_basket(canvas, game);
	draw_gem(canvas, game);
	draw_controls(canvas, game.paused());
}

fn basket_color(flash: bool) -> Rgb {
	let fade = if flash { 0.0 } else { 1.0 };
	rgb(1.0, fade, fade)
}

fn gem_color(c: GemColor) -> Rgb {
	let ch = |on: bool| if on { 1.0 } else { 0.0 };
	rgb(ch(c.r), ch(c.g), ch(c.b))
}

pub fn draw_basket(canvas: &mut Canvas, game: &Game) {
	let c = basket_color(game.flash());

	let left = game.basket_x() - BASKET_WIDTH / 2;
	let right = game.basket_x() + BASKET_WIDTH / 2;
	let top = BASKET_Y + BASKET_HEIGHT;
	let bottom = BASKET_Y;

	canvas.line((left, top), (right, top), c);
	canvas.line((left, top), (left + BASKET_LEAN, bottom), c);
	canvas.line((right, top), (right - BASKET_LEAN, bottom), c);
	canvas.line((right - BASKET_LEAN, bottom), (left + BASKET_LEAN, bottom), c);
}

pub fn draw_gem(canvas: &mut Canvas, game: &Game) {
	let c = gem_color(game.gem_color());

	let left = game.gem_x();
	let right = left + GEM_WIDTH;
	let mid_x = left + GEM_WIDTH / 2;
	let top = game.gem_top().round() as i32;
	let mid_y = top - GEM_HEIGHT / 2;
	let bottom = top - GEM_HEIGHT;

	canvas.line((mid_x, top), (left, mid_y), c);
	canvas.line((mid_x, top), (right, mid_y), c);
	canvas.line((left, mid_y), (mid_x, bottom), c);
	canvas.line((right, mid_y), (mid_x, bottom), c);
}

pub fn draw_controls(canvas: &mut Canvas, paused: bool) {
	// restart: arrow pointing left
	canvas.line((-230, 220), (-210, 220), RED);
	canvas.line((-230, 220), (-220, 230), RED);
	canvas.line((-230, 220), (-220, 210), RED);

	if paused {
		// play triangle
		canvas.line((-5, 220), (-5, 240), AMBER);
		canvas.line((-5, 220), (0, 230), AMBER);
		canvas.line((-5, 240), (0, 230), AMBER);
	} else {
		// pause bars
		canvas.line((-5, 220), (-5, 240), AMBER);
		canvas.line((5, 220), (5, 240), AMBER);
	}

	// exit cross
	canvas.line((230, 220), (250, 240), RED);
	canvas.line((250, 220), (230, 240), RED);
}
