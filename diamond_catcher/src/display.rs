use eframe::egui::{Color32, ColorImage, Pos2, Rect, Response, Sense, TextureHandle, Ui, Vec2};

use crate::canvas::Canvas;

pub fn color_image(canvas: &Canvas) -> ColorImage {
	let (w, h) = canvas.size();
	let pixels = canvas.pixels().iter()
		.map(|&c| {
			let [b, g, r, _] = c.to_le_bytes();
			Color32::from_rgb(r, g, b)
		})
		.collect();
	
	ColorImage { size: [w, h], pixels }
}

/// Shows the canvas texture at `scale` screen points per canvas pixel.
/// Returns the response along with the canvas-pixel position of a click,
/// if there was one.
pub fn canvas_display(ui: &mut Ui, texture: &TextureHandle, scale: f32) -> (Response, Option<(f32, f32)>) {
	let [w, h] = texture.size();
	let size = Vec2::new(w as f32, h as f32) * scale;
	
	let (rect, response) = ui.allocate_exact_size(size, Sense::click());
	
	if ui.is_rect_visible(rect) {
		let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
		ui.painter().image(texture.id(), rect, uv, Color32::WHITE);
	}
	
	let click = response.clicked()
		.then(|| response.interact_pointer_pos())
		.flatten()
		.map(|pos| {
			let local = (pos - rect.left_top()) / scale;
			(local.x, local.y)
		});
	
	(response, click)
}

#[cfg(test)]
mod tests {
	use super::*;
	
	#[test]
	fn channels_survive_conversion() {
		let mut canvas = Canvas::new((4, 2), 1);
		canvas.clear(0x336699);
		canvas.plot((-2, 1), 0xFF8000).unwrap();
		
		let image = color_image(&canvas);
		assert_eq!(image.size, [4, 2]);
		assert_eq!(image.pixels[0], Color32::from_rgb(0xFF, 0x80, 0x00));
		assert_eq!(image.pixels[7], Color32::from_rgb(0x33, 0x66, 0x99));
	}
}
