// #![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use diamond_catcher::{CatcherGui, Config};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
	if let Err(e) = simple_logger::SimpleLogger::new()
		.with_level(log::LevelFilter::Info)
		.env()
		.init()
	{
		eprintln!("couldn't set up logging: {e}");
	}
	
	let config = Config::default();
	let (w, h) = config.canvas_size;
	
	let gui = CatcherGui::new(config);
	for line in gui.banner() {
		log::info!("{line}");
	}
	
	let options = eframe::NativeOptions {
		initial_window_size: Some(eframe::egui::vec2(w as f32, h as f32 + 32.0)),
		resizable: false,
		..Default::default()
	};
	
	eframe::run_native("Catch the Diamonds", options, Box::new(move |_cc| {
		Box::new(gui)
	}))
}

#[cfg(target_arch = "wasm32")]
fn main() {}
