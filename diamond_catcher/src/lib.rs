pub mod canvas;
pub mod game;
pub mod random;
pub mod scene;

mod config;
mod display;
mod gui;
mod timer;

pub use config::Config;
pub use gui::CatcherGui;

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: String) {
	wasm_bindgen_futures::spawn_local(async move {
		let started = eframe::WebRunner::new()
			.start(
				&canvas_id,
				eframe::WebOptions::default(),
				Box::new(|_cc| Box::new(CatcherGui::new(Config::default()))),
			)
			.await;
		
		if let Err(e) = started {
			log::error!("failed to start: {e:?}");
		}
	});
}
