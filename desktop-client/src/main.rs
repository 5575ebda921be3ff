mod app;
mod audio;
mod colors;
mod config;
mod game_ui;

use clap::Parser;
use eframe::egui;

use engine::config::ConfigManager;
use engine::game::{GameState, SessionRng};
use engine::logger::init_logger;

use app::SnakemanApp;
use config::get_config_manager;

#[derive(Parser, Debug)]
#[command(name = "snakeman_client", about = "Tile-grid snake arcade game")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    engine::log!("Session seed: {}", rng.seed());

    let state = GameState::new(config.game.clone());
    let cell = config.pixels_per_cell as f32;
    let width = state.grid().cols as f32 * cell;
    let height = state.grid().rows as f32 * cell;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title("Snakeman"),
        ..Default::default()
    };

    eframe::run_native(
        "Snakeman",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakemanApp::new(config, state, rng)))),
    )?;

    Ok(())
}
