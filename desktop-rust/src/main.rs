mod app;
mod model;

use anyhow::{Context, Result};
use app::KioskApp;
use weighpro::{Config, WeightReader};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let config = Config::load().context("load config")?;
    let reader = WeightReader::connect(&config.port, config.baud_rate);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Leapsys WeighPro")
            .with_inner_size([1200.0, 720.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Leapsys WeighPro",
        options,
        Box::new(move |_cc| Box::new(KioskApp::new(config, reader))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
