use clap::Parser;
use log::LevelFilter;
use weighpro::{cli, config, error, kiosk, logbook, report, scale, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use weighpro_common::Weight;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 環境変数は参照しない
    env_logger::Builder::new()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp_millis()
        .init();

    // config --init は壊れた設定ファイルを読まずに上書きする
    let reset = matches!(cli.command, Commands::Config { init: true, .. });
    let config = Config::load_or_reset(reset)?;

    match cli.command {
        Commands::Kiosk => {
            let reader = scale::WeightReader::connect(&config.port, config.baud_rate);
            kiosk::Kiosk::new(&config, reader).run()?;
        }

        Commands::Read => {
            let mut reader = scale::WeightReader::connect(&config.port, config.baud_rate);
            let weight = report::read_with_spinner(&mut reader)?;
            println!("{} g", weight);
        }

        Commands::Record { sample, ingredient, actual } => {
            let (slot, _, _) = config.ingredient(&sample, &ingredient)?;
            let mut session = session::SampleSession::open(&config, &slot.label)?;
            let index = session
                .ingredients()
                .iter()
                .position(|i| i.name == ingredient)
                .ok_or_else(|| error::WeighProError::UnknownIngredient {
                    recipe: session.recipe().name.clone(),
                    ingredient: ingredient.clone(),
                })?;

            let weight = match actual {
                Some(grams) => Weight::from_grams(grams),
                None => {
                    let mut reader = scale::WeightReader::connect(&config.port, config.baud_rate);
                    report::read_with_spinner(&mut reader)?
                }
            };
            session.set_reading(index, weight)?;
            println!("- 実測値: {} g", weight);

            let book = logbook::LogBook::from_config(&config);
            let outcome = session.save(index, &book)?;
            if let Some(message) = session::saved_message(&outcome) {
                println!("✔ {}", message);
                println!("  ログブック: {}", book.path().display());
            }
        }

        Commands::Summary => {
            let book = logbook::LogBook::from_config(&config);
            let summary = book.summary_today()?;
            report::print_summary(summary.as_deref());
        }

        Commands::Recipes => {
            report::print_recipes(&config);
        }

        Commands::Ports => {
            let ports = scale::available_ports()?;
            if ports.is_empty() {
                println!("シリアルポートが見つかりません");
            }
            for port in ports {
                let marker = if port == config.port { " (設定中)" } else { "" };
                println!("  - {}{}", port, marker);
            }
        }

        command @ Commands::Config { .. } => run_config(config, command)?,
    }

    Ok(())
}

/// 設定の表示・更新
fn run_config(mut config: Config, command: Commands) -> Result<()> {
    let Commands::Config { show, init, port, baud, log_path, tolerance } = command else {
        return Ok(());
    };
    let mut changed = init;

    if let Some(port) = port {
        config.port = port;
        changed = true;
    }
    if let Some(baud) = baud {
        config.baud_rate = baud;
        changed = true;
    }
    if let Some(path) = log_path {
        config.log_path = path;
        changed = true;
    }
    if let Some(tolerance) = tolerance {
        config.tolerance_grams = tolerance;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
    }

    if show || !changed {
        report::print_config(&config);
    }
    Ok(())
}
