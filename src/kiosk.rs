//! 対話式キオスク（端末版）
//!
//! ホーム → サンプル画面 → 材料ごとに READ / SAVE、
//! ホームから生産サマリーを表示する。すべて1スレッドで動き、
//! 読み取り中は操作を受け付けない。

use crate::config::Config;
use crate::error::{Result, WeighProError};
use crate::logbook::LogBook;
use crate::report::{print_summary, read_with_spinner, reading_text};
use crate::scale::WeightReader;
use crate::session::{saved_message, SampleSession};
use dialoguer::Select;

const SUMMARY_ITEM: &str = "📊 Production Summary";
const QUIT_ITEM: &str = "Quit";
const BACK_ITEM: &str = "⬅ Back";

/// ホーム画面の選択
pub enum HomeAction {
    /// サンプル枠を開く
    Sample(String),
    Summary,
    Quit,
}

/// 材料行の操作
pub enum RowAction {
    Read,
    Save,
    Back,
}

pub struct Kiosk<'a> {
    config: &'a Config,
    reader: WeightReader,
    logbook: LogBook,
}

impl<'a> Kiosk<'a> {
    pub fn new(config: &'a Config, reader: WeightReader) -> Self {
        Self {
            config,
            reader,
            logbook: LogBook::from_config(config),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("WEIGHPRO");
        println!("Powered by LEAPSYS\n");

        if !self.reader.is_connected() {
            println!("⚠ スケール未接続: {} (READは失敗します)\n", self.config.port);
        }

        loop {
            match self.prompt_home()? {
                HomeAction::Sample(label) => self.sample_page(&label)?,
                HomeAction::Summary => self.summary_page()?,
                HomeAction::Quit => break,
            }
        }

        Ok(())
    }

    fn prompt_home(&self) -> Result<HomeAction> {
        let mut items: Vec<&str> = self.config.samples.iter().map(|s| s.label.as_str()).collect();
        items.push(SUMMARY_ITEM);
        items.push(QUIT_ITEM);

        let choice = Select::new()
            .with_prompt("サンプルを選択")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| WeighProError::Prompt(e.to_string()))?;

        let sample_count = self.config.samples.len();
        Ok(if choice < sample_count {
            HomeAction::Sample(self.config.samples[choice].label.clone())
        } else if choice == sample_count {
            HomeAction::Summary
        } else {
            HomeAction::Quit
        })
    }

    fn sample_page(&mut self, label: &str) -> Result<()> {
        let mut session = SampleSession::open(self.config, label)?;
        println!("\n{}\n", session.recipe().name);

        loop {
            let mut rows: Vec<String> = session
                .ingredients()
                .iter()
                .enumerate()
                .map(|(i, ing)| {
                    format!(
                        "{:<18} {:>8} g   {:>10}",
                        ing.name,
                        ing.target_grams,
                        reading_text(session.reading(i))
                    )
                })
                .collect();
            rows.push(BACK_ITEM.to_string());

            let index = Select::new()
                .with_prompt("材料を選択")
                .items(&rows)
                .default(0)
                .interact()
                .map_err(|e| WeighProError::Prompt(e.to_string()))?;

            if index >= session.ingredients().len() {
                println!();
                return Ok(());
            }

            match prompt_row_action(&session.ingredients()[index].name)? {
                RowAction::Read => match read_with_spinner_at(&mut session, index, &mut self.reader) {
                    Ok(weight) => println!("  → {} g\n", weight),
                    Err(e) => println!("  ✖ Scale Error: {}\n", e),
                },
                RowAction::Save => match session.save(index, &self.logbook) {
                    Ok(outcome) => {
                        if let Some(message) = saved_message(&outcome) {
                            println!("  ✔ Saved: {}\n", message);
                        }
                    }
                    Err(e) => println!("  ✖ Save Error: {}\n", e),
                },
                RowAction::Back => {}
            }
        }
    }

    fn summary_page(&self) -> Result<()> {
        println!();
        match self.logbook.summary_today() {
            Ok(summary) => print_summary(summary.as_deref()),
            Err(e) => println!("✖ {}", e),
        }
        println!();
        Ok(())
    }
}

fn read_with_spinner_at(
    session: &mut SampleSession,
    index: usize,
    reader: &mut WeightReader,
) -> Result<weighpro_common::Weight> {
    let weight = read_with_spinner(reader)?;
    session.set_reading(index, weight)?;
    Ok(weight)
}

fn prompt_row_action(ingredient: &str) -> Result<RowAction> {
    let items = ["READ", "SAVE", BACK_ITEM];
    let choice = Select::new()
        .with_prompt(ingredient)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| WeighProError::Prompt(e.to_string()))?;

    Ok(match choice {
        0 => RowAction::Read,
        1 => RowAction::Save,
        _ => RowAction::Back,
    })
}
