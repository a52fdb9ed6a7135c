//! 端末向けの表示

use crate::config::Config;
use crate::error::Result;
use crate::scale::WeightReader;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use weighpro_common::{RecipeSummary, Weight};

/// 未計量の表示
pub const UNSET_READING: &str = "--";

/// スピナーを表示しながらスケールを読み取る
pub fn read_with_spinner(reader: &mut WeightReader) -> Result<Weight> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("スケール読み取り中...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = reader.read();
    spinner.finish_and_clear();
    result
}

/// 読み取り値の表示文字列（未計量は `--`）
pub fn reading_text(reading: Option<Weight>) -> String {
    reading.map(|w| w.to_string()).unwrap_or_else(|| UNSET_READING.to_string())
}

/// サマリー1件分の表示
pub fn summary_line(summary: &RecipeSummary) -> String {
    summary.stats_line()
}

pub fn print_summary(summary: Option<&[RecipeSummary]>) {
    println!("PRODUCTION SUMMARY\n");
    match summary {
        None => println!("No production data found"),
        Some([]) => println!("本日の記録はありません"),
        Some(items) => {
            for item in items {
                println!("{}", item.recipe);
                println!("  {}\n", summary_line(item));
            }
        }
    }
}

pub fn print_recipes(config: &Config) {
    for slot in &config.samples {
        println!("{} → {}", slot.label, slot.recipe);
        if let Some(recipe) = config.recipe(&slot.recipe) {
            for ingredient in &recipe.ingredients {
                println!("  {:<18} {:>8} g", ingredient.name, ingredient.target_grams);
            }
        }
        println!();
    }
}

pub fn print_config(config: &Config) {
    println!("設定:");
    println!("  ポート: {}", config.port);
    println!("  ボーレート: {}", config.baud_rate);
    println!("  許容誤差: ±{} g", config.tolerance_grams);
    println!("  ログブック: {}", config.log_path.display());
    println!("  レシピ数: {}", config.recipes.len());
    println!("  サンプル枠: {}", config.samples.len());
}
