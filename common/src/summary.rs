//! 生産サマリー（本日分の集計）
//!
//! ログブックの記録をレシピ単位に集計する。日付はタイムスタンプ先頭の
//! `YYYY-MM-DD` との文字列前方一致で判定し、日をまたぐ集計は行わない。

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{LogRecord, Status, DATE_FORMAT};

/// レシピ単位の集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub recipe: String,
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    /// 実測値の平均（小数2桁に丸め）
    pub average_grams: f64,
}

impl RecipeSummary {
    /// 平均値の表示（整数値でも `420.0` のように小数点を付ける）
    pub fn average_text(&self) -> String {
        format!("{:?}", self.average_grams)
    }

    /// 件数と平均の1行表示
    pub fn stats_line(&self) -> String {
        format!(
            "Total: {}   PASS: {}   FAIL: {}   Avg: {} g",
            self.total,
            self.pass,
            self.fail,
            self.average_text()
        )
    }
}

/// 指定日の記録をレシピごとに集計
///
/// レシピの並び順はその日に最初に記録された順。
pub fn summarize(records: &[LogRecord], day: NaiveDate) -> Vec<RecipeSummary> {
    let prefix = day.format(DATE_FORMAT).to_string();
    let mut groups: Vec<(String, Vec<&LogRecord>)> = Vec::new();

    for record in records.iter().filter(|r| r.is_on(&prefix)) {
        match groups.iter_mut().find(|(name, _)| *name == record.recipe) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.recipe.clone(), vec![record])),
        }
    }

    groups
        .into_iter()
        .map(|(recipe, members)| {
            let total = members.len();
            let pass = members.iter().filter(|r| r.status == Status::Pass).count();
            let sum: f64 = members.iter().map(|r| r.actual_grams).sum();
            RecipeSummary {
                recipe,
                total,
                pass,
                fail: total - pass,
                average_grams: round2(sum / total as f64),
            }
        })
        .collect()
}

/// 小数2桁に丸める
///
/// 2進値を10進文字列に整形してから読み直す。`420.005` のように
/// 2進では半分未満の値は切り捨てられる。
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
