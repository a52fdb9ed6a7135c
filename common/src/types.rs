//! 計量記録の型定義
//!
//! CLIとデスクトップで共有される型:
//! - Recipe / Ingredient: 固定レシピと目標重量
//! - SampleSlot: サンプル枠 → レシピの対応
//! - Weight: スケールから読み取った重量（グラム、小数2桁）
//! - LogRecord: ログブックに追記される1行

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// 許容誤差の既定値（±グラム）
pub const DEFAULT_TOLERANCE_GRAMS: f64 = 5.0;

/// ログブックのタイムスタンプ書式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日付部分の書式（本日分の集計に使用）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 材料と目標重量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub target_grams: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, target_grams: f64) -> Self {
        Self {
            name: name.into(),
            target_grams,
        }
    }
}

/// レシピ（材料の並び順を保持）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    /// 名前で材料を検索
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }
}

/// サンプル枠（1枠 = 1レシピ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSlot {
    pub label: String,
    pub recipe: String,
}

impl SampleSlot {
    pub fn new(label: impl Into<String>, recipe: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            recipe: recipe.into(),
        }
    }
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// |actual − target| ≤ tolerance なら PASS
    pub fn evaluate(actual_grams: f64, target_grams: f64, tolerance_grams: f64) -> Self {
        if (actual_grams - target_grams).abs() <= tolerance_grams {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            _ => Err(Error::Parse(format!("unknown status: {}", s))),
        }
    }
}

/// スケールの読み取り値（グラム）
///
/// 表示は常に小数2桁。保持する値も表示文字列を再パースした値と一致させ、
/// 画面に見えている値がそのままログに保存されるようにする。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weight(f64);

impl Weight {
    /// グラム値から生成（小数2桁に丸める）
    pub fn from_grams(grams: f64) -> Self {
        let shown = format!("{:.2}", grams);
        Self(shown.parse().unwrap_or(grams))
    }

    /// スケールの生の値から生成（単位正規化 → 丸め）
    pub fn from_scale_value(raw: f64) -> Self {
        Self::from_grams(crate::parser::normalize_grams(raw))
    }

    pub fn grams(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// ログブックの1行（追記後は変更しない）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// `YYYY-MM-DD HH:MM:SS`（ローカル時刻）
    pub timestamp: String,
    pub sample: String,
    pub recipe: String,
    pub ingredient: String,
    pub target_grams: f64,
    pub actual_grams: f64,
    pub status: Status,
}

impl LogRecord {
    /// 計量値から記録を作成し、判定を確定する
    pub fn new(
        at: NaiveDateTime,
        sample: &str,
        recipe: &str,
        ingredient: &Ingredient,
        actual: Weight,
        tolerance_grams: f64,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            sample: sample.to_string(),
            recipe: recipe.to_string(),
            ingredient: ingredient.name.clone(),
            target_grams: ingredient.target_grams,
            actual_grams: actual.grams(),
            status: Status::evaluate(actual.grams(), ingredient.target_grams, tolerance_grams),
        }
    }

    /// タイムスタンプの日付部分が `date`（YYYY-MM-DD）で始まるか
    pub fn is_on(&self, date: &str) -> bool {
        self.timestamp.starts_with(date)
    }
}
