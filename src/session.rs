//! サンプル画面の状態
//!
//! 1つのサンプル枠を開いている間、材料ごとの読み取り値を保持する。
//! 読み取り値は画面を離れると破棄され、保存操作でのみログブックに残る。

use crate::config::Config;
use crate::error::{Result, WeighProError};
use crate::logbook::{LogBook, SaveOutcome};
use crate::scale::WeightReader;
use weighpro_common::{Ingredient, Recipe, Weight};

#[derive(Debug, Clone)]
pub struct SampleSession {
    label: String,
    recipe: Recipe,
    readings: Vec<Option<Weight>>,
}

impl SampleSession {
    /// サンプル枠を開く（読み取り値はすべて未設定）
    pub fn open(config: &Config, label: &str) -> Result<Self> {
        let (slot, recipe) = config.sample(label)?;
        Ok(Self {
            label: slot.label.clone(),
            readings: vec![None; recipe.ingredients.len()],
            recipe: recipe.clone(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.recipe.ingredients
    }

    pub fn reading(&self, index: usize) -> Option<Weight> {
        self.readings.get(index).copied().flatten()
    }

    /// スケールを読み取り、成功したら表示値を上書き
    ///
    /// 失敗時は以前の表示値をそのまま残す。
    pub fn read(&mut self, index: usize, reader: &mut WeightReader) -> Result<Weight> {
        self.check_index(index)?;
        let weight = reader.read()?;
        self.readings[index] = Some(weight);
        Ok(weight)
    }

    /// 読み取り値を直接設定（スケールを使わない記録用）
    pub fn set_reading(&mut self, index: usize, weight: Weight) -> Result<()> {
        self.check_index(index)?;
        self.readings[index] = Some(weight);
        Ok(())
    }

    /// 表示中の読み取り値をログブックに保存
    pub fn save(&self, index: usize, logbook: &LogBook) -> Result<SaveOutcome> {
        self.check_index(index)?;
        let ingredient = &self.recipe.ingredients[index];
        logbook.save(&self.label, &self.recipe.name, ingredient, self.readings[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.readings.len() {
            Ok(())
        } else {
            Err(WeighProError::UnknownIngredient {
                recipe: self.recipe.name.clone(),
                ingredient: format!("#{}", index),
            })
        }
    }
}

/// 保存結果の確認メッセージ
pub fn saved_message(outcome: &SaveOutcome) -> Option<String> {
    match outcome {
        SaveOutcome::Saved(record) => Some(format!("{} saved ({})", record.ingredient, record.status)),
        SaveOutcome::Skipped => None,
    }
}
