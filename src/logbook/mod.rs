//! ログブックモジュール
//!
//! 保存操作1回につき1行を xlsx ファイルに追記する。
//!
//! xlsx は部分書き込みができないため、保存のたびに全行を再シリアライズし、
//! 一時ファイルに書いてから置き換える。書き込み途中で落ちても既存の
//! ログは壊れない。書き手は1プロセスのみを前提としており、読み込みから
//! 置き換えまでの間に外部で編集された内容は失われる。

pub mod reader;

use crate::config::Config;
use crate::error::{Result, WeighProError};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use weighpro_common::export::excel_core::generate_log_buffer;
use weighpro_common::{summarize, Ingredient, LogRecord, RecipeSummary, Weight};

/// 保存操作の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// 未計量のため何もしなかった
    Skipped,
    /// 1行追記した
    Saved(LogRecord),
}

pub struct LogBook {
    path: PathBuf,
    tolerance_grams: f64,
}

impl LogBook {
    pub fn new(path: impl Into<PathBuf>, tolerance_grams: f64) -> Self {
        Self {
            path: path.into(),
            tolerance_grams,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_path.clone(), config.tolerance_grams)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 全記録を読み込む（ファイルが無ければ空）
    pub fn load(&self) -> Result<Vec<LogRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        reader::read_log(&self.path)
    }

    /// 記録を1行追記
    ///
    /// 既存ファイルの形式が不正な場合は書き込まずにエラーを返す。
    pub fn append(&self, record: LogRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)
    }

    /// 現在の読み取り値を保存（現在時刻）
    pub fn save(
        &self,
        sample: &str,
        recipe: &str,
        ingredient: &Ingredient,
        reading: Option<Weight>,
    ) -> Result<SaveOutcome> {
        self.save_at(Local::now().naive_local(), sample, recipe, ingredient, reading)
    }

    /// 現在の読み取り値を指定時刻で保存
    ///
    /// 読み取り値が未設定なら何もせず `Skipped` を返す。
    pub fn save_at(
        &self,
        at: NaiveDateTime,
        sample: &str,
        recipe: &str,
        ingredient: &Ingredient,
        reading: Option<Weight>,
    ) -> Result<SaveOutcome> {
        let Some(actual) = reading else {
            log::debug!("No reading for {}, nothing saved", ingredient.name);
            return Ok(SaveOutcome::Skipped);
        };
        if !actual.grams().is_finite() {
            return Err(WeighProError::InvalidWeight(actual.grams()));
        }

        let record = LogRecord::new(at, sample, recipe, ingredient, actual, self.tolerance_grams);
        self.append(record.clone())?;
        log::info!(
            "Saved {} / {} / {}: {} g ({})",
            sample, recipe, record.ingredient, actual, record.status
        );
        Ok(SaveOutcome::Saved(record))
    }

    /// 本日分の生産サマリー（ファイルが無ければ `None`）
    pub fn summary_today(&self) -> Result<Option<Vec<RecipeSummary>>> {
        self.summary_for(Local::now().date_naive())
    }

    pub fn summary_for(&self, day: NaiveDate) -> Result<Option<Vec<RecipeSummary>>> {
        if !self.exists() {
            return Ok(None);
        }
        let records = self.load()?;
        Ok(Some(summarize(&records, day)))
    }

    fn write_all(&self, records: &[LogRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let buffer = generate_log_buffer(records).map_err(WeighProError::Excel)?;

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, buffer)?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::debug!("Rewrote {} ({} records)", self.path.display(), records.len());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("weighpro.xlsx");
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}
