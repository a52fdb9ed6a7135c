//! ログブック（xlsx）の読み込みと形式検証

use crate::error::{Result, WeighProError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::path::Path;
use weighpro_common::layout::{col, LOG_COLUMNS, LOG_COLUMN_COUNT};
use weighpro_common::types::TIMESTAMP_FORMAT;
use weighpro_common::{LogRecord, Status};

/// 既存のログブックを読み込む
///
/// 先頭シートの1行目がヘッダーと完全一致し、以降の各行が
/// 7列の期待する型であることを検証する。空行は読み飛ばす。
pub fn read_log(path: &Path) -> Result<Vec<LogRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| invalid(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| invalid("workbook contains no sheets".to_string()))?
        .map_err(|e| invalid(e.to_string()))?;

    if range.start() != Some((0, 0)) {
        return Err(invalid("header row must start at cell A1".to_string()));
    }

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| invalid("header row missing".to_string()))?;
    check_header(header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        // 1行目がヘッダーなのでデータは2行目から
        records.push(parse_row(i + 2, row)?);
    }
    Ok(records)
}

fn check_header(header: &[Data]) -> Result<()> {
    let names: Vec<String> = header
        .iter()
        .map(|c| match c {
            Data::String(s) => s.clone(),
            Data::Empty => String::new(),
            other => format!("{:?}", other),
        })
        .collect();

    let matches = names.len() >= LOG_COLUMN_COUNT
        && names[..LOG_COLUMN_COUNT].iter().zip(LOG_COLUMNS.iter()).all(|(a, b)| a == b)
        && names[LOG_COLUMN_COUNT..].iter().all(|s| s.is_empty());

    if matches {
        Ok(())
    } else {
        Err(invalid(format!(
            "unexpected header [{}], expected [{}]",
            names.join(", "),
            LOG_COLUMNS.join(", ")
        )))
    }
}

fn parse_row(row_number: usize, row: &[Data]) -> Result<LogRecord> {
    if row[LOG_COLUMN_COUNT..].iter().any(|c| !matches!(c, Data::Empty)) {
        return Err(invalid(format!("row {}: unexpected extra cells", row_number)));
    }

    let text = |c: usize| -> Result<String> {
        match &row[c] {
            Data::String(s) => Ok(s.clone()),
            other => Err(invalid(format!(
                "row {}: column {} must be text, found {:?}",
                row_number, LOG_COLUMNS[c], other
            ))),
        }
    };
    let number = |c: usize| -> Result<f64> {
        match &row[c] {
            Data::Float(f) => Ok(*f),
            Data::Int(i) => Ok(*i as f64),
            other => Err(invalid(format!(
                "row {}: column {} must be a number, found {:?}",
                row_number, LOG_COLUMNS[c], other
            ))),
        }
    };

    let timestamp = text(col::DATE_TIME)?;
    NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT).map_err(|_| {
        invalid(format!("row {}: bad timestamp {:?}", row_number, timestamp))
    })?;

    let status: Status = text(col::STATUS)?
        .parse()
        .map_err(|e| invalid(format!("row {}: {}", row_number, e)))?;

    Ok(LogRecord {
        timestamp,
        sample: text(col::SAMPLE)?,
        recipe: text(col::RECIPE)?,
        ingredient: text(col::INGREDIENT)?,
        target_grams: number(col::TARGET)?,
        actual_grams: number(col::ACTUAL)?,
        status,
    })
}

fn invalid(message: String) -> WeighProError {
    WeighProError::StoreFormatInvalid(message)
}
