//! ログブック（xlsx）の統合テスト
//!
//! 保存・再読み込み・形式検証・生産サマリーを検証

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use tempfile::tempdir;
use weighpro::{LogBook, SaveOutcome, WeighProError};
use weighpro_common::{parse_frame, Ingredient, Status, Weight, LOG_COLUMNS};

fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn noodles() -> Ingredient {
    Ingredient::new("Noodles", 420.0)
}

fn save(book: &LogBook, when: NaiveDateTime, grams: f64) -> SaveOutcome {
    book.save_at(when, "Sample Weight 1", "MAGGI", &noodles(), Some(Weight::from_grams(grams)))
        .expect("保存失敗")
}

fn sheet_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("xlsxを開けない");
    let range = workbook
        .worksheet_range_at(0)
        .expect("シートがない")
        .expect("シート読み込み失敗");
    range.rows().map(|r| r.to_vec()).collect()
}

/// 初回保存でヘッダー付きファイルが作成される
#[test]
fn test_first_save_creates_header() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("weight data").join("log.xlsx");
    let book = LogBook::new(&path, 5.0);

    save(&book, at(17, 9, 0, 0), 420.0);

    assert!(path.exists(), "ログブックが作成されていない");
    let rows = sheet_rows(&path);
    assert_eq!(rows.len(), 2);
    let header: Vec<String> = rows[0]
        .iter()
        .map(|c| match c {
            Data::String(s) => s.clone(),
            other => format!("{:?}", other),
        })
        .collect();
    assert_eq!(header, LOG_COLUMNS.to_vec());
}

/// N回保存 → N+1行、再読み込みで全フィールドが一致
#[test]
fn test_roundtrip_after_n_saves() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");
    let book = LogBook::new(&path, 5.0);

    let grams = [420.0, 414.0, 418.46, 425.0, 1250.5];
    let mut written = Vec::new();
    for (i, g) in grams.iter().enumerate() {
        match save(&book, at(17, 10, i as u32, 0), *g) {
            SaveOutcome::Saved(record) => written.push(record),
            SaveOutcome::Skipped => panic!("読み取り値があるのにスキップされた"),
        }
    }

    assert_eq!(sheet_rows(&path).len(), grams.len() + 1);

    let loaded = book.load().expect("再読み込み失敗");
    assert_eq!(loaded, written);
    assert_eq!(loaded[2].actual_grams, 418.46);
    assert_eq!(loaded[1].timestamp, "2026-10-17 10:01:00");
    assert_eq!(loaded[1].sample, "Sample Weight 1");
    assert_eq!(loaded[1].recipe, "MAGGI");
    assert_eq!(loaded[1].ingredient, "Noodles");
    assert_eq!(loaded[1].target_grams, 420.0);
}

/// MAGGI Noodles: 420 → PASS、414 → FAIL（差6g）
#[test]
fn test_maggi_pass_fail_example() {
    let dir = tempdir().expect("Failed to create temp dir");
    let book = LogBook::new(dir.path().join("log.xlsx"), 5.0);

    let pass = save(&book, at(17, 11, 0, 0), 420.0);
    let fail = save(&book, at(17, 11, 0, 1), 414.0);

    assert!(matches!(pass, SaveOutcome::Saved(ref r) if r.status == Status::Pass));
    assert!(matches!(fail, SaveOutcome::Saved(ref r) if r.status == Status::Fail));
}

/// 境界値: ±5 は PASS、±5.01 は FAIL
#[test]
fn test_tolerance_boundaries() {
    let dir = tempdir().expect("Failed to create temp dir");
    let book = LogBook::new(dir.path().join("log.xlsx"), 5.0);

    for (grams, expected) in [
        (425.0, Status::Pass),
        (415.0, Status::Pass),
        (425.01, Status::Fail),
        (414.99, Status::Fail),
    ] {
        match save(&book, at(17, 12, 0, 0), grams) {
            SaveOutcome::Saved(record) => assert_eq!(record.status, expected, "{} g", grams),
            SaveOutcome::Skipped => panic!("スキップされた"),
        }
    }

    let statuses: Vec<Status> = book.load().unwrap().iter().map(|r| r.status).collect();
    assert_eq!(statuses, vec![Status::Pass, Status::Pass, Status::Fail, Status::Fail]);
}

/// 未計量の保存は行数を変えない
#[test]
fn test_save_without_reading_keeps_row_count() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");
    let book = LogBook::new(&path, 5.0);

    save(&book, at(17, 9, 0, 0), 420.0);
    let outcome = book
        .save_at(at(17, 9, 1, 0), "Sample Weight 1", "MAGGI", &noodles(), None)
        .expect("保存失敗");

    assert_eq!(outcome, SaveOutcome::Skipped);
    assert_eq!(sheet_rows(&path).len(), 2);
}

/// 桁あふれしたフレームは記録されず、ログブックは読み込み可能なまま
#[test]
fn test_overflowing_frame_never_reaches_log() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");
    let book = LogBook::new(&path, 5.0);
    save(&book, at(17, 9, 0, 0), 420.0);

    let reading = parse_frame(&format!("{} g", "9".repeat(400)));
    assert!(reading.is_none());

    let outcome = book
        .save_at(at(17, 9, 1, 0), "Sample Weight 1", "MAGGI", &noodles(), reading)
        .expect("保存失敗");
    assert_eq!(outcome, SaveOutcome::Skipped);

    let result = book.save_at(
        at(17, 9, 2, 0),
        "Sample Weight 1",
        "MAGGI",
        &noodles(),
        Some(Weight::from_grams(f64::INFINITY)),
    );
    assert!(matches!(result, Err(WeighProError::InvalidWeight(_))));

    // 後続の保存も成功する
    save(&book, at(17, 9, 3, 0), 418.0);
    assert_eq!(book.load().expect("読み込み失敗").len(), 2);
}

/// xlsxではないファイルは StoreFormatInvalid、内容は変更しない
#[test]
fn test_not_a_workbook_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");
    std::fs::write(&path, "DateTime,Sample\n").unwrap();
    let book = LogBook::new(&path, 5.0);

    let result = book.save_at(at(17, 9, 0, 0), "Sample Weight 1", "MAGGI", &noodles(), Some(Weight::from_grams(420.0)));
    assert!(matches!(result, Err(WeighProError::StoreFormatInvalid(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "DateTime,Sample\n");
}

/// ヘッダーが異なるブックは StoreFormatInvalid
#[test]
fn test_unexpected_header_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (c, name) in ["Date", "Sample", "Recipe", "Ingredient", "Target", "Actual", "Result"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, c as u16, *name).unwrap();
    }
    workbook.save(&path).unwrap();

    let book = LogBook::new(&path, 5.0);
    let err = book.load().unwrap_err();
    assert!(matches!(err, WeighProError::StoreFormatInvalid(_)));
    assert!(err.to_string().contains("header"));
}

/// 判定列が PASS/FAIL 以外の行は StoreFormatInvalid
#[test]
fn test_bad_status_cell_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("log.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (c, name) in LOG_COLUMNS.iter().enumerate() {
        sheet.write_string(0, c as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "2026-10-17 09:00:00").unwrap();
    sheet.write_string(1, 1, "Sample Weight 1").unwrap();
    sheet.write_string(1, 2, "MAGGI").unwrap();
    sheet.write_string(1, 3, "Noodles").unwrap();
    sheet.write_number(1, 4, 420.0).unwrap();
    sheet.write_number(1, 5, 421.0).unwrap();
    sheet.write_string(1, 6, "OK").unwrap();
    workbook.save(&path).unwrap();

    let err = LogBook::new(&path, 5.0).load().unwrap_err();
    assert!(matches!(err, WeighProError::StoreFormatInvalid(_)));
    assert!(err.to_string().contains("row 2"));
}

/// 本日分のみ集計: MAGGI 420/418/430 → total=3 pass=2 fail=1 avg=422.67
#[test]
fn test_production_summary_today() {
    let dir = tempdir().expect("Failed to create temp dir");
    let book = LogBook::new(dir.path().join("log.xlsx"), 5.0);

    save(&book, at(16, 17, 0, 0), 300.0);
    save(&book, at(17, 9, 0, 0), 420.0);
    save(&book, at(17, 9, 5, 0), 418.0);
    save(&book, at(17, 9, 10, 0), 430.0);

    let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    let summary = book.summary_for(day).expect("集計失敗").expect("データなし");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].recipe, "MAGGI");
    assert_eq!(summary[0].total, 3);
    assert_eq!(summary[0].pass, 2);
    assert_eq!(summary[0].fail, 1);
    assert_eq!(summary[0].average_grams, 422.67);
}

/// ログブックが無ければ「データなし」
#[test]
fn test_production_summary_without_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let book = LogBook::new(dir.path().join("missing.xlsx"), 5.0);
    let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    assert!(book.summary_for(day).unwrap().is_none());
}
