//! ログブックExcel生成（共通ライブラリ）
//!
//! layout.rs の列定義を使用してログブック全体を1枚のシートに書き出す

use crate::layout::{col, LOG_COLUMNS, LOG_COLUMN_WIDTHS};
use crate::types::LogRecord;
use rust_xlsxwriter::*;

/// シート名
pub const LOG_SHEET_NAME: &str = "Log";

/// ログブックをバッファに生成
///
/// 先頭行にヘッダー、以降は追記順に1記録1行。
/// 重量は数値セル、日時・判定は文字列セルとして書き込む。
pub fn generate_log_buffer(records: &[LogRecord]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let grams_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(LOG_SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (c, width) in LOG_COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(c as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (c, label) in LOG_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, c as u16, *label, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let texts = [
            (col::DATE_TIME, record.timestamp.as_str()),
            (col::SAMPLE, record.sample.as_str()),
            (col::RECIPE, record.recipe.as_str()),
            (col::INGREDIENT, record.ingredient.as_str()),
            (col::STATUS, record.status.as_str()),
        ];
        for (c, text) in texts {
            worksheet.write_string(row, c as u16, text)
                .map_err(|e| format!("{}行目の書き込みエラー: {}", row + 1, e))?;
        }

        worksheet.write_number(row, col::TARGET as u16, record.target_grams)
            .map_err(|e| format!("{}行目の書き込みエラー: {}", row + 1, e))?;
        worksheet.write_number_with_format(row, col::ACTUAL as u16, record.actual_grams, &grams_format)
            .map_err(|e| format!("{}行目の書き込みエラー: {}", row + 1, e))?;
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
