//! スケール出力パーサー
//!
//! シリアル1行分のテキストから最初の数値を抽出し、
//! グラム単位に正規化する。
//!
//! 書式はプロトコルで保証されていないため、ヒューリスティックに解析する:
//! 1. 数字・`.`・`+`・`-` 以外の文字を空白に置き換える
//! 2. 空白で分割したトークンを先頭から数値として解釈
//! 3. 最初に解釈できたトークンを採用

use crate::types::Weight;
use regex::Regex;

/// この値未満はキログラムとみなして1000倍する
///
/// 機器依存のヒューリスティック。100g未満の正当なグラム値も
/// キログラム扱いになるが、既存の記録との互換性のためそのまま再現する。
pub const KILOGRAM_THRESHOLD: f64 = 100.0;

/// 数値以外の文字を空白に置き換える
pub fn clean_line(line: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_NUMERIC_RE: Regex = Regex::new(r"[^0-9.+\-]").unwrap();
    }

    NON_NUMERIC_RE.replace_all(line, " ").into_owned()
}

/// 整形済みの行から最初に数値として解釈できるトークンを返す
///
/// f64 に収まらない桁数のトークン（`inf` になる）は数値とみなさない。
pub fn first_number(cleaned: &str) -> Option<f64> {
    cleaned
        .split_whitespace()
        .find_map(|token| token.parse::<f64>().ok().filter(|v| v.is_finite()))
}

/// 単位正規化（100未満 → ×1000）
pub fn normalize_grams(value: f64) -> f64 {
    if value < KILOGRAM_THRESHOLD {
        value * 1000.0
    } else {
        value
    }
}

/// 1行分のフレームを解析
///
/// # Returns
/// * `Some(Weight)` - 数値トークンが見つかった
/// * `None` - 数値トークンなし（次の行へ）
///
/// # Examples
/// ```
/// use weighpro_common::parse_frame;
///
/// let w = parse_frame("ST,GS,+0.420kg\r\n").unwrap();
/// assert_eq!(w.to_string(), "420.00");
/// ```
pub fn parse_frame(line: &str) -> Option<Weight> {
    first_number(&clean_line(line)).map(Weight::from_scale_value)
}
