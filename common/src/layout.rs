//! ログブックの列レイアウト
//!
//! 先頭行はヘッダー。列の順序と名前は固定で、読み込み時に検証する。

/// 列数
pub const LOG_COLUMN_COUNT: usize = 7;

/// ヘッダー行
pub const LOG_COLUMNS: [&str; LOG_COLUMN_COUNT] = [
    "DateTime",
    "Sample",
    "Recipe",
    "Ingredient",
    "Target(g)",
    "Actual(g)",
    "Status",
];

/// 列幅（Excel単位）
pub const LOG_COLUMN_WIDTHS: [f64; LOG_COLUMN_COUNT] = [20.0, 18.0, 14.0, 16.0, 11.0, 11.0, 9.0];

/// 列インデックス
pub mod col {
    pub const DATE_TIME: usize = 0;
    pub const SAMPLE: usize = 1;
    pub const RECIPE: usize = 2;
    pub const INGREDIENT: usize = 3;
    pub const TARGET: usize = 4;
    pub const ACTUAL: usize = 5;
    pub const STATUS: usize = 6;
}
