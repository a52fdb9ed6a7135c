//! WeighPro Common Library
//!
//! CLIとデスクトップキオスクで共有される型とユーティリティ

pub mod types;
pub mod recipes;
pub mod layout;
pub mod error;
pub mod parser;
pub mod summary;
pub mod export;

pub use types::{Ingredient, LogRecord, Recipe, SampleSlot, Status, Weight};
pub use recipes::{default_recipes, default_samples};
pub use layout::{LOG_COLUMNS, LOG_COLUMN_COUNT};
pub use error::{Error, Result};
pub use parser::{clean_line, first_number, normalize_grams, parse_frame};
pub use summary::{summarize, RecipeSummary};
