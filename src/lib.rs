//! WeighPro
//!
//! シリアル接続のスケールでレシピ材料を計量し、目標重量との合否を
//! xlsx ログブックに記録する。

pub mod cli;
pub mod config;
pub mod error;
pub mod kiosk;
pub mod logbook;
pub mod report;
pub mod scale;
pub mod session;

pub use config::Config;
pub use error::{Result, WeighProError};
pub use logbook::{LogBook, SaveOutcome};
pub use scale::{ScaleLink, WeightReader};
pub use session::SampleSession;
