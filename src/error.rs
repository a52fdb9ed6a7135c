use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeighProError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// スケールが接続されていない（起動時のオープン失敗を含む）
    #[error("Scale not connected")]
    DeviceNotConnected,

    /// 規定行数を読んでも数値が得られなかった
    #[error("No weight detected")]
    NoWeightDetected,

    /// 有限でない重量値（記録すると読み戻せなくなる）
    #[error("Invalid weight: {0}")]
    InvalidWeight(f64),

    #[error("Scale I/O error: {0}")]
    Serial(String),

    /// ログブックが期待する表形式ではない
    #[error("Log book format invalid: {0}")]
    StoreFormatInvalid(String),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Unknown sample slot: {0}")]
    UnknownSample(String),

    #[error("Unknown ingredient {ingredient} in recipe {recipe}")]
    UnknownIngredient { recipe: String, ingredient: String },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] weighpro_common::Error),
}

impl WeighProError {
    /// オペレーターが同じ操作をやり直せば回復しうるエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WeighProError::DeviceNotConnected
                | WeighProError::NoWeightDetected
                | WeighProError::Serial(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WeighProError>;
