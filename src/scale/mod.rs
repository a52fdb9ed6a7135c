//! 重量読み取りモジュール
//!
//! スケールから1行ずつテキストを読み、最初に数値として解釈できた値を
//! グラムに正規化して返す。
//!
//! 読み取りはブロッキングで、待ち時間は「入力破棄後の待機 + 最大行数」で
//! 上限が決まる。壁時計でのタイムアウトは持たない（1行ごとのタイムアウトは
//! シリアルポート側の設定）。途中で機器が止まると最大で
//! `MAX_LINES × 行タイムアウト` だけ呼び出し元を待たせる。

pub mod serial;

use crate::error::{Result, WeighProError};
use std::io;
use std::time::Duration;
use weighpro_common::{parse_frame, Weight};

pub use serial::{available_ports, SerialScale};

/// 入力破棄後、新しいフレームを待つ時間
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// 1回の読み取りで調べる最大行数
pub const MAX_LINES: usize = 60;

/// スケールとの行単位の入出力
pub trait ScaleLink {
    /// 受信済みの未読データを破棄
    fn discard_input(&mut self) -> io::Result<()>;

    /// 1行分の生バイトを読む（行タイムアウト時は途中までのバイト、または空）
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

/// 重量リーダー
///
/// 起動時に一度だけ作成し、プロセス終了まで保持する。
/// `link` が `None` の場合は未接続として扱う。
pub struct WeightReader {
    link: Option<Box<dyn ScaleLink>>,
    settle: Duration,
    max_lines: usize,
}

impl WeightReader {
    pub fn new(link: Option<Box<dyn ScaleLink>>) -> Self {
        Self {
            link,
            settle: SETTLE_DELAY,
            max_lines: MAX_LINES,
        }
    }

    /// 設定のポートを開く。開けなければ未接続のリーダーを返す
    pub fn connect(port: &str, baud_rate: u32) -> Self {
        match SerialScale::open(port, baud_rate) {
            Ok(scale) => {
                log::info!("Scale connected on {} @ {} baud", port, baud_rate);
                Self::new(Some(Box::new(scale)))
            }
            Err(e) => {
                log::warn!("Scale not available on {}: {}", port, e);
                Self::new(None)
            }
        }
    }

    pub fn disconnected() -> Self {
        Self::new(None)
    }

    /// 待機時間を変更（テスト用）
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    /// スケールから1回読み取る
    ///
    /// # Returns
    /// * `Ok(Weight)` - 最初に見つかった数値（グラム、小数2桁）
    /// * `Err(DeviceNotConnected)` - スケール未接続
    /// * `Err(NoWeightDetected)` - 最大行数まで読んでも数値なし
    /// * `Err(Serial)` - ポートの入出力エラー
    pub fn read(&mut self) -> Result<Weight> {
        let link = self.link.as_mut().ok_or(WeighProError::DeviceNotConnected)?;

        link.discard_input()
            .map_err(|e| WeighProError::Serial(e.to_string()))?;
        std::thread::sleep(self.settle);

        for n in 0..self.max_lines {
            let raw = link.read_line()
                .map_err(|e| WeighProError::Serial(e.to_string()))?;
            let line = decode_ignoring_invalid(&raw);

            if let Some(weight) = parse_frame(&line) {
                log::debug!("Weight {} g from line {}: {:?}", weight, n + 1, line.trim_end());
                return Ok(weight);
            }
            log::debug!("No number in line {}: {:?}", n + 1, line.trim_end());
        }

        Err(WeighProError::NoWeightDetected)
    }
}

/// UTF-8として不正なバイトを読み飛ばしてデコード
fn decode_ignoring_invalid(raw: &[u8]) -> String {
    let mut line = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        line.push_str(chunk.valid());
    }
    line
}
