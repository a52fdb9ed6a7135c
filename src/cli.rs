use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weighpro")]
#[command(about = "レシピ材料の計量・合否記録ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式の計量キオスクを起動
    Kiosk,

    /// スケールから1回読み取って表示
    Read,

    /// 材料を計量してログブックに記録
    Record {
        /// サンプル枠（例: "Sample Weight 1"）
        #[arg(required = true)]
        sample: String,

        /// 材料名（例: Noodles）
        #[arg(required = true)]
        ingredient: String,

        /// スケールを使わずに実測値（グラム）を指定
        #[arg(short, long)]
        actual: Option<f64>,
    },

    /// 本日の生産サマリーを表示
    Summary,

    /// サンプル枠とレシピ一覧を表示
    Recipes,

    /// 利用可能なシリアルポートを表示
    Ports,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,

        /// シリアルポートを設定
        #[arg(long)]
        port: Option<String>,

        /// ボーレートを設定
        #[arg(long)]
        baud: Option<u32>,

        /// ログブックの保存先を設定
        #[arg(long)]
        log_path: Option<PathBuf>,

        /// 許容誤差（±グラム）を設定
        #[arg(long)]
        tolerance: Option<f64>,
    },
}
