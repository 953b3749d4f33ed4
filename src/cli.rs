use clap::{Parser, Subcommand};
use goldenrecord_common::Decision;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goldenrecord")]
#[command(about = "GoldenRecord 名寄せワークフロー（アップロード → 重複確認 → レポート）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// xlsx をプレビューしてアップロード
    Upload {
        /// xlsx ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 識別子列（省略時は対話選択）
        #[arg(short, long)]
        identifier: Option<String>,

        /// 確認せずに先頭列を識別子にする
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// 重複候補ペアを確認して判定を送信
    Review {
        /// 全ペアに同じ判定を付けて送信 (undecided/yes/no)
        #[arg(long, value_parser = parse_decision)]
        all: Option<Decision>,

        /// 判定結果を xlsx にも保存
        #[arg(long)]
        feedback_log: Option<PathBuf>,
    },

    /// 集計値を表示してレポートをダウンロード
    Report {
        /// 出力ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポート xlsx をダウンロードしない
        #[arg(long)]
        no_download: bool,
    },

    /// アップロードからレポートまで一括実行
    Run {
        /// xlsx ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 識別子列
        #[arg(short, long)]
        identifier: Option<String>,

        /// 確認せずに先頭列を識別子にする
        #[arg(short = 'y', long)]
        yes: bool,

        /// 全ペアに同じ判定を付けて送信 (undecided/yes/no)
        #[arg(long, value_parser = parse_decision)]
        all: Option<Decision>,

        /// 判定結果を xlsx にも保存
        #[arg(long)]
        feedback_log: Option<PathBuf>,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

fn parse_decision(s: &str) -> Result<Decision, String> {
    s.parse::<Decision>().map_err(|e| e.to_string())
}
