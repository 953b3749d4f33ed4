//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sheet is empty")]
    EmptySheet,

    #[error("Sheet has a header row but no records")]
    NoDataRows,

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown pair: {0}")]
    UnknownPair(String),

    #[error("Invalid decision: {0} (use Undecided, Yes or No)")]
    InvalidDecision(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
