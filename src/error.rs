use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldenRecordError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error(".xlsx ファイルのみ対応しています: {0}")]
    UnsupportedFile(String),

    #[error("シート読み込みエラー: {0}")]
    SheetParse(String),

    #[error("入力エラー: {0}")]
    Validation(String),

    #[error("API呼び出しエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("APIがエラーを返しました ({status}): {body}")]
    ApiStatus { status: u16, body: String },

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] goldenrecord_common::Error),
}

pub type Result<T> = std::result::Result<T, GoldenRecordError>;
