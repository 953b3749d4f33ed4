//! 名寄せバックエンドAPI
//!
//! | Method/Path        | 用途                         |
//! |--------------------|------------------------------|
//! | POST /upload       | xlsx と識別子列を送信         |
//! | GET  /predict      | 重複候補ペアを取得            |
//! | POST /feedback     | ペアごとの判定を一括送信      |
//! | GET  /report/stats | 集計値                        |
//! | GET  /report/shap  | SHAP 画像                     |
//! | GET  /report       | レポート xlsx                 |

mod http;

pub use http::HttpApi;

use crate::error::Result;
use async_trait::async_trait;
use goldenrecord_common::{FeedbackAck, FeedbackPayload, PredictResponse, ReportStats, UploadAck};

/// アップロードするファイル
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// バイナリレスポンス（画像・xlsx）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl Blob {
    /// Content-Type から保存用の拡張子を決める
    pub fn extension(&self) -> &'static str {
        let mime = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/svg+xml") => "svg",
            Some("image/gif") => "gif",
            Some("image/webp") => "webp",
            _ => "png",
        }
    }
}

#[async_trait]
pub trait DedupApi: Send + Sync {
    async fn upload(&self, file: &UploadFile, identifier: &str) -> Result<UploadAck>;

    async fn predict(&self) -> Result<PredictResponse>;

    async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<FeedbackAck>;

    async fn report_stats(&self) -> Result<ReportStats>;

    async fn report_shap(&self) -> Result<Blob>;

    async fn report(&self) -> Result<Blob>;
}
