//! reqwest による DedupApi 実装

use super::{Blob, DedupApi, UploadFile};
use crate::config::Config;
use crate::error::{GoldenRecordError, Result};
use crate::workbook::XLSX_MIME;
use async_trait::async_trait;
use goldenrecord_common::{FeedbackAck, FeedbackPayload, PredictResponse, ReportStats, UploadAck};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpApi {
    http: Client,
    config: Config,
}

impl HttpApi {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.inspect_err(|e| {
            warn!(%url, error = %e, "request failed");
        })?;
        check_status(&url, response).await
    }

    async fn get_blob(&self, path: &str) -> Result<Blob> {
        let response = self.get(path).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response.bytes().await?.to_vec();
        debug!(path, size = bytes.len(), ?content_type, "blob received");
        Ok(Blob { bytes, content_type })
    }
}

/// 2xx 以外をエラーに変換
async fn check_status(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(%url, status = status.as_u16(), %body, "backend returned an error");
    Err(GoldenRecordError::ApiStatus {
        status: status.as_u16(),
        body,
    })
}

/// JSON ボディをデコード
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        warn!(error = %e, "undecodable response body");
        GoldenRecordError::ApiParse(e.to_string())
    })
}

#[async_trait]
impl DedupApi for HttpApi {
    async fn upload(&self, file: &UploadFile, identifier: &str) -> Result<UploadAck> {
        let url = self.config.endpoint("/upload");
        debug!(%url, file = %file.name, identifier, "POST multipart");

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(XLSX_MIME)?;
        let form = Form::new()
            .part("file", part)
            .text("identifier", identifier.to_string());

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| warn!(%url, error = %e, "upload failed"))?;
        read_json(check_status(&url, response).await?).await
    }

    async fn predict(&self) -> Result<PredictResponse> {
        read_json(self.get("/predict").await?).await
    }

    async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<FeedbackAck> {
        let url = self.config.endpoint("/feedback");
        debug!(%url, entries = payload.feedback.len(), "POST json");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .inspect_err(|e| warn!(%url, error = %e, "feedback failed"))?;
        read_json(check_status(&url, response).await?).await
    }

    async fn report_stats(&self) -> Result<ReportStats> {
        read_json(self.get("/report/stats").await?).await
    }

    async fn report_shap(&self) -> Result<Blob> {
        self.get_blob("/report/shap").await
    }

    async fn report(&self) -> Result<Blob> {
        self.get_blob("/report").await
    }
}
