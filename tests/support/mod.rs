#![allow(dead_code)]

use async_trait::async_trait;
use goldenrecord::api::{Blob, DedupApi, UploadFile};
use goldenrecord::error::{GoldenRecordError, Result};
use goldenrecord_common::{FeedbackAck, FeedbackPayload, PredictResponse, ReportStats, UploadAck};
use rust_xlsxwriter::Workbook;
use std::sync::Mutex;

/// 記録用: アップロードされた内容
#[derive(Debug, Clone)]
pub struct UploadCall {
    pub name: String,
    pub size: usize,
    pub identifier: String,
}

/// メモリ上のバックエンド
///
/// `fail` に含まれるエンドポイントは 500 を返す。
#[derive(Default)]
pub struct FakeApi {
    pub predict_body: serde_json::Value,
    pub stats: ReportStats,
    pub shap: Blob,
    pub report: Blob,
    pub fail: Vec<&'static str>,
    pub uploads: Mutex<Vec<UploadCall>>,
    pub feedback: Mutex<Vec<FeedbackPayload>>,
}

impl FakeApi {
    fn check(&self, endpoint: &'static str) -> Result<()> {
        if self.fail.contains(&endpoint) {
            Err(GoldenRecordError::ApiStatus {
                status: 500,
                body: format!("{} exploded", endpoint),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DedupApi for FakeApi {
    async fn upload(&self, file: &UploadFile, identifier: &str) -> Result<UploadAck> {
        self.check("upload")?;
        self.uploads.lock().unwrap().push(UploadCall {
            name: file.name.clone(),
            size: file.bytes.len(),
            identifier: identifier.to_string(),
        });
        Ok(UploadAck {
            status: "uploaded".into(),
            identifier: identifier.to_string(),
        })
    }

    async fn predict(&self) -> Result<PredictResponse> {
        self.check("predict")?;
        Ok(serde_json::from_value(self.predict_body.clone())?)
    }

    async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<FeedbackAck> {
        self.check("feedback")?;
        self.feedback.lock().unwrap().push(payload.clone());
        Ok(FeedbackAck {
            status: "feedback saved".into(),
            count: payload.feedback.len(),
        })
    }

    async fn report_stats(&self) -> Result<ReportStats> {
        self.check("stats")?;
        Ok(self.stats)
    }

    async fn report_shap(&self) -> Result<Blob> {
        self.check("shap")?;
        Ok(self.shap.clone())
    }

    async fn report(&self) -> Result<Blob> {
        self.check("report")?;
        Ok(self.report.clone())
    }
}

/// 候補ペアのJSON
pub fn pair_json(id1: i64, id2: i64) -> serde_json::Value {
    serde_json::json!({
        "id1": id1,
        "id2": id2,
        "name1": format!("Person {}", id1),
        "name2": format!("Person {}", id2),
        "entity1": { "ID": id1, "Email": format!("p{}@example.com", id1) },
        "entity2": { "ID": id2, "Email": format!("p{}@example.com", id2) },
        "prob": 0.5
    })
}

/// ヘッダー + 行データの xlsx を生成
pub fn xlsx_bytes(header: &[&str], rows: &[Vec<&str>]) -> Vec<u8> {
    xlsx_with_sheets(&[("Sheet1", header.to_vec(), rows.to_vec())])
}

/// (シート名, ヘッダー, 行データ) の複数シート xlsx を生成
pub fn xlsx_with_sheets(sheets: &[(&str, Vec<&str>, Vec<Vec<&str>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, header, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (col, title) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                sheet.write_string(r as u32 + 1, col as u16, *value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// ID, Name, Email の5レコード
pub fn customers_xlsx() -> Vec<u8> {
    let rows: Vec<Vec<&str>> = vec![
        vec!["1", "Anna", "anna@example.com"],
        vec!["2", "Ana", "anna@example.com"],
        vec!["3", "Bob", "bob@example.com"],
        vec!["4", "Bobby", "bob@example.com"],
        vec!["5", "Carol", "carol@example.com"],
    ];
    xlsx_bytes(&["ID", "Name", "Email"], &rows)
}
