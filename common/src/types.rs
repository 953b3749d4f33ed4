//! バックエンドAPIの型定義
//!
//! - CandidatePair: /predict が返す重複候補ペア
//! - PredictResponse: /predict のレスポンス（新旧2形式を吸収）
//! - FeedbackEntry / FeedbackPayload: /feedback に送る判定結果
//! - ReportStats: /report/stats の集計値

use crate::decision::Decision;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// エンティティ識別子（数値または文字列）
///
/// 受け取ったJSON表現のまま /feedback に返す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Int(n)
    }
}

impl From<i32> for EntityId {
    fn from(n: i32) -> Self {
        EntityId::Int(i64::from(n))
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// エンティティのレコード（列名 → 値、列順維持）
pub type EntityRecord = Map<String, Value>;

/// 重複候補ペア
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub id1: EntityId,
    pub id2: EntityId,

    #[serde(default)]
    pub name1: String,

    #[serde(default)]
    pub name2: String,

    #[serde(default)]
    pub entity1: EntityRecord,

    #[serde(default)]
    pub entity2: EntityRecord,

    /// 一致確率（モデル出力）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prob: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfidf_sim: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_sim: Option<f64>,
}

impl CandidatePair {
    pub fn key(&self) -> PairKey {
        PairKey {
            id1: self.id1.clone(),
            id2: self.id2.clone(),
        }
    }
}

/// ペアの識別キー（表示形式 "id1-id2"）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub id1: EntityId,
    pub id2: EntityId,
}

impl PairKey {
    pub fn new(id1: impl Into<EntityId>, id2: impl Into<EntityId>) -> Self {
        Self {
            id1: id1.into(),
            id2: id2.into(),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id1, self.id2)
    }
}

/// /predict のレスポンス
///
/// 旧形式 `{ pairs }` と現行形式 `{ all_pairs, suspicious_pairs }` の両方を受け付ける。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictResponse {
    pub suspicious_pairs: Option<Vec<CandidatePair>>,
    pub pairs: Option<Vec<CandidatePair>>,
    pub all_pairs: Option<Vec<CandidatePair>>,
}

impl PredictResponse {
    /// レビュー対象のペア
    ///
    /// suspicious_pairs を優先し、なければ pairs。all_pairs は対象外。
    pub fn review_pairs(self) -> Vec<CandidatePair> {
        self.suspicious_pairs.or(self.pairs).unwrap_or_default()
    }
}

/// 1ペア分の判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id1: EntityId,
    pub id2: EntityId,
    pub decision: Decision,
}

/// /feedback のリクエストボディ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub feedback: Vec<FeedbackEntry>,
}

/// /upload のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadAck {
    pub status: String,
    pub identifier: String,
}

/// /feedback のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackAck {
    pub status: String,
    pub count: usize,
}

/// /report/stats の集計値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub golden_records: u64,
    pub duplicates: u64,
    pub low_certainty: u64,
}
