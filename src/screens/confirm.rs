//! 重複確認画面
//!
//! 候補ペアを取得し、ペアごとに Undecided / Yes / No を選んで一括送信する。

use crate::api::DedupApi;
use crate::error::Result;
use goldenrecord_common::{
    CandidatePair, Decision, DecisionSet, FeedbackAck, FeedbackPayload, LoadState, PairKey, Screen,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct ConfirmScreen {
    pairs: LoadState<Vec<CandidatePair>>,
    decisions: DecisionSet,
    submission: LoadState<FeedbackAck>,
}

impl ConfirmScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 候補ペアを取得し、全ペアを Undecided で初期化
    ///
    /// 同じキーのペアは最初の1件だけ残す（表示件数 = 送信件数）。
    pub async fn load<A: DedupApi + ?Sized>(&mut self, api: &A) -> &LoadState<Vec<CandidatePair>> {
        self.pairs.begin();
        self.decisions = DecisionSet::default();

        match api.predict().await {
            Ok(response) => {
                let received = response.review_pairs();
                let total = received.len();
                let mut seen = HashSet::new();
                let pairs: Vec<CandidatePair> = received
                    .into_iter()
                    .filter(|pair| seen.insert(pair.key()))
                    .collect();
                if pairs.len() < total {
                    debug!(dropped = total - pairs.len(), "duplicate pairs dropped");
                }
                info!(pairs = pairs.len(), "suspicious pairs loaded");
                self.decisions = DecisionSet::from_pairs(&pairs);
                self.pairs = LoadState::Loaded(pairs);
            }
            Err(e) => {
                warn!(error = %e, "failed to load suspicious pairs");
                self.pairs = LoadState::Failed(e.to_string());
            }
        }

        &self.pairs
    }

    pub fn pairs(&self) -> &[CandidatePair] {
        self.pairs.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn state(&self) -> &LoadState<Vec<CandidatePair>> {
        &self.pairs
    }

    pub fn decisions(&self) -> &DecisionSet {
        &self.decisions
    }

    pub fn decision(&self, key: &PairKey) -> Option<Decision> {
        self.decisions.get(key)
    }

    /// 1ペアの判定を変更
    pub fn set_decision(&mut self, key: &PairKey, decision: Decision) -> Result<()> {
        self.decisions.set(key, decision)?;
        Ok(())
    }

    /// 全ペアに同じ判定を設定
    pub fn set_all(&mut self, decision: Decision) {
        self.decisions.set_all(decision);
    }

    /// 判定を一括送信
    ///
    /// 送信結果に関わらずレポート画面へ進む。結果は submission() で確認できる。
    pub async fn submit<A: DedupApi + ?Sized>(&mut self, api: &A) -> Screen {
        let payload = FeedbackPayload {
            feedback: self.decisions.to_feedback(),
        };

        self.submission.begin();
        let result = api.send_feedback(&payload).await;
        match &result {
            Ok(ack) => info!(entries = payload.feedback.len(), saved = ack.count, "feedback sent"),
            Err(e) => warn!(error = %e, "feedback submission failed"),
        }
        self.submission.finish(result);

        Screen::Report
    }

    pub fn submission(&self) -> &LoadState<FeedbackAck> {
        &self.submission
    }
}
