//! レポート画面
//!
//! 集計値と SHAP 画像を並行取得し、レポート xlsx をダウンロードする。

use crate::api::{Blob, DedupApi};
use crate::error::{GoldenRecordError, Result};
use goldenrecord_common::{LoadState, ReportStats, Screen};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// ダウンロードしたレポートのファイル名
pub const REPORT_FILE_NAME: &str = "golden_record.xlsx";

const SHAP_FILE_STEM: &str = "shap_beeswarm";

#[derive(Debug, Default)]
pub struct ReportScreen {
    stats: LoadState<ReportStats>,
    shap: LoadState<Blob>,
}

impl ReportScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 集計値と SHAP 画像を取得（それぞれ独立に反映）
    pub async fn load<A: DedupApi + ?Sized>(&mut self, api: &A) {
        self.stats.begin();
        self.shap.begin();

        let (stats, shap) = tokio::join!(api.report_stats(), api.report_shap());

        if let Err(e) = &stats {
            warn!(error = %e, "failed to load report stats");
        }
        if let Err(e) = &shap {
            warn!(error = %e, "failed to load SHAP image");
        }

        self.stats.finish(stats);
        self.shap.finish(shap);
    }

    pub fn stats(&self) -> &LoadState<ReportStats> {
        &self.stats
    }

    pub fn shap(&self) -> &LoadState<Blob> {
        &self.shap
    }

    /// 取得済みの SHAP 画像を保存
    pub fn save_shap(&self, dir: &Path) -> Result<PathBuf> {
        let blob = self
            .shap
            .loaded()
            .ok_or_else(|| GoldenRecordError::Validation("SHAP画像が取得されていません".into()))?;

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.{}", SHAP_FILE_STEM, blob.extension()));
        std::fs::write(&path, &blob.bytes)?;
        info!(path = %path.display(), "SHAP image saved");
        Ok(path)
    }

    /// レポートをダウンロードして dir/golden_record.xlsx に保存
    pub async fn export<A: DedupApi + ?Sized>(&self, api: &A, dir: &Path) -> Result<PathBuf> {
        let blob = api.report().await?;
        if blob.bytes.is_empty() {
            return Err(GoldenRecordError::ApiParse("レポートが空です".into()));
        }

        std::fs::create_dir_all(dir)?;
        let path = dir.join(REPORT_FILE_NAME);
        std::fs::write(&path, &blob.bytes)?;
        info!(path = %path.display(), size = blob.bytes.len(), "report downloaded");
        Ok(path)
    }

    /// やり直し（アップロード画面へ戻る）
    pub fn redo(self) -> Screen {
        Screen::Upload
    }
}
