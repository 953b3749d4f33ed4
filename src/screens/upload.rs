//! アップロード画面
//!
//! ファイル選択 → プレビュー（レコード数・列数）→ 識別子列の選択 → 送信

use crate::api::{DedupApi, UploadFile};
use crate::error::{GoldenRecordError, Result};
use crate::workbook;
use goldenrecord_common::{LoadState, Screen, SheetPreview, UploadAck};
use tracing::{info, warn};

/// 選択中のファイル
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file: UploadFile,
    pub preview: SheetPreview,
}

#[derive(Debug, Default)]
pub struct UploadScreen {
    selected: Option<SelectedFile>,
    identifier: Option<String>,
    status: LoadState<UploadAck>,
}

impl UploadScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択してプレビューを作成
    ///
    /// 解析に失敗した場合は以前の状態を保持したままエラーを返す。
    pub fn select_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<&SheetPreview> {
        workbook::ensure_xlsx(name)?;
        let preview = workbook::preview_bytes(&bytes).inspect_err(|e| {
            warn!(file = name, error = %e, "preview failed");
        })?;

        info!(
            file = name,
            records = preview.record_count,
            features = preview.feature_count,
            "file selected"
        );

        self.identifier = preview.default_identifier().map(String::from);
        self.status = LoadState::Idle;
        let selected = self.selected.insert(SelectedFile {
            file: UploadFile {
                name: name.to_string(),
                bytes,
            },
            preview,
        });
        Ok(&selected.preview)
    }

    /// 識別子列を選択（ヘッダーにある列のみ）
    pub fn select_identifier(&mut self, column: &str) -> Result<()> {
        let preview = self
            .preview()
            .ok_or_else(|| GoldenRecordError::Validation("ファイルが選択されていません".into()))?;

        if !preview.has_column(column) {
            return Err(goldenrecord_common::Error::UnknownColumn(column.to_string()).into());
        }

        self.identifier = Some(column.to_string());
        Ok(())
    }

    /// ファイルと識別子列を送信
    pub async fn upload<A: DedupApi + ?Sized>(&mut self, api: &A) -> Result<UploadAck> {
        let selected = self
            .selected
            .as_ref()
            .ok_or_else(|| GoldenRecordError::Validation("ファイルが選択されていません".into()))?;
        let identifier = self
            .identifier
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GoldenRecordError::Validation("識別子列が選択されていません".into()))?;

        self.status.begin();
        match api.upload(&selected.file, identifier).await {
            Ok(ack) => {
                info!(file = %selected.file.name, identifier, "uploaded");
                self.status = LoadState::Loaded(ack.clone());
                Ok(ack)
            }
            Err(e) => {
                warn!(error = %e, "upload failed");
                self.status = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn preview(&self) -> Option<&SheetPreview> {
        self.selected.as_ref().map(|s| &s.preview)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.file.name.as_str())
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn status(&self) -> &LoadState<UploadAck> {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.status.is_loading()
    }

    /// アップロード成功後のみ次へ進める
    pub fn can_continue(&self) -> bool {
        self.status.is_loaded()
    }

    pub fn next(&self) -> Option<Screen> {
        self.can_continue().then_some(Screen::Confirm)
    }
}
