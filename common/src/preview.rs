//! アップロード前のシートプレビュー
//!
//! 先頭シートの行データ（行優先のグリッド）から以下を算出する:
//! - 列名（1行目 = ヘッダー）
//! - レコード数（ヘッダー以外の行数）
//! - 特徴量数（列数）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// シートのプレビュー結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPreview {
    /// ヘッダー行（識別子列の選択肢、順序維持）
    pub columns: Vec<String>,
    /// データ行数
    pub record_count: usize,
    /// 列数
    pub feature_count: usize,
}

impl SheetPreview {
    /// 行データからプレビューを作成
    ///
    /// ヘッダーより前の空行は読み飛ばす。ヘッダー以降の行は空行も
    /// レコードとして数える（バックエンドの取り込みと同じ件数）。
    /// ヘッダー末尾の空セルは列として数えない。
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let mut rows = rows
            .into_iter()
            .skip_while(|row| row.iter().all(|cell| cell.trim().is_empty()));

        let mut header = rows.next().ok_or(Error::EmptySheet)?;
        while header.last().is_some_and(|cell| cell.trim().is_empty()) {
            header.pop();
        }

        let record_count = rows.count();
        if record_count == 0 {
            return Err(Error::NoDataRows);
        }

        Ok(Self {
            feature_count: header.len(),
            columns: header,
            record_count,
        })
    }

    /// 識別子の初期値（先頭列）
    pub fn default_identifier(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// 列名の位置（選択UIの初期カーソル用）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
