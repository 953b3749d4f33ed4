//! xlsx 読み込み
//!
//! アップロード前のプレビューと、ダウンロードしたレポートの概要表示に使う。

use crate::error::{GoldenRecordError, Result};
use calamine::{open_workbook, Reader, Xlsx, XlsxError};
use goldenrecord_common::SheetPreview;
use std::io::Cursor;
use std::path::Path;

/// xlsx の MIME タイプ
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 拡張子チェック（.xlsx のみ）
pub fn ensure_xlsx(name: &str) -> Result<()> {
    let is_xlsx = Path::new(name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if is_xlsx {
        Ok(())
    } else {
        Err(GoldenRecordError::UnsupportedFile(name.to_string()))
    }
}

/// 先頭シートを行優先の文字列グリッドとして読み込み
pub fn read_first_sheet(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| GoldenRecordError::SheetParse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GoldenRecordError::SheetParse("シートがありません".into()))?
        .map_err(|e| GoldenRecordError::SheetParse(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}

/// xlsx のバイト列からプレビューを作成
pub fn preview_bytes(bytes: &[u8]) -> Result<SheetPreview> {
    let rows = read_first_sheet(bytes)?;
    Ok(SheetPreview::from_rows(rows)?)
}

/// シートごとの概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    /// ヘッダーを除いた行数
    pub rows: usize,
}

/// ダウンロード済みレポートのシート一覧と行数
pub fn summarize_report(path: &Path) -> Result<Vec<SheetSummary>> {
    if !path.exists() {
        return Err(GoldenRecordError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: XlsxError| GoldenRecordError::SheetParse(e.to_string()))?;

    let mut summaries = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| GoldenRecordError::SheetParse(e.to_string()))?;
        summaries.push(SheetSummary {
            name,
            rows: range.height().saturating_sub(1),
        });
    }

    Ok(summaries)
}
