//! レビュー結果ログ（xlsx）
//!
//! 送信した判定をローカルにも残す。1ペア1行。

use crate::error::Result;
use goldenrecord_common::{CandidatePair, DecisionSet, EntityId};
use rust_xlsxwriter::*;
use std::path::Path;

pub const SHEET_NAME: &str = "Uncertain Pairs + Feedback";

const HEADERS: [&str; 7] = ["No.", "id1", "id2", "name1", "name2", "prob", "decision"];

/// f64 で正確に表せる整数の上限 (2^53)
const MAX_EXACT_INT: i64 = 1 << 53;

/// 2^53 を超える整数IDは精度が落ちるので文字列で書く
fn write_id(sheet: &mut Worksheet, row: u32, col: u16, id: &EntityId) -> Result<()> {
    match id {
        EntityId::Int(n) if n.unsigned_abs() <= MAX_EXACT_INT as u64 => {
            sheet.write_number(row, col, *n as f64)?
        }
        other => sheet.write_string(row, col, other.to_string())?,
    };
    Ok(())
}

/// ペアと判定を xlsx に書き出し
pub fn write_feedback_log(path: &Path, pairs: &[CandidatePair], decisions: &DecisionSet) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold().set_background_color(Color::Silver);
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (idx, pair) in pairs.iter().enumerate() {
        let row = idx as u32 + 1;
        let decision = decisions.get(&pair.key()).unwrap_or_default();

        sheet.write_number(row, 0, (idx + 1) as f64)?;
        write_id(sheet, row, 1, &pair.id1)?;
        write_id(sheet, row, 2, &pair.id2)?;
        sheet.write_string(row, 3, &pair.name1)?;
        sheet.write_string(row, 4, &pair.name2)?;
        if let Some(prob) = pair.prob {
            sheet.write_number(row, 5, prob)?;
        }
        sheet.write_string(row, 6, decision.label())?;
    }

    sheet.set_column_width(3, 24)?;
    sheet.set_column_width(4, 24)?;
    sheet.set_column_width(6, 12)?;

    workbook.save(path)?;
    Ok(())
}
