//! 対話式ワークフロー
//!
//! アップロード → 重複確認 → レポート の順に画面を進める。
//! 画面間で共有する状態はなく、各画面はバックエンドから取り直す。

use crate::api::{DedupApi, UploadFile};
use crate::error::{GoldenRecordError, Result};
use crate::export;
use crate::screens::{ConfirmScreen, ReportScreen, UploadScreen};
use crate::workbook;
use dialoguer::{Confirm, Select};
use goldenrecord_common::{CandidatePair, Decision, LoadState, ReportStats, Screen};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// アップロード画面のオプション
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub identifier: Option<String>,
    pub assume_yes: bool,
}

/// 重複確認画面のオプション
#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    pub all: Option<Decision>,
    pub feedback_log: Option<PathBuf>,
}

/// レポート画面のオプション
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub download: bool,
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn prompt_err(e: dialoguer::Error) -> GoldenRecordError {
    GoldenRecordError::Prompt(e.to_string())
}

/// ローカルファイルを読み込み
pub fn read_upload_file(path: &Path) -> Result<UploadFile> {
    if !path.exists() {
        return Err(GoldenRecordError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    workbook::ensure_xlsx(&name)?;

    Ok(UploadFile {
        name,
        bytes: std::fs::read(path)?,
    })
}

/// アップロード画面
pub async fn run_upload<A: DedupApi + ?Sized>(
    api: &A,
    path: &Path,
    options: &UploadOptions,
) -> Result<UploadScreen> {
    let file = read_upload_file(path)?;
    let mut screen = UploadScreen::new();

    let preview = screen.select_file(&file.name, file.bytes)?.clone();
    println!("📄 {}", file.name);
    println!("  レコード数: {}", preview.record_count);
    println!("  列数: {}", preview.feature_count);

    match &options.identifier {
        Some(column) => screen.select_identifier(column)?,
        None if options.assume_yes => {}
        None => {
            let default = screen
                .identifier()
                .and_then(|id| preview.column_index(id))
                .unwrap_or(0);
            let choice = Select::new()
                .with_prompt("識別子列")
                .items(preview.columns.as_slice())
                .default(default)
                .interact()
                .map_err(prompt_err)?;
            screen.select_identifier(&preview.columns[choice])?;
        }
    }

    let pb = spinner("アップロード中...");
    let result = screen.upload(api).await;
    pb.finish_and_clear();
    result?;

    println!("✔ アップロード完了");
    println!("  Total records: {}", preview.record_count);
    println!("  Total features: {}", preview.feature_count);
    println!("  Entity identifier: {}", screen.identifier().unwrap_or_default());

    Ok(screen)
}

/// JSON 値を表示用文字列に
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// ペアの表示（名前・確率・フィールド一覧）
pub fn format_pair(index: usize, total: usize, pair: &CandidatePair) -> String {
    let mut out = format!("[{}/{}] {} ↔ {}", index + 1, total, pair.name1, pair.name2);
    if let Some(prob) = pair.prob {
        out.push_str(&format!(" (prob {:.2})", prob));
    }
    out.push('\n');

    let mut fields: Vec<&String> = pair.entity1.keys().collect();
    for key in pair.entity2.keys() {
        if !pair.entity1.contains_key(key) {
            fields.push(key);
        }
    }

    for key in fields {
        let left = pair.entity1.get(key).map(format_value).unwrap_or_default();
        let right = pair.entity2.get(key).map(format_value).unwrap_or_default();
        out.push_str(&format!("  {}: {} | {}\n", key, left, right));
    }

    out
}

/// 重複確認画面
///
/// 送信の成否に関わらずレポート画面へ進む。
pub async fn run_review<A: DedupApi + ?Sized>(api: &A, options: &ReviewOptions) -> Result<Screen> {
    let mut screen = ConfirmScreen::new();

    let pb = spinner("候補ペアを取得中...");
    let state = screen.load(api).await;
    pb.finish_and_clear();

    if let LoadState::Failed(message) = state {
        println!("⚠ 候補ペアの取得に失敗しました: {}", message);
    }

    let pairs = screen.pairs().to_vec();
    println!("🔍 重複候補: {}件\n", pairs.len());

    match options.all {
        Some(decision) => screen.set_all(decision),
        None => {
            let labels = Decision::ALL.map(|d| d.label());
            for (idx, pair) in pairs.iter().enumerate() {
                print!("{}", format_pair(idx, pairs.len(), pair));
                let choice = Select::new()
                    .with_prompt("Match?")
                    .items(&labels[..])
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;
                screen.set_decision(&pair.key(), Decision::ALL[choice])?;
                println!();
            }
        }
    }

    if let Some(path) = &options.feedback_log {
        export::write_feedback_log(path, &pairs, screen.decisions())?;
        println!("✔ 判定ログを保存: {}", path.display());
    }

    let counts = screen.decisions().counts();
    let next = screen.submit(api).await;
    match screen.submission() {
        LoadState::Loaded(_) => println!(
            "✔ 判定を送信しました (Yes: {}, No: {}, Undecided: {})",
            counts.yes, counts.no, counts.undecided
        ),
        LoadState::Failed(message) => println!("⚠ 判定の送信に失敗しました: {}", message),
        _ => {}
    }

    Ok(next)
}

/// 集計値の表示
pub fn format_stats(stats: &ReportStats) -> String {
    format!(
        "  Golden Records: {}\n  Duplicates: {}\n  Low Certainty: {}",
        stats.golden_records, stats.duplicates, stats.low_certainty
    )
}

/// レポート画面
pub async fn run_report<A: DedupApi + ?Sized>(api: &A, options: &ReportOptions) -> Result<ReportScreen> {
    let mut screen = ReportScreen::new();

    let pb = spinner("レポートを取得中...");
    screen.load(api).await;
    pb.finish_and_clear();

    println!("📊 レポート");
    match screen.stats() {
        LoadState::Loaded(stats) => println!("{}", format_stats(stats)),
        LoadState::Failed(message) => println!("⚠ 集計値の取得に失敗しました: {}", message),
        _ => {}
    }

    match screen.shap() {
        LoadState::Loaded(_) => match screen.save_shap(&options.output_dir) {
            Ok(path) => println!("✔ Feature Importance (SHAP): {}", path.display()),
            Err(e) => {
                warn!(error = %e, "failed to save SHAP image");
                println!("⚠ SHAP画像の保存に失敗しました: {}", e);
            }
        },
        LoadState::Failed(message) => println!("⚠ SHAP画像の取得に失敗しました: {}", message),
        _ => {}
    }

    if options.download {
        let pb = spinner("レポートをダウンロード中...");
        let result = screen.export(api, &options.output_dir).await;
        pb.finish_and_clear();
        let path = result?;
        println!("✔ レポート出力: {}", path.display());

        for sheet in workbook::summarize_report(&path)? {
            println!("  - {}: {}行", sheet.name, sheet.rows);
        }
    }

    Ok(screen)
}

/// アップロードからレポートまで一括実行（やり直し可）
pub async fn run_pipeline<A: DedupApi + ?Sized>(
    api: &A,
    path: &Path,
    upload: &UploadOptions,
    review: &ReviewOptions,
    report: &ReportOptions,
) -> Result<()> {
    let mut screen = Screen::Upload;

    loop {
        screen = match screen {
            Screen::Upload => {
                println!("[1/3] アップロード");
                let uploaded = run_upload(api, path, upload).await?;
                uploaded.next().unwrap_or(Screen::Upload)
            }
            Screen::Confirm => {
                println!("\n[2/3] 重複確認");
                run_review(api, review).await?
            }
            Screen::Report => {
                println!("\n[3/3] レポート");
                let report_screen = run_report(api, report).await?;

                let redo = !upload.assume_yes
                    && Confirm::new()
                        .with_prompt("やり直しますか？")
                        .default(false)
                        .interact()
                        .map_err(prompt_err)?;
                if !redo {
                    break;
                }
                println!();
                report_screen.redo()
            }
        };
    }

    println!("\n✅ 完了");
    Ok(())
}
