//! xlsx 読み込みテスト

mod support;

use goldenrecord::error::GoldenRecordError;
use goldenrecord::pipeline::read_upload_file;
use goldenrecord::workbook::{preview_bytes, read_first_sheet, summarize_report, SheetSummary};
use support::{customers_xlsx, xlsx_bytes, xlsx_with_sheets};
use tempfile::tempdir;

/// ヘッダー [ID, Name, Email] + 5行
#[test]
fn test_preview_customers() {
    let preview = preview_bytes(&customers_xlsx()).unwrap();
    assert_eq!(preview.record_count, 5);
    assert_eq!(preview.feature_count, 3);
    assert_eq!(preview.default_identifier(), Some("ID"));
}

/// 識別子の選択肢はヘッダーと同じ順序
#[test]
fn test_identifier_options_follow_header_order() {
    let header = ["Zip", "Email", "First Name", "Birthdate"];
    let rows = vec![vec!["1000", "x@example.com", "Ann", "1990-01-01"]];
    let preview = preview_bytes(&xlsx_bytes(&header, &rows)).unwrap();
    assert_eq!(preview.columns, header.map(String::from).to_vec());
}

/// record_count = 行数 - 1
#[test]
fn test_record_count_is_rows_minus_header() {
    for n in [1usize, 2, 17] {
        let rows: Vec<Vec<&str>> = (0..n).map(|_| vec!["a", "b"]).collect();
        let bytes = xlsx_bytes(&["A", "B"], &rows);
        assert_eq!(read_first_sheet(&bytes).unwrap().len(), n + 1);
        assert_eq!(preview_bytes(&bytes).unwrap().record_count, n);
    }
}

/// 途中の空行もレコードとして数える
#[test]
fn test_blank_row_between_records_is_counted() {
    let rows: Vec<Vec<&str>> = vec![vec!["1", "A", "a"], vec!["", "", ""], vec!["3", "C", "c"]];
    let bytes = xlsx_bytes(&["ID", "Name", "Email"], &rows);
    assert_eq!(read_first_sheet(&bytes).unwrap().len(), 4);
    assert_eq!(preview_bytes(&bytes).unwrap().record_count, 3);
}

/// ヘッダーのみのシート
#[test]
fn test_header_only_sheet() {
    let bytes = xlsx_bytes(&["ID", "Name"], &[]);
    let result = preview_bytes(&bytes);
    assert!(matches!(
        result,
        Err(GoldenRecordError::Common(goldenrecord_common::Error::NoDataRows))
    ));
}

/// 先頭シートのみを読む
#[test]
fn test_only_first_sheet_is_read() {
    let first: Vec<Vec<&str>> = vec![vec!["1"], vec!["2"]];
    let second: Vec<Vec<&str>> = vec![vec!["x", "y", "z"]];
    let bytes = xlsx_with_sheets(&[
        ("Customers", vec!["ID"], first),
        ("Other", vec!["A", "B", "C"], second),
    ]);
    let preview = preview_bytes(&bytes).unwrap();
    assert_eq!(preview.columns, vec!["ID"]);
    assert_eq!(preview.record_count, 2);
}

/// ダウンロードしたレポートの概要
#[test]
fn test_summarize_report_sheets() {
    let golden: Vec<Vec<&str>> = vec![vec!["0", "Anna"], vec!["1", "Bob"]];
    let clusters: Vec<Vec<&str>> = vec![vec!["0"], vec!["0"], vec!["1"]];
    let suspicious: Vec<Vec<&str>> = vec![];
    let bytes = xlsx_with_sheets(&[
        ("Golden Records", vec!["cluster", "First Name"], golden),
        ("Clusters", vec!["cluster"], clusters),
        ("Suspicious Pairs", vec!["id1", "id2"], suspicious),
    ]);

    let dir = tempdir().unwrap();
    let path = dir.path().join("golden_record.xlsx");
    std::fs::write(&path, bytes).unwrap();

    let summary = summarize_report(&path).unwrap();
    assert_eq!(
        summary,
        vec![
            SheetSummary { name: "Golden Records".into(), rows: 2 },
            SheetSummary { name: "Clusters".into(), rows: 3 },
            SheetSummary { name: "Suspicious Pairs".into(), rows: 0 },
        ]
    );
}

/// ローカルファイルの読み込み
#[test]
fn test_read_upload_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("customers.xlsx");
    std::fs::write(&path, customers_xlsx()).unwrap();

    let file = read_upload_file(&path).unwrap();
    assert_eq!(file.name, "customers.xlsx");
    assert_eq!(file.bytes, customers_xlsx());
}
