//! 画面コントローラ
//!
//! 各画面は自分の状態だけを持ち、画面遷移で破棄される。

pub mod confirm;
pub mod report;
pub mod upload;

pub use confirm::ConfirmScreen;
pub use report::{ReportScreen, REPORT_FILE_NAME};
pub use upload::UploadScreen;
