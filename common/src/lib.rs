//! GoldenRecord Common Library
//!
//! CLIクライアントで共有される型とレビューロジック（I/Oなし）

pub mod decision;
pub mod error;
pub mod preview;
pub mod state;
pub mod types;

pub use decision::{Decision, DecisionCounts, DecisionSet};
pub use error::{Error, Result};
pub use preview::SheetPreview;
pub use state::{LoadState, Screen};
pub use types::{
    CandidatePair, EntityId, EntityRecord, FeedbackAck, FeedbackEntry, FeedbackPayload, PairKey,
    PredictResponse, ReportStats, UploadAck,
};
