//! GoldenRecord client
//!
//! 名寄せバックエンドに対するアップロード・重複確認・レポート取得のクライアント

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod screens;
pub mod workbook;
