//! 画面の読み込み状態と画面遷移

use std::fmt::Display;

/// 非同期読み込みの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// 読み込み開始
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    /// 結果を反映（エラーはメッセージとして保持）
    pub fn finish<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// 画面（アップロード → 重複確認 → レポート）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Confirm,
    Report,
}

impl Screen {
    /// 次の画面。レポート画面の次（やり直し）はアップロード画面。
    pub fn next(self) -> Screen {
        match self {
            Screen::Upload => Screen::Confirm,
            Screen::Confirm => Screen::Report,
            Screen::Report => Screen::Upload,
        }
    }
}
