use crate::error::{GoldenRecordError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// バックエンドURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "GOLDENRECORD_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            timeout_seconds: 60,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GoldenRecordError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("goldenrecord").join("config.json"))
    }

    /// バックエンドURLを設定して保存
    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = normalize_base_url(&url)?;
        self.save()
    }

    /// エンドポイントのURL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// URLの書式チェック（http/httpsのみ、末尾スラッシュ除去）
pub fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(GoldenRecordError::Config(format!(
            "URLは http:// または https:// で始めてください: {}",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
