use crate::error::{PhotoClassifyError, Result};
use photo_classify_common::ResponsePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";
pub const DEFAULT_FIELD_NAME: &str = "image";
pub const ENDPOINT_ENV: &str = "PHOTO_CLASSIFY_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 推論サービスのURL
    pub endpoint: String,
    /// multipartのフィールド名
    pub field_name: String,
    /// HTTPタイムアウト（未設定なら無制限）
    pub timeout_seconds: Option<u64>,
    /// 古い応答の扱い
    pub response_policy: ResponsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: DEFAULT_FIELD_NAME.into(),
            timeout_seconds: None,
            response_policy: ResponsePolicy::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoClassifyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-classify").join("config.json"))
    }

    /// 実際に使うエンドポイント
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> Result<String> {
        let endpoint = match override_endpoint {
            Some(endpoint) => endpoint.to_string(),
            None => std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| self.endpoint.clone()),
        };
        validate_endpoint(&endpoint)?;
        Ok(endpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        validate_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_response_policy(&mut self, policy: ResponsePolicy) -> Result<()> {
        self.response_policy = policy;
        self.save()
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(PhotoClassifyError::Config(format!(
            "エンドポイントは http:// または https:// で始まる必要があります: {}",
            endpoint
        )))
    }
}
