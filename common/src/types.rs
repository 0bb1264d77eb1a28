//! 推論結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Prediction: 推論サービスのレスポンス `{class, confidence}`

use serde::{Deserialize, Serialize};

/// 推論サービスが返す分類結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// 分類ラベル（レスポンスの `class`）
    #[serde(rename = "class")]
    pub class_name: String,

    /// 確信度（0.0〜1.0）
    pub confidence: f64,

    /// サーバ側で保存されたファイル名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Prediction {
    pub fn new(class_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
            filename: None,
        }
    }

    /// 確信度をパーセント表記（四捨五入）
    pub fn percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }

    /// ラベルに "healthy" を含むか（大文字小文字を区別しない）
    pub fn is_healthy(&self) -> bool {
        self.class_name.to_lowercase().contains("healthy")
    }
}
