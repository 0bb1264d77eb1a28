//! 結果表示モデル
//!
//! 推論結果（または失敗）を表示用テキストと色に変換する。

use crate::types::Prediction;

/// 失敗時に表示する固定メッセージ
pub const FAILURE_MESSAGE: &str = "Prediction failed. Please try again.";

/// 結果表示の色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// "healthy" を含むラベル
    Affirmative,
    /// それ以外のラベル
    Alert,
    /// 推論失敗
    Failure,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Affirmative => "#27ae60",
            Tone::Alert => "#e74c3c",
            Tone::Failure => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Affirmative => "affirmative",
            Tone::Alert => "alert",
            Tone::Failure => "failure",
        }
    }
}

/// 結果パネルに表示する内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub text: String,
    pub tone: Tone,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let tone = if prediction.is_healthy() {
            Tone::Affirmative
        } else {
            Tone::Alert
        };

        Self {
            text: format!("Test Class: {} ({}%)", prediction.class_name, prediction.percent()),
            tone,
        }
    }

    pub fn failure() -> Self {
        Self {
            text: FAILURE_MESSAGE.to_string(),
            tone: Tone::Failure,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.tone == Tone::Failure
    }
}
