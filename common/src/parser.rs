//! 推論レスポンスパーサー
//!
//! 推論サービスのレスポンスボディから `{class, confidence}` を取り出す。
//! 形が合わないものはすべて失敗として扱う。

use crate::error::{Error, Result};
use crate::types::Prediction;
use serde_json::{Map, Value};

/// レスポンスボディ（JSON文字列）をパース
///
/// # Arguments
/// * `body` - 推論サービスのレスポンスボディ
///
/// # Returns
/// * `Ok(Prediction)` - `class`（文字列）と `confidence`（数値）を含む場合
/// * `Err(Error::Json)` - JSONでない場合
/// * `Err(Error::Service)` - `{"error": "..."}` 形式の場合
/// * `Err(Error::Parse)` - それ以外の形
///
/// # Examples
/// ```
/// use photo_classify_common::parse_prediction_response;
///
/// let prediction = parse_prediction_response(r#"{"class": "MONARCH", "confidence": 0.9}"#).unwrap();
/// assert_eq!(prediction.class_name, "MONARCH");
/// ```
pub fn parse_prediction_response(body: &str) -> Result<Prediction> {
    let value: Value = serde_json::from_str(body.trim())?;
    parse_prediction_value(value)
}

/// HTTPレスポンス（成否・ステータス・ボディ）を解釈
///
/// ボディが推論結果として読めればステータスに関係なく採用する。
/// 成功以外のステータスでボディが読めない場合は `Error::Service("HTTP <status>")`。
pub fn parse_http_response(ok: bool, status: u16, body: &str) -> Result<Prediction> {
    match parse_prediction_response(body) {
        Err(Error::Json(_)) | Err(Error::Parse(_)) if !ok => Err(Error::Service(format!("HTTP {}", status))),
        other => other,
    }
}

fn parse_prediction_value(value: Value) -> Result<Prediction> {
    let Some(map) = value.as_object() else {
        return Err(Error::Parse("JSONオブジェクトではありません".into()));
    };

    let class_name = map.get("class").and_then(Value::as_str);
    let confidence = map.get("confidence").and_then(Value::as_f64);

    match (class_name, confidence) {
        (Some(class_name), Some(confidence)) => Ok(Prediction {
            class_name: class_name.to_string(),
            confidence,
            filename: get_string(map, "filename"),
        }),
        _ => match get_string(map, "error") {
            Some(message) => Err(Error::Service(message)),
            None => Err(Error::Parse("class/confidence がありません".into())),
        },
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    let value = map.get(key)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if value.is_null() {
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 正常系
    // =============================================

    #[test]
    fn test_parse_minimal_response() {
        let prediction = parse_prediction_response(r#"{"class": "Healthy Leaf", "confidence": 0.932}"#)
            .expect("パース失敗");
        assert_eq!(prediction.class_name, "Healthy Leaf");
        assert_eq!(prediction.confidence, 0.932);
        assert_eq!(prediction.filename, None);
    }

    #[test]
    fn test_parse_response_with_filename() {
        let body = r#"{"class": "ADONIS", "confidence": 0.5, "filename": "adonis.jpg"}"#;
        let prediction = parse_prediction_response(body).expect("パース失敗");
        assert_eq!(prediction.filename.as_deref(), Some("adonis.jpg"));
    }

    #[test]
    fn test_parse_integer_confidence() {
        let prediction = parse_prediction_response(r#"{"class": "MONARCH", "confidence": 1}"#)
            .expect("パース失敗");
        assert_eq!(prediction.confidence, 1.0);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"class": "MONARCH", "confidence": 0.7, "model": "v2", "latency_ms": 12}"#;
        assert!(parse_prediction_response(body).is_ok());
    }

    // =============================================
    // 異常系
    // =============================================

    #[test]
    fn test_parse_not_json() {
        let result = parse_prediction_response("<html>Internal Server Error</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_error_body() {
        let result = parse_prediction_response(r#"{"error": "Model not loaded"}"#);
        match result {
            Err(Error::Service(message)) => assert_eq!(message, "Model not loaded"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_confidence() {
        let result = parse_prediction_response(r#"{"class": "MONARCH"}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_wrong_types() {
        let result = parse_prediction_response(r#"{"class": 3, "confidence": "high"}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_array_is_rejected() {
        let result = parse_prediction_response(r#"[{"class": "MONARCH", "confidence": 0.9}]"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_prediction_response("").is_err());
    }

    // =============================================
    // HTTPステータス込み
    // =============================================

    #[test]
    fn test_http_success() {
        let prediction = parse_http_response(true, 200, r#"{"class": "Blighted", "confidence": 0.41}"#)
            .expect("パース失敗");
        assert_eq!(prediction.class_name, "Blighted");
        assert_eq!(prediction.percent(), 41);
    }

    #[test]
    fn test_http_error_body_keeps_message() {
        let result = parse_http_response(false, 500, r#"{"error": "Prediction failed"}"#);
        assert!(matches!(result, Err(Error::Service(message)) if message == "Prediction failed"));
    }

    #[test]
    fn test_http_error_page_reports_status() {
        let result = parse_http_response(false, 502, "<html>Bad Gateway</html>");
        assert!(matches!(result, Err(Error::Service(message)) if message == "HTTP 502"));
    }

    #[test]
    fn test_http_error_status_with_prediction_body() {
        let prediction = parse_http_response(false, 500, r#"{"class": "MONARCH", "confidence": 0.8}"#)
            .expect("ボディを優先するはず");
        assert_eq!(prediction.class_name, "MONARCH");
    }

    #[test]
    fn test_http_success_with_bad_body() {
        let result = parse_http_response(true, 200, "ok");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
