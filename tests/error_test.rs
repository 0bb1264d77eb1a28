//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use photo_classify::error::PhotoClassifyError;
use photo_classify::image_file::LocalImage;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを開いた場合
#[test]
fn test_open_nonexistent_file() {
    let result = LocalImage::open(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(PhotoClassifyError::FileNotFound(_))));
}

/// フォルダを開いた場合
#[test]
fn test_open_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = LocalImage::open(dir.path());
    assert!(matches!(result, Err(PhotoClassifyError::FileNotFound(_))));
}

/// 画像以外をピッカー経由で開いた場合
#[test]
fn test_open_image_rejects_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("readme.txt");
    std::fs::write(&path, "hello").unwrap();

    let result = LocalImage::open_image(&path);
    assert!(matches!(result, Err(PhotoClassifyError::NotAnImage(_))));

    // 種類を問わない open は成功する
    assert!(LocalImage::open(&path).is_ok());
}

/// PhotoClassifyErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PhotoClassifyError::Config("テスト設定エラー".to_string()),
        PhotoClassifyError::FileNotFound("test.jpg".to_string()),
        PhotoClassifyError::NotAnImage("notes.txt".to_string()),
        PhotoClassifyError::ImageLoad("壊れた画像".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = PhotoClassifyError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PhotoClassifyError = io_err.into();

    assert!(matches!(err, PhotoClassifyError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PhotoClassifyError = json_err.into();

    assert!(matches!(err, PhotoClassifyError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = photo_classify_common::Error::Service("Model not loaded".to_string());
    let err: PhotoClassifyError = common_err.into();

    assert!(matches!(err, PhotoClassifyError::Common(_)));
    assert_eq!(format!("{}", err), "Service error: Model not loaded");
}
