//! ローカル画像ファイル
//!
//! CLIでの「ファイル選択」に相当する。MIMEタイプは中身から判定し、
//! 判定できなければ拡張子で補う。

use crate::error::{PhotoClassifyError, Result};
use photo_classify_common::ImageFile;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct LocalImage {
    name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl LocalImage {
    /// ファイルを読み込む（種類は問わない）
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PhotoClassifyError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = detect_mime_type(path, &bytes);

        Ok(Self {
            name,
            mime_type,
            bytes: bytes.into(),
        })
    }

    /// 画像ファイルとして読み込む（ファイル選択ダイアログの image/* 絞り込み相当）
    pub fn open_image(path: &Path) -> Result<Self> {
        let file = Self::open(path)?;
        if !file.is_image() {
            return Err(PhotoClassifyError::NotAnImage(path.display().to_string()));
        }
        Ok(file)
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = detect_mime_type(Path::new(&name), &bytes);
        Self {
            name,
            mime_type,
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 共有バッファ（別タスクへ渡す用）
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }
}

impl ImageFile for LocalImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// 中身 → 拡張子の順でMIMEタイプを判定
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| OCTET_STREAM.to_string())
}

/// プレビュー用の概要（例: "640x480 Jpeg"）
pub fn preview_summary(bytes: &[u8]) -> Result<String> {
    let reader = image::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| PhotoClassifyError::ImageLoad(e.to_string()))?;

    Ok(match format {
        Some(format) => format!("{}x{} {:?}", width, height, format),
        None => format!("{}x{}", width, height),
    })
}
