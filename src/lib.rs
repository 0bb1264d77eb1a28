//! photo-classify: 画像分類サービス向けアップロード・推論クライアント（CLI）

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod session;
pub mod surface;
