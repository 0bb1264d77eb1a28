//! 対話モード
//!
//! 画像選択（ピッカー / パス貼り付けによるドロップ）と推論を繰り返す。
//! 同じ画像は選び直さずに何度でも推論できる。

use crate::error::Result;
use crate::image_file::LocalImage;
use crate::surface::TerminalSurface;
use dialoguer::{Input, Select};
use photo_classify_common::{run_prediction, FileSource, PredictionClient, UploadController};
use std::cell::RefCell;
use std::path::Path;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// ファイル選択ダイアログ相当（画像以外はエラー表示）
    Pick,
    /// ドロップ相当（画像以外は黙って無視）
    Drop,
    /// 推論
    Predict,
    /// 終了
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 4] = [
        SessionAction::Pick,
        SessionAction::Drop,
        SessionAction::Predict,
        SessionAction::Quit,
    ];

    fn label(&self, surface: &TerminalSurface) -> String {
        match self {
            SessionAction::Pick => "画像を選択".to_string(),
            SessionAction::Drop => "画像をドロップ（パスを貼り付け）".to_string(),
            SessionAction::Predict if surface.action_enabled() => surface.action_label().to_string(),
            SessionAction::Predict => format!("{}（画像未選択）", surface.action_label()),
            SessionAction::Quit => "終了".to_string(),
        }
    }
}

/// パス入力から選択を反映
///
/// 受け付けた場合 `true`。
pub fn select_path(
    controller: &RefCell<UploadController<TerminalSurface>>,
    path: &Path,
    source: FileSource,
) -> Result<bool> {
    let file = match source {
        FileSource::Picker => LocalImage::open_image(path)?,
        FileSource::Drop => LocalImage::open(path)?,
    };
    Ok(controller.borrow_mut().select_file(file, source))
}

pub async fn run_session<C>(
    controller: &RefCell<UploadController<TerminalSurface>>,
    client: &C,
) -> Result<()>
where
    C: PredictionClient<LocalImage>,
{
    loop {
        let labels: Vec<String> = {
            let controller = controller.borrow();
            SessionAction::ALL
                .iter()
                .map(|action| action.label(controller.surface()))
                .collect()
        };

        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        match SessionAction::ALL[choice] {
            action @ (SessionAction::Pick | SessionAction::Drop) => {
                let source = if action == SessionAction::Pick {
                    FileSource::Picker
                } else {
                    FileSource::Drop
                };
                let input: String = Input::new()
                    .with_prompt("画像ファイルのパス")
                    .interact_text()?;
                let path = input.trim().trim_matches(|c| c == '\'' || c == '"');

                if let Err(e) = select_path(controller, Path::new(path), source) {
                    match source {
                        FileSource::Picker => println!("✗ {}", e),
                        FileSource::Drop => tracing::debug!(error = %e, "ignored drop"),
                    }
                }
            }
            SessionAction::Predict => {
                // 画像未選択なら何もしない
                run_prediction(controller, client).await;
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_classify_common::Status;
    use tempfile::tempdir;

    fn controller() -> RefCell<UploadController<TerminalSurface>> {
        RefCell::new(UploadController::new(TerminalSurface::new(true)))
    }

    #[test]
    fn test_pick_non_image_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let controller = controller();
        assert!(select_path(&controller, &path, FileSource::Picker).is_err());
        assert_eq!(controller.borrow().status(), Status::Idle);
    }

    #[test]
    fn test_drop_non_image_is_ignored() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let controller = controller();
        assert!(!select_path(&controller, &path, FileSource::Drop).unwrap());
        assert_eq!(controller.borrow().status(), Status::Idle);
    }

    #[test]
    fn test_drop_image_is_selected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("leaf.jpg");
        std::fs::write(&path, "dummy").unwrap();

        let controller = controller();
        assert!(select_path(&controller, &path, FileSource::Drop).unwrap());
        assert_eq!(controller.borrow().status(), Status::Previewing);
        assert!(controller.borrow().surface().action_enabled());
    }

    #[test]
    fn test_predict_label_reflects_selection() {
        let surface = TerminalSurface::new(true);
        assert_eq!(SessionAction::Predict.label(&surface), "Predict（画像未選択）");
    }
}
