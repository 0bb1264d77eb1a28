//! ターミナル版 UploadSurface
//!
//! - ファイル名: 選択時に表示
//! - プレビュー: 画像サイズを別スレッドで読み取り、読めた時点で表示
//! - 処理中: indicatif スピナー（"Analyzing..."）
//! - 結果: 絵文字付きで表示（`--json` 時はJSON1行）

use crate::image_file::{preview_summary, LocalImage};
use indicatif::{ProgressBar, ProgressStyle};
use photo_classify_common::{ImageFile, ResultView, Tone, UploadSurface, BUSY_LABEL, DEFAULT_LABEL};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Serialize)]
struct ResultRecord<'a> {
    text: &'a str,
    tone: &'a str,
    color: &'a str,
}

/// 処理中スピナー（プレビュー用の別スレッドとも共有する）
type SpinnerSlot = Arc<Mutex<Option<ProgressBar>>>;

/// スピナー表示中ならそれを一時的に消してから1行出力
fn print_line(spinner: &SpinnerSlot, line: &str) {
    let active = spinner.lock().ok().and_then(|slot| slot.clone());
    match active {
        Some(bar) => bar.suspend(|| println!("{}", line)),
        None => println!("{}", line),
    }
}

#[derive(Default)]
pub struct TerminalSurface {
    json: bool,
    action_enabled: bool,
    busy: bool,
    spinner: SpinnerSlot,
    last_result: Option<ResultView>,
}

impl TerminalSurface {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            ..Default::default()
        }
    }

    pub fn action_enabled(&self) -> bool {
        self.action_enabled
    }

    /// 推論ボタンのラベル
    pub fn action_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            DEFAULT_LABEL
        }
    }

    pub fn last_result(&self) -> Option<&ResultView> {
        self.last_result.as_ref()
    }

    fn spinner_active(&self) -> bool {
        self.spinner.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl UploadSurface for TerminalSurface {
    type File = LocalImage;

    fn on_file_selected(&mut self, file: &LocalImage) {
        self.action_enabled = true;
        if !self.json {
            println!("📷 {}", file.name());
        }
    }

    fn show_preview(&mut self, file: &LocalImage) {
        if self.json {
            return;
        }

        let name = file.name().to_string();
        let bytes = file.shared_bytes();
        let spinner = Arc::clone(&self.spinner);
        let render = move || match preview_summary(&bytes) {
            Ok(summary) => print_line(&spinner, &format!("  🖼  {} ({})", name, summary)),
            Err(e) => tracing::debug!(file = %name, error = %e, "preview unavailable"),
        };

        // 推論とは独立に読み込む（完了を待たない）
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(render);
            }
            Err(_) => render(),
        }
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        if busy {
            self.action_enabled = false;
            if self.json || self.spinner_active() {
                return;
            }
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(BUSY_LABEL);
            spinner.enable_steady_tick(Duration::from_millis(100));
            if let Ok(mut slot) = self.spinner.lock() {
                *slot = Some(spinner);
            }
        } else {
            self.action_enabled = true;
            let finished = self.spinner.lock().ok().and_then(|mut slot| slot.take());
            if let Some(spinner) = finished {
                spinner.finish_and_clear();
            }
        }
    }

    fn hide_result(&mut self) {
        self.last_result = None;
    }

    fn show_result(&mut self, view: &ResultView) {
        if self.json {
            let record = ResultRecord {
                text: &view.text,
                tone: view.tone.as_str(),
                color: view.tone.color(),
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!(error = %e, "failed to serialize result"),
            }
        } else {
            let mark = match view.tone {
                Tone::Affirmative => "✅",
                Tone::Alert => "⚠️ ",
                Tone::Failure => "❌",
            };
            println!("{} {}", mark, view.text);
        }
        self.last_result = Some(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_classify_common::{FileSource, Prediction, Status, UploadController};

    fn surface() -> TerminalSurface {
        TerminalSurface::new(true)
    }

    #[test]
    fn test_initial_surface() {
        let surface = surface();
        assert!(!surface.action_enabled());
        assert_eq!(surface.action_label(), "Predict");
        assert!(surface.last_result().is_none());
    }

    #[test]
    fn test_controller_drives_terminal_surface() {
        let mut controller = UploadController::new(surface());
        let file = LocalImage::from_bytes("leaf.jpg", b"dummy".to_vec());
        assert!(controller.select_file(file, FileSource::Picker));
        assert!(controller.surface().action_enabled());

        let ticket = controller.begin_prediction().expect("開始できるはず");
        assert!(!controller.surface().action_enabled());
        assert_eq!(controller.surface().action_label(), "Analyzing...");

        controller.complete_prediction(ticket, Ok(Prediction::new("Healthy Leaf", 0.932)));
        assert_eq!(controller.status(), Status::Succeeded);
        assert!(controller.surface().action_enabled());
        assert_eq!(
            controller.surface().last_result().map(|r| r.text.as_str()),
            Some("Test Class: Healthy Leaf (93%)")
        );
    }

    #[test]
    fn test_preview_while_spinner_is_active() {
        let mut surface = TerminalSurface::new(false);
        surface.set_busy(true);
        assert!(surface.spinner_active());

        // ランタイム外なのでその場で出力される
        surface.show_preview(&LocalImage::from_bytes("leaf.jpg", b"dummy".to_vec()));
        assert!(surface.spinner_active());

        surface.set_busy(false);
        assert!(!surface.spinner_active());
        assert!(surface.action_enabled());
    }

    #[test]
    fn test_print_line_without_spinner() {
        let slot: SpinnerSlot = Arc::default();
        print_line(&slot, "no spinner");
        assert!(slot.lock().map(|s| s.is_none()).unwrap_or(false));
    }

    #[test]
    fn test_dropped_text_file_is_ignored() {
        let mut controller = UploadController::new(surface());
        let file = LocalImage::from_bytes("notes.txt", b"hello".to_vec());
        assert!(!controller.select_file(file, FileSource::Drop));
        assert!(!controller.surface().action_enabled());
    }
}
