//! ブラウザ版 UploadSurface
//!
//! コントローラからの指示を Leptos のシグナルに書き込む。
//! 描画はシグナルを購読するコンポーネント側で行う。

use crate::dom::scroll_into_view;
use leptos::html;
use leptos::prelude::*;
use photo_classify_common::{Error, ImageFile, ResultView, UploadSurface};
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ScrollLogicalPosition};

/// 選択された `web_sys::File`
#[derive(Clone)]
pub struct BrowserFile {
    file: File,
    name: String,
    mime_type: String,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            file,
        }
    }

    pub fn as_file(&self) -> &File {
        &self.file
    }
}

impl ImageFile for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// 画面状態のシグナル
#[derive(Clone, Copy)]
pub struct UploadSignals {
    pub file_name: RwSignal<Option<String>>,
    pub preview_url: RwSignal<Option<String>>,
    pub action_enabled: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub result: RwSignal<Option<ResultView>>,
}

impl UploadSignals {
    pub fn new() -> Self {
        Self {
            file_name: RwSignal::new(None),
            preview_url: RwSignal::new(None),
            action_enabled: RwSignal::new(false),
            busy: RwSignal::new(false),
            result: RwSignal::new(None),
        }
    }
}

pub struct LeptosSurface {
    signals: UploadSignals,
    result_ref: NodeRef<html::Div>,
}

impl LeptosSurface {
    pub fn new(signals: UploadSignals, result_ref: NodeRef<html::Div>) -> Self {
        Self { signals, result_ref }
    }
}

impl UploadSurface for LeptosSurface {
    type File = BrowserFile;

    fn on_file_selected(&mut self, file: &BrowserFile) {
        self.signals.file_name.set(Some(file.name().to_string()));
        self.signals.action_enabled.set(true);
    }

    fn show_preview(&mut self, file: &BrowserFile) {
        read_preview(file.as_file(), self.signals.preview_url);
    }

    fn set_busy(&mut self, busy: bool) {
        self.signals.busy.set(busy);
        self.signals.action_enabled.set(!busy);
    }

    fn hide_result(&mut self) {
        self.signals.result.set(None);
    }

    fn show_result(&mut self, view: &ResultView) {
        self.signals.result.set(Some(view.clone()));

        if !view.is_failure() {
            // 表示が反映されてから中央へスクロール
            let result_ref = self.result_ref;
            request_animation_frame(move || {
                if let Some(container) = result_ref.get_untracked() {
                    scroll_into_view(&container, ScrollLogicalPosition::Center);
                }
            });
        }
    }

    fn report_error(&mut self, error: &Error) {
        gloo::console::error!("Prediction error:", error.to_string());
    }
}

/// FileReaderでData URLを読み込み、完了したらプレビューに反映
fn read_preview(file: &File, preview_url: RwSignal<Option<String>>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader unavailable:", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                preview_url.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(file);
}
