//! アップロードエリアコンポーネント
//!
//! クリックで隠しファイル入力を開き、ドラッグ&ドロップも受け付ける。
//! 受け取ったファイルはすべて親へ渡す（先頭の選択と画像判定はコントローラ側）。

use leptos::html;
use leptos::prelude::*;
use photo_classify_common::FileSource;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    file_name: RwSignal<Option<String>>,
    preview_url: RwSignal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Vec<File>, FileSource) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let files = collect_files(ev.data_transfer().and_then(|dt| dt.files()));
            on_file_selected(files, FileSource::Drop);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let files = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files());
        on_file_selected(collect_files(files), FileSource::Picker);
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop an image or click to browse"</p>
            <p class="text-muted">"Supported: JPEG, PNG, WebP"</p>
        </div>

        <input
            type="file"
            id="imageInput"
            accept="image/*"
            style="display: none"
            node_ref=input_ref
            on:change=on_change
        />

        <p id="fileInfo" class="file-info">
            {move || file_name.get().unwrap_or_default()}
        </p>

        <div id="imagePreview" class="image-preview">
            {move || {
                preview_url.get().map(|src| view! { <img src=src alt="Preview" class="preview-image" /> })
            }}
        </div>
    }
}

/// FileList を順序どおり Vec に詰める
fn collect_files(files: Option<FileList>) -> Vec<File> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_collect_files_without_list() {
        assert!(collect_files(None).is_empty());
    }
}
