//! メインアプリケーションコンポーネント

use crate::api::predict::FetchPredictionClient;
use crate::components::{
    header::Header,
    predict_button::PredictButton,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::surface::{BrowserFile, LeptosSurface, UploadSignals};
use leptos::html;
use leptos::prelude::*;
use photo_classify_common::{FileSource, PredictionClient, UploadController};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let signals = UploadSignals::new();
    let result_ref = NodeRef::<html::Div>::new();

    // コントローラは web_sys::File を保持するので LocalStorage に置く
    let controller = StoredValue::new_local(UploadController::new(LeptosSurface::new(
        signals, result_ref,
    )));
    let client = FetchPredictionClient::from_document();

    // ファイル選択ハンドラ
    let on_file_selected = move |files: Vec<File>, source: FileSource| {
        controller.update_value(|c| {
            c.select_first(files.into_iter().map(BrowserFile::new), source);
        });
    };

    // 推論ハンドラ
    let on_predict = move |_| {
        let mut ticket = None;
        controller.update_value(|c| {
            ticket = c.begin_prediction();
        });
        // ファイル未選択 / 推論中なら何もしない
        let Some(ticket) = ticket else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.predict(ticket.file()).await;
            controller.update_value(|c| {
                c.complete_prediction(ticket, outcome);
            });
        });
    };

    view! {
        <Header />

        <main class="container">
            <section id="home" class="hero">
                <h2>"Image Classification"</h2>
                <p>"Upload a photo and the model will tell you what it sees."</p>
            </section>

            <section id="upload" class="upload-section">
                <UploadArea
                    file_name=signals.file_name
                    preview_url=signals.preview_url
                    on_file_selected=on_file_selected
                />

                <PredictButton
                    action_enabled=signals.action_enabled
                    busy=signals.busy
                    on_predict=on_predict
                />

                <ResultPanel result=signals.result container_ref=result_ref />
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <p>
                    "Images are sent to the prediction service as multipart form data. "
                    "The result shows the predicted class and the model's confidence."
                </p>
            </section>
        </main>
    }
}
