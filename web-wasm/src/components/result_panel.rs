//! 結果表示コンポーネント

use leptos::html;
use leptos::prelude::*;
use photo_classify_common::ResultView;

fn result_style(view: &ResultView) -> String {
    if view.is_failure() {
        format!("color: {};", view.tone.color())
    } else {
        format!(
            "margin-top: 15px; font-size: 20px; font-weight: bold; color: {};",
            view.tone.color()
        )
    }
}

#[component]
pub fn ResultPanel(
    result: RwSignal<Option<ResultView>>,
    container_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div
            id="resultContainer"
            class="result-container"
            node_ref=container_ref
            style:display=move || if result.with(|r| r.is_some()) { "block" } else { "none" }
        >
            <div id="classificationResult">
                {move || {
                    result.get().map(|shown| {
                        let class = format!("result-text {}", shown.tone.as_str());
                        let style = result_style(&shown);
                        view! { <div class=class style=style>{shown.text}</div> }
                    })
                }}
            </div>
        </div>
    }
}
