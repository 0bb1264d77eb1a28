//! 推論ボタンコンポーネント

use leptos::prelude::*;
use photo_classify_common::{BUSY_LABEL, DEFAULT_LABEL};

#[component]
pub fn PredictButton<FP>(
    action_enabled: RwSignal<bool>,
    busy: RwSignal<bool>,
    on_predict: FP,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
{
    view! {
        <div class="predict-actions">
            <button
                id="predictBtn"
                class="btn btn-primary"
                disabled=move || !action_enabled.get()
                on:click={
                    let on_predict = on_predict.clone();
                    move |_| on_predict(())
                }
            >
                {move || if busy.get() { BUSY_LABEL } else { DEFAULT_LABEL }}
            </button>
        </div>
    }
}
