//! ヘッダー（ナビゲーション）コンポーネント
//!
//! - リンククリックで対象セクションへスムーズスクロール
//! - スクロール位置に応じて現在のセクションのリンクに `active` を付与

use crate::dom::{scroll_to_section, scroll_y, section_offsets};
use leptos::ev;
use leptos::prelude::*;
use photo_classify_common::{active_section, nav::section_href};

/// (セクションID, リンク表示名)
pub const NAV_SECTIONS: [(&str, &str); 3] = [
    ("home", "Home"),
    ("upload", "Classify"),
    ("about", "About"),
];

fn current_section() -> Option<String> {
    let offsets = section_offsets();
    let sections: Vec<(&str, f64)> = offsets
        .iter()
        .map(|(id, top)| (id.as_str(), *top))
        .collect();
    active_section(&sections, scroll_y()).map(str::to_string)
}

#[component]
pub fn Header() -> impl IntoView {
    let (active, set_active) = signal(None::<String>);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_active.set(current_section());
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="header">
            <h1>"Photo Classify"</h1>
            <nav class="nav-links">
                {NAV_SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <a
                                href=section_href(id)
                                class:active=move || active.get().as_deref() == Some(id)
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    scroll_to_section(id);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
