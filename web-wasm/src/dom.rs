//! DOM操作ヘルパー

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// 要素をスムーズスクロールで表示
pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `<section id=...>` へスクロール（上端揃え）
pub fn scroll_to_section(id: &str) {
    if let Some(target) = document().get_element_by_id(id) {
        scroll_into_view(&target, ScrollLogicalPosition::Start);
    }
}

/// ページ内の `section[id]` を (id, offsetTop) で列挙
pub fn section_offsets() -> Vec<(String, f64)> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| (section.id(), section.offset_top() as f64))
        .collect()
}

/// 現在の縦スクロール量
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}
