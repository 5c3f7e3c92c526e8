use crate::dashboards::d402_parts_tracking::filter::designation_matches;
use crate::shared::dom_utils::{data_attr, document, element_by_id, listen, query_all};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

pub const SEARCH_INPUT_ID: &str = "searchInput";

/// Только строки изделий верхнего уровня, без вложенных таблиц деталей
const PRODUCT_ROWS: &str = "#main-dashboard-table > tbody > .product-row";

pub fn bind() {
    let Some(input) = element_by_id(SEARCH_INPUT_ID)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("#{} not found, search disabled", SEARCH_INPUT_ID);
        return;
    };

    let target = input.clone();
    listen(&input, "keyup", move |_| apply_filter(&target.value()));
}

/// Показывает строки, чьё обозначение содержит `filter`, остальные скрывает
pub fn apply_filter(filter: &str) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };

    for row in query_all(&root, PRODUCT_ROWS) {
        let designation = data_attr(&row, "product-designation").unwrap_or_default();
        let display = if designation_matches(filter, &designation) {
            ""
        } else {
            "none"
        };
        if let Ok(row) = row.dyn_into::<HtmlElement>() {
            let _ = row.style().set_property("display", display);
        }
    }
}
