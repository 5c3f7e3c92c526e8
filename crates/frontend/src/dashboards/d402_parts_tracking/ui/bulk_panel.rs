//! Плавающая панель массовых действий и формы массового удаления/печати.

use super::controller::DashboardController;
use crate::dashboards::d402_parts_tracking::bulk::{
    bar_hidden, counter_label, part_id_fields, BulkAction, SubmitDecision,
};
use crate::dashboards::d402_parts_tracking::state::Selection;
use crate::shared::dialogs;
use crate::shared::dom_utils::{document, element_by_id, listen, query_all};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

pub const BULK_BAR_ID: &str = "bulk-actions-bar";
pub const BULK_COUNTER_ID: &str = "bulk-actions-counter";
pub const BULK_CLEAR_ID: &str = "bulk-clear-selection";
pub const BULK_DELETE_FORM_ID: &str = "bulk-delete-form";
pub const BULK_PRINT_FORM_ID: &str = "bulk-print-form";

/// Панель уезжает за нижний край экрана, пока этот класс стоит
const BAR_HIDDEN_CLASS: &str = "translate-y-full";
const PART_IDS_FIELD: &str = "part_ids";

/// Счётчик и видимость панели: показана, только если выбрано больше нуля
pub fn update_panel(count: usize) {
    let (Some(bar), Some(counter)) = (element_by_id(BULK_BAR_ID), element_by_id(BULK_COUNTER_ID))
    else {
        return;
    };
    counter.set_text_content(Some(&counter_label(count)));
    let _ = bar.class_list().toggle_with_force(BAR_HIDDEN_CLASS, bar_hidden(count));
}

/// Заменяет скрытые поля `part_ids` формы текущим выбором.
///
/// Старые поля (от прошлой, отменённой попытки) удаляются, поэтому повторный
/// вызов не даёт дублей. Возвращает число добавленных полей.
pub fn prepare_form_for_submit(form: &HtmlFormElement, selection: &Selection) -> usize {
    let existing = query_all(form, &format!("input[name=\"{}\"]", PART_IDS_FIELD));
    let fields = part_id_fields(existing.len(), selection);
    for input in existing.into_iter().take(fields.remove) {
        input.remove();
    }

    let Some(document) = document() else {
        return 0;
    };

    let mut added = 0;
    for part_id in fields.add {
        let Ok(input) = document.create_element("input") else {
            continue;
        };
        let _ = input.set_attribute("type", "hidden");
        let _ = input.set_attribute("name", PART_IDS_FIELD);
        let _ = input.set_attribute("value", &part_id);
        if form.append_child(&input).is_ok() {
            added += 1;
        }
    }
    added
}

pub fn bind(controller: DashboardController) {
    bind_form(controller, BULK_DELETE_FORM_ID, BulkAction::Delete);
    bind_form(controller, BULK_PRINT_FORM_ID, BulkAction::Print);

    match element_by_id(BULK_CLEAR_ID) {
        Some(button) => listen(&button, "click", move |_| controller.clear_selection()),
        None => log::warn!("#{} not found", BULK_CLEAR_ID),
    }
}

fn bind_form(controller: DashboardController, form_id: &str, action: BulkAction) {
    let Some(form) = element_by_id(form_id).and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        log::warn!("#{} not found, {:?} action disabled", form_id, action);
        return;
    };

    let target = form.clone();
    listen(&form, "submit", move |event: Event| {
        let selection = controller.selection().get_untracked();
        guard_submit(action, &target, &event, &selection);
    });
}

fn guard_submit(action: BulkAction, form: &HtmlFormElement, event: &Event, selection: &Selection) {
    let count = prepare_form_for_submit(form, selection);

    match action.guard(count) {
        SubmitDecision::Blocked(notice) => {
            event.prevent_default();
            dialogs::notify(&notice.title, &notice.text);
        }
        SubmitDecision::Confirm(notice) => {
            // Native submission is always stopped; `submit()` below does not
            // re-enter this handler.
            event.prevent_default();
            if dialogs::confirm(&notice.title, &notice.text) {
                log::info!("{:?} submitted for {} parts", action, count);
                if let Err(e) = form.submit() {
                    log::error!("Form submit failed: {:?}", e);
                }
            }
        }
        SubmitDecision::Proceed => {
            log::info!("{:?} submitted for {} parts", action, count);
        }
    }
}
