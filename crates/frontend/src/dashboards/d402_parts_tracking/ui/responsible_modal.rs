//! Модальное окно смены ответственного за деталь.
//!
//! Форма приходит с сервера готовым HTML-фрагментом со своей кнопкой
//! отправки; после отправки страница перезагружается обычным POST, так что
//! закрывать окно по успеху не нужно.

use crate::dashboards::d402_parts_tracking::api;
use crate::shared::dialogs;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const MODAL_CLASS: &str = "responsible-modal w-full max-w-lg";

pub fn open(modal_stack: ModalStackService, part_id: String) {
    spawn_local(async move {
        match api::fetch_responsible_form(&part_id).await {
            Ok(html) => {
                log::debug!("responsible form loaded for {}", part_id);
                modal_stack.push(Some(MODAL_CLASS.to_string()), move |handle| {
                    view! { <ResponsibleForm html=html.clone() handle=handle /> }.into_any()
                });
            }
            Err(e) => {
                log::error!(
                    "Ошибка при открытии формы смены ответственного ({}): {}",
                    part_id,
                    e
                );
                dialogs::notify("Ошибка", "Не удалось загрузить форму.");
            }
        }
    });
}

#[component]
fn ResponsibleForm(html: String, handle: ModalHandle) -> impl IntoView {
    let submitting = RwSignal::new(false);

    view! {
        <div class="modal-header">
            <h2 class="modal-title">"Смена ответственного"</h2>
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| handle.close()>
                "✕"
            </Button>
        </div>
        // submit bubbles up from the server-rendered form; the POST itself is not intercepted
        <div class="modal-body" inner_html=html on:submit=move |_| submitting.set(true)></div>
        <Show when=move || submitting.get()>
            <div class="modal-loading">
                <Spinner />
            </div>
        </Show>
    }
}
