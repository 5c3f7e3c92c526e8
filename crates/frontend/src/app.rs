use crate::dashboards::DashboardController;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Корень wasm-части страницы.
///
/// Сама таблица изделий приходит с сервера; здесь создаётся состояние
/// дашборда, контроллер подключается к готовой разметке, а в `<body>`
/// монтируется только хост модальных окон.
#[component]
pub fn App() -> impl IntoView {
    let modal_stack = ModalStackService::new();
    provide_context(modal_stack);

    let controller = DashboardController::new(modal_stack);
    controller.attach();

    view! {
        <ConfigProvider>
            <ModalHost />
        </ConfigProvider>
    }
}
