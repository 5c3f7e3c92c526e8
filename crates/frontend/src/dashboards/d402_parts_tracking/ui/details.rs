use super::controller::DashboardController;
use crate::dashboards::d402_parts_tracking::state::{DetailsBody, RowState};
use crate::dashboards::d402_parts_tracking::view_model::{
    DetailsView, PartActionsView, PartRowView, RouteView,
};
use crate::shared::dialogs;
use leptos::ev;
use leptos::prelude::*;

/// Содержимое ячейки `.details-placeholder` раскрытой строки изделия
#[component]
pub fn ProductDetails(row: RwSignal<RowState>, controller: DashboardController) -> impl IntoView {
    // Collapse/expand changes only the phase; the body is re-rendered only when it changes.
    let body = Memo::new(move |_| row.with(|r| r.body.clone()));

    move || match body.get() {
        DetailsBody::Blank => ().into_any(),
        DetailsBody::Loading => view! {
            <div class="p-8 text-center text-gray-500">"Загрузка..."</div>
        }
        .into_any(),
        DetailsBody::Failed => view! {
            <div class="p-8 text-center text-red-500">
                "Ошибка загрузки. Попробуйте обновить страницу."
            </div>
        }
        .into_any(),
        DetailsBody::Ready(DetailsView::NotFound) => view! {
            <div class="p-8 text-center text-gray-500">"Детали не найдены."</div>
        }
        .into_any(),
        DetailsBody::Ready(DetailsView::Parts(rows)) => {
            view! { <PartsTable rows=rows controller=controller /> }.into_any()
        }
    }
}

#[component]
fn PartsTable(rows: Vec<PartRowView>, controller: DashboardController) -> impl IntoView {
    let selection = controller.selection();
    let part_ids: Vec<String> = rows.iter().map(|r| r.part_id.clone()).collect();
    let ids_for_checked = part_ids.clone();

    view! {
        <table class="min-w-full details-table">
            <thead class="bg-gray-100">
                <tr>
                    <th class="px-6 py-3 w-12">
                        <input
                            type="checkbox"
                            class="select-all-parts rounded border-gray-300"
                            title="Выбрать все"
                            prop:checked=move || selection.with(|s| s.contains_all(&ids_for_checked))
                            on:change=move |ev| {
                                controller.set_parts_selected(&part_ids, event_target_checked(&ev));
                            }
                        />
                    </th>
                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Обозначение"</th>
                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Наименование"</th>
                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Материал"</th>
                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Маршрут"</th>
                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Прогресс (шт.)"</th>
                    <th class="px-6 py-3"></th>
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {rows
                    .into_iter()
                    .map(|row| view! { <PartRow row=row controller=controller /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn PartRow(row: PartRowView, controller: DashboardController) -> impl IntoView {
    let PartRowView {
        part_id,
        history_url,
        name,
        material,
        route,
        progress_width,
        progress_text,
        actions,
    } = row;

    let selection = controller.selection();
    let checkbox_value = part_id.clone();
    let id_for_checked = part_id.clone();
    let id_for_change = part_id.clone();
    let bar_style = format!("width: {}", progress_width);

    view! {
        <tr class="hover:bg-gray-100">
            <td class="px-6 py-4">
                <input
                    type="checkbox"
                    value=checkbox_value
                    class="part-checkbox rounded border-gray-300"
                    prop:checked=move || selection.with(|s| s.contains(&id_for_checked))
                    on:change=move |ev| {
                        controller.set_part_selected(&id_for_change, event_target_checked(&ev));
                    }
                />
            </td>
            <td class="px-6 py-4">
                <a href=history_url class="text-blue-600 hover:underline font-medium">{part_id}</a>
            </td>
            <td class="px-6 py-4 text-sm text-gray-900">{name}</td>
            <td class="px-6 py-4 text-sm text-gray-500">{material}</td>
            <td class="px-6 py-4 text-xs">
                <RouteCell route=route />
            </td>
            <td class="px-6 py-4">
                <div class="w-full bg-gray-200 rounded-full h-2.5">
                    <div class="bg-blue-600 h-2.5 rounded-full" style=bar_style></div>
                </div>
                <small>{progress_text}</small>
            </td>
            <td class="px-6 py-4 text-right text-sm font-medium space-x-4">
                <PartActions actions=actions />
            </td>
        </tr>
    }
}

#[component]
fn RouteCell(route: RouteView) -> impl IntoView {
    match route {
        RouteView::Unassigned => view! {
            <span class="text-gray-400 italic">"Маршрут не назначен"</span>
        }
        .into_any(),
        RouteView::Stages(stages) => stages
            .into_iter()
            .enumerate()
            .map(|(i, stage)| {
                let separator = (i > 0).then(|| view! { " " <span class="text-gray-300">"→"</span> " " });
                view! {
                    {separator}
                    <span class=stage.mark.css_class()>{stage.name}</span>
                }
            })
            .collect_view()
            .into_any(),
    }
}

/// Кнопки действий над деталью; рисуются только разрешённые
#[component]
fn PartActions(actions: PartActionsView) -> impl IntoView {
    let PartActionsView {
        edit_url,
        generate_qr,
        delete,
        delete_prompt,
    } = actions;

    let edit = edit_url.map(|url| {
        view! {
            <a href=url class="text-blue-600 hover:text-blue-900" title="Редактировать">"✎"</a>
        }
    });

    let qr = generate_qr.map(|form| {
        view! {
            <form action=form.action_url method="post" class="inline">
                <input type="hidden" name="csrf_token" value=form.csrf_token />
                <button type="submit" class="text-green-600 hover:text-green-900" title="Скачать QR-код">
                    "QR"
                </button>
            </form>
        }
    });

    let delete = delete.map(|form| {
        let prompt = delete_prompt.unwrap_or_default();
        view! {
            <form
                action=form.action_url
                method="post"
                class="inline form-confirm"
                on:submit=move |ev: ev::SubmitEvent| {
                    if !dialogs::confirm("Вы уверены?", &prompt) {
                        ev.prevent_default();
                    }
                }
            >
                <input type="hidden" name="csrf_token" value=form.csrf_token />
                <button type="submit" class="text-red-600 hover:text-red-900" title="Удалить">
                    "✖"
                </button>
            </form>
        }
    });

    view! { {edit} " " {qr} " " {delete} }
}
