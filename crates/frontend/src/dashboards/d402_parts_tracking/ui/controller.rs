use super::details::ProductDetails;
use super::{bulk_panel, responsible_modal, search};
use crate::dashboards::d402_parts_tracking::api;
use crate::dashboards::d402_parts_tracking::state::{
    toggle_label, DetailsBody, DetailsCache, RowState, Selection, ToggleStep,
};
use crate::dashboards::d402_parts_tracking::view_model::build_details_view;
use crate::shared::api_utils::csrf_token;
use crate::shared::dom_utils::{closest_from_event, data_attr, element_by_id, listen, query_all};
use crate::shared::modal_stack::ModalStackService;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

pub const MAIN_TABLE_ID: &str = "main-dashboard-table";

const PRODUCT_ROW: &str = ".product-row";
const PRODUCT_TOGGLE: &str = ".product-toggle";
const DETAILS_PLACEHOLDER: &str = ".details-placeholder";
const RESPONSIBLE_CELL: &str = ".responsible-cell";
const HIDDEN_CLASS: &str = "hidden";

/// Контроллер дашборда: всё состояние страницы и обработчики событий.
///
/// Создаётся один раз в корневом компоненте; `Copy`, поэтому свободно
/// передаётся в обработчики и компоненты.
#[derive(Clone, Copy)]
pub struct DashboardController {
    cache: StoredValue<DetailsCache>,
    selection: RwSignal<Selection>,
    rows: StoredValue<HashMap<String, RwSignal<RowState>>>,
    modal_stack: ModalStackService,
}

impl DashboardController {
    pub fn new(modal_stack: ModalStackService) -> Self {
        Self {
            cache: StoredValue::new(DetailsCache::new()),
            selection: RwSignal::new(Selection::new()),
            rows: StoredValue::new(HashMap::new()),
            modal_stack,
        }
    }

    /// Подключается к серверной разметке. Отсутствующие элементы только
    /// отключают соответствующую функцию.
    pub fn attach(self) {
        match element_by_id(MAIN_TABLE_ID) {
            Some(table) => {
                self.register_rows(&table);
                self.bind_table(&table);
            }
            None => log::warn!("#{} not found, row expansion disabled", MAIN_TABLE_ID),
        }
        bulk_panel::bind(self);
        search::bind();
        self.update_panel();
        log::debug!(
            "Dashboard attached: {} product rows",
            self.rows.with_value(|rows| rows.len())
        );
    }

    pub fn selection(&self) -> RwSignal<Selection> {
        self.selection
    }

    pub fn set_part_selected(&self, part_id: &str, checked: bool) {
        self.selection.update(|s| s.set(part_id, checked));
        self.update_panel();
    }

    pub fn set_parts_selected(&self, part_ids: &[String], checked: bool) {
        self.selection.update(|s| s.set_many(part_ids, checked));
        self.update_panel();
    }

    pub fn clear_selection(&self) {
        self.selection.update(|s| s.clear());
        self.update_panel();
    }

    pub fn update_panel(&self) {
        bulk_panel::update_panel(self.selection.with_untracked(|s| s.len()));
    }

    fn register_rows(&self, table: &Element) {
        let designations: Vec<String> = query_all(table, PRODUCT_ROW)
            .iter()
            .filter_map(|row| data_attr(row, "product-designation"))
            .collect();
        self.rows.update_value(|rows| {
            for designation in designations {
                rows.entry(designation)
                    .or_insert_with(|| RwSignal::new(RowState::default()));
            }
        });
    }

    fn bind_table(self, table: &Element) {
        listen(table, "click", move |event: Event| {
            if let Some(toggle) = closest_from_event(&event, PRODUCT_TOGGLE) {
                self.toggle_product(&toggle);
            }

            if let Some(cell) = closest_from_event(&event, RESPONSIBLE_CELL) {
                match data_attr(&cell, "part-id").filter(|id| !id.is_empty()) {
                    Some(part_id) => responsible_modal::open(self.modal_stack, part_id),
                    None => log::debug!("responsible cell without data-part-id"),
                }
            }
        });
    }

    fn toggle_product(&self, toggle: &Element) {
        let Some(product_row) = toggle.closest(PRODUCT_ROW).ok().flatten() else {
            return;
        };
        let Some(designation) = data_attr(&product_row, "product-designation") else {
            log::warn!("product row without data-product-designation");
            return;
        };
        let safe_key = data_attr(&product_row, "safe-key").unwrap_or_default();
        let Some(details_row) = element_by_id(&format!("details-for-{}", safe_key)) else {
            log::warn!("details row for '{}' not found", designation);
            return;
        };
        let Some(row) = self.row_state(&designation, &details_row) else {
            log::warn!("{} missing for '{}'", DETAILS_PLACEHOLDER, designation);
            return;
        };

        let (cache_hit, in_flight) = self
            .cache
            .with_value(|c| (c.contains(&designation), c.is_in_flight(&designation)));
        let step = row.with_untracked(|r| r.phase).on_toggle(cache_hit, in_flight);

        match step {
            ToggleStep::ReplayCached => {
                log::debug!("details cache hit: {}", designation);
                let cached = self.cache.with_value(|c| c.get(&designation).cloned());
                row.update(|r| r.apply(step, cached.as_ref()));
            }
            ToggleStep::Fetch => {
                self.cache.update_value(|c| {
                    c.begin_fetch(&designation);
                });
                row.update(|r| r.apply(step, None));
                spawn_local(self.load_details(designation.clone(), row));
            }
            ToggleStep::Collapse | ToggleStep::AwaitInFlight => {
                row.update(|r| r.apply(step, None));
            }
        }

        let expanded = row.with_untracked(|r| r.phase.is_expanded());
        let _ = details_row
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, !expanded);
        toggle.set_text_content(Some(&toggle_label(&designation, expanded)));
    }

    /// Состояние строки; при первом обращении монтирует в ячейку компонент,
    /// который дальше рисует её содержимое.
    fn row_state(&self, designation: &str, details_row: &Element) -> Option<RwSignal<RowState>> {
        let row = match self.rows.with_value(|rows| rows.get(designation).copied()) {
            Some(row) => row,
            None => {
                // Row added to the page after attach().
                let row = RwSignal::new(RowState::default());
                self.rows.update_value(|rows| {
                    rows.insert(designation.to_string(), row);
                });
                row
            }
        };

        // Body stays Blank only until the component is mounted.
        if row.with_untracked(|r| r.body == DetailsBody::Blank) {
            let cell = details_row
                .query_selector(DETAILS_PLACEHOLDER)
                .ok()
                .flatten()?
                .dyn_into::<HtmlElement>()
                .ok()?;
            cell.set_inner_html("");
            let controller = *self;
            mount_to(cell, move || view! { <ProductDetails row=row controller=controller /> })
                .forget();
        }

        Some(row)
    }

    async fn load_details(self, designation: String, row: RwSignal<RowState>) {
        log::debug!("details cache miss, fetching: {}", designation);

        let result = match api::fetch_parts(&designation).await {
            Ok(response) => {
                let view = build_details_view(&response, &csrf_token());
                self.cache
                    .update_value(|c| c.insert(designation.clone(), view.clone()));
                Some(view)
            }
            Err(e) => {
                log::error!("Ошибка загрузки деталей '{}': {}", designation, e);
                None
            }
        };

        self.cache.update_value(|c| c.finish_fetch(&designation));
        row.update(|r| r.resolve(result));
    }
}
