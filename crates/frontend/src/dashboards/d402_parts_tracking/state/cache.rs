use crate::dashboards::d402_parts_tracking::view_model::DetailsView;
use std::collections::{HashMap, HashSet};

/// Кэш раскрытых строк: обозначение изделия -> построенное представление.
///
/// Живёт столько же, сколько страница; записи не вытесняются и не
/// инвалидируются (сбрасывается только перезагрузкой). Пустой ответ
/// (`DetailsView::NotFound`) кэшируется как окончательный, ошибки не кэшируются.
///
/// Дополнительно помнит, для каких изделий запрос уже в полёте, чтобы
/// повторный клик во время загрузки не порождал второй запрос.
#[derive(Debug, Clone, Default)]
pub struct DetailsCache {
    entries: HashMap<String, DetailsView>,
    in_flight: HashSet<String>,
}

impl DetailsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, designation: &str) -> Option<&DetailsView> {
        self.entries.get(designation)
    }

    pub fn contains(&self, designation: &str) -> bool {
        self.entries.contains_key(designation)
    }

    pub fn insert(&mut self, designation: impl Into<String>, view: DetailsView) {
        self.entries.insert(designation.into(), view);
    }

    /// Отмечает начало загрузки. `false`, если загрузка уже идёт.
    pub fn begin_fetch(&mut self, designation: &str) -> bool {
        self.in_flight.insert(designation.to_string())
    }

    pub fn finish_fetch(&mut self, designation: &str) {
        self.in_flight.remove(designation);
    }

    pub fn is_in_flight(&self, designation: &str) -> bool {
        self.in_flight.contains(designation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = DetailsCache::new();
        assert!(cache.get("Наборка №3").is_none());

        cache.insert("Наборка №3", DetailsView::NotFound);
        assert!(cache.contains("Наборка №3"));
        assert_eq!(cache.get("Наборка №3"), Some(&DetailsView::NotFound));
        assert!(!cache.contains("Наборка №4"));
    }

    #[test]
    fn test_in_flight_marker() {
        let mut cache = DetailsCache::new();
        assert!(cache.begin_fetch("А"));
        assert!(!cache.begin_fetch("А"));
        assert!(cache.begin_fetch("Б"));
        assert!(cache.is_in_flight("А"));

        cache.finish_fetch("А");
        assert!(!cache.is_in_flight("А"));
        assert!(cache.begin_fetch("А"));
    }

    #[test]
    fn test_cached_view_replays_identically() {
        use crate::dashboards::d402_parts_tracking::view_model::build_details_view;
        use contracts::dashboards::d402_parts_tracking::{Part, PartsResponse};

        let response = PartsResponse {
            parts: vec![Part {
                part_id: "А-1".to_string(),
                name: "Палец".to_string(),
                material: "Ст3".to_string(),
                route_stages: Vec::new(),
                quantity_completed: 1,
                quantity_total: 2,
                history_url: "/h".to_string(),
                edit_url: "/e".to_string(),
                delete_url: "/d".to_string(),
                qr_url: "/q".to_string(),
            }],
            permissions: None,
        };
        let first = build_details_view(&response, "tok");

        let mut cache = DetailsCache::new();
        cache.insert("Наборка №3", first.clone());
        assert_eq!(cache.get("Наборка №3"), Some(&first));
        assert_eq!(build_details_view(&response, "tok"), first);
    }
}
