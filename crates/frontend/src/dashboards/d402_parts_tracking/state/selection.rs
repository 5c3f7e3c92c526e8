use std::collections::BTreeSet;

/// Выбранные для массовых действий детали.
///
/// Единственный источник истины для чекбоксов `.part-checkbox`: они
/// рисуются по этому множеству и пишут в него через `set`/`set_many`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, part_id: &str, checked: bool) {
        if checked {
            self.ids.insert(part_id.to_string());
        } else {
            self.ids.remove(part_id);
        }
    }

    pub fn set_many<I, S>(&mut self, part_ids: I, checked: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in part_ids {
            self.set(id.as_ref(), checked);
        }
    }

    pub fn contains(&self, part_id: &str) -> bool {
        self.ids.contains(part_id)
    }

    /// Все ли переданные детали выбраны (для чекбокса "Выбрать все")
    pub fn contains_all(&self, part_ids: &[String]) -> bool {
        !part_ids.is_empty() && part_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Значения для скрытых полей `part_ids` формы
    pub fn part_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_count() {
        let mut selection = Selection::new();
        selection.set("А-1", true);
        selection.set("А-2", true);
        selection.set("А-1", true);
        assert_eq!(selection.len(), 2);

        selection.set("А-1", false);
        assert_eq!(selection.len(), 1);
        assert!(!selection.contains("А-1"));
        assert_eq!(selection.part_ids(), vec!["А-2"]);
    }

    #[test]
    fn test_select_all_within_product() {
        let ids = vec!["Б-1".to_string(), "Б-2".to_string()];
        let mut selection = Selection::new();
        selection.set("А-1", true);

        selection.set_many(&ids, true);
        assert!(selection.contains_all(&ids));
        assert_eq!(selection.len(), 3);

        selection.set_many(&ids, false);
        assert!(!selection.contains_all(&ids));
        assert_eq!(selection.part_ids(), vec!["А-1"]);
    }

    #[test]
    fn test_same_part_in_two_products_counts_once() {
        let first = vec!["А-1".to_string(), "А-2".to_string()];
        let second = vec!["А-2".to_string(), "В-7".to_string()];
        let mut selection = Selection::new();
        selection.set_many(&first, true);
        selection.set_many(&second, true);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.part_ids(), vec!["А-1", "А-2", "В-7"]);

        selection.set("А-2", false);
        assert!(!selection.contains_all(&first));
        assert!(!selection.contains_all(&second));
    }

    #[test]
    fn test_contains_all_empty() {
        assert!(!Selection::new().contains_all(&[]));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.set_many(["1", "2", "3"], true);
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.part_ids().is_empty());
    }
}
