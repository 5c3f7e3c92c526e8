//! Правила массовых действий над выбранными деталями.

use super::state::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    fn new(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Отправку отменить и показать уведомление
    Blocked(Notice),
    /// Отправить только после подтверждения пользователем
    Confirm(Notice),
    /// Дать форме отправиться штатно
    Proceed,
}

impl BulkAction {
    pub fn guard(self, selected: usize) -> SubmitDecision {
        match (self, selected) {
            (BulkAction::Delete, 0) => SubmitDecision::Blocked(Notice::new(
                "Нет выбранных элементов",
                "Пожалуйста, выберите хотя бы одну деталь.",
            )),
            (BulkAction::Delete, n) => SubmitDecision::Confirm(Notice::new(
                "Вы уверены?",
                format!(
                    "Вы собираетесь удалить {} деталей. Это действие необратимо!",
                    n
                ),
            )),
            (BulkAction::Print, 0) => SubmitDecision::Blocked(Notice::new(
                "Нет выбранных элементов",
                "Пожалуйста, выберите хотя бы одну деталь для печати.",
            )),
            (BulkAction::Print, _) => SubmitDecision::Proceed,
        }
    }
}

pub fn counter_label(count: usize) -> String {
    format!("Выбрано: {}", count)
}

/// Панель уезжает за край экрана, пока ничего не выбрано
pub fn bar_hidden(count: usize) -> bool {
    count == 0
}

/// Как привести скрытые поля `part_ids` формы к текущему выбору
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartIdFields {
    /// Сколько уже имеющихся полей удалить (все, от прошлой попытки)
    pub remove: usize,
    /// Значения новых полей
    pub add: Vec<String>,
}

pub fn part_id_fields(existing: usize, selection: &Selection) -> PartIdFields {
    PartIdFields {
        remove: existing,
        add: selection.part_ids(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_without_selection_is_blocked() {
        let SubmitDecision::Blocked(notice) = BulkAction::Delete.guard(0) else {
            panic!("expected Blocked");
        };
        assert_eq!(notice.title, "Нет выбранных элементов");
    }

    #[test]
    fn test_delete_confirmation_names_count() {
        let SubmitDecision::Confirm(notice) = BulkAction::Delete.guard(7) else {
            panic!("expected Confirm");
        };
        assert!(notice.text.contains("удалить 7 деталей"));
    }

    #[test]
    fn test_print() {
        assert!(matches!(BulkAction::Print.guard(0), SubmitDecision::Blocked(_)));
        assert_eq!(BulkAction::Print.guard(3), SubmitDecision::Proceed);
    }

    /// Пересобирает поля формы так же, как `prepare_form_for_submit`
    fn prepare(form: &mut Vec<String>, selection: &Selection) {
        let fields = part_id_fields(form.len(), selection);
        form.drain(..fields.remove);
        form.extend(fields.add);
    }

    #[test]
    fn test_bar_hidden_only_without_selection() {
        assert!(bar_hidden(0));
        assert!(!bar_hidden(1));
        assert!(!bar_hidden(40));
    }

    #[test]
    fn test_part_id_fields_empty_selection() {
        let mut form = Vec::new();
        prepare(&mut form, &Selection::new());
        assert!(form.is_empty());
    }

    #[test]
    fn test_part_id_fields_match_selection() {
        let mut selection = Selection::new();
        selection.set_many(["А-3", "А-1", "А-2"], true);

        let mut form = Vec::new();
        prepare(&mut form, &selection);
        assert_eq!(form, vec!["А-1", "А-2", "А-3"]);
    }

    #[test]
    fn test_part_id_fields_after_cancelled_confirm() {
        let mut selection = Selection::new();
        selection.set_many(["А-1", "А-2", "А-3"], true);

        let mut form = Vec::new();
        prepare(&mut form, &selection);
        // пользователь отменил подтверждение, поля остались в форме
        prepare(&mut form, &selection);
        assert_eq!(form.len(), 3);
        assert_eq!(form, vec!["А-1", "А-2", "А-3"]);

        selection.set("А-2", false);
        prepare(&mut form, &selection);
        assert_eq!(form, vec!["А-1", "А-3"]);
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(0), "Выбрано: 0");
        assert_eq!(counter_label(12), "Выбрано: 12");
    }
}
