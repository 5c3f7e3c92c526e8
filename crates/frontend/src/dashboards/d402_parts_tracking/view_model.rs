//! Модель представления раскрытой строки изделия.
//!
//! Чистые функции `PartsResponse -> DetailsView`: вся логика отображения
//! (прогресс, маршрут, доступные действия) вычисляется здесь, компонент
//! `ui::details` только раскладывает готовые значения по разметке.
//! `DetailsView` же и кэшируется: повторное раскрытие строки рисует ровно то,
//! что было построено при первой загрузке.

use contracts::dashboards::d402_parts_tracking::{Part, PartPermissions, PartsResponse, RouteStage};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsView {
    /// API вернул пустой список деталей
    NotFound,
    Parts(Vec<PartRowView>),
}

impl DetailsView {
    pub fn part_ids(&self) -> Vec<String> {
        match self {
            DetailsView::NotFound => Vec::new(),
            DetailsView::Parts(rows) => rows.iter().map(|r| r.part_id.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartRowView {
    pub part_id: String,
    pub history_url: String,
    pub name: String,
    pub material: String,
    pub route: RouteView,
    /// Значение для `style="width: ..."`, напр. "75%"
    pub progress_width: String,
    /// Напр. "3 из 4"
    pub progress_text: String,
    pub actions: PartActionsView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteView {
    /// Маршрут не назначен
    Unassigned,
    Stages(Vec<StageView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
    pub name: String,
    pub mark: StageMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    /// Этап пройден (зачёркнут)
    Done,
    /// Первый непройденный этап
    Next,
    Pending,
}

impl StageMark {
    pub fn css_class(self) -> &'static str {
        match self {
            StageMark::Done => "line-through text-gray-400",
            StageMark::Next => "font-bold text-blue-600",
            StageMark::Pending => "text-gray-600",
        }
    }
}

/// POST-форма действия над деталью со своим CSRF полем
#[derive(Debug, Clone, PartialEq)]
pub struct ActionForm {
    pub action_url: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartActionsView {
    pub edit_url: Option<String>,
    pub generate_qr: Option<ActionForm>,
    pub delete: Option<ActionForm>,
    /// Текст подтверждения удаления; есть только вместе с `delete`
    pub delete_prompt: Option<String>,
}

impl PartActionsView {
    pub fn is_empty(&self) -> bool {
        self.edit_url.is_none() && self.generate_qr.is_none() && self.delete.is_none()
    }
}

pub fn build_details_view(response: &PartsResponse, csrf_token: &str) -> DetailsView {
    if response.parts.is_empty() {
        return DetailsView::NotFound;
    }
    let permissions = response.permissions.unwrap_or_default();
    DetailsView::Parts(
        response
            .parts
            .iter()
            .map(|part| build_part_row(part, &permissions, csrf_token))
            .collect(),
    )
}

pub fn build_part_row(part: &Part, permissions: &PartPermissions, csrf_token: &str) -> PartRowView {
    PartRowView {
        part_id: part.part_id.clone(),
        history_url: part.history_url.clone(),
        name: part.name.clone(),
        material: part.material.clone(),
        route: build_route(&part.route_stages),
        progress_width: progress_width(part.progress_percent()),
        progress_text: part.progress_text(),
        actions: build_actions(part, permissions, csrf_token),
    }
}

/// Формат как у JS шаблонной строки для целых и дробных значений;
/// NaN и бесконечность проходят как есть, браузер такую ширину игнорирует.
pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn build_route(stages: &[RouteStage]) -> RouteView {
    if stages.is_empty() {
        return RouteView::Unassigned;
    }

    let mut next_marked = false;
    let stages = stages
        .iter()
        .map(|stage| {
            let mark = if stage.status.is_completed() {
                StageMark::Done
            } else if !next_marked {
                next_marked = true;
                StageMark::Next
            } else {
                StageMark::Pending
            };
            StageView {
                name: stage.name.clone(),
                mark,
            }
        })
        .collect();

    RouteView::Stages(stages)
}

pub fn build_actions(part: &Part, permissions: &PartPermissions, csrf_token: &str) -> PartActionsView {
    let form = |url: &str| ActionForm {
        action_url: url.to_string(),
        csrf_token: csrf_token.to_string(),
    };

    PartActionsView {
        edit_url: permissions.can_edit.then(|| part.edit_url.clone()),
        generate_qr: permissions.can_generate_qr.then(|| form(&part.qr_url)),
        delete: permissions.can_delete.then(|| form(&part.delete_url)),
        delete_prompt: permissions
            .can_delete
            .then(|| format!("Удалить деталь {}?", part.part_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d402_parts_tracking::StageStatus;

    fn stage(name: &str, completed: bool) -> RouteStage {
        RouteStage {
            name: name.to_string(),
            status: if completed {
                StageStatus::Completed
            } else {
                StageStatus::Other("pending".to_string())
            },
        }
    }

    fn part(id: &str, completed: i64, total: i64) -> Part {
        Part {
            part_id: id.to_string(),
            name: "Ограничитель".to_string(),
            material: "Ст45".to_string(),
            route_stages: vec![stage("Ток", true), stage("Фр", false)],
            quantity_completed: completed,
            quantity_total: total,
            history_url: format!("/part/{}", id),
            edit_url: format!("/admin/part/edit/{}", id),
            delete_url: format!("/admin/part/delete/{}", id),
            qr_url: format!("/admin/part/qr/{}", id),
        }
    }

    fn all_permissions() -> PartPermissions {
        PartPermissions {
            can_edit: true,
            can_delete: true,
            can_generate_qr: true,
        }
    }

    #[test]
    fn test_progress_width() {
        let row = build_part_row(&part("А-1", 3, 4), &PartPermissions::default(), "t");
        assert_eq!(row.progress_width, "75%");
        assert_eq!(row.progress_text, "3 из 4");

        assert_eq!(progress_width(100.0 / 3.0), "33.333333333333336%");
    }

    #[test]
    fn test_progress_zero_total_does_not_panic() {
        let row = build_part_row(&part("А-1", 0, 0), &PartPermissions::default(), "t");
        assert_eq!(row.progress_width, "NaN%");
        let row = build_part_row(&part("А-1", 2, 0), &PartPermissions::default(), "t");
        assert_eq!(row.progress_width, "inf%");
    }

    #[test]
    fn test_route_marks() {
        let route = build_route(&[
            stage("Ток", true),
            stage("Фр", true),
            stage("Св", false),
            stage("HRC", false),
        ]);
        let RouteView::Stages(stages) = route else {
            panic!("expected stages");
        };
        let marks: Vec<StageMark> = stages.iter().map(|s| s.mark).collect();
        assert_eq!(
            marks,
            vec![StageMark::Done, StageMark::Done, StageMark::Next, StageMark::Pending]
        );
        assert_eq!(stages[2].name, "Св");
    }

    #[test]
    fn test_route_completed_after_next_stays_done() {
        let RouteView::Stages(stages) =
            build_route(&[stage("Ток", false), stage("Фр", true), stage("Св", false)])
        else {
            panic!("expected stages");
        };
        let marks: Vec<StageMark> = stages.iter().map(|s| s.mark).collect();
        assert_eq!(marks, vec![StageMark::Next, StageMark::Done, StageMark::Pending]);
    }

    #[test]
    fn test_route_unassigned() {
        assert_eq!(build_route(&[]), RouteView::Unassigned);
    }

    #[test]
    fn test_no_delete_without_permission() {
        let permissions = PartPermissions {
            can_delete: false,
            ..all_permissions()
        };
        let actions = build_actions(&part("А-1", 1, 1), &permissions, "token");
        assert!(actions.delete.is_none());
        assert!(actions.delete_prompt.is_none());
        assert_eq!(actions.edit_url.as_deref(), Some("/admin/part/edit/А-1"));
        assert!(actions.generate_qr.is_some());
    }

    #[test]
    fn test_actions_carry_csrf_token() {
        let actions = build_actions(&part("А-1", 1, 1), &all_permissions(), "abc123");
        let delete = actions.delete.unwrap();
        assert_eq!(delete.action_url, "/admin/part/delete/А-1");
        assert_eq!(delete.csrf_token, "abc123");
        assert_eq!(actions.generate_qr.unwrap().csrf_token, "abc123");
        assert_eq!(actions.delete_prompt.as_deref(), Some("Удалить деталь А-1?"));
    }

    #[test]
    fn test_missing_permissions_hide_all_actions() {
        let response = PartsResponse {
            parts: vec![part("А-1", 1, 2)],
            permissions: None,
        };
        let DetailsView::Parts(rows) = build_details_view(&response, "t") else {
            panic!("expected parts");
        };
        assert!(rows[0].actions.is_empty());
    }

    #[test]
    fn test_empty_parts_is_not_found() {
        let response = PartsResponse {
            parts: Vec::new(),
            permissions: Some(all_permissions()),
        };
        assert_eq!(build_details_view(&response, "t"), DetailsView::NotFound);
        assert!(DetailsView::NotFound.part_ids().is_empty());
    }

    #[test]
    fn test_part_ids_keep_order() {
        let response = PartsResponse {
            parts: vec![part("Б-2", 0, 1), part("А-1", 0, 1)],
            permissions: None,
        };
        assert_eq!(build_details_view(&response, "t").part_ids(), vec!["Б-2", "А-1"]);
    }

    #[test]
    fn test_build_from_api_json() {
        let json = r#"{
            "parts": [{
                "part_id": "АСЦБ-000461",
                "name": "Ограничитель",
                "material": "Ст45",
                "route_stages": [],
                "quantity_completed": 1,
                "quantity_total": 4,
                "history_url": "/part/АСЦБ-000461",
                "edit_url": "/e",
                "delete_url": "/d",
                "qr_url": "/q"
            }],
            "permissions": {"can_edit": false, "can_delete": true, "can_generate_qr": false}
        }"#;
        let response: PartsResponse = serde_json::from_str(json).unwrap();

        let DetailsView::Parts(rows) = build_details_view(&response, "tok") else {
            panic!("expected parts");
        };
        let row = &rows[0];
        assert_eq!(row.progress_width, "25%");
        assert_eq!(row.progress_text, "1 из 4");
        assert_eq!(row.route, RouteView::Unassigned);
        assert!(row.actions.edit_url.is_none());
        assert!(row.actions.generate_qr.is_none());
        assert_eq!(row.actions.delete.as_ref().map(|f| f.action_url.as_str()), Some("/d"));
    }
}
