use crate::dashboards::d402_parts_tracking::view_model::DetailsView;

/// Состояние раскрываемой строки изделия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPhase {
    Collapsed,
    Loading,
    /// Показано содержимое из кэша, без запроса
    ExpandedCached,
    /// Показано только что загруженное содержимое
    ExpandedFresh,
    Error,
}

/// Что сделать при клике на переключатель строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStep {
    /// Скрыть строку; содержимое остаётся в DOM
    Collapse,
    ReplayCached,
    Fetch,
    /// Запрос по этому изделию уже идёт, просто показать загрузку
    AwaitInFlight,
}

impl RowPhase {
    pub fn is_expanded(self) -> bool {
        !matches!(self, RowPhase::Collapsed)
    }

    pub fn on_toggle(self, cache_hit: bool, in_flight: bool) -> ToggleStep {
        if self.is_expanded() {
            ToggleStep::Collapse
        } else if cache_hit {
            ToggleStep::ReplayCached
        } else if in_flight {
            ToggleStep::AwaitInFlight
        } else {
            ToggleStep::Fetch
        }
    }
}

/// Что сейчас нарисовано в ячейке `.details-placeholder`
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsBody {
    Blank,
    Loading,
    Ready(DetailsView),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowState {
    pub phase: RowPhase,
    pub body: DetailsBody,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            phase: RowPhase::Collapsed,
            body: DetailsBody::Blank,
        }
    }
}

impl RowState {
    /// Применяет шаг переключения; тело при сворачивании не сбрасывается
    pub fn apply(&mut self, step: ToggleStep, cached: Option<&DetailsView>) {
        match step {
            ToggleStep::Collapse => self.phase = RowPhase::Collapsed,
            ToggleStep::ReplayCached => {
                self.phase = RowPhase::ExpandedCached;
                if let Some(view) = cached {
                    self.body = DetailsBody::Ready(view.clone());
                }
            }
            ToggleStep::Fetch | ToggleStep::AwaitInFlight => {
                self.phase = RowPhase::Loading;
                self.body = DetailsBody::Loading;
            }
        }
    }

    /// Результат загрузки. Если строку успели свернуть, она остаётся свёрнутой.
    pub fn resolve(&mut self, result: Option<DetailsView>) {
        let expanded = self.phase.is_expanded();
        match result {
            Some(view) => {
                self.body = DetailsBody::Ready(view);
                if expanded {
                    self.phase = RowPhase::ExpandedFresh;
                }
            }
            None => {
                self.body = DetailsBody::Failed;
                if expanded {
                    self.phase = RowPhase::Error;
                }
            }
        }
    }
}

/// Подпись переключателя: обозначение и стрелка состояния
pub fn toggle_label(designation: &str, expanded: bool) -> String {
    let glyph = if expanded { '▴' } else { '▾' };
    format!("{} {}", designation, glyph)
}
