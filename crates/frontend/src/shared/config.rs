//! Конфигурация дашборда.
//!
//! Читается один раз при старте из `<meta>` тегов серверной страницы:
//!
//! ```html
//! <meta name="dashboard-api-base" content="https://mes.example.com">
//! <meta name="dashboard-log-level" content="info">
//! ```
//!
//! Оба тега необязательны: по умолчанию запросы идут на тот же origin,
//! уровень логирования зависит от профиля сборки.

use log::Level;

pub const API_BASE_META: &str = "dashboard-api-base";
pub const LOG_LEVEL_META: &str = "dashboard-log-level";
pub const CSRF_TOKEN_META: &str = "csrf-token";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Префикс для всех API запросов, без завершающего `/`
    pub api_base: String,
    pub log_level: Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    pub fn from_document() -> Self {
        Self::from_meta(meta_content)
    }

    /// Собирает конфигурацию из произвольного источника meta-значений
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = lookup(API_BASE_META) {
            config.api_base = normalize_api_base(&base);
        }
        if let Some(level) = lookup(LOG_LEVEL_META).as_deref().and_then(parse_log_level) {
            config.log_level = level;
        }
        config
    }
}

fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}

pub fn normalize_api_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Значение атрибута `content` у `<meta name="...">`
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}
