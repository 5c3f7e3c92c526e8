//! Блокирующие диалоги браузера (alert/confirm).

pub fn notify(title: &str, text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("{}\n\n{}", title, text));
    }
}

/// `true` только при явном подтверждении пользователем
pub fn confirm(title: &str, text: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&format!("{}\n\n{}", title, text)).ok())
        .unwrap_or(false)
}
