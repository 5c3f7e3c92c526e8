//! Дашборд отслеживания деталей по изделиям.
//!
//! Серверная страница рисует таблицу изделий; этот модуль подключается к ней
//! и добавляет раскрытие строк с ленивой загрузкой деталей, массовые действия
//! (удаление/печать), смену ответственного в модальном окне и поиск.

pub mod api;
pub mod bulk;
pub mod filter;
pub mod state;
pub mod ui;
pub mod view_model;

pub use ui::DashboardController;
