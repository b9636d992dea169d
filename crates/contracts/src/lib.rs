//! Данные и логика back-office панели: описания разделов, генератор
//! строк-заглушек, состояние страницы. Без зависимостей от web.

pub mod domain;
pub mod enums;
pub mod shared;
