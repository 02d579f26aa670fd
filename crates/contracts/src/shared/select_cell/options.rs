use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::responsive_mode::ResponsiveMode;
use super::selectable_mode::SelectableMode;

/// Настройки таблицы, от которых зависит ячейка выбора. Все ключи необязательны.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    /// Режим выбора строк
    pub selectable_rows: SelectableMode,
    /// Чекбокс "выбрать все" в заголовке (только множественный выбор)
    pub selectable_rows_header: bool,
    /// Скрыть все чекбоксы выбора
    pub selectable_rows_hide_checkboxes: bool,
    /// Строки можно раскрывать
    pub expandable_rows: bool,
    /// Заголовок показывает "раскрыть все"
    pub expandable_rows_header: bool,
    /// Закреплённая строка заголовка
    pub fixed_header: bool,
    /// Закреплённая колонка выбора
    pub fixed_select_column: bool,
    /// Режим раскладки
    pub responsive: ResponsiveMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selectable_rows: SelectableMode::None,
            selectable_rows_header: true,
            selectable_rows_hide_checkboxes: false,
            expandable_rows: false,
            expandable_rows_header: true,
            fixed_header: true,
            fixed_select_column: true,
            responsive: ResponsiveMode::Vertical,
        }
    }
}

/// Настройки по умолчанию, встроенные в сборку
pub const DEFAULT_OPTIONS_JSON: &str = r#"{
    "selectableRows": "multiple",
    "selectableRowsHeader": true,
    "expandableRows": true,
    "expandableRowsHeader": true,
    "responsive": "standard"
}"#;

impl TableOptions {
    /// Разбор настроек из JSON; отсутствующие ключи берутся по умолчанию
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse table options")
    }

    /// Настройки из [`DEFAULT_OPTIONS_JSON`]
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_OPTIONS_JSON)
    }
}
