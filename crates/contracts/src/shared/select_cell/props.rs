use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::options::TableOptions;
use super::responsive_mode::ResponsiveMode;
use super::selectable_mode::SelectableMode;

/// Входные данные одного рендера ячейки выбора
///
/// Запрос "раскрыты ли все строки" в структуру не входит: он передаётся
/// рядом с props и вызывается только у заголовка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectCellProps {
    /// Ячейка в строке заголовка
    pub is_header_cell: bool,
    /// Раскрытие строк включено для таблицы
    pub expandable_on: bool,
    /// Режим выбора строк
    pub selectable_on: SelectableMode,
    /// Строка раскрыта
    pub is_row_expanded: bool,
    /// Строку можно выбрать; `false` - чекбокс неактивен
    pub is_row_selectable: bool,
    /// Заголовок показывает "выбрать все" при множественном выборе
    pub selectable_rows_header: bool,
    /// Скрыть все чекбоксы
    pub selectable_rows_hide_checkboxes: bool,
    /// Кнопка раскрытия видна, но неактивна
    pub hide_expand_button: bool,
    /// Кнопка раскрытия рисуется вообще
    pub show_expand_button: bool,
    /// Заголовок показывает "раскрыть все"
    pub expandable_rows_header: bool,
    /// Количество раскрытых строк
    pub expanded_row_count: usize,
    pub fixed_header: bool,
    pub fixed_select_column: bool,
    pub responsive: ResponsiveMode,
    /// Индекс строки, передаётся чекбоксу как `data-index`
    pub data_index: Option<usize>,
}

impl Default for SelectCellProps {
    fn default() -> Self {
        Self {
            is_header_cell: false,
            expandable_on: false,
            selectable_on: SelectableMode::None,
            is_row_expanded: false,
            is_row_selectable: true,
            selectable_rows_header: true,
            selectable_rows_hide_checkboxes: false,
            hide_expand_button: false,
            show_expand_button: true,
            expandable_rows_header: false,
            expanded_row_count: 0,
            fixed_header: false,
            fixed_select_column: false,
            responsive: ResponsiveMode::Vertical,
            data_index: None,
        }
    }
}

/// Состояние строки, которым владеет таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    pub data_index: usize,
    pub is_expanded: bool,
    pub is_selectable: bool,
    /// `false` - кнопка раскрытия видна, но неактивна
    pub is_expandable: bool,
    /// `false` - кнопки раскрытия у строки нет совсем
    pub show_expand_button: bool,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            data_index: 0,
            is_expanded: false,
            is_selectable: true,
            is_expandable: true,
            show_expand_button: true,
        }
    }
}

impl SelectCellProps {
    fn from_options(options: &TableOptions) -> Self {
        Self {
            expandable_on: options.expandable_rows,
            selectable_on: options.selectable_rows,
            selectable_rows_header: options.selectable_rows_header,
            selectable_rows_hide_checkboxes: options.selectable_rows_hide_checkboxes,
            expandable_rows_header: options.expandable_rows_header,
            fixed_header: options.fixed_header,
            fixed_select_column: options.fixed_select_column,
            responsive: options.responsive,
            ..Self::default()
        }
    }

    /// Props ячейки заголовка
    pub fn header(options: &TableOptions, expanded_row_count: usize) -> Self {
        Self {
            is_header_cell: true,
            expanded_row_count,
            ..Self::from_options(options)
        }
    }

    /// Props ячейки строки данных
    pub fn row(options: &TableOptions, row: RowState) -> Self {
        Self {
            is_row_expanded: row.is_expanded,
            is_row_selectable: row.is_selectable,
            hide_expand_button: !row.is_expandable,
            show_expand_button: row.show_expand_button,
            data_index: Some(row.data_index),
            ..Self::from_options(options)
        }
    }
}

/// Атрибуты вызывающего кода, которые ячейка не разбирает; передаются
/// чекбоксу как есть, после его собственных.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassThroughAttrs(BTreeMap<String, Value>);

impl PassThroughAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// DOM-представление атрибутов: `None` - удалить (`false`/`null`),
    /// строки как есть, остальное - JSON-текстом.
    pub fn dom_values(&self) -> Vec<(String, Option<String>)> {
        self.0
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::Null | Value::Bool(false) => None,
                    Value::Bool(true) => Some(String::new()),
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                (name.clone(), rendered)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_props_from_options() {
        let options = TableOptions {
            selectable_rows: SelectableMode::Multiple,
            expandable_rows: true,
            ..TableOptions::default()
        };
        let props = SelectCellProps::header(&options, 2);
        assert!(props.is_header_cell);
        assert!(props.expandable_on);
        assert!(props.expandable_rows_header);
        assert_eq!(props.expanded_row_count, 2);
        assert_eq!(props.data_index, None);
    }

    #[test]
    fn test_row_props_from_row_state() {
        let options = TableOptions {
            selectable_rows: SelectableMode::Single,
            ..TableOptions::default()
        };
        let row = RowState {
            data_index: 7,
            is_expanded: true,
            is_selectable: false,
            is_expandable: false,
            show_expand_button: true,
        };
        let props = SelectCellProps::row(&options, row);
        assert!(!props.is_header_cell);
        assert_eq!(props.selectable_on, SelectableMode::Single);
        assert!(props.is_row_expanded);
        assert!(!props.is_row_selectable);
        assert!(props.hide_expand_button);
        assert!(props.show_expand_button);
        assert_eq!(props.data_index, Some(7));
    }

    #[test]
    fn test_pass_through_dom_values() {
        let attrs = PassThroughAttrs::new()
            .with("aria-label", "Select row")
            .with("data-row-id", 42)
            .with("readonly", true)
            .with("required", false);

        let values = attrs.dom_values();
        assert_eq!(
            values,
            vec![
                ("aria-label".to_string(), Some("Select row".to_string())),
                ("data-row-id".to_string(), Some("42".to_string())),
                ("readonly".to_string(), Some(String::new())),
                ("required".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_row_can_drop_expand_button() {
        let options = TableOptions {
            expandable_rows: true,
            ..TableOptions::default()
        };

        let shown = SelectCellProps::row(&options, RowState::default());
        assert!(shown.show_expand_button);
        assert!(!shown.hide_expand_button);

        let absent = SelectCellProps::row(
            &options,
            RowState {
                data_index: 2,
                show_expand_button: false,
                ..RowState::default()
            },
        );
        assert!(!absent.show_expand_button);
        assert_eq!(absent.data_index, Some(2));

        let layout = crate::shared::select_cell::decide(&absent, || false).unwrap();
        assert_eq!(layout.expand, None);
    }
}
