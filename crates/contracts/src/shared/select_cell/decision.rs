//! Решение о том, что рисует ячейка выбора на текущем рендере.
//!
//! [`decide`] - чистая проекция [`SelectCellProps`]: одинаковые входные
//! данные всегда дают одинаковый [`SelectCellLayout`], между вызовами ничего
//! не запоминается.

use super::props::{PassThroughAttrs, SelectCellProps};
use super::responsive_mode::ResponsiveMode;
use super::selectable_mode::SelectableMode;

/// Позиция, под которой ячейка заголовка регистрирует свой узел
pub const HEADER_CELL_ROW: usize = 0;
pub const HEADER_CELL_COL: usize = 0;

/// Семантическая роль чекбокса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRole {
    Header,
    Row,
}

impl SelectorRole {
    /// Значение атрибута `data-description`
    pub fn description(&self) -> &'static str {
        match self {
            SelectorRole::Header => "row-select-header",
            SelectorRole::Row => "row-select",
        }
    }
}

/// Какие контролы содержит ячейка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellComposition {
    /// Пустая ячейка-заглушка, сохраняет колонку на месте
    Nothing,
    ExpandOnly,
    CheckboxOnly,
    Both,
}

/// Контрол внутри ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellControl {
    Expand,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandDecision {
    /// Иконка повёрнута: строка раскрыта или в заголовке раскрыты все строки
    pub expanded: bool,
    /// Иконка заголовка занимает место, но не видна
    pub icon_hidden: bool,
    /// Кнопка строки подавлена
    pub button_disabled: bool,
    /// В заголовке раскрыта часть строк, но не все
    pub indeterminate: bool,
    /// У заголовка нет "раскрыть все"
    pub header_affordance_disabled: bool,
}

impl ExpandDecision {
    /// Кнопка неактивна: подавлена у строки или у заголовка нет "раскрыть все"
    pub fn is_button_disabled(&self) -> bool {
        self.button_disabled || self.header_affordance_disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxDecision {
    pub role: SelectorRole,
    pub data_index: Option<usize>,
    pub disabled: bool,
}

impl CheckboxDecision {
    /// Итоговые DOM-атрибуты чекбокса, см. [`checkbox_attributes`]
    pub fn dom_attributes(&self, attrs: &PassThroughAttrs) -> Vec<(String, Option<String>)> {
        checkbox_attributes(self.role.description(), self.data_index, attrs)
    }
}

/// Собственные атрибуты чекбокса, затем атрибуты вызывающего кода.
///
/// При совпадении имени побеждает вызывающий код. `None` означает "удалить
/// атрибут".
pub fn checkbox_attributes(
    description: &str,
    data_index: Option<usize>,
    attrs: &PassThroughAttrs,
) -> Vec<(String, Option<String>)> {
    let mut result: Vec<(String, Option<String>)> = vec![
        ("data-description".to_string(), Some(description.to_string())),
        ("data-index".to_string(), data_index.map(|index| index.to_string())),
    ];
    for (name, value) in attrs.dom_values() {
        match result.iter_mut().find(|(own, _)| *own == name) {
            Some(slot) => slot.1 = value,
            None => result.push((name, value)),
        }
    }
    result
}

/// Позиционные флаги контейнера ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub fixed_header: bool,
    pub fixed_left: bool,
    pub header_cell: bool,
    pub vertical_icon_style: bool,
}

/// Результат рендера видимой ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCellLayout {
    pub flags: CellFlags,
    pub expand: Option<ExpandDecision>,
    pub checkbox: Option<CheckboxDecision>,
    /// Раскрытая строка в стандартной раскладке: без нижней границы
    pub suppress_bottom_border: bool,
}

impl SelectCellLayout {
    pub fn composition(&self) -> CellComposition {
        match (self.expand.is_some(), self.checkbox.is_some()) {
            (false, false) => CellComposition::Nothing,
            (true, false) => CellComposition::ExpandOnly,
            (false, true) => CellComposition::CheckboxOnly,
            (true, true) => CellComposition::Both,
        }
    }

    /// Порядок контролов в ячейке: сначала кнопка раскрытия, затем чекбокс
    pub fn controls(&self) -> Vec<CellControl> {
        let mut controls = Vec::with_capacity(2);
        if self.expand.is_some() {
            controls.push(CellControl::Expand);
        }
        if self.checkbox.is_some() {
            controls.push(CellControl::Checkbox);
        }
        controls
    }

    /// Строка (у заголовка - вся таблица) показана раскрытой
    pub fn is_expanded(&self) -> bool {
        self.expand.map(|e| e.expanded).unwrap_or(false)
    }
}

/// Позиция регистрации узла ячейки; только для заголовка
pub fn header_registration(props: &SelectCellProps) -> Option<(usize, usize)> {
    props
        .is_header_cell
        .then_some((HEADER_CELL_ROW, HEADER_CELL_COL))
}

/// Проецирует props на раскладку. `None` - ячейка не рисуется.
///
/// `all_rows_expanded` вызывается не более одного раза и только у заголовка.
pub fn decide(
    props: &SelectCellProps,
    all_rows_expanded: impl FnOnce() -> bool,
) -> Option<SelectCellLayout> {
    let selection_shown = props.selectable_on.is_active() && !props.selectable_rows_hide_checkboxes;

    if !props.expandable_on && !selection_shown {
        return None;
    }

    let is_header = props.is_header_cell;
    let all_expanded = is_header && all_rows_expanded();
    let expanded = props.is_row_expanded || all_expanded;

    let expand = (props.expandable_on && props.show_expand_button).then(|| ExpandDecision {
        expanded,
        icon_hidden: is_header && !props.expandable_rows_header,
        button_disabled: props.hide_expand_button,
        indeterminate: is_header && !all_expanded && props.expanded_row_count > 0,
        header_affordance_disabled: is_header && !props.expandable_rows_header,
    });

    let checkbox = checkbox_decision(props, selection_shown);

    Some(SelectCellLayout {
        flags: CellFlags {
            fixed_header: props.fixed_header && is_header,
            fixed_left: props.fixed_select_column,
            header_cell: is_header,
            vertical_icon_style: props.responsive == ResponsiveMode::Vertical,
        },
        expand,
        checkbox,
        suppress_bottom_border: expanded && props.responsive == ResponsiveMode::Standard,
    })
}

fn checkbox_decision(props: &SelectCellProps, selection_shown: bool) -> Option<CheckboxDecision> {
    if !selection_shown {
        return None;
    }

    if props.is_header_cell {
        // "выбрать все" имеет смысл только для множественного выбора
        if props.selectable_on != SelectableMode::Multiple || !props.selectable_rows_header {
            return None;
        }
        return Some(CheckboxDecision {
            role: SelectorRole::Header,
            data_index: None,
            disabled: !props.is_row_selectable,
        });
    }

    Some(CheckboxDecision {
        role: SelectorRole::Row,
        data_index: props.data_index,
        disabled: !props.is_row_selectable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never() -> bool {
        false
    }

    fn always() -> bool {
        true
    }

    fn modes() -> [SelectableMode; 3] {
        [SelectableMode::None, SelectableMode::Single, SelectableMode::Multiple]
    }

    #[test]
    fn test_gate_renders_nothing() {
        for is_header_cell in [false, true] {
            for hide in [false, true] {
                for mode in modes() {
                    if mode.is_active() && !hide {
                        continue;
                    }
                    let props = SelectCellProps {
                        is_header_cell,
                        selectable_on: mode,
                        selectable_rows_hide_checkboxes: hide,
                        is_row_expanded: true,
                        data_index: Some(1),
                        ..SelectCellProps::default()
                    };
                    assert_eq!(decide(&props, always), None, "{props:?}");
                }
            }
        }
    }

    #[test]
    fn test_header_single_mode_has_no_checkbox() {
        for expandable_on in [false, true] {
            for selectable_rows_header in [false, true] {
                let props = SelectCellProps {
                    is_header_cell: true,
                    selectable_on: SelectableMode::Single,
                    expandable_on,
                    selectable_rows_header,
                    ..SelectCellProps::default()
                };
                let layout = decide(&props, never).expect("selection is active");
                assert_eq!(layout.checkbox, None);
            }
        }
    }

    #[test]
    fn test_header_multiple_without_header_checkbox() {
        let props = SelectCellProps {
            is_header_cell: true,
            selectable_on: SelectableMode::Multiple,
            selectable_rows_header: false,
            ..SelectCellProps::default()
        };
        let layout = decide(&props, never).unwrap();
        assert_eq!(layout.checkbox, None);
        assert_eq!(layout.composition(), CellComposition::Nothing);
    }

    #[test]
    fn test_header_multiple_shows_select_all() {
        let props = SelectCellProps {
            is_header_cell: true,
            selectable_on: SelectableMode::Multiple,
            data_index: Some(5),
            ..SelectCellProps::default()
        };
        let checkbox = decide(&props, never).unwrap().checkbox.unwrap();
        assert_eq!(checkbox.role, SelectorRole::Header);
        assert_eq!(checkbox.role.description(), "row-select-header");
        assert_eq!(checkbox.data_index, None);
        assert!(!checkbox.disabled);
    }

    #[test]
    fn test_row_checkbox_in_any_active_mode() {
        for mode in [SelectableMode::Single, SelectableMode::Multiple] {
            let props = SelectCellProps {
                selectable_on: mode,
                data_index: Some(0),
                ..SelectCellProps::default()
            };
            let checkbox = decide(&props, never).unwrap().checkbox.unwrap();
            assert_eq!(checkbox.role.description(), "row-select");
            assert_eq!(checkbox.data_index, Some(0));
        }
    }

    #[test]
    fn test_row_scenario_single_enabled_checkbox() {
        let props = SelectCellProps {
            is_header_cell: false,
            selectable_on: SelectableMode::Multiple,
            is_row_selectable: true,
            data_index: Some(3),
            ..SelectCellProps::default()
        };
        let layout = decide(&props, never).unwrap();
        assert_eq!(layout.composition(), CellComposition::CheckboxOnly);
        assert_eq!(
            layout.checkbox,
            Some(CheckboxDecision {
                role: SelectorRole::Row,
                data_index: Some(3),
                disabled: false,
            })
        );
    }

    #[test]
    fn test_unselectable_row_gets_disabled_checkbox() {
        let props = SelectCellProps {
            selectable_on: SelectableMode::Multiple,
            is_row_selectable: false,
            data_index: Some(2),
            ..SelectCellProps::default()
        };
        let checkbox = decide(&props, never).unwrap().checkbox.unwrap();
        assert!(checkbox.disabled);
    }

    #[test]
    fn test_hidden_checkboxes_with_expansion() {
        let props = SelectCellProps {
            expandable_on: true,
            selectable_on: SelectableMode::Multiple,
            selectable_rows_hide_checkboxes: true,
            ..SelectCellProps::default()
        };
        let layout = decide(&props, never).unwrap();
        assert_eq!(layout.composition(), CellComposition::ExpandOnly);
    }

    #[test]
    fn test_both_controls() {
        let props = SelectCellProps {
            expandable_on: true,
            selectable_on: SelectableMode::Single,
            data_index: Some(1),
            ..SelectCellProps::default()
        };
        assert_eq!(decide(&props, never).unwrap().composition(), CellComposition::Both);
    }

    #[test]
    fn test_show_and_disable_are_independent() {
        let base = SelectCellProps {
            expandable_on: true,
            ..SelectCellProps::default()
        };

        let absent = SelectCellProps {
            show_expand_button: false,
            hide_expand_button: false,
            ..base.clone()
        };
        assert_eq!(decide(&absent, never).unwrap().expand, None);

        let absent_and_disabled = SelectCellProps {
            show_expand_button: false,
            hide_expand_button: true,
            ..base.clone()
        };
        assert_eq!(decide(&absent_and_disabled, never).unwrap().expand, None);

        let disabled = SelectCellProps {
            show_expand_button: true,
            hide_expand_button: true,
            ..base.clone()
        };
        let expand = decide(&disabled, never).unwrap().expand.unwrap();
        assert!(expand.button_disabled);

        let enabled = decide(&base, never).unwrap().expand.unwrap();
        assert!(!enabled.button_disabled);
    }

    #[test]
    fn test_expanded_indicator() {
        for is_header_cell in [false, true] {
            for is_row_expanded in [false, true] {
                for all in [false, true] {
                    let props = SelectCellProps {
                        is_header_cell,
                        is_row_expanded,
                        expandable_on: true,
                        ..SelectCellProps::default()
                    };
                    let layout = decide(&props, || all).unwrap();
                    let expected = is_row_expanded || (is_header_cell && all);
                    assert_eq!(layout.is_expanded(), expected, "{props:?} all={all}");
                }
            }
        }
    }

    #[test]
    fn test_all_rows_query_only_for_header() {
        let mut calls = 0;
        let row = SelectCellProps {
            expandable_on: true,
            ..SelectCellProps::default()
        };
        decide(&row, || {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);

        let header = SelectCellProps {
            is_header_cell: true,
            ..row
        };
        decide(&header, || {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_header_icon_hidden_without_affordance() {
        let props = SelectCellProps {
            is_header_cell: true,
            expandable_on: true,
            expandable_rows_header: false,
            ..SelectCellProps::default()
        };
        assert!(decide(&props, never).unwrap().expand.unwrap().icon_hidden);

        let shown = SelectCellProps {
            expandable_rows_header: true,
            ..props.clone()
        };
        assert!(!decide(&shown, never).unwrap().expand.unwrap().icon_hidden);

        let row = SelectCellProps {
            is_header_cell: false,
            ..props
        };
        assert!(!decide(&row, never).unwrap().expand.unwrap().icon_hidden);
    }

    #[test]
    fn test_header_indeterminate_when_some_rows_expanded() {
        let props = SelectCellProps {
            is_header_cell: true,
            expandable_on: true,
            expandable_rows_header: true,
            expanded_row_count: 2,
            ..SelectCellProps::default()
        };
        assert!(decide(&props, never).unwrap().expand.unwrap().indeterminate);
        assert!(!decide(&props, always).unwrap().expand.unwrap().indeterminate);

        let none_expanded = SelectCellProps {
            expanded_row_count: 0,
            ..props
        };
        assert!(!decide(&none_expanded, never).unwrap().expand.unwrap().indeterminate);
    }

    #[test]
    fn test_bottom_border_suppression() {
        for responsive in [ResponsiveMode::Vertical, ResponsiveMode::Standard, ResponsiveMode::Simple] {
            for is_row_expanded in [false, true] {
                let props = SelectCellProps {
                    expandable_on: true,
                    is_row_expanded,
                    responsive,
                    ..SelectCellProps::default()
                };
                let layout = decide(&props, never).unwrap();
                assert_eq!(
                    layout.suppress_bottom_border,
                    is_row_expanded && responsive == ResponsiveMode::Standard
                );
            }
        }
    }

    #[test]
    fn test_positional_flags() {
        let props = SelectCellProps {
            selectable_on: SelectableMode::Multiple,
            fixed_header: true,
            fixed_select_column: true,
            responsive: ResponsiveMode::Vertical,
            ..SelectCellProps::default()
        };
        let row_flags = decide(&props, never).unwrap().flags;
        assert!(!row_flags.fixed_header);
        assert!(row_flags.fixed_left);
        assert!(!row_flags.header_cell);
        assert!(row_flags.vertical_icon_style);

        let header = SelectCellProps {
            is_header_cell: true,
            responsive: ResponsiveMode::Standard,
            ..props
        };
        let header_flags = decide(&header, never).unwrap().flags;
        assert!(header_flags.fixed_header);
        assert!(header_flags.header_cell);
        assert!(!header_flags.vertical_icon_style);
    }

    #[test]
    fn test_decide_is_idempotent() {
        let props = SelectCellProps {
            is_header_cell: true,
            expandable_on: true,
            selectable_on: SelectableMode::Multiple,
            expandable_rows_header: true,
            expanded_row_count: 1,
            responsive: ResponsiveMode::Standard,
            ..SelectCellProps::default()
        };
        let first = decide(&props, always);
        let second = decide(&props, always);
        assert_eq!(first, second);
    }

    #[test]
    fn test_expand_control_comes_before_checkbox() {
        let props = SelectCellProps {
            expandable_on: true,
            selectable_on: SelectableMode::Multiple,
            data_index: Some(1),
            ..SelectCellProps::default()
        };
        let layout = decide(&props, never).unwrap();
        assert_eq!(layout.controls(), vec![CellControl::Expand, CellControl::Checkbox]);

        let checkbox_only = SelectCellProps {
            expandable_on: false,
            ..props.clone()
        };
        assert_eq!(
            decide(&checkbox_only, never).unwrap().controls(),
            vec![CellControl::Checkbox]
        );

        let placeholder = SelectCellProps {
            show_expand_button: false,
            selectable_rows_hide_checkboxes: true,
            ..props
        };
        assert!(decide(&placeholder, never).unwrap().controls().is_empty());
    }

    #[test]
    fn test_checkbox_own_attributes() {
        let checkbox = CheckboxDecision {
            role: SelectorRole::Row,
            data_index: Some(3),
            disabled: false,
        };
        assert_eq!(
            checkbox.dom_attributes(&PassThroughAttrs::new()),
            vec![
                ("data-description".to_string(), Some("row-select".to_string())),
                ("data-index".to_string(), Some("3".to_string())),
            ]
        );

        let header = CheckboxDecision {
            role: SelectorRole::Header,
            data_index: None,
            disabled: false,
        };
        assert_eq!(
            header.dom_attributes(&PassThroughAttrs::new()),
            vec![
                ("data-description".to_string(), Some("row-select-header".to_string())),
                ("data-index".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_pass_through_attributes_win() {
        let attrs = PassThroughAttrs::new()
            .with("data-description", "custom-select")
            .with("data-index", false)
            .with("aria-label", "Выбрать строку");

        let result = checkbox_attributes("row-select", Some(3), &attrs);
        assert_eq!(
            result,
            vec![
                ("data-description".to_string(), Some("custom-select".to_string())),
                ("data-index".to_string(), None),
                ("aria-label".to_string(), Some("Выбрать строку".to_string())),
            ]
        );
    }

    #[test]
    fn test_header_registration_only_for_header() {
        let header = SelectCellProps {
            is_header_cell: true,
            ..SelectCellProps::default()
        };
        assert_eq!(
            header_registration(&header),
            Some((HEADER_CELL_ROW, HEADER_CELL_COL))
        );
        assert_eq!(header_registration(&header), Some((0, 0)));

        let row = SelectCellProps {
            data_index: Some(0),
            ..SelectCellProps::default()
        };
        assert_eq!(header_registration(&row), None);
    }

    #[test]
    fn test_header_affordance_disables_button() {
        let header = SelectCellProps {
            is_header_cell: true,
            expandable_on: true,
            expandable_rows_header: false,
            ..SelectCellProps::default()
        };
        let expand = decide(&header, never).unwrap().expand.unwrap();
        assert!(expand.header_affordance_disabled);
        assert!(expand.is_button_disabled());

        let with_affordance = SelectCellProps {
            expandable_rows_header: true,
            ..header.clone()
        };
        let expand = decide(&with_affordance, never).unwrap().expand.unwrap();
        assert!(!expand.header_affordance_disabled);
        assert!(!expand.is_button_disabled());

        // у строки флаг заголовка не действует
        let row = SelectCellProps {
            is_header_cell: false,
            ..header
        };
        let expand = decide(&row, never).unwrap().expand.unwrap();
        assert!(!expand.header_affordance_disabled);
        assert!(!expand.is_button_disabled());

        let suppressed_row = SelectCellProps {
            hide_expand_button: true,
            ..row
        };
        assert!(decide(&suppressed_row, never).unwrap().expand.unwrap().is_button_disabled());
    }
}
