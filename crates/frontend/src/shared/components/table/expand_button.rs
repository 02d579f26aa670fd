//! Кнопка раскрытия строки внутри ячейки выбора

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Всё, что ячейка передаёт кнопке раскрытия
#[derive(Clone)]
pub struct ExpandSlotProps {
    pub is_header_cell: bool,
    /// Запрос "раскрыты ли все строки" от таблицы
    pub all_rows_expanded: Option<Callback<(), bool>>,
    pub on_expand: Option<Callback<Option<usize>>>,
    /// Заголовок показывает "раскрыть все"
    pub expandable_rows_header: bool,
    pub button_class: String,
    pub icon_class: String,
    pub icon_indeterminate_class: String,
    /// Раскрыта часть строк (только заголовок)
    pub indeterminate: bool,
    /// Кнопка неактивна: подавлена у строки или у заголовка нет "раскрыть все"
    pub disabled: bool,
    pub data_index: Option<usize>,
}

/// Кнопка раскрытия по умолчанию
///
/// Стрелка поворачивается классом `icon_class`; для заголовка с частично
/// раскрытыми строками показывается "минус" с `icon_indeterminate_class`.
#[component]
pub fn ExpandButton(control: ExpandSlotProps) -> impl IntoView {
    let disabled = control.disabled;
    let on_expand = control.on_expand;
    let data_index = control.data_index;

    let (glyph, icon_class) = if control.indeterminate {
        (icon("remove"), control.icon_indeterminate_class)
    } else {
        (icon("chevron-right"), control.icon_class)
    };

    view! {
        <button
            type="button"
            class=format!("select-cell__expand-button {}", control.button_class)
            style="padding: 0; border: none; background: transparent; color: inherit;"
            disabled=disabled
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(handler) = on_expand {
                    handler.run(data_index);
                }
            }
        >
            <span data-description="expandable-button" class=icon_class>
                {glyph}
            </span>
        </button>
    }
}
