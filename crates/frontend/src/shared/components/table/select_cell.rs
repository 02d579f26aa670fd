//! Ячейка выбора/раскрытия строки таблицы
//!
//! Ячейка ничего не хранит: при каждом изменении `props` заново вычисляет
//! [`decide`] и рисует ноль, один или два контрола. Состояние выбора и
//! раскрытия принадлежит таблице.
//!
//! # Примеры
//!
//! ```ignore
//! <SelectCell
//!     props=Signal::derive(move || SelectCellProps::row(&options, row_state()))
//!     checked=Signal::derive(move || selected.get().contains(&index))
//!     on_change=Callback::new(move |checked| toggle_select(index, checked))
//!     on_expand=Callback::new(move |_| toggle_expand(index))
//! />
//! ```

// `#[component]` generates its own `SelectCellProps`
use contracts::shared::select_cell::{
    decide, header_registration, CellControl, PassThroughAttrs, SelectCellClasses,
    SelectCellLayout, SelectCellProps as CellInput,
};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::expand_button::{ExpandButton, ExpandSlotProps};
use super::select_checkbox::{CheckboxClasses, CheckboxSlotProps, SelectCheckbox};
use crate::shared::theme::{resolve_select_cell_theme, SelectCellTheme};

/// Замена контролов по умолчанию
#[derive(Clone, Copy, Default)]
pub struct SelectCellComponents {
    pub checkbox: Option<Callback<CheckboxSlotProps, AnyView>>,
    pub expand_button: Option<Callback<ExpandSlotProps, AnyView>>,
}

/// Ячейка с чекбоксом выбора и/или кнопкой раскрытия
#[component]
pub fn SelectCell(
    /// Флаги ячейки на текущий рендер
    #[prop(into)]
    props: Signal<CellInput>,

    /// Состояние чекбокса
    #[prop(optional, into)]
    checked: MaybeProp<bool>,

    /// Callback при изменении чекбокса
    #[prop(optional)]
    on_change: Option<Callback<bool>>,

    /// Callback кнопки раскрытия (индекс строки, у заголовка None)
    #[prop(optional)]
    on_expand: Option<Callback<Option<usize>>>,

    /// Раскрыты ли все строки; спрашивается только у заголовка
    #[prop(optional)]
    all_rows_expanded: Option<Callback<(), bool>>,

    /// Атрибуты, передаваемые чекбоксу как есть
    #[prop(optional, into)]
    attrs: MaybeProp<PassThroughAttrs>,

    /// Регистрация DOM-узла ячейки заголовка в позиции (0, 0)
    #[prop(optional)]
    register_header_cell_node: Option<Callback<(usize, usize, HtmlElement)>>,

    /// Явная тема; без неё берётся контекст
    #[prop(optional)]
    theme: Option<SelectCellTheme>,

    #[prop(optional)]
    components: SelectCellComponents,
) -> impl IntoView {
    let classes = resolve_select_cell_theme(theme).classes;
    let checked = Signal::derive(move || checked.get().unwrap_or(false));
    let cell_ref = NodeRef::<leptos::html::Td>::new();

    if let Some(register) = register_header_cell_node {
        Effect::new(move |_| {
            let Some((row, col)) = props.with(header_registration) else {
                return;
            };
            if let Some(cell) = cell_ref.get() {
                log::debug!("select cell: header node registered at ({}, {})", row, col);
                register.run((row, col, cell.unchecked_into::<HtmlElement>()));
            }
        });
    }

    move || {
        let current = props.get();
        let layout = decide(&current, || {
            all_rows_expanded.map(|query| query.run(())).unwrap_or(false)
        });
        let Some(layout) = layout else {
            return ().into_any();
        };

        let controls = layout
            .controls()
            .into_iter()
            .filter_map(|control| match control {
                CellControl::Expand => {
                    expand_slot(&layout, &current, &classes, all_rows_expanded, on_expand).map(
                        |slot| match components.expand_button {
                            Some(render) => render.run(slot),
                            None => view! { <ExpandButton control=slot /> }.into_any(),
                        },
                    )
                }
                CellControl::Checkbox => {
                    checkbox_slot(&layout, &classes, checked, on_change, attrs.get()).map(
                        |slot| match components.checkbox {
                            Some(render) => render.run(slot),
                            None => view! { <SelectCheckbox control=slot /> }.into_any(),
                        },
                    )
                }
            })
            .collect::<Vec<_>>();

        view! {
            <td
                node_ref=cell_ref
                class=format!("table__cell table__cell--checkbox {}", layout.cell_class(&classes))
                style=layout.cell_style()
            >
                <div style="display: flex; align-items: center;">
                    {controls}
                </div>
            </td>
        }
        .into_any()
    }
}

fn expand_slot(
    layout: &SelectCellLayout,
    props: &CellInput,
    classes: &Arc<SelectCellClasses>,
    all_rows_expanded: Option<Callback<(), bool>>,
    on_expand: Option<Callback<Option<usize>>>,
) -> Option<ExpandSlotProps> {
    let expand = layout.expand?;
    Some(ExpandSlotProps {
        is_header_cell: props.is_header_cell,
        all_rows_expanded,
        on_expand,
        expandable_rows_header: props.expandable_rows_header,
        button_class: layout.button_class(classes),
        icon_class: layout.icon_class(classes),
        icon_indeterminate_class: layout.icon_indeterminate_class(classes),
        indeterminate: expand.indeterminate,
        disabled: expand.is_button_disabled(),
        data_index: props.data_index,
    })
}

fn checkbox_slot(
    layout: &SelectCellLayout,
    classes: &Arc<SelectCellClasses>,
    checked: Signal<bool>,
    on_change: Option<Callback<bool>>,
    attrs: Option<PassThroughAttrs>,
) -> Option<CheckboxSlotProps> {
    let checkbox = layout.checkbox?;
    Some(CheckboxSlotProps {
        classes: CheckboxClasses::from_theme(classes),
        description: checkbox.role.description(),
        data_index: checkbox.data_index,
        disabled: checkbox.disabled,
        checked,
        on_change,
        attrs: attrs.unwrap_or_default(),
    })
}
