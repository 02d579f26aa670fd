//! Demo table: owns rows, selection and expansion, renders one select cell
//! per row plus the header one.

use crate::shared::components::table::SelectCell;
use crate::shared::theme::{SelectCellThemeProvider, Theme, ThemeSelector};
use contracts::shared::select_cell::{
    PassThroughAttrs, RowState, SelectCellProps, SelectableMode, TableOptions,
};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use web_sys::HtmlElement;

#[derive(Debug, Clone)]
struct DemoRow {
    name: &'static str,
    amount: f64,
    selectable: bool,
    expandable: bool,
    show_expand: bool,
}

fn demo_rows() -> Vec<DemoRow> {
    vec![
        DemoRow { name: "Ozon", amount: 125_400.50, selectable: true, expandable: true, show_expand: true },
        DemoRow { name: "Wildberries", amount: 98_120.00, selectable: true, expandable: true, show_expand: true },
        DemoRow { name: "Яндекс Маркет", amount: 45_300.75, selectable: false, expandable: true, show_expand: true },
        DemoRow { name: "ЛеманаПро", amount: 7_800.00, selectable: true, expandable: false, show_expand: true },
        DemoRow { name: "Купер", amount: 1_250.00, selectable: true, expandable: false, show_expand: false },
    ]
}

/// Loads the embedded table options, falling back to defaults
fn load_options() -> TableOptions {
    match TableOptions::embedded() {
        Ok(options) => options,
        Err(err) => {
            log::error!("Failed to load table options: {:#}", err);
            TableOptions::default()
        }
    }
}

/// Следующее состояние "раскрыть все": если раскрыта хотя бы одна строка
/// (включая частично раскрытую таблицу), всё сворачивается
fn toggle_all(expanded: &HashSet<usize>, expandable: &[usize]) -> HashSet<usize> {
    if expanded.is_empty() {
        expandable.iter().copied().collect()
    } else {
        HashSet::new()
    }
}

#[component]
pub fn App() -> impl IntoView {
    let options = StoredValue::new(load_options());
    let rows = StoredValue::new(demo_rows());
    let selected = RwSignal::new(HashSet::<usize>::new());
    let expanded = RwSignal::new(HashSet::<usize>::new());
    let select_column_width = RwSignal::new(0);

    let selectable_indices = move || -> Vec<usize> {
        rows.with_value(|rows| {
            rows.iter().enumerate().filter(|(_, r)| r.selectable).map(|(i, _)| i).collect()
        })
    };
    let expandable_indices = move || -> Vec<usize> {
        rows.with_value(|rows| {
            rows.iter()
                .enumerate()
                .filter(|(_, r)| r.expandable && r.show_expand)
                .map(|(i, _)| i)
                .collect()
        })
    };

    let all_rows_expanded = Callback::new(move |()| {
        let expandable = expandable_indices();
        !expandable.is_empty() && expanded.with(|set| expandable.iter().all(|i| set.contains(i)))
    });

    let toggle_all_expanded = Callback::new(move |_: Option<usize>| {
        let next = expanded.with(|set| toggle_all(set, &expandable_indices()));
        expanded.set(next);
    });

    let toggle_expanded = Callback::new(move |index: Option<usize>| {
        if let Some(index) = index {
            expanded.update(|set| {
                if !set.remove(&index) {
                    set.insert(index);
                }
            });
        }
    });

    let all_selected = Signal::derive(move || {
        let selectable = selectable_indices();
        !selectable.is_empty() && selected.with(|set| selectable.iter().all(|i| set.contains(i)))
    });

    let select_all = Callback::new(move |check_all: bool| {
        if check_all {
            selected.set(selectable_indices().into_iter().collect());
        } else {
            selected.set(HashSet::new());
        }
    });

    let register_header_cell = Callback::new(move |(row, col, node): (usize, usize, HtmlElement)| {
        log::debug!("Header cell ({}, {}) width: {}px", row, col, node.offset_width());
        select_column_width.set(node.offset_width());
    });

    let header_props = Signal::derive(move || {
        let expanded_count = expanded.with(|set| set.len());
        options.with_value(|o| SelectCellProps::header(o, expanded_count))
    });

    let body = move || {
        rows.get_value()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let DemoRow { name, amount, selectable, expandable, show_expand } = row;
                let props = Signal::derive(move || {
                    let state = RowState {
                        data_index: index,
                        is_expanded: expanded.with(|set| set.contains(&index)),
                        is_selectable: selectable,
                        is_expandable: expandable,
                        show_expand_button: show_expand,
                    };
                    options.with_value(|o| SelectCellProps::row(o, state))
                });
                let on_change = Callback::new(move |checked: bool| {
                    let single = options.with_value(|o| o.selectable_rows == SelectableMode::Single);
                    selected.update(|set| {
                        if single {
                            set.clear();
                        }
                        if checked {
                            set.insert(index);
                        } else {
                            set.remove(&index);
                        }
                    });
                });
                let attrs = PassThroughAttrs::new().with("aria-label", format!("Выбрать {}", name));

                view! {
                    <TableRow>
                        <SelectCell
                            props=props
                            checked=Signal::derive(move || selected.with(|set| set.contains(&index)))
                            on_change=on_change
                            on_expand=toggle_expanded
                            attrs=attrs
                        />
                        <TableCell>
                            <TableCellLayout>{name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{format!("{:.2}", amount)}</TableCellLayout>
                        </TableCell>
                    </TableRow>
                    <Show when=move || expanded.with(|set| set.contains(&index))>
                        <tr class="table__detail-row">
                            <td colspan="3">{format!("{}: детализация строки {}", name, index + 1)}</td>
                        </tr>
                    </Show>
                }
            })
            .collect_view()
    };

    view! {
        <SelectCellThemeProvider theme=Theme::Light>
            <ThemeSelector />
            <Table>
                <TableHeader>
                    <TableRow>
                        <SelectCell
                            props=header_props
                            checked=all_selected
                            on_change=select_all
                            on_expand=toggle_all_expanded
                            all_rows_expanded=all_rows_expanded
                            register_header_cell_node=register_header_cell
                        />
                        <TableHeaderCell>"Маркетплейс"</TableHeaderCell>
                        <TableHeaderCell>"Сумма"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
            <div class="table__footer">
                {move || format!("Выбрано: {} / ширина колонки выбора: {}px", selected.with(|s| s.len()), select_column_width.get())}
            </div>
        </SelectCellThemeProvider>
    }
}
