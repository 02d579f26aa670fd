//! Чекбокс выбора строки внутри ячейки выбора
//!
//! # Примеры
//!
//! ```ignore
//! <SelectCheckbox control=CheckboxSlotProps {
//!     classes: CheckboxClasses::default(),
//!     description: "row-select",
//!     data_index: Some(3),
//!     disabled: false,
//!     checked,
//!     on_change: Some(Callback::new(move |checked| toggle_select(3, checked))),
//!     attrs: PassThroughAttrs::new().with("aria-label", "Выбрать строку"),
//! } />
//! ```

use contracts::shared::select_cell::{
    checkbox_attributes, class_names, PassThroughAttrs, SelectCellClasses,
};
use leptos::prelude::*;

/// Классы чекбокса (слоты root/checked/disabled)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckboxClasses {
    pub root: String,
    pub checked: String,
    pub disabled: String,
}

impl CheckboxClasses {
    pub fn from_theme(classes: &SelectCellClasses) -> Self {
        Self {
            root: classes.checkbox_root.clone(),
            checked: classes.checked.clone(),
            disabled: classes.disabled.clone(),
        }
    }

    fn resolve(&self, checked: bool, disabled: bool) -> String {
        class_names(&[
            (self.root.as_str(), true),
            (self.checked.as_str(), checked),
            (self.disabled.as_str(), disabled),
        ])
    }
}

/// Всё, что ячейка передаёт чекбоксу
#[derive(Clone)]
pub struct CheckboxSlotProps {
    pub classes: CheckboxClasses,
    /// Значение `data-description`: "row-select-header" или "row-select"
    pub description: &'static str,
    /// Значение `data-index`; у заголовка отсутствует
    pub data_index: Option<usize>,
    pub disabled: bool,
    pub checked: Signal<bool>,
    pub on_change: Option<Callback<bool>>,
    /// Атрибуты вызывающего кода, применяются последними
    pub attrs: PassThroughAttrs,
}

/// Чекбокс по умолчанию
///
/// Автоматически:
/// - Останавливает propagation клика (чтобы не вызывать клик на строке)
/// - Выставляет `data-description`/`data-index`, затем pass-through атрибуты,
///   которые при совпадении имени побеждают
#[component]
pub fn SelectCheckbox(control: CheckboxSlotProps) -> impl IntoView {
    let CheckboxSlotProps {
        classes,
        description,
        data_index,
        disabled,
        checked,
        on_change,
        attrs,
    } = control;

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let dom_attributes = checkbox_attributes(description, data_index, &attrs);

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            for (name, value) in dom_attributes.iter() {
                let result = match value {
                    Some(value) => input.set_attribute(name, value),
                    None => input.remove_attribute(name),
                };
                if let Err(err) = result {
                    log::warn!("Failed to apply checkbox attribute {}: {:?}", name, err);
                }
            }
        }
    });

    let wrapper_class = move || classes.resolve(checked.get(), disabled);

    view! {
        <span class=wrapper_class on:click=|e| e.stop_propagation()>
            <input
                node_ref=input_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_classes_resolve() {
        let classes = CheckboxClasses::from_theme(&SelectCellClasses::default());
        assert_eq!(classes.resolve(false, false), "select-cell__checkbox");
        assert_eq!(
            classes.resolve(true, true),
            "select-cell__checkbox select-cell__checkbox--checked select-cell__checkbox--disabled"
        );
    }
}
