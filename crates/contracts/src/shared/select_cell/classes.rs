//! Классы ячейки выбора и их проекция на раскладку.

use serde::{Deserialize, Serialize};

use super::decision::SelectCellLayout;

/// Склеивает классы, у которых выполнено условие, в исходном порядке
pub fn class_names(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .filter(|(name, on)| *on && !name.is_empty())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Классы ячейки выбора и её контролов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectCellClasses {
    pub root: String,
    pub fixed_header: String,
    pub fixed_left: String,
    pub icon: String,
    pub expanded: String,
    pub hide: String,
    pub header_cell: String,
    pub expand_disabled: String,
    pub checkbox_root: String,
    pub checked: String,
    pub disabled: String,
    pub expand_icon_style: String,
}

impl Default for SelectCellClasses {
    fn default() -> Self {
        Self {
            root: "select-cell".into(),
            fixed_header: "select-cell--fixed-header".into(),
            fixed_left: "select-cell--fixed-left".into(),
            icon: "select-cell__icon".into(),
            expanded: "select-cell__icon--expanded".into(),
            hide: "select-cell__icon--hidden".into(),
            header_cell: "select-cell--header".into(),
            expand_disabled: "select-cell__expand--disabled".into(),
            checkbox_root: "select-cell__checkbox".into(),
            checked: "select-cell__checkbox--checked".into(),
            disabled: "select-cell__checkbox--disabled".into(),
            expand_icon_style: "select-cell--vertical".into(),
        }
    }
}

impl SelectCellClasses {
    /// CSS-правила для классов; `paper_background` - фон заголовка.
    ///
    /// Пустые классы пропускаются, как и в [`class_names`].
    pub fn stylesheet(&self, paper_background: &str) -> String {
        let header_rule = format!("z-index: 110; background-color: {};", paper_background);
        let rules = [
            (&self.fixed_header, "position: sticky; top: 0px; z-index: 100;"),
            (&self.fixed_left, "position: sticky; left: 0px; z-index: 100;"),
            (&self.icon, "cursor: pointer; transition: transform 0.25s;"),
            (&self.expanded, "transform: rotate(90deg);"),
            (&self.hide, "visibility: hidden;"),
            (&self.header_cell, header_rule.as_str()),
            (&self.expand_icon_style, "vertical-align: bottom; padding-bottom: 1rem;"),
        ];

        let mut css = String::new();
        if !self.root.is_empty() {
            css.push_str(&format!("@media print {{ .{} {{ display: none; }} }}\n", self.root));
        }
        for (class, body) in rules {
            if !class.is_empty() {
                css.push_str(&format!(".{} {{ {} }}\n", class, body));
            }
        }
        css
    }
}

impl SelectCellLayout {
    /// Классы контейнера `<td>`
    pub fn cell_class(&self, classes: &SelectCellClasses) -> String {
        class_names(&[
            (classes.root.as_str(), true),
            (classes.fixed_header.as_str(), self.flags.fixed_header),
            (classes.fixed_left.as_str(), self.flags.fixed_left),
            (classes.header_cell.as_str(), self.flags.header_cell),
            (classes.expand_icon_style.as_str(), self.flags.vertical_icon_style),
        ])
    }

    /// Inline-стиль контейнера `<td>`
    pub fn cell_style(&self) -> &'static str {
        if self.suppress_bottom_border {
            "border-bottom: none;"
        } else {
            ""
        }
    }

    pub fn button_class(&self, classes: &SelectCellClasses) -> String {
        let disabled = self.expand.map(|e| e.button_disabled).unwrap_or(false);
        class_names(&[(classes.expand_disabled.as_str(), disabled)])
    }

    pub fn icon_class(&self, classes: &SelectCellClasses) -> String {
        let (hidden, expanded) = self
            .expand
            .map(|e| (e.icon_hidden, e.expanded))
            .unwrap_or((false, false));
        class_names(&[
            (classes.icon.as_str(), true),
            (classes.hide.as_str(), hidden),
            (classes.expanded.as_str(), expanded),
        ])
    }

    /// Как [`Self::icon_class`], но без поворота
    pub fn icon_indeterminate_class(&self, classes: &SelectCellClasses) -> String {
        let hidden = self.expand.map(|e| e.icon_hidden).unwrap_or(false);
        class_names(&[(classes.icon.as_str(), true), (classes.hide.as_str(), hidden)])
    }
}
