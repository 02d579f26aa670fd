//! Ячейка выбора/раскрытия строки таблицы: настройки, props и решение о том,
//! что ячейка показывает на рендере.

pub mod classes;
pub mod decision;
pub mod options;
pub mod props;
pub mod responsive_mode;
pub mod selectable_mode;

pub use classes::{class_names, SelectCellClasses};
pub use decision::{
    checkbox_attributes, decide, header_registration, CellComposition, CellControl, CellFlags,
    CheckboxDecision, ExpandDecision, SelectCellLayout, SelectorRole, HEADER_CELL_COL,
    HEADER_CELL_ROW,
};
pub use options::{TableOptions, DEFAULT_OPTIONS_JSON};
pub use props::{PassThroughAttrs, RowState, SelectCellProps};
pub use responsive_mode::ResponsiveMode;
pub use selectable_mode::SelectableMode;
