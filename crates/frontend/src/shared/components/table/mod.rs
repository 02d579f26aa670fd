pub mod expand_button;
pub mod select_cell;
pub mod select_checkbox;

pub use expand_button::{ExpandButton, ExpandSlotProps};
pub use select_cell::{SelectCell, SelectCellComponents};
pub use select_checkbox::{CheckboxClasses, CheckboxSlotProps, SelectCheckbox};
