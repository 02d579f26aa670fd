pub mod select_cell;
