/*
[INPUT]:  Module declarations for UI components.
[OUTPUT]: Public module exports for TUI component modules.
[POS]:    UI components module registry.
[UPDATE]: Add date_picker and single_select exports.
*/
pub mod confirm;
pub mod date_picker;
pub mod help;
pub mod menu_bar;
pub mod single_select;
pub mod status_bar;
pub mod task_form;
pub mod task_list;
