//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod entity_form;
mod nav_bar;
mod notice_bar;
mod remote_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_form::{
    checkbox_field, date_field, form_shell, id_value, parse_id, select_field, text_field, textarea_field,
    FormController,
};
pub use nav_bar::NavBar;
pub use notice_bar::NoticeBar;
pub use remote_table::{
    apply_mutation, edit_delete_column, inactive_column, remote_table, use_collection, use_list_state,
    Column,
};
