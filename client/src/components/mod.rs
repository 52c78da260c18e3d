pub mod error_banner;
pub mod header;
pub mod list_tabs;
pub mod task_item;
