pub mod filter_panel;
pub mod list_parts;
pub mod page_header;
pub mod pagination_controls;
pub mod ui;
