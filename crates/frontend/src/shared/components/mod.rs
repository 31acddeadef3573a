pub mod data_table;
pub mod page_header;
pub mod stat_card;
pub mod ui;
pub mod view_options_menu;
