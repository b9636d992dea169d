pub mod dashboard;
pub mod data_table;
pub mod filter_field;
pub mod search_panel;

pub use dashboard::BackofficeDashboard;
