pub mod dashboard_state;
pub mod filters;
pub mod indicators;
pub mod mock_rows;
pub mod notice;
pub mod paging;
pub mod tab_registry;
