pub mod action;
pub mod backoffice_tab;
pub mod column_kind;
pub mod filter_kind;

pub use action::{ActionIcon, ActionStyle};
pub use backoffice_tab::BackofficeTab;
pub use column_kind::{CellAlign, ColumnKind, FixedValue};
pub use filter_kind::FilterKind;
