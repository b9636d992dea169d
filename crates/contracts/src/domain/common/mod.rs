//! Common types shared by all back-office tab definitions

pub mod tab_definition;

pub use tab_definition::{
    ActionButton, ColumnDef, FilterField, PendingBadge, RowActions, TabDefinition,
    DETAILS_AND_DELETE, EDIT_AND_DELETE,
};
