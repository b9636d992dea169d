use serde::{Deserialize, Serialize};

/// Colour of a toolbar action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStyle {
    Primary,
    Success,
    Default,
}

impl ActionStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "action-btn action-btn--primary",
            ActionStyle::Success => "action-btn action-btn--success",
            ActionStyle::Default => "action-btn action-btn--default",
        }
    }
}

/// Icon drawn before the button label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionIcon {
    Plus,
    Refresh,
    Spreadsheet,
    UserPlus,
}

impl ActionIcon {
    /// Name understood by the frontend icon helper
    pub fn icon_name(&self) -> &'static str {
        match self {
            ActionIcon::Plus => "plus",
            ActionIcon::Refresh => "refresh",
            ActionIcon::Spreadsheet => "spreadsheet",
            ActionIcon::UserPlus => "user-plus",
        }
    }
}
