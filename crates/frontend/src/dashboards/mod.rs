pub mod d100_backoffice;

pub use d100_backoffice::ui::BackofficeDashboard;
