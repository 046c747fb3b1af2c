//! Reusable widgets for the landing screen.

pub mod company_card;
pub mod search_panel;

pub use company_card::{CARD_HEIGHT, CompanyCard};
pub use search_panel::{PANEL_HEIGHT, SearchPanel};
