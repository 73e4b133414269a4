pub mod empty_state;
pub mod filter_panel;
pub mod page_header;
pub mod star_rating;
pub mod stat_card;
pub mod table;
pub mod tone_badge;

pub use empty_state::EmptyState;
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
pub use star_rating::StarRating;
pub use stat_card::StatCard;
pub use tone_badge::ToneBadge;
