pub mod d001_overview;
pub mod d002_analytics;

pub use d001_overview::ui::OverviewDashboard;
pub use d002_analytics::ui::AnalyticsDashboard;
