//! Analytics page mock figures.
//!
//! The snapshot is static; the time range select only changes the caption.

use crate::domain::common::Money;
use crate::enums::Tone;
use crate::shared::list_query::Coded;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl Coded for TimeRange {
    fn code(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7days",
            TimeRange::Last30Days => "30days",
            TimeRange::Last90Days => "90days",
            TimeRange::LastYear => "1year",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 3 months",
            TimeRange::LastYear => "Last year",
        }
    }

    fn all() -> &'static [Self] {
        &[
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::Last90Days,
            TimeRange::LastYear,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub total_revenue: Money,
    pub revenue_change: f64,
    pub total_bookings: u32,
    pub bookings_change: f64,
    pub avg_booking_value: Money,
    pub avg_value_change: f64,
    pub customer_satisfaction: f64,
    pub satisfaction_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: Money,
    pub bookings: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteFigure {
    pub route: &'static str,
    pub bookings: u32,
    pub revenue: Money,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusShare {
    pub status: &'static str,
    pub count: u32,
    pub percentage: f64,
}

impl StatusShare {
    pub fn tone(&self) -> Tone {
        match self.status {
            "Completed" => Tone::Success,
            "Confirmed" => Tone::Info,
            "In Progress" => Tone::Warning,
            "Pending" => Tone::Accent,
            _ => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerMetrics {
    pub new_customers: u32,
    pub returning_customers: u32,
    pub retention_rate: f64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub overview: Overview,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub top_routes: Vec<RouteFigure>,
    pub bookings_by_status: Vec<StatusShare>,
    pub customer_metrics: CustomerMetrics,
}

impl AnalyticsSnapshot {
    pub fn for_range(_range: TimeRange) -> Self {
        Self::default()
    }

    fn peak_revenue(&self) -> Money {
        self.monthly_revenue
            .iter()
            .map(|m| m.revenue)
            .max()
            .unwrap_or(Money::ZERO)
    }

    /// Bar height for a month as a fraction of the best month, `0.0..=1.0`
    pub fn revenue_bar_ratio(&self, month: &MonthlyRevenue) -> f64 {
        let peak = self.peak_revenue().value();
        if peak <= 0 {
            return 0.0;
        }
        (month.revenue.value() as f64 / peak as f64).clamp(0.0, 1.0)
    }
}

/// `+18.5% from last month`
pub fn change_caption(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{}% from last month", sign, change)
}

impl Default for AnalyticsSnapshot {
    fn default() -> Self {
        let month = |month, revenue, bookings| MonthlyRevenue {
            month,
            revenue: Money::rupees(revenue),
            bookings,
        };
        let route = |route, bookings, revenue| RouteFigure {
            route,
            bookings,
            revenue: Money::rupees(revenue),
        };
        let share = |status, count, percentage| StatusShare {
            status,
            count,
            percentage,
        };

        Self {
            overview: Overview {
                total_revenue: Money::rupees(256_800),
                revenue_change: 18.5,
                total_bookings: 142,
                bookings_change: 12.3,
                avg_booking_value: Money::rupees(1_809),
                avg_value_change: 5.2,
                customer_satisfaction: 4.3,
                satisfaction_change: 0.2,
            },
            monthly_revenue: vec![
                month("Jan", 45_000, 35),
                month("Feb", 52_000, 42),
                month("Mar", 48_000, 38),
                month("Apr", 58_000, 45),
                month("May", 63_000, 48),
                month("Jun", 71_000, 52),
            ],
            top_routes: vec![
                route("Delhi → Mumbai", 23, 184_000),
                route("Bangalore → Chennai", 18, 126_000),
                route("Pune → Hyderabad", 15, 105_000),
                route("Mumbai → Pune", 12, 72_000),
                route("Chennai → Bangalore", 10, 58_000),
            ],
            bookings_by_status: vec![
                share("Completed", 89, 62.7),
                share("Confirmed", 25, 17.6),
                share("In Progress", 18, 12.7),
                share("Pending", 10, 7.0),
            ],
            customer_metrics: CustomerMetrics {
                new_customers: 45,
                returning_customers: 28,
                retention_rate: 38.4,
                average_rating: 4.3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_does_not_change_snapshot() {
        for range in TimeRange::all() {
            assert_eq!(AnalyticsSnapshot::for_range(*range), AnalyticsSnapshot::default());
        }
        assert_eq!(TimeRange::default().code(), "30days");
        assert_eq!(TimeRange::from_code("1year"), Some(TimeRange::LastYear));
    }

    #[test]
    fn test_revenue_bar_ratio() {
        let snapshot = AnalyticsSnapshot::default();
        let june = snapshot.monthly_revenue[5];
        assert_eq!(snapshot.revenue_bar_ratio(&june), 1.0);
        let jan = snapshot.monthly_revenue[0];
        assert!((snapshot.revenue_bar_ratio(&jan) - 45_000.0 / 71_000.0).abs() < 1e-9);

        let empty = AnalyticsSnapshot {
            monthly_revenue: Vec::new(),
            ..AnalyticsSnapshot::default()
        };
        assert_eq!(empty.revenue_bar_ratio(&jan), 0.0);
    }

    #[test]
    fn test_status_shares_sum() {
        let snapshot = AnalyticsSnapshot::default();
        let count: u32 = snapshot.bookings_by_status.iter().map(|s| s.count).sum();
        assert_eq!(count, snapshot.overview.total_bookings);
        assert_eq!(snapshot.overview.total_revenue.format_inr(), "₹2,56,800");
    }

    #[test]
    fn test_change_caption() {
        assert_eq!(change_caption(18.5), "+18.5% from last month");
        assert_eq!(change_caption(-2.0), "-2% from last month");
    }
}
