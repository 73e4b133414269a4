use crate::domain::common::aggregate_id::prefixed_id;
use crate::domain::common::Money;
use crate::enums::Tone;
use crate::shared::list_query::{contains_ci, Coded, SearchTerm, Searchable, Sortable};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// ID Type
// ============================================================================

prefixed_id!(
    /// Booking number, e.g. `BK001`
    BookingId,
    "BK",
    "booking"
);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl Coded for BookingStatus {
    fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in-progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::InProgress => "In Progress",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    fn all() -> &'static [Self] {
        &[
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }
}

impl BookingStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "check-circle",
            BookingStatus::Pending => "clock",
            BookingStatus::InProgress => "truck",
            BookingStatus::Completed => "package-check",
            BookingStatus::Cancelled => "x-circle",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BookingStatus::Confirmed => Tone::Info,
            BookingStatus::Pending => Tone::Warning,
            BookingStatus::InProgress => Tone::Success,
            BookingStatus::Completed => Tone::Neutral,
            BookingStatus::Cancelled => Tone::Danger,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer move booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: BookingStatus,
    pub amount: Money,
    /// Load description, e.g. "2 BHK Household"
    pub items: String,
}

impl Booking {
    /// City part of the pickup address (last comma-separated segment)
    pub fn pickup_city(&self) -> &str {
        city_of(&self.pickup_location)
    }

    pub fn drop_city(&self) -> &str {
        city_of(&self.drop_location)
    }

    pub fn date_display(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_display(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}

fn city_of(location: &str) -> &str {
    location.rsplit(',').next().map(str::trim).unwrap_or(location)
}

impl Searchable for Booking {
    fn matches_term(&self, term: &SearchTerm<'_>) -> bool {
        contains_ci(&self.customer_name, &term.lower)
            || contains_ci(self.id.as_str(), &term.lower)
            || contains_ci(&self.pickup_location, &term.lower)
            || contains_ci(&self.drop_location, &term.lower)
    }
}

impl Sortable for Booking {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "date" => (self.date, self.time).cmp(&(other.date, other.time)),
            "status" => self.status.label().cmp(other.status.label()),
            "amount" => self.amount.cmp(&other.amount),
            _ => self.id.cmp(&other.id),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Per-status counters for the summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub pending: usize,
    pub confirmed: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl BookingStats {
    pub fn from_bookings(rows: &[Booking]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, b| {
            match b.status {
                BookingStatus::Pending => acc.pending += 1,
                BookingStatus::Confirmed => acc.confirmed += 1,
                BookingStatus::InProgress => acc.in_progress += 1,
                BookingStatus::Completed => acc.completed += 1,
                BookingStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.confirmed + self.in_progress + self.completed + self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::sample_bookings;
    use crate::domain::common::AggregateId;

    #[test]
    fn test_status_codes_round_trip() {
        for status in BookingStatus::all() {
            assert_eq!(BookingStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(BookingStatus::from_code("in progress"), None);
    }

    #[test]
    fn test_each_status_has_its_own_icon() {
        let mut icons: Vec<&str> = BookingStatus::all().iter().map(|s| s.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), BookingStatus::all().len());
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&BookingStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_cities() {
        let rows = sample_bookings();
        assert_eq!(rows[0].pickup_city(), "New Delhi");
        assert_eq!(rows[0].drop_city(), "Mumbai");
    }

    #[test]
    fn test_time_display() {
        let rows = sample_bookings();
        assert_eq!(rows[0].time_display(), "09:00 AM");
        assert_eq!(rows[0].date_display(), "2024-01-25");
    }

    #[test]
    fn test_stats_over_sample() {
        let stats = BookingStats::from_bookings(&sample_bookings());
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total(), 7);
    }

    #[test]
    fn test_booking_id_parse() {
        let id = BookingId::from_string("bk003").unwrap();
        assert_eq!(id, BookingId::new("BK003"));
        assert!(BookingId::from_string("USR003").is_err());
    }
}
