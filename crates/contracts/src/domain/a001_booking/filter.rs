use super::aggregate::{Booking, BookingStatus};
use crate::shared::list_query::{filter_by_term, SelectFilter};

/// Search box plus status select on the Bookings page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub search: String,
    pub status: SelectFilter<BookingStatus>,
}

impl BookingFilter {
    pub fn apply(&self, rows: &[Booking]) -> Vec<Booking> {
        let mut filtered = filter_by_term(rows, &self.search);
        filtered.retain(|b| self.status.accepts(&b.status));
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::sample_bookings;

    fn ids(rows: &[Booking]) -> Vec<&str> {
        rows.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let rows = sample_bookings();
        let result = BookingFilter::default().apply(&rows);
        assert_eq!(result, rows);
    }

    #[test]
    fn test_search_by_customer_name_ignores_case() {
        let filter = BookingFilter {
            search: "priya".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_bookings())), vec!["BK002"]);
    }

    #[test]
    fn test_search_by_id_and_location() {
        let rows = sample_bookings();
        let by_id = BookingFilter {
            search: "bk00".into(),
            ..Default::default()
        };
        assert_eq!(by_id.apply(&rows).len(), 7);

        let by_location = BookingFilter {
            search: "MUMBAI".into(),
            ..Default::default()
        };
        // BK001 drops in Mumbai, BK006 picks up in Mumbai
        assert_eq!(ids(&by_location.apply(&rows)), vec!["BK001", "BK006"]);
    }

    #[test]
    fn test_status_filter() {
        let filter = BookingFilter {
            status: SelectFilter::Only(BookingStatus::Pending),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_bookings())), vec!["BK002", "BK005"]);
    }

    #[test]
    fn test_search_and_status_combine() {
        let filter = BookingFilter {
            search: "bangalore".into(),
            status: SelectFilter::Only(BookingStatus::Confirmed),
        };
        assert_eq!(ids(&filter.apply(&sample_bookings())), vec!["BK006"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filter = BookingFilter {
            search: "zzz".into(),
            ..Default::default()
        };
        assert!(filter.apply(&sample_bookings()).is_empty());
    }
}
