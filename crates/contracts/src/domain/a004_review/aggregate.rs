use crate::domain::a001_booking::BookingId;
use crate::domain::common::aggregate_id::prefixed_id;
use crate::domain::common::DomainError;
use crate::enums::Tone;
use crate::shared::list_query::{contains_ci, Coded, SearchTerm, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

prefixed_id!(
    /// Review number, e.g. `RV001`
    ReviewId,
    "RV",
    "review"
);

// ============================================================================
// Rating
// ============================================================================

/// Star rating, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::OutOfRange {
                field: "rating",
                min: Self::MIN as i64,
                max: Self::MAX as i64,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 >= 4
    }

    pub fn tone(&self) -> Tone {
        match self.0 {
            5 => Tone::Success,
            4 => Tone::Info,
            3 => Tone::Warning,
            _ => Tone::Danger,
        }
    }

    /// Badge text, e.g. `4.0 ★`
    pub fn badge_text(&self) -> String {
        format!("{}.0 ★", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl Coded for Rating {
    fn code(&self) -> &'static str {
        match self.0 {
            5 => "5",
            4 => "4",
            3 => "3",
            2 => "2",
            _ => "1",
        }
    }

    fn label(&self) -> &'static str {
        match self.0 {
            5 => "5 Stars",
            4 => "4 Stars",
            3 => "3 Stars",
            2 => "2 Stars",
            _ => "1 Star",
        }
    }

    /// Highest first, the order of the rating select and the distribution.
    fn all() -> &'static [Self] {
        &[Rating(5), Rating(4), Rating(3), Rating(2), Rating(1)]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer review of a completed move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    pub rating: Rating,
    pub date: NaiveDate,
    pub booking_id: BookingId,
    pub review_text: String,
    /// "Delhi → Mumbai"
    pub route: String,
    pub helpful: u32,
    pub verified: bool,
}

impl Review {
    pub fn date_display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

impl Searchable for Review {
    fn matches_term(&self, term: &SearchTerm<'_>) -> bool {
        contains_ci(&self.customer_name, &term.lower)
            || contains_ci(&self.review_text, &term.lower)
            || contains_ci(self.booking_id.as_str(), &term.lower)
            || contains_ci(&self.route, &term.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(3).map(|r| r.value()), Ok(3));
        assert_eq!(
            Rating::new(9),
            Err(DomainError::OutOfRange {
                field: "rating",
                min: 1,
                max: 5
            })
        );
    }

    #[test]
    fn test_rating_deserialize_validates() {
        let ok: Result<Rating, _> = serde_json::from_str("4");
        assert_eq!(ok.ok().map(|r| r.value()), Some(4));
        let bad: Result<Rating, _> = serde_json::from_str("7");
        assert!(bad.is_err());
    }

    #[test]
    fn test_rating_codes() {
        assert_eq!(Rating::from_code("2").map(|r| r.value()), Some(2));
        assert_eq!(Rating::from_code("all"), None);
        assert_eq!(Rating::all()[0].label(), "5 Stars");
        assert_eq!(Rating::all()[4].label(), "1 Star");
    }

    #[test]
    fn test_rating_tone() {
        let tones: Vec<Tone> = Rating::all().iter().map(|r| r.tone()).collect();
        assert_eq!(
            tones,
            vec![Tone::Success, Tone::Info, Tone::Warning, Tone::Danger, Tone::Danger]
        );
    }
}
