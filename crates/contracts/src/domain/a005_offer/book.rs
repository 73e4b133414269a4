use super::aggregate::{DiscountKind, Offer, OfferId};
use crate::domain::common::DomainError;
use chrono::{DateTime, Utc};

/// In-memory offer list, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferBook {
    offers: Vec<Offer>,
}

impl OfferBook {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Prepends the offer. Codes are unique.
    pub fn create(&mut self, offer: Offer) -> Result<(), DomainError> {
        if self.offers.iter().any(|o| o.code == offer.code) {
            return Err(DomainError::Duplicate(offer.code));
        }
        self.offers.insert(0, offer);
        Ok(())
    }

    /// Returns false when the id is unknown.
    pub fn remove(&mut self, id: &OfferId) -> bool {
        let before = self.offers.len();
        self.offers.retain(|o| &o.id != id);
        self.offers.len() != before
    }

    pub fn toggle_active(&mut self, id: &OfferId) -> Option<bool> {
        let offer = self.offers.iter_mut().find(|o| &o.id == id)?;
        offer.active = !offer.active;
        Some(offer.active)
    }

    /// Case-insensitive match on the code; a blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<Offer> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.offers.clone();
        }
        self.offers
            .iter()
            .filter(|o| o.code.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }
}

/// Seed offers, stamped with the page load time
pub fn sample_offers(now: DateTime<Utc>) -> Vec<Offer> {
    vec![
        Offer {
            id: OfferId::new("OF-001"),
            code: "WELCOME10".into(),
            discount: 10.0,
            kind: DiscountKind::Percentage,
            usage_limit: Some(100),
            expires_at: None,
            active: true,
            created_at: now,
        },
        Offer {
            id: OfferId::new("OF-002"),
            code: "FLAT500".into(),
            discount: 500.0,
            kind: DiscountKind::Flat,
            usage_limit: Some(50),
            expires_at: None,
            active: false,
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_offer::OfferDraft;

    fn book() -> OfferBook {
        OfferBook::new(sample_offers(Utc::now()))
    }

    #[test]
    fn test_create_prepends_and_rejects_duplicates() {
        let mut book = book();
        let offer = OfferDraft {
            code: "monsoon".into(),
            discount: "15".into(),
            ..Default::default()
        }
        .into_offer(Utc::now())
        .unwrap();
        book.create(offer.clone()).unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.offers()[0].code, "MONSOON");

        let again = Offer {
            id: OfferId::new("OF-XYZ"),
            ..offer
        };
        assert_eq!(
            book.create(again),
            Err(DomainError::Duplicate("MONSOON".into()))
        );
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut book = book();
        let flat = OfferId::new("OF-002");
        assert_eq!(book.toggle_active(&flat), Some(true));
        assert_eq!(book.toggle_active(&flat), Some(false));
        assert_eq!(book.toggle_active(&OfferId::new("OF-404")), None);

        assert!(book.remove(&flat));
        assert!(!book.remove(&flat));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_search_by_code() {
        let book = book();
        let codes = |q: &str| -> Vec<String> {
            book.search(q).into_iter().map(|o| o.code).collect()
        };
        assert_eq!(codes("  welc "), vec!["WELCOME10"]);
        assert_eq!(codes("0"), vec!["WELCOME10", "FLAT500"]);
        assert_eq!(codes("   ").len(), 2);
        assert!(codes("xmas").is_empty());
    }
}
