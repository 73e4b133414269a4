use super::aggregate::{DiscountKind, Offer, OfferId};
use crate::domain::common::DomainError;
use crate::shared::list_query::Coded;
use chrono::{DateTime, NaiveDate, Utc};

/// Raw inputs of the "Create Offer" form
#[derive(Debug, Clone, PartialEq)]
pub struct OfferDraft {
    pub code: String,
    pub discount: String,
    /// `percentage` or `flat`
    pub kind: String,
    /// Optional; blank means unlimited
    pub usage_limit: String,
    /// Optional `YYYY-MM-DD`
    pub expires_at: String,
    pub active: bool,
}

impl Default for OfferDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            discount: String::new(),
            kind: DiscountKind::Percentage.code().to_string(),
            usage_limit: String::new(),
            expires_at: String::new(),
            active: true,
        }
    }
}

impl OfferDraft {
    pub fn into_offer(self, now: DateTime<Utc>) -> Result<Offer, DomainError> {
        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(DomainError::Required("code"));
        }

        let kind = DiscountKind::from_code(self.kind.trim()).unwrap_or_default();
        let discount = parse_discount(&self.discount)?;
        if kind == DiscountKind::Percentage && discount > 100.0 {
            return Err(DomainError::OutOfRange {
                field: "discount",
                min: 1,
                max: 100,
            });
        }

        let usage_limit = parse_positive(&self.usage_limit, "usage limit")?;

        let expires_raw = self.expires_at.trim();
        let expires_at = if expires_raw.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(expires_raw, "%Y-%m-%d").map_err(|_| {
                    DomainError::InvalidDate {
                        field: "expiry",
                        value: expires_raw.to_string(),
                    }
                })?,
            )
        };

        Ok(Offer {
            id: OfferId::generate(),
            code,
            discount,
            kind,
            usage_limit,
            expires_at,
            active: self.active,
            created_at: now,
        })
    }
}

/// Required, finite and above zero; decimals such as `12.5` are accepted.
fn parse_discount(raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Required("discount"));
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DomainError::InvalidNumber {
            field: "discount",
            value: trimmed.to_string(),
        })?;
    if value <= 0.0 {
        return Err(DomainError::NotPositive("discount"));
    }
    Ok(value)
}

/// Blank input yields `None`; anything else must be a whole number above zero.
fn parse_positive(raw: &str, field: &'static str) -> Result<Option<u32>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed.parse().map_err(|_| DomainError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })?;
    if value <= 0 {
        return Err(DomainError::NotPositive(field));
    }
    u32::try_from(value).map(Some).map_err(|_| DomainError::OutOfRange {
        field,
        min: 1,
        max: i64::from(u32::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(code: &str, discount: &str, kind: &str) -> OfferDraft {
        OfferDraft {
            code: code.into(),
            discount: discount.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_code_is_normalised() {
        let offer = draft("  summer25 ", "25", "percentage")
            .into_offer(Utc::now())
            .unwrap();
        assert_eq!(offer.code, "SUMMER25");
        assert_eq!(offer.discount, 25.0);
        assert!(offer.active);
        assert!(offer.id.as_str().starts_with("OF-"));
    }

    #[test]
    fn test_rejects_bad_discount() {
        let now = Utc::now();
        assert_eq!(
            draft("X", "", "flat").into_offer(now),
            Err(DomainError::Required("discount"))
        );
        assert_eq!(
            draft("X", "0", "flat").into_offer(now),
            Err(DomainError::NotPositive("discount"))
        );
        assert!(matches!(
            draft("X", "ten", "flat").into_offer(now),
            Err(DomainError::InvalidNumber { .. })
        ));
        assert!(matches!(
            draft("X", "150", "percentage").into_offer(now),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(matches!(
            draft("X", "inf", "flat").into_offer(now),
            Err(DomainError::InvalidNumber { .. })
        ));
        assert!(draft("X", "150", "flat").into_offer(now).is_ok());
        assert_eq!(
            draft("  ", "10", "flat").into_offer(now),
            Err(DomainError::Required("code"))
        );
    }

    #[test]
    fn test_accepts_decimal_discount() {
        let now = Utc::now();
        let offer = draft("HALF", "12.5", "percentage").into_offer(now).unwrap();
        assert_eq!(offer.discount, 12.5);
        assert_eq!(offer.discount_label(), "12.5%");
        assert!(matches!(
            draft("X", "100.5", "percentage").into_offer(now),
            Err(DomainError::OutOfRange { .. })
        ));
        assert_eq!(
            draft("X", "-0.5", "flat").into_offer(now),
            Err(DomainError::NotPositive("discount"))
        );
    }

    #[test]
    fn test_optional_fields() {
        let now = Utc::now();
        let offer = OfferDraft {
            usage_limit: "20".into(),
            expires_at: "2024-12-31".into(),
            ..draft("XMAS", "500", "flat")
        }
        .into_offer(now)
        .unwrap();
        assert_eq!(offer.usage_limit, Some(20));
        assert_eq!(offer.expires_at, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(offer.kind, DiscountKind::Flat);
        assert_eq!(offer.created_at, now);

        let bad_date = OfferDraft {
            expires_at: "31/12/2024".into(),
            ..draft("XMAS", "500", "flat")
        };
        assert!(matches!(
            bad_date.into_offer(now),
            Err(DomainError::InvalidDate { .. })
        ));

        let bad_limit = OfferDraft {
            usage_limit: "-3".into(),
            ..draft("XMAS", "500", "flat")
        };
        assert_eq!(
            bad_limit.into_offer(now),
            Err(DomainError::NotPositive("usage limit"))
        );
    }
}
