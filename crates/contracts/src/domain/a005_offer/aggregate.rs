use crate::domain::common::aggregate_id::prefixed_id;
use crate::domain::common::money::group_indian;
use crate::enums::Tone;
use crate::shared::list_query::Coded;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

prefixed_id!(
    /// Offer id, `OF-` followed by a short code
    OfferId,
    "OF-",
    "offer"
);

impl OfferId {
    /// `OF-` plus six upper-case hex characters of a random v4 UUID
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self::new(format!("OF-{}", hex[..6].to_uppercase()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    Percentage,
    Flat,
}

impl Coded for DiscountKind {
    fn code(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Flat => "flat",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "Percentage",
            DiscountKind::Flat => "Flat",
        }
    }

    fn all() -> &'static [Self] {
        &[DiscountKind::Percentage, DiscountKind::Flat]
    }
}

/// Coupon offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub code: String,
    /// Percent or rupees; fractional values such as 12.5 are allowed
    pub discount: f64,
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub usage_limit: Option<u32>,
    pub expires_at: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// `10%` or `₹500`
    pub fn discount_label(&self) -> String {
        match self.kind {
            DiscountKind::Percentage => format!("{}%", self.discount),
            DiscountKind::Flat => {
                let paise = (self.discount * 100.0).round() as u64;
                match paise % 100 {
                    0 => format!("₹{}", group_indian(paise / 100)),
                    rest => format!("₹{}.{:02}", group_indian(paise / 100), rest),
                }
            }
        }
    }

    pub fn expires_display(&self) -> String {
        self.expires_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string())
    }

    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn status_tone(&self) -> Tone {
        if self.active {
            Tone::Success
        } else {
            Tone::Neutral
        }
    }

    /// Caption of the enable/disable button
    pub fn toggle_label(&self) -> &'static str {
        if self.active {
            "Disable"
        } else {
            "Enable"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    fn offer(discount: f64, kind: DiscountKind) -> Offer {
        Offer {
            id: OfferId::new("OF-001"),
            code: "TEST".into(),
            discount,
            kind,
            usage_limit: None,
            expires_at: None,
            active: true,
            created_at: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(offer(10.0, DiscountKind::Percentage).discount_label(), "10%");
        assert_eq!(offer(12.5, DiscountKind::Percentage).discount_label(), "12.5%");
        assert_eq!(offer(500.0, DiscountKind::Flat).discount_label(), "₹500");
        assert_eq!(offer(1500.0, DiscountKind::Flat).discount_label(), "₹1,500");
        assert_eq!(offer(1500.5, DiscountKind::Flat).discount_label(), "₹1,500.50");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = OfferId::generate();
        let suffix = id.as_str().strip_prefix("OF-").unwrap_or_default();
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert!(OfferId::from_string(id.as_str()).is_ok());
    }

    #[test]
    fn test_json_uses_type_key() {
        let json = serde_json::to_value(offer(5.0, DiscountKind::Flat)).unwrap();
        assert_eq!(json["type"], "flat");
        assert_eq!(json["usageLimit"], serde_json::Value::Null);
    }

    #[test]
    fn test_missing_expiry_shows_dash() {
        assert_eq!(offer(1.0, DiscountKind::Flat).expires_display(), "—");
    }
}
