use crate::domain::common::{DomainError, Money};
use serde::{Deserialize, Serialize};

// ============================================================================
// Value objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub weekdays: String,
    pub weekends: String,
}

/// Quoted price band for one kind of move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRange {
    pub min: Money,
    pub max: Money,
}

impl PricingRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Money::rupees(min),
            max: Money::rupees(max),
        }
    }

    /// Parses the two form inputs and validates the band.
    pub fn parse(field: &'static str, min: &str, max: &str) -> Result<Self, DomainError> {
        let number = |raw: &str| -> Result<i64, DomainError> {
            let trimmed = raw.trim();
            let value: i64 = trimmed.parse().map_err(|_| DomainError::InvalidNumber {
                field,
                value: trimmed.to_string(),
            })?;
            if value < 0 {
                return Err(DomainError::NotPositive(field));
            }
            Ok(value)
        };
        let range = Self::new(number(min)?, number(max)?);
        range.validate(field)?;
        Ok(range)
    }

    pub fn validate(&self, field: &'static str) -> Result<(), DomainError> {
        if self.min > self.max {
            return Err(DomainError::OutOfRange {
                field,
                min: self.min.value(),
                max: self.max.value(),
            });
        }
        Ok(())
    }

    /// `₹2,000 - ₹8,000`
    pub fn display(&self) -> String {
        format!("{} - {}", self.min.format_inr(), self.max.format_inr())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Public profile of the moving company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub gst: String,
    pub operating_hours: OperatingHours,
    pub local_pricing: PricingRange,
    pub intercity_pricing: PricingRange,
    pub about_us: String,
    pub service_areas: Vec<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Swift Movers Ltd".into(),
            address: "123 Industrial Area, Sector 18, Gurgaon, Haryana 122015".into(),
            phone: "+91 98765 43210".into(),
            email: "info@swiftmovers.com".into(),
            website: "www.swiftmovers.com".into(),
            gst: "GST123456789".into(),
            operating_hours: OperatingHours {
                weekdays: "9:00 AM - 6:00 PM".into(),
                weekends: "10:00 AM - 4:00 PM".into(),
            },
            local_pricing: PricingRange::new(2000, 8000),
            intercity_pricing: PricingRange::new(5000, 25000),
            about_us: "Swift Movers Ltd is a packers and movers company with more than six years \
                       of relocation work across India. We handle household shifting, office \
                       relocation, vehicle transport and warehousing, and our trained crews \
                       deliver your belongings safely, on time and with full transparency."
                .into(),
            service_areas: ["Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CompanyProfile {
    pub fn add_service_area(&mut self, raw: &str) -> Result<(), DomainError> {
        let area = raw.trim();
        if area.is_empty() {
            return Err(DomainError::Required("service area"));
        }
        if self.service_areas.iter().any(|a| a == area) {
            return Err(DomainError::Duplicate(area.to_string()));
        }
        self.service_areas.push(area.to_string());
        Ok(())
    }

    pub fn remove_service_area(&mut self, area: &str) {
        self.service_areas.retain(|a| a != area);
    }

    /// Checks the editable fields before the profile is saved.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Required("company name"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::Required("email"));
        }
        self.local_pricing.validate("local pricing")?;
        self.intercity_pricing.validate("intercity pricing")
    }
}

/// Headline numbers in the profile sidebar (mock)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStats {
    pub average_rating: f64,
    pub total_reviews: u32,
    pub completed_bookings: u32,
    pub active_customers: u32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            average_rating: 4.3,
            total_reviews: 127,
            completed_bookings: 856,
            active_customers: 234,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_areas() {
        let mut profile = CompanyProfile::default();
        assert_eq!(profile.service_areas.len(), 5);

        profile.add_service_area("  Pune ").unwrap();
        assert_eq!(profile.service_areas.last().map(String::as_str), Some("Pune"));
        assert_eq!(
            profile.add_service_area("Delhi"),
            Err(DomainError::Duplicate("Delhi".into()))
        );
        assert_eq!(
            profile.add_service_area("   "),
            Err(DomainError::Required("service area"))
        );

        profile.remove_service_area("Mumbai");
        assert!(!profile.service_areas.iter().any(|a| a == "Mumbai"));
        assert_eq!(profile.service_areas.len(), 5);
    }

    #[test]
    fn test_pricing_parse() {
        let range = PricingRange::parse("local pricing", "2000", " 8000 ").unwrap();
        assert_eq!(range, PricingRange::new(2000, 8000));
        assert_eq!(range.display(), "₹2,000 - ₹8,000");

        assert!(matches!(
            PricingRange::parse("local pricing", "9000", "8000"),
            Err(DomainError::OutOfRange { .. })
        ));
        assert!(matches!(
            PricingRange::parse("local pricing", "abc", "8000"),
            Err(DomainError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validate_profile() {
        let mut profile = CompanyProfile::default();
        assert_eq!(profile.validate(), Ok(()));
        profile.intercity_pricing = PricingRange::new(30000, 25000);
        assert!(profile.validate().is_err());
        profile.intercity_pricing = PricingRange::new(5000, 25000);
        profile.name = " ".into();
        assert_eq!(profile.validate(), Err(DomainError::Required("company name")));
    }

    #[test]
    fn test_stats_defaults() {
        let stats = ProfileStats::default();
        assert_eq!(stats.total_reviews, 127);
        assert_eq!(stats.completed_bookings, 856);
    }
}
