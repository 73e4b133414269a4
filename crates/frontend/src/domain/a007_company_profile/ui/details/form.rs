use contracts::domain::a007_company_profile::{CompanyProfile, OperatingHours, PricingRange};
use contracts::domain::common::DomainError;

/// Editable copy of the profile; prices stay as typed until save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub gst: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub weekdays: String,
    pub weekends: String,
    pub local_min: String,
    pub local_max: String,
    pub intercity_min: String,
    pub intercity_max: String,
    pub about_us: String,
    pub service_areas: Vec<String>,
    pub new_area: String,
}

impl From<&CompanyProfile> for ProfileForm {
    fn from(p: &CompanyProfile) -> Self {
        Self {
            name: p.name.clone(),
            gst: p.gst.clone(),
            address: p.address.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            website: p.website.clone(),
            weekdays: p.operating_hours.weekdays.clone(),
            weekends: p.operating_hours.weekends.clone(),
            local_min: p.local_pricing.min.value().to_string(),
            local_max: p.local_pricing.max.value().to_string(),
            intercity_min: p.intercity_pricing.min.value().to_string(),
            intercity_max: p.intercity_pricing.max.value().to_string(),
            about_us: p.about_us.clone(),
            service_areas: p.service_areas.clone(),
            new_area: String::new(),
        }
    }
}

impl ProfileForm {
    /// Moves the pending area into the list and clears the input.
    pub fn add_pending_area(&mut self) -> Result<(), DomainError> {
        let mut profile = CompanyProfile {
            service_areas: std::mem::take(&mut self.service_areas),
            ..CompanyProfile::default()
        };
        let result = profile.add_service_area(&self.new_area);
        self.service_areas = profile.service_areas;
        if result.is_ok() {
            self.new_area.clear();
        }
        result
    }

    pub fn remove_area(&mut self, area: &str) {
        self.service_areas.retain(|a| a != area);
    }

    pub fn to_profile(&self) -> Result<CompanyProfile, DomainError> {
        let profile = CompanyProfile {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            website: self.website.trim().to_string(),
            gst: self.gst.trim().to_string(),
            operating_hours: OperatingHours {
                weekdays: self.weekdays.trim().to_string(),
                weekends: self.weekends.trim().to_string(),
            },
            local_pricing: PricingRange::parse("local pricing", &self.local_min, &self.local_max)?,
            intercity_pricing: PricingRange::parse(
                "intercity pricing",
                &self.intercity_min,
                &self.intercity_max,
            )?,
            about_us: self.about_us.trim().to_string(),
            service_areas: self.service_areas.clone(),
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm::from(&CompanyProfile::default())
    }

    #[test]
    fn unchanged_form_saves_the_same_profile() {
        assert_eq!(form().to_profile(), Ok(CompanyProfile::default()));
    }

    #[test]
    fn pending_area_is_trimmed_and_cleared() {
        let mut f = form();
        f.new_area = "  Pune ".into();
        assert_eq!(f.add_pending_area(), Ok(()));
        assert_eq!(f.service_areas.last().map(String::as_str), Some("Pune"));
        assert!(f.new_area.is_empty());

        f.new_area = "Delhi".into();
        assert_eq!(f.add_pending_area(), Err(DomainError::Duplicate("Delhi".into())));
        assert_eq!(f.new_area, "Delhi");
        assert_eq!(f.service_areas.len(), 6);
    }

    #[test]
    fn inverted_price_band_is_rejected() {
        let mut f = form();
        f.local_min = "9000".into();
        assert!(matches!(f.to_profile(), Err(DomainError::OutOfRange { .. })));

        f.local_min = "two thousand".into();
        assert!(matches!(f.to_profile(), Err(DomainError::InvalidNumber { .. })));
    }
}
