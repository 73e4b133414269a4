use super::aggregate::Organization;
use crate::domain::common::DomainError;

/// Raw inputs of the organization registration page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub vehicles: String,
    pub services: String,
    pub drivers_count: String,
    pub requirements: String,
    pub logo_name: Option<String>,
    pub password: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            organization: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            vehicles: String::new(),
            services: String::new(),
            drivers_count: "1".to_string(),
            requirements: String::new(),
            logo_name: None,
            password: String::new(),
        }
    }
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.parse().map(|_| ())
    }

    pub fn into_organization(self) -> Result<Organization, DomainError> {
        let drivers_count = self.parse()?;
        Ok(Organization {
            organization: self.organization.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            vehicles: self.vehicles.trim().to_string(),
            services: self.services.trim().to_string(),
            drivers_count,
            requirements: self.requirements.trim().to_string(),
            logo_name: self.logo_name.filter(|n| !n.is_empty()),
            password: self.password,
        })
    }

    /// Checks required fields and returns the parsed driver count.
    fn parse(&self) -> Result<u32, DomainError> {
        for (value, field) in [
            (&self.organization, "organization"),
            (&self.email, "email"),
            (&self.phone, "phone"),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Required(field));
            }
        }
        if self.password.is_empty() {
            return Err(DomainError::Required("password"));
        }

        let raw = self.drivers_count.trim();
        let drivers: i64 = raw.parse().map_err(|_| DomainError::InvalidNumber {
            field: "drivers count",
            value: raw.to_string(),
        })?;
        if drivers < 1 {
            return Err(DomainError::NotPositive("drivers count"));
        }
        u32::try_from(drivers).map_err(|_| DomainError::OutOfRange {
            field: "drivers count",
            min: 1,
            max: i64::from(u32::MAX),
        })
    }
}

/// Email and password from the login page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::Required("email"));
        }
        if self.password.is_empty() {
            return Err(DomainError::Required("password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            organization: " Swift Movers ".into(),
            email: "ops@swift.test".into(),
            phone: "+91 98765 43210".into(),
            password: "secret".into(),
            drivers_count: "3".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            RegistrationForm::default().validate(),
            Err(DomainError::Required("organization"))
        );
        let no_phone = RegistrationForm {
            phone: "  ".into(),
            ..filled()
        };
        assert_eq!(no_phone.validate(), Err(DomainError::Required("phone")));
        let no_password = RegistrationForm {
            password: String::new(),
            ..filled()
        };
        assert_eq!(no_password.validate(), Err(DomainError::Required("password")));
    }

    #[test]
    fn test_drivers_count() {
        let zero = RegistrationForm {
            drivers_count: "0".into(),
            ..filled()
        };
        assert_eq!(zero.validate(), Err(DomainError::NotPositive("drivers count")));
        let text = RegistrationForm {
            drivers_count: "many".into(),
            ..filled()
        };
        assert!(matches!(text.validate(), Err(DomainError::InvalidNumber { .. })));
    }

    #[test]
    fn test_into_organization_trims() {
        let org = filled().into_organization().unwrap();
        assert_eq!(org.organization, "Swift Movers");
        assert_eq!(org.drivers_count, 3);
        assert_eq!(org.logo_name, None);
    }

    #[test]
    fn test_login_form() {
        assert_eq!(LoginForm::default().validate(), Err(DomainError::Required("email")));
        let ok = LoginForm {
            email: "a@b.c".into(),
            password: "x".into(),
        };
        assert_eq!(ok.validate(), Ok(()));
    }
}
