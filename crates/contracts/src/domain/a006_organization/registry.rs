use super::aggregate::Organization;
use crate::domain::common::DomainError;

/// Organizations registered in this browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationRegistry {
    orgs: Vec<Organization>,
}

impl OrganizationRegistry {
    pub fn new(orgs: Vec<Organization>) -> Self {
        Self { orgs }
    }

    /// Parses the stored JSON array. A missing value is an empty registry.
    pub fn from_json(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            None => Ok(Self::default()),
            Some(raw) => serde_json::from_str(raw).map(Self::new),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.orgs)
    }

    pub fn orgs(&self) -> &[Organization] {
        &self.orgs
    }

    /// Appends the organization; emails are unique (case-insensitive).
    pub fn register(&mut self, org: Organization) -> Result<(), DomainError> {
        if self
            .orgs
            .iter()
            .any(|o| o.email.eq_ignore_ascii_case(&org.email))
        {
            return Err(DomainError::Duplicate(org.email));
        }
        self.orgs.push(org);
        Ok(())
    }

    /// Exact match on both email and password.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&Organization> {
        self.orgs
            .iter()
            .find(|o| o.email == email && o.password == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_organization::RegistrationForm;

    fn org(email: &str) -> Organization {
        RegistrationForm {
            organization: "Acme Movers".into(),
            email: email.into(),
            phone: "1".into(),
            password: "pw".into(),
            ..Default::default()
        }
        .into_organization()
        .unwrap()
    }

    #[test]
    fn test_register_and_authenticate() {
        let mut registry = OrganizationRegistry::default();
        registry.register(org("a@acme.test")).unwrap();
        assert_eq!(
            registry.register(org("A@ACME.test")),
            Err(DomainError::Duplicate("A@ACME.test".into()))
        );

        assert!(registry.authenticate("a@acme.test", "pw").is_some());
        assert!(registry.authenticate("a@acme.test", "PW").is_none());
        assert!(registry.authenticate("nobody@acme.test", "pw").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut registry = OrganizationRegistry::default();
        registry.register(org("a@acme.test")).unwrap();
        let json = registry.to_json().unwrap();
        assert!(json.contains("\"driversCount\":1"));
        let loaded = OrganizationRegistry::from_json(Some(&json)).unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn test_missing_and_malformed_storage() {
        assert_eq!(
            OrganizationRegistry::from_json(None).unwrap().orgs().len(),
            0
        );
        assert!(OrganizationRegistry::from_json(Some("{not json")).is_err());
    }
}
