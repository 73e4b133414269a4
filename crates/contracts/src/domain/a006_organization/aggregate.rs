use serde::{Deserialize, Serialize};

/// Registered moving company, stored as JSON under the `orgs` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub organization: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Free text, e.g. "10 trucks, 5 vans"
    #[serde(default)]
    pub vehicles: String,
    /// Comma separated
    #[serde(default)]
    pub services: String,
    #[serde(default = "default_drivers")]
    pub drivers_count: u32,
    #[serde(default)]
    pub requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_name: Option<String>,
    pub password: String,
}

fn default_drivers() -> u32 {
    1
}

impl Organization {
    pub fn services_list(&self) -> Vec<&str> {
        self.services
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Two-letter avatar text for the sidebar card
    pub fn initials(&self) -> String {
        self.organization
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> Organization {
        Organization {
            organization: "swift movers ltd".into(),
            email: "ops@swift.test".into(),
            phone: "123".into(),
            address: String::new(),
            vehicles: String::new(),
            services: " packing, loading ,,storage ".into(),
            drivers_count: 4,
            requirements: String::new(),
            logo_name: None,
            password: "pw".into(),
        }
    }

    #[test]
    fn test_services_list() {
        assert_eq!(org().services_list(), vec!["packing", "loading", "storage"]);
    }

    #[test]
    fn test_initials() {
        assert_eq!(org().initials(), "SM");
    }

    #[test]
    fn test_camel_case_shape() {
        let json = serde_json::to_value(org()).unwrap();
        assert_eq!(json["driversCount"], 4);
        assert!(json.get("logoName").is_none());

        let parsed: Organization = serde_json::from_str(
            r#"{"organization":"A","email":"a@b.c","phone":"1","password":"x","logoName":"logo.png"}"#,
        )
        .unwrap();
        assert_eq!(parsed.drivers_count, 1);
        assert_eq!(parsed.logo_name.as_deref(), Some("logo.png"));
    }
}
