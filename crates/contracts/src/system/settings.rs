//! Account, notification, payment and preference settings.
//!
//! Persisted as JSON under the `settings` key, without the password fields.

use crate::domain::common::DomainError;
use serde::{Deserialize, Serialize};

/// `(value, label)` pairs for the settings selects
pub type SelectOptions = &'static [(&'static str, &'static str)];

pub const CURRENCY_OPTIONS: SelectOptions = &[
    ("INR", "Indian Rupee (₹)"),
    ("USD", "US Dollar ($)"),
    ("EUR", "Euro (€)"),
];

pub const PAYMENT_METHOD_OPTIONS: SelectOptions = &[
    ("bank_transfer", "Bank Transfer"),
    ("cash", "Cash"),
    ("upi", "UPI"),
    ("card", "Credit/Debit Card"),
];

pub const LANGUAGE_OPTIONS: SelectOptions = &[
    ("english", "English"),
    ("hindi", "Hindi"),
    ("bengali", "Bengali"),
    ("tamil", "Tamil"),
];

pub const TIMEZONE_OPTIONS: SelectOptions = &[
    ("asia_kolkata", "Asia/Kolkata (IST)"),
    ("asia_mumbai", "Asia/Mumbai"),
    ("asia_delhi", "Asia/Delhi"),
];

pub const DATE_FORMAT_OPTIONS: SelectOptions = &[
    ("dd/mm/yyyy", "DD/MM/YYYY"),
    ("mm/dd/yyyy", "MM/DD/YYYY"),
    ("yyyy-mm-dd", "YYYY-MM-DD"),
];

pub const THEME_OPTIONS: SelectOptions = &[("light", "Light"), ("dark", "Dark"), ("system", "System")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    // Account
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub new_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub confirm_password: String,

    // Notifications
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub booking_updates: bool,
    pub payment_notifications: bool,
    pub marketing_emails: bool,

    // Payments
    pub currency: String,
    pub payment_method: String,
    /// Percent, kept as typed
    pub tax_rate: String,
    pub invoice_prefix: String,

    // Preferences
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            first_name: "Rajesh".into(),
            last_name: "Kumar".into(),
            email: "rajesh@swiftmovers.com".into(),
            phone: "+91 98765 43210".into(),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),

            email_notifications: true,
            sms_notifications: true,
            push_notifications: false,
            booking_updates: true,
            payment_notifications: true,
            marketing_emails: false,

            currency: "INR".into(),
            payment_method: "bank_transfer".into(),
            tax_rate: "18".into(),
            invoice_prefix: "SMV".into(),

            language: "english".into(),
            timezone: "asia_kolkata".into(),
            date_format: "dd/mm/yyyy".into(),
            theme: "light".into(),
        }
    }
}

impl AppSettings {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::Required("email"));
        }
        self.tax_rate_percent()?;
        self.validate_password_change()
    }

    /// Parsed tax rate, `0..=100`
    pub fn tax_rate_percent(&self) -> Result<f64, DomainError> {
        let raw = self.tax_rate.trim();
        let rate: f64 = raw.parse().map_err(|_| DomainError::InvalidNumber {
            field: "tax rate",
            value: raw.to_string(),
        })?;
        if !(0.0..=100.0).contains(&rate) {
            return Err(DomainError::OutOfRange {
                field: "tax rate",
                min: 0,
                max: 100,
            });
        }
        Ok(rate)
    }

    pub fn wants_password_change(&self) -> bool {
        !(self.current_password.is_empty()
            && self.new_password.is_empty()
            && self.confirm_password.is_empty())
    }

    fn validate_password_change(&self) -> Result<(), DomainError> {
        if !self.wants_password_change() {
            return Ok(());
        }
        if self.current_password.is_empty() {
            return Err(DomainError::Required("current password"));
        }
        if self.new_password.is_empty() {
            return Err(DomainError::Required("new password"));
        }
        if self.confirm_password.is_empty() {
            return Err(DomainError::Required("confirm password"));
        }
        if self.new_password != self.confirm_password {
            return Err(DomainError::Mismatch("new password and confirmation"));
        }
        Ok(())
    }

    /// Copy without the password fields
    pub fn for_storage(&self) -> Self {
        Self {
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            ..self.clone()
        }
    }
}

/// Label of an option value, empty when unknown
pub fn option_label(options: SelectOptions, value: &str) -> &'static str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.full_name(), "Rajesh Kumar");
        assert_eq!(s.invoice_prefix, "SMV");
        assert!(s.email_notifications && !s.push_notifications && !s.marketing_emails);
        assert_eq!(s.validate(), Ok(()));
        assert_eq!(option_label(TIMEZONE_OPTIONS, &s.timezone), "Asia/Kolkata (IST)");
    }

    #[test]
    fn test_tax_rate_range() {
        let mut s = AppSettings::default();
        s.tax_rate = "100".into();
        assert_eq!(s.tax_rate_percent(), Ok(100.0));
        s.tax_rate = "101".into();
        assert!(matches!(s.validate(), Err(DomainError::OutOfRange { .. })));
        s.tax_rate = "eighteen".into();
        assert!(matches!(s.validate(), Err(DomainError::InvalidNumber { .. })));
    }

    #[test]
    fn test_password_fields_go_together() {
        let mut s = AppSettings::default();
        s.new_password = "abc".into();
        assert_eq!(s.validate(), Err(DomainError::Required("current password")));
        s.current_password = "old".into();
        assert_eq!(s.validate(), Err(DomainError::Required("confirm password")));
        s.confirm_password = "abd".into();
        assert!(matches!(s.validate(), Err(DomainError::Mismatch(_))));
        s.confirm_password = "abc".into();
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn test_storage_strips_passwords() {
        let mut s = AppSettings::default();
        s.current_password = "old".into();
        s.new_password = "new".into();
        s.confirm_password = "new".into();
        let json = serde_json::to_string(&s.for_storage()).unwrap();
        assert!(!json.contains("Password\""));
        assert!(!json.contains("old"));

        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, s.for_storage());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let loaded: AppSettings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.currency, "INR");
    }
}
