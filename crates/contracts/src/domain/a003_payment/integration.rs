use crate::domain::common::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEBHOOK_URL: &str = "https://swiftmovers.com/webhook/razorpay";

/// Local state of the Razorpay panel. Nothing leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayIntegration {
    pub api_key: String,
    pub secret_key: String,
    pub webhook_url: String,
    pub connected: bool,
}

impl Default for GatewayIntegration {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            secret_key: String::new(),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            connected: false,
        }
    }
}

impl GatewayIntegration {
    pub fn can_connect(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.secret_key.trim().is_empty()
    }

    pub fn connect(&mut self) -> Result<(), DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::Required("API key"));
        }
        if self.secret_key.trim().is_empty() {
            return Err(DomainError::Required("secret key"));
        }
        self.connected = true;
        Ok(())
    }

    /// Drops the keys; the webhook URL stays as configured.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.api_key.clear();
        self.secret_key.clear();
    }

    /// Key inputs are locked while connected.
    pub fn is_read_only(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_requires_both_keys() {
        let mut gateway = GatewayIntegration {
            api_key: "rzp_test_123".into(),
            secret_key: "   ".into(),
            ..Default::default()
        };
        assert!(!gateway.can_connect());
        assert_eq!(gateway.connect(), Err(DomainError::Required("secret key")));
        assert!(!gateway.connected);

        gateway.secret_key = "s3cret".into();
        assert!(gateway.can_connect());
        assert_eq!(gateway.connect(), Ok(()));
        assert!(gateway.is_read_only());
    }

    #[test]
    fn test_disconnect_keeps_webhook() {
        let mut gateway = GatewayIntegration {
            api_key: "k".into(),
            secret_key: "s".into(),
            webhook_url: "https://example.test/hook".into(),
            connected: true,
        };
        gateway.disconnect();
        assert!(!gateway.connected);
        assert!(gateway.api_key.is_empty());
        assert!(gateway.secret_key.is_empty());
        assert_eq!(gateway.webhook_url, "https://example.test/hook");
    }

    #[test]
    fn test_default_webhook() {
        assert_eq!(GatewayIntegration::default().webhook_url, DEFAULT_WEBHOOK_URL);
    }
}
