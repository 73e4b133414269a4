//! Compile-time settings of the console.

pub const BRAND_NAME: &str = "Moveryy";

/// Organization card fallback when nobody is logged in
pub const DEFAULT_ORG_NAME: &str = "Swift Movers Ltd";
pub const DEFAULT_ORG_EMAIL: &str = "admin@swiftmovers.com";

// localStorage keys
pub const STORAGE_ORGS_KEY: &str = "orgs";
pub const STORAGE_CURRENT_ORG_KEY: &str = "currentOrg";
pub const STORAGE_SETTINGS_KEY: &str = "settings";

/// Toast lifetime
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

pub const PAYMENT_EXPORT_FILENAME: &str = "payment_history.csv";
