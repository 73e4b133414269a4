pub mod aggregate;

pub use aggregate::{CompanyProfile, OperatingHours, PricingRange, ProfileStats};
