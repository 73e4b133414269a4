//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod error;
pub mod money;

pub use aggregate_id::AggregateId;
pub use error::DomainError;
pub use money::Money;
