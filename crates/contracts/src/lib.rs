//! Shared record shapes and list logic for the operations console.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! filtering, sorting and validation rules are tested natively.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
