pub mod integration;
pub mod list;
