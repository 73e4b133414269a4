pub mod aggregate;
pub mod form;
pub mod registry;

pub use aggregate::Organization;
pub use form::{LoginForm, RegistrationForm};
pub use registry::OrganizationRegistry;
