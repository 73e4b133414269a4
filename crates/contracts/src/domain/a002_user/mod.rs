pub mod aggregate;
pub mod draft;
pub mod filter;
pub mod sample_data;

pub use aggregate::{User, UserId, UserRole, UserStats, UserStatus};
pub use draft::{next_user_id, NewUserDraft};
pub use filter::UserFilter;
pub use sample_data::sample_users;
