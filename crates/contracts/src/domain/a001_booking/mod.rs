pub mod aggregate;
pub mod filter;
pub mod sample_data;

pub use aggregate::{Booking, BookingId, BookingStats, BookingStatus};
pub use filter::BookingFilter;
pub use sample_data::sample_bookings;
