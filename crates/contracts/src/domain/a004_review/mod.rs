pub mod aggregate;
pub mod filter;
pub mod sample_data;
pub mod stats;

pub use aggregate::{Rating, Review, ReviewId};
pub use filter::{ReviewFilter, ReviewSort};
pub use sample_data::sample_reviews;
pub use stats::{RatingBucket, ReviewStats};
