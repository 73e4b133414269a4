pub mod aggregate;
pub mod book;
pub mod draft;

pub use aggregate::{DiscountKind, Offer, OfferId};
pub use book::{sample_offers, OfferBook};
pub use draft::OfferDraft;
