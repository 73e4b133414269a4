use super::aggregate::{Rating, Review, ReviewId};
use crate::domain::a001_booking::BookingId;
use crate::shared::list_query::Coded;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        review(
            "RV001",
            "Rajesh Kumar",
            5,
            (2024, 1, 20),
            "BK001",
            "Excellent service! The crew was professional, careful with every item and right on time. The whole move went smoothly and I would recommend them to anyone looking for reliable packers and movers.",
            "Delhi → Mumbai",
            12,
        ),
        review(
            "RV002",
            "Priya Sharma",
            4,
            (2024, 1, 18),
            "BK002",
            "Good service overall. Packing was solid and everything arrived safely. Pickup ran a little late, but they kept me informed throughout.",
            "Bangalore → Chennai",
            8,
        ),
        review(
            "RV003",
            "Amit Patel",
            5,
            (2024, 1, 15),
            "BK003",
            "Outstanding experience from quote to delivery. The staff were courteous and took extra care with fragile items. Will definitely book again.",
            "Pune → Hyderabad",
            15,
        ),
        review(
            "RV004",
            "Sunita Gupta",
            3,
            (2024, 1, 12),
            "BK004",
            "Average service. The move got done, but timing slipped and a few pieces picked up minor scratches. Support was quick to sort out my complaints.",
            "Kolkata → Bhubaneswar",
            5,
        ),
        review(
            "RV005",
            "Ravi Singh",
            5,
            (2024, 1, 10),
            "BK005",
            "Perfect office relocation. Electronics and furniture were handled with great care, and the well-organised team finished within the promised time.",
            "Noida → Gurgaon",
            18,
        ),
        review(
            "RV006",
            "Meera Joshi",
            4,
            (2024, 1, 8),
            "BK006",
            "Very satisfied. Professional team, good packing quality and fair pricing. My only suggestion is a better tracking system for more visibility.",
            "Mumbai → Bangalore",
            10,
        ),
        review(
            "RV007",
            "Deepak Verma",
            2,
            (2024, 1, 5),
            "BK007",
            "Had some issues with this move. There was a long delay and a few items were damaged, though the company did compensate once I raised it.",
            "Jaipur → Ahmedabad",
            3,
        ),
        review(
            "RV008",
            "Kavya Reddy",
            5,
            (2024, 1, 3),
            "BK008",
            "Exceptional service from start to finish! Punctual, professional and they went above and beyond to get everything right. Best move I have ever had.",
            "Chennai → Hyderabad",
            22,
        ),
    ]
});

/// Seed reviews, newest first
pub fn sample_reviews() -> Vec<Review> {
    REVIEWS.clone()
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    customer_name: &str,
    stars: u8,
    (y, m, d): (i32, u32, u32),
    booking_id: &str,
    text: &str,
    route: &str,
    helpful: u32,
) -> Review {
    Review {
        id: ReviewId::new(id),
        customer_name: customer_name.to_string(),
        rating: Rating::new(stars).unwrap_or(Rating::all()[0]),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        booking_id: BookingId::new(booking_id),
        review_text: text.to_string(),
        route: route.to_string(),
        helpful,
        verified: true,
    }
}
