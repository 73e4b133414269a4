use super::aggregate::{Booking, BookingId, BookingStatus};
use crate::domain::common::Money;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

static BOOKINGS: Lazy<Vec<Booking>> = Lazy::new(|| {
    vec![
        booking("BK001", "Rajesh Kumar", "+91 98765 43210", "Connaught Place, New Delhi", "Bandra West, Mumbai", (2024, 1, 25), (9, 0), BookingStatus::Confirmed, 8500, "2 BHK Household"),
        booking("BK002", "Priya Sharma", "+91 87654 32109", "Koramangala, Bangalore", "T. Nagar, Chennai", (2024, 1, 26), (8, 30), BookingStatus::Pending, 6200, "1 BHK Household"),
        booking("BK003", "Amit Patel", "+91 76543 21098", "Shivaji Nagar, Pune", "HITEC City, Hyderabad", (2024, 1, 27), (10, 0), BookingStatus::InProgress, 7800, "3 BHK Household"),
        booking("BK004", "Sunita Gupta", "+91 65432 10987", "Park Street, Kolkata", "Khandagiri, Bhubaneswar", (2024, 1, 28), (7, 0), BookingStatus::Completed, 4500, "1 BHK Household"),
        booking("BK005", "Ravi Singh", "+91 54321 09876", "Sector 62, Noida", "Golf Course Road, Gurgaon", (2024, 1, 29), (11, 0), BookingStatus::Pending, 3200, "Office Relocation"),
        booking("BK006", "Meera Joshi", "+91 43210 98765", "Andheri East, Mumbai", "Whitefield, Bangalore", (2024, 1, 30), (6, 0), BookingStatus::Confirmed, 9800, "2 BHK Household"),
        booking("BK007", "Deepak Verma", "+91 32109 87654", "Civil Lines, Jaipur", "Satellite, Ahmedabad", (2024, 1, 31), (8, 0), BookingStatus::Cancelled, 5600, "1 BHK Household"),
    ]
});

/// Seed bookings shown on the Bookings and Dashboard pages
pub fn sample_bookings() -> Vec<Booking> {
    BOOKINGS.clone()
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    customer_name: &str,
    customer_phone: &str,
    pickup_location: &str,
    drop_location: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    status: BookingStatus,
    amount: i64,
    items: &str,
) -> Booking {
    Booking {
        id: BookingId::new(id),
        customer_name: customer_name.to_string(),
        customer_phone: customer_phone.to_string(),
        pickup_location: pickup_location.to_string(),
        drop_location: drop_location.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        status,
        amount: Money::rupees(amount),
        items: items.to_string(),
    }
}
