use super::aggregate::{User, UserId, UserRole, UserStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user("USR001", "Rajesh Kumar", UserRole::Admin, "rajesh@swiftmovers.com", "+91 98765 43210", UserStatus::Active, (2023, 1, 15), (2024, 1, 25, 9, 30)),
        user("USR002", "Priya Sharma", UserRole::Staff, "priya@swiftmovers.com", "+91 87654 32109", UserStatus::Active, (2023, 3, 20), (2024, 1, 25, 8, 45)),
        user("USR003", "Amit Patel", UserRole::Driver, "amit@swiftmovers.com", "+91 76543 21098", UserStatus::Active, (2023, 5, 10), (2024, 1, 24, 18, 20)),
        user("USR004", "Sunita Gupta", UserRole::Staff, "sunita@swiftmovers.com", "+91 65432 10987", UserStatus::Inactive, (2023, 7, 1), (2024, 1, 20, 15, 15)),
        user("USR005", "Ravi Singh", UserRole::Driver, "ravi@swiftmovers.com", "+91 54321 09876", UserStatus::Active, (2023, 8, 15), (2024, 1, 25, 7, 10)),
        user("USR006", "Meera Joshi", UserRole::Staff, "meera@swiftmovers.com", "+91 43210 98765", UserStatus::Active, (2023, 9, 22), (2024, 1, 24, 11, 30)),
    ]
});

/// Seed team members for the Users page
pub fn sample_users() -> Vec<User> {
    USERS.clone()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    role: UserRole,
    email: &str,
    phone: &str,
    status: UserStatus,
    (jy, jm, jd): (i32, u32, u32),
    (ly, lm, ld, lh, lmin): (i32, u32, u32, u32, u32),
) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        role,
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        date_joined: NaiveDate::from_ymd_opt(jy, jm, jd).unwrap_or_default(),
        last_login: NaiveDate::from_ymd_opt(ly, lm, ld)
            .and_then(|d| d.and_hms_opt(lh, lmin, 0))
            .unwrap_or_default(),
    }
}
