use crate::domain::common::aggregate_id::prefixed_id;
use crate::enums::Tone;
use crate::shared::list_query::{contains_ci, Coded, SearchTerm, Searchable, Sortable};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

prefixed_id!(
    /// Team member id, e.g. `USR001`
    UserId,
    "USR",
    "user"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Driver,
}

impl Coded for UserRole {
    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Driver => "driver",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Staff => "Staff",
            UserRole::Driver => "Driver",
        }
    }

    fn all() -> &'static [Self] {
        &[UserRole::Admin, UserRole::Staff, UserRole::Driver]
    }
}

impl UserRole {
    pub fn tone(&self) -> Tone {
        match self {
            UserRole::Admin => Tone::Accent,
            UserRole::Staff => Tone::Info,
            UserRole::Driver => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl Coded for UserStatus {
    fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    fn all() -> &'static [Self] {
        &[UserStatus::Active, UserStatus::Inactive]
    }
}

impl UserStatus {
    pub fn tone(&self) -> Tone {
        match self {
            UserStatus::Active => Tone::Success,
            UserStatus::Inactive => Tone::Danger,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UserStatus::Active => "check-circle",
            UserStatus::Inactive => "x-circle",
        }
    }
}

/// Team member with dashboard access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    pub email: String,
    pub phone: String,
    pub status: UserStatus,
    pub date_joined: NaiveDate,
    pub last_login: NaiveDateTime,
}

impl User {
    pub fn last_login_display(&self) -> String {
        self.last_login.format("%Y-%m-%d %I:%M %p").to_string()
    }
}

impl Searchable for User {
    fn matches_term(&self, term: &SearchTerm<'_>) -> bool {
        contains_ci(&self.name, &term.lower)
            || contains_ci(&self.email, &term.lower)
            || contains_ci(self.id.as_str(), &term.lower)
            // phone is matched verbatim, e.g. "+91 98"
            || self.phone.contains(term.raw)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "role" => self.role.label().cmp(other.role.label()),
            "status" => self.status.label().cmp(other.status.label()),
            "date_joined" => self.date_joined.cmp(&other.date_joined),
            "last_login" => self.last_login.cmp(&other.last_login),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Summary cards on the Users page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub staff: usize,
    pub drivers: usize,
}

impl UserStats {
    pub fn from_users(rows: &[User]) -> Self {
        Self {
            total: rows.len(),
            active: rows.iter().filter(|u| u.status == UserStatus::Active).count(),
            staff: rows.iter().filter(|u| u.role == UserRole::Staff).count(),
            drivers: rows.iter().filter(|u| u.role == UserRole::Driver).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_user::sample_users;

    #[test]
    fn test_stats_over_sample() {
        let stats = UserStats::from_users(&sample_users());
        assert_eq!(
            stats,
            UserStats {
                total: 6,
                active: 5,
                staff: 3,
                drivers: 2
            }
        );
    }

    #[test]
    fn test_last_login_display() {
        let users = sample_users();
        assert_eq!(users[0].last_login_display(), "2024-01-25 09:30 AM");
        assert_eq!(users[2].last_login_display(), "2024-01-24 06:20 PM");
    }
}
