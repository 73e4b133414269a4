use super::aggregate::{User, UserRole, UserStatus};
use crate::shared::list_query::{filter_by_term, SelectFilter};

/// Search box plus role and status selects on the Users page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub role: SelectFilter<UserRole>,
    pub status: SelectFilter<UserStatus>,
}

impl UserFilter {
    pub fn apply(&self, rows: &[User]) -> Vec<User> {
        let mut filtered = filter_by_term(rows, &self.search);
        filtered.retain(|u| self.role.accepts(&u.role) && self.status.accepts(&u.status));
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_user::sample_users;

    fn ids(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn test_search_by_email() {
        let filter = UserFilter {
            search: "SUNITA@".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_users())), vec!["USR004"]);
    }

    #[test]
    fn test_search_by_phone_fragment() {
        let filter = UserFilter {
            search: "54321".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_users())), vec!["USR005"]);
    }

    #[test]
    fn test_role_filter() {
        let filter = UserFilter {
            role: SelectFilter::Only(UserRole::Driver),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_users())), vec!["USR003", "USR005"]);
    }

    #[test]
    fn test_role_and_status_combine() {
        let filter = UserFilter {
            role: SelectFilter::Only(UserRole::Staff),
            status: SelectFilter::Only(UserStatus::Active),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample_users())), vec!["USR002", "USR006"]);
    }

    #[test]
    fn test_every_row_matches_the_selected_status() {
        let filter = UserFilter {
            status: SelectFilter::Only(UserStatus::Inactive),
            ..Default::default()
        };
        let result = filter.apply(&sample_users());
        assert!(!result.is_empty());
        assert!(result.iter().all(|u| u.status == UserStatus::Inactive));
    }
}
