use super::aggregate::{User, UserId, UserRole, UserStatus};
use crate::domain::common::DomainError;
use crate::shared::list_query::Coded;
use chrono::NaiveDateTime;

/// Form state of the "Add New User" dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUserDraft {
    pub name: String,
    /// Role code from the select, empty until chosen
    pub role: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewUserDraft {
    /// Enables the submit button once every field has a value
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.role, &self.email, &self.phone, &self.password]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Validates the draft and builds an active user who joined at `now`.
    pub fn into_user(self, id: UserId, now: NaiveDateTime) -> Result<User, DomainError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let phone = required(&self.phone, "phone")?;
        required(&self.password, "password")?;
        let role = UserRole::from_code(self.role.trim()).ok_or(DomainError::Required("role"))?;

        if !email.contains('@') {
            return Err(DomainError::Mismatch("email format"));
        }

        Ok(User {
            id,
            name,
            role,
            email,
            phone,
            status: UserStatus::Active,
            date_joined: now.date(),
            last_login: now,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Next sequential id: highest numeric suffix plus one, three digits wide.
pub fn next_user_id(users: &[User]) -> UserId {
    let max = users
        .iter()
        .filter_map(|u| u.id.as_str().strip_prefix("USR"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    UserId::new(format!("USR{:03}", max + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_user::sample_users;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn complete() -> NewUserDraft {
        NewUserDraft {
            name: " Kavya Reddy ".into(),
            role: "driver".into(),
            email: "kavya@swiftmovers.com".into(),
            phone: "+91 90000 11111".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(complete().is_complete());
        let mut draft = complete();
        draft.role.clear();
        assert!(!draft.is_complete());
        draft = complete();
        draft.password = "   ".into();
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_into_user() {
        let user = complete().into_user(UserId::new("USR007"), now()).unwrap();
        assert_eq!(user.name, "Kavya Reddy");
        assert_eq!(user.role, UserRole::Driver);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.date_joined, now().date());
    }

    #[test]
    fn test_into_user_rejects_unknown_role() {
        let mut draft = complete();
        draft.role = "manager".into();
        assert_eq!(
            draft.into_user(UserId::new("USR007"), now()),
            Err(DomainError::Required("role"))
        );
    }

    #[test]
    fn test_into_user_rejects_bad_email() {
        let mut draft = complete();
        draft.email = "kavya".into();
        assert!(draft.into_user(UserId::new("USR007"), now()).is_err());
    }

    #[test]
    fn test_next_user_id() {
        assert_eq!(next_user_id(&sample_users()), UserId::new("USR007"));
        assert_eq!(next_user_id(&[]), UserId::new("USR001"));
    }
}
