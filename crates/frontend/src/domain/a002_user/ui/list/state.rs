use chrono::NaiveDateTime;
use contracts::domain::a002_user::{
    next_user_id, sample_users, NewUserDraft, User, UserFilter, UserId, UserStats, UserStatus,
};
use contracts::domain::common::DomainError;
use contracts::shared::list_query::sort_list;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UserListState {
    pub all: Vec<User>,
    pub items: Vec<User>,
    pub filter: UserFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for UserListState {
    fn default() -> Self {
        let mut state = Self {
            all: sample_users(),
            items: Vec::new(),
            filter: UserFilter::default(),
            sort_field: "id".to_string(),
            sort_ascending: true,
        };
        state.refresh_view();
        state
    }
}

impl UserListState {
    pub fn refresh_view(&mut self) {
        let mut rows = self.filter.apply(&self.all);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        self.items = rows;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.refresh_view();
    }

    pub fn stats(&self) -> UserStats {
        UserStats::from_users(&self.all)
    }

    /// Appends the user built from the dialog draft and returns its id.
    pub fn add_user(&mut self, draft: NewUserDraft, now: NaiveDateTime) -> Result<UserId, DomainError> {
        let user = draft.into_user(next_user_id(&self.all), now)?;
        let id = user.id.clone();
        self.all.push(user);
        self.refresh_view();
        Ok(id)
    }

    /// Flips Active / Inactive; `None` when the id is unknown.
    pub fn toggle_status(&mut self, id: &UserId) -> Option<UserStatus> {
        let user = self.all.iter_mut().find(|u| &u.id == id)?;
        user.status = match user.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        };
        let status = user.status;
        self.refresh_view();
        Some(status)
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn draft() -> NewUserDraft {
        NewUserDraft {
            name: "Anita Desai".into(),
            role: "driver".into(),
            email: "anita@swiftmovers.com".into(),
            phone: "+91 90000 11111".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn added_user_is_visible_and_counted() {
        let mut state = UserListState::default();
        let before = state.stats();
        let id = state.add_user(draft(), now()).expect("draft is complete");

        assert_eq!(id.as_str(), "USR007");
        assert_eq!(state.stats().total, before.total + 1);
        assert_eq!(state.stats().drivers, before.drivers + 1);
        assert!(state.items.iter().any(|u| u.id == id));
    }

    #[test]
    fn added_user_respects_active_filter() {
        let mut state = UserListState::default();
        state.filter.search = "zzz".into();
        state.refresh_view();
        assert!(state.items.is_empty());

        state.add_user(draft(), now()).expect("draft is complete");
        assert!(state.items.is_empty());
    }

    #[test]
    fn invalid_draft_changes_nothing() {
        let mut state = UserListState::default();
        let total = state.all.len();
        let mut bad = draft();
        bad.email = "not-an-email".into();
        assert!(state.add_user(bad, now()).is_err());
        assert_eq!(state.all.len(), total);
    }

    #[test]
    fn toggle_status_flips_and_reports() {
        let mut state = UserListState::default();
        let id = state.all[0].id.clone();
        let original = state.all[0].status;
        let flipped = state.toggle_status(&id).expect("known id");
        assert_ne!(flipped, original);
        assert_eq!(state.toggle_status(&id), Some(original));
        assert_eq!(state.toggle_status(&UserId::new("USR999")), None);
    }
}
