//! In-memory user store

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::error::UserAuthError;
use super::models::{NewUser, User};
use super::store::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
    by_email: DashMap<String, Uuid>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, UserAuthError> {
        // The email slot is claimed first so two registrations cannot race
        let slot = match self.by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => return Err(UserAuthError::UserExists),
            Entry::Vacant(slot) => slot,
        };

        let user = User {
            user_id: Uuid::new_v4(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        self.users.insert(user.user_id, user.clone());
        slot.insert(user.user_id);
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserAuthError> {
        let Some(user_id) = self.by_email.get(email).map(|id| *id.value()) else {
            return Ok(None);
        };
        self.get_by_id(user_id).await
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserAuthError> {
        Ok(self.users.get(&user_id).map(|u| u.value().clone()))
    }
}
