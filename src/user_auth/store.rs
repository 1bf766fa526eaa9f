use async_trait::async_trait;
use uuid::Uuid;

use super::error::UserAuthError;
use super::models::{NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. A taken email fails with `UserExists`.
    async fn create(&self, user: NewUser) -> Result<User, UserAuthError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserAuthError>;

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserAuthError>;
}
