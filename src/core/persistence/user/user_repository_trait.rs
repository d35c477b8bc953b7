use anyhow::Result;
use async_trait::async_trait;

use super::user_entity::UserEntity;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user unless `user_code` is already taken.
    ///
    /// Returns `None` when the code collided with an existing user.
    async fn insert_if_code_free(
        &self,
        user_code: &str,
        created_at: &str,
    ) -> Result<Option<UserEntity>>;

    async fn find_by_code(&self, user_code: &str) -> Result<Option<UserEntity>>;
}
