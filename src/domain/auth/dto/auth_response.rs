use serde::Serialize;

use crate::core::persistence::user::user_entity::UserEntity;

/// Body returned by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub user_code: String,
}

impl From<UserEntity> for AuthResponse {
    fn from(user: UserEntity) -> Self {
        Self {
            user_id: user.id,
            user_code: user.user_code,
        }
    }
}
