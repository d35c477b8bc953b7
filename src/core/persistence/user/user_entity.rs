use serde::Serialize;
use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserEntity {
    pub id: i64,
    /// Six-digit numeric login code, unique across users.
    pub user_code: String,
    /// RFC 3339 UTC timestamp of signup.
    pub created_at: String,
}
