use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::persistence::user::user_repository_trait::UserRepository;
use crate::core::util::user_code::generate_user_code;
use crate::domain::auth::dto::auth_response::AuthResponse;
use crate::domain::auth::dto::login_request::LoginRequest;
use crate::errors::AppError;

pub struct AuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a user under a fresh random code.
    ///
    /// The insert itself rejects taken codes, so two racing signups can never
    /// end up sharing one; a collision just draws another code.
    pub async fn signup(&self) -> Result<AuthResponse, AppError> {
        let created_at = Utc::now().to_rfc3339();

        loop {
            let code = generate_user_code();
            match self.repo.insert_if_code_free(&code, &created_at).await? {
                Some(user) => {
                    info!(user_id = user.id, "user signed up");
                    return Ok(user.into());
                }
                None => debug!("user code collision, retrying"),
            }
        }
    }

    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AppError> {
        let code = req
            .normalized_code()
            .ok_or_else(|| AppError::InvalidInput("user_code is required".into()))?;

        match self.repo.find_by_code(&code).await? {
            Some(user) => {
                debug!(user_id = user.id, "user logged in");
                Ok(user.into())
            }
            None => {
                warn!("login with unknown user code");
                Err(AppError::Unauthorized("Invalid user code".into()))
            }
        }
    }
}
