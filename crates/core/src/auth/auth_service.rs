use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use uuid::Uuid;

use crate::auth::{AuthError, Credentials, Session, User};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::Result;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex");
}

/// Data-access trait resolving users by email.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Trait for auth service operations.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Validates credentials and signs the user in, returning the new
    /// session value.
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// Signs out, returning the next session value. Always succeeds.
    fn logout(&self, session: Session) -> Session;
}

/// Validates login form input.
///
/// Returns one error per offending field, in form order, so the caller can
/// render them next to the inputs. An empty vector means the credentials
/// are well-formed.
pub fn validate_credentials(credentials: &Credentials) -> Vec<AuthError> {
    let mut errors = Vec::new();

    if credentials.email.is_empty() {
        errors.push(AuthError::MissingEmail);
    } else if !EMAIL_RE.is_match(&credentials.email) {
        errors.push(AuthError::InvalidEmail);
    }

    if credentials.password.is_empty() {
        errors.push(AuthError::MissingPassword);
    } else if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(AuthError::PasswordTooShort);
    }

    errors
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepositoryTrait>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        if let Some(error) = validate_credentials(credentials).into_iter().next() {
            debug!("Rejecting sign-in for malformed credentials: {}", error);
            return Err(error.into());
        }

        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        info!("User {} signed in", user.id);

        Ok(Session::SignedIn {
            session_id: Uuid::new_v4().to_string(),
            user,
            signed_in_at: Utc::now(),
        })
    }

    fn logout(&self, session: Session) -> Session {
        if let Session::SignedIn { user, .. } = &session {
            info!("User {} signed out", user.id);
        }
        Session::SignedOut
    }
}
