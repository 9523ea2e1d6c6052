use chrono::Utc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::session::Session;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Mock authentication: validates credentials locally and mints a session.
///
/// There is no server and no password storage — any email paired with a
/// long-enough password signs in. The rules exist so the login form has
/// something to reject.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Sign in with an email and password.
    /// The display name is the local part of the email.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, CoreError> {
        let email = validate_email(email)?;
        validate_password(password)?;

        let display_name = email.split('@').next().unwrap_or(&email).to_string();
        Ok(build_session(&email, display_name))
    }

    /// Register a new account. Identical to login except the display name
    /// is taken from the form.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Session, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError("Name must not be empty".into()));
        }
        let email = validate_email(email)?;
        validate_password(password)?;

        Ok(build_session(&email, name.to_string()))
    }

    /// Validate a password-reset request. No email is actually sent.
    pub fn request_password_reset(&self, email: &str) -> Result<(), CoreError> {
        validate_email(email).map(|_| ())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_email(email: &str) -> Result<String, CoreError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CoreError::InvalidCredentials(
            "Please enter a valid email".into(),
        ));
    }
    Ok(email.to_string())
}

fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::InvalidCredentials(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn build_session(email: &str, display_name: String) -> Session {
    Session {
        id: Uuid::new_v4(),
        email: email.to_string(),
        display_name,
        avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}"),
        created_at: Utc::now(),
    }
}
