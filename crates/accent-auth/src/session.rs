//! Auth session state.

use std::time::Duration;

use accent_commerce::config::AuthConfig;
use tracing::info;

use crate::provider::{DemoIdentityProvider, IdentityProvider};
use crate::request::{LoginRequest, SignupRequest};
use crate::user::User;
use crate::AuthError;

/// Default time to wait for the identity provider.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Who is logged in for the current browsing session.
///
/// Requests are validated locally, then sent to the provider with a
/// timeout. A failed login or signup leaves the previous user in place.
#[derive(Debug)]
pub struct AuthSession<P> {
    provider: P,
    user: Option<User>,
    timeout: Duration,
}

impl<P: IdentityProvider> AuthSession<P> {
    /// Create a logged-out session.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            user: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the provider timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The identity provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Log in with e-mail and password.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let request = LoginRequest::new(email, password);
        request.validate()?;

        let user = self.call(self.provider.authenticate(&request)).await?;
        info!(user_id = %user.id, role = user.role.as_str(), "logged in");
        Ok(self.user.insert(user))
    }

    /// Create an account and log in as it.
    pub async fn signup(&mut self, request: SignupRequest) -> Result<&User, AuthError> {
        request.validate()?;

        let user = self.call(self.provider.register(&request)).await?;
        info!(user_id = %user.id, "signed up");
        Ok(self.user.insert(user))
    }

    /// Log out. Returns the user that was logged in, if any.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(ref u) = user {
            info!(user_id = %u.id, "logged out");
        }
        user
    }

    /// The logged-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Check if someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Check if the logged-in user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(User::is_admin).unwrap_or(false)
    }

    /// Gate for admin-only pages such as the dashboard.
    pub fn require_admin(&self) -> Result<&User, AuthError> {
        match self.user.as_ref() {
            None => Err(AuthError::NotAuthenticated),
            Some(user) if user.is_admin() => Ok(user),
            Some(_) => Err(AuthError::InsufficientPermissions),
        }
    }

    async fn call<F>(&self, request: F) -> Result<User, AuthError>
    where
        F: std::future::Future<Output = Result<User, AuthError>>,
    {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| AuthError::Timeout(self.timeout.as_millis() as u64))?
    }
}

impl AuthSession<DemoIdentityProvider> {
    /// Create a session backed by the demo provider, using store settings.
    pub fn from_config(config: &AuthConfig) -> Self {
        AuthSession::new(DemoIdentityProvider::from_config(config))
            .with_timeout(Duration::from_millis(config.timeout_ms))
    }
}
