//! Identity provider boundary.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;

use accent_commerce::config::AuthConfig;
use accent_commerce::ids::UserId;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::password::PasswordHasher;
use crate::request::{LoginRequest, SignupRequest};
use crate::user::{Role, User};
use crate::AuthError;

/// The external service that owns accounts and issues role claims.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange credentials for a user.
    async fn authenticate(&self, request: &LoginRequest) -> Result<User, AuthError>;

    /// Create an account and return the new user.
    async fn register(&self, request: &SignupRequest) -> Result<User, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_hash: String,
}

/// In-memory identity provider with simulated latency.
///
/// Registered accounts are checked against their argon2 hash. Unknown
/// e-mails are accepted as new customers when `accept_unknown` is set, and
/// e-mails on the admin list receive the admin role on login. Signup always
/// issues the customer role.
#[derive(Debug)]
pub struct DemoIdentityProvider {
    latency: Duration,
    admin_emails: Vec<String>,
    accept_unknown: bool,
    hasher: PasswordHasher,
    accounts: RwLock<HashMap<String, Account>>,
}

impl DemoIdentityProvider {
    /// Create a provider with no latency and the default admin list.
    pub fn new() -> Self {
        let defaults = AuthConfig::default();
        Self {
            latency: Duration::ZERO,
            admin_emails: normalize_all(&defaults.admin_emails),
            accept_unknown: defaults.accept_unknown,
            hasher: PasswordHasher::new(),
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider from store settings.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
            admin_emails: normalize_all(&config.admin_emails),
            accept_unknown: config.accept_unknown,
            hasher: PasswordHasher::new(),
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set whether unknown e-mails may log in.
    pub fn with_accept_unknown(mut self, accept: bool) -> Self {
        self.accept_unknown = accept;
        self
    }

    /// Number of registered accounts.
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn role_for(&self, email: &str) -> Role {
        if self.admin_emails.iter().any(|a| a == email) {
            Role::Admin
        } else {
            Role::Customer
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for DemoIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn authenticate(&self, request: &LoginRequest) -> Result<User, AuthError> {
        self.simulate_latency().await;
        let email = request.normalized_email();

        let account = self.accounts.read().await.get(&email).cloned();
        if let Some(account) = account {
            if !self.hasher.verify(&request.password, &account.password_hash)? {
                debug!(email = %email, "password rejected");
                return Err(AuthError::InvalidCredentials);
            }
            let mut user = account.user.clone();
            if self.role_for(&email) == Role::Admin {
                user.role = Role::Admin;
            }
            return Ok(user);
        }

        if !self.accept_unknown {
            debug!(email = %email, "unknown account");
            return Err(AuthError::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or_default().to_string();
        let role = self.role_for(&email);
        info!(email = %email, role = role.as_str(), "issued demo identity");
        Ok(User::new(UserId::generate(), email, name, role))
    }

    async fn register(&self, request: &SignupRequest) -> Result<User, AuthError> {
        self.simulate_latency().await;
        let email = request.normalized_email();

        if self.accounts.read().await.contains_key(&email) {
            return Err(AuthError::UserAlreadyExists(email));
        }

        // Hash outside the lock, argon2 is slow.
        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(
            UserId::generate(),
            email.clone(),
            request.name.trim(),
            Role::Customer,
        );

        match self.accounts.write().await.entry(email.clone()) {
            Entry::Occupied(_) => return Err(AuthError::UserAlreadyExists(email)),
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    user: user.clone(),
                    password_hash,
                });
            }
        }
        info!(email = %email, "account registered");
        Ok(user)
    }
}

fn normalize_all(emails: &[String]) -> Vec<String> {
    emails.iter().map(|e| e.trim().to_lowercase()).collect()
}
