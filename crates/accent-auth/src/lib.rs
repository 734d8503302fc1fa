//! Authentication module for the Accent storefront.
//!
//! Login and signup go through an [`IdentityProvider`], an explicit
//! request/response boundary. The provider issues the user's role; the
//! client never decides it. [`DemoIdentityProvider`] is an in-memory
//! provider with simulated latency for local use and tests.

mod error;
mod password;
mod provider;
mod request;
mod session;
mod user;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use provider::{DemoIdentityProvider, IdentityProvider};
pub use request::{LoginRequest, SignupRequest, MIN_PASSWORD_LENGTH};
pub use session::AuthSession;
pub use user::{Landing, Role, User};
