//! End-to-end login and signup flows against the demo provider.

use std::time::Duration;

use accent_auth::{AuthError, AuthSession, DemoIdentityProvider, Landing, Role, SignupRequest, User};
use accent_commerce::config::AuthConfig;

#[tokio::test]
async fn signup_then_login_with_same_credentials() {
    let mut auth = AuthSession::new(DemoIdentityProvider::new().with_accept_unknown(false));

    let created = auth
        .signup(SignupRequest::new("Asha", "asha@example.com", "hunter2hunter2", "hunter2hunter2"))
        .await
        .unwrap()
        .clone();
    assert_eq!(created.role, Role::Customer);
    auth.logout();

    let user = auth.login(" ASHA@example.com ", "hunter2hunter2").await.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.landing(), Landing::Explore);
}

#[tokio::test]
async fn admin_listed_in_config_reaches_dashboard() {
    let config = AuthConfig {
        latency_ms: 0,
        admin_emails: vec!["ops@accenthubs.com".to_string()],
        ..AuthConfig::default()
    };
    let mut auth = AuthSession::from_config(&config);

    let user = auth.login("ops@accenthubs.com", "pw").await.unwrap();
    assert_eq!(user.landing(), Landing::Dashboard);
    assert_eq!(auth.require_admin().unwrap().email, "ops@accenthubs.com");

    auth.logout();
    assert!(matches!(auth.require_admin(), Err(AuthError::NotAuthenticated)));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let config = AuthConfig {
        latency_ms: 300,
        timeout_ms: 10,
        ..AuthConfig::default()
    };
    let mut auth = AuthSession::from_config(&config);

    let err = auth.login("jo@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Timeout(10)));
    assert!(auth.user().is_none());
}

#[tokio::test]
async fn user_serializes_with_lowercase_role() {
    let mut auth = AuthSession::new(DemoIdentityProvider::new().with_latency(Duration::ZERO));
    let user = auth.login("admin@accenthubs.com", "pw").await.unwrap();

    let json = serde_json::to_value(user).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["email"], "admin@accenthubs.com");

    let back: User = serde_json::from_value(json).unwrap();
    assert!(back.is_admin());
}
