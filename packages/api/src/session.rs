//! # Session lifecycle
//!
//! ```text
//!              resolve(): no token ───────────────► Anonymous
//! Unresolved ─ resolve(): token, /auth/me ok ─────► Authenticated(user)
//!              resolve(): token, /auth/me fails ──► Anonymous (token cleared)
//!
//! Anonymous ── login()/register() ok ────────────► Authenticated(user)
//! Authenticated ── logout() ─────────────────────► Anonymous
//! ```
//!
//! Everything here is UI-free. The Dioxus side keeps a `Signal<Session>` and
//! calls into these functions; [`access`] is the pure decision the route guard
//! renders from.

use store::TokenStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, Registration, User};

/// Paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

/// Where anonymous users are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    /// Token check still in flight.
    #[default]
    Unresolved,
    Authenticated(User),
    Anonymous,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Unresolved)
    }
}

/// What a protected route should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render a loading indicator.
    Pending,
    /// Render the protected content.
    Granted,
    /// Replace-navigate to the login page.
    Denied,
}

pub fn access(session: &Session) -> Access {
    match session {
        Session::Unresolved => Access::Pending,
        Session::Authenticated(_) => Access::Granted,
        Session::Anonymous => Access::Denied,
    }
}

pub fn is_public_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    PUBLIC_PATHS.contains(&normalized)
}

/// Whether a freshly resolved session should bounce the user to the login page.
pub fn needs_login_redirect(session: &Session, current_path: &str) -> bool {
    matches!(session, Session::Anonymous) && !is_public_path(current_path)
}

/// Turn the persisted token (if any) into a definite session.
pub async fn resolve<S: TokenStore>(client: &ApiClient<S>) -> Session {
    if !client.store().has_token() {
        tracing::debug!("no token found, session is anonymous");
        return Session::Anonymous;
    }

    match client.current_user().await {
        Ok(user) => {
            tracing::info!("session restored for {}", user.email);
            Session::Authenticated(user)
        }
        Err(e) => {
            tracing::warn!("token rejected while restoring session: {e}");
            // A 401 already cleared it inside the client; network and other
            // failures have to clear it here.
            if !e.is_unauthorized() {
                if let Err(e) = client.store().clear_token() {
                    tracing::error!("failed to clear token: {e}");
                }
            }
            Session::Anonymous
        }
    }
}

pub async fn login<S: TokenStore>(
    client: &ApiClient<S>,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    let response = client.login(credentials).await?;
    persist(client, &response.token);
    tracing::info!("logged in as {}", response.user.email);
    Ok(response.user)
}

pub async fn register<S: TokenStore>(
    client: &ApiClient<S>,
    registration: &Registration,
) -> Result<User, ApiError> {
    let response = client.register(registration).await?;
    persist(client, &response.token);
    tracing::info!("registered {}", response.user.email);
    Ok(response.user)
}

/// Drop the token. Navigation to the login page is the caller's job.
pub fn logout<S: TokenStore>(client: &ApiClient<S>) -> Session {
    if let Err(e) = client.store().clear_token() {
        tracing::error!("failed to clear token on logout: {e}");
    }
    Session::Anonymous
}

fn persist<S: TokenStore>(client: &ApiClient<S>, token: &str) {
    if let Err(e) = client.store().set_token(token) {
        tracing::error!("failed to persist token: {e}");
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::testing::{serve, unreachable_base_url, CountingStore};

    fn me_router() -> Router {
        Router::new().route(
            "/auth/me",
            get(|| async { Json(json!({"_id": "u1", "name": "Ravi", "email": "ravi@example.com"})) }),
        )
    }

    #[test]
    fn test_access_decision() {
        assert_eq!(access(&Session::Unresolved), Access::Pending);
        assert_eq!(access(&Session::Anonymous), Access::Denied);
        assert_eq!(
            access(&Session::Authenticated(User {
                id: "1".into(),
                name: "A".into(),
                email: "a@b.c".into(),
                created_at: None,
                preferences: None,
            })),
            Access::Granted
        );
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/login"));
        assert!(is_public_path("/register/"));
        assert!(is_public_path("/login?next=/orders"));
        assert!(!is_public_path("/dashboard"));
        assert!(!is_public_path("/orders"));
    }

    #[test]
    fn test_redirect_only_for_anonymous_on_private_paths() {
        assert!(needs_login_redirect(&Session::Anonymous, "/insights"));
        assert!(!needs_login_redirect(&Session::Anonymous, "/register"));
        assert!(!needs_login_redirect(&Session::Unresolved, "/insights"));
    }

    #[tokio::test]
    async fn test_resolve_without_token_makes_no_request() {
        let (base, hits) = serve(me_router()).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        assert_eq!(resolve(&client).await, Session::Anonymous);
        assert_eq!(hits.count(), 0);
    }

    #[tokio::test]
    async fn test_resolve_with_valid_token() {
        let (base, hits) = serve(me_router()).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::with_token("good"));

        let session = resolve(&client).await;
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(client.store().has_token());
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_resolve_with_rejected_token() {
        let router = Router::new().route(
            "/auth/me",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"}))) }),
        );
        let (base, _hits) = serve(router).await;
        let store = CountingStore::with_token("stale");
        let client = ApiClient::with_base_url(&base, store.clone());

        assert_eq!(resolve(&client).await, Session::Anonymous);
        assert!(!store.has_token());
        assert_eq!(store.clears(), 1);
    }

    #[tokio::test]
    async fn test_resolve_when_backend_is_down() {
        let store = MemoryStore::with_token("whatever");
        let client = ApiClient::with_base_url(&unreachable_base_url().await, store.clone());

        assert_eq!(resolve(&client).await, Session::Anonymous);
        assert!(!store.has_token());
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let router = Router::new().route(
            "/auth/login",
            post(|| async {
                Json(json!({"token": "fresh", "user": {"_id": "u2", "name": "Meera", "email": "m@x.io"}}))
            }),
        );
        let (base, _hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        let user = login(
            &client,
            &Credentials {
                email: "m@x.io".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(user.name, "Meera");
        assert_eq!(client.store().token().as_deref(), Some("fresh"));

        assert_eq!(logout(&client), Session::Anonymous);
        assert!(!client.store().has_token());
    }

    #[tokio::test]
    async fn test_register_error_propagates() {
        let router = Router::new().route(
            "/auth/register",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"message": "User already exists"})),
                )
            }),
        );
        let (base, _hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        let err = register(
            &client,
            &Registration {
                name: "Dup".into(),
                email: "dup@x.io".into(),
                password: "pw123456".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.user_message("Registration failed"), "User already exists");
        assert!(!client.store().has_token());
    }
}
