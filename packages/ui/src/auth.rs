//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the session signal and the API client and hands both
//! down through an [`AuthContext`]. Nothing in the UI reaches for a global: every
//! component that needs the session or the backend calls [`use_auth`].

use api::{ApiError, Credentials, Registration, Session, User};
use dioxus::prelude::*;

use crate::client::{make_client, Client};

#[derive(Clone)]
pub struct AuthContext {
    session: Signal<Session>,
    client: Client,
}

impl AuthContext {
    /// Snapshot of the session. Reading it subscribes the caller.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn login(&self, credentials: Credentials) -> Result<User, ApiError> {
        let user = api::session::login(&self.client, &credentials).await?;
        let mut session = self.session;
        session.set(Session::Authenticated(user.clone()));
        Ok(user)
    }

    pub async fn register(&self, registration: Registration) -> Result<User, ApiError> {
        let user = api::session::register(&self.client, &registration).await?;
        let mut session = self.session;
        session.set(Session::Authenticated(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        let mut session = self.session;
        session.set(api::session::logout(&self.client));
    }

    /// React to a failed backend call. A 401 means the token is gone, so the
    /// session drops to anonymous and guarded routes send the user to log in.
    pub fn handle_error(&self, error: &ApiError) {
        if error.is_unauthorized() && self.session.peek().is_authenticated() {
            tracing::warn!("session rejected by backend, signing out");
            let mut session = self.session;
            session.set(Session::Anonymous);
        }
    }
}

/// Get the authentication context provided by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// The shared API client.
pub fn use_api() -> Client {
    use_auth().client
}

/// Provider component that restores the session from the persisted token.
///
/// `current_path` is the path the app was opened on. When the token turns out to
/// be missing or rejected and that path is not public, `on_login_required` fires
/// once so the router can send the user to the login page.
///
/// Passing `session` starts from that state and skips the restore.
#[component]
pub fn AuthProvider(
    current_path: String,
    on_login_required: EventHandler<()>,
    #[props(optional)] session: Option<Session>,
    children: Element,
) -> Element {
    let preset = use_hook(|| session.clone());
    let session = use_signal(|| preset.clone().unwrap_or(Session::Unresolved));
    let context = use_context_provider(|| AuthContext {
        session,
        client: make_client(),
    });

    // Resolve once on mount
    let initial_path = use_hook(|| current_path.clone());
    let _resolver = use_resource(move || {
        let context = context.clone();
        let path = initial_path.clone();
        let skip = preset.is_some();
        async move {
            if skip {
                return;
            }
            let resolved = api::session::resolve(&context.client).await;
            let redirect = api::session::needs_login_redirect(&resolved, &path);
            let mut session = context.session;
            session.set(resolved);
            if redirect {
                tracing::info!("no valid session on {path}, redirecting to login");
                on_login_required.call(());
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button that ends the session. The caller navigates afterwards.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                auth.logout();
                on_logout.call(());
            },
            "{label}"
        }
    }
}
