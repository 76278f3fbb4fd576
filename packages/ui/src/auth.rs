//! Authentication context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::session::{IdentityTracker, Session};

enum IdentityCommand {
    Refetch,
}

/// Handle to the identity state.
///
/// Only [`AuthProvider`] creates one. Consumers can read the session and ask
/// for a refetch; nothing else may write it.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<Session>,
    commands: Coroutine<IdentityCommand>,
}

impl AuthContext {
    /// Current session. Reading subscribes the calling component.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    /// Re-issue the identity query.
    ///
    /// The session enters `loading` immediately so that any navigation made
    /// right after this call is gated on the fresh identity.
    pub fn refetch_user(&self) {
        let mut session = self.session;
        session.write().begin_refresh();
        self.commands.send(IdentityCommand::Refetch);
    }
}

/// Get the authentication context.
///
/// Panics when called outside an [`AuthProvider`]: that is a wiring bug, not a
/// runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_context::<AuthContext>() {
        Some(auth) => auth,
        None => panic!("use_auth must be used within an AuthProvider"),
    }
}

/// Get the API client provided by [`ApiProvider`].
pub fn use_api() -> ApiClient {
    match try_use_context::<ApiClient>() {
        Some(api) => api,
        None => panic!("use_api must be used within an ApiProvider"),
    }
}

/// Makes an [`ApiClient`] available to every component below it.
#[component]
pub fn ApiProvider(client: ApiClient, children: Element) -> Element {
    use_context_provider(|| client);

    rsx! {
        {children}
    }
}

/// Provider component that owns the session.
/// Must sit inside an [`ApiProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let session = use_signal(Session::default);
    let tracker = use_signal(IdentityTracker::default);

    // Identity fetches run as tasks of this scope so they outlive the view
    // that asked for them but not the provider itself.
    let commands = use_coroutine(move |mut rx: UnboundedReceiver<IdentityCommand>| {
        let api = api.clone();
        async move {
            fetch_identity(api.clone(), session, tracker);
            while let Some(command) = rx.next().await {
                match command {
                    IdentityCommand::Refetch => fetch_identity(api.clone(), session, tracker),
                }
            }
        }
    });

    use_context_provider(|| AuthContext { session, commands });

    rsx! {
        {children}
    }
}

fn fetch_identity(api: ApiClient, mut session: Signal<Session>, mut tracker: Signal<IdentityTracker>) {
    let ticket = tracker.write().begin();
    session.write().begin_refresh();

    spawn(async move {
        let result = api.me().await;

        if !tracker.peek().is_current(ticket) {
            tracing::debug!(ticket, "Discarding superseded identity response");
            return;
        }
        if let Err(e) = &result {
            tracing::error!("Error refetching user: {e}");
        }

        let next = Session::from_identity(result);
        tracing::debug!(
            authenticated = next.is_authenticated,
            user = ?next.user.as_ref().map(|u| &u.id),
            role = ?next.user.as_ref().and_then(|u| u.role),
            "Auth state"
        );
        session.set(next);
    });
}

/// Button that starts the backend's Google sign-in flow.
#[component]
pub fn LoginButton(
    #[props(default = "Continue with Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let api = use_api();
    let mut redirecting = use_signal(|| false);

    let onclick = move |_| {
        redirecting.set(true);
        let url = api.config().google_login_url();
        tracing::debug!("Redirecting to {url}");
        crate::browser::navigate_full(&url);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: redirecting(),
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}

/// Button to log out the current user.
///
/// Whatever the logout call returns, the page is fully reloaded at `/` so the
/// next identity check starts from scratch.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let api = use_api();

    let onclick = move |_| {
        let api = api.clone();
        async move {
            if let Err(e) = api.logout().await {
                tracing::error!("Logout failed: {e}");
            }
            crate::browser::navigate_full("/");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}
