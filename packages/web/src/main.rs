use api::{ApiClient, ClientConfig, Role};
use dioxus::prelude::*;

use ui::views::{ConfigErrorView, LoadingScreen};
use ui::{resolve, use_auth, ApiProvider, AuthProvider, Layout, RedirectTarget, Resolution, RouteRequirement};
use views::{
    AccessControl, AccessRequests, Dashboard, Login, MyPatients, MyRecords, PatientRecords, Patients,
    ProfileSetup, SelectRole, Unauthorized,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Gate)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/select-role")]
        SelectRole {},
        #[route("/profile-setup?:role")]
        ProfileSetup { role: String },
        #[route("/unauthorized")]
        Unauthorized {},
        #[layout(Shell)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/patients")]
            Patients {},
            #[route("/my-patients")]
            MyPatients {},
            #[route("/access-requests")]
            AccessRequests {},
            #[route("/patient/:patient_id/records")]
            PatientRecords { patient_id: String },
            #[route("/my-records")]
            MyRecords {},
            #[route("/access-control")]
            AccessControl {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const SIGNED_IN: &[Role] = &[Role::Patient, Role::Doctor];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
const PATIENT_ONLY: &[Role] = &[Role::Patient];

impl Route {
    /// What the session must look like before this route renders.
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            Route::Root {} | Route::Unauthorized {} | Route::NotFound { .. } => RouteRequirement::Public,
            Route::Login {} => RouteRequirement::Anonymous,
            Route::SelectRole {} | Route::ProfileSetup { .. } => RouteRequirement::Onboarding,
            Route::Dashboard {} => RouteRequirement::Roles(SIGNED_IN),
            Route::Patients {}
            | Route::MyPatients {}
            | Route::AccessRequests {}
            | Route::PatientRecords { .. } => RouteRequirement::Roles(DOCTOR_ONLY),
            Route::MyRecords {} | Route::AccessControl {} => RouteRequirement::Roles(PATIENT_ONLY),
        }
    }
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Route::Login {},
            RedirectTarget::RoleSelection => Route::SelectRole {},
            RedirectTarget::Dashboard => Route::Dashboard {},
            RedirectTarget::Unauthorized => Route::Unauthorized {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        ClientConfig::from_env()
            .map_err(api::ApiError::from)
            .and_then(ApiClient::new)
            .map_err(|e| e.to_string())
    });

    let body = match client {
        Ok(client) => rsx! {
            ApiProvider {
                client,
                AuthProvider {
                    Router::<Route> {}
                }
            }
        },
        Err(message) => {
            tracing::error!("Invalid client configuration: {message}");
            rsx! { ConfigErrorView { message } }
        }
    };

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// Checks every route against the session before its page renders.
///
/// Redirects replace the current history entry so the back button never
/// returns to a page the user was bounced from.
#[component]
fn Gate() -> Element {
    let route = use_route::<Route>();
    let auth = use_auth();
    let nav = use_navigator();
    let session = auth.session();

    match resolve(route.requirement(), &session) {
        Resolution::Loading => rsx! { LoadingScreen {} },
        Resolution::Render => rsx! { Outlet::<Route> {} },
        Resolution::Redirect(target) => {
            tracing::debug!("Redirecting {route} to {}", target.path());
            nav.replace(Route::from(target));
            rsx! {}
        }
    }
}

/// Navigation shell around the signed-in pages.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        Layout {
            current_path: route.to_string(),
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(route) => {
                    nav.push(route);
                }
                Err(e) => tracing::error!("Unknown navigation target {path}: {e}"),
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths go back to `/`, which the gate sends wherever the session belongs.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Root {});
    rsx! {}
}
