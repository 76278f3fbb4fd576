//! This crate contains all shared UI for the workspace.
//!
//! Views are router-agnostic: anything that navigates takes an
//! [`EventHandler`](dioxus::prelude::EventHandler) and the platform package
//! maps it onto its own `Route` table.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod gate;
pub use gate::{decide, resolve, RedirectTarget, Resolution, RouteDecision, RouteRequirement};

pub mod session;
pub use session::{IdentityTracker, Session};

mod auth;
pub use auth::{use_api, use_auth, ApiProvider, AuthContext, AuthProvider, LoginButton, LogoutButton};

mod browser;
pub use browser::navigate_full;

pub mod nav;
pub use nav::{is_active, nav_items, NavIcon, NavItem};

mod layout;
pub use layout::Layout;

pub mod wallet;
pub use wallet::WalletError;

pub mod views;
