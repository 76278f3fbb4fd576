use api::Role;
use dioxus::prelude::*;
use ui::views::{ProfileSetupView, RoleSelectionView};

use crate::Route;

/// Role carried in `/profile-setup?role=`. Anything that is not a role a user
/// may pick falls back to PATIENT.
pub fn requested_role(raw: &str) -> Role {
    raw.parse::<Role>()
        .ok()
        .filter(|role| Role::SELECTABLE.contains(role))
        .unwrap_or(Role::Patient)
}

#[component]
pub fn SelectRole() -> Element {
    let nav = use_navigator();

    rsx! {
        RoleSelectionView {
            on_continue: move |role: Role| {
                nav.push(Route::ProfileSetup { role: role.to_string() });
            },
        }
    }
}

#[component]
pub fn ProfileSetup(role: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileSetupView {
            role: requested_role(&role),
            on_back: move |_| {
                nav.push(Route::SelectRole {});
            },
            on_complete: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_role() {
        assert_eq!(requested_role("DOCTOR"), Role::Doctor);
        assert_eq!(requested_role("doctor"), Role::Doctor);
        assert_eq!(requested_role("PATIENT"), Role::Patient);
        assert_eq!(requested_role(""), Role::Patient);
        assert_eq!(requested_role("UNASSIGNED"), Role::Patient);
        assert_eq!(requested_role("ADMIN"), Role::Patient);
    }
}
