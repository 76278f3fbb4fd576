//! Login page view with the OAuth button.

use dioxus::prelude::*;
use ui::views::LoginView;

/// Login page component. Signed-in visitors never get here: the gate
/// redirects them first.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}
