//! Login page with the Google sign-in button.

use dioxus::prelude::*;

use crate::icons::FaGoogle;
use crate::{Icon, LoginButton};

/// Login page. Whether a signed-in user may stay here is decided by the gate.
#[component]
pub fn LoginView() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4",
            div {
                class: "max-w-md w-full space-y-8",
                div {
                    class: "text-center",
                    h2 { class: "mt-6 text-3xl font-extrabold text-gray-900", "Global Health Chain" }
                    p { class: "mt-2 text-sm text-gray-600", "Secure, blockchain-backed access to medical records" }
                }

                div {
                    class: "bg-white shadow rounded-lg p-8 space-y-6",
                    p { class: "text-center text-gray-700", "Sign in to continue" }
                    LoginButton {
                        class: "w-full flex justify-center items-center gap-3 py-3 px-4 border border-gray-300 rounded-md shadow-sm text-sm font-medium text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50",
                        Icon { icon: FaGoogle, width: 18, height: 18 }
                    }
                    p {
                        class: "text-xs text-center text-gray-500",
                        "By signing in you agree to share your identity with the portal's backend."
                    }
                }
            }
        }
    }
}
