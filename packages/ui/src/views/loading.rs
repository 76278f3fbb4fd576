use dioxus::prelude::*;

/// Full-screen placeholder while the identity query is in flight.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            div {
                class: "text-center",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto" }
                p { class: "mt-4 text-gray-600", "Loading Global Health Chain..." }
            }
        }
    }
}

/// Shown instead of the router when the client could not be configured.
#[component]
pub fn ConfigErrorView(message: String) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            div {
                class: "max-w-md bg-white shadow rounded-lg p-8 text-center",
                h1 { class: "text-xl font-semibold text-gray-900", "Configuration error" }
                p { class: "mt-4 text-red-700", "{message}" }
            }
        }
    }
}
