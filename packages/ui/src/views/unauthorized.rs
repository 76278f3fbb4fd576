use dioxus::prelude::*;

use crate::icons::FaShieldHalved;
use crate::Icon;

#[component]
pub fn UnauthorizedView(on_back: EventHandler<()>, on_dashboard: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 px-4",
            div {
                class: "max-w-md w-full text-center",
                div {
                    class: "flex justify-center text-red-500 mb-4",
                    Icon { icon: FaShieldHalved, width: 48, height: 48 }
                }
                h2 { class: "text-3xl font-extrabold text-gray-900", "Access Denied" }
                p { class: "mt-2 text-gray-600", "You don't have permission to view this page." }
                div {
                    class: "mt-6 flex justify-center space-x-4",
                    button {
                        class: "px-4 py-2 border border-gray-300 rounded-md text-gray-700 bg-white hover:bg-gray-50",
                        onclick: move |_| on_back.call(()),
                        "Go Back"
                    }
                    button {
                        class: "px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700",
                        onclick: move |_| on_dashboard.call(()),
                        "Go to Dashboard"
                    }
                }
            }
        }
    }
}
