use api::Role;
use dioxus::prelude::*;

use crate::icons::{FaStethoscope, FaUser};
use crate::Icon;

fn features(role: Role) -> &'static [&'static str] {
    match role {
        Role::Doctor => &[
            "Browse the patient directory",
            "Request access to patient records",
            "Create medical records for your patients",
        ],
        _ => &[
            "View your medical records",
            "Control which doctors can access your data",
            "Review incoming access requests",
        ],
    }
}

fn description(role: Role) -> &'static str {
    match role {
        Role::Doctor => "I provide care and manage patient records",
        _ => "I want to manage my own health records",
    }
}

/// Label of the continue button for the current pick.
pub fn continue_label(selected: Option<Role>) -> String {
    match selected {
        Some(role) => format!("Continue as {}", role.title()),
        None => "Continue as User".to_string(),
    }
}

/// Onboarding step one: pick PATIENT or DOCTOR.
#[component]
pub fn RoleSelectionView(on_continue: EventHandler<Role>) -> Element {
    let mut selected = use_signal(|| Option::<Role>::None);

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4",
            div {
                class: "max-w-3xl w-full space-y-8",
                div {
                    class: "text-center",
                    h2 { class: "text-3xl font-extrabold text-gray-900", "Choose your role" }
                    p { class: "mt-2 text-gray-600", "Tell us how you will use Global Health Chain" }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for role in Role::SELECTABLE {
                        div {
                            key: "{role}",
                            class: if selected() == Some(role) {
                                "cursor-pointer rounded-lg border-2 border-blue-600 bg-blue-50 p-6"
                            } else {
                                "cursor-pointer rounded-lg border-2 border-gray-200 bg-white p-6 hover:border-gray-300"
                            },
                            onclick: move |_| selected.set(Some(role)),
                            div {
                                class: "flex items-center space-x-3 mb-4 text-blue-600",
                                if role == Role::Doctor {
                                    Icon { icon: FaStethoscope, width: 28, height: 28 }
                                } else {
                                    Icon { icon: FaUser, width: 28, height: 28 }
                                }
                                h3 { class: "text-xl font-semibold text-gray-900", "{role.title()}" }
                            }
                            p { class: "text-gray-600 mb-4", "{description(role)}" }
                            ul {
                                class: "space-y-1 text-sm text-gray-700 list-disc list-inside",
                                for feature in features(role) {
                                    li { "{feature}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-center",
                    button {
                        class: "px-6 py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: selected().is_none(),
                        onclick: move |_| {
                            if let Some(role) = selected() {
                                on_continue.call(role);
                            }
                        },
                        "{continue_label(selected())}"
                    }
                }
            }
        }
    }
}
