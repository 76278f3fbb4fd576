//! Onboarding step two: role-specific profile form.

use api::models::profile::BLOOD_TYPES;
use api::{ProfileForm, Role};
use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::views::common::ErrorMessage;
use crate::{use_api, use_auth, Icon};

const INPUT_CLASS: &str =
    "mt-1 w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-gray-700",
            "{label}"
            input {
                r#type: "{input_type}",
                class: INPUT_CLASS,
                placeholder: "{placeholder}",
                required: required,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Runs once the role is saved. The refetch comes first so that the
/// navigation in `complete` is gated on the new identity.
fn finish_onboarding(refetch: impl FnOnce(), complete: impl FnOnce()) {
    refetch();
    complete();
}

/// Profile form for the role chosen on the previous screen.
///
/// On success the identity is refetched before `on_complete` runs, so the
/// next screen is gated on the new role.
#[component]
pub fn ProfileSetupView(role: Role, on_back: EventHandler<()>, on_complete: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut form = use_signal(ProfileForm::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let current = form();
        if let Some(problem) = current.missing_required(role) {
            error.set(Some(problem.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.set_user_role(role, current.profile_data(role)).await {
                Ok(()) => {
                    tracing::info!("Assigned role {role}");
                    finish_onboarding(|| auth.refetch_user(), || on_complete.call(()));
                }
                Err(e) => {
                    tracing::error!("Error setting user role: {e}");
                    error.set(Some(format!("Could not save your profile: {e}")));
                    submitting.set(false);
                }
            }
        });
    };

    let f = form();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-12 px-4",
            div {
                class: "max-w-2xl mx-auto",
                button {
                    class: "flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900 mb-6",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    "Back to role selection"
                }

                div {
                    class: "bg-white shadow rounded-lg p-8",
                    h2 { class: "text-2xl font-bold text-gray-900", "Complete your {role.title()} profile" }
                    p { class: "mt-2 mb-6 text-gray-600", "This information is stored with your account." }

                    if let Some(message) = error() {
                        div { class: "mb-4", ErrorMessage { message } }
                    }

                    form {
                        class: "space-y-4",
                        onsubmit: handle_submit,

                        TextField {
                            label: "Full Name",
                            value: f.name.clone(),
                            required: role == Role::Patient,
                            on_input: move |v| form.write().name = v,
                        }
                        TextField {
                            label: "Phone Number",
                            input_type: "tel",
                            value: f.phone.clone(),
                            on_input: move |v| form.write().phone = v,
                        }

                        if role == Role::Patient {
                            TextField {
                                label: "Date of Birth",
                                input_type: "date",
                                value: f.date_of_birth.clone(),
                                on_input: move |v| form.write().date_of_birth = v,
                            }
                            label {
                                class: "block text-sm font-medium text-gray-700",
                                "Blood Type"
                                select {
                                    class: INPUT_CLASS,
                                    value: "{f.blood_type}",
                                    onchange: move |evt| form.write().blood_type = evt.value(),
                                    option { value: "", "Select blood type" }
                                    for blood_type in BLOOD_TYPES {
                                        option { key: "{blood_type}", value: "{blood_type}", "{blood_type}" }
                                    }
                                }
                            }
                            TextField {
                                label: "Address",
                                value: f.address.clone(),
                                on_input: move |v| form.write().address = v,
                            }
                            TextField {
                                label: "Emergency Contact",
                                value: f.emergency_contact.clone(),
                                placeholder: "Name and phone number",
                                on_input: move |v| form.write().emergency_contact = v,
                            }
                            label {
                                class: "block text-sm font-medium text-gray-700",
                                "Allergies"
                                textarea {
                                    class: INPUT_CLASS,
                                    rows: "3",
                                    placeholder: "List any known allergies",
                                    value: "{f.allergies}",
                                    oninput: move |evt| form.write().allergies = evt.value(),
                                }
                            }
                        }

                        if role == Role::Doctor {
                            TextField {
                                label: "Specialization",
                                value: f.specialization.clone(),
                                required: true,
                                on_input: move |v| form.write().specialization = v,
                            }
                            TextField {
                                label: "License Number",
                                value: f.license_number.clone(),
                                required: true,
                                on_input: move |v| form.write().license_number = v,
                            }
                            TextField {
                                label: "Hospital",
                                value: f.hospital.clone(),
                                on_input: move |v| form.write().hospital = v,
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50",
                            disabled: submitting(),
                            if submitting() { "Saving..." } else { "Complete Setup" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::views::common::render_app;

    #[test]
    fn test_refetch_runs_before_leaving() {
        let calls = RefCell::new(Vec::new());
        finish_onboarding(|| calls.borrow_mut().push("refetch"), || calls.borrow_mut().push("navigate"));
        assert_eq!(calls.into_inner(), vec!["refetch", "navigate"]);
    }

    #[test]
    fn test_doctor_form_marks_professional_fields_required() {
        let html = render_app(|| {
            let client = api::ApiClient::new(api::ClientConfig {
                graphql_endpoint: "http://127.0.0.1:9/graphql".to_string(),
                logout_endpoint: "http://127.0.0.1:9/logout".to_string(),
                api_url: "http://127.0.0.1:9".to_string(),
                contract_address: None,
            })
            .unwrap();
            rsx! {
                crate::ApiProvider {
                    client,
                    crate::AuthProvider {
                        ProfileSetupView { role: Role::Doctor, on_back: move |_| {}, on_complete: move |_| {} }
                    }
                }
            }
        });
        assert!(html.contains("Complete your Doctor profile"));
        assert!(html.contains("Specialization"));
        assert!(html.contains("License Number"));
        assert!(!html.contains("Blood Type"));
        assert_eq!(html.matches("required").count(), 2);
    }
}
