//! Patient directory for doctors, with access requests.

use api::dates::format_long_date;
use api::models::patient::search_patients;
use api::{NewAccessRequest, Patient};
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::views::common::{EmptyState, ErrorMessage, Notice, NoticeBanner, PageHeader, SearchInput, Spinner};
use crate::{use_api, Icon};

/// Card with a patient's avatar initial, name, email, and contact details.
#[component]
pub fn PatientCard(patient: Patient, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-6",
            div {
                class: "flex items-center space-x-4",
                div {
                    class: "h-12 w-12 rounded-full bg-blue-100 text-blue-700 flex items-center justify-center text-lg font-semibold",
                    "{patient.initial()}"
                }
                div {
                    h3 { class: "text-lg font-medium text-gray-900", {patient.name().unwrap_or("Unknown patient")} }
                    p { class: "text-sm text-gray-500", {patient.email().unwrap_or_default()} }
                }
            }
            dl {
                class: "mt-4 space-y-1 text-sm text-gray-600",
                div {
                    dt { class: "inline font-medium", "Date of Birth: " }
                    dd { class: "inline", {format_long_date(patient.date_of_birth.as_deref())} }
                }
                if let Some(ref phone) = patient.phone_number {
                    div {
                        dt { class: "inline font-medium", "Phone: " }
                        dd { class: "inline", "{phone}" }
                    }
                }
            }
            div { class: "mt-4", {children} }
        }
    }
}

#[component]
fn RequestAccessDialog(
    patient: Patient,
    on_close: EventHandler<()>,
    on_sent: EventHandler<String>,
) -> Element {
    let api = use_api();
    let mut purpose = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let patient_id = patient.id.clone();
    let patient_name = patient.name().unwrap_or("this patient").to_string();

    let submit = move |_| {
        let Some(input) = NewAccessRequest::from_purpose(&patient_id, &purpose()) else {
            error.set(Some("Please describe why you need access".to_string()));
            return;
        };
        error.set(None);
        sending.set(true);
        let api = api.clone();
        spawn(async move {
            match api.create_access_request(&input).await {
                Ok(ack) => {
                    tracing::info!("Created access request {}", ack.id);
                    on_sent.call(ack.id);
                }
                Err(e) => {
                    tracing::error!("Error creating access request: {e}");
                    error.set(Some(format!("Failed to send access request: {e}")));
                    sending.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-xl max-w-md w-full p-6",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "text-lg font-medium text-gray-900", "Request access to {patient_name}'s records" }
                label {
                    class: "block mt-4 text-sm font-medium text-gray-700",
                    "Purpose"
                    textarea {
                        class: "mt-1 w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                        rows: "4",
                        placeholder: "Explain why you need access to these records",
                        value: "{purpose}",
                        oninput: move |evt| purpose.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "mt-2 text-sm text-red-600", "{message}" }
                }
                div {
                    class: "mt-6 flex justify-end space-x-3",
                    button {
                        class: "px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50",
                        disabled: sending() || purpose().trim().is_empty(),
                        onclick: submit,
                        if sending() { "Sending..." } else { "Send Request" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PatientsView() -> Element {
    let api = use_api();
    let search = use_signal(String::new);
    let mut requesting = use_signal(|| Option::<Patient>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let patients = use_resource(move || {
        let api = api.clone();
        async move { api.patients().await }
    });

    let body = match &*patients.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading patients: {e}") } },
        Some(Ok(list)) => {
            let term = search();
            let matches = search_patients(list, &term);
            if matches.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No patients found",
                        detail: if term.trim().is_empty() { String::new() } else { "Try a different search term".to_string() },
                    }
                }
            } else {
                rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for patient in matches {
                            PatientCard {
                                key: "{patient.id}",
                                patient: patient.clone(),
                                button {
                                    class: "w-full px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700",
                                    onclick: {
                                        let patient = patient.clone();
                                        move |_| requesting.set(Some(patient.clone()))
                                    },
                                    "Request Access"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            PageHeader { title: "All Patients", subtitle: "Browse patients and request access to their records" }
            NoticeBanner { notice }
            div {
                class: "mb-6 flex items-center gap-2 text-gray-400",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                SearchInput { value: search, placeholder: "Search by name or email" }
            }
            {body}
            if let Some(patient) = requesting() {
                RequestAccessDialog {
                    patient,
                    on_close: move |_| requesting.set(None),
                    on_sent: move |_| {
                        requesting.set(None);
                        notice.set(Some(Notice::Success("Access request sent successfully".to_string())));
                    },
                }
            }
        }
    }
}
