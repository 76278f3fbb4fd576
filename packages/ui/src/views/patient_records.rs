//! A patient's records as seen by a doctor, with record creation.

use api::dates::format_date;
use api::{MedicalRecord, NewRecord};
use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaPlus};
use crate::views::common::{EmptyState, ErrorMessage, Notice, NoticeBanner, Spinner};
use crate::wallet::{create_record_on_chain, WalletError};
use crate::{use_api, Icon};

const INPUT_CLASS: &str =
    "mt-1 w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Debug, Clone, Default, PartialEq)]
struct RecordForm {
    title: String,
    content: String,
    diagnosis: String,
    treatment: String,
}

impl RecordForm {
    /// `None` while the title is blank.
    fn to_input(&self, patient_id: &str) -> Option<NewRecord> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NewRecord {
            patient_id: patient_id.to_string(),
            title: title.to_string(),
            content: self.content.trim().to_string(),
            diagnosis: self.diagnosis.trim().to_string(),
            treatment: self.treatment.trim().to_string(),
        })
    }
}

fn chain_notice(result: Result<String, WalletError>) -> Notice {
    match result {
        Ok(hash) => Notice::Success(format!("Record saved and anchored on-chain (transaction {hash})")),
        Err(e) => Notice::Failure(format!("Record saved, but the blockchain write failed: {e}")),
    }
}

/// One record with its clinical details.
#[component]
pub fn RecordCard(record: MedicalRecord) -> Element {
    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-6",
            div {
                class: "flex justify-between items-start",
                h3 { class: "text-lg font-medium text-gray-900", "{record.title}" }
                span { class: "text-sm text-gray-500", {format_date(record.created_at.as_deref())} }
            }
            if let Some(doctor) = record.doctor_name() {
                p { class: "mt-1 text-sm text-gray-500", "Dr. {doctor}" }
            }
            if let Some(ref content) = record.content {
                p { class: "mt-3 text-gray-700", "{content}" }
            }
            dl {
                class: "mt-3 grid grid-cols-1 md:grid-cols-2 gap-4 text-sm",
                if let Some(ref diagnosis) = record.diagnosis {
                    div {
                        dt { class: "font-medium text-gray-900", "Diagnosis" }
                        dd { class: "text-gray-700", "{diagnosis}" }
                    }
                }
                if let Some(ref treatment) = record.treatment {
                    div {
                        dt { class: "font-medium text-gray-900", "Treatment" }
                        dd { class: "text-gray-700", "{treatment}" }
                    }
                }
            }
        }
    }
}

/// Records for one patient.
///
/// The add form appears only when the backend says this doctor may write to
/// the patient. Mount it keyed by `patient_id`.
#[component]
pub fn PatientRecordsView(patient_id: String, on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(RecordForm::default);
    let mut saving = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut records = use_resource({
        let api = api.clone();
        let patient_id = patient_id.clone();
        move || {
            let api = api.clone();
            let patient_id = patient_id.clone();
            async move { api.patient_records(&patient_id).await }
        }
    });

    let can_create = use_resource({
        let api = api.clone();
        let patient_id = patient_id.clone();
        move || {
            let api = api.clone();
            let patient_id = patient_id.clone();
            async move {
                api.can_create_record(&patient_id).await.unwrap_or_else(|e| {
                    tracing::warn!("Error checking record access for {patient_id}: {e}");
                    false
                })
            }
        }
    });
    let allowed = (*can_create.read()).unwrap_or(false);

    let handle_submit = {
        let patient_id = patient_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(input) = form().to_input(&patient_id) else {
                form_error.set(Some("Title is required".to_string()));
                return;
            };
            form_error.set(None);
            saving.set(true);
            let api = api.clone();
            spawn(async move {
                match api.create_record(&input).await {
                    Ok(record) => {
                        tracing::info!("Created record {} for patient {}", record.id, input.patient_id);
                        form.set(RecordForm::default());
                        show_form.set(false);
                        saving.set(false);
                        records.restart();

                        let contract = api.config().contract_address.clone();
                        if contract.is_none() {
                            notice.set(Some(Notice::Success("Medical record created successfully".to_string())));
                            return;
                        }
                        notice.set(Some(Notice::Success(
                            "Record saved. Confirm the blockchain transaction in your wallet...".to_string(),
                        )));
                        let result = create_record_on_chain(contract, input.patient_id.clone(), record.id.clone()).await;
                        if let Err(e) = &result {
                            tracing::error!("Blockchain write for record {} failed: {e}", record.id);
                        }
                        notice.set(Some(chain_notice(result)));
                    }
                    Err(e) => {
                        tracing::error!("Error creating record: {e}");
                        form_error.set(Some(format!("Failed to create record: {e}")));
                        saving.set(false);
                    }
                }
            });
        }
    };

    let list = match &*records.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading records: {e}") } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { title: "No medical records found", detail: "Records added for this patient will appear here" }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "space-y-4",
                for record in list.iter() {
                    RecordCard { key: "{record.id}", record: record.clone() }
                }
            }
        },
    };

    let f = form();

    rsx! {
        div {
            button {
                class: "flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900 mb-4",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to My Patients"
            }

            div {
                class: "flex justify-between items-center mb-8",
                div {
                    h1 { class: "text-3xl font-bold text-gray-900", "Patient Records" }
                    p { class: "mt-2 text-gray-600", "Medical history for this patient" }
                }
                if allowed {
                    button {
                        class: "flex items-center gap-2 px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700",
                        onclick: move |_| show_form.set(!show_form()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        if show_form() { "Cancel" } else { "Add Record" }
                    }
                }
            }

            NoticeBanner { notice }

            if allowed && show_form() {
                form {
                    class: "bg-white shadow rounded-lg p-6 mb-6 space-y-4",
                    onsubmit: handle_submit,
                    h2 { class: "text-lg font-medium text-gray-900", "New Medical Record" }
                    if let Some(message) = form_error() {
                        ErrorMessage { message }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Title"
                        input {
                            r#type: "text",
                            class: INPUT_CLASS,
                            required: true,
                            value: "{f.title}",
                            oninput: move |evt| form.write().title = evt.value(),
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Description"
                        textarea {
                            class: INPUT_CLASS,
                            rows: "3",
                            value: "{f.content}",
                            oninput: move |evt| form.write().content = evt.value(),
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Diagnosis"
                        input {
                            r#type: "text",
                            class: INPUT_CLASS,
                            value: "{f.diagnosis}",
                            oninput: move |evt| form.write().diagnosis = evt.value(),
                        }
                    }
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "Treatment"
                        input {
                            r#type: "text",
                            class: INPUT_CLASS,
                            value: "{f.treatment}",
                            oninput: move |evt| form.write().treatment = evt.value(),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Record" }
                    }
                }
            }

            {list}
        }
    }
}
