use api::dates::pluralize;
use api::models::record::{created_in_last_30_days, distinct_doctors};
use api::MedicalRecord;
use chrono::Utc;
use dioxus::prelude::*;

use crate::use_api;
use crate::views::common::{EmptyState, ErrorMessage, PageHeader, Spinner};
use crate::views::patient_records::RecordCard;

#[component]
fn RecordsSummary(records: Vec<MedicalRecord>) -> Element {
    let total = pluralize(records.len(), "record");
    let doctors = pluralize(distinct_doctors(&records), "doctor");
    let recent = created_in_last_30_days(&records, Utc::now());

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-6",
            div {
                class: "bg-white shadow rounded-lg p-4",
                p { class: "text-sm text-gray-500", "Total" }
                p { class: "text-xl font-semibold text-gray-900", "{total}" }
            }
            div {
                class: "bg-white shadow rounded-lg p-4",
                p { class: "text-sm text-gray-500", "Care team" }
                p { class: "text-xl font-semibold text-gray-900", "{doctors}" }
            }
            div {
                class: "bg-white shadow rounded-lg p-4",
                p { class: "text-sm text-gray-500", "Last 30 days" }
                p { class: "text-xl font-semibold text-gray-900", "{recent} new" }
            }
        }
    }
}

/// The signed-in patient's own medical records.
#[component]
pub fn MyRecordsView() -> Element {
    let api = use_api();

    let records = use_resource(move || {
        let api = api.clone();
        async move { api.my_records().await }
    });

    let body = match &*records.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading records: {e}") } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                title: "No medical records yet",
                detail: "Records created by your doctors will appear here",
            }
        },
        Some(Ok(list)) => rsx! {
            RecordsSummary { records: list.clone() }
            div {
                class: "space-y-4",
                for record in list.iter() {
                    RecordCard { key: "{record.id}", record: record.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            PageHeader { title: "My Medical Records", subtitle: "Your complete medical history" }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{Party, Person};

    fn record(id: &str, doctor: &str) -> MedicalRecord {
        MedicalRecord {
            id: id.into(),
            title: format!("Visit {id}"),
            content: None,
            diagnosis: None,
            treatment: None,
            created_at: Some("2001-01-01".into()),
            patient_id: None,
            doctor: Some(Party { user: Some(Person { name: Some(doctor.into()), email: None }) }),
        }
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![record("1", "House"), record("2", "House"), record("3", "Grey")];
        let html = dioxus_ssr::render_element(rsx! { RecordsSummary { records } });
        assert!(html.contains("3 records"));
        assert!(html.contains("2 doctors"));
        assert!(html.contains("0 new"));
    }
}
