use api::models::patient::search_patients;
use dioxus::prelude::*;

use crate::use_api;
use crate::views::common::{EmptyState, ErrorMessage, PageHeader, SearchInput, Spinner};
use crate::views::patients::PatientCard;

/// Empty-list text: a search with no hits reads differently from no patients at all.
fn empty_text(term: &str) -> (&'static str, &'static str) {
    if term.trim().is_empty() {
        (
            "No patients yet",
            "Patients appear here once they approve your access requests",
        )
    } else {
        ("No patients match your search", "Try a different search term")
    }
}

/// Patients who granted the signed-in doctor access.
#[component]
pub fn MyPatientsView(on_view_records: EventHandler<String>) -> Element {
    let api = use_api();
    let search = use_signal(String::new);

    let patients = use_resource(move || {
        let api = api.clone();
        async move { api.my_patients().await }
    });

    let body = match &*patients.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading patients: {e}") } },
        Some(Ok(list)) => {
            let term = search();
            let matches = search_patients(list, &term);
            if matches.is_empty() {
                let (title, detail) = empty_text(&term);
                rsx! { EmptyState { title: title.to_string(), detail: detail.to_string() } }
            } else {
                rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for patient in matches {
                            PatientCard {
                                key: "{patient.id}",
                                patient: patient.clone(),
                                button {
                                    class: "w-full px-4 py-2 rounded-md text-white bg-green-600 hover:bg-green-700",
                                    onclick: {
                                        let id = patient.id.clone();
                                        move |_| on_view_records.call(id.clone())
                                    },
                                    "View Records"
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
            PageHeader { title: "My Patients", subtitle: "Patients who have granted you access to their records" }
            div {
                class: "mb-6",
                SearchInput { value: search, placeholder: "Search by name or email" }
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_depends_on_search() {
        assert_eq!(empty_text("").0, "No patients yet");
        assert_eq!(empty_text("   ").0, "No patients yet");
        assert_eq!(empty_text("bob").0, "No patients match your search");
    }
}
