//! Pages only doctors can reach.

use dioxus::prelude::*;
use ui::views::{AccessRequestsView, MyPatientsView, PatientRecordsView, PatientsView};

use crate::Route;

#[component]
pub fn Patients() -> Element {
    rsx! {
        PatientsView {}
    }
}

#[component]
pub fn MyPatients() -> Element {
    let nav = use_navigator();

    rsx! {
        MyPatientsView {
            on_view_records: move |patient_id: String| {
                nav.push(Route::PatientRecords { patient_id });
            },
        }
    }
}

#[component]
pub fn AccessRequests() -> Element {
    rsx! {
        AccessRequestsView {}
    }
}

#[component]
pub fn PatientRecords(patient_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        PatientRecordsView {
            key: "{patient_id}",
            patient_id: patient_id.clone(),
            on_back: move |_| {
                nav.push(Route::MyPatients {});
            },
        }
    }
}
