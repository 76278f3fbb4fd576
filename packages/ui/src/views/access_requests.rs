use api::dates::format_date;
use api::models::access_request::split_by_status;
use api::AccessRequest;
use dioxus::prelude::*;

use crate::use_api;
use crate::views::common::{EmptyState, ErrorMessage, PageHeader, Spinner};

#[component]
pub fn StatusBadge(request: AccessRequest) -> Element {
    rsx! {
        span {
            class: "px-2 py-1 text-xs font-medium rounded-full {request.status.badge_class()}",
            "{request.status.as_str()}"
        }
    }
}

#[component]
fn RequestRow(request: AccessRequest) -> Element {
    rsx! {
        li {
            class: "px-6 py-4 flex justify-between items-start",
            div {
                p { class: "font-medium text-gray-900", {request.patient_name().unwrap_or("Unknown patient")} }
                p { class: "text-sm text-gray-500", {request.patient_email().unwrap_or_default()} }
                if let Some(ref reason) = request.reason {
                    p { class: "mt-1 text-sm text-gray-700", "Purpose: {reason}" }
                }
                p { class: "mt-1 text-xs text-gray-400", "Requested {format_date(request.created_at.as_deref())}" }
            }
            StatusBadge { request: request.clone() }
        }
    }
}

#[component]
fn RequestSection(title: String, requests: Vec<AccessRequest>, empty: String) -> Element {
    rsx! {
        section {
            class: "bg-white shadow rounded-lg mb-6",
            div {
                class: "px-6 py-4 border-b",
                h2 { class: "text-lg font-medium text-gray-900", "{title} ({requests.len()})" }
            }
            if requests.is_empty() {
                p { class: "px-6 py-4 text-gray-500", "{empty}" }
            } else {
                ul {
                    class: "divide-y divide-gray-200",
                    for request in requests.iter() {
                        RequestRow { key: "{request.id}", request: request.clone() }
                    }
                }
            }
        }
    }
}

/// Requests the signed-in doctor has sent, pending first, then history.
#[component]
pub fn AccessRequestsView() -> Element {
    let api = use_api();

    let requests = use_resource(move || {
        let api = api.clone();
        async move { api.access_requests().await }
    });

    let body = match &*requests.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading access requests: {e}") } },
        Some(Ok(list)) => {
            let (pending, history) = split_by_status(list);
            if pending.is_empty() && history.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No access requests",
                        detail: "Request access from the All Patients page",
                    }
                }
            } else {
                let pending: Vec<AccessRequest> = pending.into_iter().cloned().collect();
                let history: Vec<AccessRequest> = history.into_iter().cloned().collect();
                rsx! {
                    RequestSection { title: "Pending", requests: pending, empty: "No pending requests" }
                    RequestSection { title: "Request History", requests: history, empty: "No answered requests yet" }
                }
            }
        }
    };

    rsx! {
        div {
            PageHeader { title: "Access Requests", subtitle: "Track the access requests you have sent to patients" }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{Party, Person};
    use api::AccessStatus;

    #[test]
    fn test_row_shows_patient_and_status() {
        let request = AccessRequest {
            id: "r1".into(),
            patient_id: Some("p1".into()),
            doctor_id: Some("d1".into()),
            patient: Some(Party {
                user: Some(Person { name: Some("Alice".into()), email: Some("alice@example.com".into()) }),
            }),
            doctor: None,
            status: AccessStatus::Approved,
            created_at: Some("2024-03-01T10:00:00Z".into()),
            reason: Some("Follow-up".into()),
            message: Some("Follow-up".into()),
        };
        let html = dioxus_ssr::render_element(rsx! {
            RequestSection { title: "Request History", requests: vec![request], empty: "none" }
        });
        assert!(html.contains("Alice"));
        assert!(html.contains("APPROVED"));
        assert!(html.contains("Purpose: Follow-up"));
        assert!(html.contains("Mar 1, 2024"));
        assert!(html.contains("Request History (1)"));
    }
}
