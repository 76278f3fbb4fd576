use api::dates::format_date;
use api::models::access_request::pending_count;
use api::{AccessRequest, ApiClient, ApiError, MedicalRecord, Patient, Role, UserInfo};
use dioxus::prelude::*;

use crate::layout::nav_icon;
use crate::nav::NavIcon;
use crate::views::common::Spinner;
use crate::{use_api, use_auth};

const RECENT_LIMIT: usize = 3;

pub fn dashboard_subtitle(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Doctor) => "Manage your patients and medical records",
        _ => "View your health records and manage access",
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DashboardData {
    Doctor {
        patients: Vec<Patient>,
        requests: Vec<AccessRequest>,
    },
    Patient {
        records: Vec<MedicalRecord>,
        pending: Vec<AccessRequest>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: usize,
    pub icon: NavIcon,
}

impl DashboardData {
    fn stats(&self) -> [Stat; 2] {
        match self {
            DashboardData::Doctor { patients, requests } => [
                Stat { label: "My Patients", value: patients.len(), icon: NavIcon::UserCheck },
                Stat { label: "Access Requests", value: pending_count(requests), icon: NavIcon::Shield },
            ],
            DashboardData::Patient { records, pending } => [
                Stat { label: "My Records", value: records.len(), icon: NavIcon::Records },
                Stat { label: "Pending Requests", value: pending_count(pending), icon: NavIcon::Shield },
            ],
        }
    }
}

/// A failed list counts as empty here; its own page shows the error.
fn or_empty<T>(result: Result<Vec<T>, ApiError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Error loading {what} for dashboard: {e}");
        Vec::new()
    })
}

async fn load(api: ApiClient, role: Option<Role>) -> DashboardData {
    if role == Some(Role::Doctor) {
        let (patients, requests) = futures::join!(api.my_patients(), api.access_requests());
        DashboardData::Doctor {
            patients: or_empty(patients, "patients"),
            requests: or_empty(requests, "access requests"),
        }
    } else {
        let (records, pending) = futures::join!(api.my_records(), api.pending_requests());
        DashboardData::Patient {
            records: or_empty(records, "records"),
            pending: or_empty(pending, "pending requests"),
        }
    }
}

#[component]
pub fn DashboardHeader(user: UserInfo) -> Element {
    rsx! {
        div {
            class: "mb-8",
            h1 { class: "text-3xl font-bold text-gray-900", "Welcome back, {user.display_name()}" }
            p { class: "mt-2 text-gray-600", "{dashboard_subtitle(user.role)}" }
        }
    }
}

#[component]
fn StatCard(stat: Stat) -> Element {
    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg p-5 flex items-center",
            div { class: "text-blue-600", {nav_icon(stat.icon, 24)} }
            div {
                class: "ml-5",
                p { class: "text-sm font-medium text-gray-500", "{stat.label}" }
                p { class: "text-2xl font-semibold text-gray-900", "{stat.value}" }
            }
        }
    }
}

#[component]
fn RecentList(title: String, empty: String, is_empty: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white shadow rounded-lg",
            div {
                class: "px-6 py-4 border-b",
                h3 { class: "text-lg font-medium text-gray-900", "{title}" }
            }
            ul {
                class: "divide-y divide-gray-200",
                if is_empty {
                    li { class: "px-6 py-4 text-gray-500", "{empty}" }
                } else {
                    {children}
                }
            }
        }
    }
}

fn doctor_recent(patients: &[Patient], requests: &[AccessRequest]) -> Element {
    rsx! {
        RecentList {
            title: "Recent Patients",
            empty: "No patients yet",
            is_empty: patients.is_empty(),
            for patient in patients.iter().take(RECENT_LIMIT) {
                li {
                    key: "{patient.id}",
                    class: "px-6 py-4",
                    p { class: "font-medium text-gray-900", {patient.name().unwrap_or("Unknown patient")} }
                    p { class: "text-sm text-gray-500", {patient.email().unwrap_or_default()} }
                }
            }
        }
        RecentList {
            title: "Recent Access Requests",
            empty: "No access requests yet",
            is_empty: requests.is_empty(),
            for request in requests.iter().take(RECENT_LIMIT) {
                li {
                    key: "{request.id}",
                    class: "px-6 py-4 flex justify-between items-center",
                    div {
                        p { class: "font-medium text-gray-900", {request.patient_name().unwrap_or("Unknown patient")} }
                        p { class: "text-sm text-gray-500", {format_date(request.created_at.as_deref())} }
                    }
                    span {
                        class: "px-2 py-1 text-xs font-medium rounded-full {request.status.badge_class()}",
                        "{request.status.as_str()}"
                    }
                }
            }
        }
    }
}

fn patient_recent(records: &[MedicalRecord], pending: &[AccessRequest]) -> Element {
    rsx! {
        RecentList {
            title: "Recent Records",
            empty: "No medical records yet",
            is_empty: records.is_empty(),
            for record in records.iter().take(RECENT_LIMIT) {
                li {
                    key: "{record.id}",
                    class: "px-6 py-4",
                    p { class: "font-medium text-gray-900", "{record.title}" }
                    p {
                        class: "text-sm text-gray-500",
                        "Dr. "
                        {record.doctor_name().unwrap_or("Unknown")}
                        " · "
                        {format_date(record.created_at.as_deref())}
                    }
                }
            }
        }
        RecentList {
            title: "Pending Access Requests",
            empty: "No pending requests",
            is_empty: pending.is_empty(),
            for request in pending.iter().take(RECENT_LIMIT) {
                li {
                    key: "{request.id}",
                    class: "px-6 py-4",
                    p {
                        class: "font-medium text-gray-900",
                        "Dr. "
                        {request.doctor_name().unwrap_or("Unknown")}
                    }
                    p { class: "text-sm text-gray-500", {request.reason.as_deref().unwrap_or_default()} }
                }
            }
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let user = auth.session().user;
    let role = user.as_ref().and_then(|u| u.role);

    let data = use_resource(move || {
        let api = api.clone();
        async move { load(api, role).await }
    });

    let Some(user) = user else {
        return rsx! {};
    };

    let body = match data.read().as_ref() {
        None => rsx! { Spinner {} },
        Some(loaded) => {
            let recent = match loaded {
                DashboardData::Doctor { patients, requests } => doctor_recent(patients, requests),
                DashboardData::Patient { records, pending } => patient_recent(records, pending),
            };
            rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-8",
                    for stat in loaded.stats() {
                        StatCard { key: "{stat.label}", stat }
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    {recent}
                }
            }
        }
    };

    rsx! {
        div {
            DashboardHeader { user }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AccessStatus;

    fn user(name: &str, role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: Some(name.into()),
            avatar: None,
            role: Some(role),
        }
    }

    fn request(id: &str, status: AccessStatus) -> AccessRequest {
        AccessRequest {
            id: id.into(),
            patient_id: None,
            doctor_id: None,
            patient: None,
            doctor: None,
            status,
            created_at: None,
            reason: None,
            message: None,
        }
    }

    #[test]
    fn test_subtitle_by_role() {
        assert_eq!(dashboard_subtitle(Some(Role::Doctor)), "Manage your patients and medical records");
        assert_eq!(dashboard_subtitle(Some(Role::Patient)), "View your health records and manage access");
        assert_eq!(dashboard_subtitle(Some(Role::Unknown)), "View your health records and manage access");
        assert_eq!(dashboard_subtitle(None), "View your health records and manage access");
    }

    #[test]
    fn test_doctor_stats_count_pending_only() {
        let data = DashboardData::Doctor {
            patients: vec![],
            requests: vec![
                request("a", AccessStatus::Pending),
                request("b", AccessStatus::Approved),
                request("c", AccessStatus::Pending),
            ],
        };
        let [patients, pending] = data.stats();
        assert_eq!((patients.label, patients.value), ("My Patients", 0));
        assert_eq!((pending.label, pending.value), ("Access Requests", 2));
    }

    #[test]
    fn test_patient_stats() {
        let data = DashboardData::Patient {
            records: vec![],
            pending: vec![request("a", AccessStatus::Pending)],
        };
        let [records, pending] = data.stats();
        assert_eq!((records.label, records.value), ("My Records", 0));
        assert_eq!((pending.label, pending.value), ("Pending Requests", 1));
    }

    #[test]
    fn test_failed_list_counts_as_empty() {
        let result: Result<Vec<Patient>, ApiError> = Err(ApiError::Status(500));
        assert!(or_empty(result, "patients").is_empty());
    }

    #[test]
    fn test_header_greets_patient() {
        let html = dioxus_ssr::render_element(rsx! {
            DashboardHeader { user: user("Alice", Role::Patient) }
        });
        assert!(html.contains("Welcome back, Alice"));
        assert!(html.contains("View your health records and manage access"));
    }

    #[test]
    fn test_header_greets_doctor() {
        let html = dioxus_ssr::render_element(rsx! {
            DashboardHeader { user: user("Bob", Role::Doctor) }
        });
        assert!(html.contains("Welcome back, Bob"));
        assert!(html.contains("Manage your patients and medical records"));
    }
}
