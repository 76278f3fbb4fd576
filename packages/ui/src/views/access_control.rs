use api::dates::format_date;
use api::{AccessRequest, AccessResponse};
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::views::common::{EmptyState, ErrorMessage, Notice, NoticeBanner, PageHeader, Spinner};
use crate::{use_api, Icon};

fn response_notice(approved: bool) -> Notice {
    if approved {
        Notice::Success("Access granted".to_string())
    } else {
        Notice::Success("Access denied".to_string())
    }
}

#[component]
fn PendingRequestCard(request: AccessRequest, busy: bool, on_respond: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-6",
            div {
                class: "flex justify-between items-start",
                div {
                    h3 {
                        class: "text-lg font-medium text-gray-900",
                        "Dr. "
                        {request.doctor_name().unwrap_or("Unknown")}
                    }
                    p { class: "text-sm text-gray-500", "Requested {format_date(request.created_at.as_deref())}" }
                }
                span {
                    class: "px-2 py-1 text-xs font-medium rounded-full {request.status.badge_class()}",
                    "{request.status.as_str()}"
                }
            }
            if let Some(ref reason) = request.reason {
                p { class: "mt-3 text-gray-700", "Purpose: {reason}" }
            }
            div {
                class: "mt-4 flex space-x-3",
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-md text-white bg-green-600 hover:bg-green-700 disabled:opacity-50",
                    disabled: busy,
                    onclick: move |_| on_respond.call(true),
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    "Grant Access"
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-md text-white bg-red-600 hover:bg-red-700 disabled:opacity-50",
                    disabled: busy,
                    onclick: move |_| on_respond.call(false),
                    Icon { icon: FaCircleXmark, width: 14, height: 14 }
                    "Deny Access"
                }
            }
        }
    }
}

/// Pending access requests addressed to the signed-in patient.
#[component]
pub fn AccessControlView() -> Element {
    let api = use_api();
    let mut responding = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut requests = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.pending_requests().await }
        }
    });

    let respond = use_callback(move |(id, approved): (String, bool)| {
        if responding() {
            return;
        }
        responding.set(true);
        let api = api.clone();
        spawn(async move {
            match api.respond_to_access_request(&AccessResponse::new(&id, approved)).await {
                Ok(ack) => {
                    tracing::info!("Access request {} is now {}", ack.id, ack.status.as_str());
                    notice.set(Some(response_notice(approved)));
                    requests.restart();
                }
                Err(e) => {
                    tracing::error!("Error responding to access request {id}: {e}");
                    notice.set(Some(Notice::Failure(format!("Failed to update access request: {e}"))));
                }
            }
            responding.set(false);
        });
    });

    let body = match &*requests.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: format!("Error loading access requests: {e}") } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                title: "No pending requests",
                detail: "Doctors asking to see your records will appear here",
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "space-y-4",
                for request in list.iter() {
                    PendingRequestCard {
                        key: "{request.id}",
                        request: request.clone(),
                        busy: responding(),
                        on_respond: {
                            let id = request.id.clone();
                            move |approved: bool| respond.call((id.clone(), approved))
                        },
                    }
                }
            }
        },
    };

    rsx! {
        div {
            PageHeader { title: "Access Control", subtitle: "Decide which doctors can see your medical records" }
            NoticeBanner { notice }
            {body}
        }
    }
}
