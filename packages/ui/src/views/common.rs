use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "h-12 w-12".to_string())] size: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center py-12",
            div { class: "animate-spin rounded-full {size} border-b-2 border-blue-600" }
        }
    }
}

/// Red inline banner, e.g. "Error loading patients: {message}".
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 rounded-md p-4 text-red-700",
            "{message}"
        }
    }
}

/// Outcome of a mutation, shown above the content that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;
    let Some(current) = notice() else {
        return rsx! {};
    };
    let (class, text) = match current {
        Notice::Success(text) => ("bg-green-50 border-green-200 text-green-700", text),
        Notice::Failure(text) => ("bg-red-50 border-red-200 text-red-700", text),
    };

    rsx! {
        div {
            class: "flex justify-between items-center border rounded-md p-4 mb-4 {class}",
            span { "{text}" }
            button {
                class: "ml-4 text-sm underline",
                onclick: move |_| notice.set(None),
                "Dismiss"
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] detail: String) -> Element {
    rsx! {
        div {
            class: "text-center py-12 bg-white rounded-lg shadow",
            h3 { class: "text-lg font-medium text-gray-900", "{title}" }
            if !detail.is_empty() {
                p { class: "mt-2 text-gray-500", "{detail}" }
            }
        }
    }
}

#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "mb-8",
            h1 { class: "text-3xl font-bold text-gray-900", "{title}" }
            p { class: "mt-2 text-gray-600", "{subtitle}" }
        }
    }
}

/// Search box bound to a string signal.
#[component]
pub fn SearchInput(value: Signal<String>, placeholder: String) -> Element {
    let mut value = value;
    rsx! {
        input {
            r#type: "text",
            class: "w-full max-w-md px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}

/// Render a root component to HTML, for components whose props need a runtime.
#[cfg(test)]
pub(crate) fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
