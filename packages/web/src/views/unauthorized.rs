use dioxus::prelude::*;
use ui::views::UnauthorizedView;

use crate::Route;

#[component]
pub fn Unauthorized() -> Element {
    let nav = use_navigator();

    rsx! {
        UnauthorizedView {
            on_back: move |_| nav.go_back(),
            on_dashboard: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
