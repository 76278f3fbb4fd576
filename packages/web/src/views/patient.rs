//! Pages only patients can reach.

use dioxus::prelude::*;
use ui::views::{AccessControlView, MyRecordsView};

#[component]
pub fn MyRecords() -> Element {
    rsx! {
        MyRecordsView {}
    }
}

#[component]
pub fn AccessControl() -> Element {
    rsx! {
        AccessControlView {}
    }
}
