use dioxus::prelude::*;

use crate::icons::{FaFileMedical, FaHeartPulse, FaShieldHalved, FaUserCheck, FaUsers};
use crate::nav::{is_active, nav_items, NavIcon};
use crate::{use_auth, Icon, LogoutButton};

/// Icon for a navigation entry or a dashboard stat.
pub(crate) fn nav_icon(icon: NavIcon, size: u32) -> Element {
    match icon {
        NavIcon::Activity => rsx! { Icon { icon: FaHeartPulse, width: size, height: size } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: size, height: size } },
        NavIcon::UserCheck => rsx! { Icon { icon: FaUserCheck, width: size, height: size } },
        NavIcon::Shield => rsx! { Icon { icon: FaShieldHalved, width: size, height: size } },
        NavIcon::Records => rsx! { Icon { icon: FaFileMedical, width: size, height: size } },
    }
}

/// App shell for signed-in pages: header with the user and a logout button,
/// role-specific sidebar, and the page content.
#[component]
pub fn Layout(current_path: String, on_navigate: EventHandler<String>, children: Element) -> Element {
    let auth = use_auth();
    let session = auth.session();
    let user = session.user;
    let items = nav_items(user.as_ref().and_then(|u| u.role));

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            header {
                class: "bg-white shadow-sm border-b",
                div {
                    class: "flex justify-between items-center h-16 px-6",
                    h1 { class: "text-xl font-semibold text-gray-900", "Global Health Chain" }

                    div {
                        class: "flex items-center space-x-4",
                        if let Some(ref u) = user {
                            div {
                                class: "flex items-center space-x-3",
                                if let Some(ref avatar) = u.avatar {
                                    img {
                                        class: "h-8 w-8 rounded-full",
                                        src: "{avatar}",
                                        alt: "{u.display_name()}",
                                    }
                                }
                                div {
                                    class: "text-sm",
                                    p { class: "font-medium text-gray-900", "{u.display_name()}" }
                                    p { class: "text-gray-500 capitalize", "{u.role_label()}" }
                                }
                            }
                        }
                        LogoutButton {
                            class: "flex items-center px-3 py-2 text-sm text-gray-700 hover:bg-gray-100 rounded-md",
                        }
                    }
                }
            }

            div {
                class: "flex",
                nav {
                    class: "w-64 bg-white shadow-sm min-h-[calc(100vh-4rem)]",
                    ul {
                        class: "p-4 space-y-2",
                        for item in items.iter() {
                            li {
                                key: "{item.path}",
                                button {
                                    class: if is_active(item, &current_path) {
                                        "w-full flex items-center space-x-3 px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-700"
                                    } else {
                                        "w-full flex items-center space-x-3 px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100"
                                    },
                                    onclick: {
                                        let path = item.path.to_string();
                                        move |_| on_navigate.call(path.clone())
                                    },
                                    {nav_icon(item.icon, 18)}
                                    span { "{item.label}" }
                                }
                            }
                        }
                    }
                }

                main {
                    class: "flex-1 p-6",
                    {children}
                }
            }
        }
    }
}
