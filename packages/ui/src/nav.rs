//! Role-specific navigation table.

use api::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Activity,
    Users,
    UserCheck,
    Shield,
    Records,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

const DOCTOR_NAV: &[NavItem] = &[
    NavItem { path: "/dashboard", label: "Dashboard", icon: NavIcon::Activity },
    NavItem { path: "/patients", label: "All Patients", icon: NavIcon::Users },
    NavItem { path: "/my-patients", label: "My Patients", icon: NavIcon::UserCheck },
    NavItem { path: "/access-requests", label: "Access Requests", icon: NavIcon::Shield },
];

const PATIENT_NAV: &[NavItem] = &[
    NavItem { path: "/dashboard", label: "Dashboard", icon: NavIcon::Activity },
    NavItem { path: "/my-records", label: "My Records", icon: NavIcon::Records },
    NavItem { path: "/access-control", label: "Access Control", icon: NavIcon::Shield },
];

/// Links for a role. Anything other than a doctor gets the patient links.
pub fn nav_items(role: Option<Role>) -> &'static [NavItem] {
    match role {
        Some(Role::Doctor) => DOCTOR_NAV,
        _ => PATIENT_NAV,
    }
}

/// Exact path match; `/dashboard/x` does not activate `/dashboard`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.path).collect()
    }

    #[test]
    fn test_doctor_links() {
        assert_eq!(
            paths(nav_items(Some(Role::Doctor))),
            vec!["/dashboard", "/patients", "/my-patients", "/access-requests"]
        );
    }

    #[test]
    fn test_patient_links_are_the_fallback() {
        let expected = vec!["/dashboard", "/my-records", "/access-control"];
        assert_eq!(paths(nav_items(Some(Role::Patient))), expected);
        assert_eq!(paths(nav_items(Some(Role::Unknown))), expected);
        assert_eq!(paths(nav_items(Some(Role::Unassigned))), expected);
        assert_eq!(paths(nav_items(None)), expected);
    }

    #[test]
    fn test_active_is_exact() {
        let dashboard = &nav_items(None)[0];
        assert!(is_active(dashboard, "/dashboard"));
        assert!(!is_active(dashboard, "/dashboard/"));
        assert!(!is_active(dashboard, "/dashboard/stats"));
        assert!(!is_active(dashboard, "/"));
    }
}
