//! Page Routing
//!
//! Maps the address bar to a top-level page and gates the dashboards
//! behind a stored session for their role.

use serde::{Deserialize, Serialize};

use crate::session::{Role, SessionStore};

/// Top-level page rendered by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Home,
    Register,
    StaffRegister,
    Dashboard,
    StaffDashboard,
    AdminDashboard,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Register,
        Page::StaffRegister,
        Page::Dashboard,
        Page::StaffDashboard,
        Page::AdminDashboard,
    ];

    /// Canonical URL path
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Register => "/register",
            Page::StaffRegister => "/staff-register",
            Page::Dashboard => "/dashboard",
            Page::StaffDashboard => "/staff-dashboard",
            Page::AdminDashboard => "/admin-dashboard",
        }
    }

    /// State name stored in history entries
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Register => "register",
            Page::StaffRegister => "staffRegister",
            Page::Dashboard => "dashboard",
            Page::StaffDashboard => "staffDashboard",
            Page::AdminDashboard => "adminDashboard",
        }
    }

    /// Role whose session must be stored to show this page
    pub fn required_role(self) -> Option<Role> {
        match self {
            Page::Dashboard => Some(Role::Patient),
            Page::StaffDashboard => Some(Role::Staff),
            Page::AdminDashboard => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Dashboard a signed-in role lands on
pub fn dashboard_for(role: Role) -> Page {
    match role {
        Role::Patient => Page::Dashboard,
        Role::Staff => Page::StaffDashboard,
        Role::Admin => Page::AdminDashboard,
    }
}

/// Path and fragment of the current URL
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    /// Fragment without the leading `#`
    pub hash: String,
}

impl Location {
    pub fn new(path: impl Into<String>, hash: &str) -> Self {
        Self {
            path: path.into(),
            hash: hash.strip_prefix('#').unwrap_or(hash).to_string(),
        }
    }
}

/// Candidate page for a URL, before the session gate.
///
/// Any non-empty fragment selects the patient dashboard whatever the path.
pub fn derive_page(location: &Location) -> Page {
    if location.path == Page::Dashboard.path() || !location.hash.is_empty() {
        return Page::Dashboard;
    }
    match location.path.as_str() {
        "/register" => Page::Register,
        "/staff-register" => Page::StaffRegister,
        "/staff-dashboard" => Page::StaffDashboard,
        "/admin-dashboard" => Page::AdminDashboard,
        _ => Page::Home,
    }
}

/// Outcome of routing a URL through the session gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub page: Page,
    /// The URL must be replaced with `/`
    pub redirected: bool,
}

pub fn resolve(location: &Location, store: &impl SessionStore) -> Resolved {
    let candidate = derive_page(location);
    match candidate.required_role() {
        Some(role) if !store.is_authenticated(role) => Resolved {
            page: Page::Home,
            redirected: true,
        },
        _ => Resolved {
            page: candidate,
            redirected: false,
        },
    }
}

// ========================
// Dashboard Sections
// ========================

/// Patient dashboard section, mirrored in the URL fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatientSection {
    #[default]
    Home,
    Book,
    Appointments,
    Feedback,
    Reminders,
    Settings,
}

impl PatientSection {
    pub const MENU: [PatientSection; 5] = [
        PatientSection::Home,
        PatientSection::Book,
        PatientSection::Appointments,
        PatientSection::Feedback,
        PatientSection::Reminders,
    ];

    /// Unknown fragments fall back to the home section
    pub fn from_hash(hash: &str) -> Self {
        match hash.strip_prefix('#').unwrap_or(hash) {
            "book" => PatientSection::Book,
            "appointments" => PatientSection::Appointments,
            "feedback" => PatientSection::Feedback,
            "reminders" => PatientSection::Reminders,
            "settings" => PatientSection::Settings,
            _ => PatientSection::Home,
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            PatientSection::Home => "home",
            PatientSection::Book => "book",
            PatientSection::Appointments => "appointments",
            PatientSection::Feedback => "feedback",
            PatientSection::Reminders => "reminders",
            PatientSection::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PatientSection::Home => "Home",
            PatientSection::Book => "Book Appointment",
            PatientSection::Appointments => "My Appointments",
            PatientSection::Feedback => "Feedback",
            PatientSection::Reminders => "Reminders",
            PatientSection::Settings => "Account Settings",
        }
    }
}

/// Staff and admin dashboard sections (in memory only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkSection {
    #[default]
    Dashboard,
    Services,
    Staff,
    Appointments,
    Messages,
    Feedback,
    Records,
    Settings,
}

impl WorkSection {
    pub const STAFF_MENU: [WorkSection; 5] = [
        WorkSection::Dashboard,
        WorkSection::Appointments,
        WorkSection::Messages,
        WorkSection::Feedback,
        WorkSection::Records,
    ];

    pub const ADMIN_MENU: [WorkSection; 6] = [
        WorkSection::Dashboard,
        WorkSection::Services,
        WorkSection::Staff,
        WorkSection::Appointments,
        WorkSection::Feedback,
        WorkSection::Records,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkSection::Dashboard => "Dashboard",
            WorkSection::Services => "Services",
            WorkSection::Staff => "Staff",
            WorkSection::Appointments => "Appointments",
            WorkSection::Messages => "Messages & Reminders",
            WorkSection::Feedback => "Feedback",
            WorkSection::Records => "Patient Records",
            WorkSection::Settings => "Account Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use pretty_assertions::assert_eq;

    const PATHS: &[&str] = &[
        "/",
        "/register",
        "/staff-register",
        "/dashboard",
        "/staff-dashboard",
        "/admin-dashboard",
        "/unknown",
        "",
    ];

    #[test]
    fn test_path_table() {
        let table: Vec<_> = Page::ALL.iter().map(|p| (p.name(), p.path())).collect();
        assert_eq!(
            table,
            vec![
                ("home", "/"),
                ("register", "/register"),
                ("staffRegister", "/staff-register"),
                ("dashboard", "/dashboard"),
                ("staffDashboard", "/staff-dashboard"),
                ("adminDashboard", "/admin-dashboard"),
            ]
        );
    }

    #[test]
    fn test_derive_from_path() {
        let derived: Vec<_> = PATHS
            .iter()
            .map(|p| derive_page(&Location::new(*p, "")))
            .collect();
        assert_eq!(
            derived,
            vec![
                Page::Home,
                Page::Register,
                Page::StaffRegister,
                Page::Dashboard,
                Page::StaffDashboard,
                Page::AdminDashboard,
                Page::Home,
                Page::Home,
            ]
        );
    }

    #[test]
    fn test_any_hash_selects_patient_dashboard() {
        for path in PATHS {
            for hash in ["#appointments", "x", "#settings", "#unknown-section"] {
                assert_eq!(
                    derive_page(&Location::new(*path, hash)),
                    Page::Dashboard,
                    "path={path} hash={hash}"
                );
            }
        }
    }

    #[test]
    fn test_bare_hash_sign_is_empty() {
        let location = Location::new("/staff-dashboard", "#");
        assert_eq!(location.hash, "");
        assert_eq!(derive_page(&location), Page::StaffDashboard);
    }

    #[test]
    fn test_path_match_is_exact() {
        assert_eq!(derive_page(&Location::new("/dashboard/", "")), Page::Home);
        assert_eq!(derive_page(&Location::new("/Register", "")), Page::Home);
    }

    #[test]
    fn test_gate_redirects_without_session() {
        let store = MemoryStore::default();
        for page in [Page::Dashboard, Page::StaffDashboard, Page::AdminDashboard] {
            let resolved = resolve(&Location::new(page.path(), ""), &store);
            assert_eq!(
                resolved,
                Resolved {
                    page: Page::Home,
                    redirected: true
                }
            );
        }
    }

    #[test]
    fn test_gate_checks_only_the_matching_role() {
        let store = MemoryStore::with(&[("patient", "{}"), ("admin", "{}")]);
        assert_eq!(resolve(&Location::new("/dashboard", ""), &store).page, Page::Dashboard);
        assert_eq!(resolve(&Location::new("/admin-dashboard", ""), &store).page, Page::AdminDashboard);
        assert_eq!(resolve(&Location::new("/staff-dashboard", ""), &store).page, Page::Home);
    }

    #[test]
    fn test_public_pages_are_never_gated() {
        let store = MemoryStore::default();
        for page in [Page::Home, Page::Register, Page::StaffRegister] {
            let resolved = resolve(&Location::new(page.path(), ""), &store);
            assert_eq!(resolved, Resolved { page, redirected: false });
        }
    }

    #[test]
    fn test_dashboard_for_role_is_gated_by_that_role() {
        for role in Role::ALL {
            assert_eq!(dashboard_for(role).required_role(), Some(role));
        }
    }

    #[test]
    fn test_patient_section_from_hash() {
        assert_eq!(PatientSection::from_hash("#book"), PatientSection::Book);
        assert_eq!(PatientSection::from_hash("reminders"), PatientSection::Reminders);
        assert_eq!(PatientSection::from_hash(""), PatientSection::Home);
        assert_eq!(PatientSection::from_hash("#nope"), PatientSection::Home);
    }
}
