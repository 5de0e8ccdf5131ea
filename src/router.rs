//! Session Router
//!
//! Page state machine behind the app shell. Owns the current page and the
//! three login modal flags, and keeps the address bar in step with them.

use serde::de::DeserializeOwned;

use crate::history::History;
use crate::route::{resolve, Page};
use crate::session::{Role, SessionStore};

/// Open/closed state of the three login modals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginModals {
    pub patient: bool,
    pub staff: bool,
    pub admin: bool,
}

impl LoginModals {
    pub fn is_open(&self, role: Role) -> bool {
        match role {
            Role::Patient => self.patient,
            Role::Staff => self.staff,
            Role::Admin => self.admin,
        }
    }

    fn set(&mut self, role: Role, open: bool) {
        match role {
            Role::Patient => self.patient = open,
            Role::Staff => self.staff = open,
            Role::Admin => self.admin = open,
        }
    }
}

pub struct SessionRouter<S, H> {
    store: S,
    history: H,
    page: Page,
    modals: LoginModals,
}

impl<S: SessionStore, H: History> SessionRouter<S, H> {
    /// Build the router with the page derived from the current URL
    pub fn start(store: S, history: H) -> Self {
        let mut router = Self {
            store,
            history,
            page: Page::Home,
            modals: LoginModals::default(),
        };
        router.sync_with_location();
        router
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn modals(&self) -> LoginModals {
        self.modals
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Re-derive the page from the URL and apply the session gate.
    /// Runs at start-up and on every `popstate`.
    pub fn sync_with_location(&mut self) -> Page {
        let location = self.history.location();
        let resolved = resolve(&location, &self.store);
        if resolved.redirected {
            log::debug!(
                "no session for {}{}, redirecting home",
                location.path,
                if location.hash.is_empty() { "" } else { " (fragment)" }
            );
            self.history.replace(Page::Home);
        }
        self.page = resolved.page;
        self.page
    }

    /// Show a page and push its URL. No session check is made here.
    pub fn navigate(&mut self, page: Page) {
        log::debug!("navigate {} -> {}", self.page.name(), page.name());
        self.page = page;
        self.history.push(page);
    }

    /// Update the fragment without leaving the page
    pub fn set_hash(&mut self, hash: &str) {
        self.history.set_hash(hash);
    }

    pub fn open_login(&mut self, role: Role) {
        self.modals.set(role, true);
    }

    pub fn close_login(&mut self, role: Role) {
        self.modals.set(role, false);
    }

    pub fn logout(&mut self) {
        self.modals = LoginModals::default();
        self.navigate(Page::Home);
    }

    /// Store a freshly signed-in session
    pub fn sign_in<T: serde::Serialize>(&mut self, role: Role, record: &T, remember: bool) {
        if let Err(err) = self
            .store
            .set(role, record)
            .and_then(|_| self.store.set_remember(role, remember))
        {
            log::error!("failed to store {} session: {}", role.session_key(), err);
        }
    }

    /// Replace the stored record after a profile edit; the remember-me
    /// marker is left as it was
    pub fn update_session<T: serde::Serialize>(&mut self, role: Role, record: &T) {
        if let Err(err) = self.store.set(role, record) {
            log::error!("failed to update {} session: {}", role.session_key(), err);
        }
    }

    /// Load the stored session for a dashboard.
    ///
    /// A missing record sends the user home. A record that does not parse is
    /// removed together with its remember-me flag before going home.
    pub fn restore_session<T: DeserializeOwned>(&mut self, role: Role) -> Option<T> {
        match self.store.load::<T>(role) {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                self.navigate(Page::Home);
                None
            }
            Err(err) => {
                log::warn!("discarding stored session: {}", err);
                self.store.clear(role);
                self.navigate(Page::Home);
                None
            }
        }
    }

    /// Dashboard sign-out: forget the role's session, then log out
    pub fn end_session(&mut self, role: Role) {
        self.store.clear(role);
        self.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::models::{PatientSession, StaffSession};
    use crate::route::Location;
    use crate::session::MemoryStore;
    use pretty_assertions::assert_eq;

    const PATIENT_JSON: &str =
        r#"{"patientId":12,"firstName":"Maria","lastName":"Santos","email":"maria@example.com"}"#;

    fn router(
        entries: &[(&str, &str)],
        path: &str,
        hash: &str,
    ) -> SessionRouter<MemoryStore, MemoryHistory> {
        SessionRouter::start(MemoryStore::with(entries), MemoryHistory::new(path, hash))
    }

    #[test]
    fn test_scenario_a_stored_patient_opens_dashboard() {
        let r = router(&[("patient", PATIENT_JSON)], "/dashboard", "");
        assert_eq!(r.page(), Page::Dashboard);
        assert_eq!(r.history().current(), &Location::new("/dashboard", ""));
        assert_eq!(r.history().len(), 1);
    }

    #[test]
    fn test_scenario_b_admin_dashboard_without_session() {
        let r = router(&[], "/admin-dashboard", "");
        assert_eq!(r.page(), Page::Home);
        assert_eq!(r.history().current().path, "/");
        assert_eq!(r.history().len(), 1);
    }

    #[test]
    fn test_scenario_c_hash_wins_with_patient_session() {
        let r = router(&[("patient", PATIENT_JSON)], "/", "#appointments");
        assert_eq!(r.page(), Page::Dashboard);
        assert_eq!(r.history().current().hash, "appointments");
    }

    #[test]
    fn test_scenario_d_hash_without_patient_session() {
        let r = router(&[("staff", "{}")], "/", "#appointments");
        assert_eq!(r.page(), Page::Home);
        assert_eq!(r.history().current(), &Location::new("/", ""));
        assert_eq!(r.history().len(), 1);
    }

    #[test]
    fn test_scenario_e_malformed_staff_session() {
        let mut r = router(
            &[("staff", "{not json"), ("rememberMeStaff", "true"), ("patient", PATIENT_JSON)],
            "/staff-dashboard",
            "",
        );
        // Presence is enough for the gate
        assert_eq!(r.page(), Page::StaffDashboard);

        let restored: Option<StaffSession> = r.restore_session(Role::Staff);
        assert!(restored.is_none());
        assert!(!r.store().contains("staff"));
        assert!(!r.store().contains("rememberMeStaff"));
        assert!(r.store().contains("patient"));
        assert_eq!(r.page(), Page::Home);
        assert_eq!(r.history().current().path, "/");
    }

    #[test]
    fn test_restore_valid_session() {
        let mut r = router(&[("patient", PATIENT_JSON)], "/dashboard", "");
        let patient: Option<PatientSession> = r.restore_session(Role::Patient);
        let patient = patient.unwrap();
        assert_eq!(patient.patient_id, 12);
        assert_eq!(patient.first_name, "Maria");
        assert_eq!(r.page(), Page::Dashboard);
        assert_eq!(r.history().len(), 1);
    }

    #[test]
    fn test_restore_missing_session_goes_home() {
        let mut r = router(&[], "/", "");
        r.navigate(Page::Dashboard);
        let patient: Option<PatientSession> = r.restore_session(Role::Patient);
        assert!(patient.is_none());
        assert_eq!(r.page(), Page::Home);
    }

    #[test]
    fn test_navigate_pushes_one_entry_per_call() {
        for page in Page::ALL {
            let mut r = router(&[], "/", "");
            let before = r.history().len();
            r.navigate(page);
            assert_eq!(r.page(), page);
            assert_eq!(r.history().len(), before + 1);
            assert_eq!(r.history().current(), &Location::new(page.path(), ""));
        }
    }

    #[test]
    fn test_navigate_skips_the_gate() {
        let mut r = router(&[], "/", "");
        r.navigate(Page::AdminDashboard);
        assert_eq!(r.page(), Page::AdminDashboard);
        assert_eq!(r.history().current().path, "/admin-dashboard");
    }

    #[test]
    fn test_popstate_reapplies_the_gate() {
        let mut r = router(&[("staff", "{}")], "/", "");
        r.navigate(Page::StaffDashboard);
        r.navigate(Page::Register);
        r.store().clear(Role::Staff);

        assert!(r.history_mut().back());
        assert_eq!(r.sync_with_location(), Page::Home);
        assert_eq!(r.history().current().path, "/");
        assert_eq!(r.history().len(), 3);
    }

    #[test]
    fn test_popstate_discovers_existing_session() {
        let mut r = router(&[("admin", "{}")], "/", "");
        r.navigate(Page::AdminDashboard);
        r.navigate(Page::Home);
        assert!(r.history_mut().back());
        assert_eq!(r.sync_with_location(), Page::AdminDashboard);
        assert_eq!(r.history().current().path, "/admin-dashboard");
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let mut r = router(&[], "/", "");
        r.open_login(Role::Patient);
        r.open_login(Role::Admin);
        assert_eq!(
            r.modals(),
            LoginModals {
                patient: true,
                staff: false,
                admin: true
            }
        );
        r.close_login(Role::Patient);
        r.open_login(Role::Staff);
        assert!(!r.modals().is_open(Role::Patient));
        assert!(r.modals().is_open(Role::Staff));
        assert!(r.modals().is_open(Role::Admin));
    }

    #[test]
    fn test_logout_from_every_page() {
        for page in Page::ALL {
            let mut r = router(&[("patient", PATIENT_JSON)], "/", "");
            r.navigate(page);
            for role in Role::ALL {
                r.open_login(role);
            }
            r.logout();
            assert_eq!(r.page(), Page::Home);
            assert_eq!(r.modals(), LoginModals::default());
            assert_eq!(r.history().current().path, "/");
        }
    }

    #[test]
    fn test_logout_leaves_storage_alone() {
        let mut r = router(&[("patient", PATIENT_JSON)], "/dashboard", "");
        r.logout();
        assert!(r.store().contains("patient"));
    }

    #[test]
    fn test_end_session_clears_role_then_logs_out() {
        let mut r = router(
            &[("admin", "{}"), ("rememberMeAdmin", "true"), ("staff", "{}")],
            "/admin-dashboard",
            "",
        );
        r.end_session(Role::Admin);
        assert!(!r.store().contains("admin"));
        assert!(!r.store().contains("rememberMeAdmin"));
        assert!(r.store().contains("staff"));
        assert_eq!(r.page(), Page::Home);
    }

    #[test]
    fn test_sign_in_stores_record_and_remember_flag() {
        let mut r = router(&[], "/", "");
        let staff = StaffSession {
            staff_id: 3,
            first_name: "Jo".into(),
            last_name: "Lim".into(),
            email: "jo@clinic.test".into(),
            ..Default::default()
        };
        r.sign_in(Role::Staff, &staff, true);
        assert!(r.store().is_authenticated(Role::Staff));
        assert!(r.store().remembered(Role::Staff));

        r.sign_in(Role::Staff, &staff, false);
        assert!(!r.store().remembered(Role::Staff));
    }

    #[test]
    fn test_update_session_keeps_remember_flag() {
        let mut r = router(&[("patient", PATIENT_JSON), ("rememberMe", "true")], "/dashboard", "");
        let mut patient: PatientSession = r.restore_session(Role::Patient).unwrap();
        patient.first_name = "Mara".into();
        r.update_session(Role::Patient, &patient);

        let reloaded: PatientSession = r.restore_session(Role::Patient).unwrap();
        assert_eq!(reloaded.first_name, "Mara");
        assert!(r.store().remembered(Role::Patient));
    }

    impl<S, H> SessionRouter<S, H> {
        fn history_mut(&mut self) -> &mut H {
            &mut self.history
        }
    }
}
