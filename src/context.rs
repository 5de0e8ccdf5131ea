//! Router Context
//!
//! Session router shared via Leptos Context API. The current page and the
//! login modal flags are mirrored into signals so views re-render on change.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::history::BrowserHistory;
use crate::route::Page;
use crate::router::{LoginModals, SessionRouter};
use crate::session::{BrowserStorage, Role};

type AppRouter = SessionRouter<BrowserStorage, BrowserHistory>;

/// App-wide routing handle provided via context
#[derive(Clone, Copy)]
pub struct RouterContext {
    router: StoredValue<AppRouter>,
    /// Page being shown - read
    pub page: ReadSignal<Page>,
    /// Page being shown - write
    set_page: WriteSignal<Page>,
    /// Login modal flags - read
    pub modals: ReadSignal<LoginModals>,
    /// Login modal flags - write
    set_modals: WriteSignal<LoginModals>,
}

impl RouterContext {
    /// Start routing from the current URL
    pub fn new() -> Self {
        let router = SessionRouter::start(BrowserStorage, BrowserHistory);
        let (page, set_page) = signal(router.page());
        let (modals, set_modals) = signal(router.modals());
        log::info!("starting on {}", router.page().name());
        Self {
            router: StoredValue::new(router),
            page,
            set_page,
            modals,
            set_modals,
        }
    }

    /// Run a router operation, then publish the resulting page and modals
    fn apply<U>(&self, op: impl FnOnce(&mut AppRouter) -> U) -> Option<U> {
        let (out, page, modals) = self.router.try_update_value(|router| {
            let out = op(router);
            (out, router.page(), router.modals())
        })?;
        if self.page.get_untracked() != page {
            self.set_page.set(page);
        }
        if self.modals.get_untracked() != modals {
            self.set_modals.set(modals);
        }
        Some(out)
    }

    pub fn navigate(&self, page: Page) {
        self.apply(|router| router.navigate(page));
    }

    /// Back/forward: re-derive the page from the URL through the session gate
    pub fn handle_popstate(&self) {
        self.apply(|router| router.sync_with_location());
    }

    pub fn set_hash(&self, hash: &str) {
        self.apply(|router| router.set_hash(hash));
    }

    pub fn open_login(&self, role: Role) {
        self.apply(|router| router.open_login(role));
    }

    pub fn close_login(&self, role: Role) {
        self.apply(|router| router.close_login(role));
    }

    /// Close one login modal and open another
    pub fn switch_login(&self, from: Role, to: Role) {
        self.apply(|router| {
            router.close_login(from);
            router.open_login(to);
        });
    }

    pub fn logout(&self) {
        self.apply(|router| router.logout());
    }

    pub fn sign_in<T: Serialize>(&self, role: Role, record: &T, remember: bool) {
        self.apply(|router| router.sign_in(role, record, remember));
    }

    pub fn update_session<T: Serialize>(&self, role: Role, record: &T) {
        self.apply(|router| router.update_session(role, record));
    }

    pub fn restore_session<T: DeserializeOwned>(&self, role: Role) -> Option<T> {
        self.apply(|router| router.restore_session(role)).flatten()
    }

    pub fn end_session(&self, role: Role) {
        self.apply(|router| router.end_session(role));
    }
}

/// Get the router context
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext should be provided")
}
