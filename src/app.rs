//! Clinic Portal App
//!
//! Root component: provides the router, renders the current page and the
//! three login modals, and re-gates the page on browser back/forward.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    AdminDashboard, Homepage, LoginModal, PatientDashboard, PatientRegister, StaffDashboard, StaffRegister,
};
use crate::context::RouterContext;
use crate::route::Page;
use crate::session::Role;

#[component]
pub fn App() -> impl IntoView {
    let router = RouterContext::new();
    provide_context(router);

    let popstate = window_event_listener(ev::popstate, move |_| router.handle_popstate());
    on_cleanup(move || popstate.remove());

    let page = move || match router.page.get() {
        Page::Home => view! { <Homepage /> }.into_any(),
        Page::Register => view! { <PatientRegister /> }.into_any(),
        Page::StaffRegister => view! { <StaffRegister /> }.into_any(),
        Page::Dashboard => view! { <PatientDashboard /> }.into_any(),
        Page::StaffDashboard => view! { <StaffDashboard /> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
    };

    view! {
        <div class="app">
            {page}
            {Role::ALL.into_iter().map(|role| view! { <LoginModal role=role /> }).collect_view()}
        </div>
    }
}
