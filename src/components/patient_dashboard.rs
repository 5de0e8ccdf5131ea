//! Patient Dashboard Component
//!
//! Sidebar layout whose active section follows the URL fragment.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    Booking, MyAppointments, PatientFeedback, PatientHome, PatientReminders, ProfileSettings,
};
use crate::config::CLINIC_NAME;
use crate::context::use_router;
use crate::history::{BrowserHistory, History};
use crate::models::{MedicalService, PatientSession, Person, PersonForm};
use crate::route::PatientSection;
use crate::session::Role;

fn section_icon(section: PatientSection) -> &'static str {
    match section {
        PatientSection::Home => "🏠",
        PatientSection::Book => "📅",
        PatientSection::Appointments => "📋",
        PatientSection::Feedback => "⭐",
        PatientSection::Reminders => "🔔",
        PatientSection::Settings => "⚙️",
    }
}

fn section_from_url() -> PatientSection {
    PatientSection::from_hash(&BrowserHistory.location().hash)
}

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let router = use_router();
    let Some(patient) = router.restore_session::<PatientSession>(Role::Patient) else {
        return ().into_any();
    };
    let patient = RwSignal::new(patient);
    let patient_id = patient.with_untracked(|p| p.patient_id);

    let section = RwSignal::new(section_from_url());
    let hash_listener = window_event_listener(ev::hashchange, move |_| section.set(section_from_url()));
    on_cleanup(move || hash_listener.remove());

    let show = Callback::new(move |target: PatientSection| {
        section.set(target);
        router.set_hash(target.hash());
    });

    let services = RwSignal::new(Vec::<MedicalService>::new());
    spawn_local(async move {
        match api::list_services().await {
            Ok(list) => services.set(list),
            Err(err) => log::error!("failed to load services: {}", err),
        }
    });

    let nav_button = move |target: PatientSection| {
        view! {
            <button
                class={move || if section.get() == target { "nav-item active" } else { "nav-item" }}
                on:click=move |_| show.run(target)
            >
                <span class="nav-item-icon">{section_icon(target)}</span>
                {target.label()}
            </button>
        }
    };

    let content = move || match section.get() {
        PatientSection::Home => view! { <PatientHome patient=patient services=services on_section=show /> }.into_any(),
        PatientSection::Book => view! { <Booking patient_id=patient_id services=services /> }.into_any(),
        PatientSection::Appointments => view! { <MyAppointments patient_id=patient_id services=services /> }.into_any(),
        PatientSection::Feedback => view! { <PatientFeedback patient_id=patient_id /> }.into_any(),
        PatientSection::Reminders => view! { <PatientReminders patient_id=patient_id /> }.into_any(),
        PatientSection::Settings => view! {
            <ProfileSettings
                role=Role::Patient
                on_saved=Callback::new(move |form: PersonForm| patient.update(|p| p.apply_form(&form)))
            />
        }
        .into_any(),
    };

    view! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <div class="header-left">
                    <div class="clinic-logo">"🏥"</div>
                    <h1>{CLINIC_NAME}</h1>
                </div>
                <button class="logout-btn" on:click=move |_| router.end_session(Role::Patient)>
                    <span>"🚪"</span>
                    "LOG-OUT"
                </button>
            </header>
            <div class="dashboard-content">
                <aside class="sidebar">
                    <div class="sidebar-header"><h3>"Main Menu"</h3></div>
                    <nav class="sidebar-nav">
                        {PatientSection::MENU.into_iter().map(nav_button).collect_view()}
                    </nav>
                    <div class="sidebar-separator"></div>
                    <div class="sidebar-footer">
                        <h4>"Others"</h4>
                        {nav_button(PatientSection::Settings)}
                    </div>
                </aside>
                <main class="main-content">{content}</main>
            </div>
        </div>
    }
    .into_any()
}
