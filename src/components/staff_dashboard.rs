//! Staff Dashboard Component
//!
//! Provides the clinic store to its sections and loads it once on entry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    AppointmentManagement, ClinicOverview, FeedbackManagement, MessagesReminders, PatientRecords,
    ProfileSettings, WorkSidebar,
};
use crate::config::CLINIC_NAME;
use crate::context::use_router;
use crate::models::{Person, StaffSession};
use crate::route::WorkSection;
use crate::session::Role;
use crate::store::{load_clinic_data, ClinicState, ClinicStore};

#[component]
pub fn StaffDashboard() -> impl IntoView {
    let router = use_router();
    let Some(staff) = router.restore_session::<StaffSession>(Role::Staff) else {
        return ().into_any();
    };
    let greeting = format!("Hi, {}!", staff.full_name());

    let store: ClinicStore = Store::new(ClinicState::default());
    provide_context(store);
    spawn_local(load_clinic_data(store));

    let section = RwSignal::new(WorkSection::Dashboard);

    let content = move || match section.get() {
        WorkSection::Appointments => view! { <AppointmentManagement /> }.into_any(),
        WorkSection::Messages => view! { <MessagesReminders /> }.into_any(),
        WorkSection::Feedback => view! { <FeedbackManagement /> }.into_any(),
        WorkSection::Records => view! { <PatientRecords /> }.into_any(),
        WorkSection::Settings => view! { <ProfileSettings role=Role::Staff /> }.into_any(),
        _ => view! { <ClinicOverview greeting=greeting.clone() role_label="Staff" /> }.into_any(),
    };

    view! {
        <div class="staff-dashboard-container">
            <header class="dashboard-header">
                <div class="header-left">
                    <div class="clinic-logo">"🏥"</div>
                    <h1>{CLINIC_NAME}</h1>
                </div>
                <button class="logout-btn" on:click=move |_| router.end_session(Role::Staff)>
                    "LOG-OUT"
                </button>
            </header>
            <div class="dashboard-content">
                <WorkSidebar menu=&WorkSection::STAFF_MENU section=section />
                <main class="staff-main-content">{content}</main>
            </div>
        </div>
    }
    .into_any()
}
