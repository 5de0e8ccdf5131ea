//! Admin Dashboard Component
//!
//! Same layout as the staff dashboard, with service and staff management
//! in place of messages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    AppointmentManagement, ClinicOverview, FeedbackManagement, PatientRecords, ProfileSettings,
    ServiceManagement, StaffManagement, WorkSidebar,
};
use crate::config::CLINIC_NAME;
use crate::context::use_router;
use crate::models::{AdminSession, Person};
use crate::route::WorkSection;
use crate::session::Role;
use crate::store::{load_clinic_data, ClinicState, ClinicStore};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let router = use_router();
    let Some(admin) = router.restore_session::<AdminSession>(Role::Admin) else {
        return ().into_any();
    };
    let greeting = format!("Welcome, {}!", admin.full_name());

    let store: ClinicStore = Store::new(ClinicState::default());
    provide_context(store);
    spawn_local(load_clinic_data(store));

    let section = RwSignal::new(WorkSection::Dashboard);

    let content = move || match section.get() {
        WorkSection::Services => view! { <ServiceManagement /> }.into_any(),
        WorkSection::Staff => view! { <StaffManagement /> }.into_any(),
        WorkSection::Appointments => view! { <AppointmentManagement /> }.into_any(),
        WorkSection::Feedback => view! { <FeedbackManagement /> }.into_any(),
        WorkSection::Records => view! { <PatientRecords /> }.into_any(),
        WorkSection::Settings => view! { <ProfileSettings role=Role::Admin /> }.into_any(),
        _ => view! { <ClinicOverview greeting=greeting.clone() role_label="Administrator" /> }.into_any(),
    };

    view! {
        <div class="admin-dashboard-container">
            <header class="dashboard-header">
                <div class="header-left">
                    <div class="clinic-logo">"🏥"</div>
                    <h1>{format!("{} Admin", CLINIC_NAME)}</h1>
                </div>
                <button class="logout-btn" on:click=move |_| router.end_session(Role::Admin)>
                    "LOG-OUT"
                </button>
            </header>
            <div class="dashboard-content">
                <WorkSidebar menu=&WorkSection::ADMIN_MENU section=section />
                <main class="admin-main-content">{content}</main>
            </div>
        </div>
    }
    .into_any()
}
