//! Patient Home Section
//!
//! Welcome card, profile summary, recent bookings and quick actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::listing::{format_date, recent_activities, RecentActivity};
use crate::models::{Appointment, MedicalService, Patient, Person};
use crate::route::PatientSection;

const RECENT_ACTIVITY_COUNT: usize = 3;

#[component]
pub fn PatientHome(
    patient: RwSignal<Patient>,
    services: RwSignal<Vec<MedicalService>>,
    on_section: Callback<PatientSection>,
) -> impl IntoView {
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let patient_id = patient.with_untracked(|p| p.patient_id);
    spawn_local(async move {
        match api::list_patient_appointments(patient_id).await {
            Ok(list) => appointments.set(list),
            Err(err) => log::error!("failed to load recent activity: {}", err),
        }
    });

    let activities = Memo::new(move |_| {
        appointments.with(|a| services.with(|s| recent_activities(a, s, RECENT_ACTIVITY_COUNT)))
    });

    let profile_row = move |icon: &'static str, label: &'static str, value: Signal<String>| {
        view! {
            <div class="profile-item">
                <div class="profile-item-label"><span>{icon}</span><span>{label}</span></div>
                <span class="profile-item-value">{move || value.get()}</span>
            </div>
        }
    };

    view! {
        <div class="home-section">
            <div class="welcome-section">
                <div class="user-avatar">{move || patient.with(|p| p.initials())}</div>
                <div class="welcome-text">
                    <h2>{move || patient.with(|p| format!("Welcome back, {}!", p.full_name()))}</h2>
                    <p>"We're glad to see you again"</p>
                </div>
            </div>

            <div class="dashboard-grid">
                <div class="dashboard-card">
                    <h3 class="card-title">"👤 Profile Information"</h3>
                    <div class="profile-details">
                        {profile_row("✉️", "Email:", Signal::derive(move || patient.with(|p| p.email.clone())))}
                        {profile_row("📞", "Phone:", Signal::derive(move || patient.with(|p| p.phone.clone().unwrap_or_default())))}
                        {profile_row("🆔", "Patient ID:", Signal::derive(move || format!("UID #{}", patient_id)))}
                        {profile_row("⏰", "Member Since:", Signal::derive(move || {
                            patient.with(|p| p.created_at.as_deref().map(format_date).unwrap_or_else(|| "Recently joined".to_string()))
                        }))}
                    </div>
                </div>

                <div class="dashboard-card">
                    <h3 class="card-title">"📊 Recent Activity"</h3>
                    <div class="activity-list">
                        <Show
                            when=move || activities.with(|a| !a.is_empty())
                            fallback=move || view! {
                                <div class="no-activities">
                                    <p>"No recent appointments found."</p>
                                    <button class="action-btn action-btn-outline" on:click=move |_| on_section.run(PatientSection::Book)>
                                        "Book Your First Appointment"
                                    </button>
                                </div>
                            }
                        >
                            <For
                                each=move || activities.get()
                                key=|activity: &RecentActivity| activity.id
                                let:activity
                            >
                                <div class="activity-item">
                                    <div class="activity-info">
                                        <p>{activity.label.clone()}</p>
                                        <small>{activity.date.clone()}</small>
                                    </div>
                                    <div class=format!("activity-status {}", activity.status.to_lowercase())>
                                        {activity.status.clone()}
                                    </div>
                                </div>
                            </For>
                        </Show>
                    </div>
                </div>

                <div class="dashboard-card">
                    <h3 class="card-title">"⚡ Quick Actions"</h3>
                    <div class="quick-actions">
                        <button class="action-btn action-btn-primary" on:click=move |_| on_section.run(PatientSection::Book)>
                            "📅 Book Appointment"
                        </button>
                        <button class="action-btn action-btn-outline" on:click=move |_| on_section.run(PatientSection::Appointments)>
                            "📊 View History"
                        </button>
                        <button class="action-btn action-btn-outline" on:click=move |_| on_section.run(PatientSection::Settings)>
                            "👤 Edit Profile"
                        </button>
                    </div>
                </div>
            </div>

            <div class="about-doctor-section">
                <h2>"🏥 About Doctor Wahing"</h2>
                <h3>"Dr. Jessieneth Stephen F. Wahing"</h3>
                <ul class="doctor-specialties">
                    <li><strong>"Specialization: "</strong>"General Medicine"</li>
                    <li><strong>"Years of Experience: "</strong>"10+ years"</li>
                </ul>
            </div>
        </div>
    }
}
