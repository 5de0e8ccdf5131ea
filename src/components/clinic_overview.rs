//! Clinic Overview Component
//!
//! Counter cards shown on the staff and admin dashboard home, including the
//! walk-in desk.

use chrono::Local;
use leptos::prelude::*;

use crate::components::WalkInDesk;
use crate::listing::{appointment_stats, format_date_time, most_booked_service, Directory};
use crate::models::Appointment;
use crate::store::{use_clinic_store, ClinicStateStoreFields};

const LATEST_REQUESTS: usize = 5;

#[component]
pub fn ClinicOverview(#[prop(into)] greeting: String, role_label: &'static str) -> impl IntoView {
    let store = use_clinic_store();

    let stats = Memo::new(move |_| {
        let today = Local::now().date_naive();
        appointment_stats(&store.appointments().read(), &store.accepted().read(), today)
    });
    let top_service = Memo::new(move |_| {
        let patients = store.patients().read();
        let services = store.services().read();
        most_booked_service(&store.appointments().read(), &Directory::new(&patients, &services))
    });
    let latest = Memo::new(move |_| {
        let mut requests: Vec<Appointment> = store.appointments().get();
        requests.reverse();
        requests.truncate(LATEST_REQUESTS);
        requests
    });

    let patient_name = move |id: u32| {
        let patients = store.patients().read();
        Directory::new(&patients, &[]).patient_name(id)
    };

    view! {
        <div class="dashboard-section">
            <div class="welcome-header">
                <div class="welcome-info">
                    <h2>{greeting}</h2>
                    <p>"Logged in as "<span class="staff-role">{role_label}</span></p>
                </div>
            </div>
            <Show when=move || store.loading().get()>
                <div class="loading">"Loading clinic data..."</div>
            </Show>
            {move || store.error().get().map(|message| view! { <div class="message error">{message}</div> })}

            <div class="dashboard-stats">
                <div class="stat-card today-card">
                    <h3>"Today"</h3>
                    <div class="stat-number">{move || stats.get().today}</div>
                    <p class="stat-label">"Appointments"</p>
                    <div class="stat-details">
                        <div class="stat-detail">
                            <span class="status-indicator pending"></span>
                            <span>{move || format!("Pending Requests: {}", stats.get().pending)}</span>
                        </div>
                        <div class="stat-detail">
                            <span class="status-indicator ongoing"></span>
                            <span>{move || format!("Ongoing Appointments: {}", stats.get().ongoing)}</span>
                        </div>
                        <div class="stat-detail">
                            <span class="status-indicator completed"></span>
                            <span>{move || format!("Completed Appointments: {}", stats.get().completed)}</span>
                        </div>
                    </div>
                </div>

                <div class="stat-card service-card">
                    <h3>"Most Booked Service"</h3>
                    <div class="service-info">
                        {move || match top_service.get() {
                            Some((name, count)) => view! {
                                <div class="service-name">{name}</div>
                                <div class="service-count">{format!("Bookings: {}", count)}</div>
                            }
                            .into_any(),
                            None => view! { <div class="service-name">"No bookings yet"</div> }.into_any(),
                        }}
                    </div>
                </div>

                <WalkInDesk />
            </div>

            <div class="recent-requests">
                <h3>"Latest Requests"</h3>
                <Show
                    when=move || latest.with(|l| !l.is_empty())
                    fallback=|| view! { <p class="no-appointments">"No appointment requests yet."</p> }
                >
                    <ul class="request-list">
                        <For
                            each=move || latest.get()
                            key=|a: &Appointment| a.appointment_id
                            let:request
                        >
                            <li class="request-item">
                                <span class="request-patient">{patient_name(request.patient_id)}</span>
                                <span class="request-date">{format_date_time(&request.preferred_date_time)}</span>
                                <span class="request-status">{request.status_label().to_string()}</span>
                            </li>
                        </For>
                    </ul>
                </Show>
            </div>
        </div>
    }
}
