//! Patient Records Section
//!
//! History of attended visits with a free-text search.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Notice, NoticeBanner};
use crate::listing::{filter_records, format_date_time, record_stats, Directory};
use crate::models::AcceptedAppointment;
use crate::store::{use_clinic_store, ClinicStateStoreFields};

#[component]
pub fn PatientRecords() -> impl IntoView {
    let store = use_clinic_store();
    let attended = RwSignal::new(Vec::<AcceptedAppointment>::new());
    let (search, set_search) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_attended().await {
            Ok(list) => attended.set(list),
            Err(err) => {
                log::error!("failed to load patient records: {}", err);
                set_notice.set(Notice::error("Error fetching patient records"));
            }
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let patients = store.patients().read();
        let services = store.services().read();
        attended.with(|a| filter_records(a, &Directory::new(&patients, &services), &search.get()))
    });
    let stats = Memo::new(move |_| attended.with(|a| record_stats(a, Local::now().date_naive())));

    let lookup = move |record: &AcceptedAppointment| {
        let patients = store.patients().read();
        let services = store.services().read();
        let dir = Directory::new(&patients, &services);
        (
            dir.patient_name(record.patient_id),
            dir.patient_email(record.patient_id),
            dir.service_name(record.service_id),
        )
    };

    view! {
        <div class="patient-records">
            <div class="section-header">
                <h1>"Patient Records"</h1>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by patient, email, service or symptoms..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>
            <div class="records-stats">
                <div class="stat-card">
                    <span class="stat-number">{move || stats.get().total}</span>
                    <span class="stat-label">"Total Records"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{move || stats.get().this_month}</span>
                    <span class="stat-label">"This Month"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{move || stats.get().unique_patients}</span>
                    <span class="stat-label">"Unique Patients"</span>
                </div>
            </div>
            <NoticeBanner notice=notice />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading records..."</div> }
            >
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="no-records">"No patient records found."</p> }
                >
                    <table class="records-table">
                        <thead>
                            <tr>
                                <th>"Patient"</th>
                                <th>"Email"</th>
                                <th>"Service"</th>
                                <th>"Visit Date"</th>
                                <th>"Symptoms"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|r: &AcceptedAppointment| r.accepted_appointment_id
                                let:record
                            >
                                {
                                    let (name, email, service) = lookup(&record);
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{email}</td>
                                            <td>{service}</td>
                                            <td>{format_date_time(&record.preferred_date_time)}</td>
                                            <td>{record.symptom.clone()}</td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
