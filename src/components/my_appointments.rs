//! My Appointments Section
//!
//! The patient's pending requests (editable, cancellable) and accepted visits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::{
    format_date_time, format_price, pending_excluding_accepted, to_input_datetime, to_sql_datetime,
    Directory,
};
use crate::models::{AcceptedAppointment, Appointment, AppointmentUpdate, MedicalService};
use crate::validation::REQUIRED_FIELDS_MESSAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pending,
    Accepted,
}

fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "confirmed" => "status-confirmed",
        "cancelled" => "status-cancelled",
        _ => "status-pending",
    }
}

#[component]
pub fn MyAppointments(patient_id: u32, services: RwSignal<Vec<MedicalService>>) -> impl IntoView {
    let pending = RwSignal::new(Vec::<Appointment>::new());
    let accepted = RwSignal::new(Vec::<AcceptedAppointment>::new());
    let (tab, set_tab) = signal(Tab::Pending);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<(u32, AppointmentUpdate)>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let (requests, visits) = futures::join!(
                api::list_patient_appointments(patient_id),
                api::list_patient_accepted(patient_id),
            );
            let visits = visits.unwrap_or_else(|err| {
                log::error!("failed to load accepted appointments: {}", err);
                Vec::new()
            });
            match requests {
                Ok(list) => pending.set(pending_excluding_accepted(list, &visits)),
                Err(err) => {
                    log::error!("failed to load appointments: {}", err);
                    set_notice.set(Notice::error("Error fetching appointments"));
                }
            }
            accepted.set(visits);
            set_loading.set(false);
        });
    };
    load();

    let cancel = move |appointment_id: u32| {
        spawn_local(async move {
            match api::delete_appointment(appointment_id).await {
                Ok(()) => {
                    set_notice.set(Notice::success("Appointment cancelled successfully"));
                    load();
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to cancel appointment"))),
            }
        });
    };

    let save_edit = move |_| {
        let Some((appointment_id, update)) = editing.get() else {
            return;
        };
        if update.preferred_date_time.is_empty() || update.symptom.trim().is_empty() {
            set_notice.set(Notice::error(REQUIRED_FIELDS_MESSAGE));
            return;
        }
        let body = AppointmentUpdate {
            preferred_date_time: to_sql_datetime(&update.preferred_date_time),
            symptom: update.symptom,
        };
        spawn_local(async move {
            match api::update_appointment(appointment_id, &body).await {
                Ok(()) => {
                    set_notice.set(Notice::success("Appointment updated successfully"));
                    editing.set(None);
                    load();
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to update appointment"))),
            }
        });
    };

    let service_name = move |id: u32| services.with(|s| Directory::new(&[], s).service_name(id));
    let service_price = move |id: u32| services.with(|s| format_price(Directory::new(&[], s).service_price(id)));

    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <button
                class={move || if tab.get() == target { "tab-button active" } else { "tab-button" }}
                on:click=move |_| set_tab.set(target)
            >
                {move || match target {
                    Tab::Pending => format!("{} ({})", label, pending.with(Vec::len)),
                    Tab::Accepted => format!("{} ({})", label, accepted.with(Vec::len)),
                }}
            </button>
        }
    };

    view! {
        <div class="appointments-container">
            <div class="appointments-header">
                <h1>"My Appointments"</h1>
            </div>
            <NoticeBanner notice=notice />
            <div class="appointments-tabs">
                {tab_button(Tab::Pending, "Pending")}
                {tab_button(Tab::Accepted, "Accepted")}
            </div>
            <Show when=move || loading.get()>
                <div class="loading">"Loading appointments..."</div>
            </Show>
            <Show when=move || tab.get() == Tab::Pending>
                <div class="appointments-section">
                    <h2>"Pending Appointments"</h2>
                    <Show
                        when=move || pending.with(|p| !p.is_empty())
                        fallback=|| view! { <div class="no-appointments"><p>"No pending appointments found."</p></div> }
                    >
                        <div class="appointments-list">
                            <For
                                each=move || pending.get()
                                key=|a: &Appointment| a.appointment_id
                                let:appointment
                            >
                                {
                                    let id = appointment.appointment_id;
                                    let service_id = appointment.service_id;
                                    let draft = AppointmentUpdate {
                                        preferred_date_time: to_input_datetime(&appointment.preferred_date_time),
                                        symptom: appointment.symptom.clone(),
                                    };
                                    let status = appointment.status_label().to_string();
                                    view! {
                                        <div class="appointment-card">
                                            <div class="appointment-header">
                                                <h3>{move || service_name(service_id)}</h3>
                                                <span class="appointment-price">{move || service_price(service_id)}</span>
                                                <div class=format!("appointment-status {}", status_class(&status))>{status.clone()}</div>
                                            </div>
                                            <div class="appointment-details">
                                                <p><strong>"Date & Time: "</strong>{format_date_time(&appointment.preferred_date_time)}</p>
                                                <p><strong>"Symptoms: "</strong>{appointment.symptom.clone()}</p>
                                            </div>
                                            <div class="appointment-actions">
                                                <button class="btn btn-edit" on:click=move |_| editing.set(Some((id, draft.clone())))>
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton
                                                    label="Cancel"
                                                    prompt="Cancel this appointment?"
                                                    on_confirm=move |_| cancel(id)
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    </Show>
                </div>
            </Show>
            <Show when=move || tab.get() == Tab::Accepted>
                <div class="appointments-section">
                    <h2>"Accepted Appointments"</h2>
                    <Show
                        when=move || accepted.with(|a| !a.is_empty())
                        fallback=|| view! { <div class="no-appointments"><p>"No accepted appointments found."</p></div> }
                    >
                        <div class="appointments-list">
                            <For
                                each=move || accepted.get()
                                key=|a: &AcceptedAppointment| a.accepted_appointment_id
                                let:visit
                            >
                                {
                                    let service_id = visit.service_id;
                                    let attended = visit.is_attended;
                                    view! {
                                        <div class="appointment-card accepted">
                                            <div class="appointment-header">
                                                <h3>{move || service_name(service_id)}</h3>
                                                <span class="appointment-price">{move || service_price(service_id)}</span>
                                                <div class=if attended { "appointment-status status-attended" } else { "appointment-status status-not-attended" }>
                                                    {if attended { "Attended" } else { "Not Attended" }}
                                                </div>
                                            </div>
                                            <div class="appointment-details">
                                                <p><strong>"Date & Time: "</strong>{format_date_time(&visit.preferred_date_time)}</p>
                                                <p><strong>"Symptoms: "</strong>{visit.symptom.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    </Show>
                </div>
            </Show>

            <Show when=move || editing.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| editing.set(None)>
                    <div class="edit-modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Edit Appointment"</h3>
                        <div class="form-group">
                            <label>"Preferred Date & Time *"</label>
                            <input
                                type="datetime-local"
                                prop:value=move || editing.with(|e| e.as_ref().map(|(_, u)| u.preferred_date_time.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editing.update(|e| if let Some((_, u)) = e { u.preferred_date_time = value });
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Symptoms *"</label>
                            <textarea
                                rows="4"
                                prop:value=move || editing.with(|e| e.as_ref().map(|(_, u)| u.symptom.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editing.update(|e| if let Some((_, u)) = e { u.symptom = value });
                                }
                            />
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| editing.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" on:click=save_edit>"Save Changes"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
