//! Appointment Management Section
//!
//! Staff view of every request: accept, reschedule or delete pending ones,
//! mark accepted ones attended. Reads and updates the dashboard store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::{
    filter_accepted, filter_pending_for_staff, format_date_time, to_input_datetime, to_sql_datetime,
    AppointmentSort, Directory,
};
use crate::models::{AcceptedAppointment, Appointment, AppointmentUpdate};
use crate::store::{
    reload_appointments, store_mark_attended, store_remove_appointment, use_clinic_store,
    ClinicStateStoreFields,
};
use crate::validation::{validate_appointment, REQUIRED_FIELDS_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pending,
    Accepted,
}

fn sort_value(sort: AppointmentSort) -> &'static str {
    match sort {
        AppointmentSort::Default => "default",
        AppointmentSort::AToZ => "a-z",
        AppointmentSort::Date => "date",
    }
}

fn parse_sort(value: &str) -> AppointmentSort {
    AppointmentSort::ALL
        .into_iter()
        .find(|s| sort_value(*s) == value)
        .unwrap_or_default()
}

#[component]
pub fn AppointmentManagement() -> impl IntoView {
    let store = use_clinic_store();
    let (tab, set_tab) = signal(Tab::Pending);
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal(AppointmentSort::Default);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let rescheduling = RwSignal::new(None::<(u32, AppointmentUpdate)>);

    let pending = Memo::new(move |_| {
        let patients = store.patients().read();
        let services = store.services().read();
        filter_pending_for_staff(
            &store.appointments().read(),
            &Directory::new(&patients, &services),
            &search.get(),
            sort.get(),
        )
    });
    let accepted = Memo::new(move |_| {
        let patients = store.patients().read();
        let services = store.services().read();
        filter_accepted(
            &store.accepted().read(),
            &Directory::new(&patients, &services),
            &search.get(),
            sort.get(),
        )
    });

    let patient_name = move |id: u32| Directory::new(&store.patients().read(), &[]).patient_name(id);
    let service_name = move |id: u32| Directory::new(&[], &store.services().read()).service_name(id);

    let accept = move |appointment_id: u32| {
        spawn_local(async move {
            match api::accept_appointment(appointment_id).await {
                Ok(()) => {
                    log::info!("accepted appointment {}", appointment_id);
                    set_notice.set(Notice::success("Appointment accepted successfully"));
                    reload_appointments(store).await;
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to accept appointment"))),
            }
        });
    };

    let attend = move |accepted_id: u32| {
        spawn_local(async move {
            match api::mark_attended(accepted_id).await {
                Ok(()) => {
                    store_mark_attended(&store, accepted_id);
                    set_notice.set(Notice::success("Appointment marked as attended successfully"));
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to mark as attended"))),
            }
        });
    };

    let remove = move |appointment_id: u32| {
        spawn_local(async move {
            match api::delete_appointment(appointment_id).await {
                Ok(()) => {
                    store_remove_appointment(&store, appointment_id);
                    set_notice.set(Notice::success("Appointment deleted successfully"));
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to delete appointment"))),
            }
        });
    };

    let save_reschedule = move |_| {
        let Some((appointment_id, update)) = rescheduling.get() else {
            return;
        };
        if validate_appointment(&update.preferred_date_time, &update.symptom).is_err() {
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
                    set_notice.set(Notice::success("Appointment rescheduled successfully"));
                    rescheduling.set(None);
                    reload_appointments(store).await;
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to reschedule appointment"))),
            }
        });
    };

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
        <div class="appointment-management">
            <div class="section-header">
                <h1>"Appointment Management"</h1>
                <div class="section-controls">
                    <input
                        type="text"
                        placeholder="Search by patient, service or status..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_sort.set(parse_sort(&event_target_value(&ev)))>
                        {AppointmentSort::ALL.into_iter().map(|s| view! {
                            <option value=sort_value(s) selected=move || sort.get() == s>{s.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <NoticeBanner notice=notice />
            <div class="appointments-tabs">
                {tab_button(Tab::Pending, "Pending")}
                {tab_button(Tab::Accepted, "Accepted")}
            </div>

            <Show when=move || tab.get() == Tab::Pending>
                <table class="appointments-table">
                    <thead>
                        <tr>
                            <th>"Patient"</th>
                            <th>"Service"</th>
                            <th>"Date & Time"</th>
                            <th>"Symptoms"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || pending.get()
                            key=|a: &Appointment| (a.appointment_id, a.preferred_date_time.clone())
                            let:appointment
                        >
                            {
                                let id = appointment.appointment_id;
                                let draft = AppointmentUpdate {
                                    preferred_date_time: to_input_datetime(&appointment.preferred_date_time),
                                    symptom: appointment.symptom.clone(),
                                };
                                view! {
                                    <tr>
                                        <td>{patient_name(appointment.patient_id)}</td>
                                        <td>{service_name(appointment.service_id)}</td>
                                        <td>{format_date_time(&appointment.preferred_date_time)}</td>
                                        <td>{appointment.symptom.clone()}</td>
                                        <td>{appointment.status_label().to_string()}</td>
                                        <td class="actions">
                                            <button class="btn btn-primary" on:click=move |_| accept(id)>"Accept"</button>
                                            <button class="btn btn-edit" on:click=move |_| rescheduling.set(Some((id, draft.clone())))>
                                                "Reschedule"
                                            </button>
                                            <DeleteConfirmButton on_confirm=move |_| remove(id) />
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <Show when=move || pending.with(Vec::is_empty)>
                    <p class="no-appointments">"No pending appointments."</p>
                </Show>
            </Show>

            <Show when=move || tab.get() == Tab::Accepted>
                <table class="appointments-table">
                    <thead>
                        <tr>
                            <th>"Patient"</th>
                            <th>"Service"</th>
                            <th>"Date & Time"</th>
                            <th>"Symptoms"</th>
                            <th>"Attendance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || accepted.get()
                            key=|a: &AcceptedAppointment| (a.accepted_appointment_id, a.is_attended)
                            let:visit
                        >
                            {
                                let id = visit.accepted_appointment_id;
                                let attended = visit.is_attended;
                                view! {
                                    <tr>
                                        <td>{patient_name(visit.patient_id)}</td>
                                        <td>{service_name(visit.service_id)}</td>
                                        <td>{format_date_time(&visit.preferred_date_time)}</td>
                                        <td>{visit.symptom.clone()}</td>
                                        <td>
                                            {if attended {
                                                view! { <span class="status-attended">"Attended"</span> }.into_any()
                                            } else {
                                                view! {
                                                    <button class="btn btn-primary" on:click=move |_| attend(id)>
                                                        "Mark Attended"
                                                    </button>
                                                }
                                                .into_any()
                                            }}
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <Show when=move || accepted.with(Vec::is_empty)>
                    <p class="no-appointments">"No accepted appointments."</p>
                </Show>
            </Show>

            <Show when=move || rescheduling.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| rescheduling.set(None)>
                    <div class="edit-modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Reschedule Appointment"</h3>
                        <div class="form-group">
                            <label>"Preferred Date & Time *"</label>
                            <input
                                type="datetime-local"
                                prop:value=move || rescheduling.with(|r| r.as_ref().map(|(_, u)| u.preferred_date_time.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rescheduling.update(|r| if let Some((_, u)) = r { u.preferred_date_time = value });
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Symptoms *"</label>
                            <textarea
                                rows="3"
                                prop:value=move || rescheduling.with(|r| r.as_ref().map(|(_, u)| u.symptom.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    rescheduling.update(|r| if let Some((_, u)) = r { u.symptom = value });
                                }
                            />
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| rescheduling.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" on:click=save_reschedule>"Save"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
