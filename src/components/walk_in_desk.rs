//! Walk-in Desk Component
//!
//! Dashboard card for patients registered at the front desk, with the
//! registration dialog and the walk-in list.

use chrono::{Local, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Notice, NoticeBanner, PersonFields, ADDRESS_FIELDS};
use crate::config::WALK_IN_CLOSE_DELAY_MS;
use crate::listing::{format_date_time, walk_in_patients, walk_ins_on};
use crate::models::{Patient, Person, PersonField, PersonForm};
use crate::store::{reload_patients, use_clinic_store, ClinicStateStoreFields};
use crate::validation::{walk_in_registration, FieldErrors};

const REQUIRED_FIELDS: &[PersonField] = &[
    PersonField::FirstName,
    PersonField::LastName,
    PersonField::Phone,
    PersonField::DateOfBirth,
];

const CONTACT_FIELDS: &[PersonField] = &[
    PersonField::Email,
    PersonField::EmergencyContactName,
    PersonField::EmergencyContactRelationship,
    PersonField::EmergencyContactPhone1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Register,
    List,
}

#[component]
pub fn WalkInDesk() -> impl IntoView {
    let store = use_clinic_store();
    let dialog = RwSignal::new(None::<Dialog>);
    let form = RwSignal::new(PersonForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (registering, set_registering) = signal(false);

    let today_count = Memo::new(move |_| walk_ins_on(&store.patients().read(), Local::now().date_naive()));
    let walk_ins = Memo::new(move |_| walk_in_patients(&store.patients().read()));

    let open_register = move || {
        form.set(PersonForm::default());
        errors.set(FieldErrors::new());
        set_notice.set(None);
        dialog.set(Some(Dialog::Register));
    };
    let close = move || dialog.set(None);

    let register = move |_| {
        let registration = match walk_in_registration(&form.get(), Utc::now()) {
            Ok(registration) => registration,
            Err(message) => {
                set_notice.set(Notice::error(message));
                return;
            }
        };
        set_registering.set(true);
        set_notice.set(None);
        spawn_local(async move {
            let result = api::register_walk_in(&registration).await;
            set_registering.set(false);
            match result {
                Ok(()) => {
                    log::info!("registered walk-in {}", registration.form.email);
                    set_notice.set(Notice::success(format!(
                        "Walk-in patient registered successfully! Temporary password: {}",
                        registration.temporary_password()
                    )));
                    reload_patients(store).await;
                    TimeoutFuture::new(WALK_IN_CLOSE_DELAY_MS).await;
                    if dialog.get_untracked() == Some(Dialog::Register) {
                        close();
                    }
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to register walk-in patient"))),
            }
        });
    };

    view! {
        <div class="stat-card walkin-card">
            <h3>"Walk-in Patients"</h3>
            <div class="walkin-info">
                <div class="walkin-count">{move || format!("Today: {}", today_count.get())}</div>
                <div class="walkin-actions">
                    <button
                        class="view-walkin-btn"
                        title="View All Walk-in Patients"
                        on:click=move |_| dialog.set(Some(Dialog::List))
                    >
                        "View"
                    </button>
                    <button class="register-walkin-btn" title="Register Walk-in Patient" on:click=move |_| open_register()>
                        "+ Register"
                    </button>
                </div>
            </div>
        </div>

        <Show when=move || dialog.get() == Some(Dialog::List)>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="walkin-list-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| close()>"×"</button>
                    <div class="modal-header">
                        <h3>"Walk-in Patients"</h3>
                        <p>{move || format!("Total walk-in patients: {}", walk_ins.with(Vec::len))}</p>
                    </div>
                    <Show
                        when=move || walk_ins.with(|w| !w.is_empty())
                        fallback=move || view! {
                            <div class="no-walkins">
                                <p>"No walk-in patients found."</p>
                                <button class="register-walkin-btn" on:click=move |_| open_register()>
                                    "Register First Walk-in Patient"
                                </button>
                            </div>
                        }
                    >
                        <table class="walkin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Phone"</th>
                                    <th>"Email"</th>
                                    <th>"Registered On"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=move || walk_ins.get() key=|p: &Patient| p.patient_id let:patient>
                                    <tr>
                                        <td class="patient-name">{patient.full_name()}</td>
                                        <td>{patient.phone.clone().unwrap_or_default()}</td>
                                        <td class="patient-email">{patient.email.clone()}</td>
                                        <td>{patient.created_at.as_deref().map(format_date_time).unwrap_or_default()}</td>
                                    </tr>
                                </For>
                            </tbody>
                        </table>
                    </Show>
                    <div class="modal-actions">
                        <button class="action-btn close-btn" on:click=move |_| close()>"Close"</button>
                        <button class="action-btn register-btn" on:click=move |_| open_register()>
                            "Add New Walk-in Patient"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || dialog.get() == Some(Dialog::Register)>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="walkin-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| close()>"×"</button>
                    <div class="modal-header">
                        <h3>"Register Walk-in Patient"</h3>
                        <p>"Register a new patient for walk-in consultation"</p>
                    </div>
                    <NoticeBanner notice=notice />
                    <div class="walkin-form">
                        <section class="form-section">
                            <h4>"Required"</h4>
                            <PersonFields fields=REQUIRED_FIELDS form=form errors=errors disabled=registering />
                        </section>
                        <section class="form-section">
                            <h4>"Contact (Optional)"</h4>
                            <PersonFields fields=CONTACT_FIELDS form=form errors=errors disabled=registering />
                        </section>
                        <section class="form-section">
                            <h4>"Address (Optional)"</h4>
                            <PersonFields fields=ADDRESS_FIELDS form=form errors=errors disabled=registering />
                        </section>
                    </div>
                    <div class="modal-actions">
                        <button class="action-btn cancel-btn" on:click=move |_| close()>"Cancel"</button>
                        <button class="action-btn register-btn" disabled=move || registering.get() on:click=register>
                            {move || if registering.get() { "Registering..." } else { "Register Patient" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
