//! Staff Management Section
//!
//! Admin list of staff accounts with create, edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    DeleteConfirmButton, Notice, NoticeBanner, PersonFields, ADDRESS_FIELDS, EMERGENCY_FIELDS, IDENTITY_FIELDS,
};
use crate::listing::{filter_staff, format_date};
use crate::models::{Person, PersonField, PersonForm, StaffMember};
use crate::store::{reload_staff, store_remove_staff, use_clinic_store, ClinicStateStoreFields};
use crate::validation::{validate_profile, validate_staff_registration, FieldErrors};

const NEW_ACCOUNT_FIELDS: &[PersonField] = &[PersonField::Password, PersonField::DateOfBirth];

#[component]
pub fn StaffManagement() -> impl IntoView {
    let store = use_clinic_store();
    let (search, set_search) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    // `Some(None)` while creating, `Some(Some(id))` while editing
    let editing = RwSignal::new(None::<Option<u32>>);
    let form = RwSignal::new(PersonForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    spawn_local(reload_staff(store));

    let visible = Memo::new(move |_| filter_staff(&store.staff().read(), &search.get()));

    let open = move |target: Option<&StaffMember>| {
        form.set(target.map(|s| s.to_form()).unwrap_or_default());
        errors.set(FieldErrors::new());
        editing.set(Some(target.map(|s| s.staff_id)));
    };
    let close = move || editing.set(None);

    let save = move |_| {
        let Some(target) = editing.get() else {
            return;
        };
        let current = form.get();
        let checked = match target {
            Some(_) => validate_profile(&current),
            None => validate_staff_registration(&current),
        };
        if let Err(found) = checked {
            errors.set(found);
            set_notice.set(Notice::error("Please fill in all required fields"));
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_staff(id, &current.for_update())
                    .await
                    .map(|()| "Staff member updated successfully"),
                None => api::register_staff(&current)
                    .await
                    .map(|()| "Staff member created successfully"),
            };
            set_saving.set(false);
            match result {
                Ok(message) => {
                    log::info!("{}", message);
                    set_notice.set(Notice::success(message));
                    close();
                    reload_staff(store).await;
                }
                Err(err) => {
                    let action = if target.is_some() { "update" } else { "create" };
                    set_notice.set(Notice::error(
                        err.user_message(&format!("Unable to {} staff member. Please try again later.", action)),
                    ));
                }
            }
        });
    };

    let remove = move |staff_id: u32| {
        spawn_local(async move {
            match api::delete_staff(staff_id).await {
                Ok(()) => {
                    store_remove_staff(&store, staff_id);
                    set_notice.set(Notice::success("Staff member deleted successfully"));
                }
                Err(err) => set_notice.set(Notice::error(
                    err.user_message("Unable to delete staff member. Please try again later."),
                )),
            }
        });
    };

    view! {
        <div class="staff-management">
            <div class="section-header">
                <h1>"Staff Management"</h1>
                <button class="btn btn-primary" on:click=move |_| open(None)>"+ Add Staff"</button>
            </div>
            <NoticeBanner notice=notice />
            <input
                type="text"
                class="search-input"
                placeholder="Search by name, email or phone..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <table class="staff-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Joined"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|s: &StaffMember| (s.staff_id, s.email.clone(), s.full_name())
                        let:member
                    >
                        {
                            let id = member.staff_id;
                            let picked = member.clone();
                            view! {
                                <tr>
                                    <td>{member.full_name()}</td>
                                    <td>{member.email.clone()}</td>
                                    <td>{member.phone.clone().unwrap_or_default()}</td>
                                    <td>{member.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                    <td class="actions">
                                        <button class="btn btn-edit" on:click=move |_| open(Some(&picked))>"Edit"</button>
                                        <DeleteConfirmButton on_confirm=move |_| remove(id) />
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || visible.with(Vec::is_empty)>
                <p class="no-staff">"No staff members found."</p>
            </Show>

            <Show when=move || editing.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| close()>
                    <div class="staff-modal" on:click=|ev| ev.stop_propagation()>
                        <h3>
                            {move || if editing.with(|e| matches!(e, Some(Some(_)))) { "Edit Staff Member" } else { "Add Staff Member" }}
                        </h3>
                        <PersonFields fields=IDENTITY_FIELDS form=form errors=errors disabled=saving />
                        <Show when=move || editing.with(|e| matches!(e, Some(None)))>
                            <PersonFields fields=NEW_ACCOUNT_FIELDS form=form errors=errors disabled=saving />
                        </Show>
                        <PersonFields fields=EMERGENCY_FIELDS form=form errors=errors disabled=saving />
                        <PersonFields fields=ADDRESS_FIELDS form=form errors=errors disabled=saving />
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
