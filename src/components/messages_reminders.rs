//! Messages & Reminders Section
//!
//! Staff create reminders for patients and track whether they were read.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::{filter_reminders, format_date_time, Directory, ReadFilter};
use crate::models::Reminder;
use crate::store::{use_clinic_store, ClinicStateStoreFields};
use crate::validation::{validate_reminder, ReminderDraft, REMINDER_TYPES};

#[component]
pub fn MessagesReminders() -> impl IntoView {
    let store = use_clinic_store();
    let reminders = RwSignal::new(Vec::<Reminder>::new());
    let (search, set_search) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let draft = RwSignal::new(None::<ReminderDraft>);
    let (saving, set_saving) = signal(false);

    let load = move || {
        spawn_local(async move {
            match api::list_reminders().await {
                Ok(list) => reminders.set(list),
                Err(err) => {
                    log::error!("failed to load reminders: {}", err);
                    set_notice.set(Notice::error("Error fetching reminders"));
                }
            }
        });
    };
    load();

    let visible = Memo::new(move |_| reminders.with(|r| filter_reminders(r, &search.get(), ReadFilter::All)));
    let unread = Memo::new(move |_| reminders.with(|r| r.iter().filter(|x| !x.is_read).count()));

    let patient_name = move |id: u32| Directory::new(&store.patients().read(), &[]).patient_name(id);

    let mark_read = move |reminder_id: u32| {
        spawn_local(async move {
            match api::set_reminder_read(reminder_id, true).await {
                Ok(()) => {
                    set_notice.set(Notice::success("Reminder marked as read"));
                    load();
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to update reminder"))),
            }
        });
    };

    let remove = move |reminder_id: u32| {
        spawn_local(async move {
            match api::delete_reminder(reminder_id).await {
                Ok(()) => {
                    set_notice.set(Notice::success("Reminder deleted successfully"));
                    reminders.update(|list| list.retain(|r| r.reminder_id != reminder_id));
                }
                Err(err) => set_notice.set(Notice::error(
                    err.user_message("Unable to delete reminder. Please try again later."),
                )),
            }
        });
    };

    let create = move |_| {
        let Some(current) = draft.get() else {
            return;
        };
        let reminder = match validate_reminder(&current) {
            Ok(reminder) => reminder,
            Err(message) => {
                set_notice.set(Notice::error(message));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = api::create_reminder(&reminder).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    set_notice.set(Notice::success("Reminder created successfully"));
                    draft.set(None);
                    load();
                }
                Err(err) => set_notice.set(Notice::error(
                    err.user_message("Unable to create reminder. Please try again later."),
                )),
            }
        });
    };

    let edit = move |apply: fn(&mut ReminderDraft, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| {
                if let Some(d) = d {
                    apply(d, value);
                }
            });
        }
    };
    let draft_value = move |read: fn(&ReminderDraft) -> String| {
        move || draft.with(|d| d.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class="messages-reminders">
            <div class="section-header">
                <h1>"Messages & Reminders"</h1>
                <button class="btn btn-primary" on:click=move |_| draft.set(Some(ReminderDraft::default()))>
                    "+ New Reminder"
                </button>
            </div>
            <NoticeBanner notice=notice />
            <div class="reminder-stats">
                <div class="stat-card">
                    <span class="stat-number">{move || reminders.with(Vec::len)}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{move || unread.get()}</span>
                    <span class="stat-label">"Unread"</span>
                </div>
            </div>
            <input
                type="text"
                class="search-input"
                placeholder="Search reminders..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="no-reminders">"No reminders found."</p> }
            >
                <div class="reminders-list">
                    <For
                        each=move || visible.get()
                        key=|r: &Reminder| (r.reminder_id, r.is_read)
                        let:reminder
                    >
                        {
                            let id = reminder.reminder_id;
                            let read = reminder.is_read;
                            view! {
                                <div class=if read { "reminder-card read" } else { "reminder-card unread" }>
                                    <div class="reminder-header">
                                        <span class="reminder-patient">{patient_name(reminder.patient_id)}</span>
                                        <span class="reminder-type">{reminder.reminder_type.clone().unwrap_or_default()}</span>
                                        <span class="reminder-date">
                                            {reminder.preferred_date_time.as_deref().map(format_date_time).unwrap_or_default()}
                                        </span>
                                    </div>
                                    <p class="reminder-message">{reminder.message.clone()}</p>
                                    <div class="reminder-actions">
                                        <span class="read-status">{if read { "Read" } else { "Unread" }}</span>
                                        <Show when=move || !read>
                                            <button class="btn btn-secondary" on:click=move |_| mark_read(id)>"Mark as Read"</button>
                                        </Show>
                                        <DeleteConfirmButton on_confirm=move |_| remove(id) />
                                    </div>
                                </div>
                            }
                        }
                    </For>
                </div>
            </Show>

            <Show when=move || draft.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| draft.set(None)>
                    <div class="reminder-modal" on:click=|ev| ev.stop_propagation()>
                        <h3>"Create Reminder"</h3>
                        <div class="form-group">
                            <label>"Patient *"</label>
                            <select on:change=move |ev| {
                                let id = event_target_value(&ev).parse::<u32>().ok();
                                draft.update(|d| if let Some(d) = d { d.patient_id = id });
                            }>
                                <option value="">"Select Patient"</option>
                                {move || store.patients().get().into_iter().map(|p| view! {
                                    <option value=p.patient_id.to_string()>{format!("{} {}", p.first_name, p.last_name)}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Type"</label>
                            <select
                                prop:value=draft_value(|d| d.reminder_type.clone())
                                on:change=edit(|d, v| d.reminder_type = v)
                            >
                                {REMINDER_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                            </select>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Date *"</label>
                                <input type="date" prop:value=draft_value(|d| d.date.clone()) on:input=edit(|d, v| d.date = v) />
                            </div>
                            <div class="form-group">
                                <label>"Time *"</label>
                                <input type="time" prop:value=draft_value(|d| d.time.clone()) on:input=edit(|d, v| d.time = v) />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Message *"</label>
                            <textarea rows="4" prop:value=draft_value(|d| d.message.clone()) on:input=edit(|d, v| d.message = v) />
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" disabled=move || saving.get() on:click=create>
                                {move || if saving.get() { "Creating..." } else { "Create Reminder" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
