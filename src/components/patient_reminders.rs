//! Patient Reminders Section

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Notice, NoticeBanner};
use crate::listing::{filter_reminders, format_date_time, ReadFilter};
use crate::models::Reminder;

const FILTERS: [(ReadFilter, &str); 3] = [
    (ReadFilter::All, "All"),
    (ReadFilter::Unread, "Unread"),
    (ReadFilter::Read, "Read"),
];

#[component]
pub fn PatientReminders(patient_id: u32) -> impl IntoView {
    let reminders = RwSignal::new(Vec::<Reminder>::new());
    let (search, set_search) = signal(String::new());
    let (status, set_status) = signal(ReadFilter::All);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_patient_reminders(patient_id).await {
            Ok(list) => reminders.set(list),
            Err(err) => {
                log::error!("failed to load reminders: {}", err);
                set_notice.set(Notice::error(err.user_message("Failed to load reminders")));
            }
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| reminders.with(|r| filter_reminders(r, &search.get(), status.get())));
    let unread = Memo::new(move |_| reminders.with(|r| r.iter().filter(|x| !x.is_read).count()));

    let toggle_read = move |reminder_id: u32, read: bool| {
        spawn_local(async move {
            match api::set_reminder_read(reminder_id, read).await {
                Ok(()) => reminders.update(|list| {
                    if let Some(r) = list.iter_mut().find(|r| r.reminder_id == reminder_id) {
                        r.is_read = read;
                    }
                }),
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to update reminder"))),
            }
        });
    };

    view! {
        <div class="reminders-container">
            <div class="reminders-header">
                <h1>"Reminders"</h1>
                <span class="unread-count">{move || format!("{} unread", unread.get())}</span>
            </div>
            <NoticeBanner notice=notice />
            <div class="reminders-controls">
                <input
                    type="text"
                    placeholder="Search reminders..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="filter-buttons">
                    {FILTERS.into_iter().map(|(filter, label)| view! {
                        <button
                            class={move || if status.get() == filter { "filter-btn active" } else { "filter-btn" }}
                            on:click=move |_| set_status.set(filter)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading reminders..."</div> }
            >
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
                                            <span class="reminder-type">
                                                {reminder.reminder_type.clone().unwrap_or_else(|| "General".to_string())}
                                            </span>
                                            <span class="reminder-date">
                                                {reminder.preferred_date_time.as_deref().map(format_date_time).unwrap_or_default()}
                                            </span>
                                        </div>
                                        {reminder.service_name.clone().map(|name| view! {
                                            <p class="reminder-service"><strong>"Service: "</strong>{name}</p>
                                        })}
                                        <p class="reminder-message">{reminder.message.clone()}</p>
                                        <button class="btn btn-secondary" on:click=move |_| toggle_read(id, !read)>
                                            {if read { "Mark as Unread" } else { "Mark as Read" }}
                                        </button>
                                    </div>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
