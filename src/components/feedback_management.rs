//! Feedback Management Section

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::{
    feedback_stats, filter_feedback, format_date, Anonymity, Directory, FeedbackFilter, FeedbackSort,
};
use crate::models::Feedback;
use crate::store::{use_clinic_store, ClinicStateStoreFields};

const PREVIEW_CHARS: usize = 60;

fn preview(comment: &str) -> String {
    if comment.chars().count() > PREVIEW_CHARS {
        let cut: String = comment.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        comment.to_string()
    }
}

fn anonymity_value(anonymity: Anonymity) -> &'static str {
    match anonymity {
        Anonymity::All => "All",
        Anonymity::Public => "Public",
        Anonymity::Anonymous => "Anonymous",
    }
}

#[component]
pub fn FeedbackManagement() -> impl IntoView {
    let store = use_clinic_store();
    let feedback = RwSignal::new(Vec::<Feedback>::new());
    let filter = RwSignal::new(FeedbackFilter::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_feedback().await {
            Ok(list) => feedback.set(list),
            Err(err) => {
                log::error!("failed to load feedback: {}", err);
                set_notice.set(Notice::error("Error fetching feedbacks"));
            }
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let patients = store.patients().read();
        feedback.with(|f| filter.with(|flt| filter_feedback(f, &patients, flt)))
    });
    let stats = Memo::new(move |_| feedback.with(|f| feedback_stats(f)));

    let author = move |entry: &Feedback| {
        if entry.is_anonymous {
            "Anonymous".to_string()
        } else {
            Directory::new(&store.patients().read(), &[]).patient_name(entry.patient_id)
        }
    };

    let remove = move |feedback_id: u32| {
        spawn_local(async move {
            match api::delete_feedback(feedback_id).await {
                Ok(()) => {
                    feedback.update(|list| list.retain(|f| f.feedback_id != feedback_id));
                    set_notice.set(Notice::success("Feedback deleted successfully"));
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to delete feedback"))),
            }
        });
    };

    view! {
        <div class="feedback-management">
            <div class="section-header">
                <h1>"Patient Feedback"</h1>
            </div>

            <div class="feedback-stats">
                <div class="stat-card">
                    <span class="stat-number">{move || stats.get().average_label()}</span>
                    <span class="stat-label">"Average Rating"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number">{move || stats.get().total}</span>
                    <span class="stat-label">"Total Feedback"</span>
                </div>
                <div class="rating-distribution">
                    {(1..=5usize).rev().map(|stars| view! {
                        <div class="distribution-row">
                            <span>{format!("{} ★", stars)}</span>
                            <span>{move || stats.get().distribution[stars - 1]}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="section-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search feedback by patient name or comment..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let sort = FeedbackSort::ALL.into_iter().find(|s| s.label() == value).unwrap_or_default();
                        filter.update(|f| f.sort = sort);
                    }
                >
                    {FeedbackSort::ALL.into_iter().map(|s| view! { <option value=s.label()>{s.label()}</option> }).collect_view()}
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let rating = event_target_value(&ev).parse::<u8>().ok();
                        filter.update(|f| f.rating = rating);
                    }
                >
                    <option value="All">"All Ratings"</option>
                    {(1..=5u8).rev().map(|n| view! {
                        <option value=n.to_string()>{if n == 1 { "1 Star".to_string() } else { format!("{} Stars", n) }}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let anonymity = [Anonymity::All, Anonymity::Public, Anonymity::Anonymous]
                            .into_iter()
                            .find(|a| anonymity_value(*a) == value)
                            .unwrap_or_default();
                        filter.update(|f| f.anonymity = anonymity);
                    }
                >
                    <option value="All">"All Feedback"</option>
                    <option value="Public">"Public Only"</option>
                    <option value="Anonymous">"Anonymous Only"</option>
                </select>
            </div>

            <NoticeBanner notice=notice />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading feedback..."</div> }
            >
                <table class="feedback-table">
                    <thead>
                        <tr>
                            <th>"Patient"</th>
                            <th>"Rating"</th>
                            <th>"Comment Preview"</th>
                            <th>"Type"</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|f: &Feedback| f.feedback_id
                            let:entry
                        >
                            {
                                let id = entry.feedback_id;
                                view! {
                                    <tr>
                                        <td>{author(&entry)}</td>
                                        <td>{format!("{}/5", entry.rating)}</td>
                                        <td>{preview(&entry.comment)}</td>
                                        <td>{if entry.is_anonymous { "Anonymous" } else { "Public" }}</td>
                                        <td>{entry.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                        <td><DeleteConfirmButton on_confirm=move |_| remove(id) /></td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="no-feedback">"No feedback found."</p>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preview_truncates_long_comments() {
        let long = "a".repeat(PREVIEW_CHARS + 10);
        assert_eq!(preview(&long), format!("{}...", "a".repeat(PREVIEW_CHARS)));
        assert_eq!(preview("Great service"), "Great service");
    }
}
