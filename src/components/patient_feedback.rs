//! Patient Feedback Section
//!
//! Star rating form plus the patient's own feedback history.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::format_date;
use crate::models::{Feedback, FeedbackInput};
use crate::validation::validate_feedback;

const DEFAULT_RATING: u8 = 5;

fn stars(rating: u8) -> String {
    (1..=5u8).map(|n| if n <= rating { '★' } else { '☆' }).collect()
}

#[component]
pub fn PatientFeedback(patient_id: u32) -> impl IntoView {
    let history = RwSignal::new(Vec::<Feedback>::new());
    let (rating, set_rating) = signal(DEFAULT_RATING);
    let (comment, set_comment) = signal(String::new());
    let (anonymous, set_anonymous) = signal(false);
    // Feedback being edited; `None` while composing a new one
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (submitting, set_submitting) = signal(false);

    let load = move || {
        spawn_local(async move {
            match api::list_patient_feedback(patient_id).await {
                Ok(list) => history.set(list),
                Err(err) => log::error!("failed to load feedback: {}", err),
            }
        });
    };
    load();

    let reset_form = move || {
        set_rating.set(DEFAULT_RATING);
        set_comment.set(String::new());
        set_anonymous.set(false);
        set_editing.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment.get();
        if let Err(message) = validate_feedback(&text) {
            set_notice.set(Notice::error(message));
            return;
        }
        let input = FeedbackInput {
            patient_id,
            rating: rating.get(),
            comment: text.trim().to_string(),
            is_anonymous: anonymous.get(),
        };
        let target = editing.get();
        set_submitting.set(true);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_feedback(id, &input).await,
                None => api::create_feedback(&input).await,
            };
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    set_notice.set(Notice::success(if target.is_some() {
                        "Feedback updated successfully!"
                    } else {
                        "Feedback submitted successfully!"
                    }));
                    reset_form();
                    load();
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to submit feedback"))),
            }
        });
    };

    let remove = move |feedback_id: u32| {
        spawn_local(async move {
            match api::delete_feedback(feedback_id).await {
                Ok(()) => {
                    set_notice.set(Notice::success("Feedback deleted successfully"));
                    if editing.get_untracked() == Some(feedback_id) {
                        reset_form();
                    }
                    load();
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to delete feedback"))),
            }
        });
    };

    view! {
        <div class="feedback-container">
            <div class="feedback-header">
                <h1>"Feedback"</h1>
                <p>"Tell us about your experience at the clinic."</p>
            </div>
            <NoticeBanner notice=notice />

            <form class="feedback-form" on:submit=submit>
                <h2>{move || if editing.get().is_some() { "Edit Feedback" } else { "Share Your Feedback" }}</h2>
                <div class="form-group">
                    <label>"Rating *"</label>
                    <div class="star-rating">
                        {(1..=5u8).map(|n| view! {
                            <button
                                type="button"
                                class={move || if n <= rating.get() { "star filled" } else { "star" }}
                                on:click=move |_| set_rating.set(n)
                            >
                                "★"
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                <div class="form-group">
                    <label for="comment">"Comment *"</label>
                    <textarea
                        id="comment"
                        rows="4"
                        placeholder="Share your thoughts..."
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    />
                </div>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || anonymous.get()
                        on:change=move |ev| set_anonymous.set(event_target_checked(&ev))
                    />
                    "Submit anonymously"
                </label>
                <div class="form-actions">
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="btn btn-secondary" on:click=move |_| reset_form()>
                            "Cancel Edit"
                        </button>
                    </Show>
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || match (submitting.get(), editing.get().is_some()) {
                            (true, _) => "Submitting...",
                            (false, true) => "Update Feedback",
                            (false, false) => "Submit Feedback",
                        }}
                    </button>
                </div>
            </form>

            <div class="feedback-history">
                <h2>"My Feedback"</h2>
                <Show
                    when=move || history.with(|h| !h.is_empty())
                    fallback=|| view! { <p class="no-feedback">"You haven't submitted any feedback yet."</p> }
                >
                    <For
                        each=move || history.get()
                        key=|f: &Feedback| (f.feedback_id, f.updated_at.clone())
                        let:entry
                    >
                        {
                            let id = entry.feedback_id;
                            let anonymous_entry = entry.is_anonymous;
                            let picked = entry.clone();
                            view! {
                                <div class="feedback-card">
                                    <div class="feedback-card-header">
                                        <span class="feedback-stars">{stars(entry.rating)}</span>
                                        <Show when=move || anonymous_entry>
                                            <span class="anonymous-badge">"Anonymous"</span>
                                        </Show>
                                        <span class="feedback-date">
                                            {entry.created_at.as_deref().map(format_date).unwrap_or_default()}
                                        </span>
                                    </div>
                                    <p class="feedback-comment">{entry.comment.clone()}</p>
                                    <div class="feedback-actions">
                                        <button
                                            class="btn btn-edit"
                                            on:click=move |_| {
                                                set_rating.set(picked.rating);
                                                set_comment.set(picked.comment.clone());
                                                set_anonymous.set(picked.is_anonymous);
                                                set_editing.set(Some(picked.feedback_id));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_| remove(id) />
                                    </div>
                                </div>
                            }
                        }
                    </For>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stars_fill_up_to_rating() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
