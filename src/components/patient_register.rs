//! Patient Registration Component
//!
//! Four-step sign-up wizard. Each step is validated before moving on.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{
    FieldError, Notice, NoticeBanner, PersonFields, ADDRESS_FIELDS, EMERGENCY_FIELDS,
};
use crate::config::{CLINIC_NAME, REGISTER_REDIRECT_DELAY_MS};
use crate::context::use_router;
use crate::models::{PersonField, PersonForm};
use crate::route::Page;
use crate::validation::{validate_register_step, FieldErrors, PatientRegistration, RegisterStep};

const PERSONAL_FIELDS: &[PersonField] = &[
    PersonField::FirstName,
    PersonField::LastName,
    PersonField::Email,
    PersonField::Phone,
    PersonField::DateOfBirth,
    PersonField::Gender,
];

const PASSWORD_FIELDS: &[PersonField] = &[PersonField::Password];

fn step_icon(step: RegisterStep) -> &'static str {
    match step {
        RegisterStep::Personal => "👤",
        RegisterStep::Emergency => "📞",
        RegisterStep::Address => "🏠",
        RegisterStep::Terms => "📋",
    }
}

#[component]
pub fn PatientRegister() -> impl IntoView {
    let router = use_router();

    let form = RwSignal::new(PersonForm::default());
    let confirm_password = RwSignal::new(String::new());
    let agree_to_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let step = RwSignal::new(RegisterStep::Personal);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(false);

    let registration = move || PatientRegistration {
        form: form.get(),
        confirm_password: confirm_password.get(),
        agree_to_terms: agree_to_terms.get(),
    };

    let check_step = move |current: RegisterStep| match validate_register_step(current, &registration()) {
        Ok(()) => {
            errors.set(FieldErrors::new());
            true
        }
        Err(found) => {
            errors.set(found);
            set_notice.set(Notice::error("Please correct the errors below"));
            false
        }
    };

    let next = move |_| {
        let current = step.get();
        if check_step(current) {
            set_notice.set(None);
            if let Some(following) = current.next() {
                step.set(following);
            }
        }
    };

    let previous = move |_| {
        set_notice.set(None);
        if let Some(prior) = step.get().previous() {
            step.set(prior);
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(failing) = RegisterStep::ALL.into_iter().find(|s| !check_step(*s)) {
            step.set(failing);
            return;
        }
        set_notice.set(None);
        set_loading.set(true);
        let body = form.get();
        spawn_local(async move {
            let result = api::register_patient(&body).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("patient registered");
                    set_notice.set(Notice::success(format!(
                        "Registration successful! Welcome to {}.",
                        CLINIC_NAME
                    )));
                    TimeoutFuture::new(REGISTER_REDIRECT_DELAY_MS).await;
                    router.navigate(Page::Home);
                }
                Err(ApiError::Network(err)) => {
                    log::error!("registration request failed: {}", err);
                    set_notice.set(Notice::error(
                        "Unable to register. Please check your connection and try again.",
                    ));
                }
                Err(err) => {
                    set_notice.set(Notice::error(
                        err.user_message("Registration failed. Please try again."),
                    ));
                }
            }
        });
    };

    let error_of = move |key: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(key).map(str::to_string)))
    };

    let step_content = move || match step.get() {
        RegisterStep::Personal => view! {
            <p class="step-hint">"Please provide your basic information"</p>
            <PersonFields fields=PERSONAL_FIELDS form=form errors=errors />
            <PersonFields fields=PASSWORD_FIELDS form=form errors=errors />
            <div class="form-group">
                <label for="confirmPassword">"Confirm Password"</label>
                <input
                    id="confirmPassword"
                    type="password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        confirm_password.set(event_target_value(&ev));
                        errors.update(|e| e.remove("confirmPassword"));
                    }
                />
                <FieldError message=error_of("confirmPassword") />
            </div>
        }
        .into_any(),
        RegisterStep::Emergency => view! {
            <p class="step-hint">"Who should we contact in case of emergency?"</p>
            <PersonFields fields=EMERGENCY_FIELDS form=form errors=errors />
        }
        .into_any(),
        RegisterStep::Address => view! {
            <p class="step-hint">"Where do you currently live?"</p>
            <PersonFields fields=ADDRESS_FIELDS form=form errors=errors />
        }
        .into_any(),
        RegisterStep::Terms => {
            let summary = form.get();
            view! {
                <div class="review-summary">
                    <p><strong>"Name: "</strong>{format!("{} {}", summary.first_name, summary.last_name)}</p>
                    <p><strong>"Email: "</strong>{summary.email.clone()}</p>
                    <p><strong>"Phone: "</strong>{summary.phone.clone()}</p>
                    <p><strong>"Emergency Contact: "</strong>{summary.emergency_contact_name.clone()}</p>
                    <p>
                        <strong>"Address: "</strong>
                        {format!("{}, {}, {}", summary.street_address, summary.barangay, summary.municipality)}
                    </p>
                </div>
                <div class="terms-section">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_to_terms.get()
                            on:change=move |ev| {
                                agree_to_terms.set(event_target_checked(&ev));
                                errors.update(|e| e.remove("agreeToTerms"));
                            }
                        />
                        "I agree to the Terms and Conditions and Privacy Policy"
                    </label>
                    <FieldError message=error_of("agreeToTerms") />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="register-page">
            <button class="back-button" on:click=move |_| router.navigate(Page::Home)>"← Back to Home"</button>
            <div class="register-container">
                <h2>"Patient Registration"</h2>
                <div class="progress-steps">
                    {RegisterStep::ALL.into_iter().map(|s| view! {
                        <div class={move || if step.get().number() >= s.number() { "progress-step active" } else { "progress-step" }}>
                            <div class="step-circle">
                                {move || if step.get().number() > s.number() { "✓" } else { step_icon(s) }}
                            </div>
                            <div class="step-info">
                                <span class="step-number">{format!("Step {}", s.number())}</span>
                                <span class="step-title">{s.title()}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
                <NoticeBanner notice=notice />
                <form class="register-form" on:submit=submit>
                    <h3>{move || step.get().title()}</h3>
                    {step_content}
                    <div class="form-navigation">
                        <Show when=move || step.get().previous().is_some()>
                            <button type="button" class="btn btn-secondary" on:click=previous>"Previous"</button>
                        </Show>
                        <Show
                            when=move || step.get().next().is_some()
                            fallback=move || view! {
                                <button type="submit" class="btn btn-success" disabled=move || loading.get()>
                                    {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                                </button>
                            }
                        >
                            <button type="button" class="btn btn-primary" on:click=next>"Next"</button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
