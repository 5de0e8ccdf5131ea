//! Staff Registration Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    Notice, NoticeBanner, PersonFields, ADDRESS_FIELDS, EMERGENCY_FIELDS, IDENTITY_FIELDS,
};
use crate::config::CLINIC_NAME;
use crate::context::use_router;
use crate::models::{PersonField, PersonForm};
use crate::route::Page;
use crate::validation::{validate_staff_registration, FieldErrors};

const ACCOUNT_FIELDS: &[PersonField] = &[PersonField::Password, PersonField::DateOfBirth];

/// Registers a staff account; the form resets after each success
#[component]
pub fn StaffRegister() -> impl IntoView {
    let router = use_router();
    let form = RwSignal::new(PersonForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = form.get();
        if let Err(found) = validate_staff_registration(&body) {
            errors.set(found);
            set_notice.set(Notice::error("Please correct the errors below"));
            return;
        }
        errors.set(FieldErrors::new());
        set_notice.set(None);
        set_loading.set(true);
        spawn_local(async move {
            match api::register_staff(&body).await {
                Ok(()) => {
                    log::info!("staff member registered");
                    set_notice.set(Notice::success("Staff member registered successfully!"));
                    form.set(PersonForm::default());
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Registration failed"))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="staff-register-container">
            <div class="staff-register-form">
                <div class="form-header">
                    <button class="back-button" on:click=move |_| router.navigate(Page::Home)>"← Back to Home"</button>
                    <h2>"Staff Registration"</h2>
                    <p>{format!("Register new staff member for {}", CLINIC_NAME)}</p>
                </div>
                <NoticeBanner notice=notice />
                <form on:submit=submit>
                    <fieldset>
                        <legend>"Personal Information"</legend>
                        <PersonFields fields=IDENTITY_FIELDS form=form errors=errors />
                        <PersonFields fields=ACCOUNT_FIELDS form=form errors=errors />
                    </fieldset>
                    <fieldset>
                        <legend>"Emergency Contact"</legend>
                        <PersonFields fields=EMERGENCY_FIELDS form=form errors=errors />
                    </fieldset>
                    <fieldset>
                        <legend>"Address"</legend>
                        <PersonFields fields=ADDRESS_FIELDS form=form errors=errors />
                    </fieldset>
                    <button type="submit" class="submit-btn" disabled=move || loading.get()>
                        {move || if loading.get() { "Registering..." } else { "Register Staff Member" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
