//! Profile Settings Section
//!
//! Account form shared by all three dashboards. Saving updates the record on
//! the server and then the stored session, so a reload shows the new details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{self, ApiResult};
use crate::components::{Notice, NoticeBanner, PersonFields, ADDRESS_FIELDS, EMERGENCY_FIELDS, IDENTITY_FIELDS};
use crate::context::{use_router, RouterContext};
use crate::models::{AdminSession, PatientSession, Person, PersonForm, StaffSession};
use crate::session::Role;
use crate::validation::{validate_profile, FieldErrors};

fn stored_profile<T: Person + DeserializeOwned>(router: RouterContext, role: Role) -> Option<PersonForm> {
    router.restore_session::<T>(role).map(|record| record.to_form())
}

/// Merge the saved form into the stored session record
fn refresh_session<T: Person + Serialize + DeserializeOwned>(router: RouterContext, role: Role, form: &PersonForm) {
    if let Some(mut record) = router.restore_session::<T>(role) {
        record.apply_form(form);
        router.update_session(role, &record);
    }
}

fn account_id(router: RouterContext, role: Role) -> Option<u32> {
    match role {
        Role::Patient => router.restore_session::<PatientSession>(role).map(|p| p.patient_id),
        Role::Staff => router.restore_session::<StaffSession>(role).map(|s| s.staff_id),
        Role::Admin => router.restore_session::<AdminSession>(role).map(|a| a.admin_id),
    }
}

async fn save_profile(router: RouterContext, role: Role, id: u32, form: &PersonForm) -> ApiResult<()> {
    let body = form.for_update();
    match role {
        Role::Patient => {
            api::update_patient(id, &body).await?;
            refresh_session::<PatientSession>(router, role, form);
        }
        Role::Staff => {
            api::update_staff(id, &body).await?;
            refresh_session::<StaffSession>(router, role, form);
        }
        Role::Admin => {
            api::update_admin(id, &body).await?;
            refresh_session::<AdminSession>(router, role, form);
        }
    }
    Ok(())
}

#[component]
pub fn ProfileSettings(
    role: Role,
    #[prop(optional)] on_saved: Option<Callback<PersonForm>>,
) -> impl IntoView {
    let router = use_router();
    let initial = match role {
        Role::Patient => stored_profile::<PatientSession>(router, role),
        Role::Staff => stored_profile::<StaffSession>(router, role),
        Role::Admin => stored_profile::<AdminSession>(router, role),
    };
    let (Some(initial), Some(id)) = (initial, account_id(router, role)) else {
        return ().into_any();
    };

    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (saving, set_saving) = signal(false);

    // The admin record in storage may be stale; prefer the server copy
    if role == Role::Admin {
        spawn_local(async move {
            match api::get_admin(id).await {
                Ok(admin) => form.set(admin.to_form()),
                Err(err) => log::warn!("using stored admin profile: {}", err),
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        if let Err(found) = validate_profile(&current) {
            errors.set(found);
            set_notice.set(Notice::error("Please correct the highlighted fields"));
            return;
        }
        errors.set(FieldErrors::new());
        set_saving.set(true);
        spawn_local(async move {
            let result = save_profile(router, role, id, &current).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("{} profile {} updated", role.label(), id);
                    set_notice.set(Notice::success("Profile updated successfully!"));
                    if let Some(callback) = on_saved {
                        callback.run(current);
                    }
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to update profile"))),
            }
        });
    };

    view! {
        <div class="settings-container">
            <div class="settings-header">
                <h1>"Account Settings"</h1>
                <p>"Keep your contact details up to date."</p>
            </div>
            <NoticeBanner notice=notice />
            <form class="settings-form" on:submit=submit>
                <section class="form-section">
                    <h2>"Personal Information"</h2>
                    <PersonFields fields=IDENTITY_FIELDS form=form errors=errors disabled=saving />
                </section>
                <section class="form-section">
                    <h2>"Emergency Contact"</h2>
                    <PersonFields fields=EMERGENCY_FIELDS form=form errors=errors disabled=saving />
                </section>
                <section class="form-section">
                    <h2>"Address"</h2>
                    <PersonFields fields=ADDRESS_FIELDS form=form errors=errors disabled=saving />
                </section>
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
    .into_any()
}
