//! Person Fields Component
//!
//! Labelled inputs bound to a shared account form.

use leptos::prelude::*;

use crate::components::FieldError;
use crate::models::{PersonField, PersonForm};
use crate::validation::FieldErrors;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub const IDENTITY_FIELDS: &[PersonField] = &[
    PersonField::FirstName,
    PersonField::LastName,
    PersonField::Email,
    PersonField::Phone,
];

pub const EMERGENCY_FIELDS: &[PersonField] = &[
    PersonField::EmergencyContactName,
    PersonField::EmergencyContactRelationship,
    PersonField::EmergencyContactPhone1,
    PersonField::EmergencyContactPhone2,
];

pub const ADDRESS_FIELDS: &[PersonField] = &[
    PersonField::StreetAddress,
    PersonField::Barangay,
    PersonField::Municipality,
];

/// One input per field; editing a field clears its error
#[component]
pub fn PersonFields(
    fields: &'static [PersonField],
    form: RwSignal<PersonForm>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    fields
        .iter()
        .map(|&field| {
            let key = field.key();
            let error = Signal::derive(move || errors.with(|e| e.get(key).map(str::to_string)));
            let input = if field == PersonField::Gender {
                view! {
                    <select
                        id=key
                        prop:value=move || form.with(|f| field.get(f).to_string())
                        disabled=move || disabled.get()
                        on:change=move |ev| {
                            form.update(|f| field.set(f, event_target_value(&ev)));
                            errors.update(|e| e.remove(key));
                        }
                    >
                        <option value="">"Select Gender"</option>
                        {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                    </select>
                }
                .into_any()
            } else {
                view! {
                    <input
                        id=key
                        type=field.input_type()
                        class={move || if error.with(Option::is_some) { "error" } else { "" }}
                        prop:value=move || form.with(|f| field.get(f).to_string())
                        disabled=move || disabled.get()
                        on:input=move |ev| {
                            form.update(|f| field.set(f, event_target_value(&ev)));
                            errors.update(|e| e.remove(key));
                        }
                    />
                }
                .into_any()
            };
            view! {
                <div class="form-group">
                    <label for=key>{field.label()}</label>
                    {input}
                    <FieldError message=error />
                </div>
            }
        })
        .collect_view()
}
