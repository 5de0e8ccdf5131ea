//! Patient accounts

use reqwest::Method;

use super::{get_json, send_json, ApiResult};
use crate::models::{Patient, PersonForm, WalkInRegistration};

pub async fn list_patients() -> ApiResult<Vec<Patient>> {
    get_json("patients").await
}

/// Registration body excludes the confirmation and terms fields by construction
pub async fn register_patient(form: &PersonForm) -> ApiResult<()> {
    send_json(Method::POST, "patients", form).await
}

pub async fn register_walk_in(registration: &WalkInRegistration) -> ApiResult<()> {
    send_json(Method::POST, "patients", registration).await
}

pub async fn update_patient(patient_id: u32, form: &PersonForm) -> ApiResult<()> {
    send_json(Method::PUT, &format!("patients/{}", patient_id), &form.for_update()).await
}
