//! Staff accounts

use reqwest::Method;

use super::{get_json, send_empty, send_json, ApiResult};
use crate::models::{PersonForm, StaffMember};

pub async fn list_staff() -> ApiResult<Vec<StaffMember>> {
    get_json("staff").await
}

pub async fn register_staff(form: &PersonForm) -> ApiResult<()> {
    send_json(Method::POST, "staff", form).await
}

/// A blank password is left out so the stored one is kept
pub async fn update_staff(staff_id: u32, form: &PersonForm) -> ApiResult<()> {
    send_json(Method::PUT, &format!("staff/{}", staff_id), form).await
}

pub async fn delete_staff(staff_id: u32) -> ApiResult<()> {
    send_empty(Method::DELETE, &format!("staff/{}", staff_id)).await
}
