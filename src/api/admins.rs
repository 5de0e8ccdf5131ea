//! Administrator profile

use reqwest::Method;

use super::{get_json, send_json, ApiResult};
use crate::models::{Admin, PersonForm};

pub async fn get_admin(admin_id: u32) -> ApiResult<Admin> {
    get_json(&format!("admins/{}", admin_id)).await
}

pub async fn update_admin(admin_id: u32, form: &PersonForm) -> ApiResult<()> {
    send_json(Method::PUT, &format!("admins/{}", admin_id), &form.for_update()).await
}
