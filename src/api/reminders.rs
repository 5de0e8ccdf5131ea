//! Reminders sent by staff to patients

use reqwest::Method;

use super::{get_json, send_empty, send_json, ApiResult};
use crate::models::{NewReminder, Reminder};

pub async fn list_reminders() -> ApiResult<Vec<Reminder>> {
    get_json("reminders").await
}

pub async fn list_patient_reminders(patient_id: u32) -> ApiResult<Vec<Reminder>> {
    get_json(&format!("reminders/patient/{}", patient_id)).await
}

pub async fn create_reminder(reminder: &NewReminder) -> ApiResult<()> {
    send_json(Method::POST, "reminders", reminder).await
}

pub async fn set_reminder_read(reminder_id: u32, read: bool) -> ApiResult<()> {
    let action = if read { "read" } else { "unread" };
    send_empty(Method::PUT, &format!("reminders/{}/{}", reminder_id, action)).await
}

pub async fn delete_reminder(reminder_id: u32) -> ApiResult<()> {
    send_empty(Method::DELETE, &format!("reminders/{}", reminder_id)).await
}
