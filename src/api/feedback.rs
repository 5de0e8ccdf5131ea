//! Patient feedback

use reqwest::Method;

use super::{get_json, get_list_or_empty, send_empty, send_json, ApiResult};
use crate::models::{Feedback, FeedbackInput};

pub async fn list_feedback() -> ApiResult<Vec<Feedback>> {
    get_json("feedback").await
}

/// 404 means the patient has not left feedback yet
pub async fn list_patient_feedback(patient_id: u32) -> ApiResult<Vec<Feedback>> {
    get_list_or_empty(&format!("feedback/patient/{}", patient_id)).await
}

pub async fn create_feedback(input: &FeedbackInput) -> ApiResult<()> {
    send_json(Method::POST, "feedback", input).await
}

pub async fn update_feedback(feedback_id: u32, input: &FeedbackInput) -> ApiResult<()> {
    send_json(Method::PUT, &format!("feedback/{}", feedback_id), input).await
}

pub async fn delete_feedback(feedback_id: u32) -> ApiResult<()> {
    send_empty(Method::DELETE, &format!("feedback/{}", feedback_id)).await
}
