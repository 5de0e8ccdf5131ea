//! Medical services catalogue

use reqwest::Method;

use super::{get_json, send_empty, send_json, ApiResult};
use crate::models::{MedicalService, ServiceInput};

pub async fn list_services() -> ApiResult<Vec<MedicalService>> {
    get_json("medical-services").await
}

pub async fn create_service(input: &ServiceInput) -> ApiResult<()> {
    send_json(Method::POST, "medical-services", input).await
}

pub async fn update_service(service_id: u32, input: &ServiceInput) -> ApiResult<()> {
    send_json(Method::PUT, &format!("medical-services/{}", service_id), input).await
}

pub async fn delete_service(service_id: u32) -> ApiResult<()> {
    send_empty(Method::DELETE, &format!("medical-services/{}", service_id)).await
}
