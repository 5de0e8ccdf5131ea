//! Appointments and accepted appointments

use reqwest::Method;

use super::{get_json, send_empty, send_json, ApiResult};
use crate::models::{AcceptedAppointment, Appointment, AppointmentUpdate, NewAppointment};

// ========================
// Appointment Requests
// ========================

pub async fn list_appointments() -> ApiResult<Vec<Appointment>> {
    get_json("appointments").await
}

pub async fn list_patient_appointments(patient_id: u32) -> ApiResult<Vec<Appointment>> {
    get_json(&format!("appointments/patient/{}", patient_id)).await
}

pub async fn book_appointment(appointment: &NewAppointment) -> ApiResult<()> {
    send_json(Method::POST, "appointments", appointment).await
}

/// Patient edit and staff reschedule share this endpoint
pub async fn update_appointment(appointment_id: u32, update: &AppointmentUpdate) -> ApiResult<()> {
    send_json(Method::PUT, &format!("appointments/{}", appointment_id), update).await
}

pub async fn delete_appointment(appointment_id: u32) -> ApiResult<()> {
    send_empty(Method::DELETE, &format!("appointments/{}", appointment_id)).await
}

// ========================
// Accepted Appointments
// ========================

pub async fn list_accepted() -> ApiResult<Vec<AcceptedAppointment>> {
    get_json("accepted-appointments").await
}

pub async fn list_patient_accepted(patient_id: u32) -> ApiResult<Vec<AcceptedAppointment>> {
    get_json(&format!("accepted-appointments/patient/{}", patient_id)).await
}

pub async fn list_attended() -> ApiResult<Vec<AcceptedAppointment>> {
    get_json("accepted-appointments/attended").await
}

pub async fn accept_appointment(appointment_id: u32) -> ApiResult<()> {
    send_empty(Method::POST, &format!("accepted-appointments/accept/{}", appointment_id)).await
}

pub async fn mark_attended(accepted_appointment_id: u32) -> ApiResult<()> {
    send_empty(
        Method::PUT,
        &format!("accepted-appointments/{}/attend", accepted_appointment_id),
    )
    .await
}
