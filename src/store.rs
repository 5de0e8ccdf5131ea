//! Dashboard Data Store
//!
//! Lists fetched by a dashboard, held in a reactive_stores store so each
//! section re-renders only for the fields it reads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ApiError, ApiResult};
use crate::models::{AcceptedAppointment, Appointment, MedicalService, Patient, StaffMember};

/// Records shared between the sections of one dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct ClinicState {
    pub services: Vec<MedicalService>,
    pub patients: Vec<Patient>,
    pub staff: Vec<StaffMember>,
    /// All appointment requests
    pub appointments: Vec<Appointment>,
    /// Accepted appointments, attended or not
    pub accepted: Vec<AcceptedAppointment>,
    /// Last load failure, shown as a banner
    pub error: Option<String>,
    pub loading: bool,
}

pub type ClinicStore = Store<ClinicState>;

/// Get the clinic store from context
pub fn use_clinic_store() -> ClinicStore {
    expect_context::<ClinicStore>()
}

// ========================
// Loading
// ========================

fn keep<T>(result: ApiResult<T>, failure: &mut Option<ApiError>) -> Option<T> {
    match result {
        Ok(list) => Some(list),
        Err(err) => {
            log::error!("dashboard load failed: {}", err);
            failure.get_or_insert(err);
            None
        }
    }
}

/// Fetch the lists every staff and admin section reads
pub async fn load_clinic_data(store: ClinicStore) {
    *store.loading().write() = true;
    let (services, patients, appointments, accepted) = futures::join!(
        api::list_services(),
        api::list_patients(),
        api::list_appointments(),
        api::list_accepted(),
    );
    let mut failure = None;
    if let Some(list) = keep(services, &mut failure) {
        *store.services().write() = list;
    }
    if let Some(list) = keep(patients, &mut failure) {
        *store.patients().write() = list;
    }
    if let Some(list) = keep(appointments, &mut failure) {
        *store.appointments().write() = list;
    }
    if let Some(list) = keep(accepted, &mut failure) {
        *store.accepted().write() = list;
    }
    *store.error().write() = failure.map(|err| err.user_message("Failed to load clinic data"));
    *store.loading().write() = false;
}

pub async fn reload_appointments(store: ClinicStore) {
    let (appointments, accepted) = futures::join!(api::list_appointments(), api::list_accepted());
    let mut failure = None;
    if let Some(list) = keep(appointments, &mut failure) {
        *store.appointments().write() = list;
    }
    if let Some(list) = keep(accepted, &mut failure) {
        *store.accepted().write() = list;
    }
}

pub async fn reload_patients(store: ClinicStore) {
    match api::list_patients().await {
        Ok(list) => *store.patients().write() = list,
        Err(err) => log::error!("failed to reload patients: {}", err),
    }
}

pub async fn reload_services(store: ClinicStore) {
    match api::list_services().await {
        Ok(list) => *store.services().write() = list,
        Err(err) => log::error!("failed to reload services: {}", err),
    }
}

pub async fn reload_staff(store: ClinicStore) {
    match api::list_staff().await {
        Ok(list) => *store.staff().write() = list,
        Err(err) => log::error!("failed to reload staff: {}", err),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Update a service in the store by ID, or add it
pub fn store_upsert_service(store: &ClinicStore, service: MedicalService) {
    let field = store.services();
    let mut services = field.write();
    match services.iter_mut().find(|s| s.service_id == service.service_id) {
        Some(existing) => *existing = service,
        None => services.push(service),
    }
}

pub fn store_remove_service(store: &ClinicStore, service_id: u32) {
    store.services().write().retain(|s| s.service_id != service_id);
}

pub fn store_remove_staff(store: &ClinicStore, staff_id: u32) {
    store.staff().write().retain(|s| s.staff_id != staff_id);
}

/// Remove an appointment request by ID
pub fn store_remove_appointment(store: &ClinicStore, appointment_id: u32) {
    store
        .appointments()
        .write()
        .retain(|a| a.appointment_id != appointment_id);
}

/// Flag an accepted appointment as attended
pub fn store_mark_attended(store: &ClinicStore, accepted_id: u32) {
    let field = store.accepted();
    let mut accepted = field.write();
    if let Some(record) = accepted.iter_mut().find(|a| a.accepted_appointment_id == accepted_id) {
        record.is_attended = true;
    }
}
