//! Frontend Models
//!
//! Records exchanged with the clinic API and kept in session storage.

use serde::{Deserialize, Deserializer, Serialize};

/// Patient account (also the stored patient session)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub patient_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub role: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_phone1: Option<String>,
    pub emergency_contact_phone2: Option<String>,
    pub street_address: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub created_at: Option<String>,
}

/// Staff account (also the stored staff session)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub staff_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_phone1: Option<String>,
    pub emergency_contact_phone2: Option<String>,
    pub street_address: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub created_at: Option<String>,
}

/// Administrator account (also the stored admin session)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub admin_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_phone1: Option<String>,
    pub emergency_contact_phone2: Option<String>,
    pub street_address: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
}

pub type PatientSession = Patient;
pub type StaffSession = StaffMember;
pub type AdminSession = Admin;

/// Shared behaviour of the three account records
pub trait Person {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn initials(&self) -> String {
        self.first_name()
            .chars()
            .take(1)
            .chain(self.last_name().chars().take(1))
            .collect()
    }

    /// Editable form prefilled from this record
    fn to_form(&self) -> PersonForm;

    /// Merge a saved form back into the record
    fn apply_form(&mut self, form: &PersonForm);
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

macro_rules! impl_person {
    ($ty:ty) => {
        impl Person for $ty {
            fn first_name(&self) -> &str {
                &self.first_name
            }

            fn last_name(&self) -> &str {
                &self.last_name
            }

            fn to_form(&self) -> PersonForm {
                PersonForm {
                    first_name: self.first_name.clone(),
                    last_name: self.last_name.clone(),
                    email: self.email.clone(),
                    phone: self.phone.clone().unwrap_or_default(),
                    date_of_birth: self.date_of_birth.clone().unwrap_or_default(),
                    emergency_contact_name: self.emergency_contact_name.clone().unwrap_or_default(),
                    emergency_contact_relationship: self
                        .emergency_contact_relationship
                        .clone()
                        .unwrap_or_default(),
                    emergency_contact_phone1: self.emergency_contact_phone1.clone().unwrap_or_default(),
                    emergency_contact_phone2: self.emergency_contact_phone2.clone().unwrap_or_default(),
                    street_address: self.street_address.clone().unwrap_or_default(),
                    barangay: self.barangay.clone().unwrap_or_default(),
                    municipality: self.municipality.clone().unwrap_or_default(),
                    ..Default::default()
                }
            }

            fn apply_form(&mut self, form: &PersonForm) {
                self.first_name = form.first_name.clone();
                self.last_name = form.last_name.clone();
                self.email = form.email.clone();
                self.phone = non_empty(&form.phone);
                self.emergency_contact_name = non_empty(&form.emergency_contact_name);
                self.emergency_contact_relationship = non_empty(&form.emergency_contact_relationship);
                self.emergency_contact_phone1 = non_empty(&form.emergency_contact_phone1);
                self.emergency_contact_phone2 = non_empty(&form.emergency_contact_phone2);
                self.street_address = non_empty(&form.street_address);
                self.barangay = non_empty(&form.barangay);
                self.municipality = non_empty(&form.municipality);
            }
        }
    };
}

impl_person!(Patient);
impl_person!(StaffMember);
impl_person!(Admin);

/// Role the API stores for patients registered at the front desk
pub const WALK_IN_ROLE: &str = "Walkin";

impl Patient {
    pub fn is_walk_in(&self) -> bool {
        self.role.as_deref() == Some(WALK_IN_ROLE)
    }
}

/// Medical service offered by the clinic
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalService {
    pub service_id: u32,
    pub service_name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,
    pub description: Option<String>,
}

/// Appointment request made by a patient
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_id: u32,
    pub patient_id: u32,
    pub service_id: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub preferred_date_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symptom: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl Appointment {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }
}

/// Appointment accepted by staff
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedAppointment {
    pub accepted_appointment_id: u32,
    pub appointment_id: u32,
    pub patient_id: u32,
    pub service_id: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub preferred_date_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symptom: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_attended: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub feedback_id: u32,
    pub patient_id: u32,
    pub rating: u8,
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_anonymous: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub reminder_id: u32,
    pub patient_id: u32,
    pub reminder_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    pub preferred_date_time: Option<String>,
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_read: bool,
    pub created_at: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Account details as edited in registration and profile forms.
/// Blank optional fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gender: String,
    pub emergency_contact_name: String,
    pub emergency_contact_relationship: String,
    pub emergency_contact_phone1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub emergency_contact_phone2: String,
    pub street_address: String,
    pub barangay: String,
    pub municipality: String,
}

impl PersonForm {
    /// Profile updates never send the date of birth
    pub fn for_update(&self) -> PersonForm {
        PersonForm {
            date_of_birth: String::new(),
            ..self.clone()
        }
    }
}

/// Field of a [`PersonForm`], used to bind inputs and report errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    DateOfBirth,
    Gender,
    EmergencyContactName,
    EmergencyContactRelationship,
    EmergencyContactPhone1,
    EmergencyContactPhone2,
    StreetAddress,
    Barangay,
    Municipality,
}

impl PersonField {
    /// Wire name, also the key used in field error maps
    pub fn key(self) -> &'static str {
        match self {
            PersonField::FirstName => "firstName",
            PersonField::LastName => "lastName",
            PersonField::Email => "email",
            PersonField::Phone => "phone",
            PersonField::Password => "password",
            PersonField::DateOfBirth => "dateOfBirth",
            PersonField::Gender => "gender",
            PersonField::EmergencyContactName => "emergencyContactName",
            PersonField::EmergencyContactRelationship => "emergencyContactRelationship",
            PersonField::EmergencyContactPhone1 => "emergencyContactPhone1",
            PersonField::EmergencyContactPhone2 => "emergencyContactPhone2",
            PersonField::StreetAddress => "streetAddress",
            PersonField::Barangay => "barangay",
            PersonField::Municipality => "municipality",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PersonField::FirstName => "First Name",
            PersonField::LastName => "Last Name",
            PersonField::Email => "Email",
            PersonField::Phone => "Phone",
            PersonField::Password => "Password",
            PersonField::DateOfBirth => "Date of Birth",
            PersonField::Gender => "Gender",
            PersonField::EmergencyContactName => "Emergency Contact Name",
            PersonField::EmergencyContactRelationship => "Relationship",
            PersonField::EmergencyContactPhone1 => "Primary Phone",
            PersonField::EmergencyContactPhone2 => "Secondary Phone",
            PersonField::StreetAddress => "Street Address",
            PersonField::Barangay => "Barangay",
            PersonField::Municipality => "Municipality",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            PersonField::Email => "email",
            PersonField::Password => "password",
            PersonField::DateOfBirth => "date",
            PersonField::Phone
            | PersonField::EmergencyContactPhone1
            | PersonField::EmergencyContactPhone2 => "tel",
            _ => "text",
        }
    }

    pub fn get(self, form: &PersonForm) -> &str {
        match self {
            PersonField::FirstName => &form.first_name,
            PersonField::LastName => &form.last_name,
            PersonField::Email => &form.email,
            PersonField::Phone => &form.phone,
            PersonField::Password => &form.password,
            PersonField::DateOfBirth => &form.date_of_birth,
            PersonField::Gender => &form.gender,
            PersonField::EmergencyContactName => &form.emergency_contact_name,
            PersonField::EmergencyContactRelationship => &form.emergency_contact_relationship,
            PersonField::EmergencyContactPhone1 => &form.emergency_contact_phone1,
            PersonField::EmergencyContactPhone2 => &form.emergency_contact_phone2,
            PersonField::StreetAddress => &form.street_address,
            PersonField::Barangay => &form.barangay,
            PersonField::Municipality => &form.municipality,
        }
    }

    pub fn set(self, form: &mut PersonForm, value: String) {
        let slot = match self {
            PersonField::FirstName => &mut form.first_name,
            PersonField::LastName => &mut form.last_name,
            PersonField::Email => &mut form.email,
            PersonField::Phone => &mut form.phone,
            PersonField::Password => &mut form.password,
            PersonField::DateOfBirth => &mut form.date_of_birth,
            PersonField::Gender => &mut form.gender,
            PersonField::EmergencyContactName => &mut form.emergency_contact_name,
            PersonField::EmergencyContactRelationship => &mut form.emergency_contact_relationship,
            PersonField::EmergencyContactPhone1 => &mut form.emergency_contact_phone1,
            PersonField::EmergencyContactPhone2 => &mut form.emergency_contact_phone2,
            PersonField::StreetAddress => &mut form.street_address,
            PersonField::Barangay => &mut form.barangay,
            PersonField::Municipality => &mut form.municipality,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: u32,
    pub service_id: u32,
    pub preferred_date_time: String,
    pub symptom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub preferred_date_time: String,
    pub symptom: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    pub patient_id: u32,
    pub rating: u8,
    pub comment: String,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub patient_id: u32,
    pub reminder_type: String,
    pub preferred_date_time: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub service_name: String,
    pub price: f64,
    pub description: String,
}

/// Front-desk registration: the account form plus the walk-in role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkInRegistration {
    #[serde(flatten)]
    pub form: PersonForm,
    pub role: &'static str,
}

impl WalkInRegistration {
    pub fn temporary_password(&self) -> &str {
        &self.form.password
    }
}

// ========================
// Lenient Deserializers
// ========================

/// Accepts `true/false`, `0/1` and their string forms
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Text(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        Flag::Null(()) => false,
    })
}

/// Accepts numbers and numeric strings (DECIMAL columns arrive as strings)
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Num(f64),
        Text(String),
        Null(()),
    }

    Ok(match Number::deserialize(deserializer)? {
        Number::Num(n) => n,
        Number::Text(s) => s.trim().parse().unwrap_or(0.0),
        Number::Null(()) => 0.0,
    })
}

/// Null becomes the empty string
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepted_appointment_integer_flag() {
        let json = r#"{
            "acceptedAppointmentId": 4, "appointmentId": 9, "patientId": 2, "serviceId": 1,
            "preferredDateTime": "2025-03-01 09:30:00", "symptom": "Cough", "isAttended": 1
        }"#;
        let accepted: AcceptedAppointment = serde_json::from_str(json).unwrap();
        assert!(accepted.is_attended);
        assert_eq!(accepted.appointment_id, 9);
    }

    #[test]
    fn test_service_price_as_string() {
        let json = r#"{"serviceId": 3, "serviceName": "Checkup", "price": "450.50", "description": null}"#;
        let service: MedicalService = serde_json::from_str(json).unwrap();
        assert_eq!(service.price, 450.5);
        assert_eq!(service.description, None);
    }

    #[test]
    fn test_null_symptom_is_empty() {
        let json = r#"{"appointmentId": 1, "patientId": 1, "serviceId": 1, "preferredDateTime": null, "symptom": null}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.symptom, "");
        assert_eq!(appointment.status_label(), "Pending");
    }

    #[test]
    fn test_person_form_skips_blank_optional_fields() {
        let form = PersonForm {
            first_name: "Lea".into(),
            last_name: "Cruz".into(),
            email: "lea@example.com".into(),
            date_of_birth: "1990-02-03".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(form.for_update()).unwrap();
        assert!(body.get("password").is_none());
        assert!(body.get("dateOfBirth").is_none());
        assert!(body.get("gender").is_none());
        assert_eq!(body["firstName"], "Lea");
        assert_eq!(body["streetAddress"], "");
    }

    #[test]
    fn test_person_field_set_and_get() {
        let mut form = PersonForm::default();
        PersonField::EmergencyContactPhone1.set(&mut form, "0917".into());
        assert_eq!(PersonField::EmergencyContactPhone1.get(&form), "0917");
        assert_eq!(PersonField::EmergencyContactPhone1.key(), "emergencyContactPhone1");
    }

    #[test]
    fn test_apply_form_updates_session_record() {
        let mut patient = Patient {
            patient_id: 5,
            first_name: "Old".into(),
            last_name: "Name".into(),
            email: "old@example.com".into(),
            date_of_birth: Some("2000-01-01".into()),
            ..Default::default()
        };
        let mut form = patient.to_form();
        form.first_name = "New".into();
        form.phone = "0999".into();
        patient.apply_form(&form);
        assert_eq!(patient.full_name(), "New Name");
        assert_eq!(patient.phone.as_deref(), Some("0999"));
        assert_eq!(patient.date_of_birth.as_deref(), Some("2000-01-01"));
        assert_eq!(patient.initials(), "NN");
    }
}
