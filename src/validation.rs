//! Form Validation
//!
//! Checks run before a form is submitted. Field-level rules collect into
//! [`FieldErrors`]; single-message forms return the message directly.

use chrono::{DateTime, Utc};

use crate::models::{NewReminder, PersonField, PersonForm, WalkInRegistration, WALK_IN_ROLE};

/// Field key to message, in the order the checks ran
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|(key, _)| *key == field) {
            Some((_, existing)) => *existing = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, message)| message.as_str())
    }

    /// Drop a field's error once the user edits it
    pub fn remove(&mut self, field: &str) {
        self.0.retain(|(key, _)| *key != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }

    /// `Ok(())` when nothing was reported
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn require(&mut self, field: PersonField, form: &PersonForm, message: &str) {
        if field.get(form).trim().is_empty() {
            self.insert(field.key(), message);
        }
    }
}

// ========================
// Primitive Rules
// ========================

/// `something@something.something` with no whitespace
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    // The domain part may itself contain '@'; only the last '.' split matters
    match domain.rsplit_once('.') {
        Some((host, tld)) => !local.is_empty() && !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Digits, `+`, `-`, spaces and parentheses only
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')') || c.is_whitespace())
}

pub fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

// ========================
// Sign-in
// ========================

pub fn validate_login(username: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if username.trim().is_empty() {
        errors.insert("username", "Username/Email is required");
    }
    if password.trim().is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result()
}

pub fn validate_reset_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        Err("Email is required.")
    } else if !is_valid_email(email.trim()) {
        Err("Enter a valid email.")
    } else {
        Ok(())
    }
}

// ========================
// Patient Registration
// ========================

/// Step of the patient registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterStep {
    #[default]
    Personal,
    Emergency,
    Address,
    Terms,
}

impl RegisterStep {
    pub const ALL: [RegisterStep; 4] = [
        RegisterStep::Personal,
        RegisterStep::Emergency,
        RegisterStep::Address,
        RegisterStep::Terms,
    ];

    /// 1-based position shown in the progress bar
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            RegisterStep::Personal => "Personal Information",
            RegisterStep::Emergency => "Emergency Contact",
            RegisterStep::Address => "Address",
            RegisterStep::Terms => "Review & Confirm",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(2).map(|i| Self::ALL[i])
    }
}

/// Patient registration wizard state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientRegistration {
    pub form: PersonForm,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

pub fn validate_register_step(step: RegisterStep, reg: &PatientRegistration) -> Result<(), FieldErrors> {
    let form = &reg.form;
    let mut errors = FieldErrors::new();
    match step {
        RegisterStep::Personal => {
            errors.require(PersonField::FirstName, form, "First name is required");
            errors.require(PersonField::LastName, form, "Last name is required");
            if form.email.trim().is_empty() {
                errors.insert("email", "Email is required");
            } else if !is_valid_email(&form.email) {
                errors.insert("email", "Please enter a valid email address");
            }
            if form.phone.trim().is_empty() {
                errors.insert("phone", "Phone number is required");
            } else if !is_valid_phone(&form.phone) {
                errors.insert("phone", "Please enter a valid phone number");
            }
            if form.password.trim().is_empty() {
                errors.insert("password", "Password is required");
            } else if form.password.chars().count() < 8 {
                errors.insert("password", "Password must be at least 8 characters");
            } else if !is_strong_password(&form.password) {
                errors.insert("password", "Password must contain uppercase, lowercase, and number");
            }
            if reg.confirm_password.trim().is_empty() {
                errors.insert("confirmPassword", "Please confirm your password");
            } else if form.password != reg.confirm_password {
                errors.insert("confirmPassword", "Passwords do not match");
            }
            if form.date_of_birth.is_empty() {
                errors.insert("dateOfBirth", "Date of birth is required");
            }
            if form.gender.is_empty() {
                errors.insert("gender", "Gender is required");
            }
        }
        RegisterStep::Emergency => {
            errors.require(PersonField::EmergencyContactName, form, "Emergency contact name is required");
            errors.require(PersonField::EmergencyContactRelationship, form, "Relationship is required");
            if form.emergency_contact_phone1.trim().is_empty() {
                errors.insert("emergencyContactPhone1", "Primary phone is required");
            } else if !is_valid_phone(&form.emergency_contact_phone1) {
                errors.insert("emergencyContactPhone1", "Please enter a valid phone number");
            }
        }
        RegisterStep::Address => address_rules(form, &mut errors),
        RegisterStep::Terms => {
            if !reg.agree_to_terms {
                errors.insert("agreeToTerms", "You must agree to the terms and conditions");
            }
        }
    }
    errors.into_result()
}

// ========================
// Staff and Profiles
// ========================

fn address_rules(form: &PersonForm, errors: &mut FieldErrors) {
    errors.require(PersonField::StreetAddress, form, "Street address is required");
    errors.require(PersonField::Barangay, form, "Barangay is required");
    errors.require(PersonField::Municipality, form, "Municipality is required");
}

/// Shared account rules for staff registration and every profile form
fn account_rules(form: &PersonForm, errors: &mut FieldErrors) {
    errors.require(PersonField::FirstName, form, "First name is required");
    errors.require(PersonField::LastName, form, "Last name is required");
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Email is invalid");
    }
    errors.require(PersonField::Phone, form, "Phone number is required");
}

fn emergency_rules(form: &PersonForm, errors: &mut FieldErrors) {
    errors.require(PersonField::EmergencyContactName, form, "Emergency contact name is required");
    errors.require(
        PersonField::EmergencyContactRelationship,
        form,
        "Emergency contact relationship is required",
    );
    errors.require(PersonField::EmergencyContactPhone1, form, "Emergency contact phone is required");
}

pub fn validate_staff_registration(form: &PersonForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    account_rules(form, &mut errors);
    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters");
    }
    if form.date_of_birth.is_empty() {
        errors.insert("dateOfBirth", "Date of birth is required");
    }
    emergency_rules(form, &mut errors);
    address_rules(form, &mut errors);
    errors.into_result()
}

/// Profile edits; password and date of birth are not part of an update
pub fn validate_profile(form: &PersonForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    account_rules(form, &mut errors);
    emergency_rules(form, &mut errors);
    address_rules(form, &mut errors);
    errors.into_result()
}

/// Build the walk-in request: temporary password from the clock, and a
/// `first.last@walkin.temp` address when no e-mail was given
pub fn walk_in_registration(form: &PersonForm, now: DateTime<Utc>) -> Result<WalkInRegistration, &'static str> {
    let required = [
        PersonField::FirstName,
        PersonField::LastName,
        PersonField::Phone,
        PersonField::DateOfBirth,
    ];
    if required.iter().any(|field| field.get(form).trim().is_empty()) {
        return Err("Please fill in all required fields");
    }
    let mut form = form.clone();
    form.password = format!("walkin{:04}", now.timestamp_millis().rem_euclid(10_000));
    if form.email.trim().is_empty() {
        form.email = format!(
            "{}.{}@walkin.temp",
            form.first_name.trim().to_lowercase(),
            form.last_name.trim().to_lowercase()
        );
    }
    Ok(WalkInRegistration {
        form,
        role: WALK_IN_ROLE,
    })
}

// ========================
// Clinic Records
// ========================

pub fn validate_appointment(preferred_date_time: &str, symptom: &str) -> Result<(), &'static str> {
    if preferred_date_time.trim().is_empty() {
        return Err("Please select a preferred date and time");
    }
    if symptom.trim().is_empty() {
        return Err("Please describe your symptoms or reason for visit");
    }
    Ok(())
}

pub fn validate_feedback(comment: &str) -> Result<(), &'static str> {
    if comment.trim().is_empty() {
        Err("Please provide a comment for your feedback")
    } else {
        Ok(())
    }
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Parsed price of a service form
pub fn validate_service(name: &str, price: &str) -> Result<f64, &'static str> {
    if name.trim().is_empty() || price.trim().is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE);
    }
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("Price must be a valid non-negative number"),
    }
}

pub const REMINDER_TYPES: [&str; 4] = ["Appointment", "Medication", "Follow-up", "General"];

/// Reminder form as typed by staff
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDraft {
    pub patient_id: Option<u32>,
    pub reminder_type: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            patient_id: None,
            reminder_type: REMINDER_TYPES[0].to_string(),
            date: String::new(),
            time: String::new(),
            message: String::new(),
        }
    }
}

/// `YYYY-MM-DD` and `HH:MM[:SS]` joined as `YYYY-MM-DD HH:MM:SS`
pub fn combine_date_time(date: &str, time: &str) -> String {
    if date.is_empty() || time.is_empty() {
        return String::new();
    }
    if time.len() == 5 {
        format!("{} {}:00", date, time)
    } else {
        format!("{} {}", date, time)
    }
}

pub fn validate_reminder(draft: &ReminderDraft) -> Result<NewReminder, &'static str> {
    let patient_id = draft.patient_id.ok_or(REQUIRED_FIELDS_MESSAGE)?;
    if draft.date.is_empty() || draft.time.is_empty() || draft.message.trim().is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE);
    }
    Ok(NewReminder {
        patient_id,
        reminder_type: draft.reminder_type.clone(),
        preferred_date_time: combine_date_time(&draft.date, &draft.time),
        message: draft.message.clone(),
        is_read: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn walk_in_form() -> PersonForm {
        PersonForm {
            first_name: "Juan ".into(),
            last_name: "Dela Cruz".into(),
            phone: "09171234567".into(),
            date_of_birth: "1985-07-04".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_walk_in_defaults_email_and_role() {
        let now = Utc.timestamp_millis_opt(1_746_842_400_123).unwrap();
        let registration = walk_in_registration(&walk_in_form(), now).unwrap();
        assert_eq!(registration.form.email, "juan.dela cruz@walkin.temp");
        assert_eq!(registration.temporary_password(), "walkin0123");

        let body = serde_json::to_value(&registration).unwrap();
        assert_eq!(body["role"], "Walkin");
        assert_eq!(body["password"], "walkin0123");
        assert_eq!(body["firstName"], "Juan ");
    }

    #[test]
    fn test_walk_in_keeps_given_email() {
        let form = PersonForm {
            email: "juan@example.com".into(),
            ..walk_in_form()
        };
        let registration = walk_in_registration(&form, Utc::now()).unwrap();
        assert_eq!(registration.form.email, "juan@example.com");
        assert!(registration.temporary_password().starts_with("walkin"));
        assert_eq!(registration.temporary_password().len(), 10);
    }

    #[test]
    fn test_walk_in_requires_name_phone_and_birth_date() {
        for field in [
            PersonField::FirstName,
            PersonField::LastName,
            PersonField::Phone,
            PersonField::DateOfBirth,
        ] {
            let mut form = walk_in_form();
            field.set(&mut form, "  ".into());
            assert_eq!(
                walk_in_registration(&form, Utc::now()),
                Err("Please fill in all required fields"),
                "{:?}",
                field
            );
        }
    }

    fn complete_registration() -> PatientRegistration {
        PatientRegistration {
            form: PersonForm {
                first_name: "Maria".into(),
                last_name: "Santos".into(),
                email: "maria@example.com".into(),
                phone: "+63 (917) 123-4567".into(),
                password: "Secret123".into(),
                date_of_birth: "1990-05-01".into(),
                gender: "Female".into(),
                emergency_contact_name: "Jose Santos".into(),
                emergency_contact_relationship: "Father".into(),
                emergency_contact_phone1: "09171234567".into(),
                street_address: "12 Rizal St".into(),
                barangay: "Poblacion".into(),
                municipality: "Wahing".into(),
                ..Default::default()
            },
            confirm_password: "Secret123".into(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@clinic.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn test_phone_charset() {
        assert!(is_valid_phone("+63 (917) 123-4567"));
        assert!(!is_valid_phone("0917-CALL-ME"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = validate_login(" ", "").unwrap_err();
        assert_eq!(errors.get("username"), Some("Username/Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(validate_login("maria@example.com", "x").is_ok());
    }

    #[test]
    fn test_reset_email_messages() {
        assert_eq!(validate_reset_email(""), Err("Email is required."));
        assert_eq!(validate_reset_email("nope"), Err("Enter a valid email."));
        assert_eq!(validate_reset_email(" a@b.co "), Ok(()));
    }

    #[test]
    fn test_complete_registration_passes_every_step() {
        let reg = complete_registration();
        for step in RegisterStep::ALL {
            assert_eq!(validate_register_step(step, &reg), Ok(()), "{:?}", step);
        }
    }

    #[test]
    fn test_password_rules_in_order() {
        let mut reg = complete_registration();
        let message = |reg: &PatientRegistration| {
            validate_register_step(RegisterStep::Personal, reg)
                .unwrap_err()
                .get("password")
                .map(str::to_string)
        };

        reg.form.password = "Ab1".into();
        reg.confirm_password = "Ab1".into();
        assert_eq!(message(&reg).as_deref(), Some("Password must be at least 8 characters"));

        reg.form.password = "alllowercase1".into();
        reg.confirm_password = "alllowercase1".into();
        assert_eq!(
            message(&reg).as_deref(),
            Some("Password must contain uppercase, lowercase, and number")
        );
    }

    #[test]
    fn test_confirm_password_mismatch() {
        let mut reg = complete_registration();
        reg.confirm_password = "Secret124".into();
        let errors = validate_register_step(RegisterStep::Personal, &reg).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_steps_only_check_their_own_fields() {
        let mut reg = complete_registration();
        reg.form.municipality.clear();
        reg.agree_to_terms = false;
        assert!(validate_register_step(RegisterStep::Emergency, &reg).is_ok());
        let address = validate_register_step(RegisterStep::Address, &reg).unwrap_err();
        assert_eq!(address.get("municipality"), Some("Municipality is required"));
        let terms = validate_register_step(RegisterStep::Terms, &reg).unwrap_err();
        assert_eq!(terms.get("agreeToTerms"), Some("You must agree to the terms and conditions"));
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(RegisterStep::Personal.next(), Some(RegisterStep::Emergency));
        assert_eq!(RegisterStep::Terms.next(), None);
        assert_eq!(RegisterStep::Personal.previous(), None);
        assert_eq!(RegisterStep::Address.previous(), Some(RegisterStep::Emergency));
        assert_eq!(RegisterStep::Terms.number(), 4);
    }

    #[test]
    fn test_staff_registration() {
        let mut form = complete_registration().form;
        form.password = "abc12".into();
        form.email = "staff@clinic".into();
        let errors = validate_staff_registration(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["email", "password"]);
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));

        form.password = "abc123".into();
        form.email = "staff@clinic.test".into();
        assert!(validate_staff_registration(&form).is_ok());
    }

    #[test]
    fn test_profile_ignores_password_and_birth_date() {
        let mut form = complete_registration().form;
        form.password.clear();
        form.date_of_birth.clear();
        assert!(validate_profile(&form).is_ok());
        form.barangay = "  ".into();
        assert_eq!(validate_profile(&form).unwrap_err().get("barangay"), Some("Barangay is required"));
    }

    #[test]
    fn test_field_errors_insert_and_remove() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "first");
        errors.insert("phone", "second");
        errors.insert("email", "replaced");
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![("email", "replaced"), ("phone", "second")]);
        errors.remove("email");
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_appointment_and_feedback_messages() {
        assert_eq!(validate_appointment("", "cough"), Err("Please select a preferred date and time"));
        assert_eq!(
            validate_appointment("2025-01-01T10:00", "  "),
            Err("Please describe your symptoms or reason for visit")
        );
        assert_eq!(validate_appointment("2025-01-01T10:00", "cough"), Ok(()));
        assert_eq!(validate_feedback(""), Err("Please provide a comment for your feedback"));
    }

    #[test]
    fn test_service_price() {
        assert_eq!(validate_service("Checkup", "450.5"), Ok(450.5));
        assert_eq!(validate_service("", "1"), Err(REQUIRED_FIELDS_MESSAGE));
        assert_eq!(validate_service("Checkup", "-1"), Err("Price must be a valid non-negative number"));
        assert_eq!(validate_service("Checkup", "abc"), Err("Price must be a valid non-negative number"));
    }

    #[test]
    fn test_reminder_draft() {
        let mut draft = ReminderDraft {
            patient_id: Some(7),
            date: "2025-06-01".into(),
            time: "08:30".into(),
            message: "Bring your records".into(),
            ..Default::default()
        };
        let reminder = validate_reminder(&draft).unwrap();
        assert_eq!(reminder.preferred_date_time, "2025-06-01 08:30:00");
        assert_eq!(reminder.reminder_type, "Appointment");
        assert!(!reminder.is_read);

        draft.patient_id = None;
        assert_eq!(validate_reminder(&draft).unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }
}
