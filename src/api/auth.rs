//! Sign-in and password reset

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{post_json, send_json, ApiError, ApiResult};
use crate::models::LoginRequest;
use crate::session::Role;

#[derive(Serialize)]
struct ResetLinkRequest<'a> {
    email: &'a str,
}

fn login_path(role: Role) -> &'static str {
    match role {
        Role::Patient => "patients/login",
        Role::Staff => "staff/login",
        Role::Admin => "admins/login",
    }
}

fn id_field(role: Role) -> &'static str {
    match role {
        Role::Patient => "patientId",
        Role::Staff => "staffId",
        Role::Admin => "adminId",
    }
}

/// Sign in and return the record to store as the role's session
pub async fn login<T: DeserializeOwned>(role: Role, email: &str, password: &str) -> ApiResult<T> {
    let body: Value = post_json(login_path(role), &LoginRequest { email, password }).await?;
    session_from_login(role, body)
}

/// Unwrap `{ "<role>": { ... } }`, filling the role id from `id` when absent
pub fn session_from_login<T: DeserializeOwned>(role: Role, body: Value) -> ApiResult<T> {
    let mut record = match body {
        Value::Object(mut map) => map.remove(role.session_key()),
        _ => None,
    }
    .ok_or_else(|| ApiError::Decode(format!("login response has no `{}` record", role.session_key())))?;

    if let Value::Object(map) = &mut record {
        let key = id_field(role);
        if map.get(key).map_or(true, Value::is_null) {
            if let Some(id) = map.get("id").cloned() {
                map.insert(key.to_string(), id);
            }
        }
    }
    serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The response is not inspected beyond success/failure
pub async fn send_reset_link(email: &str) -> ApiResult<()> {
    send_json(Method::POST, "patients/send-reset-link", &ResetLinkRequest { email }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdminSession, PatientSession, StaffSession};
    use serde_json::json;

    #[test]
    fn test_patient_login_envelope() {
        let body = json!({"patient": {"patientId": 4, "firstName": "Ana", "lastName": "Go", "email": "a@b.co"}});
        let patient: PatientSession = session_from_login(Role::Patient, body).unwrap();
        assert_eq!(patient.patient_id, 4);
    }

    #[test]
    fn test_generic_id_fills_role_id() {
        let body = json!({"staff": {"id": 9, "firstName": "Ben", "lastName": "Uy", "email": "b@c.co"}});
        let staff: StaffSession = session_from_login(Role::Staff, body).unwrap();
        assert_eq!(staff.staff_id, 9);
    }

    #[test]
    fn test_role_id_wins_over_generic_id() {
        let body = json!({"admin": {"adminId": 2, "id": 77, "firstName": "C", "lastName": "D", "email": "c@d.co"}});
        let admin: AdminSession = session_from_login(Role::Admin, body).unwrap();
        assert_eq!(admin.admin_id, 2);
    }

    #[test]
    fn test_missing_envelope_is_decode_error() {
        let body = json!({"message": "ok"});
        let result: ApiResult<PatientSession> = session_from_login(Role::Patient, body);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
