//! Build-time settings

/// Root of the clinic REST API
pub const API_BASE: &str = "http://localhost:3000/api";

/// Pause after "Login successful!" before switching to the dashboard
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1000;

/// Pause after a successful patient registration before returning home
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2000;

/// How long the booking dialog stays open after a successful booking
pub const BOOKING_CLOSE_DELAY_MS: u32 = 2000;

/// How long the walk-in dialog stays open to show the temporary password
pub const WALK_IN_CLOSE_DELAY_MS: u32 = 3000;

pub const CLINIC_NAME: &str = "Wahing Medical Clinic";

/// Absolute URL for an API path such as `appointments/patient/4`
pub fn endpoint(path: &str) -> String {
    format!("{}/{}", API_BASE, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(endpoint("patients/login"), "http://localhost:3000/api/patients/login");
        assert_eq!(endpoint("/medical-services"), "http://localhost:3000/api/medical-services");
    }
}
