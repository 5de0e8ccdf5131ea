//! UI Components
//!
//! Pages, dashboard sections and the small pieces they share.

mod notice;
mod delete_confirm_button;
mod person_fields;
mod homepage;
mod login_modal;
mod patient_register;
mod staff_register;
mod patient_dashboard;
mod patient_home;
mod booking;
mod my_appointments;
mod patient_feedback;
mod patient_reminders;
mod profile_settings;
mod work_sidebar;
mod clinic_overview;
mod walk_in_desk;
mod staff_dashboard;
mod appointment_management;
mod messages_reminders;
mod feedback_management;
mod patient_records;
mod admin_dashboard;
mod service_management;
mod staff_management;

pub use notice::{FieldError, Notice, NoticeBanner};
pub use delete_confirm_button::DeleteConfirmButton;
pub use person_fields::{PersonFields, ADDRESS_FIELDS, EMERGENCY_FIELDS, GENDERS, IDENTITY_FIELDS};
pub use homepage::Homepage;
pub use login_modal::LoginModal;
pub use patient_register::PatientRegister;
pub use staff_register::StaffRegister;
pub use patient_dashboard::PatientDashboard;
pub use patient_home::PatientHome;
pub use booking::Booking;
pub use my_appointments::MyAppointments;
pub use patient_feedback::PatientFeedback;
pub use patient_reminders::PatientReminders;
pub use profile_settings::ProfileSettings;
pub use work_sidebar::WorkSidebar;
pub use clinic_overview::ClinicOverview;
pub use walk_in_desk::WalkInDesk;
pub use staff_dashboard::StaffDashboard;
pub use appointment_management::AppointmentManagement;
pub use messages_reminders::MessagesReminders;
pub use feedback_management::FeedbackManagement;
pub use patient_records::PatientRecords;
pub use admin_dashboard::AdminDashboard;
pub use service_management::ServiceManagement;
pub use staff_management::StaffManagement;
