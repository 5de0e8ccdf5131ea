//! List Utilities
//!
//! Client-side filtering, sorting and counting of lists fetched from the API.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::models::{
    AcceptedAppointment, Appointment, Feedback, MedicalService, Patient, Reminder, StaffMember,
};

// ========================
// Timestamps
// ========================

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%B %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Parse the timestamp shapes the API and date inputs produce, as wall-clock
/// time in the browser's zone
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_timestamp_in(value, &Local)
}

/// Values with an offset are shifted into `zone`; offset-free values are
/// already wall-clock time
fn parse_timestamp_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(zone).naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_opt(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(parse_timestamp)
}

/// Newest first; unparseable values last
fn newest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest first; unparseable values last
fn oldest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// `YYYY-MM-DDTHH:MM` from a datetime-local input to `YYYY-MM-DD HH:MM:SS`
pub fn to_sql_datetime(local: &str) -> String {
    match local.split_once('T') {
        Some((date, time)) if time.len() == 5 => format!("{} {}:00", date, time),
        Some((date, time)) => format!("{} {}", date, time),
        None => local.to_string(),
    }
}

/// Back to the datetime-local input shape, for editing forms
pub fn to_input_datetime(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_price(price: f64) -> String {
    format!("₱{:.2}", price)
}

// ========================
// Lookups
// ========================

/// Name lookups over the patient and service lists
#[derive(Clone, Copy)]
pub struct Directory<'a> {
    pub patients: &'a [Patient],
    pub services: &'a [MedicalService],
}

impl<'a> Directory<'a> {
    pub fn new(patients: &'a [Patient], services: &'a [MedicalService]) -> Self {
        Self { patients, services }
    }

    fn patient(&self, patient_id: u32) -> Option<&'a Patient> {
        self.patients.iter().find(|p| p.patient_id == patient_id)
    }

    pub fn patient_name(&self, patient_id: u32) -> String {
        self.patient(patient_id)
            .map(|p| format!("{} {}", p.first_name, p.last_name))
            .unwrap_or_else(|| "Unknown Patient".to_string())
    }

    pub fn patient_email(&self, patient_id: u32) -> String {
        self.patient(patient_id)
            .map(|p| p.email.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn service(&self, service_id: u32) -> Option<&'a MedicalService> {
        self.services.iter().find(|s| s.service_id == service_id)
    }

    pub fn service_name(&self, service_id: u32) -> String {
        self.service(service_id)
            .map(|s| s.service_name.clone())
            .unwrap_or_else(|| "Unknown Service".to_string())
    }

    pub fn service_price(&self, service_id: u32) -> f64 {
        self.service(service_id).map_or(0.0, |s| s.price)
    }
}

// ========================
// Appointments
// ========================

/// Pending requests minus those that already have an accepted record
pub fn pending_excluding_accepted(
    pending: Vec<Appointment>,
    accepted: &[AcceptedAppointment],
) -> Vec<Appointment> {
    let accepted_ids: HashSet<u32> = accepted.iter().map(|a| a.appointment_id).collect();
    pending
        .into_iter()
        .filter(|a| !accepted_ids.contains(&a.appointment_id))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentSort {
    /// Server order
    #[default]
    Default,
    AToZ,
    Date,
}

impl AppointmentSort {
    pub const ALL: [AppointmentSort; 3] =
        [AppointmentSort::Default, AppointmentSort::AToZ, AppointmentSort::Date];

    pub fn label(self) -> &'static str {
        match self {
            AppointmentSort::Default => "Default",
            AppointmentSort::AToZ => "A-Z",
            AppointmentSort::Date => "Date",
        }
    }
}

fn sort_appointments<T>(
    items: &mut [T],
    sort: AppointmentSort,
    patient_id: impl Fn(&T) -> u32,
    preferred: impl Fn(&T) -> &str,
    dir: &Directory,
) {
    match sort {
        AppointmentSort::Default => {}
        AppointmentSort::AToZ => items.sort_by(|a, b| {
            by_name(&dir.patient_name(patient_id(a)), &dir.patient_name(patient_id(b)))
        }),
        AppointmentSort::Date => items.sort_by(|a, b| {
            oldest_first(parse_timestamp(preferred(a)), parse_timestamp(preferred(b)))
        }),
    }
}

/// Staff pending list: hides `accepted` rows, searches patient, service and status
pub fn filter_pending_for_staff(
    appointments: &[Appointment],
    dir: &Directory,
    search: &str,
    sort: AppointmentSort,
) -> Vec<Appointment> {
    let search = search.to_lowercase();
    let mut filtered: Vec<Appointment> = appointments
        .iter()
        .filter(|a| {
            let status = a.status.as_deref().unwrap_or_default().to_lowercase();
            status != "accepted"
                && (contains(&dir.patient_name(a.patient_id), &search)
                    || contains(&dir.service_name(a.service_id), &search)
                    || status.contains(&search))
        })
        .cloned()
        .collect();
    sort_appointments(&mut filtered, sort, |a| a.patient_id, |a| a.preferred_date_time.as_str(), dir);
    filtered
}

pub fn filter_accepted(
    accepted: &[AcceptedAppointment],
    dir: &Directory,
    search: &str,
    sort: AppointmentSort,
) -> Vec<AcceptedAppointment> {
    let search = search.to_lowercase();
    let mut filtered: Vec<AcceptedAppointment> = accepted
        .iter()
        .filter(|a| {
            contains(&dir.patient_name(a.patient_id), &search)
                || contains(&dir.service_name(a.service_id), &search)
        })
        .cloned()
        .collect();
    sort_appointments(&mut filtered, sort, |a| a.patient_id, |a| a.preferred_date_time.as_str(), dir);
    filtered
}

/// Attended visits matching the search, most recent visit first
pub fn filter_records(
    attended: &[AcceptedAppointment],
    dir: &Directory,
    search: &str,
) -> Vec<AcceptedAppointment> {
    let search = search.to_lowercase();
    let mut filtered: Vec<AcceptedAppointment> = attended
        .iter()
        .filter(|r| {
            contains(&dir.patient_name(r.patient_id), &search)
                || contains(&dir.patient_email(r.patient_id), &search)
                || contains(&dir.service_name(r.service_id), &search)
                || contains(&r.symptom, &search)
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        newest_first(
            parse_timestamp(&a.preferred_date_time),
            parse_timestamp(&b.preferred_date_time),
        )
    });
    filtered
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStats {
    pub total: usize,
    pub this_month: usize,
    pub unique_patients: usize,
}

pub fn record_stats(attended: &[AcceptedAppointment], today: NaiveDate) -> RecordStats {
    let this_month = attended
        .iter()
        .filter_map(|r| parse_timestamp(&r.preferred_date_time))
        .filter(|dt| dt.month() == today.month() && dt.year() == today.year())
        .count();
    let unique_patients = attended
        .iter()
        .map(|r| r.patient_id)
        .collect::<HashSet<_>>()
        .len();
    RecordStats {
        total: attended.len(),
        this_month,
        unique_patients,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    pub id: u32,
    pub label: String,
    pub date: String,
    pub status: String,
}

/// Latest bookings as activity lines for the patient home section
pub fn recent_activities(
    appointments: &[Appointment],
    services: &[MedicalService],
    limit: usize,
) -> Vec<RecentActivity> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by(|a, b| {
        newest_first(parse_opt(a.created_at.as_deref()), parse_opt(b.created_at.as_deref()))
    });
    sorted
        .into_iter()
        .take(limit)
        .map(|a| {
            let service = services
                .iter()
                .find(|s| s.service_id == a.service_id)
                .map_or("Medical Service", |s| s.service_name.as_str());
            RecentActivity {
                id: a.appointment_id,
                label: format!("You booked {}", service),
                date: a.created_at.as_deref().map(format_date).unwrap_or_default(),
                status: a.status_label().to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppointmentStats {
    pub pending: usize,
    pub today: usize,
    pub ongoing: usize,
    pub completed: usize,
}

pub fn appointment_stats(
    appointments: &[Appointment],
    accepted: &[AcceptedAppointment],
    today: NaiveDate,
) -> AppointmentStats {
    let completed = accepted.iter().filter(|a| a.is_attended).count();
    AppointmentStats {
        pending: appointments
            .iter()
            .filter(|a| a.status.as_deref() == Some("Pending"))
            .count(),
        today: appointments
            .iter()
            .filter(|a| parse_timestamp(&a.preferred_date_time).map(|dt| dt.date()) == Some(today))
            .count(),
        ongoing: accepted.len() - completed,
        completed,
    }
}

/// Walk-in patients, newest registration first
pub fn walk_in_patients(patients: &[Patient]) -> Vec<Patient> {
    let mut walk_ins: Vec<Patient> = patients.iter().filter(|p| p.is_walk_in()).cloned().collect();
    walk_ins.sort_by(|a, b| newest_first(parse_opt(a.created_at.as_deref()), parse_opt(b.created_at.as_deref())));
    walk_ins
}

/// Walk-in patients registered on the given day
pub fn walk_ins_on(patients: &[Patient], day: NaiveDate) -> usize {
    patients
        .iter()
        .filter(|p| p.is_walk_in())
        .filter(|p| parse_opt(p.created_at.as_deref()).map(|dt| dt.date()) == Some(day))
        .count()
}

/// Most booked service and its booking count
pub fn most_booked_service(appointments: &[Appointment], dir: &Directory) -> Option<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for appointment in appointments {
        let name = dir.service_name(appointment.service_id);
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts.into_iter().fold(None, |best, (name, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((name, count)),
    })
}

// ========================
// Services and Staff
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceSort {
    #[default]
    Default,
    AToZ,
    ZToA,
    PriceLow,
    PriceHigh,
}

impl ServiceSort {
    pub const ALL: [ServiceSort; 5] = [
        ServiceSort::Default,
        ServiceSort::AToZ,
        ServiceSort::ZToA,
        ServiceSort::PriceLow,
        ServiceSort::PriceHigh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceSort::Default => "Default",
            ServiceSort::AToZ => "A-Z",
            ServiceSort::ZToA => "Z-A",
            ServiceSort::PriceLow => "Price: Low to High",
            ServiceSort::PriceHigh => "Price: High to Low",
        }
    }
}

/// Search name, description and price
pub fn filter_services(services: &[MedicalService], search: &str, sort: ServiceSort) -> Vec<MedicalService> {
    let search = search.to_lowercase();
    let mut filtered: Vec<MedicalService> = services
        .iter()
        .filter(|s| {
            contains(&s.service_name, &search)
                || s.description.as_deref().is_some_and(|d| contains(d, &search))
                || s.price.to_string().contains(&search)
        })
        .cloned()
        .collect();
    match sort {
        ServiceSort::Default => {}
        ServiceSort::AToZ => filtered.sort_by(|a, b| by_name(&a.service_name, &b.service_name)),
        ServiceSort::ZToA => filtered.sort_by(|a, b| by_name(&b.service_name, &a.service_name)),
        ServiceSort::PriceLow => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        ServiceSort::PriceHigh => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    filtered
}

pub fn filter_staff(staff: &[StaffMember], search: &str) -> Vec<StaffMember> {
    let search = search.to_lowercase();
    staff
        .iter()
        .filter(|s| {
            contains(&format!("{} {}", s.first_name, s.last_name), &search)
                || contains(&s.email, &search)
                || s.role.as_deref().is_some_and(|r| contains(r, &search))
        })
        .cloned()
        .collect()
}

// ========================
// Feedback
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSort {
    #[default]
    Default,
    Date,
    Rating,
    Patient,
}

impl FeedbackSort {
    pub const ALL: [FeedbackSort; 4] = [
        FeedbackSort::Default,
        FeedbackSort::Date,
        FeedbackSort::Rating,
        FeedbackSort::Patient,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackSort::Default => "Default",
            FeedbackSort::Date => "Newest",
            FeedbackSort::Rating => "Highest Rating",
            FeedbackSort::Patient => "Patient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anonymity {
    #[default]
    All,
    Anonymous,
    Public,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackFilter {
    pub search: String,
    pub rating: Option<u8>,
    pub anonymity: Anonymity,
    pub sort: FeedbackSort,
}

pub fn filter_feedback(feedback: &[Feedback], patients: &[Patient], filter: &FeedbackFilter) -> Vec<Feedback> {
    let dir = Directory::new(patients, &[]);
    let search = filter.search.to_lowercase();
    let mut filtered: Vec<Feedback> = feedback
        .iter()
        .filter(|f| contains(&dir.patient_name(f.patient_id), &search) || contains(&f.comment, &search))
        .filter(|f| filter.rating.map_or(true, |r| f.rating == r))
        .filter(|f| match filter.anonymity {
            Anonymity::All => true,
            Anonymity::Anonymous => f.is_anonymous,
            Anonymity::Public => !f.is_anonymous,
        })
        .cloned()
        .collect();
    match filter.sort {
        FeedbackSort::Default => {}
        FeedbackSort::Date => filtered.sort_by(|a, b| {
            newest_first(parse_opt(a.created_at.as_deref()), parse_opt(b.created_at.as_deref()))
        }),
        FeedbackSort::Rating => filtered.sort_by(|a, b| b.rating.cmp(&a.rating)),
        FeedbackSort::Patient => filtered.sort_by(|a, b| {
            by_name(&dir.patient_name(a.patient_id), &dir.patient_name(b.patient_id))
        }),
    }
    filtered
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedbackStats {
    pub average: f64,
    pub total: usize,
    /// Count per rating, index 0 holds 1-star
    pub distribution: [usize; 5],
}

impl FeedbackStats {
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

pub fn feedback_stats(feedback: &[Feedback]) -> FeedbackStats {
    if feedback.is_empty() {
        return FeedbackStats::default();
    }
    let mut distribution = [0usize; 5];
    for f in feedback {
        if (1..=5).contains(&f.rating) {
            distribution[usize::from(f.rating) - 1] += 1;
        }
    }
    let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    let average = (f64::from(sum) / feedback.len() as f64 * 10.0).round() / 10.0;
    FeedbackStats {
        average,
        total: feedback.len(),
        distribution,
    }
}

// ========================
// Reminders
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

/// Search message and service name, newest first
pub fn filter_reminders(reminders: &[Reminder], search: &str, status: ReadFilter) -> Vec<Reminder> {
    let search = search.to_lowercase();
    let mut filtered: Vec<Reminder> = reminders
        .iter()
        .filter(|r| {
            contains(&r.message, &search)
                || r.service_name.as_deref().is_some_and(|s| contains(s, &search))
        })
        .filter(|r| match status {
            ReadFilter::All => true,
            ReadFilter::Read => r.is_read,
            ReadFilter::Unread => !r.is_read,
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        newest_first(parse_opt(a.created_at.as_deref()), parse_opt(b.created_at.as_deref()))
    });
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn patient(id: u32, first: &str, last: &str) -> Patient {
        Patient {
            patient_id: id,
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}@example.com", first.to_lowercase()),
            ..Default::default()
        }
    }

    fn service(id: u32, name: &str, price: f64) -> MedicalService {
        MedicalService {
            service_id: id,
            service_name: name.into(),
            price,
            description: None,
        }
    }

    fn appointment(id: u32, patient_id: u32, service_id: u32, when: &str, status: &str) -> Appointment {
        Appointment {
            appointment_id: id,
            patient_id,
            service_id,
            preferred_date_time: when.into(),
            symptom: "fever".into(),
            status: Some(status.into()),
            created_at: None,
        }
    }

    fn accepted(id: u32, appointment_id: u32, patient_id: u32, when: &str, attended: bool) -> AcceptedAppointment {
        AcceptedAppointment {
            accepted_appointment_id: id,
            appointment_id,
            patient_id,
            service_id: 1,
            preferred_date_time: when.into(),
            symptom: "cough".into(),
            is_attended: attended,
            created_at: None,
        }
    }

    fn ids(list: &[Appointment]) -> Vec<u32> {
        list.iter().map(|a| a.appointment_id).collect()
    }

    fn manila() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-03-01 09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T09:30"), Some(expected));
        assert_eq!(parse_timestamp_in("2025-03-01T09:30:00.000Z", &Utc), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("soon"), None);
    }

    #[test]
    fn test_offset_timestamps_keep_local_wall_clock() {
        let morning = parse_timestamp_in("2025-05-10T10:00:00+08:00", &manila()).unwrap();
        assert_eq!(morning.format(DATE_TIME_FORMAT).to_string(), "May 10, 2025 10:00 AM");

        let early = parse_timestamp_in("2025-05-10T07:00:00+08:00", &manila()).unwrap();
        assert_eq!(early.date(), NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());

        // UTC values from the server land on the clinic's calendar day
        let utc = parse_timestamp_in("2025-05-09T23:30:00.000Z", &manila()).unwrap();
        assert_eq!(utc.format(DATE_TIME_FORMAT).to_string(), "May 10, 2025 7:30 AM");
    }

    #[test]
    fn test_to_sql_datetime() {
        assert_eq!(to_sql_datetime("2025-03-01T09:30"), "2025-03-01 09:30:00");
        assert_eq!(to_sql_datetime("2025-03-01T09:30:15"), "2025-03-01 09:30:15");
        assert_eq!(to_sql_datetime(""), "");
    }

    #[test]
    fn test_to_input_datetime() {
        assert_eq!(to_input_datetime("2025-03-01 09:30:00"), "2025-03-01T09:30");
    }

    #[test]
    fn test_pending_excludes_accepted() {
        let pending = vec![
            appointment(1, 1, 1, "2025-01-01 10:00:00", "Pending"),
            appointment(2, 1, 1, "2025-01-02 10:00:00", "Pending"),
            appointment(3, 1, 1, "2025-01-03 10:00:00", "Pending"),
        ];
        let accepted = vec![accepted(10, 2, 1, "2025-01-02 10:00:00", false)];
        assert_eq!(ids(&pending_excluding_accepted(pending, &accepted)), vec![1, 3]);
    }

    #[test]
    fn test_staff_pending_hides_accepted_status_and_searches() {
        let patients = vec![patient(1, "Maria", "Santos"), patient(2, "Jose", "Rizal")];
        let services = vec![service(1, "Dental Cleaning", 500.0), service(2, "Checkup", 300.0)];
        let dir = Directory::new(&patients, &services);
        let appointments = vec![
            appointment(1, 1, 1, "2025-01-05 10:00:00", "Pending"),
            appointment(2, 2, 2, "2025-01-01 10:00:00", "ACCEPTED"),
            appointment(3, 2, 1, "2025-01-03 10:00:00", "Pending"),
        ];

        let all = filter_pending_for_staff(&appointments, &dir, "", AppointmentSort::Default);
        assert_eq!(ids(&all), vec![1, 3]);

        let jose = filter_pending_for_staff(&appointments, &dir, "JOSE", AppointmentSort::Default);
        assert_eq!(ids(&jose), vec![3]);

        let dental = filter_pending_for_staff(&appointments, &dir, "dental", AppointmentSort::Default);
        assert_eq!(ids(&dental), vec![1, 3]);
    }

    #[test]
    fn test_appointment_sorts() {
        let patients = vec![patient(1, "Zed", "Alpha"), patient(2, "Ann", "Beta")];
        let dir = Directory::new(&patients, &[]);
        let appointments = vec![
            appointment(1, 1, 1, "2025-02-01 10:00:00", "Pending"),
            appointment(2, 2, 1, "2025-03-01 10:00:00", "Pending"),
            appointment(3, 1, 1, "2025-01-01 10:00:00", "Pending"),
        ];
        let by = |sort| ids(&filter_pending_for_staff(&appointments, &dir, "", sort));
        assert_eq!(by(AppointmentSort::Default), vec![1, 2, 3]);
        assert_eq!(by(AppointmentSort::AToZ), vec![2, 1, 3]);
        assert_eq!(by(AppointmentSort::Date), vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_records_newest_first() {
        let patients = vec![patient(1, "Maria", "Santos")];
        let dir = Directory::new(&patients, &[]);
        let attended = vec![
            accepted(1, 1, 1, "2025-01-01 10:00:00", true),
            accepted(2, 2, 1, "2025-04-01 10:00:00", true),
            accepted(3, 3, 9, "2025-02-01 10:00:00", true),
        ];
        let records = filter_records(&attended, &dir, "maria@");
        let ids: Vec<_> = records.iter().map(|r| r.accepted_appointment_id).collect();
        assert_eq!(ids, vec![2, 1]);

        let by_symptom = filter_records(&attended, &dir, "COUGH");
        assert_eq!(by_symptom.len(), 3);
    }

    #[test]
    fn test_record_stats() {
        let attended = vec![
            accepted(1, 1, 1, "2025-04-01 10:00:00", true),
            accepted(2, 2, 1, "2025-04-20 10:00:00", true),
            accepted(3, 3, 2, "2024-04-02 10:00:00", true),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 4, 25).unwrap();
        assert_eq!(
            record_stats(&attended, today),
            RecordStats {
                total: 3,
                this_month: 2,
                unique_patients: 2
            }
        );
    }

    #[test]
    fn test_recent_activities_latest_three() {
        let services = vec![service(1, "Checkup", 300.0)];
        let mut appointments: Vec<Appointment> = (1..=5)
            .map(|i| {
                let mut a = appointment(i, 1, if i == 5 { 99 } else { 1 }, "", "Pending");
                a.created_at = Some(format!("2025-01-0{} 08:00:00", i));
                a
            })
            .collect();
        appointments[3].status = None;

        let activities = recent_activities(&appointments, &services, 3);
        let ids: Vec<_> = activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
        assert_eq!(activities[0].label, "You booked Medical Service");
        assert_eq!(activities[1].label, "You booked Checkup");
        assert_eq!(activities[1].status, "Pending");
        assert_eq!(activities[2].date, "January 3, 2025");
    }

    #[test]
    fn test_appointment_stats() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let appointments = vec![
            appointment(1, 1, 1, "2025-05-10 09:00:00", "Pending"),
            appointment(2, 1, 1, "2025-05-11 09:00:00", "Pending"),
            appointment(3, 1, 1, "2025-05-10 15:00:00", "Accepted"),
        ];
        let accepted = vec![
            accepted(1, 3, 1, "2025-05-10 15:00:00", false),
            accepted(2, 4, 1, "2025-05-01 15:00:00", true),
            accepted(3, 5, 1, "2025-05-02 15:00:00", true),
        ];
        assert_eq!(
            appointment_stats(&appointments, &accepted, today),
            AppointmentStats {
                pending: 2,
                today: 2,
                ongoing: 1,
                completed: 2
            }
        );
    }

    #[test]
    fn test_walk_ins_on_day() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let mut walk_in = patient(1, "A", "B");
        walk_in.role = Some("Walkin".into());
        walk_in.created_at = Some("2025-05-10 07:00:00".into());
        let mut earlier = walk_in.clone();
        earlier.created_at = Some("2025-05-09 23:00:00".into());
        let mut online = walk_in.clone();
        online.role = Some("Patient".into());
        assert_eq!(walk_ins_on(&[walk_in.clone(), earlier.clone(), online.clone()], day), 1);

        let mut listed = walk_in_patients(&[earlier, online, walk_in]);
        let dates: Vec<_> = listed.iter_mut().filter_map(|p| p.created_at.take()).collect();
        assert_eq!(dates, vec!["2025-05-10 07:00:00", "2025-05-09 23:00:00"]);
    }

    #[test]
    fn test_most_booked_service() {
        let services = vec![service(1, "Checkup", 1.0), service(2, "X-Ray", 2.0)];
        let dir = Directory::new(&[], &services);
        let appointments = vec![
            appointment(1, 1, 2, "", "Pending"),
            appointment(2, 1, 1, "", "Pending"),
            appointment(3, 1, 2, "", "Pending"),
        ];
        assert_eq!(most_booked_service(&appointments, &dir), Some(("X-Ray".to_string(), 2)));
        assert_eq!(most_booked_service(&[], &dir), None);
    }

    #[test]
    fn test_filter_services() {
        let services = vec![
            service(1, "X-Ray", 800.0),
            service(2, "checkup", 300.0),
            MedicalService {
                description: Some("Teeth cleaning".into()),
                ..service(3, "Dental", 500.0)
            },
        ];
        let names = |list: Vec<MedicalService>| -> Vec<String> {
            list.into_iter().map(|s| s.service_name).collect()
        };
        assert_eq!(names(filter_services(&services, "", ServiceSort::AToZ)), vec!["checkup", "Dental", "X-Ray"]);
        assert_eq!(names(filter_services(&services, "", ServiceSort::PriceHigh)), vec!["X-Ray", "Dental", "checkup"]);
        assert_eq!(names(filter_services(&services, "teeth", ServiceSort::Default)), vec!["Dental"]);
        assert_eq!(names(filter_services(&services, "300", ServiceSort::Default)), vec!["checkup"]);
    }

    #[test]
    fn test_filter_staff() {
        let staff = vec![
            StaffMember {
                staff_id: 1,
                first_name: "Ana".into(),
                last_name: "Reyes".into(),
                email: "ana@clinic.test".into(),
                role: Some("Nurse".into()),
                ..Default::default()
            },
            StaffMember {
                staff_id: 2,
                first_name: "Ben".into(),
                last_name: "Cruz".into(),
                email: "ben@clinic.test".into(),
                ..Default::default()
            },
        ];
        assert_eq!(filter_staff(&staff, "nurse").len(), 1);
        assert_eq!(filter_staff(&staff, "ben c").len(), 1);
        assert_eq!(filter_staff(&staff, "clinic").len(), 2);
    }

    fn feedback(id: u32, patient_id: u32, rating: u8, anonymous: bool, created: &str) -> Feedback {
        Feedback {
            feedback_id: id,
            patient_id,
            rating,
            comment: format!("comment {}", id),
            is_anonymous: anonymous,
            created_at: Some(created.into()),
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_feedback() {
        let patients = vec![patient(1, "Zoe", "Tan"), patient(2, "Amy", "Lee")];
        let list = vec![
            feedback(1, 1, 3, false, "2025-01-01T00:00:00.000Z"),
            feedback(2, 2, 5, true, "2025-03-01T00:00:00.000Z"),
            feedback(3, 1, 5, false, "2025-02-01T00:00:00.000Z"),
        ];
        let run = |filter: FeedbackFilter| -> Vec<u32> {
            filter_feedback(&list, &patients, &filter)
                .iter()
                .map(|f| f.feedback_id)
                .collect()
        };
        assert_eq!(run(FeedbackFilter { sort: FeedbackSort::Date, ..Default::default() }), vec![2, 3, 1]);
        assert_eq!(run(FeedbackFilter { sort: FeedbackSort::Rating, ..Default::default() }), vec![2, 3, 1]);
        assert_eq!(run(FeedbackFilter { sort: FeedbackSort::Patient, ..Default::default() }), vec![2, 1, 3]);
        assert_eq!(run(FeedbackFilter { rating: Some(5), anonymity: Anonymity::Public, ..Default::default() }), vec![3]);
        assert_eq!(run(FeedbackFilter { search: "zoe".into(), ..Default::default() }), vec![1, 3]);
    }

    #[test]
    fn test_feedback_stats() {
        let list = vec![
            feedback(1, 1, 5, false, ""),
            feedback(2, 1, 4, false, ""),
            feedback(3, 1, 4, false, ""),
        ];
        let stats = feedback_stats(&list);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_label(), "4.3");
        assert_eq!(stats.distribution, [0, 0, 0, 2, 1]);
        assert_eq!(feedback_stats(&[]).average_label(), "0.0");
    }

    #[test]
    fn test_filter_reminders() {
        let reminder = |id: u32, read: bool, created: &str, message: &str| Reminder {
            reminder_id: id,
            patient_id: 1,
            reminder_type: None,
            message: message.into(),
            preferred_date_time: None,
            service_name: Some("Checkup".into()),
            is_read: read,
            created_at: Some(created.into()),
        };
        let list = vec![
            reminder(1, true, "2025-01-01 08:00:00", "Bring your records"),
            reminder(2, false, "2025-01-03 08:00:00", "Fasting required"),
            reminder(3, false, "2025-01-02 08:00:00", "Bring your ID"),
        ];
        let ids = |v: Vec<Reminder>| -> Vec<u32> { v.iter().map(|r| r.reminder_id).collect() };
        assert_eq!(ids(filter_reminders(&list, "", ReadFilter::All)), vec![2, 3, 1]);
        assert_eq!(ids(filter_reminders(&list, "bring", ReadFilter::Unread)), vec![3]);
        assert_eq!(ids(filter_reminders(&list, "checkup", ReadFilter::Read)), vec![1]);
    }
}
