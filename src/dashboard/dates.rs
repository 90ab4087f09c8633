use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::leave_request::LeaveRequest;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parses a calendar date, dropping any time-of-day component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.date())
        .ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Upcoming,
    Past,
}

/// `end_date >= today` is upcoming. A request whose end date is missing or
/// unreadable is filed as past.
pub fn bucket_of(request: &LeaveRequest, today: NaiveDate) -> Bucket {
    match request.end_date.as_deref().map(|raw| (raw, parse_date(raw))) {
        Some((_, Some(end))) if end >= today => Bucket::Upcoming,
        Some((_, Some(_))) => Bucket::Past,
        Some((raw, None)) => {
            tracing::warn!(leave_id = %request.id, end_date = raw, "Unparseable end date, filing as past");
            Bucket::Past
        }
        None => {
            tracing::warn!(leave_id = %request.id, "Missing end date, filing as past");
            Bucket::Past
        }
    }
}

/// Requests split around `today`, each bucket in input order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub upcoming: Vec<&'a LeaveRequest>,
    pub past: Vec<&'a LeaveRequest>,
}

pub fn partition(requests: &[LeaveRequest], today: NaiveDate) -> Partition<'_> {
    let mut parts = Partition::default();
    for request in requests {
        match bucket_of(request, today) {
            Bucket::Upcoming => parts.upcoming.push(request),
            Bucket::Past => parts.past.push(request),
        }
    }
    parts
}
