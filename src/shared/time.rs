use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;
const MILLIS_PER_DAY: f64 = MILLIS_PER_HOUR * 24.0;

/// Time left between a captured `now` and a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lead {
    days: i64,
    hours: i64,
}

impl Lead {
    pub fn between(now: DateTime<Utc>, departure: DateTime<Utc>) -> Self {
        let millis = (departure - now).num_milliseconds() as f64;
        Self {
            days: ceil(millis / MILLIS_PER_DAY),
            hours: ceil(millis / MILLIS_PER_HOUR),
        }
    }

    pub const fn from_parts(days: i64, hours: i64) -> Self {
        Self { days, hours }
    }

    /// Whole days until departure, rounded up.
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Whole hours until departure, rounded up.
    pub const fn hours(&self) -> i64 {
        self.hours
    }
}

fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

#[cfg(test)]
fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

#[test]
fn lead_whole_days_test() {
    let lead = Lead::between(at(1, 8, 0), at(25, 8, 0));
    assert_eq!(lead.days(), 24);
    assert_eq!(lead.hours(), 24 * 24);
}

#[test]
fn lead_rounds_up_test() {
    let lead = Lead::between(at(1, 8, 0), at(2, 8, 1));
    assert_eq!(lead.days(), 2);
    assert_eq!(lead.hours(), 25);
}

#[test]
fn lead_same_instant_test() {
    let lead = Lead::between(at(1, 8, 0), at(1, 8, 0));
    assert_eq!(lead.days(), 0);
    assert_eq!(lead.hours(), 0);
}

#[test]
fn lead_past_departure_test() {
    let lead = Lead::between(at(1, 8, 30), at(1, 8, 0));
    assert_eq!(lead.days(), 0);
    assert_eq!(lead.hours(), 0);
}
