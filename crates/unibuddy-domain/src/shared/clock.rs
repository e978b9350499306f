use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of "now" for date-sensitive calculations.
///
/// The current-streak rule ("lapsed unless the last activity is today or
/// yesterday") depends on the moment of evaluation, so the reference instant
/// is injected rather than read from the wall clock inside the calculation.
pub trait Clock: Send + Sync {
    /// The current calendar day, local time.
    fn today(&self) -> NaiveDate;

    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used everywhere outside tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
