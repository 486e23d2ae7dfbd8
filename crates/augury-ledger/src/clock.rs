//! Day-boundary sources.
//!
//! The ledger keys history by local calendar day, so "today" must come from
//! somewhere replaceable: the wall clock in production, a [`ManualClock`] in
//! tests and whenever the caller pins the date.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Supplies the current calendar day and creation instant.
pub trait Clock: Send {
    /// The current local calendar day.
    fn today(&self) -> NaiveDate;

    /// The current instant, used to stamp reading ids.
    fn instant(&self) -> DateTime<Utc>;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock. Clones share the same time, so a test can keep a handle
/// and move the day forward after giving the clock away.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// A clock pinned to `now`, interpreted as local time.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// A clock pinned to noon on `day`.
    pub fn at_day(day: NaiveDate) -> Self {
        Self::new(day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)))
    }

    /// Move to an arbitrary local time.
    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    /// Move to the same time of day on `day`.
    pub fn set_day(&self, day: NaiveDate) {
        let mut guard = self.lock();
        *guard = day.and_time(guard.time());
    }

    /// Move forward by whole days.
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.lock();
        if let Some(next) = guard.checked_add_days(Days::new(days)) {
            *guard = next;
        }
    }

    /// The pinned local time.
    pub fn now(&self) -> NaiveDateTime {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, NaiveDateTime> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn instant(&self) -> DateTime<Utc> {
        self.now().and_utc()
    }
}
