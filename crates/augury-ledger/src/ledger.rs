//! The fortune ledger state machine.
//!
//! Maps calendar day to at most one reading per category. A reading is
//! created the first time its (day, category) pair is requested and is
//! never regenerated or overwritten afterwards; only [`Ledger::clear_history`]
//! removes it.

use std::collections::BTreeMap;

use augury_core::catalog;
use augury_core::{Category, Reading, ReadingId};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Day-keyed history: day → category → reading.
pub type History = BTreeMap<NaiveDate, BTreeMap<Category, Reading>>;

/// Owning store of readings plus the last-produced reading pointer.
///
/// The ledger never reads the wall clock or seeds randomness itself; the day,
/// creation instant, and RNG are supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    history: History,
    current_fortune: Option<Reading>,
    last_stamp: i64,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted parts.
    pub fn from_parts(history: History, current_fortune: Option<Reading>) -> Self {
        let last_stamp = history
            .values()
            .flat_map(|day| day.values())
            .chain(current_fortune.iter())
            .filter_map(|reading| reading.id.stamp_millis())
            .max()
            .unwrap_or(0);

        Self {
            history,
            current_fortune,
            last_stamp,
        }
    }

    /// Whether a reading exists for `category` on `day`.
    pub fn has_reading(&self, day: NaiveDate, category: Category) -> bool {
        self.get(day, category).is_some()
    }

    /// The reading for `category` on `day`, if one was made.
    pub fn get(&self, day: NaiveDate, category: Category) -> Option<&Reading> {
        self.history.get(&day)?.get(&category)
    }

    /// Fetch-or-generate the reading for `category` on `day`.
    ///
    /// An existing reading is returned unchanged and becomes the current
    /// fortune. Otherwise one template is picked uniformly at random from the
    /// category's catalog, stamped with a fresh id derived from `instant`,
    /// recorded, made current, and returned.
    pub fn read_fortune(
        &mut self,
        category: Category,
        day: NaiveDate,
        instant: DateTime<Utc>,
        rng: &mut StdRng,
    ) -> Reading {
        if let Some(existing) = self.get(day, category) {
            let existing = existing.clone();
            self.current_fortune = Some(existing.clone());
            return existing;
        }

        let templates = catalog::templates(category);
        let template = &templates[rng.random_range(0..templates.len())];
        let stamp = self.next_stamp(instant);
        let reading = Reading::from_template(category, template, day, stamp);
        debug!(id = %reading.id, %category, %day, "generated reading");

        self.history
            .entry(day)
            .or_default()
            .insert(category, reading.clone());
        self.current_fortune = Some(reading.clone());
        reading
    }

    /// Forget the current fortune. History is untouched.
    pub fn clear_current_fortune(&mut self) {
        self.current_fortune = None;
    }

    /// Drop every reading and the current fortune.
    pub fn clear_history(&mut self) {
        self.history = History::new();
        self.current_fortune = None;
    }

    /// The full day-keyed history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The most recently produced or re-read reading.
    pub fn current_fortune(&self) -> Option<&Reading> {
        self.current_fortune.as_ref()
    }

    /// All readings recorded for `day`.
    pub fn day(&self, day: NaiveDate) -> Option<&BTreeMap<Category, Reading>> {
        self.history.get(&day)
    }

    /// Every reading, oldest day first, category order within a day.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.history.values().flat_map(|day| day.values())
    }

    /// Look up a reading by id.
    pub fn find(&self, id: &ReadingId) -> Option<&Reading> {
        self.readings().find(|reading| &reading.id == id)
    }

    /// Total number of readings.
    pub fn len(&self) -> usize {
        self.history.values().map(BTreeMap::len).sum()
    }

    /// Whether no reading has been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.values().all(BTreeMap::is_empty)
    }

    // Stamps only need to be monotonic. Ids also carry the category and day,
    // so a stamp pinned at `i64::MAX` by a loaded id still yields unique ids.
    fn next_stamp(&mut self, instant: DateTime<Utc>) -> i64 {
        let millis = instant.timestamp_millis();
        self.last_stamp = if millis > self.last_stamp {
            millis
        } else {
            self.last_stamp.saturating_add(1)
        };
        self.last_stamp
    }
}
