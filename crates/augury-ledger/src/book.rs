//! The persisted owner of a ledger.
//!
//! `FortuneBook` ties a [`Ledger`] to a clock, a random source, and a storage
//! slot. Every mutating operation changes the in-memory ledger first and then
//! writes the full state before returning, so writes never overtake each
//! other. A failed write is logged and retried on the next mutation; the
//! in-memory ledger stays authoritative for the life of the process.
//!
//! State that could not be read at all (as opposed to state that was read and
//! found malformed) is never overwritten: writes are held back until the slot
//! turns out to be empty.

use augury_core::{Category, Reading, ReadingId};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{History, Ledger};
use crate::store::{self, Storage};

/// A fortune ledger bound to its clock, RNG, and storage slot.
pub struct FortuneBook {
    ledger: Ledger,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    rng: StdRng,
    config: LedgerConfig,
    last_persist_failed: bool,
    load_failed: bool,
}

impl FortuneBook {
    /// Open a book, loading any state previously written under the configured key.
    ///
    /// Missing state yields an empty ledger. Malformed state is logged and
    /// yields an empty ledger that the next mutation overwrites. State that
    /// storage failed to return is logged, yields an empty ledger, and is left
    /// in place.
    pub fn open(
        storage: impl Storage + 'static,
        clock: impl Clock + 'static,
        config: LedgerConfig,
    ) -> Self {
        let mut load_failed = false;
        let ledger = match storage.get(&config.storage_key) {
            Ok(Some(blob)) => match store::decode(&blob) {
                Ok(ledger) => {
                    debug!(
                        key = %config.storage_key,
                        readings = ledger.len(),
                        "loaded ledger state"
                    );
                    ledger
                }
                Err(e) => {
                    warn!(key = %config.storage_key, error = %e, "discarding unreadable ledger state");
                    Ledger::new()
                }
            },
            Ok(None) => Ledger::new(),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "failed to load ledger state");
                load_failed = true;
                Ledger::new()
            }
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            ledger,
            storage: Box::new(storage),
            clock: Box::new(clock),
            rng,
            config,
            last_persist_failed: false,
            load_failed,
        }
    }

    /// The current local calendar day according to the book's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whether `category` already has a reading today.
    pub fn has_read_today(&self, category: Category) -> bool {
        self.ledger.has_reading(self.clock.today(), category)
    }

    /// Fetch-or-generate today's reading for `category`, then persist.
    pub fn read_fortune(&mut self, category: Category) -> Reading {
        let day = self.clock.today();
        let instant = self.clock.instant();
        let reading = self
            .ledger
            .read_fortune(category, day, instant, &mut self.rng);
        self.persist();
        reading
    }

    /// Forget the current fortune, then persist.
    pub fn clear_current_fortune(&mut self) {
        self.ledger.clear_current_fortune();
        self.persist();
    }

    /// Drop every reading and the current fortune, then persist.
    pub fn clear_history(&mut self) {
        self.ledger.clear_history();
        self.persist();
    }

    /// The full day-keyed history.
    pub fn history(&self) -> &History {
        self.ledger.history()
    }

    /// The most recently produced or re-read reading.
    pub fn current_fortune(&self) -> Option<&Reading> {
        self.ledger.current_fortune()
    }

    /// Look up any recorded reading by id.
    pub fn find(&self, id: &ReadingId) -> Option<&Reading> {
        self.ledger.find(id)
    }

    /// Read-only access to the underlying ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The configuration the book was opened with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Whether the most recent write to storage failed.
    pub fn last_persist_failed(&self) -> bool {
        self.last_persist_failed
    }

    /// Write the current state and report any failure.
    ///
    /// Fails without writing while stored state that could not be loaded may
    /// still exist.
    pub fn flush(&mut self) -> LedgerResult<()> {
        let result = self.write_state();
        self.last_persist_failed = result.is_err();
        result
    }

    fn write_state(&mut self) -> LedgerResult<()> {
        if self.load_failed {
            match self.storage.get(&self.config.storage_key)? {
                None => self.load_failed = false,
                Some(_) => {
                    return Err(LedgerError::Unavailable(
                        "stored state was never loaded; refusing to overwrite it".to_string(),
                    ));
                }
            }
        }
        let blob = store::encode(&self.ledger)?;
        self.storage.set(&self.config.storage_key, &blob)
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            warn!(key = %self.config.storage_key, error = %e, "failed to persist ledger state");
        }
    }
}

impl std::fmt::Debug for FortuneBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FortuneBook")
            .field("ledger", &self.ledger)
            .field("config", &self.config)
            .field("last_persist_failed", &self.last_persist_failed)
            .field("load_failed", &self.load_failed)
            .finish_non_exhaustive()
    }
}
