//! Daily fortune ledger.
//!
//! Guarantees at most one reading per category per calendar day, serves
//! repeat requests for the same day idempotently, and accumulates a
//! queryable history. [`FortuneBook`] owns a [`Ledger`] together with its
//! clock, random source, and storage slot, and writes the full state after
//! every mutation.

pub mod book;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod ledger;
pub mod store;

pub use book::FortuneBook;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use history::{Period, Stats};
pub use ledger::{History, Ledger};
pub use store::{JsonDirStorage, MemoryStorage, Storage};
