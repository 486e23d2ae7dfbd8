use std::path::PathBuf;

use augury_ledger::{FortuneBook, JsonDirStorage, LedgerConfig, ManualClock, SystemClock};
use chrono::{Local, NaiveDate};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "AUGURY_LOG";

/// Install the stderr log subscriber. `AUGURY_LOG` overrides the `warn` default.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Resolved command-line settings.
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub date: Option<NaiveDate>,
}

impl Settings {
    /// The data directory: explicit flag or env, else the platform data dir.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, String> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("augury"))
            .ok_or_else(|| "cannot determine a data directory; pass --data-dir".to_string())
    }

    pub fn ledger_config(&self) -> LedgerConfig {
        match self.seed {
            Some(seed) => LedgerConfig::default().with_seed(seed),
            None => LedgerConfig::default(),
        }
    }

    /// Open the fortune book described by these settings.
    pub fn open_book(&self) -> Result<FortuneBook, String> {
        let dir = self.resolve_data_dir()?;
        debug!(dir = %dir.display(), "opening fortune book");
        let storage = JsonDirStorage::new(dir);
        let config = self.ledger_config();

        let book = match self.date {
            Some(day) => {
                let now = day.and_time(Local::now().time());
                FortuneBook::open(storage, ManualClock::new(now), config)
            }
            None => FortuneBook::open(storage, SystemClock, config),
        };
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_installs_once() {
        init_logging();
        assert!(!init_logging());
    }

    #[test]
    fn explicit_data_dir_wins() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("/tmp/augury-test")),
            seed: Some(7),
            date: None,
        };
        assert_eq!(
            settings.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/augury-test")
        );
        assert_eq!(settings.ledger_config().seed, Some(7));
    }
}
