//! Read-only views over a ledger's history.

use std::collections::BTreeMap;
use std::fmt;

use augury_core::{Category, Reading};
use chrono::{Datelike, Days, NaiveDate};

use crate::ledger::Ledger;

/// All readings, newest day first, category order within a day.
pub fn recent(ledger: &Ledger) -> Vec<&Reading> {
    ledger
        .history()
        .values()
        .rev()
        .flat_map(|day| day.values())
        .collect()
}

/// Recency bucket for the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    /// The current day.
    Today,
    /// The day before.
    Yesterday,
    /// Earlier in the current Sunday-started week.
    ThisWeek,
    /// Earlier in the current calendar month.
    ThisMonth,
    /// Anything else.
    Older,
}

impl Period {
    /// Every period, in display order.
    pub const ALL: [Period; 5] = [
        Period::Today,
        Period::Yesterday,
        Period::ThisWeek,
        Period::ThisMonth,
        Period::Older,
    ];

    /// Bucket `date` relative to `today`. Earlier periods win when several apply.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        if date == today {
            Self::Today
        } else if today.pred_opt() == Some(date) {
            Self::Yesterday
        } else if week_start(date) == week_start(today) {
            Self::ThisWeek
        } else if date.year() == today.year() && date.month() == today.month() {
            Self::ThisMonth
        } else {
            Self::Older
        }
    }

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Older => "Older",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Readings grouped into recency sections, newest first. Empty sections are omitted.
pub fn group_by_period(ledger: &Ledger, today: NaiveDate) -> Vec<(Period, Vec<&Reading>)> {
    let mut sections: BTreeMap<Period, Vec<&Reading>> = BTreeMap::new();
    for reading in recent(ledger) {
        sections
            .entry(Period::classify(reading.date, today))
            .or_default()
            .push(reading);
    }
    sections.into_iter().collect()
}

/// Summary numbers for a profile view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    /// Total readings recorded.
    pub total: usize,
    /// Days with at least one reading.
    pub days: usize,
    /// Readings per category.
    pub per_category: BTreeMap<Category, usize>,
    /// Mean rating across all readings, if any.
    pub average_rating: Option<f64>,
}

impl Stats {
    /// Compute statistics for `ledger`.
    pub fn collect(ledger: &Ledger) -> Self {
        let mut stats = Self {
            days: ledger.history().values().filter(|d| !d.is_empty()).count(),
            ..Self::default()
        };
        let mut rating_sum = 0u32;

        for reading in ledger.readings() {
            stats.total += 1;
            *stats.per_category.entry(reading.category).or_insert(0) += 1;
            rating_sum += u32::from(reading.rating.value());
        }

        if stats.total > 0 {
            stats.average_rating = Some(f64::from(rating_sum) / stats.total as f64);
        }
        stats
    }

    /// Readings recorded for `category`.
    pub fn count(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}
