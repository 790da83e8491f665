//! Link record representing a registered slug and its visit statistics.

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A registered short link together with its hit counters.
///
/// `hits` always equals the sum of the `histogram` values. The histogram is
/// keyed by UTC calendar date and only gains a key on the first hit of that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub slug: String,
    pub target: String,
    pub hits: u64,
    pub histogram: BTreeMap<NaiveDate, u64>,
}

impl LinkRecord {
    /// Creates a record with no recorded visits.
    pub fn new(slug: String, target: String) -> Self {
        Self {
            slug,
            target,
            hits: 0,
            histogram: BTreeMap::new(),
        }
    }

    /// Counts one visit on `day`.
    pub fn record_hit(&mut self, day: NaiveDate) {
        self.hits += 1;
        *self.histogram.entry(day).or_insert(0) += 1;
    }

    /// Visits recorded on `day`, zero if the day has no bucket.
    pub fn hits_on(&self, day: NaiveDate) -> u64 {
        self.histogram.get(&day).copied().unwrap_or(0)
    }
}
