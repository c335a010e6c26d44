//! Session snapshot and derived-statistics engine.
//!
//! A [`ClosetSnapshot`] is the explicit, session-scoped working copy of one
//! user's wardrobe: the item list plus the full wear and refresh ledgers,
//! loaded in bulk by the caller. Every statistic is a pure, synchronous read
//! over the snapshot; nothing here mutates state or performs I/O.
//!
//! "Today" is injected at construction rather than read from the clock so
//! day-relative statistics are deterministic and testable. All date math is
//! done on calendar days ([`chrono::NaiveDate`]), so same-day records can
//! never produce negative or fractional day counts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::{freshness_thresholds, CategoryId};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Snapshot entries
// ---------------------------------------------------------------------------

/// An item as seen by the statistics engine: identity plus category.
#[derive(Debug, Clone, Copy)]
pub struct ItemEntry {
    pub id: DbId,
    pub category: CategoryId,
}

/// One "worn on date X" ledger entry.
#[derive(Debug, Clone, Copy)]
pub struct WearEntry {
    pub id: DbId,
    pub item_id: DbId,
    pub date: NaiveDate,
}

/// One "refreshed at time T" ledger entry.
#[derive(Debug, Clone, Copy)]
pub struct RefreshEntry {
    pub id: DbId,
    pub item_id: DbId,
    pub refreshed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Derived value types
// ---------------------------------------------------------------------------

/// Whole calendar days since an event, with "never" sorting as the most
/// overdue value.
///
/// The derived `Ord` places `Never` after any finite day count, which is the
/// ordering every "least recently worn" comparator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DaysAgo {
    Days(i64),
    Never,
}

impl DaysAgo {
    /// The finite day count, or `None` for `Never`.
    pub fn as_days(&self) -> Option<i64> {
        match self {
            Self::Days(n) => Some(*n),
            Self::Never => None,
        }
    }
}

/// Freshness tier of an item, derived from wears since the last refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessLevel {
    Fresh,
    Moderate,
    Stale,
    /// The item's category has no freshness policy; any UI surface must
    /// hide freshness entirely rather than show it as zero.
    Hidden,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One user's in-memory wardrobe state for a session.
#[derive(Debug, Clone)]
pub struct ClosetSnapshot {
    items: Vec<ItemEntry>,
    wear: Vec<WearEntry>,
    refresh: Vec<RefreshEntry>,
    today: NaiveDate,
}

impl ClosetSnapshot {
    /// Build a snapshot from pre-loaded ledgers.
    ///
    /// `today` is the caller's current calendar date; all "days ago" and
    /// "worn today" statistics are computed relative to it.
    pub fn new(
        items: Vec<ItemEntry>,
        wear: Vec<WearEntry>,
        refresh: Vec<RefreshEntry>,
        today: NaiveDate,
    ) -> Self {
        Self { items, wear, refresh, today }
    }

    /// The items in the snapshot, in load order.
    pub fn items(&self) -> &[ItemEntry] {
        &self.items
    }

    /// The snapshot's reference date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // -----------------------------------------------------------------------
    // Wear statistics
    // -----------------------------------------------------------------------

    /// The most recent date the item was worn, if ever.
    pub fn last_worn_date(&self, item_id: DbId) -> Option<NaiveDate> {
        self.wear
            .iter()
            .filter(|w| w.item_id == item_id)
            .map(|w| w.date)
            .max()
    }

    /// Whole calendar days between the snapshot date and the given date.
    ///
    /// `None` encodes "never" and yields [`DaysAgo::Never`].
    pub fn days_ago(&self, date: Option<NaiveDate>) -> DaysAgo {
        match date {
            Some(d) => DaysAgo::Days((self.today - d).num_days()),
            None => DaysAgo::Never,
        }
    }

    /// Days since the item was last worn.
    pub fn days_since_worn(&self, item_id: DbId) -> DaysAgo {
        self.days_ago(self.last_worn_date(item_id))
    }

    /// Total number of wear records for the item.
    pub fn wear_count(&self, item_id: DbId) -> usize {
        self.wear.iter().filter(|w| w.item_id == item_id).count()
    }

    /// Number of wear records within `[start, end]` inclusive.
    ///
    /// An omitted bound leaves that side of the range unbounded.
    pub fn wear_count_in_range(
        &self,
        item_id: DbId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> usize {
        self.wear
            .iter()
            .filter(|w| w.item_id == item_id)
            .filter(|w| start.is_none_or(|s| w.date >= s))
            .filter(|w| end.is_none_or(|e| w.date <= e))
            .count()
    }

    /// Whether a wear record exists for the snapshot's reference date.
    pub fn is_worn_today(&self, item_id: DbId) -> bool {
        self.wear
            .iter()
            .any(|w| w.item_id == item_id && w.date == self.today)
    }

    /// The item's wear records, most recent first.
    pub fn item_history(&self, item_id: DbId) -> Vec<&WearEntry> {
        let mut records: Vec<&WearEntry> =
            self.wear.iter().filter(|w| w.item_id == item_id).collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    // -----------------------------------------------------------------------
    // Freshness
    // -----------------------------------------------------------------------

    /// The most recent refresh timestamp for the item, if any.
    pub fn last_refresh(&self, item_id: DbId) -> Option<Timestamp> {
        self.refresh
            .iter()
            .filter(|r| r.item_id == item_id)
            .map(|r| r.refreshed_at)
            .max()
    }

    /// Wears since the item was last refreshed.
    ///
    /// With no refresh on record this is the total wear count; otherwise it
    /// counts wears dated strictly after the calendar date of the last
    /// refresh (a wear logged on the refresh day itself does not count).
    pub fn wears_since_refresh(&self, item_id: DbId) -> usize {
        match self.last_refresh(item_id) {
            None => self.wear_count(item_id),
            Some(ts) => {
                let refresh_date = ts.date_naive();
                self.wear
                    .iter()
                    .filter(|w| w.item_id == item_id && w.date > refresh_date)
                    .count()
            }
        }
    }

    /// Freshness tier for the item under its category's policy.
    pub fn freshness_level(&self, item_id: DbId, category: CategoryId) -> FreshnessLevel {
        let Some(thresholds) = freshness_thresholds(category) else {
            return FreshnessLevel::Hidden;
        };

        let wears = self.wears_since_refresh(item_id) as u32;
        if wears < thresholds.moderate {
            FreshnessLevel::Fresh
        } else if wears < thresholds.stale {
            FreshnessLevel::Moderate
        } else {
            FreshnessLevel::Stale
        }
    }

    /// Number of items in the snapshot whose freshness tier is `Stale`.
    ///
    /// Items in categories without a freshness policy never count.
    pub fn stale_item_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.freshness_level(item.id, item.category) == FreshnessLevel::Stale)
            .count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
