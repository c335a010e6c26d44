//! Wear-count ranking and percentile tiering.
//!
//! Ranks the items of a [`ClosetSnapshot`] by how often they were worn,
//! optionally restricted to a category and a reporting period, and buckets
//! the ranks into three percentile tiers for display.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::snapshot::ClosetSnapshot;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Periods
// ---------------------------------------------------------------------------

/// Reporting period for the ranking view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodFilter {
    #[default]
    All,
    Year,
    Month,
    Week,
}

impl PeriodFilter {
    /// Resolve the period to an inclusive `[start, end]` date range
    /// relative to `today`. `All` is unbounded on both sides.
    pub fn date_range(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let start = match self {
            Self::All => return (None, None),
            Self::Year => today.checked_sub_months(Months::new(12)),
            Self::Month => today.checked_sub_months(Months::new(1)),
            Self::Week => today.checked_sub_days(Days::new(7)),
        };
        (start, Some(today))
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// One entry in the ranking output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub item_id: DbId,
    pub wear_count: usize,
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Percentile bucket: 1 (top 10%), 2 (10-30%), 3 (rest).
    pub tier: u8,
}

/// Percentile tier for a 1-based rank out of `total` ranked items.
///
/// Out-of-domain inputs (`total == 0`, or the 0 a 1-based rank can never
/// take) yield tier 3.
pub fn tier_for_rank(rank: usize, total: usize) -> u8 {
    if total == 0 || rank == 0 {
        return 3;
    }
    let percentile = (rank - 1) as f64 / total as f64;
    if percentile < 0.10 {
        1
    } else if percentile < 0.30 {
        2
    } else {
        3
    }
}

/// Rank the snapshot's items by wear count within the given range.
///
/// Items are optionally pre-filtered by category. Sorting is descending by
/// count with ties broken by ascending item id, so the ranking is
/// deterministic regardless of snapshot load order.
pub fn rank_by_wear_count(
    snapshot: &ClosetSnapshot,
    category: Option<CategoryId>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<RankedItem> {
    let mut counted: Vec<(DbId, usize)> = snapshot
        .items()
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .map(|item| (item.id, snapshot.wear_count_in_range(item.id, start, end)))
        .collect();

    counted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total = counted.len();
    counted
        .into_iter()
        .enumerate()
        .map(|(index, (item_id, wear_count))| RankedItem {
            item_id,
            wear_count,
            rank: index + 1,
            tier: tier_for_rank(index + 1, total),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::snapshot::{ItemEntry, WearEntry};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Snapshot with four items whose total wear counts are 10, 10, 5, 0.
    fn ranked_snapshot() -> ClosetSnapshot {
        let items = vec![
            ItemEntry { id: 1, category: CategoryId::Tshirt },
            ItemEntry { id: 2, category: CategoryId::Shirt },
            ItemEntry { id: 3, category: CategoryId::Pants },
            ItemEntry { id: 4, category: CategoryId::Shoes },
        ];

        let mut wear = Vec::new();
        let mut next_id = 1;
        let mut add_wears = |item_id: DbId, n: u64| {
            for i in 0..n {
                wear.push(WearEntry {
                    id: next_id,
                    item_id,
                    date: date(2024, 1, 1) + Days::new(i),
                });
                next_id += 1;
            }
        };
        add_wears(1, 10);
        add_wears(2, 10);
        add_wears(3, 5);

        ClosetSnapshot::new(items, wear, vec![], date(2024, 5, 10))
    }

    // -- tier_for_rank --------------------------------------------------------

    #[test]
    fn tier_boundaries_with_four_items() {
        // percentiles: 0, 0.25, 0.5, 0.75
        assert_eq!(tier_for_rank(1, 4), 1);
        assert_eq!(tier_for_rank(2, 4), 2);
        assert_eq!(tier_for_rank(3, 4), 3);
        assert_eq!(tier_for_rank(4, 4), 3);
    }

    #[test]
    fn tier_boundaries_with_ten_items() {
        assert_eq!(tier_for_rank(1, 10), 1);
        assert_eq!(tier_for_rank(2, 10), 2);
        assert_eq!(tier_for_rank(3, 10), 2);
        assert_eq!(tier_for_rank(4, 10), 3);
        assert_eq!(tier_for_rank(10, 10), 3);
    }

    #[test]
    fn empty_ranking_defaults_to_tier_three() {
        assert_eq!(tier_for_rank(1, 0), 3);
    }

    #[test]
    fn rank_zero_is_out_of_domain_and_tier_three() {
        // Ranks are 1-based; 0 must not underflow.
        assert_eq!(tier_for_rank(0, 4), 3);
        assert_eq!(tier_for_rank(0, 0), 3);
    }

    // -- rank_by_wear_count ---------------------------------------------------

    #[test]
    fn ranks_descending_with_id_tie_break() {
        let ranked = rank_by_wear_count(&ranked_snapshot(), None, None, None);

        let summary: Vec<(DbId, usize, usize, u8)> = ranked
            .iter()
            .map(|r| (r.item_id, r.wear_count, r.rank, r.tier))
            .collect();
        assert_eq!(
            summary,
            vec![(1, 10, 1, 1), (2, 10, 2, 2), (3, 5, 3, 3), (4, 0, 4, 3)]
        );
    }

    #[test]
    fn tie_break_is_by_item_id_not_load_order() {
        let items = vec![
            ItemEntry { id: 9, category: CategoryId::Tshirt },
            ItemEntry { id: 4, category: CategoryId::Tshirt },
        ];
        let wear = vec![
            WearEntry { id: 1, item_id: 9, date: date(2024, 1, 1) },
            WearEntry { id: 2, item_id: 4, date: date(2024, 1, 2) },
        ];
        let snap = ClosetSnapshot::new(items, wear, vec![], date(2024, 5, 10));

        let ranked = rank_by_wear_count(&snap, None, None, None);
        assert_eq!(ranked[0].item_id, 4);
        assert_eq!(ranked[1].item_id, 9);
    }

    #[test]
    fn category_filter_restricts_and_rebases_total() {
        let ranked = rank_by_wear_count(&ranked_snapshot(), Some(CategoryId::Pants), None, None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item_id, 3);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].tier, 1);
    }

    #[test]
    fn range_restricts_counts() {
        // Only the first three January days fall in range.
        let ranked = rank_by_wear_count(
            &ranked_snapshot(),
            None,
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 3)),
        );
        assert_eq!(ranked[0].wear_count, 3);
        assert_eq!(ranked[2].wear_count, 3);
        assert_eq!(ranked[3].wear_count, 0);
    }

    #[test]
    fn empty_snapshot_ranks_nothing() {
        let snap = ClosetSnapshot::new(vec![], vec![], vec![], date(2024, 5, 10));
        assert!(rank_by_wear_count(&snap, None, None, None).is_empty());
    }

    // -- PeriodFilter ---------------------------------------------------------

    #[test]
    fn all_period_is_unbounded() {
        assert_eq!(PeriodFilter::All.date_range(date(2024, 5, 10)), (None, None));
    }

    #[test]
    fn week_period_spans_seven_days_back() {
        let (start, end) = PeriodFilter::Week.date_range(date(2024, 5, 10));
        assert_eq!(start, Some(date(2024, 5, 3)));
        assert_eq!(end, Some(date(2024, 5, 10)));
    }

    #[test]
    fn month_and_year_periods_use_calendar_months() {
        let today = date(2024, 5, 10);
        assert_eq!(
            PeriodFilter::Month.date_range(today).0,
            Some(date(2024, 4, 10))
        );
        assert_eq!(
            PeriodFilter::Year.date_range(today).0,
            Some(date(2023, 5, 10))
        );
    }
}
