//! Handler for the wear-count ranking view.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use closetlog_core::category::CategoryId;
use closetlog_core::ranking::{rank_by_wear_count, PeriodFilter};
use closetlog_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::ledger::load_closet;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    #[serde(default)]
    pub period: PeriodFilter,
    /// Category id, or `all`/absent for no filter. Parsed by hand so that
    /// `all` is not swallowed by the `other` fallback.
    pub category: Option<String>,
}

impl RankingParams {
    fn category_filter(&self) -> Option<CategoryId> {
        match self.category.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(CategoryId::parse(raw)),
        }
    }
}

/// One row of the ranking view: rank data joined with item display data.
#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub item_id: DbId,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub wear_count: usize,
    pub rank: usize,
    /// Percentile bucket: 1 (top 10%), 2 (10-30%), 3 (rest).
    pub tier: u8,
}

/// GET /api/v1/ranking?period=all|year|month|week&category=...
///
/// Items ranked by wear count within the period, most worn first. Equal
/// counts rank by ascending item id, so the order is stable.
pub async fn ranking(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_closet(&state.pool, auth.user_id).await?;
    let snapshot = &loaded.snapshot;

    let (start, end) = params.period.date_range(snapshot.today());
    let ranked = rank_by_wear_count(snapshot, params.category_filter(), start, end);

    let entries: Vec<RankingEntry> = ranked
        .into_iter()
        .filter_map(|r| {
            let item = loaded.items.iter().find(|i| i.id == r.item_id)?;
            Some(RankingEntry {
                item_id: r.item_id,
                name: item.name.clone(),
                category: item.category.clone(),
                image_url: item.image_url.clone(),
                wear_count: r.wear_count,
                rank: r.rank,
                tier: r.tier,
            })
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}
