//! Report API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::header;
use serde::Serialize;
use shared::intent::ReportRequest;
use shared::report::{
    HourlyVolume, ItemSales, hourly_volume, item_sales, item_sales_csv, weekly_volume,
};
use shared::util::now_millis;

use crate::auth::Identity;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
struct ItemsBody {
    items: Vec<ItemSales>,
}

#[derive(Debug, Serialize)]
struct HoursBody {
    hours: Vec<HourlyVolume>,
}

/// POST /api/report
pub async fn dispatch(
    State(state): State<ServerState>,
    identity: Identity,
    Json(request): Json<ReportRequest>,
) -> AppResult<Response> {
    identity.require_admin()?;

    let orders = state.orders().find_all_sorted().await?;
    let menu = state.menu_service().menu().await?;

    match request {
        ReportRequest::Items { timeframe } => {
            let items = item_sales(&orders, &menu, timeframe, now_millis());
            Ok(Json(ItemsBody { items }).into_response())
        }
        ReportRequest::ItemsCsv { timeframe } => {
            let items = item_sales(&orders, &menu, timeframe, now_millis());
            let csv = item_sales_csv(&items)?;
            let filename = format!(
                "attachment; filename=\"item-sales-{}.csv\"",
                chrono::Local::now().format("%Y-%m-%d")
            );
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, filename),
                ],
                csv,
            )
                .into_response())
        }
        ReportRequest::Hourly { day_start } => {
            let hours = hourly_volume(&orders, &menu, day_start);
            Ok(Json(HoursBody { hours }).into_response())
        }
        ReportRequest::Weekly { week_start } => {
            Ok(Json(weekly_volume(&orders, &menu, week_start)).into_response())
        }
    }
}
