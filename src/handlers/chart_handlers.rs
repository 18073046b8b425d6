// Chart handlers. Charts are public and served from the in-process
// catalog; unknown type or range values fall back to defaults rather
// than erroring.

use crate::models::{ChartQuery, ChartType, TimeRange};
use crate::state::AppStateData;
use actix_web::{web, HttpResponse, Result as ActixResult};

/// Serve community donation charts.
///
/// GET /api/charts?type=&range=
pub async fn get_charts(
    data: AppStateData,
    query: web::Query<ChartQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    let chart_type = ChartType::parse(query.chart_type.as_deref());
    let range = TimeRange::parse(query.range.as_deref());

    log::debug!("Serving charts: type={:?} range={:?}", chart_type, range);
    Ok(HttpResponse::Ok().json(data.charts.chart(chart_type, range)))
}
