//! REST routes for the dashboard service
//!
//! Every chart endpoint runs the same pipeline: fetch the three scenario
//! records, extract weekly series, assemble the requested chart, reply JSON.
//! A backend outage surfaces as an explicit `data_available: false` payload
//! so the frontend renders a placeholder instead of a blank chart.

use chart_builder::{season_breakdown, season_overview, season_summary, week_detail, ViewMode};
use lineup_fetcher::LineupFetcher;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::Filter;

/// Query parameters shared by the chart endpoints.
#[derive(Debug, Deserialize)]
struct ChartParams {
    #[serde(rename = "teamId")]
    team_id: u32,
    view: Option<String>,
}

/// JSON envelope for every chart-producing endpoint.
#[derive(Debug, Serialize)]
struct ChartResponse<T: Serialize> {
    data_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ChartResponse<T> {
    fn ok(data: T) -> Self {
        Self { data_available: true, data: Some(data), error: None }
    }

    fn unavailable() -> Self {
        Self {
            data_available: false,
            data: None,
            error: Some("data not available for this selection".to_string()),
        }
    }

    fn failed(message: String) -> Self {
        Self { data_available: false, data: None, error: Some(message) }
    }
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

fn reply<T: Serialize>(body: &ChartResponse<T>, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), status)
}

/// Build the full route tree around a shared fetcher.
pub fn routes(
    fetcher: Arc<LineupFetcher>,
) -> impl Filter<Extract = (JsonReply,), Error = warp::Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::get())
        .map(|| {
            warp::reply::with_status(
                warp::reply::json(&serde_json::json!({"status": "ok"})),
                StatusCode::OK,
            )
        });

    let overview = warp::path!("charts" / "overview")
        .and(warp::get())
        .and(warp::query::<ChartParams>())
        .and(with_fetcher(fetcher.clone()))
        .and_then(overview_handler);

    let breakdown = warp::path!("charts" / "breakdown")
        .and(warp::get())
        .and(warp::query::<ChartParams>())
        .and(with_fetcher(fetcher.clone()))
        .and_then(breakdown_handler);

    let week = warp::path!("charts" / "week" / u32)
        .and(warp::get())
        .and(warp::query::<ChartParams>())
        .and(with_fetcher(fetcher.clone()))
        .and_then(week_handler);

    let summary = warp::path!("summary")
        .and(warp::get())
        .and(warp::query::<ChartParams>())
        .and(with_fetcher(fetcher))
        .and_then(summary_handler);

    health.or(overview).unify().or(breakdown).unify().or(week).unify().or(summary).unify()
}

fn with_fetcher(
    fetcher: Arc<LineupFetcher>,
) -> impl Filter<Extract = (Arc<LineupFetcher>,), Error = Infallible> + Clone {
    warp::any().map(move || fetcher.clone())
}

async fn overview_handler(
    params: ChartParams,
    fetcher: Arc<LineupFetcher>,
) -> Result<JsonReply, warp::Rejection> {
    // Missing parameter falls back to the default view; an unrecognized
    // value degrades to a layout-only chart.
    let mode = match &params.view {
        None => Some(ViewMode::default()),
        Some(value) => ViewMode::parse(value),
    };

    let records = fetcher.fetch_scenarios(params.team_id).await;
    if records.is_empty() {
        return Ok(reply(
            &ChartResponse::<chart_builder::ChartSpec>::unavailable(),
            StatusCode::OK,
        ));
    }

    let series = match records.extract() {
        Ok(series) => series,
        Err(e) => {
            error!(team_id = params.team_id, "lineup data malformed: {e}");
            return Ok(reply(
                &ChartResponse::<chart_builder::ChartSpec>::failed(e.to_string()),
                StatusCode::BAD_GATEWAY,
            ));
        }
    };

    match season_overview(&series, mode) {
        Ok(chart) => Ok(reply(&ChartResponse::ok(chart), StatusCode::OK)),
        Err(e) => {
            error!(team_id = params.team_id, "overview assembly failed: {e}");
            Ok(reply(
                &ChartResponse::<chart_builder::ChartSpec>::failed(e.to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn breakdown_handler(
    params: ChartParams,
    fetcher: Arc<LineupFetcher>,
) -> Result<JsonReply, warp::Rejection> {
    let records = fetcher.fetch_scenarios(params.team_id).await;
    if records.is_empty() {
        return Ok(reply(
            &ChartResponse::<chart_builder::ChartSpec>::unavailable(),
            StatusCode::OK,
        ));
    }

    let result = records.extract().map_err(|e| e.to_string()).and_then(|series| {
        season_breakdown(&series).map_err(|e| e.to_string())
    });
    match result {
        Ok(chart) => Ok(reply(&ChartResponse::ok(chart), StatusCode::OK)),
        Err(message) => {
            error!(team_id = params.team_id, "breakdown assembly failed: {message}");
            Ok(reply(
                &ChartResponse::<chart_builder::ChartSpec>::failed(message),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}

async fn week_handler(
    week: u32,
    params: ChartParams,
    fetcher: Arc<LineupFetcher>,
) -> Result<JsonReply, warp::Rejection> {
    let records = fetcher.fetch_scenarios(params.team_id).await;

    match week_detail(&records.draft, &records.actual_best, &records.actual_lineup, week) {
        Ok(Some(detail)) => Ok(reply(&ChartResponse::ok(detail), StatusCode::OK)),
        Ok(None) => Ok(reply(
            &ChartResponse::<chart_builder::WeekDetail>::unavailable(),
            StatusCode::OK,
        )),
        Err(e) => {
            error!(team_id = params.team_id, week, "week detail failed: {e}");
            Ok(reply(
                &ChartResponse::<chart_builder::WeekDetail>::failed(e.to_string()),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}

async fn summary_handler(
    params: ChartParams,
    fetcher: Arc<LineupFetcher>,
) -> Result<JsonReply, warp::Rejection> {
    let records = fetcher.fetch_scenarios(params.team_id).await;
    if records.is_empty() {
        return Ok(reply(
            &ChartResponse::<chart_builder::SummaryCards>::unavailable(),
            StatusCode::OK,
        ));
    }

    let result = records.extract().map_err(|e| e.to_string()).and_then(|series| {
        season_summary(&series).map_err(|e| e.to_string())
    });
    match result {
        Ok(summary) => Ok(reply(&ChartResponse::ok(summary.cards()), StatusCode::OK)),
        Err(message) => {
            error!(team_id = params.team_id, "summary failed: {message}");
            Ok(reply(
                &ChartResponse::<chart_builder::SummaryCards>::failed(message),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_fetcher::FetcherConfig;

    fn unreachable_fetcher() -> Arc<LineupFetcher> {
        let config = FetcherConfig {
            backend_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..FetcherConfig::default()
        };
        Arc::new(LineupFetcher::new(config).unwrap())
    }

    #[tokio::test]
    async fn health_replies_ok() {
        let routes = routes(unreachable_fetcher());
        let resp = warp::test::request().path("/health").reply(&routes).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(String::from_utf8_lossy(resp.body()).contains("ok"));
    }

    #[tokio::test]
    async fn overview_without_backend_reports_unavailable() {
        let routes = routes(unreachable_fetcher());
        let resp = warp::test::request()
            .path("/charts/overview?teamId=1")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(resp.body()).to_string();
        assert!(body.contains("\"data_available\":false"));
        assert!(body.contains("data not available"));
    }

    #[tokio::test]
    async fn week_detail_without_backend_reports_unavailable() {
        let routes = routes(unreachable_fetcher());
        let resp = warp::test::request()
            .path("/charts/week/3?teamId=1")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(String::from_utf8_lossy(resp.body()).contains("\"data_available\":false"));
    }

    #[tokio::test]
    async fn missing_team_id_is_rejected() {
        let routes = routes(unreachable_fetcher());
        let resp = warp::test::request().path("/charts/overview").reply(&routes).await;
        assert_ne!(resp.status(), StatusCode::OK);
    }
}
