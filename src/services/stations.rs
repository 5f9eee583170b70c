use super::api::ApiClient;
use crate::models::{
    analytics::{StationAnalytics, SystemOverview},
    crowd::{CrowdReport, CrowdReportPayload},
    error::AppError,
    prediction::{HourlyPredictions, PredictionRecord, PredictionRequest},
    station::{Station, Stations},
};

// STATION DATA SERVICE
// One typed accessor per backend endpoint. Fire-once: no caching, no
// in-flight dedup, no retries; callers re-invoke after mutations.

/// Fetches the station list with current crowd levels.
pub async fn fetch_stations() -> Result<Stations, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().stations_url();
    let stations: Vec<Station> = client.get(&url).await?;
    Ok(Stations::new(stations))
}

/// Fetches a single station.
pub async fn fetch_station(id: u32) -> Result<Station, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().station_url(id);
    client.get(&url).await
}

/// Fetches recent crowd reports for a station. Backend returns
/// most-recent-first; the order is preserved, not re-sorted.
pub async fn fetch_station_reports(id: u32, hours: u32) -> Result<Vec<CrowdReport>, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().station_reports_url(id, hours);
    client.get(&url).await
}

/// Submits a crowd report. The level is validated against the
/// vocabulary before anything goes on the wire.
pub async fn submit_crowd_report(
    station_id: u32,
    crowd_level: u8,
    description: Option<String>,
) -> Result<CrowdReport, AppError> {
    let payload = CrowdReportPayload::new(station_id, crowd_level, description)?;

    let client = ApiClient::from_session()?;
    let url = client.config().crowd_reports_url();
    client.post(&url, &payload).await
}

/// Fetches the hourly prediction series for a station.
pub async fn fetch_hourly_predictions(id: u32, hours: u32) -> Result<HourlyPredictions, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().hourly_predictions_url(id, hours);
    client.get(&url).await
}

/// Fetches recent persisted prediction records for a station.
pub async fn fetch_station_predictions(
    id: u32,
    limit: u32,
) -> Result<Vec<PredictionRecord>, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().station_predictions_url(id, limit);
    client.get(&url).await
}

/// Requests an on-demand prediction for a station.
pub async fn request_prediction(
    station_id: u32,
    hours_ahead: u32,
) -> Result<PredictionRecord, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().predict_url();
    client
        .post(
            &url,
            &PredictionRequest {
                station_id,
                hours_ahead,
            },
        )
        .await
}

/// Fetches per-station analytics over the given window.
pub async fn fetch_station_analytics(id: u32, days: u32) -> Result<StationAnalytics, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().station_analytics_url(id, days);
    client.get(&url).await
}

/// Fetches the system-wide overview.
pub async fn fetch_system_overview() -> Result<SystemOverview, AppError> {
    let client = ApiClient::from_session()?;
    let url = client.config().overview_url();
    client.get(&url).await
}

#[cfg(test)]
mod tests {
    use crate::models::crowd::CrowdReportPayload;

    #[test]
    fn test_report_payload_rejects_out_of_range_levels() {
        assert!(CrowdReportPayload::new(1, 0, None).is_err());
        assert!(CrowdReportPayload::new(1, 6, None).is_err());
    }

    #[test]
    fn test_report_payload_normalises_empty_description() {
        let payload = CrowdReportPayload::new(1, 4, Some(String::new())).unwrap();
        assert_eq!(payload.description, None);
        assert_eq!(payload.crowd_level, 4);

        let payload = CrowdReportPayload::new(1, 4, Some("  ".to_string())).unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_report_payload_keeps_description() {
        let payload =
            CrowdReportPayload::new(2, 5, Some("Platform is packed".to_string())).unwrap();
        assert_eq!(payload.description.as_deref(), Some("Platform is packed"));
    }
}
