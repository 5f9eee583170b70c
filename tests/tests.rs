#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crowd_dashboard::hooks::use_dashboard::{DashboardData, DashboardState};
    use crowd_dashboard::models::{
        analytics::{CrowdedStation, StationAnalytics, SystemOverview},
        crowd::{CrowdLevel, CrowdReport, CrowdReportPayload},
        error::AppError,
        prediction::{HourlyPredictions, Prediction},
        station::{Station, StationType, Stations},
    };
    use crowd_dashboard::services::session::{self, Session};
    use std::rc::Rc;

    // Helper function to create test stations
    fn create_test_stations() -> Vec<Station> {
        vec![
            Station {
                id: 1,
                name: "Central".to_string(),
                line: "Red".to_string(),
                station_type: StationType::Metro,
                latitude: 52.520,
                longitude: 13.405,
                current_crowd_level: Some(4.2),
            },
            Station {
                id: 2,
                name: "Harbour".to_string(),
                line: "Blue".to_string(),
                station_type: StationType::Bus,
                latitude: 52.516,
                longitude: 13.377,
                current_crowd_level: None,
            },
            Station {
                id: 3,
                name: "Airport".to_string(),
                line: "Green".to_string(),
                station_type: StationType::Metro,
                latitude: 52.559,
                longitude: 13.287,
                current_crowd_level: Some(1.8),
            },
        ]
    }

    fn create_test_overview() -> SystemOverview {
        SystemOverview {
            total_stations: 3,
            total_reports: 120,
            reports_last_24h: 48,
            most_crowded_stations: vec![CrowdedStation {
                id: 1,
                name: "Central".to_string(),
                average_crowd: 4.2,
            }],
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_network_display() {
        let error = AppError::Network("Connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: Connection refused");
    }

    #[test]
    fn test_app_error_http_display() {
        let error = AppError::Http {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: internal");
    }

    #[test]
    fn test_app_error_validation_display() {
        let error = AppError::Validation("bad level".to_string());
        assert_eq!(error.to_string(), "Validation error: bad level");
    }

    // ===== Crowd Level Vocabulary Tests =====

    #[test]
    fn test_vocabulary_covers_all_levels() {
        for level in 1..=5u8 {
            let parsed = CrowdLevel::try_from(level).unwrap();
            assert_eq!(parsed.value(), level);
            assert!(!parsed.label().is_empty());
            assert!(!parsed.description().is_empty());
            assert!(parsed.color().starts_with('#'));
            assert_eq!(parsed.color().len(), 7);
        }
    }

    #[test]
    fn test_vocabulary_rejects_out_of_range() {
        assert!(CrowdLevel::try_from(0).is_err());
        assert!(CrowdLevel::try_from(6).is_err());
        assert!(CrowdLevel::try_from(255).is_err());
    }

    #[test]
    fn test_from_value_rounds_to_nearest_level() {
        assert_eq!(CrowdLevel::from_value(3.4), Some(CrowdLevel::Moderate));
        assert_eq!(CrowdLevel::from_value(3.6), Some(CrowdLevel::Busy));
        assert_eq!(CrowdLevel::from_value(1.0), Some(CrowdLevel::Empty));
        assert_eq!(CrowdLevel::from_value(5.0), Some(CrowdLevel::Crowded));
    }

    #[test]
    fn test_from_value_out_of_range_is_none_not_moderate() {
        // "unknown" must stay distinguishable from Moderate
        assert_eq!(CrowdLevel::from_value(0.2), None);
        assert_eq!(CrowdLevel::from_value(5.7), None);
        assert_eq!(CrowdLevel::from_value(-1.0), None);
        assert_eq!(CrowdLevel::from_value(f64::NAN), None);
    }

    #[test]
    fn test_crowd_level_serde_roundtrip() {
        let json = serde_json::to_string(&CrowdLevel::Busy).unwrap();
        assert_eq!(json, "4");
        let parsed: CrowdLevel = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, CrowdLevel::Light);
        assert!(serde_json::from_str::<CrowdLevel>("9").is_err());
    }

    // ===== Report Payload Tests =====

    #[test]
    fn test_report_payload_validation() {
        let payload = CrowdReportPayload::new(7, 4, Some(String::new())).unwrap();
        assert_eq!(payload.station_id, 7);
        assert_eq!(payload.crowd_level, 4);
        assert_eq!(payload.description, None);

        assert!(CrowdReportPayload::new(7, 0, None).is_err());
        assert!(CrowdReportPayload::new(7, 6, None).is_err());
    }

    #[test]
    fn test_report_payload_serialization() {
        let payload =
            CrowdReportPayload::new(7, 4, Some("Packed platform".to_string())).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["station_id"], 7);
        assert_eq!(json["crowd_level"], 4);
        assert_eq!(json["description"], "Packed platform");
    }

    #[test]
    fn test_crowd_report_deserialization() {
        let json = r#"{
            "id": 11,
            "station_id": 7,
            "crowd_level": 4,
            "description": null,
            "created_at": "2026-08-25T08:15:00Z"
        }"#;

        let report: CrowdReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.crowd_level, CrowdLevel::Busy);
        assert_eq!(report.description, None);
        assert!(report.created_at_label().contains("08:15"));
    }

    // ===== Station Model Tests =====

    #[test]
    fn test_station_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "Central",
            "line": "Red",
            "station_type": "metro",
            "latitude": 52.52,
            "longitude": 13.405,
            "current_crowd_level": 4.2
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.station_type, StationType::Metro);
        assert_eq!(station.crowd_level(), Some(CrowdLevel::Busy));
    }

    #[test]
    fn test_station_without_crowd_level_reports_no_data() {
        let json = r#"{
            "id": 2,
            "name": "Harbour",
            "line": "Blue",
            "station_type": "bus",
            "latitude": 52.5,
            "longitude": 13.4
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.current_crowd_level, None);
        assert_eq!(station.crowd_level(), None);
        assert_eq!(station.crowd_value_label(), None);
    }

    #[test]
    fn test_metro_filter_is_strict_subset() {
        let stations = Stations::new(create_test_stations());
        let all = stations.filter_by_type(None);
        let metro = stations.filter_by_type(Some(StationType::Metro));

        assert!(metro.len() < all.len());
        assert!(metro.iter().all(|s| s.station_type == StationType::Metro));
        assert!(metro.iter().all(|m| all.contains(m)));
    }

    #[test]
    fn test_filter_idempotence() {
        let stations = Stations::new(create_test_stations());
        let once = stations.filter_by_type(Some(StationType::Metro));
        let twice = Stations::new(once.clone()).filter_by_type(Some(StationType::Metro));
        assert_eq!(once, twice);
    }

    // ===== Prediction Series Tests =====

    #[test]
    fn test_prediction_series_exact_passthrough() {
        let predictions = HourlyPredictions {
            station_id: 1,
            predictions: vec![
                Prediction {
                    time: Utc.with_ymd_and_hms(2026, 8, 25, 7, 0, 0).unwrap(),
                    predicted_crowd_level: 2.0,
                    confidence_score: 0.9,
                },
                Prediction {
                    time: Utc.with_ymd_and_hms(2026, 8, 25, 8, 0, 0).unwrap(),
                    predicted_crowd_level: 4.5,
                    confidence_score: 0.8,
                },
            ],
        };

        let (labels, values) = predictions.series_data();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels, vec!["07:00", "08:00"]);
        // Values are never clamped or modified
        assert_eq!(values, vec![2.0, 4.5]);
    }

    #[test]
    fn test_hourly_predictions_deserialization() {
        let json = r#"{
            "station_id": 5,
            "predictions": [
                {
                    "time": "2026-08-25T07:00:00Z",
                    "predicted_crowd_level": 3.1,
                    "confidence_score": 0.72
                }
            ]
        }"#;

        let predictions: HourlyPredictions = serde_json::from_str(json).unwrap();
        assert_eq!(predictions.station_id, 5);
        assert_eq!(predictions.predictions.len(), 1);
        assert_eq!(predictions.predictions[0].predicted_crowd_level, 3.1);
    }

    // ===== Analytics Model Tests =====

    #[test]
    fn test_station_analytics_deserialization() {
        let json = r#"{
            "station_id": 1,
            "period_days": 7,
            "total_reports": 42,
            "average_crowd_level": 3.4,
            "peak_hours": ["8:00", "17:00", "18:00"]
        }"#;

        let analytics: StationAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.total_reports, 42);
        assert_eq!(analytics.peak_hours_label(), "8:00, 17:00, 18:00");
    }

    #[test]
    fn test_system_overview_deserialization() {
        let json = r#"{
            "total_stations": 3,
            "total_reports": 120,
            "reports_last_24h": 48,
            "most_crowded_stations": [
                {"id": 1, "name": "Central", "average_crowd": 4.2}
            ]
        }"#;

        let overview: SystemOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.most_crowded_name(), Some("Central"));
        assert_eq!(overview.reports_last_24h, 48);
    }

    #[test]
    fn test_trend_series_has_24_hourly_points() {
        let (labels, values) = create_test_overview().trend_series();
        assert_eq!(labels.len(), 24);
        assert_eq!(values.len(), 24);
        // Deterministic: same input yields the same curve
        assert_eq!(create_test_overview().trend_series().1, values);
    }

    // ===== Session Tests =====

    #[test]
    fn test_session_resolution_full() {
        let session = session::resolve(
            Some("tok-abc".to_string()),
            Some("rider".to_string()),
        );
        assert_eq!(session, Some(Session::new("rider", "tok-abc")));
    }

    #[test]
    fn test_session_token_without_username_is_anonymous() {
        // Unresolved identity: must not surface as authenticated
        assert_eq!(session::resolve(Some("tok-abc".to_string()), None), None);
    }

    #[test]
    fn test_session_requires_token() {
        assert_eq!(session::resolve(None, Some("rider".to_string())), None);
        assert_eq!(
            session::resolve(Some(String::new()), Some("rider".to_string())),
            None
        );
    }

    // ===== Loader State Tests =====

    #[test]
    fn test_dashboard_state_data_extraction() {
        let data = Rc::new(DashboardData {
            stations: Stations::new(create_test_stations()),
            overview: create_test_overview(),
        });
        let loaded = DashboardState::Loaded(data.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &data);
        assert!(!loaded.is_loading());

        let loading = DashboardState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = DashboardState::Error("Network error: timeout".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_dashboard_state_equality() {
        assert_eq!(DashboardState::Loading, DashboardState::Loading);
        assert_eq!(
            DashboardState::Error("boom".to_string()),
            DashboardState::Error("boom".to_string())
        );

        let data1 = Rc::new(DashboardData {
            stations: Stations::new(create_test_stations()),
            overview: create_test_overview(),
        });
        let data2 = Rc::new(DashboardData {
            stations: Stations::new(create_test_stations()),
            overview: create_test_overview(),
        });
        assert_eq!(
            DashboardState::Loaded(data1),
            DashboardState::Loaded(data2)
        );
    }
}
