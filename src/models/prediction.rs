use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the hourly prediction series. Produced externally;
/// the UI treats the series as read-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub time: DateTime<Utc>,
    pub predicted_crowd_level: f64,
    pub confidence_score: f64,
}

/// Response of `/predictions/hourly/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyPredictions {
    pub station_id: u32,
    pub predictions: Vec<Prediction>,
}

impl HourlyPredictions {
    /// Chart series: one (hour label, value) pair per prediction, in
    /// backend order, values passed through unmodified.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let labels = self
            .predictions
            .iter()
            .map(|p| p.time.format("%H:%M").to_string())
            .collect();
        let values = self
            .predictions
            .iter()
            .map(|p| p.predicted_crowd_level)
            .collect();
        (labels, values)
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// A persisted prediction row from `/predictions/station/{id}` or a
/// fresh on-demand prediction from `/predictions/predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionRecord {
    pub id: u32,
    pub station_id: u32,
    pub predicted_crowd_level: f64,
    pub confidence_score: f64,
    pub prediction_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// POST body for `/predictions/predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub station_id: u32,
    pub hours_ahead: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_series_data_exact_points() {
        let predictions = HourlyPredictions {
            station_id: 7,
            predictions: vec![
                Prediction {
                    time: Utc.with_ymd_and_hms(2026, 8, 25, 8, 0, 0).unwrap(),
                    predicted_crowd_level: 2.0,
                    confidence_score: 0.8,
                },
                Prediction {
                    time: Utc.with_ymd_and_hms(2026, 8, 25, 9, 0, 0).unwrap(),
                    predicted_crowd_level: 4.5,
                    confidence_score: 0.7,
                },
            ],
        };

        let (labels, values) = predictions.series_data();
        assert_eq!(labels, vec!["08:00", "09:00"]);
        assert_eq!(values, vec![2.0, 4.5]);
    }

    #[test]
    fn test_prediction_record_parsing() {
        let json = r#"{
            "id": 31,
            "station_id": 7,
            "predicted_crowd_level": 3.8,
            "confidence_score": 0.64,
            "prediction_time": "2026-08-25T10:00:00Z",
            "created_at": "2026-08-25T09:00:00Z"
        }"#;

        let record: PredictionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.station_id, 7);
        assert_eq!(record.predicted_crowd_level, 3.8);
    }

    #[test]
    fn test_prediction_request_serialization() {
        let request = PredictionRequest {
            station_id: 7,
            hours_ahead: 3,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["station_id"], 7);
        assert_eq!(json["hours_ahead"], 3);
    }

    #[test]
    fn test_series_data_empty() {
        let predictions = HourlyPredictions {
            station_id: 7,
            predictions: vec![],
        };
        let (labels, values) = predictions.series_data();
        assert!(labels.is_empty());
        assert!(values.is_empty());
        assert!(predictions.is_empty());
    }
}
