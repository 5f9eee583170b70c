use serde::Deserialize;

/// Per-station aggregate recomputed by the backend; not cached beyond
/// the current view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationAnalytics {
    pub total_reports: u32,
    pub average_crowd_level: f64,
    pub peak_hours: Vec<String>,
}

impl StationAnalytics {
    /// Peak hours joined for display, or "N/A" when none were recorded.
    pub fn peak_hours_label(&self) -> String {
        if self.peak_hours.is_empty() {
            "N/A".to_string()
        } else {
            self.peak_hours.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrowdedStation {
    pub id: u32,
    pub name: String,
    pub average_crowd: f64,
}

/// System-wide dashboard aggregate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemOverview {
    pub total_stations: u32,
    pub total_reports: u32,
    pub reports_last_24h: u32,
    #[serde(default)]
    pub most_crowded_stations: Vec<CrowdedStation>,
}

impl SystemOverview {
    /// Name of the most crowded station, if any reports exist.
    pub fn most_crowded_name(&self) -> Option<&str> {
        self.most_crowded_stations.first().map(|s| s.name.as_str())
    }

    /// Estimated reports-per-hour curve for the trend chart: 24 hour
    /// labels with the daily volume shaped by a commute-hours sinusoid.
    /// Deterministic; the shape is presentational, not a prediction.
    pub fn trend_series(&self) -> (Vec<String>, Vec<f64>) {
        let base = f64::from(self.reports_last_24h) / 24.0;

        let labels = (0..24).map(|hour| format!("{hour}:00")).collect();
        let values = (0..24)
            .map(|hour| {
                let phase = (f64::from(hour) / 24.0) * std::f64::consts::TAU;
                let modifier = 0.7 + 0.6 * phase.sin();
                (base * modifier).round().max(0.0)
            })
            .collect();

        (labels, values)
    }
}
