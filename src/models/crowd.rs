use super::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crowd level vocabulary used across every view.
///
/// Levels are fixed at process start; reports outside [1,5] are not
/// representable and must fail validation before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CrowdLevel {
    Empty,
    Light,
    Moderate,
    Busy,
    Crowded,
}

impl CrowdLevel {
    /// Returns the numeric level carried on the wire (1-5).
    pub const fn value(self) -> u8 {
        match self {
            CrowdLevel::Empty => 1,
            CrowdLevel::Light => 2,
            CrowdLevel::Moderate => 3,
            CrowdLevel::Busy => 4,
            CrowdLevel::Crowded => 5,
        }
    }

    /// Returns the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            CrowdLevel::Empty => "Empty",
            CrowdLevel::Light => "Light",
            CrowdLevel::Moderate => "Moderate",
            CrowdLevel::Busy => "Busy",
            CrowdLevel::Crowded => "Crowded",
        }
    }

    /// Returns a short description shown in the report form.
    pub const fn description(self) -> &'static str {
        match self {
            CrowdLevel::Empty => "Plenty of seats available",
            CrowdLevel::Light => "Some seats available",
            CrowdLevel::Moderate => "Standing room only",
            CrowdLevel::Busy => "Crowded, limited standing room",
            CrowdLevel::Crowded => "Packed, consider waiting",
        }
    }

    /// Returns the display color (hex code).
    pub const fn color(self) -> &'static str {
        match self {
            CrowdLevel::Empty => "#4caf50",   // green
            CrowdLevel::Light => "#8bc34a",   // light green
            CrowdLevel::Moderate => "#ffeb3b", // yellow
            CrowdLevel::Busy => "#ff9800",    // orange
            CrowdLevel::Crowded => "#f44336", // red
        }
    }

    /// All levels in ascending order.
    pub const fn all() -> &'static [CrowdLevel] {
        &[
            CrowdLevel::Empty,
            CrowdLevel::Light,
            CrowdLevel::Moderate,
            CrowdLevel::Busy,
            CrowdLevel::Crowded,
        ]
    }

    /// Maps a rolling average onto the vocabulary by rounding to the
    /// nearest level. Values that round outside [1,5] have no level;
    /// callers must render those as "no data", never as Moderate.
    pub fn from_value(value: f64) -> Option<CrowdLevel> {
        if !value.is_finite() {
            return None;
        }
        let rounded = value.round();
        if (1.0..=5.0).contains(&rounded) {
            CrowdLevel::try_from(rounded as u8).ok()
        } else {
            None
        }
    }
}

impl TryFrom<u8> for CrowdLevel {
    type Error = AppError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(CrowdLevel::Empty),
            2 => Ok(CrowdLevel::Light),
            3 => Ok(CrowdLevel::Moderate),
            4 => Ok(CrowdLevel::Busy),
            5 => Ok(CrowdLevel::Crowded),
            other => Err(AppError::Validation(format!(
                "Crowd level must be between 1 and 5, got {other}"
            ))),
        }
    }
}

impl From<CrowdLevel> for u8 {
    fn from(level: CrowdLevel) -> Self {
        level.value()
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.value())
    }
}

/// A crowd report as returned by the backend. Immutable once created;
/// the only client action is creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrowdReport {
    pub id: u32,
    pub station_id: u32,
    pub crowd_level: CrowdLevel,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CrowdReport {
    /// Local timestamp shown in the report list.
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// POST body for report creation. Construction validates the level and
/// normalises an empty description to absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrowdReportPayload {
    pub station_id: u32,
    pub crowd_level: u8,
    pub description: Option<String>,
}

impl CrowdReportPayload {
    pub fn new(
        station_id: u32,
        crowd_level: u8,
        description: Option<String>,
    ) -> Result<Self, AppError> {
        let level = CrowdLevel::try_from(crowd_level)?;
        let description = description.filter(|d| !d.trim().is_empty());

        Ok(Self {
            station_id,
            crowd_level: level.value(),
            description,
        })
    }
}
