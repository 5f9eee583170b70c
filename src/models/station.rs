use super::crowd::CrowdLevel;
use super::error::AppError;
use serde::Deserialize;

/// Mode of transit served by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Metro,
    Bus,
    Train,
}

impl StationType {
    /// Returns the lowercase code used on the wire and in CSS classes.
    pub const fn code(self) -> &'static str {
        match self {
            StationType::Metro => "metro",
            StationType::Bus => "bus",
            StationType::Train => "train",
        }
    }

    /// Returns the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            StationType::Metro => "Metro",
            StationType::Bus => "Bus",
            StationType::Train => "Train",
        }
    }

    /// All station types.
    pub const fn all() -> &'static [StationType] {
        &[StationType::Metro, StationType::Bus, StationType::Train]
    }
}

impl std::fmt::Display for StationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for StationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metro" => Ok(StationType::Metro),
            "bus" => Ok(StationType::Bus),
            "train" => Ok(StationType::Train),
            _ => Err(AppError::Data(format!("Unknown station type: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
    pub line: String,
    pub station_type: StationType,
    pub latitude: f64,
    pub longitude: f64,
    /// Rolling average owned by the backend; absent means no recent reports.
    #[serde(default)]
    pub current_crowd_level: Option<f64>,
}

impl Station {
    /// Resolves the rolling average onto the vocabulary. Absent stays
    /// absent; it is never coerced to a default level.
    pub fn crowd_level(&self) -> Option<CrowdLevel> {
        self.current_crowd_level.and_then(CrowdLevel::from_value)
    }

    /// Formatted rolling average, e.g. "3.4 / 5".
    pub fn crowd_value_label(&self) -> Option<String> {
        self.current_crowd_level
            .map(|level| format!("{level:.1} / 5"))
    }
}

/// The loaded station list with its pure client-side derivations.
#[derive(Debug, Clone, PartialEq)]
pub struct Stations {
    data: Vec<Station>,
}

impl Stations {
    pub fn new(data: Vec<Station>) -> Self {
        Self { data }
    }

    pub fn all(&self) -> &[Station] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pure filter over the already-loaded list. `None` keeps every
    /// station; filtering never re-fetches and is idempotent.
    pub fn filter_by_type(&self, filter: Option<StationType>) -> Vec<Station> {
        self.data
            .iter()
            .filter(|s| filter.is_none_or(|t| s.station_type == t))
            .cloned()
            .collect()
    }

    /// Series for the network crowd chart: station names against current
    /// levels. Stations without recent reports plot at 0.0; that fallback
    /// is a rendering-scale choice only, presence decisions go through
    /// `Station::crowd_level`.
    pub fn chart_series(&self) -> (Vec<String>, Vec<f64>) {
        let names = self.data.iter().map(|s| s.name.clone()).collect();
        let levels = self
            .data
            .iter()
            .map(|s| s.current_crowd_level.unwrap_or(0.0))
            .collect();
        (names, levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u32, station_type: StationType, level: Option<f64>) -> Station {
        Station {
            id,
            name: format!("Station {id}"),
            line: "Red".to_string(),
            station_type,
            latitude: 52.52,
            longitude: 13.40,
            current_crowd_level: level,
        }
    }

    #[test]
    fn test_station_type_parsing() {
        assert_eq!("metro".parse::<StationType>().unwrap(), StationType::Metro);
        assert_eq!("Bus".parse::<StationType>().unwrap(), StationType::Bus);
        assert!("tram".parse::<StationType>().is_err());
    }

    #[test]
    fn test_filter_none_keeps_all() {
        let stations = Stations::new(vec![
            station(1, StationType::Metro, Some(2.0)),
            station(2, StationType::Bus, None),
        ]);
        assert_eq!(stations.filter_by_type(None).len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let stations = Stations::new(vec![
            station(1, StationType::Metro, Some(2.0)),
            station(2, StationType::Bus, None),
            station(3, StationType::Metro, Some(4.2)),
        ]);

        let once = stations.filter_by_type(Some(StationType::Metro));
        let twice = Stations::new(once.clone()).filter_by_type(Some(StationType::Metro));
        assert_eq!(once, twice);
        assert!(once.iter().all(|s| s.station_type == StationType::Metro));
    }

    #[test]
    fn test_absent_crowd_level_stays_absent() {
        let s = station(1, StationType::Train, None);
        assert_eq!(s.crowd_level(), None);
        assert_eq!(s.crowd_value_label(), None);
    }

    #[test]
    fn test_chart_series_neutral_fallback() {
        let stations = Stations::new(vec![
            station(1, StationType::Metro, Some(3.4)),
            station(2, StationType::Bus, None),
        ]);
        let (names, levels) = stations.chart_series();
        assert_eq!(names.len(), 2);
        assert_eq!(levels, vec![3.4, 0.0]);
    }
}
