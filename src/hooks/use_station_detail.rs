use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    analytics::StationAnalytics, crowd::CrowdReport, prediction::HourlyPredictions,
    station::Station,
};
use crate::services::stations::{
    fetch_hourly_predictions, fetch_station, fetch_station_analytics, fetch_station_reports,
};
use wasm_bindgen_futures::spawn_local;

/// Everything the station page needs, loaded in one pass.
#[derive(Clone, PartialEq, Debug)]
pub struct StationDetailData {
    pub station: Station,
    pub reports: Vec<CrowdReport>,
    pub predictions: HourlyPredictions,
    pub analytics: StationAnalytics,
}

#[derive(Clone, PartialEq, Debug)]
pub enum StationDetailState {
    Loading,
    Loaded(Rc<StationDetailData>),
    Error(String),
}

impl StationDetailState {
    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<StationDetailData>> {
        match self {
            StationDetailState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Handle returned by `use_station_detail` hook
#[derive(Clone, PartialEq)]
pub struct StationDetailHandle {
    pub state: UseStateHandle<StationDetailState>,
    /// Re-runs the full load sequence. Used after a report submission:
    /// truth is re-derived from the backend, never patched locally.
    pub reload: Callback<()>,
}

#[hook]
pub fn use_station_detail(station_id: u32) -> StationDetailHandle {
    let state = use_state(|| StationDetailState::Loading);
    let trigger = use_state(|| 0u32); // Reload trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, station_id), move |(_, station_id)| {
            let state = state.clone();
            let station_id = *station_id;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            // Reset to loading when the station changes or a reload runs
            state.set(StationDetailState::Loading);

            spawn_local(async move {
                // Four independent fetches in parallel; all must succeed
                // before the view leaves Loading.
                let (station, reports, predictions, analytics) = futures::join!(
                    fetch_station(station_id),
                    fetch_station_reports(station_id, Config::REPORT_WINDOW_HOURS),
                    fetch_hourly_predictions(station_id, Config::PREDICTION_HOURS),
                    fetch_station_analytics(station_id, Config::ANALYTICS_WINDOW_DAYS),
                );

                if aborted_check.get() {
                    return; // View model is gone, drop everything
                }

                match (station, reports, predictions, analytics) {
                    (Ok(station), Ok(reports), Ok(predictions), Ok(analytics)) => {
                        state.set(StationDetailState::Loaded(Rc::new(StationDetailData {
                            station,
                            reports,
                            predictions,
                            analytics,
                        })));
                    }
                    (Err(e), ..) | (_, Err(e), ..) | (_, _, Err(e), _) | (.., Err(e)) => {
                        gloo::console::warn!(format!("Station {station_id} load failed: {e}"));
                        state.set(StationDetailState::Error(e.to_string()));
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let reload = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    StationDetailHandle { state, reload }
}
