use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{analytics::SystemOverview, station::Stations};
use crate::services::stations::{fetch_stations, fetch_system_overview};
use wasm_bindgen_futures::spawn_local;

/// Overview aggregates plus the station list backing the per-station
/// crowd table on the analytics view.
#[derive(Clone, PartialEq, Debug)]
pub struct AnalyticsData {
    pub overview: SystemOverview,
    pub stations: Stations,
}

#[derive(Clone, PartialEq, Debug)]
pub enum AnalyticsState {
    Loading,
    Loaded(Rc<AnalyticsData>),
    Error(String),
}

impl AnalyticsState {
    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<AnalyticsData>> {
        match self {
            AnalyticsState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[hook]
pub fn use_analytics() -> UseStateHandle<AnalyticsState> {
    let state = use_state(|| AnalyticsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let state = state.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let (overview, stations) =
                    futures::join!(fetch_system_overview(), fetch_stations());

                if !aborted_check.get() {
                    match (overview, stations) {
                        (Ok(overview), Ok(stations)) => {
                            state.set(AnalyticsState::Loaded(Rc::new(AnalyticsData {
                                overview,
                                stations,
                            })));
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            gloo::console::warn!(format!("Analytics load failed: {e}"));
                            state.set(AnalyticsState::Error(e.to_string()));
                        }
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
