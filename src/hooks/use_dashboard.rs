use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{analytics::SystemOverview, station::Stations};
use crate::services::stations::{fetch_stations, fetch_system_overview};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Everything the dashboard needs, loaded in one pass.
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardData {
    pub stations: Stations,
    pub overview: SystemOverview,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DashboardState {
    Loading,
    Loaded(Rc<DashboardData>),
    Error(String),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<DashboardData>> {
        match self {
            DashboardState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[hook]
pub fn use_dashboard() -> UseStateHandle<DashboardState> {
    let state = use_state(|| DashboardState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();
            let trigger = trigger;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                // Independent fetches run in parallel; the view leaves
                // Loading only once both complete. Any failure collapses
                // the whole view to Error - no partial-ready state.
                let (stations, overview) =
                    futures::join!(fetch_stations(), fetch_system_overview());

                if !aborted_check.get() {
                    match (stations, overview) {
                        (Ok(stations), Ok(overview)) => {
                            state.set(DashboardState::Loaded(Rc::new(DashboardData {
                                stations,
                                overview,
                            })));
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            gloo::console::warn!(format!("Dashboard load failed: {e}"));
                            state.set(DashboardState::Error(e.to_string()));
                        }
                    }
                }

                // Schedule next poll if enabled
                if crate::config::Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(crate::config::Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
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
