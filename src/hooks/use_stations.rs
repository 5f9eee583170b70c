use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::station::Stations;
use crate::services::stations::fetch_stations;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum StationsState {
    Loading,
    Loaded(Rc<Stations>),
    Error(String),
}

impl StationsState {
    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<Stations>> {
        match self {
            StationsState::Loaded(stations) => Some(stations),
            _ => None,
        }
    }
}

#[hook]
pub fn use_stations() -> UseStateHandle<StationsState> {
    let state = use_state(|| StationsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let state = state.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                match fetch_stations().await {
                    Ok(stations) if !aborted_check.get() => {
                        state.set(StationsState::Loaded(Rc::new(stations)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::warn!(format!("Station list load failed: {e}"));
                        state.set(StationsState::Error(e.to_string()));
                    }
                    _ => {} // Request was abandoned, ignore result
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
