use yew::prelude::*;

use crate::components::status::{ErrorNotice, LoadingIndicator};
use crate::hooks::use_stations::{StationsState, use_stations};
use crate::models::station::{Station, StationType};

#[derive(Properties, PartialEq)]
pub struct StationListProps {
    pub on_select_station: Callback<u32>,
}

/// Station table with a pure client-side type filter. Filter changes
/// never re-fetch; they re-derive the view from the loaded list.
#[function_component(StationList)]
pub fn station_list(props: &StationListProps) -> Html {
    let state = use_stations();
    let filter = use_state(|| None::<StationType>);

    match &*state {
        StationsState::Loading => html! {
            <LoadingIndicator message="Loading stations..." />
        },
        StationsState::Error(msg) => html! {
            <ErrorNotice message={msg.clone()} />
        },
        StationsState::Loaded(stations) => {
            let filtered = stations.filter_by_type(*filter);

            html! {
                <div class="station-list">
                    <div class="list-header">
                        <h2>{"All Stations"}</h2>
                        <div class="filter-buttons">
                            {filter_button(&filter, None, "All")}
                            {
                                StationType::all().iter().map(|t| {
                                    filter_button(&filter, Some(*t), t.label())
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="stations-table">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Station Name"}</th>
                                    <th>{"Line"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Current Status"}</th>
                                    <th>{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    filtered.iter().map(|station| {
                                        station_row(station, &props.on_select_station)
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        }
    }
}

fn filter_button(
    filter: &UseStateHandle<Option<StationType>>,
    value: Option<StationType>,
    label: &str,
) -> Html {
    let class = if **filter == value { "active" } else { "" };
    let onclick = {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(value))
    };

    html! {
        <button {class} {onclick}>{label}</button>
    }
}

fn station_row(station: &Station, on_select: &Callback<u32>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let id = station.id;
        Callback::from(move |_| on_select.emit(id))
    };

    html! {
        <tr key={station.id}>
            <td>{&station.name}</td>
            <td>{&station.line}</td>
            <td>
                <span class={format!("type-badge {}", station.station_type.code())}>
                    {station.station_type.label()}
                </span>
            </td>
            <td>
                {
                    match station.crowd_level() {
                        Some(level) => html! {
                            <span
                                class="crowd-badge"
                                style={format!("background-color: {}20; color: {}",
                                    level.color(), level.color())}
                            >
                                {level.label()}
                            </span>
                        },
                        None => html! { <span class="no-data">{"No data"}</span> },
                    }
                }
            </td>
            <td>
                <button class="view-btn" {onclick}>{"View Details"}</button>
            </td>
        </tr>
    }
}
