use std::rc::Rc;
use yew::prelude::*;

use crate::components::crowd_chart::CrowdChart;
use crate::components::station_card::StationCard;
use crate::components::status::{ErrorNotice, LoadingIndicator};
use crate::hooks::use_dashboard::{DashboardState, use_dashboard};
use crate::models::station::Stations;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_select_station: Callback<u32>,
}

/// Transit network overview: stat cards, a live station snapshot and
/// the network crowd chart. All panels come from one load; a failed
/// fetch collapses the whole view to an error.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = use_dashboard();

    match &*state {
        DashboardState::Loading => html! {
            <LoadingIndicator message="Loading dashboard..." />
        },
        DashboardState::Error(msg) => html! {
            <ErrorNotice message={msg.clone()} />
        },
        DashboardState::Loaded(data) => {
            let overview = &data.overview;
            let stations = Rc::new(data.stations.clone());

            html! {
                <div class="dashboard">
                    <h2>{"Transit Network Overview"}</h2>

                    <div class="stats-grid">
                        <div class="stat-card">
                            <h3>{"Total Stations"}</h3>
                            <span class="stat-value">{overview.total_stations}</span>
                        </div>
                        <div class="stat-card">
                            <h3>{"Total Reports"}</h3>
                            <span class="stat-value">{overview.total_reports}</span>
                        </div>
                        <div class="stat-card">
                            <h3>{"Reports (24h)"}</h3>
                            <span class="stat-value">{overview.reports_last_24h}</span>
                        </div>
                        <div class="stat-card">
                            <h3>{"Most Crowded"}</h3>
                            <span class="stat-value">
                                {overview.most_crowded_name().unwrap_or("N/A")}
                            </span>
                        </div>
                    </div>

                    <div class="dashboard-content">
                        <div class="stations-section">
                            <h3>{"Live Station Snapshot"}</h3>
                            {station_snapshot(&data.stations, &props.on_select_station)}
                        </div>

                        <div class="chart-section">
                            <CrowdChart stations={stations} />
                        </div>
                    </div>
                </div>
            }
        }
    }
}

fn station_snapshot(stations: &Stations, on_select: &Callback<u32>) -> Html {
    if stations.is_empty() {
        return html! { <p class="no-data">{"No station data available"}</p> };
    }

    html! {
        <div class="stations-grid">
            {
                stations.all().iter().take(6).map(|station| html! {
                    <StationCard
                        key={station.id}
                        station={station.clone()}
                        on_select={on_select.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
