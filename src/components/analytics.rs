use std::rc::Rc;
use yew::prelude::*;

use crate::components::status::{ErrorNotice, LoadingIndicator};
use crate::components::trend_chart::TrendChart;
use crate::hooks::use_analytics::{AnalyticsState, use_analytics};
use crate::models::station::Stations;

/// System-wide analytics: overview counters, most crowded stations,
/// report trend chart and a per-station crowd table.
#[function_component(Analytics)]
pub fn analytics() -> Html {
    let state = use_analytics();

    match &*state {
        AnalyticsState::Loading => html! {
            <LoadingIndicator message="Loading analytics..." />
        },
        AnalyticsState::Error(msg) => html! {
            <ErrorNotice message={msg.clone()} />
        },
        AnalyticsState::Loaded(data) => {
            let overview = Rc::new(data.overview.clone());

            html! {
                <div class="analytics">
                    <h2>{"System Analytics"}</h2>

                    <div class="analytics-summary">
                        <p>{"Total Stations: "}{data.overview.total_stations}</p>
                        <p>{"Total Reports: "}{data.overview.total_reports}</p>
                        <p>{"Reports (24h): "}{data.overview.reports_last_24h}</p>
                    </div>

                    <div class="analytics-highlights">
                        <h3>{"Most Crowded Stations"}</h3>
                        {
                            if data.overview.most_crowded_stations.is_empty() {
                                html! { <p class="no-data">{"No crowding data available"}</p> }
                            } else {
                                html! {
                                    <ul>
                                        {
                                            data.overview.most_crowded_stations.iter().map(|s| html! {
                                                <li key={s.id}>
                                                    {&s.name}
                                                    {format!(" - average {:.1}", s.average_crowd)}
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                }
                            }
                        }
                    </div>

                    <div class="analytics-visuals">
                        <div class="trendchart-container">
                            <TrendChart overview={overview} />
                        </div>

                        <div class="crowd-table-container">
                            <h3>{"Station Crowding"}</h3>
                            {crowd_table(&data.stations)}
                        </div>
                    </div>
                </div>
            }
        }
    }
}

fn crowd_table(stations: &Stations) -> Html {
    if stations.is_empty() {
        return html! { <p class="no-data">{"No station data available"}</p> };
    }

    html! {
        <table class="crowd-table">
            <thead>
                <tr>
                    <th>{"Station"}</th>
                    <th>{"Line"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    stations.all().iter().map(|station| {
                        html! {
                            <tr key={station.id}>
                                <td>{&station.name}</td>
                                <td>{&station.line}</td>
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
                                            None => html! {
                                                <span class="no-data">{"No data"}</span>
                                            },
                                        }
                                    }
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
