use yew::prelude::*;

use crate::models::station::Station;

#[derive(Properties, PartialEq)]
pub struct StationCardProps {
    pub station: Station,
    pub on_select: Callback<u32>,
}

/// Compact station tile on the dashboard snapshot. A station without
/// recent reports shows "No recent reports", never a numeric level.
#[function_component(StationCard)]
pub fn station_card(props: &StationCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.station.id;
        Callback::from(move |_| on_select.emit(id))
    };

    html! {
        <div class="station-card" {onclick}>
            <h4>{&props.station.name}</h4>
            <p class="station-line">{&props.station.line}</p>
            <div class="crowd-status">
                {
                    match (props.station.crowd_level(), props.station.crowd_value_label()) {
                        (Some(level), Some(value)) => html! {
                            <>
                                <span class="crowd-level" style={format!("color: {}", level.color())}>
                                    {level.label()}
                                </span>
                                <span class="crowd-value">{value}</span>
                            </>
                        },
                        _ => html! {
                            <span class="no-data">{"No recent reports"}</span>
                        },
                    }
                }
            </div>
        </div>
    }
}
