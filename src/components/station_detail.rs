use std::rc::Rc;
use yew::prelude::*;

use crate::components::prediction_chart::PredictionChart;
use crate::components::report_form::ReportForm;
use crate::components::status::{ErrorNotice, LoadingIndicator};
use crate::hooks::use_station_detail::{StationDetailState, use_station_detail};
use crate::models::crowd::{CrowdLevel, CrowdReport};
use crate::services::stations::submit_crowd_report;
use wasm_bindgen_futures::spawn_local;

#[derive(Properties, PartialEq)]
pub struct StationDetailProps {
    pub station_id: u32,
    pub authenticated: bool,
    pub on_require_login: Callback<()>,
}

/// Station page: current status, analytics, prediction chart and recent
/// reports, loaded in one parallel pass. A submitted report closes the
/// form and re-runs the full load; local state is never patched.
#[function_component(StationDetail)]
pub fn station_detail(props: &StationDetailProps) -> Html {
    let detail = use_station_detail(props.station_id);
    let show_form = use_state(|| false);
    let submitting = use_state(|| false);

    let open_form = {
        let show_form = show_form.clone();
        let authenticated = props.authenticated;
        let on_require_login = props.on_require_login.clone();
        Callback::from(move |_| {
            if authenticated {
                show_form.set(true);
            } else {
                on_require_login.emit(());
            }
        })
    };

    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |()| show_form.set(false))
    };

    let on_submit = {
        let show_form = show_form.clone();
        let submitting = submitting.clone();
        let reload = detail.reload.clone();
        let station_id = props.station_id;

        Callback::from(move |(level, description): (CrowdLevel, String)| {
            if *submitting {
                return; // One submission per confirmation
            }
            submitting.set(true);

            let show_form = show_form.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();

            spawn_local(async move {
                match submit_crowd_report(station_id, level.value(), Some(description)).await {
                    Ok(_) => {
                        show_form.set(false);
                        submitting.set(false);
                        reload.emit(()); // Re-derive truth from the backend
                    }
                    Err(e) => {
                        gloo::console::warn!(format!("Report submission failed: {e}"));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    match &*detail.state {
        StationDetailState::Loading => html! {
            <LoadingIndicator message="Loading station details..." />
        },
        StationDetailState::Error(msg) => html! {
            <ErrorNotice message={msg.clone()} />
        },
        StationDetailState::Loaded(data) => {
            let station = &data.station;
            let predictions = Rc::new(data.predictions.clone());

            html! {
                <div class="station-detail">
                    <div class="detail-header">
                        <div>
                            <h2>{&station.name}</h2>
                            <p class="station-meta">
                                {&station.line}{" • "}{station.station_type.label()}
                            </p>
                        </div>
                        <button class="report-btn" onclick={open_form}>
                            {"Report Crowd Level"}
                        </button>
                    </div>

                    <div class="detail-grid">
                        <div class="detail-section">
                            <h3>{"Current Status"}</h3>
                            <div class="current-status">
                                {current_status(station.crowd_level(), station.crowd_value_label())}
                            </div>
                        </div>

                        <div class="detail-section">
                            <h3>{"Station Analytics (7 days)"}</h3>
                            <div class="analytics-stats">
                                <div class="stat">
                                    <span class="stat-label">{"Total Reports:"}</span>
                                    <span class="stat-value">{data.analytics.total_reports}</span>
                                </div>
                                <div class="stat">
                                    <span class="stat-label">{"Avg Crowd:"}</span>
                                    <span class="stat-value">
                                        {format!("{:.1}", data.analytics.average_crowd_level)}
                                    </span>
                                </div>
                                <div class="stat">
                                    <span class="stat-label">{"Peak Hours:"}</span>
                                    <span class="stat-value">{data.analytics.peak_hours_label()}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    if !predictions.is_empty() {
                        <div class="chart-section-card">
                            <PredictionChart predictions={predictions.clone()} />
                        </div>
                    }

                    <div class="recent-reports">
                        <h3>{"Recent Reports"}</h3>
                        {recent_reports(&data.reports)}
                    </div>

                    if *show_form {
                        <ReportForm
                            on_submit={on_submit}
                            on_close={close_form}
                            submitting={*submitting}
                        />
                    }
                </div>
            }
        }
    }
}

fn current_status(level: Option<CrowdLevel>, value_label: Option<String>) -> Html {
    match (level, value_label) {
        (Some(level), Some(value)) => html! {
            <>
                <div
                    class="status-indicator"
                    style={format!("background-color: {}", level.color())}
                >
                    {level.label()}
                </div>
                <p>{"Crowd Level: "}{value}</p>
            </>
        },
        _ => html! {
            <p class="no-data">{"No recent reports available"}</p>
        },
    }
}

fn recent_reports(reports: &[CrowdReport]) -> Html {
    if reports.is_empty() {
        return html! { <p class="no-data">{"No reports yet"}</p> };
    }

    // Backend order is most-recent-first; show the latest five.
    html! {
        <div class="reports-list">
            {
                reports.iter().take(5).map(|report| html! {
                    <div key={report.id} class="report-item">
                        <div class="report-level">
                            <span
                                class="level-badge"
                                style={format!("background-color: {}20; color: {}",
                                    report.crowd_level.color(), report.crowd_level.color())}
                            >
                                {report.crowd_level.label()}
                            </span>
                        </div>
                        <div class="report-details">
                            if let Some(description) = &report.description {
                                <p>{description}</p>
                            }
                            <span class="report-time">{report.created_at_label()}</span>
                        </div>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
