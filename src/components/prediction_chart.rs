use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::prediction::HourlyPredictions;
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "prediction-chart";

#[derive(Properties, PartialEq)]
pub struct PredictionChartProps {
    pub predictions: Rc<HourlyPredictions>,
}

/// Line chart of the 24-hour crowd prediction for one station. Series
/// values pass through unclamped.
#[function_component(PredictionChart)]
pub fn prediction_chart(props: &PredictionChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.predictions.clone(), |predictions| {
        predictions.series_data()
    });

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    debounced_resize_listener(150, move || {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (labels, values) = series_data;

    CharmingChart::new()
        .title(
            Title::new()
                .text("24-Hour Crowd Prediction")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.clone())
                .axis_label(AxisLabel::new().color("#6b7280").interval(2)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("crowd level")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Line::new().data(values.clone()))
}
