use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::crowd::CrowdLevel;
use crate::models::station::Stations;
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "crowd-chart";

#[derive(Properties, PartialEq)]
pub struct CrowdChartProps {
    pub stations: Rc<Stations>,
}

/// Bar chart of current crowd levels across the network, colour-banded
/// by the crowd vocabulary.
#[function_component(CrowdChart)]
pub fn crowd_chart(props: &CrowdChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.stations.clone(), |stations| stations.chart_series());

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
    let (names, levels) = series_data;

    // One colour band per vocabulary level; values round to the nearest
    // level so bands are centred on the integers.
    let pieces: Vec<VisualMapPiece> = CrowdLevel::all()
        .iter()
        .map(|level| {
            let value = f64::from(level.value());
            VisualMapPiece::new()
                .gte(value - 0.5)
                .lt(value + 0.5)
                .color(level.color())
        })
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Crowd Levels Across Stations")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .visual_map(VisualMap::new().show(false).pieces(pieces))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(names.clone())
                .axis_label(AxisLabel::new().rotate(45).color("#6b7280")),
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
        .series(Bar::new().data(levels.clone()).bar_width("70%"))
}
