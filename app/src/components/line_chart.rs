//! Line Chart Component
//!
//! GDP and total emission over the years for the selected country, each on
//! its own y axis.

use dioxus::prelude::*;
use emissions_core::LineView;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local as spawn;

use super::echarts::{self, LINE_ID, arr, flag, num, obj, text};

const GDP_COLOR: &str = "#f1c40f";
const EMISSION_COLOR: &str = "#3498db";

/// Axis upper bound; an all-zero series still gets a visible axis
fn axis_max(max: f64) -> f64 {
    if max > 0.0 { max } else { 1.0 }
}

fn value_axis(name: &str, position: &str, max: f64, color: &str) -> JsValue {
    obj(&[
        ("type", text("value")),
        ("name", text(name)),
        ("position", text(position)),
        ("min", num(0.0)),
        ("max", num(axis_max(max))),
        ("nameTextStyle", obj(&[("color", text(color))])),
        (
            "axisLine",
            obj(&[
                ("show", flag(true)),
                ("lineStyle", obj(&[("color", text(color))])),
            ]),
        ),
        ("axisLabel", obj(&[("color", text("#aaa"))])),
        (
            "splitLine",
            obj(&[("lineStyle", obj(&[("color", text("#333"))]))]),
        ),
    ])
}

fn line_series(name: &str, axis: usize, color: &str, values: JsValue) -> JsValue {
    obj(&[
        ("type", text("line")),
        ("name", text(name)),
        ("yAxisIndex", num(axis as f64)),
        ("data", values),
        ("symbol", text("circle")),
        ("symbolSize", num(5.0)),
        ("lineStyle", obj(&[("width", num(2.0)), ("color", text(color))])),
        ("itemStyle", obj(&[("color", text(color))])),
    ])
}

fn build_line_option(view: &LineView) -> JsValue {
    let years = arr(view.points.iter().map(|p| text(&p.year.to_string())));
    let gdp = arr(view.points.iter().map(|p| num(p.gdp_value)));
    let emission = arr(view.points.iter().map(|p| num(p.emission_value)));

    obj(&[
        ("animation", flag(false)),
        ("tooltip", obj(&[("trigger", text("axis"))])),
        (
            "legend",
            obj(&[
                ("data", arr([text("GDP"), text("Total Emission")])),
                ("top", num(0.0)),
                ("textStyle", obj(&[("color", text("#e0e0e0"))])),
            ]),
        ),
        (
            "grid",
            obj(&[
                ("left", num(80.0)),
                ("right", num(80.0)),
                ("top", num(50.0)),
                ("bottom", num(60.0)),
            ]),
        ),
        (
            "xAxis",
            obj(&[
                ("type", text("category")),
                ("data", years),
                (
                    "axisLabel",
                    obj(&[("rotate", num(45.0)), ("color", text("#aaa"))]),
                ),
            ]),
        ),
        (
            "yAxis",
            arr([
                value_axis("GDP (Hundred Million)", "left", view.gdp_max(), GDP_COLOR),
                value_axis(
                    "Total Emission (MT)",
                    "right",
                    view.emission_max(),
                    EMISSION_COLOR,
                ),
            ]),
        ),
        (
            "series",
            arr([
                line_series("GDP", 0, GDP_COLOR, gdp),
                line_series("Total Emission", 1, EMISSION_COLOR, emission),
            ]),
        ),
    ])
}

#[derive(Props, Clone, PartialEq)]
pub struct LineChartProps {
    pub view: LineView,
}

#[component]
pub fn LineChart(props: LineChartProps) -> Element {
    let mut view_signal = use_signal(|| props.view.clone());
    if *view_signal.peek() != props.view {
        view_signal.set(props.view.clone());
    }

    use_effect(move || {
        let view = view_signal.read().clone();

        if view.is_empty() {
            echarts::dispose_chart(LINE_ID);
            return;
        }

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(50).await;

            if let Some(chart) = echarts::init_chart(LINE_ID) {
                echarts::set_chart_option(&chart, &build_line_option(&view));
            }
        });
    });

    use_drop(|| echarts::dispose_chart(LINE_ID));

    let view = view_signal.read();

    rsx! {
        div { class: "chart-panel line-panel",
            if let Some(country) = view.country.as_ref().filter(|_| !view.is_empty()) {
                h3 { class: "chart-title", "{country}: GDP and Total Emission" }
                div { id: LINE_ID, class: "chart-container chart-line" }
            } else {
                div { class: "chart-empty", "Click a heatmap cell to see the country's trend" }
            }
        }
    }
}
