//! Heatmap Component
//!
//! One cell per (year, country) colored by the selected metric. Clicking a
//! cell reports the underlying row to the dashboard.

use std::rc::Rc;

use dioxus::prelude::*;
use emissions_core::{EmissionRecord, HeatmapView, Metric};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local as spawn;

use super::echarts::{self, HEATMAP_ID, arr, flag, num, obj, text};

/// Sequential palette per metric (light → dark)
fn metric_palette(metric: Metric) -> [&'static str; 3] {
    match metric {
        Metric::Population => ["#f7fcf5", "#74c476", "#00441b"],
        Metric::Gdp | Metric::Total => ["#f7fbff", "#6baed6", "#08306b"],
    }
}

/// Tooltip: "USA 2020: 331,000,000"
fn cell_tooltip() -> JsValue {
    js_sys::Function::new_with_args("p", "return p.name + ': ' + p.value[2].toLocaleString();").into()
}

fn build_heatmap_option(view: &HeatmapView) -> JsValue {
    let (min, max) = match view.color_domain {
        // A flat domain still needs a non-zero span for the color scale
        Some(d) if d.max > d.min => (d.min, d.max),
        Some(d) => (d.min, d.min + 1.0),
        None => (0.0, 1.0),
    };

    let years = arr(view.years.iter().map(|y| text(&y.to_string())));
    let countries = arr(view.countries.iter().map(|c| text(c)));

    let data = arr(view.cells.iter().map(|cell| {
        obj(&[
            (
                "name",
                text(&format!("{} {}", cell.record.country, cell.record.year)),
            ),
            (
                "value",
                arr([
                    num(cell.year_idx as f64),
                    num(cell.country_idx as f64),
                    num(cell.value),
                ]),
            ),
        ])
    }));

    let axis_label = || obj(&[("color", text("#aaa"))]);

    obj(&[
        ("animation", flag(false)),
        (
            "tooltip",
            obj(&[("position", text("top")), ("formatter", cell_tooltip())]),
        ),
        (
            "grid",
            obj(&[
                ("left", num(100.0)),
                ("right", num(20.0)),
                ("top", num(50.0)),
                ("bottom", num(90.0)),
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
                ("splitArea", obj(&[("show", flag(true))])),
            ]),
        ),
        (
            "yAxis",
            obj(&[
                ("type", text("category")),
                ("data", countries),
                ("name", text("Countries")),
                (
                    "nameTextStyle",
                    obj(&[("fontWeight", text("bold")), ("color", text("#e0e0e0"))]),
                ),
                // Largest emitter on top
                ("inverse", flag(true)),
                ("axisLabel", axis_label()),
                ("splitArea", obj(&[("show", flag(true))])),
            ]),
        ),
        (
            "visualMap",
            obj(&[
                ("min", num(min)),
                ("max", num(max)),
                ("calculable", flag(true)),
                ("orient", text("horizontal")),
                ("left", text("center")),
                ("bottom", num(0.0)),
                ("itemWidth", num(14.0)),
                ("itemHeight", num(300.0)),
                ("text", arr([text(""), text(view.metric.label())])),
                ("textStyle", obj(&[("color", text("#e0e0e0"))])),
                (
                    "inRange",
                    obj(&[(
                        "color",
                        arr(metric_palette(view.metric).into_iter().map(text)),
                    )]),
                ),
            ]),
        ),
        (
            "series",
            arr([obj(&[
                ("type", text("heatmap")),
                ("name", text(view.metric.label())),
                ("data", data),
                (
                    "emphasis",
                    obj(&[(
                        "itemStyle",
                        obj(&[("borderColor", text("#fff")), ("borderWidth", num(1.0))]),
                    )]),
                ),
            ])]),
        ),
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapProps {
    pub view: HeatmapView,
    /// Called with the full row behind a clicked cell
    pub on_cell_select: EventHandler<EmissionRecord>,
}

#[component]
pub fn Heatmap(props: HeatmapProps) -> Element {
    // Mirror view prop into a signal for reactivity
    let mut view_signal = use_signal(|| props.view.clone());
    if *view_signal.peek() != props.view {
        view_signal.set(props.view.clone());
    }

    // Cell index from the last chart click (written by the JS listener)
    let mut clicked = use_signal(|| None::<usize>);

    // One listener per component; redraws re-attach it instead of allocating
    let listener =
        use_hook(|| Rc::new(echarts::click_listener(move |idx| clicked.set(Some(idx)))));

    let on_cell_select = props.on_cell_select;
    use_effect(move || {
        let Some(idx) = *clicked.read() else {
            return;
        };
        if let Some(record) = view_signal.peek().record_at(idx) {
            on_cell_select.call(record.clone());
        }
    });

    // Redraw whenever the view changes
    use_effect(move || {
        let view = view_signal.read().clone();
        let listener = listener.clone();

        if view.is_empty() {
            echarts::dispose_chart(HEATMAP_ID);
            return;
        }

        spawn(async move {
            // Delay to ensure the container exists after render
            gloo_timers::future::TimeoutFuture::new(50).await;

            if let Some(chart) = echarts::init_chart(HEATMAP_ID) {
                echarts::set_chart_option(&chart, &build_heatmap_option(&view));
                echarts::on_click(&chart, &listener);
            }
        });
    });

    use_drop(|| echarts::dispose_chart(HEATMAP_ID));

    let view = view_signal.read();

    rsx! {
        div { class: "chart-panel heatmap-panel",
            if view.is_empty() {
                div { class: "chart-empty", "No data to display" }
            } else {
                div { id: HEATMAP_ID, class: "chart-container chart-heatmap" }
            }
        }
    }
}
