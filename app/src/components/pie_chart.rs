//! Pie Chart Component
//!
//! Emission source breakdown of the selected (country, year).

use dioxus::prelude::*;
use emissions_core::{CompositionSlice, PieView};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local as spawn;

use super::echarts::{self, PIE_ID, arr, flag, num, obj, text};

const SOURCE_COLORS: [&str; 6] = [
    "#2c3e50", "#e67e22", "#3498db", "#95a5a6", "#e74c3c", "#9b59b6",
];

fn build_pie_option(slices: &[CompositionSlice]) -> JsValue {
    let data = arr(slices.iter().enumerate().map(|(i, slice)| {
        obj(&[
            ("name", text(slice.label())),
            ("value", num(slice.value)),
            (
                "label",
                obj(&[(
                    "formatter",
                    text(&format!("{}\n{:.2}%", slice.label(), slice.percentage)),
                )]),
            ),
            (
                "itemStyle",
                obj(&[("color", text(SOURCE_COLORS[i % SOURCE_COLORS.len()]))]),
            ),
        ])
    }));

    obj(&[
        ("animation", flag(false)),
        (
            "tooltip",
            obj(&[("trigger", text("item")), ("formatter", text("{b}: {c}"))]),
        ),
        (
            "series",
            arr([obj(&[
                ("type", text("pie")),
                ("radius", text("65%")),
                ("center", arr([text("50%"), text("50%")])),
                ("data", data),
                (
                    "labelLine",
                    obj(&[("show", flag(true)), ("length", num(10.0))]),
                ),
                ("emphasis", obj(&[("scale", flag(true))])),
            ])]),
        ),
    ])
}

#[derive(Props, Clone, PartialEq)]
pub struct PieChartProps {
    pub view: PieView,
}

#[component]
pub fn PieChart(props: PieChartProps) -> Element {
    let mut view_signal = use_signal(|| props.view.clone());
    if *view_signal.peek() != props.view {
        view_signal.set(props.view.clone());
    }

    use_effect(move || {
        let view = view_signal.read().clone();

        let PieView::Composition { slices, .. } = view else {
            echarts::dispose_chart(PIE_ID);
            return;
        };

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(50).await;

            if let Some(chart) = echarts::init_chart(PIE_ID) {
                echarts::set_chart_option(&chart, &build_pie_option(&slices));
            }
        });
    });

    use_drop(|| echarts::dispose_chart(PIE_ID));

    let view = view_signal.read();

    rsx! {
        div { class: "chart-panel pie-panel",
            match &*view {
                PieView::NoSelection => rsx! {
                    div { class: "chart-empty", "Click a heatmap cell to see its emission sources" }
                },
                PieView::Degenerate { country, year } => rsx! {
                    div { class: "chart-empty", "No emission source data for {country} {year}" }
                },
                PieView::Composition { country, year, .. } => rsx! {
                    h3 { class: "chart-title", "{country} {year}" }
                    div { id: PIE_ID, class: "chart-container chart-pie" }
                },
            }
        }
    }
}
