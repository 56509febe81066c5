#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use emissions_core::{Dashboard, DatasetState, EmissionRecord, Metric, Selection};
use wasm_bindgen::prelude::*;

use crate::api;
use crate::components::{Heatmap, LineChart, PieChart, echarts};
use crate::utils::format_number;

static CSS: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(api::load_config);
    let mut dashboard = use_signal(|| Dashboard::new(&config));

    // One-shot dataset load
    let data_url = config.data_url.clone();
    use_future(move || {
        let url = data_url.clone();
        async move {
            let result = api::fetch_dataset(&url).await;
            if let Err(e) = dashboard.write().complete_load(result) {
                warn!(error = %e, "dataset load completed twice");
            }
        }
    });

    // Window resize listener - resize all ECharts instances
    use_effect(|| {
        let closure = Closure::wrap(Box::new(move || {
            echarts::resize_all_charts();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    let heatmap_view = use_memo(move || dashboard.read().heatmap_view());
    let pie_view = use_memo(move || dashboard.read().pie_view());
    let line_view = use_memo(move || dashboard.read().line_view());

    let on_cell_select = move |record: EmissionRecord| {
        if let Err(e) = dashboard.write().select(&record) {
            warn!(error = %e, "heatmap click ignored");
        }
    };

    let state = dashboard.read();
    let metric = state.metric();

    let status = match state.dataset() {
        DatasetState::Unloaded => rsx! {
            div { class: "status-banner loading", "Loading dataset..." }
        },
        DatasetState::Unavailable { reason } => rsx! {
            div { class: "status-banner error", "Dataset unavailable: {reason}" }
        },
        DatasetState::Loaded(rows) => rsx! {
            div { class: "status-banner", "{rows.len()} rows loaded" }
        },
    };

    let summary = match state.selection() {
        Selection::None => None,
        Selection::Selected(r) => Some(format!(
            "{} {}: population {}, GDP {}, total emission {} MT",
            r.country,
            r.year,
            format_number(r.population),
            format_number(r.gdp),
            format_number(r.total),
        )),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CSS }
        main { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Carbon Emissions by Country" }
                div { class: "metric-select",
                    label { r#for: "metric", "Color by" }
                    select {
                        id: "metric",
                        value: metric.label(),
                        onchange: move |e| match Metric::from_label(&e.value()) {
                            Some(m) => dashboard.write().set_metric(m),
                            None => warn!(value = %e.value(), "unknown metric"),
                        },
                        for m in Metric::all() {
                            option {
                                key: "{m.label()}",
                                value: m.label(),
                                selected: *m == metric,
                                "{m.label()}"
                            }
                        }
                    }
                }
            }
            {status}
            Heatmap { view: heatmap_view(), on_cell_select }
            if let Some(summary) = summary {
                p { class: "selection-summary", "{summary}" }
            }
            div { class: "detail-charts",
                PieChart { view: pie_view() }
                LineChart { view: line_view() }
            }
        }
    }
}
