//! ECharts JS Interop
//!
//! Thin wasm-bindgen layer shared by the chart components. Options are built
//! as plain JS objects with the [`obj`] / [`arr`] helpers.

use wasm_bindgen::prelude::*;

/// DOM ids of every chart container on the page
pub const HEATMAP_ID: &str = "chart-heatmap";
pub const PIE_ID: &str = "chart-pie";
pub const LINE_ID: &str = "chart-line";

const CHART_IDS: [&str; 3] = [HEATMAP_ID, PIE_ID, LINE_ID];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

// ─────────────────────────────────────────────────────────────────────────────
// Option Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Build a JS object from key/value pairs
pub fn obj(entries: &[(&str, JsValue)]) -> JsValue {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        // Reflect::set only fails on frozen objects or proxies
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

/// Build a JS array
pub fn arr(items: impl IntoIterator<Item = JsValue>) -> JsValue {
    items.into_iter().collect::<js_sys::Array>().into()
}

pub fn text(s: &str) -> JsValue {
    JsValue::from_str(s)
}

/// Number for a visual attribute. Never hands NaN to the chart.
pub fn num(v: f64) -> JsValue {
    JsValue::from_f64(if v.is_finite() { v } else { 0.0 })
}

pub fn flag(b: bool) -> JsValue {
    JsValue::from_bool(b)
}

// ─────────────────────────────────────────────────────────────────────────────
// Instance Management
// ─────────────────────────────────────────────────────────────────────────────

fn element(element_id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(element_id)
}

fn existing_instance(element_id: &str) -> Option<JsValue> {
    let instance = echarts_get_instance(&element(element_id)?);
    (!instance.is_null() && !instance.is_undefined()).then_some(instance)
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

/// Get the chart bound to `element_id`, creating it on first use
pub fn init_chart(element_id: &str) -> Option<JsValue> {
    if let Some(existing) = existing_instance(element_id) {
        return Some(existing);
    }
    Some(echarts_init(&element(element_id)?))
}

/// Replace the chart's option (no merge with the previous one)
pub fn set_chart_option(chart: &JsValue, option: &JsValue) {
    if let Some(func) = method(chart, "setOption") {
        let _ = func.call2(chart, option, &JsValue::TRUE);
    }
}

/// Click listener owned by a chart component and reused across redraws
pub type ClickListener = Closure<dyn FnMut(JsValue)>;

/// Item index reported by a click, if it points at a data item
fn click_index(data_index: Option<f64>) -> Option<usize> {
    data_index
        .filter(|idx| idx.is_finite() && *idx >= 0.0)
        .map(|idx| idx as usize)
}

/// Wrap `handler` so it receives the clicked item's index in its series
pub fn click_listener(mut handler: impl FnMut(usize) + 'static) -> ClickListener {
    Closure::new(move |params: JsValue| {
        let data_index = js_sys::Reflect::get(&params, &JsValue::from_str("dataIndex"))
            .ok()
            .and_then(|v| v.as_f64());
        if let Some(idx) = click_index(data_index) {
            handler(idx);
        }
    })
}

/// Attach `listener` as the chart's only click handler
pub fn on_click(chart: &JsValue, listener: &ClickListener) {
    if let Some(off) = method(chart, "off") {
        let _ = off.call1(chart, &text("click"));
    }
    if let Some(on) = method(chart, "on") {
        let _ = on.call2(chart, &text("click"), listener.as_ref());
    }
}

pub fn dispose_chart(element_id: &str) {
    if let Some(instance) = existing_instance(element_id)
        && let Some(func) = method(&instance, "dispose")
    {
        let _ = func.call0(&instance);
    }
}

/// Resize all charts - call on window resize
pub fn resize_all_charts() {
    for id in CHART_IDS {
        if let Some(instance) = existing_instance(id)
            && let Some(func) = method(&instance, "resize")
        {
            let _ = func.call0(&instance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_index_accepts_data_items() {
        assert_eq!(click_index(Some(0.0)), Some(0));
        assert_eq!(click_index(Some(17.0)), Some(17));
    }

    #[test]
    fn test_click_index_ignores_non_items() {
        assert_eq!(click_index(None), None);
        assert_eq!(click_index(Some(-1.0)), None);
        assert_eq!(click_index(Some(f64::NAN)), None);
    }
}
