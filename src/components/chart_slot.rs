//! Chart slot: one echarts surface bound to a transcript answer.
//!
//! The chart-option document is opaque to this client — it goes from the
//! backend response straight into `setOption`. Slots are independent: a
//! failed fetch appends an error entry without touching siblings or the
//! surrounding answer.

use leptos::prelude::*;

use crate::controller::Controller;
#[cfg(feature = "hydrate")]
use crate::error::ClientError;

#[cfg(feature = "hydrate")]
mod echarts {
    //! Minimal binding to the page-global `echarts` object.

    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type EChart;

        #[wasm_bindgen(js_namespace = echarts)]
        pub fn init(el: &web_sys::HtmlElement, theme: &str, opts: &JsValue) -> EChart;

        #[wasm_bindgen(method, js_name = setOption)]
        pub fn set_option(this: &EChart, option: &JsValue);
    }
}

/// Rendering surface for chart `index` of answer `ordinal`. Mounts the
/// slot div with id `chart-<ordinal>-<index>`, then initializes echarts
/// on it and fetches the option document.
#[component]
pub fn ChartSlot(ordinal: u32, index: u32) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let node = NodeRef::<leptos::html::Div>::new();
    let started = StoredValue::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = node.get() {
            if started.get_value() {
                return;
            }
            started.set_value(true);
            leptos::task::spawn_local(load(el, controller, ordinal, index));
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (node, started, controller);
        }
    });

    view! { <div class="answer-chart" id=format!("chart-{ordinal}-{index}") node_ref=node></div> }
}

/// Initialize the surface and apply the fetched option document.
#[cfg(feature = "hydrate")]
async fn load(el: web_sys::HtmlDivElement, controller: Controller, ordinal: u32, index: u32) {
    let init_opts = js_sys::JSON::parse(r#"{"renderer":"canvas"}"#)
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
    let chart = echarts::init(&el, "white", &init_opts);

    match crate::net::api::fetch_chart(index).await {
        Ok(raw) => match js_sys::JSON::parse(&raw) {
            Ok(option) => chart.set_option(&option),
            Err(_) => controller.chart_failed(
                ordinal,
                &ClientError::Chart {
                    index,
                    detail: "无法解析图表数据".to_owned(),
                },
            ),
        },
        Err(err) => controller.chart_failed(ordinal, &err),
    }
}
