use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlCanvasElement;

use tripboard_core::chart::{Canvas, ChartBackend, ChartSpec, Dataset, Legend};

#[wasm_bindgen]
extern "C" {
    /// The global `Chart` class of Chart.js.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> JsChart;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

#[derive(Serialize)]
struct Config<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: Data<'a>,
    options: Options,
}

#[derive(Serialize)]
struct Data<'a> {
    labels: &'a [String],
    datasets: Vec<JsDataset<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDataset<'a> {
    label: &'a str,
    data: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<BackgroundColor<'a>>,
    fill: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum BackgroundColor<'a> {
    Single(&'static str),
    PerValue(&'a [&'static str]),
}

#[derive(Serialize)]
struct Options {
    responsive: bool,
    plugins: Plugins,
}

#[derive(Serialize)]
struct Plugins {
    legend: LegendOptions,
}

#[derive(Serialize)]
struct LegendOptions {
    display: bool,
    position: &'static str,
}

fn js_dataset(dataset: &Dataset) -> JsDataset<'_> {
    let background_color = match dataset.background_colors.as_slice() {
        [] => None,
        [color] => Some(BackgroundColor::Single(*color)),
        colors => Some(BackgroundColor::PerValue(colors)),
    };
    JsDataset {
        label: &dataset.label,
        data: &dataset.data,
        border_color: dataset.border_color,
        background_color,
        fill: dataset.fill,
    }
}

fn config(spec: &ChartSpec) -> Config<'_> {
    let legend = match spec.legend {
        Legend::Top => LegendOptions {
            display: true,
            position: "top",
        },
        Legend::Bottom => LegendOptions {
            display: true,
            position: "bottom",
        },
        Legend::Hidden => LegendOptions {
            display: false,
            position: "top",
        },
    };
    Config {
        kind: spec.kind.as_str(),
        data: Data {
            labels: &spec.labels,
            datasets: spec.datasets.iter().map(js_dataset).collect(),
        },
        options: Options {
            responsive: true,
            plugins: Plugins { legend },
        },
    }
}

/// Draws charts with Chart.js.
#[derive(Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Handle = Option<JsChart>;

    fn create(&mut self, canvas: Canvas, spec: &ChartSpec) -> Self::Handle {
        let Some(element) = leptos::document()
            .get_element_by_id(canvas.element_id())
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No canvas #{} found", canvas.element_id());
            return None;
        };
        match serde_wasm_bindgen::to_value(&config(spec)) {
            Ok(config) => Some(JsChart::new(&element, &config)),
            Err(err) => {
                log::error!("Unable to build chart config: {err}");
                None
            }
        }
    }

    fn destroy(&mut self, handle: Self::Handle) {
        if let Some(chart) = handle {
            chart.destroy();
        }
    }
}
