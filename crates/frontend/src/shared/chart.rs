//! Chart.js bridge
//!
//! The host page loads Chart.js as `window.Chart`. Configs are built as JSON
//! here, handed over with `serde_wasm_bindgen` and the previous chart on a
//! canvas is destroyed before a new one is drawn.

use contracts::shared::charting::{ChartKind, ChartSeries, PivotSeries};
use js_sys::{Array, Function, Reflect};
use leptos::html::Canvas;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::shared::storage::get_pref;

pub const PALETTE: [&str; 10] = [
    "#20B2AA", "#32CD32", "#FFD700", "#4D96FF", "#FF6F61", "#6A5ACD", "#FFB347", "#66CDAA",
    "#C71585", "#708090",
];

const BORDER_COLOR: &str = "#1E90FF";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    /// Overrides the chart type for this dataset (bar + line combos)
    pub kind: Option<ChartKind>,
    pub color: Option<String>,
    /// Plot against the right-hand `y1` axis
    pub secondary_axis: bool,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn single(label: impl Into<String>, series: ChartSeries) -> Self {
        Self {
            labels: series.labels,
            datasets: vec![Dataset::new(label, series.values)],
        }
    }

    /// One dataset per pivot series, one colour each
    pub fn from_pivot(pivot: PivotSeries) -> Self {
        Self {
            labels: pivot.labels,
            datasets: pivot
                .series
                .into_iter()
                .enumerate()
                .map(|(i, s)| Dataset::new(s.name, s.values).with_color(PALETTE[i % PALETTE.len()]))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|d| d.values.is_empty())
    }
}

/// Chart kind saved under `key`, `fallback` when nothing valid is stored
pub fn stored_chart_kind(key: &str, fallback: ChartKind) -> ChartKind {
    get_pref(key)
        .and_then(|code| ChartKind::from_code(&code))
        .unwrap_or(fallback)
}

fn palette_for(count: usize) -> Vec<&'static str> {
    (0..count.max(1)).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

fn dataset_json(kind: ChartKind, data: &ChartData, dataset: &Dataset) -> Value {
    let effective = dataset.kind.unwrap_or(kind);
    let mut out = json!({
        "label": dataset.label,
        "data": dataset.values,
        "borderWidth": 1,
        "fill": effective == ChartKind::Line,
    });
    match &dataset.color {
        Some(color) => {
            out["backgroundColor"] = json!(color);
            out["borderColor"] = json!(color);
        }
        None => {
            out["backgroundColor"] = json!(palette_for(data.labels.len()));
            out["borderColor"] = json!(BORDER_COLOR);
        }
    }
    if let Some(kind) = dataset.kind {
        out["type"] = json!(kind.code());
    }
    if effective == ChartKind::Line {
        out["tension"] = json!(0.3);
    }
    if dataset.secondary_axis {
        out["yAxisID"] = json!("y1");
    }
    out
}

/// Chart.js configuration object for `kind` and `data`
pub fn chart_config(kind: ChartKind, data: &ChartData) -> Value {
    let datasets: Vec<Value> = data
        .datasets
        .iter()
        .map(|d| dataset_json(kind, data, d))
        .collect();

    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "animation": false,
        "plugins": {
            "legend": { "position": if kind.has_axes() { "top" } else { "right" } }
        },
    });
    if kind.has_axes() {
        let mut scales = json!({ "y": { "beginAtZero": true } });
        if data.datasets.iter().any(|d| d.secondary_axis) {
            scales["y1"] = json!({
                "beginAtZero": true,
                "position": "right",
                "grid": { "drawOnChartArea": false }
            });
            options["interaction"] = json!({ "mode": "index", "intersect": false });
        }
        options["scales"] = scales;
    }

    json!({
        "type": kind.code(),
        "data": {
            "labels": data.labels,
            "datasets": datasets,
        },
        "options": options,
    })
}

fn create_chart(canvas: &HtmlCanvasElement, config: &Value) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !ctor.is_function() {
        return Err(JsValue::from_str("Chart.js is not loaded"));
    }
    let ctor: Function = ctor.dyn_into()?;
    let config = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Reflect::construct(&ctor, &Array::of2(canvas, &config))
}

fn destroy_chart(chart: &JsValue) {
    let Ok(destroy) = Reflect::get(chart, &JsValue::from_str("destroy")) else {
        return;
    };
    if let Ok(destroy) = destroy.dyn_into::<Function>() {
        let _ = destroy.call0(chart);
    }
}

/// Holds the instance currently drawn on a canvas
struct ChartSlot<T>(Option<T>);

impl<T> ChartSlot<T> {
    fn hold(&mut self, chart: T) {
        self.0 = Some(chart);
    }

    /// Destroys the held instance, if any; the slot is empty afterwards
    fn release(&mut self, destroy: impl FnOnce(&T)) {
        if let Some(chart) = self.0.take() {
            destroy(&chart);
        }
    }
}

/// Canvas that redraws whenever `kind` or `data` change
///
/// The Chart.js instance is destroyed before each redraw and when the
/// component unmounts, so closed tabs do not leave charts registered.
#[component]
pub fn ChartCanvas(
    #[prop(into)] kind: Signal<ChartKind>,
    #[prop(into)] data: Signal<ChartData>,
    #[prop(optional, into)] empty_text: Option<String>,
    #[prop(default = 320)] height: u32,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let chart = StoredValue::new_local(ChartSlot::<JsValue>(None));
    let empty_text = empty_text.unwrap_or_else(|| "Sem dados para o período.".to_string());

    Effect::new(move |_| {
        let kind = kind.get();
        let data = data.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        chart.update_value(|slot| slot.release(destroy_chart));
        if data.is_empty() {
            return;
        }
        match create_chart(&canvas, &chart_config(kind, &data)) {
            Ok(instance) => chart.update_value(|slot| slot.hold(instance)),
            Err(err) => log::error!("Failed to draw chart: {:?}", err),
        }
    });

    on_cleanup(move || {
        chart.try_update_value(|slot| slot.release(destroy_chart));
    });

    view! {
        <div class="chart-box" style=format!("position: relative; height: {}px;", height)>
            <canvas node_ref=canvas_ref></canvas>
            <Show when=move || data.with(|d| d.is_empty())>
                <p class="chart-box__empty">{empty_text.clone()}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::charting::NamedSeries;
    use std::cell::Cell;

    #[test]
    fn test_chart_slot_destroys_once() {
        let destroyed = Cell::new(0);
        let mut slot = ChartSlot(None);
        slot.release(|_: &u32| destroyed.set(destroyed.get() + 1));
        assert_eq!(destroyed.get(), 0);

        slot.hold(7u32);
        slot.release(|c| {
            assert_eq!(*c, 7);
            destroyed.set(destroyed.get() + 1)
        });
        slot.release(|_| destroyed.set(destroyed.get() + 1));
        assert_eq!(destroyed.get(), 1);
        assert!(slot.0.is_none());
    }

    fn sample() -> ChartData {
        ChartData::single(
            "Vendas (R$)",
            ChartSeries {
                labels: vec!["jan/25".into(), "fev/25".into()],
                values: vec![5.0, 7.0],
            },
        )
    }

    #[test]
    fn test_bar_config_has_axes_and_palette() {
        let config = chart_config(ChartKind::Bar, &sample());
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"], json!(["jan/25", "fev/25"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([5.0, 7.0]));
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"],
            json!(["#20B2AA", "#32CD32"])
        );
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(config["data"]["datasets"][0]["fill"], false);
    }

    #[test]
    fn test_pie_config_has_no_scales() {
        let config = chart_config(ChartKind::Pie, &sample());
        assert_eq!(config["type"], "pie");
        assert!(config["options"].get("scales").is_none());
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "right");
    }

    #[test]
    fn test_line_dataset_fills() {
        let config = chart_config(ChartKind::Line, &sample());
        assert_eq!(config["data"]["datasets"][0]["fill"], true);
        assert_eq!(config["data"]["datasets"][0]["tension"], 0.3);
    }

    #[test]
    fn test_secondary_axis_adds_y1() {
        let data = ChartData {
            labels: vec!["jan/25".into()],
            datasets: vec![
                Dataset::new("Gastos", vec![10.0]).with_color("#ef4444"),
                Dataset::new("Ganhos", vec![20.0])
                    .with_color("#22c55e")
                    .with_kind(ChartKind::Line)
                    .on_secondary_axis(),
            ],
        };
        let config = chart_config(ChartKind::Bar, &data);
        assert_eq!(config["data"]["datasets"][1]["type"], "line");
        assert_eq!(config["data"]["datasets"][1]["yAxisID"], "y1");
        assert_eq!(config["options"]["scales"]["y1"]["position"], "right");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#ef4444");
    }

    #[test]
    fn test_pivot_datasets_get_distinct_colours() {
        let data = ChartData::from_pivot(PivotSeries {
            keys: vec!["2025-01".into()],
            labels: vec!["jan/25".into()],
            series: vec![
                NamedSeries { name: "Pikachu".into(), values: vec![3.0] },
                NamedSeries { name: "Charizard".into(), values: vec![1.0] },
            ],
        });
        assert_eq!(data.datasets.len(), 2);
        assert_ne!(data.datasets[0].color, data.datasets[1].color);
        assert!(!data.is_empty());
        assert!(ChartData::default().is_empty());
    }
}
