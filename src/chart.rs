//! Chart output: the [`ChartSink`] seam and its Plotly binding.
//! Provides Rust bindings to the plot helpers defined in chart_helpers.js.

use crate::transform::{Layout, Trace, TraceGroup};
use log::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPlot)]
    fn init_plot(region_id: &str, traces: JsValue, layout: JsValue);

    #[wasm_bindgen(js_name = refreshPlot)]
    fn refresh_plot(region_id: &str, traces: JsValue, layout: JsValue);
}

/// Whether a region is drawn for the first time or redrawn in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Init,
    Refresh,
}

/// Consumer of ready-to-draw trace groups.
pub trait ChartSink {
    fn init(&mut self, region_id: &str, traces: &[Trace], layout: &Layout);
    fn refresh(&mut self, region_id: &str, traces: &[Trace], layout: &Layout);

    /// Draw every group, or none of them.
    fn draw(&mut self, groups: &[TraceGroup], mode: ChartMode) {
        for group in groups {
            match mode {
                ChartMode::Init => self.init(group.region_id, &group.traces, &group.layout),
                ChartMode::Refresh => self.refresh(group.region_id, &group.traces, &group.layout),
            }
        }
    }
}

/// Hand every group to the sink in one synchronous pass.
pub fn draw_all<S: ChartSink + ?Sized>(sink: &mut S, groups: &[TraceGroup], mode: ChartMode) {
    sink.draw(groups, mode);
}

/// Encode all groups up front; the first failure discards the whole batch.
fn encode_all<T, E>(
    groups: &[TraceGroup],
    mut encode: impl FnMut(&TraceGroup) -> Result<T, E>,
) -> Result<Vec<(&'static str, T)>, E> {
    groups.iter().map(|g| Ok((g.region_id, encode(g)?))).collect()
}

/// Draws into the `<div id=plotN>` regions through Plotly.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlySink;

impl PlotlySink {
    fn encode(traces: &[Trace], layout: &Layout) -> Result<(JsValue, JsValue), serde_wasm_bindgen::Error> {
        Ok((serde_wasm_bindgen::to_value(traces)?, serde_wasm_bindgen::to_value(layout)?))
    }

    fn encode_or_warn(region_id: &str, traces: &[Trace], layout: &Layout) -> Option<(JsValue, JsValue)> {
        Self::encode(traces, layout)
            .map_err(|e| warn!("Could not encode chart data for {}: {}", region_id, e))
            .ok()
    }
}

impl ChartSink for PlotlySink {
    fn init(&mut self, region_id: &str, traces: &[Trace], layout: &Layout) {
        if let Some((traces, layout)) = Self::encode_or_warn(region_id, traces, layout) {
            init_plot(region_id, traces, layout);
        }
    }

    fn refresh(&mut self, region_id: &str, traces: &[Trace], layout: &Layout) {
        if let Some((traces, layout)) = Self::encode_or_warn(region_id, traces, layout) {
            refresh_plot(region_id, traces, layout);
        }
    }

    fn draw(&mut self, groups: &[TraceGroup], mode: ChartMode) {
        let encoded = match encode_all(groups, |g| Self::encode(&g.traces, &g.layout)) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode chart data, no region redrawn: {}", e);
                return;
            }
        };
        for (region_id, (traces, layout)) in encoded {
            match mode {
                ChartMode::Init => init_plot(region_id, traces, layout),
                ChartMode::Refresh => refresh_plot(region_id, traces, layout),
            }
        }
    }
}
