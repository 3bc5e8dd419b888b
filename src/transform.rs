//! Turns a [`SimulationSeries`] into per-region trace groups for the charts.
//!
//! Region rules (source array, unit scale, labels) live in [`REGIONS`]; the
//! transformation itself is the same for every region.

use crate::config::{CHART_MARGIN_PX, TIME_AXIS_TITLE};
use crate::error::MalformedSeries;
use crate::series::{Channel, SimulationSeries};
use serde::Serialize;

/// m/s to km/h.
pub const MS_TO_KMH: f64 = 3.6;
/// Fraction to percent.
pub const FRACTION_TO_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
}

#[derive(Debug)]
pub struct TraceRule {
    pub name: &'static str,
    pub source: Channel,
    pub scale: f64,
    pub dash: Dash,
}

#[derive(Debug)]
pub struct RegionRule {
    pub id: &'static str,
    pub title: &'static str,
    pub y_title: &'static str,
    pub traces: &'static [TraceRule],
}

const fn trace(name: &'static str, source: Channel, scale: f64) -> TraceRule {
    TraceRule { name, source, scale, dash: Dash::Solid }
}

/// Title of the forces region. The backend sends no force arrays yet, so
/// every force trace is drawn from the classical acceleration samples and the
/// title says so.
pub const FORCES_PLACEHOLDER_TITLE: &str = "Forces (placeholder: acceleration samples)";

pub static REGIONS: [RegionRule; 4] = [
    RegionRule {
        id: "plot1",
        title: "Velocity",
        y_title: "velocity [km/h]",
        traces: &[
            trace("Classical velocity", Channel::Y1, MS_TO_KMH),
            trace("Fuzzy velocity", Channel::Y2, MS_TO_KMH),
        ],
    },
    RegionRule {
        id: "plot2",
        title: "Acceleration",
        y_title: "acceleration [m/s^2]",
        traces: &[
            trace("Classical acceleration", Channel::Y3, 1.0),
            trace("Fuzzy acceleration", Channel::Y4, 1.0),
        ],
    },
    RegionRule {
        id: "plot3",
        title: "Throttle pedal press",
        y_title: "press level [%]",
        traces: &[trace("Press", Channel::Y5, FRACTION_TO_PERCENT)],
    },
    RegionRule {
        id: "plot4",
        title: FORCES_PLACEHOLDER_TITLE,
        y_title: "force [N]",
        traces: &[
            trace("Weight", Channel::Y3, 1.0),
            trace("Friction", Channel::Y3, 1.0),
            trace("Air drag force", Channel::Y3, 1.0),
            trace("Engine driving force", Channel::Y3, 1.0),
            TraceRule { name: "Resultant force", source: Channel::Y3, scale: 1.0, dash: Dash::Dash },
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub dash: Dash,
}

/// One Plotly scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

/// Static metadata for one chart region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: AxisTitle,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
}

impl Layout {
    fn for_region(rule: &RegionRule) -> Self {
        Self {
            title: AxisTitle { text: rule.title },
            xaxis: Axis { title: AxisTitle { text: TIME_AXIS_TITLE } },
            yaxis: Axis { title: AxisTitle { text: rule.y_title } },
            margin: Margin {
                l: CHART_MARGIN_PX,
                r: CHART_MARGIN_PX,
                b: CHART_MARGIN_PX,
                t: CHART_MARGIN_PX,
            },
        }
    }
}

/// Everything one chart region needs for a redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceGroup {
    pub region_id: &'static str,
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

/// Build the trace groups for all regions, in [`REGIONS`] order.
///
/// Fails without producing anything if an array a region needs is missing or
/// out of step with `x`.
pub fn transform(series: &SimulationSeries) -> Result<Vec<TraceGroup>, MalformedSeries> {
    let x = series.time()?;
    REGIONS
        .iter()
        .map(|rule| {
            let traces = rule
                .traces
                .iter()
                .map(|t| {
                    let samples = series.channel(t.source)?;
                    Ok(Trace {
                        x: x.to_vec(),
                        y: samples.iter().map(|v| v * t.scale).collect(),
                        kind: "scatter",
                        mode: "lines",
                        name: t.name,
                        line: Line { dash: t.dash },
                    })
                })
                .collect::<Result<Vec<_>, MalformedSeries>>()?;
            Ok(TraceGroup {
                region_id: rule.id,
                traces,
                layout: Layout::for_region(rule),
            })
        })
        .collect()
}
