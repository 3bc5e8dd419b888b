//! Simulation output as received from the backend.

use crate::error::MalformedSeries;
use serde::{Deserialize, Serialize};

/// Selects one of the arrays in a [`SimulationSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Y1,
    Y2,
    Y3,
    Y4,
    Y5,
}

impl Channel {
    pub fn name(self) -> &'static str {
        match self {
            Channel::Y1 => "y1",
            Channel::Y2 => "y2",
            Channel::Y3 => "y3",
            Channel::Y4 => "y4",
            Channel::Y5 => "y5",
        }
    }
}

/// Time axis plus five sample arrays, aligned index for index.
///
/// Arrays are optional so that a missing one can be reported instead of
/// failing deserialisation outright. Lengths are checked when read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSeries {
    #[serde(default)]
    pub x: Option<Vec<f64>>,
    #[serde(default)]
    pub y1: Option<Vec<f64>>,
    #[serde(default)]
    pub y2: Option<Vec<f64>>,
    #[serde(default)]
    pub y3: Option<Vec<f64>>,
    #[serde(default)]
    pub y4: Option<Vec<f64>>,
    #[serde(default)]
    pub y5: Option<Vec<f64>>,
}

impl SimulationSeries {
    pub fn from_json(body: &str) -> Result<Self, MalformedSeries> {
        serde_json::from_str(body).map_err(|e| MalformedSeries::Decode(e.to_string()))
    }

    pub fn time(&self) -> Result<&[f64], MalformedSeries> {
        self.x.as_deref().ok_or(MalformedSeries::MissingArray("x"))
    }

    /// Borrow a sample array, checking it is present and as long as `x`.
    pub fn channel(&self, channel: Channel) -> Result<&[f64], MalformedSeries> {
        let x = self.time()?;
        let values = match channel {
            Channel::Y1 => &self.y1,
            Channel::Y2 => &self.y2,
            Channel::Y3 => &self.y3,
            Channel::Y4 => &self.y4,
            Channel::Y5 => &self.y5,
        }
        .as_deref()
        .ok_or(MalformedSeries::MissingArray(channel.name()))?;

        if values.len() != x.len() {
            return Err(MalformedSeries::LengthMismatch {
                array: channel.name(),
                expected: x.len(),
                found: values.len(),
            });
        }
        Ok(values)
    }
}
