//! Cruise control dashboard core.
//!
//! Validates the vehicle parameters typed into the dashboard, submits them to
//! the simulation service and turns the returned series into chart traces.
//! Everything here except [`backend::HttpBackend`] and [`chart::PlotlySink`]
//! runs without a browser.

pub mod backend;
pub mod bounds;
pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod params;
pub mod series;
pub mod transform;
pub mod view;

pub use bounds::{error_message, validate, Field, FieldSpec, BOUNDS};
pub use controller::{load_initial, submit, Outcome, SubmissionController};
pub use error::{MalformedSeries, PipelineError};
pub use params::{collect, FieldInputs, ParameterRecord, ValidationResult};
pub use series::SimulationSeries;
pub use transform::{transform, TraceGroup};
pub use view::{present, ViewAction, ViewState};
