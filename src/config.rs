//! Application-level configuration constants.

// Backend
pub const API_BASE: &str = "";
pub const INITIAL_DATA_PATH: &str = "/initial_data";
pub const UPDATE_DATA_PATH: &str = "/update_data";
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

// Default values for input fields
pub const DEFAULT_HORSEPOWER: f64 = 100.0;
pub const DEFAULT_MASS: f64 = 1000.0;
pub const DEFAULT_LENGTH: f64 = 4.0;
pub const DEFAULT_WIDTH: f64 = 1.9;
pub const DEFAULT_HEIGHT: f64 = 1.2;
pub const DEFAULT_SPEED: f64 = 30.0;

// Speed slider
pub const SPEED_SLIDER_STEP: f64 = 1.0;

// Chart layout
pub const CHART_MARGIN_PX: u32 = 50;
pub const TIME_AXIS_TITLE: &str = "time [s]";
