//! Pure Yew view components for the dashboard.
//!
//! These components render from props only; the pipeline state they show
//! lives in `ViewState` and the form hook.

use cruise_dashboard::config::SPEED_SLIDER_STEP;
use cruise_dashboard::transform::REGIONS;
use cruise_dashboard::Field;
use yew::prelude::*;

fn label_text(field: Field) -> String {
    format!("{} [{}]:", field.label(), field.spec().unit)
}

/// Numeric input with its error annotation right after it.
#[derive(Properties, PartialEq)]
pub struct ParameterInputProps {
    pub field: Field,
    pub value: String,
    pub error: Option<&'static str>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ParameterInput)]
pub fn parameter_input(props: &ParameterInputProps) -> Html {
    let name = props.field.name();
    html! {
        <div class="form-group">
            <label for={name}>{ label_text(props.field) }</label>
            <input
                type="number"
                id={name}
                step="any"
                value={props.value.clone()}
                class={classes!(props.error.map(|_| "incorrect-input"))}
                oninput={props.oninput.clone()}
            />
            if let Some(message) = props.error {
                <div class="error-message">{ message }</div>
            }
        </div>
    }
}

/// Cruise speed slider; the readout follows the slider while it moves.
#[derive(Properties, PartialEq)]
pub struct SpeedSliderProps {
    pub value: String,
    pub error: Option<&'static str>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(SpeedSlider)]
pub fn speed_slider(props: &SpeedSliderProps) -> Html {
    let field = Field::Speed;
    let spec = field.spec();
    html! {
        <div class="form-group">
            <label for={field.name()}>{ label_text(field) }</label>
            <div class="slider-with-value">
                <input
                    type="range"
                    id={field.name()}
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={SPEED_SLIDER_STEP.to_string()}
                    value={props.value.clone()}
                    class={classes!(props.error.map(|_| "incorrect-input"))}
                    oninput={props.oninput.clone()}
                />
                if let Some(message) = props.error {
                    <div class="error-message">{ message }</div>
                }
                <span id="speed_value" class="slider-value">{ props.value.clone() }</span>
            </div>
        </div>
    }
}

/// Non-blocking failure notice for transport and format errors.
#[derive(Properties, PartialEq)]
pub struct FailureNoticeProps {
    pub notice: Option<String>,
}

#[function_component(FailureNotice)]
pub fn failure_notice(props: &FailureNoticeProps) -> Html {
    match &props.notice {
        Some(text) => html! {
            <div class="error-message failure-notice" role="status">{ text }</div>
        },
        None => html! {},
    }
}

/// The four chart regions the Plotly sink draws into.
#[function_component(ChartGrid)]
pub fn chart_grid() -> Html {
    html! {
        <div class="chart-grid">
            { for REGIONS.iter().map(|region| html! {
                <div id={region.id} class="chart"></div>
            }) }
        </div>
    }
}
