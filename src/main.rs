//! Main module for the cruise control dashboard using Yew.
//! Wires UI components, state hooks, and the update pipeline.

use cruise_dashboard::backend::HttpBackend;
use cruise_dashboard::chart::PlotlySink;
use cruise_dashboard::{load_initial, submit, Field, SubmissionController, ViewAction, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;

use components::{ChartGrid, FailureNotice, ParameterInput, SpeedSlider};
use hooks::use_parameter_form;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let form = use_parameter_form();
    let view = use_reducer(ViewState::default);
    // Ticket counter and phase; shared by every in-flight request.
    let controller = use_mut_ref(SubmissionController::default);

    // Fetch the initial series and create the charts on mount
    {
        let controller = controller.clone();
        let dispatcher = view.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dispatch = move |action: ViewAction| dispatcher.dispatch(action);
                load_initial(&controller, &HttpBackend::default(), &mut PlotlySink, &dispatch).await;
            });
            || ()
        });
    }

    let on_update = {
        let controller = controller.clone();
        let dispatcher = view.dispatcher();
        let inputs = form.inputs().clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let inputs = inputs.clone();
            spawn_local(async move {
                let dispatch = move |action: ViewAction| dispatcher.dispatch(action);
                submit(&controller, &HttpBackend::default(), &mut PlotlySink, &inputs, &dispatch).await;
            });
        })
    };

    html! {
        <div class="container">
            <h1>{ "Cruise control: classical vs. fuzzy" }</h1>

            <div class="parameters">
                { for Field::ALL.into_iter().filter(|f| *f != Field::Speed).map(|field| html! {
                    <ParameterInput
                        field={field}
                        value={form.text(field)}
                        error={view.field_error(field)}
                        oninput={form.on_input(field)}
                    />
                }) }
                <SpeedSlider
                    value={form.text(Field::Speed)}
                    error={view.field_error(Field::Speed)}
                    oninput={form.on_input(Field::Speed)}
                />
                <button type="button" class="update-button" onclick={on_update}>
                    { if view.pending { "Updating…" } else { "Update" } }
                </button>
            </div>

            <FailureNotice notice={view.notice.clone()} />
            <ChartGrid />
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
