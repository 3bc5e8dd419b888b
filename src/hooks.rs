use cruise_dashboard::{Field, FieldInputs};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Raw input texts, updated one field at a time so fast typing in two
/// inputs between renders cannot lose an edit.
#[derive(Default, PartialEq)]
struct FormState(FieldInputs);

impl Reducible for FormState {
    type Action = (Field, String);

    fn reduce(self: Rc<Self>, (field, text): Self::Action) -> Rc<Self> {
        Rc::new(FormState(self.0.clone().with(field, text)))
    }
}

/// Holds the text of all six parameter inputs and their input callbacks.
#[derive(Clone)]
pub struct ParameterForm {
    state: UseReducerHandle<FormState>,
}

impl ParameterForm {
    /// Snapshot of what the user has typed so far.
    pub fn inputs(&self) -> &FieldInputs {
        &self.state.0
    }

    pub fn text(&self, field: Field) -> String {
        self.state.0.get(field).to_string()
    }

    /// Callback for the `oninput` event of `field`'s input element.
    pub fn on_input(&self, field: Field) -> Callback<InputEvent> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch((field, input.value()));
        })
    }
}

/// Custom hook owning the form text, seeded with the default parameters.
#[hook]
pub fn use_parameter_form() -> ParameterForm {
    let state = use_reducer(FormState::default);
    ParameterForm { state }
}
