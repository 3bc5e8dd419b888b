//! Explicit view state and the error presenter that annotates it.
//!
//! The UI boundary is the only layer that renders a [`ViewState`]; every
//! pipeline stage takes one by value and hands back the next.

use crate::bounds::{error_message, Field};
use crate::chart::ChartMode;
use crate::controller::Outcome;
use crate::params::ValidationResult;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Error message shown next to each invalid input.
    pub field_errors: BTreeMap<Field, &'static str>,
    /// Non-blocking notice for transport or format failures.
    pub notice: Option<String>,
    /// A backend request is in flight.
    pub pending: bool,
}

impl ViewState {
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(&field).copied()
    }

    pub fn is_error_styled(&self, field: Field) -> bool {
        self.field_errors.contains_key(&field)
    }
}

/// A pipeline transition that changes what the user sees.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Run the error presenter with this invalid set.
    Present(ValidationResult),
    /// A request was issued.
    Sending,
    /// A request finished with this outcome.
    Settle { outcome: Outcome, mode: ChartMode },
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> ViewState {
        match action {
            ViewAction::Present(invalid) => present(self, &invalid),
            ViewAction::Sending => ViewState { pending: true, ..self },
            ViewAction::Settle { outcome, mode } => settle(self, outcome, mode),
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

fn settle(view: ViewState, outcome: Outcome, mode: ChartMode) -> ViewState {
    let context = match mode {
        ChartMode::Init => "Could not load initial simulation data",
        ChartMode::Refresh => "Simulation update failed",
    };
    match outcome {
        // A newer request is still in flight and owns the view.
        Outcome::Stale => view,
        // Nothing was sent, so an earlier request keeps `pending`.
        Outcome::Blocked(invalid) => present(view, &invalid),
        Outcome::Merged => ViewState { notice: None, pending: false, ..view },
        Outcome::Failed(e) => ViewState {
            notice: Some(format!("{}: {}", context, e)),
            pending: false,
            ..view
        },
    }
}

/// Replace all field annotations with exactly one per invalid field.
///
/// Every known field is cleared first, so presenting the same set twice is
/// the same as presenting it once and presenting an empty set clears all.
pub fn present(mut view: ViewState, invalid: &ValidationResult) -> ViewState {
    for field in Field::ALL {
        view.field_errors.remove(&field);
    }
    for &field in invalid {
        view.field_errors.insert(field, error_message(field.name()));
    }
    view
}
