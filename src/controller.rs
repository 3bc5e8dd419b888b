//! Submission controller: the state machine that decides whether a parameter
//! set is sent to the simulation and how the answer reaches the charts.
//!
//! Overlapping submissions supersede each other. Every request carries a
//! [`Ticket`]; a response whose ticket is not the latest one issued is
//! dropped as [`Outcome::Stale`] without touching charts or view.

use crate::backend::SimulationBackend;
use crate::chart::{draw_all, ChartMode, ChartSink};
use crate::error::PipelineError;
use crate::params::{collect, FieldInputs, ParameterRecord, ValidationResult};
use crate::series::SimulationSeries;
use crate::transform::transform;
use crate::view::ViewAction;
use log::{debug, info, warn};
use std::cell::RefCell;

pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Collecting,
    Validating,
    Blocked,
    Sending,
    Merged,
    Failed,
}

/// Result of the synchronous first half of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    Blocked(ValidationResult),
    Send { ticket: Ticket, record: ParameterRecord },
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Blocked(ValidationResult),
    Merged,
    Failed(PipelineError),
    Stale,
}

#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    latest: Ticket,
    /// The latest ticket has not been answered yet.
    awaiting: bool,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self { phase: Phase::Idle, latest: 0, awaiting: false }
    }
}

impl SubmissionController {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        debug!("submission phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Issue a ticket, making every earlier one stale.
    fn issue_ticket(&mut self) -> Ticket {
        self.latest += 1;
        self.awaiting = true;
        self.enter(Phase::Sending);
        self.latest
    }

    /// Ticket for the page-load request. It needs no validation.
    pub fn begin_initial(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        info!("Requesting initial series as request #{}", ticket);
        ticket
    }

    /// Collect and validate the inputs. Only an all-valid record gets a ticket.
    pub fn begin(&mut self, inputs: &FieldInputs) -> Attempt {
        self.enter(Phase::Collecting);
        let record = collect(inputs);

        self.enter(Phase::Validating);
        let invalid = record.invalid_fields();

        if !invalid.is_empty() {
            self.enter(Phase::Blocked);
            info!("Submission blocked, invalid fields: {:?}", invalid);
            // An earlier request may still be in flight; blocking does not cancel it.
            self.enter(if self.awaiting { Phase::Sending } else { Phase::Idle });
            return Attempt::Blocked(invalid);
        }

        let ticket = self.issue_ticket();
        info!("Submitting parameters as request #{}: {:?}", ticket, record);
        Attempt::Send { ticket, record }
    }

    /// Merge a backend answer into the charts if it is still the latest one.
    ///
    /// All regions are transformed before any is drawn, so a malformed series
    /// leaves every chart as it was.
    pub fn complete<S: ChartSink + ?Sized>(
        &mut self,
        ticket: Ticket,
        result: Result<SimulationSeries, PipelineError>,
        mode: ChartMode,
        sink: &mut S,
    ) -> Outcome {
        if ticket != self.latest {
            debug!("Discarding response #{} superseded by #{}", ticket, self.latest);
            return Outcome::Stale;
        }
        self.awaiting = false;

        match result.and_then(|series| Ok(transform(&series)?)) {
            Ok(groups) => {
                draw_all(sink, &groups, mode);
                self.enter(Phase::Merged);
                info!("Charts updated from response #{}", ticket);
                self.enter(Phase::Idle);
                Outcome::Merged
            }
            Err(e) => {
                self.enter(Phase::Failed);
                warn!("Response #{} rejected: {}", ticket, e);
                self.enter(Phase::Idle);
                Outcome::Failed(e)
            }
        }
    }
}

/// Fetch the initial series and create all chart regions from it.
pub async fn load_initial<B, S>(
    controller: &RefCell<SubmissionController>,
    backend: &B,
    sink: &mut S,
    dispatch: &dyn Fn(ViewAction),
) -> Outcome
where
    B: SimulationBackend + ?Sized,
    S: ChartSink + ?Sized,
{
    let ticket = controller.borrow_mut().begin_initial();
    dispatch(ViewAction::Sending);
    let result = backend.initial_data().await;
    let outcome = controller
        .borrow_mut()
        .complete(ticket, result, ChartMode::Init, sink);
    dispatch(ViewAction::Settle { outcome: outcome.clone(), mode: ChartMode::Init });
    outcome
}

/// Run one user-triggered update from the current inputs to the charts.
///
/// The presenter always runs before any network activity; a blocked record
/// never reaches the backend.
pub async fn submit<B, S>(
    controller: &RefCell<SubmissionController>,
    backend: &B,
    sink: &mut S,
    inputs: &FieldInputs,
    dispatch: &dyn Fn(ViewAction),
) -> Outcome
where
    B: SimulationBackend + ?Sized,
    S: ChartSink + ?Sized,
{
    let attempt = controller.borrow_mut().begin(inputs);
    match attempt {
        Attempt::Blocked(invalid) => {
            let outcome = Outcome::Blocked(invalid);
            dispatch(ViewAction::Settle { outcome: outcome.clone(), mode: ChartMode::Refresh });
            outcome
        }
        Attempt::Send { ticket, record } => {
            dispatch(ViewAction::Present(ValidationResult::new()));
            dispatch(ViewAction::Sending);
            let result = backend.update_data(record).await;
            let outcome = controller
                .borrow_mut()
                .complete(ticket, result, ChartMode::Refresh, sink);
            dispatch(ViewAction::Settle { outcome: outcome.clone(), mode: ChartMode::Refresh });
            outcome
        }
    }
}
