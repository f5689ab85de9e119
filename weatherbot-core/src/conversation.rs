//! The linear conversation state machine: city prompt → disambiguation →
//! report → continue or end.

use thiserror::Error;
use tracing::debug;

use crate::config::DEFAULT_CONFIRM_CLICKS;
use crate::farewell::FarewellGenerator;
use crate::model::{Location, LocationCandidate};
use crate::provider::{GeocodeError, GeocodeOutcome, Geocoder, WeatherError, WeatherSource};
use crate::report::format_report;

/// Where the dialogue currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AwaitingCity,
    AwaitingSelection,
    ShowingReport,
    Ended,
}

/// Per-session dialogue state. One instance per conversation; mutated only
/// through [`Conversation`]'s transition methods.
#[derive(Debug, Clone)]
struct ConversationState {
    step: Step,
    pending: Vec<LocationCandidate>,
    selected: Option<Location>,
    confirm_clicks: u32,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            step: Step::AwaitingCity,
            pending: Vec::new(),
            selected: None,
            confirm_clicks: 0,
        }
    }
}

/// Why a submitted city name was rejected; the city prompt is shown again.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please enter a valid city name.")]
    EmptyInput,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Outcome of a city submission.
#[derive(Debug)]
pub enum Turn {
    /// Several matches; present [`Conversation::candidates`] for selection.
    Selection,
    /// The report step was entered. `Err` means the weather fetch failed and
    /// no report body could be rendered; the step is still the report step.
    Report(Result<String, WeatherError>),
}

/// Result of pressing "check another city" on the report step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckAnother {
    /// Not enough confirmations yet; ask the user to press again.
    ConfirmAgain,
    /// The conversation was reset to the city prompt.
    Reset,
}

/// Drives one conversation: sequences the geocoder, weather source and
/// report formatter, and owns the session's state.
#[derive(Debug)]
pub struct Conversation {
    state: ConversationState,
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherSource>,
    farewell: Box<dyn FarewellGenerator>,
    confirm_clicks_required: u32,
}

impl Conversation {
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        weather: Box<dyn WeatherSource>,
        farewell: Box<dyn FarewellGenerator>,
    ) -> Self {
        Self::with_confirm_threshold(geocoder, weather, farewell, DEFAULT_CONFIRM_CLICKS)
    }

    pub fn with_confirm_threshold(
        geocoder: Box<dyn Geocoder>,
        weather: Box<dyn WeatherSource>,
        farewell: Box<dyn FarewellGenerator>,
        confirm_clicks_required: u32,
    ) -> Self {
        Self {
            state: ConversationState::default(),
            geocoder,
            weather,
            farewell,
            confirm_clicks_required,
        }
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    /// Candidates pending selection. Non-empty only while awaiting one.
    pub fn candidates(&self) -> &[LocationCandidate] {
        &self.state.pending
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.state.selected.as_ref()
    }

    /// Consecutive "check another city" presses recorded so far.
    pub fn confirm_clicks(&self) -> u32 {
        self.state.confirm_clicks
    }

    /// Submit a city name from the city prompt.
    ///
    /// Blank input is rejected before the geocoder is invoked. On a single
    /// match the report step is entered immediately; on multiple matches the
    /// selection step is entered. A resolver error leaves the step unchanged.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`Step::AwaitingCity`].
    pub async fn submit_city(&mut self, input: &str) -> Result<Turn, SubmitError> {
        assert_eq!(
            self.state.step,
            Step::AwaitingCity,
            "submit_city is only valid while awaiting a city"
        );

        self.state.confirm_clicks = 0;

        let city = input.trim();
        if city.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        match self.geocoder.resolve(city).await? {
            GeocodeOutcome::Single(location) => {
                debug!(label = %location.label(), "city resolved to a single match");
                Ok(Turn::Report(self.enter_report(location).await))
            }
            GeocodeOutcome::Multiple(candidates) => {
                debug!(matches = candidates.len(), "city is ambiguous");
                self.state.pending = candidates;
                self.state.step = Step::AwaitingSelection;
                Ok(Turn::Selection)
            }
        }
    }

    /// Confirm one of the pending candidates by its 1-based index and enter
    /// the report step.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`Step::AwaitingSelection`] or when `index`
    /// does not reference a pending candidate; both are caller contract
    /// violations, not recoverable domain errors.
    pub async fn confirm_selection(&mut self, index: usize) -> Result<String, WeatherError> {
        assert_eq!(
            self.state.step,
            Step::AwaitingSelection,
            "confirm_selection is only valid while awaiting a selection"
        );
        assert!(
            (1..=self.state.pending.len()).contains(&index),
            "candidate index {index} out of range 1..={}",
            self.state.pending.len()
        );

        let location = self.state.pending[index - 1].location.clone();
        self.state.pending.clear();
        self.enter_report(location).await
    }

    /// Ask to check another city from the report step. Resets the
    /// conversation once the confirmation threshold is reached.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`Step::ShowingReport`].
    pub fn check_another_city(&mut self) -> CheckAnother {
        assert_eq!(
            self.state.step,
            Step::ShowingReport,
            "check_another_city is only valid on the report step"
        );

        self.state.confirm_clicks += 1;
        if self.state.confirm_clicks < self.confirm_clicks_required {
            CheckAnother::ConfirmAgain
        } else {
            self.state = ConversationState::default();
            CheckAnother::Reset
        }
    }

    /// End the conversation from the report step; returns the farewell text.
    ///
    /// The session is terminal afterwards: a fresh [`Conversation`] is needed
    /// to start over.
    ///
    /// # Panics
    ///
    /// Panics when called outside [`Step::ShowingReport`].
    pub fn end_conversation(&mut self) -> String {
        assert_eq!(
            self.state.step,
            Step::ShowingReport,
            "end_conversation is only valid on the report step"
        );

        self.state.step = Step::Ended;
        self.farewell.farewell()
    }

    /// Enter the report step for `location`: fetch current weather and format
    /// the report. A fetch failure keeps the step on the report so the user
    /// still sees the follow-up actions.
    async fn enter_report(&mut self, location: Location) -> Result<String, WeatherError> {
        self.state.step = Step::ShowingReport;

        let outcome = self
            .weather
            .fetch(&location)
            .await
            .map(|snapshot| format_report(&location, &snapshot));

        self.state.selected = Some(location);
        outcome
    }
}
