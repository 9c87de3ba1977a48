//! Action dispatcher.
//!
//! # Design
//! Every user trigger (submitting the quiz, adding or deleting an animal)
//! maps to one `Action`. `App::dispatch` runs it against the transport,
//! updates `AppState` and returns an `Outcome`. Failures are logged and
//! turned into notices here and never leave `dispatch`.

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{error, info, warn};

use crate::client::AnimalClient;
use crate::error::{ActionError, ApiError, SelectionError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::render;
use crate::selection::determine_animal;
use crate::state::{AppState, Notice, QuizPhase};
use crate::types::{Animal, AnimalId, NewAnimal, QuizInputs};

pub const DELETE_OK: &str = "Animal deleted successfully!";
pub const DELETE_FAILED: &str = "Error deleting the animal. Please try again.";
pub const ADD_FAILED: &str = "Error adding the animal. Please try again.";
pub const QUIZ_FETCH_FAILED: &str = "Error fetching animals. Please try again.";
pub const QUIZ_NO_ANIMALS: &str = "No animals available yet. Add one and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the registry for the management list.
    Load,
    SubmitQuiz(QuizInputs),
    AddAnimal(NewAnimal),
    DeleteAnimal(AnimalId),
    ShowAnimal(AnimalId),
    /// Show only the first N records.
    ListFirst(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) | Outcome::Failure(msg) => msg,
        }
    }
}

pub struct App<T, R = ThreadRng> {
    client: AnimalClient,
    transport: T,
    rng: R,
    state: AppState,
}

impl<T: Transport> App<T, ThreadRng> {
    pub fn new(client: AnimalClient, transport: T) -> Self {
        Self::with_rng(client, transport, rand::thread_rng())
    }
}

impl<T: Transport, R: Rng> App<T, R> {
    pub fn with_rng(client: AnimalClient, transport: T, rng: R) -> Self {
        Self {
            client,
            transport,
            rng,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn render(&self) -> String {
        render(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Load => self.load(),
            Action::SubmitQuiz(inputs) => self.submit_quiz(inputs),
            Action::AddAnimal(input) => self.add_animal(input),
            Action::DeleteAnimal(id) => self.delete_animal(id),
            Action::ShowAnimal(id) => self.show_animal(id),
            Action::ListFirst(limit) => self.list_first(limit),
        }
    }

    fn load(&mut self) -> Outcome {
        // No notice here: a failed listing only shows up in the logs.
        match self.refresh() {
            Ok(()) => Outcome::Success(format!("{} animals loaded", self.state.animals.len())),
            Err(err) => {
                error!(error = %err, "failed to load animals");
                Outcome::Failure(err.to_string())
            }
        }
    }

    fn submit_quiz(&mut self, inputs: QuizInputs) -> Outcome {
        self.state.quiz = QuizPhase::Submitted;
        self.state.result = None;

        match self.pick_animal(&inputs) {
            Ok(name) => {
                info!(animal = %name, "quiz result");
                let message = format!("Looks like you're a {name}!");
                self.state.result = Some(name);
                self.state.quiz = QuizPhase::ResultShown;
                Outcome::Success(message)
            }
            Err(err) => {
                error!(error = %err, "quiz submission failed");
                self.state.quiz = QuizPhase::Failed;
                let message = match err {
                    ActionError::Selection(SelectionError::NoAnimalsAvailable) => QUIZ_NO_ANIMALS,
                    ActionError::Api(_) => QUIZ_FETCH_FAILED,
                };
                self.state.notify(Notice::error(message));
                Outcome::Failure(message.to_string())
            }
        }
    }

    fn pick_animal(&mut self, inputs: &QuizInputs) -> Result<String, ActionError> {
        self.state.quiz = QuizPhase::Fetching;
        self.state.animals = self.fetch_all()?;
        let name = determine_animal(&self.state.animals, inputs, &mut self.rng)?;
        Ok(name)
    }

    fn add_animal(&mut self, input: NewAnimal) -> Outcome {
        self.state.add_form = input.clone();
        match self.create(&input) {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "animal added");
                let message = format!("{} added successfully!", created.name);
                self.state.notify(Notice::info(message.clone()));
                self.state.add_form = NewAnimal::default();
                self.refresh_after_mutation();
                Outcome::Success(message)
            }
            Err(err) => {
                error!(error = %err, "failed to add animal");
                self.state.notify(Notice::error(ADD_FAILED));
                Outcome::Failure(ADD_FAILED.to_string())
            }
        }
    }

    fn delete_animal(&mut self, id: AnimalId) -> Outcome {
        let request = self.client.build_delete_animal(&id);
        let result = self
            .execute(request)
            .and_then(|response| self.client.parse_delete_animal(response));
        match result {
            Ok(()) => {
                info!(%id, "animal deleted");
                self.state.notify(Notice::info(DELETE_OK));
                if self.state.selected.as_ref().is_some_and(|a| a.id == id) {
                    self.state.selected = None;
                }
                self.refresh_after_mutation();
                Outcome::Success(DELETE_OK.to_string())
            }
            Err(err) => {
                error!(%id, error = %err, "failed to delete animal");
                self.state.notify(Notice::error(DELETE_FAILED));
                Outcome::Failure(DELETE_FAILED.to_string())
            }
        }
    }

    fn show_animal(&mut self, id: AnimalId) -> Outcome {
        let request = self.client.build_get_animal(&id);
        let result = self
            .execute(request)
            .and_then(|response| self.client.parse_get_animal(&id, response));
        match result {
            Ok(animal) => {
                let message = format!("{} ({})", animal.name, animal.kind);
                self.state.selected = Some(animal);
                Outcome::Success(message)
            }
            Err(err) => {
                error!(%id, error = %err, "failed to fetch animal");
                self.state.selected = None;
                let message = format!("Error fetching animal {id}: {err}");
                self.state.notify(Notice::error(message.clone()));
                Outcome::Failure(message)
            }
        }
    }

    fn list_first(&mut self, limit: usize) -> Outcome {
        let request = self.client.build_list_animals_limited(limit);
        let result = self
            .execute(request)
            .and_then(|response| self.client.parse_list_animals(response));
        match result {
            Ok(animals) => {
                self.state.animals = animals;
                Outcome::Success(format!("{} animals loaded", self.state.animals.len()))
            }
            Err(err) => {
                error!(limit, error = %err, "failed to load animals");
                Outcome::Failure(err.to_string())
            }
        }
    }

    fn create(&mut self, input: &NewAnimal) -> Result<Animal, ApiError> {
        let request = self.client.build_create_animal(input)?;
        let response = self.execute(request)?;
        self.client.parse_create_animal(response)
    }

    fn fetch_all(&mut self) -> Result<Vec<Animal>, ApiError> {
        let request = self.client.build_list_animals();
        let response = self.execute(request)?;
        self.client.parse_list_animals(response)
    }

    fn refresh(&mut self) -> Result<(), ApiError> {
        self.state.animals = self.fetch_all()?;
        Ok(())
    }

    /// The mutation already succeeded, so a failed re-list only leaves the
    /// previous snapshot on screen.
    fn refresh_after_mutation(&mut self) {
        if let Err(err) = self.refresh() {
            warn!(error = %err, "failed to refresh animal list");
        }
    }

    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        self.transport.execute(request)
    }
}
