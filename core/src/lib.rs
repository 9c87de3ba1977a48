//! Client core for the animal quiz.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! `/animals` registry without touching the network (host-does-IO pattern).
//! On top of that sit the quiz selection rule, the image lookup, an explicit
//! `AppState`, a full-redraw renderer and the `App` action dispatcher.
//!
//! # Design
//! - `AnimalClient` is stateless; it holds only `base_url`.
//! - Each registry operation is split into `build_*` and `parse_*`, so the
//!   I/O boundary is explicit. Hosts plug in a `Transport`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod image;
pub mod render;
pub mod selection;
pub mod state;
pub mod types;

pub use app::{Action, App, Outcome};
pub use client::AnimalClient;
pub use error::{ActionError, ApiError, SelectionError};
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use image::resolve_image;
pub use render::render;
pub use selection::determine_animal;
pub use state::{AppState, Notice, NoticeLevel, QuizPhase};
pub use types::{Animal, AnimalId, NewAnimal, QuizInputs};
