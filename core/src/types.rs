//! Domain DTOs for the animal registry and the quiz.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Ids are assigned by the remote store. json-server style stores hand out
//! integers, newer ones hand out strings, so `AnimalId` accepts both and
//! serializes back the way it arrived.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an animal record, as assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimalId {
    Number(u64),
    Text(String),
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalId::Number(n) => write!(f, "{n}"),
            AnimalId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for AnimalId {
    fn from(value: u64) -> Self {
        AnimalId::Number(value)
    }
}

impl From<&str> for AnimalId {
    /// Canonical numeric strings become `Number` so `"5"` and `5` address the
    /// same record. Anything that would not print back identically, such as
    /// `"007"`, stays `Text`.
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(n) if n.to_string() == value => AnimalId::Number(n),
            _ => AnimalId::Text(value.to_string()),
        }
    }
}

/// A single animal record returned by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request payload for registering a new animal. The id is assigned server side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnimal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Answers captured from one quiz submission.
///
/// Only `food` and `color` take part in the selection rule; the remaining
/// answers are collected and carried along unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizInputs {
    pub food: String,
    pub color: String,
    pub drink: String,
    pub tv_show: String,
    pub time_of_day: String,
    pub pastime: String,
}
