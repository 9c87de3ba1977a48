//! Stateless HTTP request builder and response parser for the animal registry.
//!
//! # Design
//! `AnimalClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The host executes the actual HTTP round-trip.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Animal, AnimalId, NewAnimal};

/// Bytes escaped in an id path segment, so text ids cannot add segments,
/// queries or fragments to the URL.
const ID_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the `/animals` collection.
#[derive(Debug, Clone)]
pub struct AnimalClient {
    base_url: String,
}

impl AnimalClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_animals(&self) -> HttpRequest {
        get(format!("{}/animals", self.base_url))
    }

    /// Bounded listing, `GET /animals?_limit=N`.
    pub fn build_list_animals_limited(&self, limit: usize) -> HttpRequest {
        get(format!("{}/animals?_limit={limit}", self.base_url))
    }

    pub fn build_get_animal(&self, id: &AnimalId) -> HttpRequest {
        get(self.animal_url(id))
    }

    pub fn build_create_animal(&self, input: &NewAnimal) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/animals", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_animal(&self, id: &AnimalId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.animal_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    fn animal_url(&self, id: &AnimalId) -> String {
        let segment = id.to_string();
        format!("{}/animals/{}", self.base_url, utf8_percent_encode(&segment, ID_SEGMENT))
    }

    pub fn parse_list_animals(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        check_status(&response)?;
        let animals: Vec<Animal> = parse_body(&response)?;
        debug!(count = animals.len(), payload = %response.body, "fetched animals");
        Ok(animals)
    }

    /// Parses a single record. Failures are logged with the id, status and
    /// reason phrase before being returned.
    pub fn parse_get_animal(&self, id: &AnimalId, response: HttpResponse) -> Result<Animal, ApiError> {
        if let Err(err) = check_status(&response) {
            error!(
                %id,
                status = response.status,
                status_text = response.status_text(),
                "error fetching animal"
            );
            return Err(err);
        }
        parse_body(&response)
    }

    pub fn parse_create_animal(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_delete_animal(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map any status outside 200..=299 to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        status_text: response.status_text().to_string(),
        body: response.body.clone(),
    })
}
