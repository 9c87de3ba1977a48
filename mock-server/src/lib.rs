//! In-memory `/animals` registry with json-server style semantics.
//!
//! Ids are positive integers handed out incrementally, `_limit` bounds a
//! listing, unknown ids answer 404 with `{}` and deletes answer 200 with `{}`.

use std::{collections::BTreeMap, path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize)]
pub struct CreateAnimal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Query parameters understood by the listing route. The limit is kept as a
/// string because json-server ignores values that are not numbers.
#[derive(Deserialize, Default)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
}

/// Layout of a json-server database file: `{"animals": [...]}`.
#[derive(Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub animals: Vec<Animal>,
}

impl Seed {
    pub fn load(path: &FsPath) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

pub type Db = Arc<RwLock<BTreeMap<u64, Animal>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router backed by a registry that starts out holding `animals`.
pub fn app_with(animals: Vec<Animal>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        animals.into_iter().map(|a| (a.id, a)).collect(),
    ));
    Router::new()
        .route("/animals", get(list_animals).post(create_animal))
        .route("/animals/{id}", get(get_animal).delete(delete_animal))
        .with_state(db)
}

pub async fn serve(listener: TcpListener, animals: Vec<Animal>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(animals)).await
}

async fn list_animals(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Animal>> {
    let animals = db.read().await;
    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    debug!(total = animals.len(), limit, "listing animals");
    Json(animals.values().take(limit).cloned().collect())
}

async fn create_animal(
    State(db): State<Db>,
    Json(input): Json<CreateAnimal>,
) -> Result<(StatusCode, Json<Animal>), (StatusCode, Json<Value>)> {
    let mut animals = db.write().await;
    let Some(id) = animals.keys().next_back().map_or(Some(1), |max| max.checked_add(1)) else {
        warn!("id space exhausted");
        return Err((StatusCode::INSUFFICIENT_STORAGE, Json(json!({}))));
    };
    let animal = Animal {
        id,
        name: input.name,
        kind: input.kind,
    };
    animals.insert(id, animal.clone());
    info!(id, name = %animal.name, "animal created");
    Ok((StatusCode::CREATED, Json(animal)))
}

async fn get_animal(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, (StatusCode, Json<Value>)> {
    let animals = db.read().await;
    parse_id(&id)
        .and_then(|id| animals.get(&id).cloned())
        .map(Json)
        .ok_or_else(not_found)
}

async fn delete_animal(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut animals = db.write().await;
    let removed = parse_id(&id).and_then(|id| animals.remove(&id));
    match removed {
        Some(animal) => {
            info!(id = animal.id, "animal deleted");
            Ok(Json(json!({})))
        }
        None => Err(not_found()),
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({})))
}
