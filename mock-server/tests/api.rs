use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Animal};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn seeded() -> Vec<Animal> {
    [(1, "Koala", "marsupial"), (2, "Dog", "mammal"), (3, "Penguin", "bird"), (4, "Owl", "bird")]
        .into_iter()
        .map(|(id, name, kind)| Animal {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

// --- list ---

#[tokio::test]
async fn list_animals_empty() {
    let resp = app().oneshot(get("/animals")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert!(animals.is_empty());
}

#[tokio::test]
async fn list_animals_in_id_order() {
    let resp = app_with(seeded()).oneshot(get("/animals")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    let ids: Vec<u64> = animals.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_animals_respects_limit() {
    let resp = app_with(seeded())
        .oneshot(get("/animals?_limit=3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    let names: Vec<&str> = animals.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Koala", "Dog", "Penguin"]);
}

#[tokio::test]
async fn list_animals_ignores_bad_limit() {
    let resp = app_with(seeded())
        .oneshot(get("/animals?_limit=lots"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals.len(), 4);
}

// --- create ---

#[tokio::test]
async fn create_animal_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/animals", r#"{"name":"Otter","type":"mammal"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let animal: Animal = body_json(resp).await;
    assert_eq!(animal.id, 1);
    assert_eq!(animal.name, "Otter");
    assert_eq!(animal.kind, "mammal");
}

#[tokio::test]
async fn create_animal_continues_after_seeded_ids() {
    let resp = app_with(seeded())
        .oneshot(json_request("POST", "/animals", r#"{"name":"Otter","type":"mammal"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let animal: Animal = body_json(resp).await;
    assert_eq!(animal.id, 5);
}

#[tokio::test]
async fn create_animal_past_max_id_returns_507() {
    let full = vec![Animal {
        id: u64::MAX,
        name: "Last".to_string(),
        kind: "mammal".to_string(),
    }];
    let app = app_with(full);

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/animals", r#"{"name":"Otter","type":"mammal"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INSUFFICIENT_STORAGE);
    assert_eq!(body_json::<serde_json::Value>(resp).await, serde_json::json!({}));

    let resp = app.oneshot(get("/animals")).await.unwrap();
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals.len(), 1);
}

#[tokio::test]
async fn create_animal_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/animals", r#"{"name":"Otter"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_animal_not_found() {
    let resp = app().oneshot(get("/animals/5")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn get_animal_non_numeric_id_is_not_found() {
    let resp = app().oneshot(get("/animals/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_seeded_animal() {
    let resp = app_with(seeded()).oneshot(get("/animals/2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animal: Animal = body_json(resp).await;
    assert_eq!(animal.name, "Dog");
}

// --- delete ---

#[tokio::test]
async fn delete_animal_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/animals/5")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_list_delete_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/animals", r#"{"name":"Koala","type":"marsupial"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Animal = body_json(resp).await;
    let id = created.id;

    // list contains the new record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/animals"))
        .await
        .unwrap();
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals, vec![created.clone()]);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/animals/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Animal = body_json(resp).await;
    assert_eq!(fetched, created);

    // delete answers 200 with an empty object
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/animals/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"{}");

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/animals/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/animals"))
        .await
        .unwrap();
    let animals: Vec<Animal> = body_json(resp).await;
    assert!(animals.is_empty());
}
