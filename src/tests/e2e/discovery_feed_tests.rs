// End to end: products go in through the REST surface and come back out of /feed.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::products::use_cases::compose_feed::handler::FeedSettings;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn submit(app: &Router, owner_id: &str, name: &str) -> String {
    let (status, json) = send(
        app,
        post_json(
            "/products",
            json!({ "owner_id": owner_id, "name": name, "tagline": format!("{name} tagline") }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["product_id"].as_str().unwrap().to_string()
}

async fn feed(app: &Router, query: &str) -> Value {
    let (status, json) = send(
        app,
        Request::get(format!("/feed{query}")).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

fn names(page: &Value) -> Vec<(String, String)> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["name"].as_str().unwrap().to_string(),
                item["type"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn featured_products_are_interleaved_and_viewer_exclusions_apply() {
    let app = router(AppState::in_memory(FeedSettings {
        page_size: 3,
        featured_interval: 2,
    }));

    // Uuid v7 ids are time ordered; submissions are spaced so recency order is stable.
    let mut ids = Vec::new();
    for name in ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"] {
        ids.push(submit(&app, "founder-1", name).await);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
    let mine = submit(&app, "viewer-1", "Mine").await;

    let (status, _) = send(
        &app,
        post_json(
            &format!("/products/{}/feature", ids[0]),
            json!({ "placement_ref": "checkout-1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        post_json(
            &format!("/products/{}/likes", ids[4]),
            json!({ "user_id": "viewer-1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let first = feed(&app, &format!("?viewer_id=viewer-1&seen={}", ids[3])).await;
    assert_eq!(
        names(&first),
        vec![
            ("Foxtrot".to_string(), "normal".to_string()),
            ("Charlie".to_string(), "normal".to_string()),
            ("Alpha".to_string(), "featured".to_string()),
            ("Bravo".to_string(), "normal".to_string()),
        ]
    );
    assert_eq!(first["hasMore"], false);
    assert_eq!(first["nextPage"], Value::Null);

    let anonymous = feed(&app, "").await;
    let anonymous_names: Vec<String> = names(&anonymous).into_iter().map(|(n, _)| n).collect();
    assert_eq!(anonymous_names, vec!["Mine", "Foxtrot", "Alpha", "Echo"]);
    assert_eq!(anonymous["nextPage"], 2);

    let ids_on_page: Vec<&str> = first["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert!(!ids_on_page.contains(&mine.as_str()));
    assert!(!ids_on_page.contains(&ids[4].as_str()));
    assert!(!ids_on_page.contains(&ids[3].as_str()));
}

#[tokio::test]
async fn paging_walks_the_catalogue_without_repeats() {
    let app = router(AppState::in_memory(FeedSettings {
        page_size: 2,
        featured_interval: 2,
    }));
    for name in ["One", "Two", "Three", "Four", "Five"] {
        submit(&app, "founder-1", name).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let json = feed(&app, &format!("?page={page}")).await;
        seen.extend(names(&json).into_iter().map(|(n, _)| n));
        match json["nextPage"].as_u64() {
            Some(next) => page = next,
            None => break,
        }
    }
    assert_eq!(seen, vec!["Five", "Four", "Three", "Two", "One"]);
}

#[tokio::test]
async fn invalid_pages_are_rejected() {
    let app = router(AppState::in_memory(FeedSettings::default()));
    let (status, _) = send(&app, Request::get("/feed?page=0").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
