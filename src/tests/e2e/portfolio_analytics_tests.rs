// End to end: page views recorded over REST show up in the owner's /analytics.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shared::core::primitives::MILLIS_PER_DAY;
use crate::shell::http::router;
use crate::tests::fixtures::commands::submit_product::SubmitProductBuilder;
use crate::tests::fixtures::state::{make_test_state, submit_and_project};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn record(app: &Router, body: Value) -> StatusCode {
    let request = Request::post("/page-views")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await.0
}

#[tokio::test]
async fn owner_dashboard_reflects_recorded_views() {
    let state = make_test_state();
    let listings = [("p-1", "founder-1"), ("p-2", "founder-1"), ("p-x", "rival")];
    for (product_id, owner_id) in listings {
        let command = SubmitProductBuilder::new()
            .product_id(product_id)
            .owner_id(owner_id)
            .build();
        submit_and_project(&state, command).await;
    }
    let app = router(state);

    let now = Utc::now().timestamp_millis();
    let views = [
        json!({ "product_id": "p-1", "country": "US", "city": "Austin", "device": "mobile", "occurred_at": now - 1_000 }),
        json!({ "product_id": "p-1", "country": "US", "device": "desktop", "occurred_at": now - 2 * MILLIS_PER_DAY }),
        json!({ "product_id": "p-2", "country": "NL", "city": " ", "occurred_at": now - 9 * MILLIS_PER_DAY }),
        json!({ "product_id": "p-2", "occurred_at": now - 40 * MILLIS_PER_DAY }),
        json!({ "product_id": "p-x", "country": "FR", "occurred_at": now - 1_000 }),
    ];
    for view in views {
        assert_eq!(record(&app, view).await, StatusCode::NO_CONTENT);
    }
    assert_eq!(
        record(&app, json!({ "product_id": "ghost" })).await,
        StatusCode::NOT_FOUND
    );

    let (status, json) = send(
        &app,
        Request::get("/analytics?owner_id=founder-1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let overall = &json["overall"];
    assert_eq!(overall["totalViews"], 3);
    let daily = overall["dailySeries"].as_array().unwrap();
    assert_eq!(daily.len(), 30);
    assert_eq!(daily.iter().map(|p| p["views"].as_u64().unwrap()).sum::<u64>(), 3);
    assert_eq!(overall["hourlyData"].as_array().unwrap().len(), 24);
    assert_eq!(overall["weekdayData"].as_array().unwrap().len(), 7);

    assert_eq!(overall["countryData"][0]["key"], "US");
    assert_eq!(overall["countryData"][0]["count"], 2);
    let us_share = overall["countryData"][0]["percentage"].as_f64().unwrap();
    assert!((us_share - 66.6667).abs() < 0.001);
    assert_eq!(overall["countryData"][1]["key"], "NL");
    assert_eq!(overall["cityData"].as_array().unwrap().len(), 1);
    assert_eq!(
        overall["trend"],
        json!({ "current7d": 2, "previous7d": 1, "percentChange": 100 })
    );

    let per_item = json["perItem"].as_array().unwrap();
    assert_eq!(per_item.len(), 2);
    assert_eq!(per_item[0]["itemId"], "p-1");
    assert_eq!(per_item[0]["snapshot"]["totalViews"], 2);
    assert_eq!(per_item[1]["itemId"], "p-2");
    assert_eq!(per_item[1]["snapshot"]["totalViews"], 1);
}

#[tokio::test]
async fn an_owner_without_products_gets_an_empty_dense_dashboard() {
    let app = router(make_test_state());

    let (status, json) = send(
        &app,
        Request::get("/analytics?owner_id=newcomer")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["overall"]["totalViews"], 0);
    assert_eq!(json["overall"]["dailySeries"].as_array().unwrap().len(), 30);
    assert_eq!(json["overall"]["trend"]["percentChange"], 0);
    assert_eq!(json["perItem"], json!([]));
}
