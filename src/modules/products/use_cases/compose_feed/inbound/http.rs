use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::products::use_cases::compose_feed::handler::{FeedQueryError, FeedRequest};
use crate::shared::core::primitives::{non_blank, split_id_list};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct FeedParams {
    pub page: Option<String>,
    pub seen: Option<String>,
    pub viewer_id: Option<String>,
}

impl FeedParams {
    fn page(&self) -> Option<u32> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Some(1),
            Some(raw) => raw.parse::<u32>().ok().filter(|page| *page >= 1),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> impl IntoResponse {
    let Some(page) = params.page() else {
        return (StatusCode::BAD_REQUEST, "page must be an integer >= 1").into_response();
    };

    let request = FeedRequest {
        seen: params.seen.as_deref().map(split_id_list).unwrap_or_default(),
        viewer_id: non_blank(params.viewer_id),
        page,
    };

    match state.feed_handler.handle(request).await {
        Ok(page) => Json(page).into_response(),
        Err(FeedQueryError::InvalidArgument(error)) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(FeedQueryError::Store(error)) => {
            tracing::error!(error = %error, "feed query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod compose_feed_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::submit_product::SubmitProductBuilder;
    use crate::tests::fixtures::state::{make_test_state, submit_and_project};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/feed", get(handle)).with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_an_empty_first_page_for_an_empty_catalogue() {
        let (status, json) = get_json(make_test_state(), "/feed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({ "items": [], "nextPage": null, "hasMore": false })
        );
    }

    #[rstest]
    #[case("/feed?page=0")]
    #[case("/feed?page=-1")]
    #[case("/feed?page=two")]
    #[tokio::test]
    async fn it_should_return_400_for_an_invalid_page(#[case] uri: &str) {
        let (status, _) = get_json(make_test_state(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_hide_seen_and_owned_products() {
        let state = make_test_state();
        for (id, owner, at) in [
            ("p-1", "o-1", 1_000),
            ("p-2", "o-2", 2_000),
            ("p-3", "o-3", 3_000),
        ] {
            let command = SubmitProductBuilder::new()
                .product_id(id)
                .owner_id(owner)
                .submitted_at(at)
                .build();
            submit_and_project(&state, command).await;
        }

        let (status, json) = get_json(state, "/feed?seen=p-3,%20,&viewer_id=o-1").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["p-2"]);
        assert_eq!(json["items"][0]["type"], "normal");
    }
}
