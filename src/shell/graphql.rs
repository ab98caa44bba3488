use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::analytics::use_cases::product_analytics::inbound::graphql::ProductAnalyticsQuery;
use crate::modules::analytics::use_cases::record_page_view::inbound::graphql::RecordPageViewMutation;
use crate::modules::products::use_cases::compose_feed::inbound::graphql::FeedQuery;
use crate::modules::products::use_cases::feature_product::inbound::graphql::FeatureProductMutation;
use crate::modules::products::use_cases::like_product::inbound::graphql::LikeProductMutation;
use crate::modules::products::use_cases::submit_product::inbound::graphql::SubmitProductMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(FeedQuery, ProductAnalyticsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    SubmitProductMutation,
    LikeProductMutation,
    FeatureProductMutation,
    RecordPageViewMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
