//! Build Page Handler
//!
//! HTTP endpoint for the build detail page.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header::AUTHORIZATION},
    response::Html,
};

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::build_page::{
    BuildPageAggregator, PIPELINE_NAME_PARAM, ParameterSource, RoutedPipeline,
};

/// GET /pipelines/{pipeline_name}/jobs/{job}/builds/{build}
/// Render the build detail page
///
/// The CI API is queried with the caller's own `Authorization` header.
pub async fn get_build(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<Html<String>> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let client = state.clients.build(authorization);

    let context = Arc::new(RoutedPipeline::new(ParameterSource::get(
        &params,
        PIPELINE_NAME_PARAM,
    )));
    let aggregator = BuildPageAggregator::new(client, context);

    let body = aggregator.handle(&params, state.renderer.as_ref()).await?;

    Ok(Html(body))
}
