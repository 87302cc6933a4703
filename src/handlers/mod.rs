// Handlers module
// Fixture responders plus the axum entry points that dispatch into them

pub mod crew;
pub mod records;
pub mod users;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::{
    app::AppState,
    config::EnvelopeMode,
    error::{ApiError, ApiResult},
    models::envelope::{normalize, Shape},
    routing::{request_host, PathParams, RouteHost},
};

/// Signature every fixture route implements.
pub type Responder = fn(&FixtureRequest<'_>) -> ApiResult<FixtureResponse>;

/// Everything a responder may look at.
pub struct FixtureRequest<'a> {
    pub params: &'a PathParams,
    pub uri: &'a Uri,
    pub body: &'a [u8],
    pub taken_nicknames: &'a [String],
}

impl FixtureRequest<'_> {
    /// Bound placeholder value, empty when the route has no such placeholder.
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).unwrap_or_default()
    }

    pub fn query<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Query::<T>::try_from_uri(self.uri)
            .map(|Query(query)| query)
            .map_err(|rejection| ApiError::validation(rejection.body_text()))
    }

    pub fn json_body<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_slice(self.body)
            .map_err(|err| ApiError::validation(format!("Invalid JSON body: {}", err)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl FixtureResponse {
    pub fn json<T: Serialize>(value: &T) -> ApiResult<Self> {
        Ok(FixtureResponse {
            status: StatusCode::OK,
            body: Some(serde_json::to_value(value)?),
        })
    }

    pub fn empty() -> Self {
        FixtureResponse {
            status: StatusCode::OK,
            body: None,
        }
    }

    fn render(self, shape: Shape, mode: EnvelopeMode) -> Response {
        match (mode, self.body) {
            (EnvelopeMode::Normalized, body) => {
                (self.status, Json(normalize(shape, self.status.as_u16(), body))).into_response()
            }
            (EnvelopeMode::Original, Some(body)) => (self.status, Json(body)).into_response(),
            (EnvelopeMode::Original, None) => self.status.into_response(),
        }
    }
}

/// Health check handler
/// Returns "OK" with 200 status for monitoring purposes
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Router fallback: resolves the request against the fixture table.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let host = request_host(&uri, &headers);

    let resolved = state
        .table
        .resolve(&method, host.as_deref(), uri.path())
        .ok_or_else(|| ApiError::not_found(format!("{} {}", method, uri)))?;

    debug!(
        "Matched {} {} to fixture #{} ({})",
        method,
        uri.path(),
        resolved.index,
        resolved.route.pattern.template()
    );

    let request = FixtureRequest {
        params: &resolved.params,
        uri: &uri,
        body: &body,
        taken_nicknames: &state.taken_nicknames,
    };

    let response = (resolved.route.responder)(&request)?;
    Ok(response.render(resolved.route.shape, state.envelope_mode))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    pub index: usize,
    pub method: String,
    pub host: Option<&'static str>,
    pub path: String,
    pub shape: Shape,
    pub shadowed_by: Option<usize>,
}

/// Lists every fixture route in match order
/// GET /__fixtures
pub async fn fixture_catalogue(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let shadowed = state.table.shadowed();

    let entries: Vec<CatalogueEntry> = state
        .table
        .routes()
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let (host, path) = match route.host {
                RouteHost::Base => (
                    None,
                    format!("{}{}", state.table.base_path(), route.pattern.template()),
                ),
                RouteHost::Absolute(host) => (Some(host), route.pattern.template().to_string()),
            };

            CatalogueEntry {
                index,
                method: route.method.to_string(),
                host,
                path,
                shape: route.shape,
                shadowed_by: shadowed
                    .iter()
                    .find(|shadowing| shadowing.index == index)
                    .map(|shadowing| shadowing.shadowed_by),
            }
        })
        .collect();

    (StatusCode::OK, Json(entries))
}
