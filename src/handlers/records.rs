// Record handlers

use tracing::info;

use super::{FixtureRequest, FixtureResponse};
use crate::{
    error::ApiResult,
    fixtures,
    models::{BodyHistoryQuery, Envelope},
};

/// Monthly body-composition history. The month filter is ignored.
/// GET /users/body?year=&month=
pub fn body_history(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    let query = BodyHistoryQuery::from_pairs(request.query()?);
    info!(
        "Fetching body history for year: {:?}, month: {:?}",
        query.year, query.month
    );

    FixtureResponse::json(&Envelope::ok("Success", fixtures::body_history()?))
}
