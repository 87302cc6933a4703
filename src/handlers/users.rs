// User handlers
// Smoke-test user and nickname availability on the fixed example host

use serde_json::Value;
use tracing::info;

use super::{FixtureRequest, FixtureResponse};
use crate::{
    error::ApiResult,
    fixtures,
    models::{NicknameCheck, NicknameRequest},
};

/// GET https://example.com/test
pub fn sample_user(_request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    FixtureResponse::json(&fixtures::sample_user())
}

/// Nickname availability check. The only route whose answer depends on input.
/// POST https://example.com/nick
pub fn check_nickname(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    let body: Value = request.json_body()?;
    let body = NicknameRequest::from_body(&body);
    let is_duplicated = body.is_taken_in(request.taken_nicknames);

    info!("Nickname check for {:?}: duplicated = {}", body.nick, is_duplicated);
    FixtureResponse::json(&NicknameCheck { is_duplicated })
}
