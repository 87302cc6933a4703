// Crew handlers
// Canned responses for crew recommendation, ranking, battle and coin routes

use tracing::info;

use super::{FixtureRequest, FixtureResponse};
use crate::{
    error::ApiResult,
    fixtures,
    models::{CrewList, Envelope},
};

/// List recommended crews
/// GET /users/recommend-crew
pub fn recommend_crew(_request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    let crews = fixtures::recommended_crews();
    info!("Returning {} recommended crews", crews.len());
    FixtureResponse::json(&crews)
}

/// Recommendation modal for one crew
/// GET /users/crew-recommendation/{crewId}
pub fn crew_recommendation(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching crew recommendation for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&fixtures::crew_recommendation())
}

/// Crew detail page
/// GET /crew/{crewId}/detail
pub fn crew_detail(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching crew detail for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&fixtures::crew_detail())
}

/// Ranking of members inside a crew
/// GET /crew/{crewId}/ranking
pub fn member_ranking(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching member ranking for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&fixtures::member_ranking())
}

/// Ranking of crews for one exercise
/// GET /crew/ranking/{exerciseId}
pub fn crew_ranking(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching crew ranking for exercise id: {}", request.param("exerciseId"));
    FixtureResponse::json(&Envelope::ok(
        "",
        CrewList {
            crew_list: fixtures::crew_ranking(),
        },
    ))
}

/// Join request; nothing is recorded
/// POST /crew/{crewId}/join
pub fn join_crew(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Join request for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&Envelope::message_only(200, "크루 가입 신청 성공"))
}

/// Crews the user belongs to
/// GET /users/{userId}/crew-list
pub fn joined_crews(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching joined crews for user id: {}", request.param("userId"));
    FixtureResponse::json(&Envelope::ok(
        "",
        CrewList {
            crew_list: fixtures::joined_crews(),
        },
    ))
}

/// Current battle of a crew
/// GET /crew/{crewId}/battle
pub fn battle_status(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching battle status for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&fixtures::battle_status())
}

/// Second registration of GET /crew/{crewId}/battle, only reachable if the first is removed
pub fn battle_progress(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching battle progress for crew id: {}", request.param("crewId"));
    FixtureResponse::json(&fixtures::battle_progress())
}

/// Quests of the caller's crew
/// GET /quest/get/crew
pub fn crew_quests(_request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Fetching crew quests");
    FixtureResponse::json(&fixtures::crew_quests())
}

/// Consent to random battle matching; answers with no body
/// POST /crew/{crewId}/battle/ready
pub fn battle_ready(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!("Battle ready for crew id: {}", request.param("crewId"));
    Ok(FixtureResponse::empty())
}

/// Send coins to a crew
/// POST /crew/{crewId}/coin/{coinCount}
pub fn send_coin(request: &FixtureRequest<'_>) -> ApiResult<FixtureResponse> {
    info!(
        "Sending {} coins to crew id: {}",
        request.param("coinCount"),
        request.param("crewId")
    );
    FixtureResponse::json(&fixtures::coin_transfer())
}
