// Fixture data and the route table serving it

use anyhow::{Context, Result};
use axum::http::Method;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Number;

use crate::{
    handlers::{crew, records, users, Responder},
    models::{
        BattleState, BodyHistory, BodyRecord, CoinTransfer, CrewBattleStatus, CrewDetail,
        CrewQuest, CrewRankingEntry, CrewRecommendation, CrewRole, CrewSummary, MemberRanking,
        QuestPeriod, SampleUser, Shape, UserName,
    },
    routing::{FixtureTable, RouteHost},
};

/// Host of the two smoke-test routes that bypass the base path.
pub const EXAMPLE_HOST: &str = "example.com";

const CREW_IMAGE: &str = "crew-profile-image.jpg";
const UPLOADED_CREW_IMAGE: &str = "https://c106-chaun.s3.ap-northeast-2.amazonaws.com/file_uuid.jpeg";

/// Every fixture route in match order. Earlier registrations win.
pub fn fixture_table(base_path: &str) -> FixtureTable<Responder> {
    FixtureTable::<Responder>::new(base_path)
        .get("/users/recommend-crew", Shape::Bare, crew::recommend_crew)
        .get("/users/crew-recommendation/{crewId}", Shape::Bare, crew::crew_recommendation)
        .get("/crew/{crewId}/detail", Shape::Bare, crew::crew_detail)
        .get("/crew/{crewId}/ranking", Shape::Bare, crew::member_ranking)
        .get("/crew/ranking/{exerciseId}", Shape::Enveloped, crew::crew_ranking)
        .post("/crew/{crewId}/join", Shape::Enveloped, crew::join_crew)
        .get("/users/{userId}/crew-list", Shape::Enveloped, crew::joined_crews)
        .get("/crew/{crewId}/battle", Shape::Bare, crew::battle_status)
        .get("/quest/get/crew", Shape::Bare, crew::crew_quests)
        .post("/crew/{crewId}/battle/ready", Shape::Empty, crew::battle_ready)
        .post("/crew/{crewId}/coin/{coinCount}", Shape::Bare, crew::send_coin)
        // Registered twice upstream; this one never answers while the earlier one exists.
        .get("/crew/{crewId}/battle", Shape::Bare, crew::battle_progress)
        .on(RouteHost::Absolute(EXAMPLE_HOST), Method::GET, "/test", Shape::Bare, users::sample_user)
        .on(RouteHost::Absolute(EXAMPLE_HOST), Method::POST, "/nick", Shape::Bare, users::check_nickname)
        .get("/users/body", Shape::Enveloped, records::body_history)
}

pub fn recommended_crews() -> Vec<CrewSummary> {
    (1..=2)
        .map(|crew_id| CrewSummary {
            crew_id,
            crew_name: "달리자",
            exercise_name: "러닝",
            crew_profile_image: UPLOADED_CREW_IMAGE,
        })
        .collect()
}

pub fn crew_recommendation() -> CrewRecommendation {
    CrewRecommendation {
        crew_name: "달리자",
        exercise_name: "러닝",
        description: "번개보다 빠른 러너들의 모임",
        crew_profile_image: CREW_IMAGE,
        body_type: "미정",
        age: 29,
        rank: 31,
        daily_caloric_intake: 1400,
        basic_score: 1000,
        activity_score: 1000,
        coin: 300,
    }
}

pub fn crew_detail() -> CrewDetail {
    CrewDetail {
        crew_id: 1,
        crew_name: "달리는 번개2",
        exercise_name: "러닝",
        profile_image: CREW_IMAGE,
        description: "번개맨보다 빠른 러너들의 모임",
        crew_coins: 350,
        crew_ranking: 3,
        total_battle_count: 10,
        win_count: 7,
        average_age: 29,
        activity_score: 1200,
        basic_score: 850,
        role: CrewRole::Leader,
    }
}

pub fn member_ranking() -> Vec<MemberRanking> {
    vec![
        MemberRanking {
            nickname: "달리기 왕자",
            user_id: 20,
            user_profile_image: CREW_IMAGE,
            exercise_time: 123123,
        },
        MemberRanking {
            nickname: "달리기 공주",
            user_id: 21,
            user_profile_image: CREW_IMAGE,
            exercise_time: 123121,
        },
    ]
}

/// One leading entry followed by eight identical ones.
pub fn crew_ranking() -> Vec<CrewRankingEntry> {
    let entry = |crew_id, basic_score, activity_score| CrewRankingEntry {
        crew_id,
        crew_name: "달리자",
        exercise_name: "러닝",
        crew_profile_image: CREW_IMAGE,
        basic_score,
        activity_score,
    };

    std::iter::once(entry(2, 100, 200))
        .chain(std::iter::repeat_with(|| entry(3, 1000, 2000)).take(8))
        .collect()
}

pub fn joined_crews() -> Vec<CrewSummary> {
    (1..=2)
        .map(|crew_id| CrewSummary {
            crew_id,
            crew_name: "달리자",
            exercise_name: "러닝",
            crew_profile_image: CREW_IMAGE,
        })
        .collect()
}

/// Winner of the duplicated battle route.
pub fn battle_status() -> CrewBattleStatus {
    CrewBattleStatus {
        battle_id: Some(1),
        my_team_name: "달리자크루",
        my_team_score: 1200,
        opponent_team_name: "크크크루",
        opponent_team_score: 1000,
        exercise_name: "러닝",
        d_day: 2,
        battle_status: BattleState::Started,
    }
}

/// Payload of the shadowed battle registration.
pub fn battle_progress() -> CrewBattleStatus {
    CrewBattleStatus {
        battle_id: None,
        my_team_name: "달리자크루",
        my_team_score: 400,
        opponent_team_name: "크크크루",
        opponent_team_score: 500,
        exercise_name: "러닝",
        d_day: 2,
        battle_status: BattleState::Started,
    }
}

pub fn crew_quests() -> Vec<CrewQuest> {
    vec![CrewQuest {
        quest_id: 3,
        title: "크루 내 2명 이상의 팀원 하루에 합산 1시간 이상 운동하기",
        quest_period: QuestPeriod::Daily,
        is_completed: true,
    }]
}

pub fn coin_transfer() -> CoinTransfer {
    CoinTransfer {
        message: "코인을 전송하였습니다.",
        crew_coin: 1000,
        my_coin: 900,
    }
}

pub fn sample_user() -> SampleUser {
    SampleUser {
        user: UserName {
            first_name: "John",
            last_name: "Maverick",
        },
    }
}

pub fn body_history() -> Result<BodyHistory> {
    Ok(BodyHistory {
        body_history_data_list: vec![
            BodyRecord {
                date: measured_at(2024, 9, 16)?,
                weight: reading(75.5)?,
                skeletal_muscle_mass: reading(30.0)?,
                body_fat_ratio: reading(20.0)?,
            },
            BodyRecord {
                date: measured_at(2024, 9, 23)?,
                weight: reading(74.0)?,
                skeletal_muscle_mass: reading(29.5)?,
                body_fat_ratio: reading(21.0)?,
            },
        ],
    })
}

// Whole readings stay integers on the wire.
fn reading(value: f64) -> Result<Number> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(Number::from(value as i64))
    } else {
        Number::from_f64(value).with_context(|| format!("reading {} is not representable", value))
    }
}

fn measured_at(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(15, 0, 0))
        .with_context(|| format!("invalid measurement date {}-{}-{}", year, month, day))
}
