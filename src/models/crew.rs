use serde::Serialize;

/// Card shown in crew recommendation and membership lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewSummary {
    pub crew_id: u64,
    pub crew_name: &'static str,
    pub exercise_name: &'static str,
    pub crew_profile_image: &'static str,
}

/// Detail modal opened from a crew recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRecommendation {
    pub crew_name: &'static str,
    pub exercise_name: &'static str,
    pub description: &'static str,
    pub crew_profile_image: &'static str,
    pub body_type: &'static str,
    pub age: u32,
    pub rank: u32,
    pub daily_caloric_intake: u32,
    pub basic_score: u32,
    pub activity_score: u32,
    pub coin: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewRole {
    Leader,
}

/// Full crew page, including the caller's role in the crew.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewDetail {
    pub crew_id: u64,
    pub crew_name: &'static str,
    pub exercise_name: &'static str,
    pub profile_image: &'static str,
    pub description: &'static str,
    pub crew_coins: u32,
    pub crew_ranking: u32,
    pub total_battle_count: u32,
    pub win_count: u32,
    pub average_age: u32,
    pub activity_score: u32,
    pub basic_score: u32,
    pub role: CrewRole,
}

/// One member's line in the in-crew ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRanking {
    pub nickname: &'static str,
    pub user_id: u64,
    pub user_profile_image: &'static str,
    pub exercise_time: u64,
}

/// One crew's line in the per-exercise ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRankingEntry {
    pub crew_id: u64,
    pub crew_name: &'static str,
    pub exercise_name: &'static str,
    pub crew_profile_image: &'static str,
    pub basic_score: u32,
    pub activity_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewList<T> {
    pub crew_list: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleState {
    Started,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewBattleStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battle_id: Option<u64>,
    pub my_team_name: &'static str,
    pub my_team_score: u32,
    pub opponent_team_name: &'static str,
    pub opponent_team_score: u32,
    pub exercise_name: &'static str,
    pub d_day: u32,
    pub battle_status: BattleState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestPeriod {
    Daily,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewQuest {
    pub quest_id: u64,
    pub title: &'static str,
    pub quest_period: QuestPeriod,
    pub is_completed: bool,
}

/// Confirmation after sending coins from a member to the crew.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTransfer {
    pub message: &'static str,
    pub crew_coin: u32,
    pub my_coin: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_battle_status_field_names() {
        let status = CrewBattleStatus {
            battle_id: None,
            my_team_name: "a",
            my_team_score: 1,
            opponent_team_name: "b",
            opponent_team_score: 2,
            exercise_name: "러닝",
            d_day: 2,
            battle_status: BattleState::Started,
        };

        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value["dDay"], json!(2));
        assert_eq!(value["battleStatus"], json!("STARTED"));
        assert!(value.get("battleId").is_none());
    }

    #[test]
    fn test_enums_serialize_screaming_case() {
        assert_eq!(serde_json::to_value(CrewRole::Leader).unwrap(), json!("LEADER"));
        assert_eq!(serde_json::to_value(QuestPeriod::Daily).unwrap(), json!("DAILY"));
    }
}
