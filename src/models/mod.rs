// Models module
// Serializable shapes of every fixture payload

pub mod crew;
pub mod envelope;
pub mod record;
pub mod user;

// Re-export commonly used types
pub use crew::{
    BattleState, CoinTransfer, CrewBattleStatus, CrewDetail, CrewList, CrewQuest, CrewRankingEntry,
    CrewRecommendation, CrewRole, CrewSummary, MemberRanking, QuestPeriod,
};
pub use envelope::{Envelope, Shape};
pub use record::{BodyHistory, BodyHistoryQuery, BodyRecord};
pub use user::{NicknameCheck, NicknameRequest, SampleUser, UserName};
