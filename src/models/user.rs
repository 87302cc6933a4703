use serde::Serialize;
use serde_json::Value;

/// Body of the nickname availability check.
/// Only a string `nick` field of a JSON object is considered; anything else
/// means no nickname was asked for, and an absent nickname is never taken.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NicknameRequest {
    pub nick: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicknameCheck {
    pub is_duplicated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub first_name: &'static str,
    pub last_name: &'static str,
}

/// Payload of the connectivity smoke-test route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleUser {
    pub user: UserName,
}

impl NicknameRequest {
    pub fn from_body(body: &Value) -> Self {
        NicknameRequest {
            nick: body.get("nick").and_then(Value::as_str).map(str::to_string),
        }
    }

    pub fn is_taken_in(&self, taken: &[String]) -> bool {
        self.nick
            .as_deref()
            .is_some_and(|nick| taken.iter().any(|existing| existing == nick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn taken() -> Vec<String> {
        vec!["닉네임".to_string()]
    }

    #[test]
    fn test_taken_nickname() {
        let request = NicknameRequest::from_body(&json!({ "nick": "닉네임" }));
        assert!(request.is_taken_in(&taken()));
    }

    #[test]
    fn test_free_nickname() {
        let request = NicknameRequest::from_body(&json!({ "nick": "새로운닉" }));
        assert!(!request.is_taken_in(&taken()));
    }

    #[test]
    fn test_missing_or_null_nickname_is_free() {
        assert!(!NicknameRequest::from_body(&json!({})).is_taken_in(&taken()));
        assert!(!NicknameRequest::from_body(&json!({ "nick": null })).is_taken_in(&taken()));
        assert!(!NicknameRequest::from_body(&Value::Null).is_taken_in(&taken()));
    }

    #[test]
    fn test_only_object_string_field_counts() {
        let positional = NicknameRequest::from_body(&json!(["닉네임"]));
        let numeric = NicknameRequest::from_body(&json!({ "nick": 123 }));
        let bare = NicknameRequest::from_body(&json!("닉네임"));

        assert_eq!(positional.nick, None);
        assert_eq!(numeric.nick, None);
        assert_eq!(bare.nick, None);
        assert!(!positional.is_taken_in(&taken()));
    }

    #[test]
    fn test_match_is_exact() {
        let request = NicknameRequest { nick: Some("닉네임 ".to_string()) };
        assert!(!request.is_taken_in(&taken()));
    }
}
