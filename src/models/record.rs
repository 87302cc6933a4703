use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Number;

/// Optional month filter on the body history route. Logged, never applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BodyHistoryQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

impl BodyHistoryQuery {
    /// First occurrence of each key wins; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = BodyHistoryQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "year" => &mut query.year,
                "month" => &mut query.month,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// One body-composition measurement.
/// Whole values serialize without a fraction (`74`, not `74.0`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub date: NaiveDateTime,
    pub weight: Number,
    pub skeletal_muscle_mass: Number,
    pub body_fat_ratio: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyHistory {
    pub body_history_data_list: Vec<BodyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_record_serialization() {
        let record = BodyRecord {
            date: NaiveDate::from_ymd_opt(2024, 9, 16)
                .and_then(|day| day.and_hms_opt(15, 0, 0))
                .unwrap(),
            weight: Number::from_f64(75.5).unwrap(),
            skeletal_muscle_mass: Number::from(30),
            body_fat_ratio: Number::from(20),
        };

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"date":"2024-09-16T15:00:00","weight":75.5,"skeletalMuscleMass":30,"bodyFatRatio":20}"#
        );
        assert_eq!(serde_json::to_value(&record).unwrap()["weight"], json!(75.5));
    }

    #[test]
    fn test_query_keeps_first_value() {
        let query = BodyHistoryQuery::from_pairs(pairs(&[
            ("year", "2024"),
            ("year", "2025"),
            ("month", "9"),
            ("page", "2"),
        ]));

        assert_eq!(query.year.as_deref(), Some("2024"));
        assert_eq!(query.month.as_deref(), Some("9"));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(BodyHistoryQuery::from_pairs(Vec::new()), BodyHistoryQuery::default());
    }
}
