use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CourseRecord;

/// Recommendation list persisted per user.
///
/// Overwrite semantics: each new query replaces any prior document for the
/// same user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDocument {
    /// Recommended courses in descending-similarity order.
    pub courses: Vec<CourseRecord>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_round_trip_preserves_course_order() {
        let doc = RecommendationDocument {
            courses: vec![
                CourseRecord {
                    title: "B".to_string(),
                    learning_outcomes: String::new(),
                    keywords: String::new(),
                    extra: BTreeMap::new(),
                },
                CourseRecord {
                    title: "A".to_string(),
                    learning_outcomes: String::new(),
                    keywords: String::new(),
                    extra: BTreeMap::new(),
                },
            ],
            generated_at: Utc::now(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: RecommendationDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.courses[0].title, "B");
    }
}
