use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Column names of the catalog CSV export.
///
/// The three matched columns feed the vector space; everything else rides
/// along unchanged in [`CourseRecord::extra`].
pub mod columns {
    pub const TITLE: &str = "Course Title";
    pub const LEARNING_OUTCOMES: &str = "What you will learn";
    pub const KEYWORDS: &str = "Keyword";
}

/// One catalog entry.
///
/// A record's identity is its row position at load time; the course matrix
/// is aligned to the same positions. Records are immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub title: String,
    pub learning_outcomes: String,
    pub keywords: String,
    /// Remaining CSV columns (level, rating, URL, ...) preserved for the
    /// client, keyed by their original header names.
    pub extra: BTreeMap<String, String>,
}

impl CourseRecord {
    /// Text profile used for vectorization: title, learning outcomes, and
    /// keywords joined with single spaces, in that order.
    pub fn profile(&self) -> String {
        format!(
            "{} {} {}",
            self.title, self.learning_outcomes, self.keywords
        )
    }
}

// Serialized as one flat JSON object under the original column names, the
// shape the catalog rows had on the wire before vectorization existed.
impl Serialize for CourseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.extra.len()))?;
        map.serialize_entry(columns::TITLE, &self.title)?;
        map.serialize_entry(columns::LEARNING_OUTCOMES, &self.learning_outcomes)?;
        map.serialize_entry(columns::KEYWORDS, &self.keywords)?;
        for (name, value) in &self.extra {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CourseRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = BTreeMap::<String, String>::deserialize(deserializer)?;
        let title = fields.remove(columns::TITLE).unwrap_or_default();
        let learning_outcomes = fields.remove(columns::LEARNING_OUTCOMES).unwrap_or_default();
        let keywords = fields.remove(columns::KEYWORDS).unwrap_or_default();

        Ok(Self {
            title,
            learning_outcomes,
            keywords,
            extra: fields,
        })
    }
}
