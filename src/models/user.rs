use serde::{Deserialize, Serialize};

/// Profile document stored per user.
///
/// Every field is optional; an absent field contributes an empty string to
/// the match text. The camelCase names match the documents the front-end
/// writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileData {
    #[serde(default)]
    pub career_goals: Option<String>,

    #[serde(default)]
    pub interests: Option<String>,

    #[serde(default)]
    pub skills: Option<String>,
}

impl UserProfileData {
    /// Free-text profile: career goals, interests, and skills joined with
    /// single spaces, in that order. Never fails; all fields absent yields
    /// a blank (stop-word-free) string.
    pub fn profile_text(&self) -> String {
        format!(
            "{} {} {}",
            self.career_goals.as_deref().unwrap_or(""),
            self.interests.as_deref().unwrap_or(""),
            self.skills.as_deref().unwrap_or("")
        )
    }
}
