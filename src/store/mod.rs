use std::fmt::Display;

use redis::AsyncCommands;
use redis::Client;

use crate::error::{AppError, AppResult};
use crate::models::{RecommendationDocument, UserProfileData};

/// Keys for documents held in the external store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    UserProfile(String),
    Recommendations(String),
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::UserProfile(user_id) => write!(f, "user:{}", user_id),
            StoreKey::Recommendations(user_id) => write!(f, "recommendations:{}", user_id),
        }
    }
}

/// External document store holding user profiles and persisted
/// recommendation lists.
///
/// The recommendation core never talks to the store directly; handlers
/// compose the two. Implementations must give overwrite semantics for
/// `save_recommendations`.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetches a user's profile document. `None` means the user is
    /// unknown.
    async fn fetch_user(&self, user_id: &str) -> AppResult<Option<UserProfileData>>;

    /// Creates or replaces a user's profile document.
    async fn put_user(&self, user_id: &str, profile: &UserProfileData) -> AppResult<()>;

    /// Persists the recommendation document for a user, replacing any
    /// prior value.
    async fn save_recommendations(
        &self,
        user_id: &str,
        document: &RecommendationDocument,
    ) -> AppResult<()>;

    /// Fetches the most recently persisted recommendation document.
    async fn fetch_recommendations(
        &self,
        user_id: &str,
    ) -> AppResult<Option<RecommendationDocument>>;
}

/// Redis-backed document store. Documents are JSON strings under the
/// typed keys above.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Creates a store over a Redis connection URL. The connection itself
    /// is established lazily per operation.
    pub fn connect(redis_url: &str) -> anyhow::Result<Self> {
        let client = Client::open(redis_url)?;
        Ok(Self { client })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        key: &StoreKey,
    ) -> AppResult<Option<T>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(key.to_string()).await?;

        match raw {
            Some(json) => {
                let document = serde_json::from_str(&json).map_err(|e| {
                    AppError::Internal(format!("Store deserialization error: {}", e))
                })?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    async fn set_json<T: serde::Serialize>(&self, key: &StoreKey, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(format!("Store serialization error: {}", e)))?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key.to_string(), json).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileStore for RedisStore {
    async fn fetch_user(&self, user_id: &str) -> AppResult<Option<UserProfileData>> {
        self.get_json(&StoreKey::UserProfile(user_id.to_string()))
            .await
    }

    async fn put_user(&self, user_id: &str, profile: &UserProfileData) -> AppResult<()> {
        self.set_json(&StoreKey::UserProfile(user_id.to_string()), profile)
            .await?;
        tracing::debug!(user_id = %user_id, "User profile stored");
        Ok(())
    }

    async fn save_recommendations(
        &self,
        user_id: &str,
        document: &RecommendationDocument,
    ) -> AppResult<()> {
        self.set_json(&StoreKey::Recommendations(user_id.to_string()), document)
            .await?;
        tracing::debug!(
            user_id = %user_id,
            courses = document.courses.len(),
            "Recommendations stored"
        );
        Ok(())
    }

    async fn fetch_recommendations(
        &self,
        user_id: &str,
    ) -> AppResult<Option<RecommendationDocument>> {
        self.get_json(&StoreKey::Recommendations(user_id.to_string()))
            .await
    }
}
