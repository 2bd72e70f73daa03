use std::collections::HashMap;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use tokio::sync::RwLock;

use course_recommender::{
    error::AppResult,
    models::{CourseRecord, RecommendationDocument, UserProfileData},
    recommender::CatalogIndex,
    routes::create_router,
    state::{AppState, ResultLimits},
    store::ProfileStore,
};

/// In-memory stand-in for the Redis-backed document store.
#[derive(Default)]
struct MemoryStore {
    users: RwLock<HashMap<String, UserProfileData>>,
    recommendations: RwLock<HashMap<String, RecommendationDocument>>,
}

#[async_trait::async_trait]
impl ProfileStore for MemoryStore {
    async fn fetch_user(&self, user_id: &str) -> AppResult<Option<UserProfileData>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn put_user(&self, user_id: &str, profile: &UserProfileData) -> AppResult<()> {
        self.users
            .write()
            .await
            .insert(user_id.to_string(), profile.clone());
        Ok(())
    }

    async fn save_recommendations(
        &self,
        user_id: &str,
        document: &RecommendationDocument,
    ) -> AppResult<()> {
        self.recommendations
            .write()
            .await
            .insert(user_id.to_string(), document.clone());
        Ok(())
    }

    async fn fetch_recommendations(
        &self,
        user_id: &str,
    ) -> AppResult<Option<RecommendationDocument>> {
        Ok(self.recommendations.read().await.get(user_id).cloned())
    }
}

fn course(title: &str, outcomes: &str, keywords: &str) -> CourseRecord {
    CourseRecord {
        title: title.to_string(),
        learning_outcomes: outcomes.to_string(),
        keywords: keywords.to_string(),
        extra: Default::default(),
    }
}

fn test_catalog() -> Vec<CourseRecord> {
    vec![
        course("Intro to Python", "variables loops", "python basics"),
        course("Advanced ML", "neural networks", "ml deep learning"),
        course("Databases 101", "sql queries joins", "sql databases"),
    ]
}

fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        index: Arc::new(CatalogIndex::build(test_catalog())),
        store: store.clone(),
        limits: ResultLimits {
            default_count: 5,
            max_count: 10,
        },
    };
    let server = TestServer::new(create_router(state)).unwrap();
    (server, store)
}

async fn seed_user(store: &MemoryStore, user_id: &str, goals: &str, interests: &str, skills: &str) {
    let profile = UserProfileData {
        career_goals: Some(goals.to_string()),
        interests: Some(interests.to_string()),
        skills: Some(skills.to_string()),
    };
    store.put_user(user_id, &profile).await.unwrap();
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommend_ranks_python_course_first() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "python programming", "", "basics").await;

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .await;
    response.assert_status_ok();

    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0]["Course Title"], "Intro to Python");

    // The same ordered list must have been persisted for the user.
    let saved = store.fetch_recommendations("u1").await.unwrap().unwrap();
    assert_eq!(saved.courses.len(), 3);
    assert_eq!(saved.courses[0].title, "Intro to Python");
}

#[tokio::test]
async fn test_recommend_respects_count() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "sql", "databases", "").await;

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .add_query_param("count", "1")
        .await;
    response.assert_status_ok();

    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["Course Title"], "Databases 101");
}

#[tokio::test]
async fn test_recommend_count_beyond_catalog_returns_everything() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "python", "", "").await;

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .add_query_param("count", "10")
        .await;
    response.assert_status_ok();

    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses.len(), 3);
}

#[tokio::test]
async fn test_recommend_missing_user_id_is_bad_request() {
    let (server, _) = create_test_server();

    let response = server.get("/api/v1/recommend").await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "user_id is required");
}

#[tokio::test]
async fn test_recommend_blank_user_id_is_bad_request() {
    let (server, _) = create_test_server();

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "  ")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_count_out_of_range_is_bad_request() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "python", "", "").await;

    for count in ["0", "11"] {
        let response = server
            .get("/api/v1/recommend")
            .add_query_param("user_id", "u1")
            .add_query_param("count", count)
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_recommend_unknown_user_is_not_found_and_writes_nothing() {
    let (server, store) = create_test_server();

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "ghost")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    // No ranking ran, so nothing may have reached the sink.
    assert!(store.recommendations.read().await.is_empty());
}

#[tokio::test]
async fn test_recommend_empty_profile_is_defined_not_an_error() {
    let (server, store) = create_test_server();
    store
        .put_user("blank", &UserProfileData::default())
        .await
        .unwrap();

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "blank")
        .await;
    response.assert_status_ok();

    // Zero similarity everywhere falls back to catalog order.
    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses[0]["Course Title"], "Intro to Python");
    assert_eq!(courses[1]["Course Title"], "Advanced ML");
    assert_eq!(courses[2]["Course Title"], "Databases 101");
}

#[tokio::test]
async fn test_saved_recommendations_round_trip() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "machine learning", "neural networks", "").await;

    let before = server.get("/api/v1/recommendations/u1").await;
    before.assert_status(axum::http::StatusCode::NOT_FOUND);

    server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .await
        .assert_status_ok();

    let after = server.get("/api/v1/recommendations/u1").await;
    after.assert_status_ok();
    let document: serde_json::Value = after.json();
    assert_eq!(document["courses"][0]["Course Title"], "Advanced ML");
    assert!(document["generated_at"].is_string());
}

#[tokio::test]
async fn test_repeat_queries_overwrite_saved_recommendations() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "python", "", "").await;

    server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .add_query_param("count", "3")
        .await
        .assert_status_ok();
    assert_eq!(
        store
            .fetch_recommendations("u1")
            .await
            .unwrap()
            .unwrap()
            .courses
            .len(),
        3
    );

    server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .add_query_param("count", "1")
        .await
        .assert_status_ok();
    assert_eq!(
        store
            .fetch_recommendations("u1")
            .await
            .unwrap()
            .unwrap()
            .courses
            .len(),
        1
    );
}

#[tokio::test]
async fn test_upsert_user_then_recommend() {
    let (server, _) = create_test_server();

    let response = server
        .put("/api/v1/users/u9")
        .json(&json!({
            "careerGoals": "data engineer",
            "skills": "sql queries"
        }))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u9")
        .add_query_param("count", "1")
        .await;
    response.assert_status_ok();

    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses[0]["Course Title"], "Databases 101");
}

#[tokio::test]
async fn test_list_courses_preserves_catalog_order() {
    let (server, _) = create_test_server();

    let response = server.get("/api/v1/courses").await;
    response.assert_status_ok();

    let courses: Vec<serde_json::Value> = response.json();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0]["Course Title"], "Intro to Python");
    assert_eq!(courses[1]["Course Title"], "Advanced ML");
    assert_eq!(courses[2]["Course Title"], "Databases 101");
}

#[tokio::test]
async fn test_identical_queries_return_identical_rankings() {
    let (server, store) = create_test_server();
    seed_user(&store, "u1", "python basics", "loops", "").await;

    let first: Vec<serde_json::Value> = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .await
        .json();
    let second: Vec<serde_json::Value> = server
        .get("/api/v1/recommend")
        .add_query_param("user_id", "u1")
        .await
        .json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let (server, _) = create_test_server();
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
