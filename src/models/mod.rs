mod course;
mod recommendation;
mod user;

pub use course::{columns, CourseRecord};
pub use recommendation::RecommendationDocument;
pub use user::UserProfileData;
