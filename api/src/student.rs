use shared::profile::{ProfileRequest, StudentProfile};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

pub const PROFILE_NOT_FOUND: &str = "Student profile not found.";

impl ApiClient {
    /// Profile of the logged-in student. A missing profile is reported as
    /// [`ApiError::ProfileNotFound`].
    pub async fn student_profile(&self) -> Result<StudentProfile> {
        match self.get("student/get_student_profile").await {
            Err(e) if e.server_message() == Some(PROFILE_NOT_FOUND) => {
                Err(ApiError::ProfileNotFound)
            }
            other => other,
        }
    }

    pub async fn create_profile(&self, profile: &ProfileRequest) -> Result<serde_json::Value> {
        self.post_json("student/create_profile/", profile).await
    }
}
