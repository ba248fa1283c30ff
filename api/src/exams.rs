use shared::exam::{
    Answer, CreateExamRequest, CreatedExam, ExamDetails, StartAttemptResponse,
    SubmitAnswersRequest,
};
use tracing::info;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
    pub async fn create_exam(&self, request: &CreateExamRequest) -> Result<CreatedExam> {
        let exam: CreatedExam = self.post_json("exams/create_exam/", request).await?;
        info!("Created exam {}", exam.id);
        Ok(exam)
    }

    pub async fn full_exam(&self, exam_id: &str) -> Result<ExamDetails> {
        self.get(&format!("exams/get_full_exam/{exam_id}")).await
    }

    /// Starts an attempt and returns its id, if the backend sent one.
    pub async fn start_attempt(&self, exam_id: &str) -> Result<Option<String>> {
        let response: StartAttemptResponse = self
            .post(&format!("exams/start_exam_attempt/{exam_id}/"))
            .await?;
        Ok(response.attempt.map(|a| a.id))
    }

    /// HTTP 409 becomes [`ApiError::AlreadySubmitted`].
    pub async fn submit_answers(&self, exam_id: &str, answers: Vec<Answer>) -> Result<()> {
        let body = SubmitAnswersRequest { answers };
        match self
            .post_json::<serde_json::Value, _>(&format!("exams/submit_all_answers/{exam_id}/"), &body)
            .await
        {
            Ok(_) => Ok(()),
            Err(ApiError::Api { status: 409, .. }) => Err(ApiError::AlreadySubmitted),
            Err(e) => Err(e),
        }
    }

    pub async fn complete_attempt(&self, exam_id: &str, attempt_id: &str) -> Result<()> {
        self.post::<serde_json::Value>(&format!(
            "exams/complete_exam_attempt/{exam_id}/{attempt_id}"
        ))
        .await
        .map(|_| ())
    }
}
