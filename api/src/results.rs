use shared::result::{history_from_value, ExamHistoryEntry, LastExamResult, ResultData, StudentProgress};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn generate_result(&self, attempt_id: &str) -> Result<ResultData> {
        self.post(&format!("results/generate_and_update_result/{attempt_id}"))
            .await
    }

    pub async fn latest_progress(&self) -> Result<StudentProgress> {
        self.get("student_progress/get_latest_progress").await
    }

    pub async fn last_exam_result(&self) -> Result<LastExamResult> {
        self.get("results/get_last_exam_result/").await
    }

    /// Every result of the student. A body that is not an array reads as empty.
    pub async fn all_results(&self) -> Result<Vec<ExamHistoryEntry>> {
        let value: serde_json::Value = self.get("results/get_all_student_results/").await?;
        Ok(history_from_value(value))
    }
}
