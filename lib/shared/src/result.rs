use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Renders a mark or percentage without a trailing `.0`.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallResult {
    pub result_id: String,
    pub exam_title: String,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub grade: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionResult {
    pub question_id: String,
    pub statement: String,
    pub response: Option<String>,
    pub question_type: String,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub feedback: String,
}

impl QuestionResult {
    pub fn response_label(&self) -> &str {
        match self.response.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => "Unattempted",
        }
    }

    pub fn is_full_marks(&self) -> bool {
        self.obtained_marks >= self.total_marks
    }
}

/// Aggregate progress as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProgress {
    pub total_exams_taken: u32,
    pub exams_passed: u32,
    pub exams_failed: u32,
    pub total_points: f64,
    pub overall_percentage: f64,
    pub overall_grade: String,
}

impl StudentProgress {
    /// Share of passed exams in percent, one decimal.
    pub fn pass_rate(&self) -> f64 {
        if self.total_exams_taken == 0 {
            return 0.0;
        }
        let rate = self.exams_passed as f64 * 100.0 / self.total_exams_taken as f64;
        (rate * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(default)]
    pub overall_result: Option<OverallResult>,
    #[serde(default)]
    pub question_results: Vec<QuestionResult>,
    #[serde(default)]
    pub student_progress: Option<StudentProgress>,
}

pub const INCOMPLETE_RESULT: &str = "Result data is incomplete or not available yet. Please retry or contact support if this persists.";

impl ResultData {
    pub fn is_complete(&self) -> bool {
        self.overall_result.is_some() && !self.question_results.is_empty()
    }

    /// Obtained and remaining marks for the pie chart, never negative.
    pub fn pie_split(&self) -> (f64, f64) {
        match &self.overall_result {
            Some(overall) => {
                let obtained = overall.obtained_marks.max(0.0);
                (obtained, (overall.total_marks - obtained).max(0.0))
            }
            None => (0.0, 0.0),
        }
    }
}

/// Result stashed in storage together with the attempt it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResult {
    pub attempt_id: String,
    pub data: ResultData,
}

impl CachedResult {
    /// The cached data, if it is complete and belongs to `attempt_id`.
    pub fn for_attempt(self, attempt_id: &str) -> Option<ResultData> {
        (self.attempt_id == attempt_id && self.data.is_complete()).then_some(self.data)
    }
}

/// Latest result card on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastExamResult {
    pub exam_title: String,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub grade: String,
    pub percentage: f64,
}

/// One row of `results/get_all_student_results/`. Field names vary between
/// backend versions, so most are optional with aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamHistoryEntry {
    pub id: Option<String>,
    pub exam_id: Option<String>,
    pub attempt_id: Option<String>,
    pub exam_title: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub exam_type: Option<String>,
    pub created_at: Option<String>,
    pub status: Option<String>,
    pub result_status: Option<String>,
    pub percentage: f64,
    pub grade: Option<String>,
    pub total_marks: f64,
    pub obtained_marks: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamStatus {
    Completed,
    InProgress,
    Failed,
    Unknown,
}

impl ExamHistoryEntry {
    pub fn display_title(&self) -> &str {
        self.exam_title
            .as_deref()
            .or(self.title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled exam")
    }

    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.exam_id.clone())
            .unwrap_or_else(|| self.display_title().to_string())
    }

    pub fn kind_label(&self) -> &str {
        non_empty(&self.kind)
            .or(non_empty(&self.exam_type))
            .unwrap_or("-")
    }

    fn raw_status(&self) -> Option<&str> {
        non_empty(&self.status).or(non_empty(&self.result_status))
    }

    pub fn status_label(&self) -> &str {
        self.raw_status().unwrap_or("-")
    }

    pub fn status(&self) -> ExamStatus {
        match self.raw_status() {
            Some("Completed") => ExamStatus::Completed,
            Some("In Progress") => ExamStatus::InProgress,
            Some("Failed") => ExamStatus::Failed,
            _ => ExamStatus::Unknown,
        }
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }

    pub fn date_label(&self) -> String {
        self.created()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.display_title().to_lowercase().contains(&query)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accepts RFC 3339 as well as the naive ISO timestamps some endpoints return.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Reads a result list, treating anything that is not an array as empty.
pub fn history_from_value(value: serde_json::Value) -> Vec<ExamHistoryEntry> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

pub fn filter_history<'a>(entries: &'a [ExamHistoryEntry], query: &str) -> Vec<&'a ExamHistoryEntry> {
    entries.iter().filter(|e| e.matches(query)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub percentage: f64,
    pub grade: String,
}

/// Ten most recent exams, oldest first, for the dashboard chart.
pub fn last_ten_exams(entries: &[ExamHistoryEntry]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&ExamHistoryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created().cmp(&a.created()));
    sorted
        .into_iter()
        .take(10)
        .rev()
        .map(|e| ChartPoint {
            name: e.display_title().to_string(),
            percentage: e.percentage,
            grade: e.grade.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(title: &str, created_at: &str, percentage: f64) -> ExamHistoryEntry {
        ExamHistoryEntry {
            exam_title: Some(title.to_string()),
            created_at: Some(created_at.to_string()),
            percentage,
            ..Default::default()
        }
    }

    #[test]
    fn result_without_questions_is_incomplete() {
        let data: ResultData = serde_json::from_value(json!({
            "overall_result": { "result_id": "r1", "total_marks": 10, "obtained_marks": 7 },
            "question_results": []
        }))
        .unwrap();
        assert!(!data.is_complete());

        let data: ResultData = serde_json::from_value(json!({
            "question_results": [{ "question_id": "q1", "statement": "s" }]
        }))
        .unwrap();
        assert!(!data.is_complete());
    }

    #[test]
    fn pie_split_never_goes_negative() {
        let data = ResultData {
            overall_result: Some(OverallResult {
                total_marks: 10.0,
                obtained_marks: 12.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(data.pie_split(), (12.0, 0.0));
    }

    #[test]
    fn cached_result_only_applies_to_its_attempt() {
        let data = ResultData {
            overall_result: Some(OverallResult::default()),
            question_results: vec![QuestionResult::default()],
            student_progress: None,
        };
        let cached = CachedResult {
            attempt_id: "a1".into(),
            data: data.clone(),
        };
        assert_eq!(cached.clone().for_attempt("a2"), None);
        assert_eq!(cached.for_attempt("a1"), Some(data));
    }

    #[test]
    fn unattempted_label_for_blank_responses() {
        let mut q = QuestionResult::default();
        assert_eq!(q.response_label(), "Unattempted");
        q.response = Some("  ".into());
        assert_eq!(q.response_label(), "Unattempted");
        q.response = Some("option2".into());
        assert_eq!(q.response_label(), "option2");
    }

    #[test]
    fn last_ten_are_newest_ten_oldest_first() {
        let entries: Vec<ExamHistoryEntry> = (1..=12)
            .map(|day| {
                entry(
                    &format!("exam {day}"),
                    &format!("2024-01-{day:02}T08:00:00Z"),
                    day as f64,
                )
            })
            .collect();
        let points = last_ten_exams(&entries);
        assert_eq!(points.len(), 10);
        assert_eq!(points.first().unwrap().name, "exam 3");
        assert_eq!(points.last().unwrap().name, "exam 12");
    }

    #[test]
    fn history_accepts_alias_fields_and_non_arrays() {
        let entries = history_from_value(json!([
            { "id": "r1", "title": "Rust basics", "exam_type": "MCQ", "result_status": "Completed",
              "created_at": "2024-05-02T10:11:12.123456" }
        ]));
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.display_title(), "Rust basics");
        assert_eq!(e.kind_label(), "MCQ");
        assert_eq!(e.status(), ExamStatus::Completed);
        assert_eq!(e.date_label(), "2024-05-02");

        assert!(history_from_value(json!({ "detail": "nope" })).is_empty());
    }

    #[test]
    fn history_keeps_rows_carrying_both_key_spellings() {
        let entries = history_from_value(json!([
            { "id": "r1", "status": "Completed", "result_status": "Completed" },
            { "id": "r2", "type": "MCQ", "exam_type": "MCQ" },
            { "id": "r3", "status": "", "result_status": "Failed", "type": "", "exam_type": "CaseStudy" },
        ]));
        let ids: Vec<_> = entries.iter().map(|e| e.key()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
        assert_eq!(entries[0].status(), ExamStatus::Completed);
        assert_eq!(entries[1].kind_label(), "MCQ");
        assert_eq!(entries[2].status(), ExamStatus::Failed);
        assert_eq!(entries[2].status_label(), "Failed");
        assert_eq!(entries[2].kind_label(), "CaseStudy");
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let entries = vec![
            entry("Linear Algebra", "2024-01-01T00:00:00Z", 50.0),
            entry("Organic Chemistry", "2024-01-02T00:00:00Z", 70.0),
        ];
        assert_eq!(filter_history(&entries, "ALGEBRA").len(), 1);
        assert_eq!(filter_history(&entries, "  ").len(), 2);
    }

    #[test]
    fn pass_rate_and_score_formatting() {
        let progress = StudentProgress {
            total_exams_taken: 3,
            exams_passed: 2,
            ..Default::default()
        };
        assert_eq!(progress.pass_rate(), 66.7);
        assert_eq!(StudentProgress::default().pass_rate(), 0.0);
        assert_eq!(format_score(40.0), "40");
        assert_eq!(format_score(66.5), "66.5");
    }
}
