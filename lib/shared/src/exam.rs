use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Question formats the backend can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    Short,
    Essay,
    CodingProblem,
    CaseStudy,
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::Mcq,
        QuestionType::Short,
        QuestionType::Essay,
        QuestionType::CodingProblem,
        QuestionType::CaseStudy,
        QuestionType::TrueFalse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQs",
            QuestionType::Short => "Short Questions",
            QuestionType::Essay => "Long Questions",
            QuestionType::CodingProblem => "Coding Problems",
            QuestionType::CaseStudy => "Case Studies",
            QuestionType::TrueFalse => "True/False",
        }
    }

    /// Name the backend uses in `questions_type`.
    pub fn api_name(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::Short => "Short",
            QuestionType::Essay => "Essay",
            QuestionType::CodingProblem => "CodingProblem",
            QuestionType::CaseStudy => "CaseStudy",
            QuestionType::TrueFalse => "TrueFalse",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.api_name().eq_ignore_ascii_case(name))
    }

    /// Path segment of the attempt page, e.g. `/exam/codingproblem`.
    pub fn route_segment(&self) -> String {
        self.api_name().to_lowercase()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "✔",
            QuestionType::Short => "?",
            QuestionType::Essay => "☰",
            QuestionType::CodingProblem => "</>",
            QuestionType::CaseStudy => "📊",
            QuestionType::TrueFalse => "✓/✗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// The picker exposes levels 1, 3 and 5. Anything else falls back to medium.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            5 => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

pub const MAX_QUESTIONS: u32 = 100;
pub const MAX_DURATION_MINUTES: u32 = 180;
pub const UNTIMED_DURATION_MINUTES: u32 = 60;

/// Values collected by the exam type page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamForm {
    pub exam_type: QuestionType,
    pub number_of_questions: u32,
    pub difficulty: Difficulty,
    pub is_timed: bool,
    pub duration: u32,
    pub marks_per_question: u32,
}

impl ExamForm {
    pub fn new(exam_type: QuestionType) -> Self {
        Self {
            exam_type,
            number_of_questions: 10,
            difficulty: Difficulty::Medium,
            is_timed: false,
            duration: 60,
            marks_per_question: 5,
        }
    }

    pub fn total_marks(&self) -> u32 {
        self.number_of_questions
            .saturating_mul(self.marks_per_question)
    }

    pub fn into_parameters(self, selected_content_ids: Vec<String>) -> ExamParameters {
        let number_of_questions = self.number_of_questions.clamp(1, MAX_QUESTIONS);
        let marks_per_question = self.marks_per_question.max(1);
        let duration = if self.is_timed {
            self.duration.clamp(1, MAX_DURATION_MINUTES)
        } else {
            UNTIMED_DURATION_MINUTES
        };

        ExamParameters {
            selected_content_ids,
            exam_type: self.exam_type,
            number_of_questions,
            difficulty: self.difficulty,
            is_timed: self.is_timed,
            duration,
            marks_per_question,
            total_marks: number_of_questions.saturating_mul(marks_per_question),
            language: "english".to_string(),
        }
    }
}

/// Stashed between the exam type page and the generation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamParameters {
    pub selected_content_ids: Vec<String>,
    pub exam_type: QuestionType,
    pub number_of_questions: u32,
    pub difficulty: Difficulty,
    pub is_timed: bool,
    pub duration: u32,
    pub marks_per_question: u32,
    pub total_marks: u32,
    #[serde(default)]
    pub language: String,
}

impl ExamParameters {
    pub fn time_limit_label(&self) -> String {
        if self.is_timed {
            format!("{} minutes", self.duration)
        } else {
            "No time limit".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExamRequest {
    pub selected_content_ids: Vec<String>,
    pub title: String,
    pub questions_type: QuestionType,
    pub difficulty: Difficulty,
    pub num_questions: u32,
    pub marks_per_question: u32,
    pub time_limit: u32,
    pub language: String,
}

impl CreateExamRequest {
    pub fn new(params: &ExamParameters, selected_content_ids: Vec<String>) -> Self {
        let language = if params.language.is_empty() {
            "en".to_string()
        } else {
            params.language.clone()
        };

        Self {
            selected_content_ids,
            title: "Generated Exam".to_string(),
            questions_type: params.exam_type,
            difficulty: params.difficulty,
            num_questions: params.number_of_questions,
            marks_per_question: params.marks_per_question,
            time_limit: if params.is_timed { params.duration } else { 0 },
            language,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedExam {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamDetails {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions_type: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub num_questions: u32,
    #[serde(default)]
    pub marks_per_question: u32,
    #[serde(default)]
    pub total_marks: u32,
    /// Minutes. Null or zero means untimed.
    #[serde(default)]
    pub time_limit: Option<i64>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExamDetails {
    pub fn question_type(&self) -> Option<QuestionType> {
        QuestionType::from_api_name(&self.questions_type)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Generated Exam"
        } else {
            &self.title
        }
    }

    pub fn time_limit_label(&self) -> String {
        match self.time_limit {
            Some(minutes) if minutes > 0 => format!("{minutes} minutes"),
            _ => "No time limit".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub statement: String,
    #[serde(default)]
    pub case_study: Option<String>,
    #[serde(default)]
    pub question_data: Option<Map<String, Value>>,
}

impl Question {
    /// `(key, label)` pairs for every `option*` entry, ordered by key.
    pub fn options(&self) -> Vec<(String, String)> {
        let Some(data) = &self.question_data else {
            return vec![];
        };
        let mut options: Vec<(String, String)> = data
            .iter()
            .filter(|(key, _)| key.starts_with("option"))
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key.clone(), s.clone())),
                Value::Number(n) => Some((key.clone(), n.to_string())),
                Value::Bool(b) => Some((key.clone(), b.to_string())),
                _ => None,
            })
            .collect();
        options.sort_by_key(|(key, _)| {
            key.trim_start_matches("option")
                .parse::<u32>()
                .unwrap_or(u32::MAX)
        });
        options
    }

    pub fn has_options(&self) -> bool {
        !self.options().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartAttemptResponse {
    #[serde(default)]
    pub attempt: Option<AttemptRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_type_round_trips_through_route_segment() {
        assert_eq!(QuestionType::CaseStudy.route_segment(), "casestudy");
        assert_eq!(
            QuestionType::from_api_name("codingproblem"),
            Some(QuestionType::CodingProblem)
        );
        assert_eq!(serde_json::to_value(QuestionType::Mcq).unwrap(), json!("MCQ"));
    }

    #[test]
    fn difficulty_levels_map_like_the_picker() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(3), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(5), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(4), Difficulty::Medium);
    }

    #[test]
    fn untimed_form_stores_default_duration_and_zero_time_limit() {
        let mut form = ExamForm::new(QuestionType::Mcq);
        form.duration = 25;
        let params = form.into_parameters(vec!["c1".into()]);
        assert_eq!(params.duration, UNTIMED_DURATION_MINUTES);
        assert_eq!(params.total_marks, 50);

        let request = CreateExamRequest::new(&params, params.selected_content_ids.clone());
        assert_eq!(request.time_limit, 0);
        assert_eq!(request.language, "english");
        assert_eq!(request.title, "Generated Exam");
    }

    #[test]
    fn form_values_are_clamped() {
        let mut form = ExamForm::new(QuestionType::Essay);
        form.number_of_questions = 500;
        form.marks_per_question = 0;
        form.is_timed = true;
        form.duration = 0;
        let params = form.into_parameters(vec![]);
        assert_eq!(params.number_of_questions, MAX_QUESTIONS);
        assert_eq!(params.marks_per_question, 1);
        assert_eq!(params.duration, 1);
        assert_eq!(params.total_marks, 100);
    }

    #[test]
    fn parameters_use_camel_case_keys() {
        let params = ExamForm::new(QuestionType::TrueFalse).into_parameters(vec!["a".into()]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["examType"], json!("TrueFalse"));
        assert_eq!(value["numberOfQuestions"], json!(10));
        assert_eq!(value["selectedContentIds"], json!(["a"]));
    }

    #[test]
    fn options_skip_non_option_keys_and_nulls() {
        let question: Question = serde_json::from_value(json!({
            "id": "q1",
            "statement": "Pick one",
            "question_data": {
                "option2": "Beta",
                "option1": "Alpha",
                "option3": null,
                "correct": "option1",
                "option10": "Kappa"
            }
        }))
        .unwrap();
        let keys: Vec<String> = question.options().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["option1", "option2", "option10"]);
    }

    #[test]
    fn exam_details_tolerate_missing_fields() {
        let exam: ExamDetails = serde_json::from_value(json!({
            "id": "e1",
            "time_limit": null,
            "questions": [{ "id": "q1", "statement": "Explain ownership" }]
        }))
        .unwrap();
        assert_eq!(exam.display_title(), "Generated Exam");
        assert_eq!(exam.time_limit_label(), "No time limit");
        assert!(!exam.questions[0].has_options());
    }
}
