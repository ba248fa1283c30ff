use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const OTHER: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub icon: &'static str,
}

pub const QUESTIONS: [OnboardingQuestion; 13] = [
    OnboardingQuestion {
        id: "age",
        prompt: "What is your age group?",
        options: &["Under 10", "10-15", "16-20", "21+"],
        icon: "🎓",
    },
    OnboardingQuestion {
        id: "gender",
        prompt: "What is your gender?",
        options: &["Male", "Female", "Other"],
        icon: "🧑",
    },
    OnboardingQuestion {
        id: "country",
        prompt: "Which country are you from?",
        options: &["United States", "India", "United Kingdom", "Other"],
        icon: "🌍",
    },
    OnboardingQuestion {
        id: "social_interaction_style",
        prompt: "What is your social interaction style?",
        options: &["Introvert", "Extrovert", "Ambivert"],
        icon: "🎤",
    },
    OnboardingQuestion {
        id: "decision_making_approach",
        prompt: "How do you make decisions?",
        options: &["Thinker", "Feeler"],
        icon: "🧠",
    },
    OnboardingQuestion {
        id: "current_level_of_education",
        prompt: "What is your current level of education?",
        options: &["Primary School", "High School", "Undergraduate", "Other"],
        icon: "📚",
    },
    OnboardingQuestion {
        id: "last_grade",
        prompt: "What was your last grade?",
        options: &["A+", "A", "B", "Other"],
        icon: "🏅",
    },
    OnboardingQuestion {
        id: "favorite_subject",
        prompt: "What is your favorite subject?",
        options: &["Mathematics", "Science", "History", "Other"],
        icon: "🔬",
    },
    OnboardingQuestion {
        id: "interested_career_paths",
        prompt: "What career path interests you the most?",
        options: &["Engineering", "Medicine", "Law", "Other"],
        icon: "⚙",
    },
    OnboardingQuestion {
        id: "free_time_activities",
        prompt: "What do you like to do in your free time?",
        options: &["Sports", "Reading", "Gaming", "Other"],
        icon: "🎮",
    },
    OnboardingQuestion {
        id: "motivation_to_study",
        prompt: "What motivates you to study?",
        options: &["grades", "knowledge", "personal growth", "Other"],
        icon: "🏆",
    },
    OnboardingQuestion {
        id: "short_term_academic_goals",
        prompt: "What is your short-term academic goal?",
        options: &["Improve Grades", "Learn a Skill", "Pass Exams", "Other"],
        icon: "📊",
    },
    OnboardingQuestion {
        id: "long_term_academic_goals",
        prompt: "What is your long-term academic goal?",
        options: &["Graduate College", "Build Career", "Start a Business", "Other"],
        icon: "🏁",
    },
];

/// Secondary choices revealed after picking "Other". Empty for questions
/// without a list.
pub fn additional_options(question_id: &str) -> &'static [&'static str] {
    match question_id {
        "country" => &[
            "Canada",
            "United Kingdom",
            "Australia",
            "Germany",
            "France",
            "Italy",
            "Spain",
            "Brazil",
            "Mexico",
            "Japan",
            "China",
            "India",
            "Pakistan",
            "Russia",
            "South Africa",
            "Nigeria",
            "Egypt",
            "Turkey",
            "Saudi Arabia",
            "Argentina",
            "South Korea",
            "New Zealand",
            "Sweden",
            "Norway",
            "Denmark",
            "Netherlands",
            "Belgium",
            "Switzerland",
            "United Arab Emirates",
            "Malaysia",
            "Singapore",
            "Indonesia",
            "Philippines",
            "Thailand",
        ],
        "current_level_of_education" => &[
            "Kindergarten",
            "Primary School",
            "Middle School",
            "High School",
            "Undergraduate",
            "Postgraduate",
            "Doctorate",
            "Other",
        ],
        "last_grade" => &[
            "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F", "I", "P",
            "Other",
        ],
        "favorite_subject" => &[
            "English",
            "Geography",
            "Art",
            "Music",
            "Computer Science",
            "Physical Education",
            "Language",
        ],
        "interested_career_paths" => &[
            "Business",
            "Technology",
            "Science",
            "Education",
            "Finance",
            "Hospitality",
            "Healthcare",
            "Environmental Science",
            "Media and Communications",
            "Psychology",
            "Social Work",
            "Entrepreneurship",
            "Sports",
            "Government and Politics",
            "Other",
        ],
        "motivation_to_study" => &["curiosity", "peer competition"],
        _ => &[],
    }
}

/// Answers and cursor of the onboarding questionnaire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingState {
    current: usize,
    answers: HashMap<&'static str, String>,
    show_additional: bool,
}

impl OnboardingState {
    pub fn question(&self) -> &'static OnboardingQuestion {
        &QUESTIONS[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == QUESTIONS.len()
    }

    /// Percentage of the questionnaire reached, counting the current question.
    pub fn progress(&self) -> u32 {
        ((self.current + 1) * 100 / QUESTIONS.len()) as u32
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answer(self.question().id)
    }

    pub fn is_answered(&self) -> bool {
        self.current_answer().is_some_and(|a| !a.is_empty())
    }

    pub fn shows_additional(&self) -> bool {
        self.show_additional
    }

    /// Secondary options currently on screen.
    pub fn visible_additional(&self) -> &'static [&'static str] {
        if self.show_additional {
            additional_options(self.question().id)
        } else {
            &[]
        }
    }

    pub fn select(&mut self, option: &str) {
        let id = self.question().id;
        self.answers.insert(id, option.to_string());
        self.show_additional = option == OTHER;
    }

    pub fn select_additional(&mut self, option: &str) {
        let id = self.question().id;
        self.answers.insert(id, option.to_string());
        self.show_additional = false;
    }

    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.show_additional = false;
        }
    }

    /// Moves forward only once the current question has an answer.
    pub fn next(&mut self) -> bool {
        if self.is_last() || !self.is_answered() {
            return false;
        }
        self.current += 1;
        self.show_additional = false;
        true
    }

    pub fn to_request(&self) -> Result<ProfileRequest, ProfileError> {
        ProfileRequest::from_answers(|id| self.answer(id))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please answer \"{0}\" before submitting.")]
    MissingAnswer(&'static str),
}

/// Body of `student/create_profile/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub age: u8,
    pub gender: String,
    pub country: String,
    pub social_interaction_style: String,
    pub decision_making_approach: String,
    pub current_level_of_education: String,
    pub last_grade: String,
    pub favorite_subject: String,
    pub interested_career_paths: String,
    pub free_time_activities: String,
    pub motivation_to_study: String,
    pub short_term_academic_goals: String,
    pub long_term_academic_goals: String,
}

/// Lower bound of the age bucket the backend expects.
pub fn age_bucket(answer: &str) -> u8 {
    match answer {
        "Under 10" => 0,
        "10-15" => 10,
        "16-20" => 16,
        _ => 21,
    }
}

impl ProfileRequest {
    fn from_answers<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ProfileError> {
        let get = |id: &str| -> Result<String, ProfileError> {
            match lookup(id) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => {
                    let prompt = QUESTIONS
                        .iter()
                        .find(|q| q.id == id)
                        .map_or("", |q| q.prompt);
                    Err(ProfileError::MissingAnswer(prompt))
                }
            }
        };

        Ok(Self {
            age: age_bucket(&get("age")?),
            gender: get("gender")?.to_lowercase(),
            country: get("country")?,
            social_interaction_style: get("social_interaction_style")?.to_lowercase(),
            decision_making_approach: get("decision_making_approach")?.to_lowercase(),
            current_level_of_education: get("current_level_of_education")?,
            last_grade: get("last_grade")?,
            favorite_subject: get("favorite_subject")?,
            interested_career_paths: get("interested_career_paths")?,
            free_time_activities: get("free_time_activities")?,
            motivation_to_study: get("motivation_to_study")?.to_lowercase(),
            short_term_academic_goals: get("short_term_academic_goals")?,
            long_term_academic_goals: get("long_term_academic_goals")?,
        })
    }
}

/// Profile as returned by `student/get_student_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
    pub social_interaction_style: String,
    pub decision_making_approach: String,
    pub current_level_of_education: String,
    pub last_grade: String,
    pub favorite_subject: String,
    pub interested_career_paths: String,
    pub free_time_activities: String,
    pub motivation_to_study: String,
    pub short_term_academic_goals: String,
    pub long_term_academic_goals: String,
    pub profile_summary: String,
    pub created_at: String,
    pub updated_at: String,
}

impl StudentProfile {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Date part of `created_at`, or "N/A".
    pub fn member_since(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .or_else(|_| {
                chrono::NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|d| d.format("%Y-%m-%d").to_string())
            })
            .unwrap_or_else(|_| "N/A".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(state: &mut OnboardingState) {
        for _ in 0..QUESTIONS.len() {
            let first = state.question().options[0];
            state.select(first);
            state.next();
        }
    }

    #[test]
    fn other_reveals_exactly_the_secondary_list() {
        let mut state = OnboardingState::default();
        state.select("16-20");
        assert!(state.next());
        assert!(!state.next());
        state.select("Male");
        state.next();

        assert_eq!(state.question().id, "country");
        state.select(OTHER);
        assert_eq!(state.visible_additional(), additional_options("country"));
        state.select("India");
        assert!(state.visible_additional().is_empty());

        state.select(OTHER);
        state.select_additional("Japan");
        assert_eq!(state.answer("country"), Some("Japan"));
        assert!(!state.shows_additional());
    }

    #[test]
    fn other_without_secondary_list_stays_as_answer() {
        let mut state = OnboardingState::default();
        state.select("21+");
        state.next();
        state.select(OTHER);
        assert!(state.shows_additional());
        assert!(state.visible_additional().is_empty());
        assert!(state.next());
        assert_eq!(state.answer("gender"), Some("Other"));
    }

    #[test]
    fn next_requires_an_answer_and_previous_stops_at_start() {
        let mut state = OnboardingState::default();
        assert!(!state.next());
        state.previous();
        assert!(state.is_first());
        state.select("10-15");
        assert!(state.next());
        state.previous();
        assert_eq!(state.current_answer(), Some("10-15"));
    }

    #[test]
    fn request_formats_answers() {
        let mut state = OnboardingState::default();
        answer_all(&mut state);
        assert!(state.is_last());

        let request = state.to_request().unwrap();
        assert_eq!(request.age, 0);
        assert_eq!(request.gender, "male");
        assert_eq!(request.social_interaction_style, "introvert");
        assert_eq!(request.decision_making_approach, "thinker");
        assert_eq!(request.motivation_to_study, "grades");
        assert_eq!(request.country, "United States");
    }

    #[test]
    fn missing_answers_are_reported() {
        let mut state = OnboardingState::default();
        state.select("21+");
        assert_eq!(
            state.to_request(),
            Err(ProfileError::MissingAnswer("What is your gender?"))
        );
    }

    #[test]
    fn age_buckets() {
        assert_eq!(age_bucket("Under 10"), 0);
        assert_eq!(age_bucket("10-15"), 10);
        assert_eq!(age_bucket("16-20"), 16);
        assert_eq!(age_bucket("21+"), 21);
    }

    #[test]
    fn profile_tolerates_partial_payload() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"name":"ada","created_at":"2024-03-01T10:00:00Z"}"#).unwrap();
        assert_eq!(profile.initial(), "A");
        assert_eq!(profile.member_since(), "2024-03-01");
        assert_eq!(StudentProfile::default().member_since(), "N/A");
    }
}
