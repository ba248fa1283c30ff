//! Typed access to the key/value hand-off that carries state between pages.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::card::PersonalDetails;
use crate::content;
use crate::exam::{ExamParameters, QuestionType};
use crate::result::{CachedResult, ResultData};

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const SELECTED_CONTENT_IDS: &str = "selected_content_ids";
pub const SELECTED_EXAM_TYPE: &str = "selectedExamType";
pub const EXAM_PARAMETERS: &str = "examParameters";
pub const EXAM_ID: &str = "exam-id";
pub const ATTEMPT_ID: &str = "attemptID";
pub const RESULT: &str = "result";

pub const DETAIL_NAME: &str = "name";
pub const DETAIL_FATHER_NAME: &str = "fatherName";
pub const DETAIL_AGE: &str = "age";
pub const DETAIL_CLASS: &str = "className";
pub const DETAIL_EMAIL: &str = "email";
pub const DETAIL_NUMBER: &str = "number";

/// Minimal string store. Browser local storage in the app, a map in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// JSON-encoded values over any [`KeyValueStore`]. Values that fail to parse
/// read as absent.
#[derive(Debug, Clone, Copy)]
pub struct Handoff<S> {
    store: S,
}

impl<S: KeyValueStore> Handoff<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.store.set(key, &raw);
        }
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    /// Reads a string, accepting values written without JSON quoting.
    pub fn read_string(&self, key: &str) -> Option<String> {
        let raw = self.store.get(key)?;
        let value = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        (!value.is_empty()).then_some(value)
    }

    pub fn access_token(&self) -> Option<String> {
        self.read_string(ACCESS_TOKEN)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read_string(REFRESH_TOKEN)
    }

    pub fn store_tokens(&self, access: &str, refresh: Option<&str>) {
        self.write(ACCESS_TOKEN, access);
        if let Some(refresh) = refresh {
            self.write(REFRESH_TOKEN, refresh);
        }
    }

    pub fn clear_session(&self) {
        self.remove(ACCESS_TOKEN);
        self.remove(REFRESH_TOKEN);
    }

    /// Selected content ids. A bare id is wrapped; anything unreadable resets
    /// the key to an empty list.
    pub fn selected_content_ids(&self) -> Vec<String> {
        let Some(raw) = self.store.get(SELECTED_CONTENT_IDS) else {
            return Vec::new();
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Ok(serde_json::Value::String(id)) if !id.is_empty() => vec![id],
            _ => {
                self.write::<[String]>(SELECTED_CONTENT_IDS, &[]);
                Vec::new()
            }
        }
    }

    pub fn set_selected_content_ids(&self, ids: &[String]) {
        self.write(SELECTED_CONTENT_IDS, ids);
    }

    pub fn add_content_id(&self, id: &str) -> Vec<String> {
        let mut ids = self.selected_content_ids();
        if content::add_content_id(&mut ids, id) {
            self.set_selected_content_ids(&ids);
        }
        ids
    }

    pub fn remove_content_id(&self, id: &str) -> Vec<String> {
        let mut ids = self.selected_content_ids();
        if content::remove_content_id(&mut ids, id) {
            self.set_selected_content_ids(&ids);
        }
        ids
    }

    pub fn exam_type(&self) -> Option<QuestionType> {
        self.read(SELECTED_EXAM_TYPE)
    }

    pub fn exam_parameters(&self) -> Option<ExamParameters> {
        self.read(EXAM_PARAMETERS)
    }

    pub fn store_exam_setup(&self, params: &ExamParameters) {
        self.write(EXAM_PARAMETERS, params);
        self.write(SELECTED_EXAM_TYPE, &params.exam_type);
    }

    pub fn exam_id(&self) -> Option<String> {
        self.read_string(EXAM_ID)
    }

    pub fn set_exam_id(&self, id: &str) {
        self.write(EXAM_ID, id);
    }

    pub fn attempt_id(&self) -> Option<String> {
        self.read_string(ATTEMPT_ID)
    }

    pub fn set_attempt_id(&self, id: &str) {
        self.write(ATTEMPT_ID, id);
    }

    pub fn cached_result(&self, attempt_id: &str) -> Option<ResultData> {
        self.read::<CachedResult>(RESULT)?.for_attempt(attempt_id)
    }

    pub fn cache_result(&self, attempt_id: &str, data: &ResultData) {
        self.write(
            RESULT,
            &CachedResult {
                attempt_id: attempt_id.to_string(),
                data: data.clone(),
            },
        );
    }

    pub fn drop_cached_result(&self) {
        self.remove(RESULT);
    }

    /// Forgets the current attempt so a new exam can be generated.
    pub fn clear_attempt(&self) {
        self.remove(EXAM_ID);
        self.remove(ATTEMPT_ID);
        self.remove(RESULT);
    }

    pub fn personal_details(&self) -> PersonalDetails {
        let get = |key| self.read_string(key).unwrap_or_default();
        PersonalDetails {
            name: get(DETAIL_NAME),
            father_name: get(DETAIL_FATHER_NAME),
            age: get(DETAIL_AGE),
            class_name: get(DETAIL_CLASS),
            email: get(DETAIL_EMAIL),
            number: get(DETAIL_NUMBER),
        }
    }

    pub fn store_personal_details(&self, details: &PersonalDetails) {
        self.write(DETAIL_NAME, &details.name);
        self.write(DETAIL_FATHER_NAME, &details.father_name);
        self.write(DETAIL_AGE, &details.age);
        self.write(DETAIL_CLASS, &details.class_name);
        self.write(DETAIL_EMAIL, &details.email);
        self.write(DETAIL_NUMBER, &details.number);
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::ExamForm;
    use crate::result::{OverallResult, QuestionResult};

    fn complete_result() -> ResultData {
        ResultData {
            overall_result: Some(OverallResult::default()),
            question_results: vec![QuestionResult::default()],
            student_progress: None,
        }
    }

    #[test]
    fn content_ids_keep_order_and_skip_duplicates() {
        let store = MemoryStore::new();
        let handoff = Handoff::new(&store);
        handoff.add_content_id("a");
        handoff.add_content_id("b");
        handoff.add_content_id("a");
        assert_eq!(handoff.selected_content_ids(), vec!["a", "b"]);
        assert_eq!(store.raw(SELECTED_CONTENT_IDS).as_deref(), Some(r#"["a","b"]"#));

        assert_eq!(handoff.remove_content_id("a"), vec!["b"]);
    }

    #[test]
    fn malformed_content_ids_reset_to_empty_list() {
        let store = MemoryStore::new();
        store.set(SELECTED_CONTENT_IDS, "{not json");
        let handoff = Handoff::new(&store);
        assert!(handoff.selected_content_ids().is_empty());
        assert_eq!(store.raw(SELECTED_CONTENT_IDS).as_deref(), Some("[]"));
    }

    #[test]
    fn bare_content_id_is_wrapped() {
        let store = MemoryStore::new();
        store.set(SELECTED_CONTENT_IDS, r#""c42""#);
        assert_eq!(Handoff::new(&store).selected_content_ids(), vec!["c42"]);
    }

    #[test]
    fn strings_read_with_or_without_quotes() {
        let store = MemoryStore::new();
        store.set(EXAM_ID, "plain-id");
        store.set(ATTEMPT_ID, r#""quoted-id""#);
        let handoff = Handoff::new(&store);
        assert_eq!(handoff.exam_id().as_deref(), Some("plain-id"));
        assert_eq!(handoff.attempt_id().as_deref(), Some("quoted-id"));
    }

    #[test]
    fn clear_session_removes_both_tokens() {
        let store = MemoryStore::new();
        let handoff = Handoff::new(&store);
        handoff.store_tokens("access", Some("refresh"));
        assert_eq!(handoff.refresh_token().as_deref(), Some("refresh"));
        handoff.clear_session();
        assert_eq!(handoff.access_token(), None);
        assert_eq!(handoff.refresh_token(), None);
    }

    #[test]
    fn clear_attempt_keeps_selection_and_setup() {
        let store = MemoryStore::new();
        let handoff = Handoff::new(&store);
        let params = ExamForm::new(QuestionType::Short).into_parameters(vec!["c1".into()]);
        handoff.store_exam_setup(&params);
        handoff.add_content_id("c1");
        handoff.set_exam_id("e1");
        handoff.set_attempt_id("a1");
        handoff.cache_result("a1", &complete_result());

        handoff.clear_attempt();
        assert_eq!(handoff.exam_id(), None);
        assert_eq!(handoff.attempt_id(), None);
        assert_eq!(handoff.cached_result("a1"), None);
        assert_eq!(handoff.exam_type(), Some(QuestionType::Short));
        assert_eq!(handoff.exam_parameters(), Some(params));
        assert_eq!(handoff.selected_content_ids(), vec!["c1"]);
    }

    #[test]
    fn cached_result_is_scoped_to_attempt() {
        let store = MemoryStore::new();
        let handoff = Handoff::new(&store);
        handoff.cache_result("a1", &complete_result());
        assert!(handoff.cached_result("a1").is_some());
        assert!(handoff.cached_result("a2").is_none());
    }

    #[test]
    fn personal_details_round_trip_through_separate_keys() {
        let store = MemoryStore::new();
        let handoff = Handoff::new(&store);
        let details = PersonalDetails {
            name: "Ada".into(),
            class_name: "10-B".into(),
            ..Default::default()
        };
        handoff.store_personal_details(&details);
        assert_eq!(store.raw(DETAIL_CLASS).as_deref(), Some(r#""10-B""#));
        assert_eq!(handoff.personal_details(), details);
    }
}
