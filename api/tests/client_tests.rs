// tests/client_tests.rs

use std::collections::HashMap;

use api::{ApiClient, ApiError, Upload};
use axum::{
    extract::{Form, Multipart, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::content::ContentKind;
use shared::exam::Answer;

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn login(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let ok = form.get("username").map(String::as_str) == Some("ada@example.com")
        && form.get("password").map(String::as_str) == Some("secret");
    if ok {
        (
            StatusCode::OK,
            Json(json!({ "access_token": "good", "refresh_token": "r1", "token_type": "bearer" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect email or password" })),
        )
    }
}

async fn profile(headers: HeaderMap) -> impl IntoResponse {
    match bearer(&headers) {
        Some("good") => (
            StatusCode::OK,
            Json(json!({ "id": "s1", "name": "Ada", "country": "United Kingdom", "age": 21 })),
        ),
        Some("fresh") => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Student profile not found." })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Not authenticated" })),
        ),
    }
}

async fn submit(Path(exam_id): Path<String>, Json(body): Json<Value>) -> impl IntoResponse {
    if exam_id == "done" {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "detail": "Answers already submitted" })),
        );
    }
    let count = body["answers"].as_array().map_or(0, Vec::len);
    (StatusCode::OK, Json(json!({ "received": count })))
}

async fn upload_pdf(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = HashMap::new();
    let mut file_name = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            file_name = field.file_name().map(str::to_string);
        }
        let data = field.bytes().await.unwrap_or_default();
        fields.insert(name, String::from_utf8_lossy(&data).to_string());
    }

    let valid = bearer(&headers) == Some("good")
        && fields.get("access_token").map(String::as_str) == Some("good")
        && fields.get("file").map(String::as_str) == Some("%PDF-1.4 fake")
        && file_name.as_deref() == Some("notes.pdf");
    if !valid {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "bad upload" })),
        );
    }
    let title = fields.get("title").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({ "contents": { "id": format!("c-{title}") } })),
    )
}

async fn upload_topic(mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let text = field.text().await.unwrap_or_default();
        fields.insert(name, text);
    }
    Json(json!({ "contents": { "id": fields.get("topic").cloned().unwrap_or_default() }, "echo": fields }))
}

async fn create_exam() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn all_results() -> impl IntoResponse {
    Json(json!({ "detail": "No results yet" }))
}

async fn start_attempt(Path(exam_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "attempt": { "id": format!("att-{exam_id}") } }))
}

/// Spawns the mock backend on a random port and returns its base URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/student/get_student_profile", get(profile))
        .route("/exams/submit_all_answers/{exam_id}/", post(submit))
        .route("/exams/start_exam_attempt/{exam_id}/", post(start_attempt))
        .route("/exams/create_exam/", post(create_exam))
        .route("/content_upload/upload_pdf/", post(upload_pdf))
        .route("/content_upload/upload_topic/", post(upload_topic))
        .route("/results/get_all_student_results/", get(all_results));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

fn client(base: &str, token: Option<&str>) -> ApiClient {
    ApiClient::builder()
        .base_url(base)
        .token(token.map(str::to_string))
        .build()
        .unwrap()
}

#[tokio::test]
async fn login_sends_form_and_returns_tokens() {
    let base = spawn_backend().await;
    let response = client(&base, None)
        .login("ada@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(response.access_token, "good");
    assert_eq!(response.refresh_token.as_deref(), Some("r1"));
}

#[tokio::test]
async fn failed_login_surfaces_detail() {
    let base = spawn_backend().await;
    let err = client(&base, None)
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.user_message("Invalid login credentials."),
        "Incorrect email or password"
    );
}

#[tokio::test]
async fn profile_lookup_distinguishes_missing_profile() {
    let base = spawn_backend().await;

    let profile = client(&base, Some("good")).student_profile().await.unwrap();
    assert_eq!(profile.name, "Ada");

    let err = client(&base, Some("fresh"))
        .student_profile()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ProfileNotFound));

    let err = client(&base, Some("stale"))
        .student_profile()
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn missing_token_fails_before_sending() {
    let base = spawn_backend().await;
    let err = client(&base, None).student_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
}

#[tokio::test]
async fn conflict_on_submit_maps_to_already_submitted() {
    let base = spawn_backend().await;
    let api = client(&base, Some("good"));
    let answers = vec![Answer {
        question_id: "q1".into(),
        response: "option2".into(),
    }];

    api.submit_answers("e1", answers.clone()).await.unwrap();

    let err = api.submit_answers("done", answers).await.unwrap_err();
    assert!(matches!(err, ApiError::AlreadySubmitted));
    assert_eq!(err.to_string(), "You have already submitted this exam.");
}

#[tokio::test]
async fn non_json_error_body_uses_fallback() {
    let base = spawn_backend().await;
    let params = shared::exam::ExamForm::new(shared::exam::QuestionType::Mcq)
        .into_parameters(vec!["c1".into()]);
    let request = shared::exam::CreateExamRequest::new(&params, vec!["c1".into()]);

    let err = client(&base, Some("good"))
        .create_exam(&request)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.user_message("Failed to generate exam"),
        "Failed to generate exam"
    );
}

#[tokio::test]
async fn file_upload_is_multipart_with_title_and_token() {
    let base = spawn_backend().await;
    let upload = Upload::file(ContentKind::Pdf, "notes.pdf", b"%PDF-1.4 fake".to_vec());
    let response = client(&base, Some("good"))
        .upload_content(upload)
        .await
        .unwrap();
    assert_eq!(response.content_id(), Some("c-notes.pdf"));
}

#[tokio::test]
async fn topic_upload_sends_title_and_topic() {
    let base = spawn_backend().await;
    let upload = Upload::text(ContentKind::Topic, " Photosynthesis ");
    let response = client(&base, Some("good"))
        .upload_content(upload)
        .await
        .unwrap();
    assert_eq!(response.content_id(), Some("Photosynthesis"));
}

#[tokio::test]
async fn start_attempt_returns_attempt_id() {
    let base = spawn_backend().await;
    let id = client(&base, Some("good")).start_attempt("e7").await.unwrap();
    assert_eq!(id.as_deref(), Some("att-e7"));
}

#[tokio::test]
async fn non_array_result_list_reads_as_empty() {
    let base = spawn_backend().await;
    let results = client(&base, Some("good")).all_results().await.unwrap();
    assert!(results.is_empty());
}
