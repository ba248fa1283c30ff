use serde::{Deserialize, Serialize};

/// Kinds of study material that can be submitted for question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    FreeText,
    Topic,
    Article,
    YoutubeVideo,
    Pdf,
    Docx,
    Xlsx,
    Pptx,
    Image,
    PreviousExam,
}

/// How a kind is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionForm {
    /// A file picked from disk.
    File { accept: &'static str },
    /// A single text field sent under `field`.
    Text {
        field: &'static str,
        placeholder: &'static str,
        multiline: bool,
    },
}

impl ContentKind {
    pub const TEXT_KINDS: [ContentKind; 4] = [
        ContentKind::FreeText,
        ContentKind::Topic,
        ContentKind::Article,
        ContentKind::YoutubeVideo,
    ];

    pub const FILE_KINDS: [ContentKind; 6] = [
        ContentKind::Pdf,
        ContentKind::Docx,
        ContentKind::Xlsx,
        ContentKind::Pptx,
        ContentKind::Image,
        ContentKind::PreviousExam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::FreeText => "Free Text",
            ContentKind::Topic => "Topic",
            ContentKind::Article => "Article",
            ContentKind::YoutubeVideo => "Youtube Videos",
            ContentKind::Pdf => "PDFs",
            ContentKind::Docx => "DOCX",
            ContentKind::Xlsx => "XLSX",
            ContentKind::Pptx => "PPTX",
            ContentKind::Image => "Image",
            ContentKind::PreviousExam => "Previous Exam (PDF, DOCX)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContentKind::FreeText => "Upload free text content for question generation.",
            ContentKind::Topic => "Select specific topics to generate questions related to them.",
            ContentKind::Article => "Use articles to create questions based on the content.",
            ContentKind::YoutubeVideo => "Include YouTube videos for interactive question creation.",
            ContentKind::Pdf => "Upload PDF files for question generation based on content.",
            ContentKind::Docx => "Upload DOCX files to turn text-based content into questions.",
            ContentKind::Xlsx => "Upload Excel files for data-driven question generation.",
            ContentKind::Pptx => "Upload PowerPoint files to create questions based on slides.",
            ContentKind::Image => "Upload images for visual question generation.",
            ContentKind::PreviousExam => "Upload previous exam files for practice questions.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ContentKind::FreeText | ContentKind::PreviousExam => "📝",
            ContentKind::Topic => "📚",
            ContentKind::Article => "📰",
            ContentKind::YoutubeVideo => "🎥",
            ContentKind::Pdf => "📄",
            ContentKind::Docx => "📑",
            ContentKind::Xlsx | ContentKind::Pptx => "📊",
            ContentKind::Image => "🖼",
        }
    }

    /// Path under `content_upload/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ContentKind::FreeText => "upload_text/",
            ContentKind::Topic => "upload_topic/",
            ContentKind::Article => "upload_article/",
            ContentKind::YoutubeVideo => "upload_youtube_video/",
            ContentKind::Pdf => "upload_pdf/",
            ContentKind::Docx => "upload_docx/",
            ContentKind::Xlsx => "upload_xlsx/",
            ContentKind::Pptx => "upload_pptx/",
            ContentKind::Image => "upload_image/",
            ContentKind::PreviousExam => "upload_previous_exam/",
        }
    }

    pub fn form(&self) -> SubmissionForm {
        match self {
            ContentKind::FreeText => SubmissionForm::Text {
                field: "text",
                placeholder: "Paste or type your study material...",
                multiline: true,
            },
            ContentKind::Topic => SubmissionForm::Text {
                field: "topic",
                placeholder: "Enter a topic, e.g. Photosynthesis",
                multiline: false,
            },
            ContentKind::Article => SubmissionForm::Text {
                field: "text",
                placeholder: "Paste the article text...",
                multiline: true,
            },
            ContentKind::YoutubeVideo => SubmissionForm::Text {
                field: "url",
                placeholder: "https://www.youtube.com/watch?v=...",
                multiline: false,
            },
            ContentKind::Pdf => SubmissionForm::File {
                accept: "application/pdf",
            },
            ContentKind::Docx => SubmissionForm::File {
                accept: ".docx,application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            },
            ContentKind::Xlsx => SubmissionForm::File {
                accept: ".xlsx,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            },
            ContentKind::Pptx => SubmissionForm::File {
                accept: ".pptx,application/vnd.openxmlformats-officedocument.presentationml.presentation",
            },
            ContentKind::Image => SubmissionForm::File { accept: "image/*" },
            ContentKind::PreviousExam => SubmissionForm::File {
                accept: ".pdf,.docx,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            },
        }
    }

    pub fn is_file_based(&self) -> bool {
        matches!(self.form(), SubmissionForm::File { .. })
    }

    /// Message shown when the user submits without picking or typing anything.
    pub fn empty_input_message(&self) -> &'static str {
        match self {
            ContentKind::Pdf => "Please select a PDF file.",
            ContentKind::Docx => "Please select a DOCX file.",
            ContentKind::Xlsx => "Please select an XLSX file.",
            ContentKind::Pptx => "Please select a PPTX file.",
            ContentKind::Image => "Please select an image file.",
            ContentKind::PreviousExam => "Please select a file.",
            ContentKind::Topic => "Please enter a valid topic.",
            ContentKind::YoutubeVideo => "Please provide a YouTube link.",
            ContentKind::FreeText | ContentKind::Article => "Please enter some text.",
        }
    }

    /// Shown when the upload fails without a server message.
    pub fn upload_failed_message(&self) -> &'static str {
        match self {
            ContentKind::Pdf => "Failed to upload PDF.",
            ContentKind::Docx => "Failed to upload DOCX.",
            ContentKind::Xlsx => "Failed to upload XLSX.",
            ContentKind::Pptx => "Failed to upload PPTX.",
            ContentKind::Image => "Failed to upload image.",
            ContentKind::PreviousExam => "Failed to upload file.",
            ContentKind::Topic => "Failed to submit topic.",
            ContentKind::YoutubeVideo => "Failed to submit YouTube link.",
            ContentKind::FreeText | ContentKind::Article => "Failed to submit text.",
        }
    }
}

/// An uploaded unit of study material as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentsResponse {
    #[serde(default)]
    pub contents: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub contents: Option<ContentRef>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    pub fn content_id(&self) -> Option<&str> {
        self.contents.as_ref().map(|c| c.id.as_str())
    }
}

/// Appends `id` unless it is already selected.
pub fn add_content_id(ids: &mut Vec<String>, id: &str) -> bool {
    if ids.iter().any(|existing| existing == id) {
        return false;
    }
    ids.push(id.to_string());
    true
}

/// Drops every occurrence of `id`, keeping the other ids in order.
pub fn remove_content_id(ids: &mut Vec<String>, id: &str) -> bool {
    let before = ids.len();
    ids.retain(|existing| existing != id);
    ids.len() != before
}

/// History entries whose id is selected, in history order.
pub fn selected_items<'a>(history: &'a [ContentItem], ids: &[String]) -> Vec<&'a ContentItem> {
    history
        .iter()
        .filter(|item| ids.iter().any(|id| *id == item.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("title {id}"),
            content_type: None,
            created_at: None,
        }
    }

    #[test]
    fn add_skips_duplicates() {
        let mut ids = vec!["a".to_string()];
        assert!(add_content_id(&mut ids, "b"));
        assert!(!add_content_id(&mut ids, "a"));
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn remove_leaves_other_ids_untouched() {
        let mut ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert!(remove_content_id(&mut ids, "b"));
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!remove_content_id(&mut ids, "zzz"));
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn selected_items_follow_history_order() {
        let history = vec![item("1"), item("2"), item("3")];
        let picked = selected_items(&history, &["3".into(), "1".into(), "9".into()]);
        let ids: Vec<&str> = picked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn every_kind_is_either_file_or_text() {
        for kind in ContentKind::FILE_KINDS {
            assert!(kind.is_file_based(), "{}", kind.label());
        }
        for kind in ContentKind::TEXT_KINDS {
            assert!(!kind.is_file_based(), "{}", kind.label());
        }
    }

    #[test]
    fn upload_response_without_contents_has_no_id() {
        let response: UploadResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(response.content_id(), None);
        let response: UploadResponse =
            serde_json::from_str(r#"{"contents":{"id":"abc","title":"x"}}"#).unwrap();
        assert_eq!(response.content_id(), Some("abc"));
    }
}
