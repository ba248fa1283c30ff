use reqwest::multipart::{Form, Part};
use shared::content::{ContentKind, ContentsResponse, SubmissionForm, UploadResponse};
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;

/// What is being sent for a given [`ContentKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPayload {
    File { name: String, bytes: Vec<u8> },
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub kind: ContentKind,
    pub payload: UploadPayload,
}

impl Upload {
    pub fn file(kind: ContentKind, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            payload: UploadPayload::File {
                name: name.into(),
                bytes,
            },
        }
    }

    pub fn text(kind: ContentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            payload: UploadPayload::Text(value.into()),
        }
    }

    /// The validation message to show when there is nothing to send, if any.
    pub fn rejection(&self) -> Option<&'static str> {
        let empty = match (&self.payload, self.kind.form()) {
            (UploadPayload::File { bytes, .. }, SubmissionForm::File { .. }) => bytes.is_empty(),
            (UploadPayload::Text(value), SubmissionForm::Text { .. }) => value.trim().is_empty(),
            _ => true,
        };
        empty.then(|| self.kind.empty_input_message())
    }

    fn into_form(self, token: &str) -> Form {
        match (self.payload, self.kind.form()) {
            (UploadPayload::File { name, bytes }, _) => Form::new()
                .part("file", Part::bytes(bytes).file_name(name.clone()))
                .text("title", name)
                .text("access_token", token.to_string()),
            (UploadPayload::Text(value), SubmissionForm::Text { field, .. }) => {
                let value = value.trim().to_string();
                Form::new()
                    .text("title", value.clone())
                    .text(field, value)
            }
            (UploadPayload::Text(value), SubmissionForm::File { .. }) => {
                Form::new().text("title", value)
            }
        }
    }
}

impl ApiClient {
    /// Posts `upload` to its kind's endpoint as multipart form data.
    pub async fn upload_content(&self, upload: Upload) -> Result<UploadResponse> {
        let endpoint = format!("content_upload/{}", upload.kind.endpoint());
        let token = self.token().unwrap_or_default().to_string();
        let label = upload.kind.label();
        let response: UploadResponse = self
            .post_multipart(&endpoint, upload.into_form(&token))
            .await?;
        info!("Uploaded {} content: {:?}", label, response.content_id());
        Ok(response)
    }

    pub async fn contents(&self) -> Result<ContentsResponse> {
        self.get("content_upload/get_contents_by_student_id/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_rejected_with_kind_message() {
        assert_eq!(
            Upload::text(ContentKind::Topic, "   ").rejection(),
            Some("Please enter a valid topic.")
        );
        assert_eq!(
            Upload::file(ContentKind::Pdf, "a.pdf", vec![]).rejection(),
            Some("Please select a PDF file.")
        );
        assert_eq!(Upload::text(ContentKind::YoutubeVideo, "https://y.tu/x").rejection(), None);
    }

    #[test]
    fn payload_must_match_kind() {
        assert!(Upload::text(ContentKind::Docx, "not a file").rejection().is_some());
        assert!(Upload::file(ContentKind::Article, "a.txt", vec![1]).rejection().is_some());
    }
}
