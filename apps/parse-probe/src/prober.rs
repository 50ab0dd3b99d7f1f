/// Endpoint prober: one multipart upload to the resume parsing service.
///
/// No retries and, unless configured, no timeout. A non-200 status is a
/// reportable outcome, not an error; only transport failures and an
/// undecodable 200 body are errors.
use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::errors::ProbeError;
use crate::models::ParseResponse;

/// Default location of the parsing service.
pub const DEFAULT_URL: &str = "http://localhost:7861/parse-pdf";
/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";
/// Filename announced for the upload, whatever the local temp name is.
pub const UPLOAD_FILENAME: &str = "test_resume.pdf";
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug)]
pub enum ProbeOutcome {
    /// HTTP 200 with a JSON body.
    Parsed(ParseResponse),
    /// Any other status. `body` is the raw response text.
    Rejected { status: u16, body: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Parsed(_))
    }
}

pub struct Prober {
    client: Client,
    url: String,
}

impl Prober {
    /// `timeout: None` leaves requests unbounded.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Uploads the file at `path` and classifies the response.
    pub async fn probe(&self, path: &Path) -> Result<ProbeOutcome, ProbeError> {
        let bytes = tokio::fs::read(path).await?;
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(UPLOAD_FILENAME)
            .mime_str(PDF_MIME)?;
        let form = Form::new().part(FILE_FIELD, part);

        info!("POST {} ({} bytes)", self.url, size);
        let response = self.client.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        debug!("Parsing service answered {}", status);

        if status != StatusCode::OK {
            let body = response.text().await?;
            return Ok(ProbeOutcome::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let parsed: ParseResponse = serde_json::from_slice(&body)?;
        Ok(ProbeOutcome::Parsed(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_mock, write_fake_pdf};
    use axum::http::StatusCode as MockStatus;
    use serde_json::Value;

    #[tokio::test]
    async fn test_upload_shape() {
        let mock = spawn_mock(MockStatus::OK, "{}").await;
        let file = write_fake_pdf();

        let prober = Prober::new(mock.url.clone(), None).unwrap();
        prober.probe(file.path()).await.unwrap();

        let uploads = mock.uploads();
        assert_eq!(uploads.len(), 1);
        let upload = &uploads[0];
        assert_eq!(upload.field.as_deref(), Some("file"));
        assert_eq!(upload.file_name.as_deref(), Some("test_resume.pdf"));
        assert_eq!(upload.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(upload.bytes, std::fs::read(file.path()).unwrap());
    }

    #[tokio::test]
    async fn test_ok_decodes_json() {
        let mock = spawn_mock(
            MockStatus::OK,
            r#"{"filename": "test_resume.pdf", "source": "upload", "parsing_result": {"name": "Jane Smith"}}"#,
        )
        .await;
        let file = write_fake_pdf();

        let outcome = Prober::new(mock.url.clone(), None)
            .unwrap()
            .probe(file.path())
            .await
            .unwrap();

        let parsed = match outcome {
            ProbeOutcome::Parsed(parsed) => parsed,
            other => panic!("expected Parsed, got {other:?}"),
        };
        assert_eq!(parsed.source, Some(Value::from("upload")));
        assert_eq!(
            parsed.parsing_result.unwrap().name,
            Some(Value::from("Jane Smith"))
        );
    }

    #[tokio::test]
    async fn test_non_200_keeps_raw_body() {
        for (status, body) in [
            (MockStatus::NOT_FOUND, "{\"detail\":\"Not Found\"}"),
            (MockStatus::INTERNAL_SERVER_ERROR, "boom: <not json>"),
        ] {
            let mock = spawn_mock(status, body).await;
            let file = write_fake_pdf();

            let outcome = Prober::new(mock.url.clone(), None)
                .unwrap()
                .probe(file.path())
                .await
                .unwrap();

            match outcome {
                ProbeOutcome::Rejected { status: got, body: text } => {
                    assert_eq!(got, status.as_u16());
                    assert_eq!(text, body);
                }
                other => panic!("expected Rejected, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_ok_with_invalid_json_is_an_error() {
        let mock = spawn_mock(MockStatus::OK, "not json").await;
        let file = write_fake_pdf();

        let result = Prober::new(mock.url.clone(), None)
            .unwrap()
            .probe(file.path())
            .await;
        assert!(matches!(result, Err(ProbeError::Decode(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let prober = Prober::new(DEFAULT_URL, None).unwrap();
        let result = prober.probe(Path::new("/definitely/not/here.pdf")).await;
        assert!(matches!(result, Err(ProbeError::Io(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_http_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let file = write_fake_pdf();
        let prober = Prober::new(format!("http://{addr}/parse-pdf"), None).unwrap();
        let result = prober.probe(file.path()).await;
        assert!(matches!(result, Err(ProbeError::Http(_))));
    }
}
