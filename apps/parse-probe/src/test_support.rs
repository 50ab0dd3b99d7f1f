//! In-process stand-in for the resume parsing service.

use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use tempfile::NamedTempFile;

/// One multipart field as the mock received it.
#[derive(Debug, Clone)]
pub struct Upload {
    pub field: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    uploads: Arc<Mutex<Vec<Upload>>>,
}

pub struct MockService {
    pub url: String,
    uploads: Arc<Mutex<Vec<Upload>>>,
}

impl MockService {
    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

async fn handle_parse_pdf(
    State(state): State<MockState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let upload_field = field.name().map(String::from);
        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.unwrap().to_vec();
        state.uploads.lock().unwrap().push(Upload {
            field: upload_field,
            file_name,
            content_type,
            bytes,
        });
    }
    (state.status, state.body)
}

/// Serves `POST /parse-pdf` on an ephemeral port, always answering with
/// `status` and `body`.
pub async fn spawn_mock(status: StatusCode, body: &str) -> MockService {
    let uploads = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/parse-pdf", post(handle_parse_pdf))
        .with_state(MockState {
            status,
            body: body.to_string(),
            uploads: uploads.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService {
        url: format!("http://{addr}/parse-pdf"),
        uploads,
    }
}

/// A small file that looks enough like a PDF for the upload path.
pub fn write_fake_pdf() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF-1.5\n%fake resume\n%%EOF\n").unwrap();
    file.flush().unwrap();
    file
}
