use thiserror::Error;

/// Failures while rendering the synthetic resume to disk.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The crate was compiled without the `render` feature.
    #[cfg_attr(feature = "render", allow(dead_code))]
    #[error("PDF renderer is not available in this build")]
    RendererUnavailable,

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "render")]
    #[error("PDF serialization failed")]
    Pdf(#[from] lopdf::Error),
}

/// Failures while uploading the document to the parsing endpoint.
///
/// A non-200 status is NOT an error: it is reported as
/// [`crate::prober::ProbeOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read upload file")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid JSON")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file")]
    Io(#[from] std::io::Error),

    #[error("fixture file is not valid JSON")]
    Json(#[from] serde_json::Error),
}
