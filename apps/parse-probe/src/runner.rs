//! Orchestration: build → upload → report → cleanup.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::warn;

use crate::builder::{build_document, BuiltDocument};
use crate::config::Config;
use crate::errors::BuildError;
use crate::prober::Prober;
use crate::report::write_outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The service answered 200.
    Passed,
    /// The service answered with another status.
    Rejected,
    /// `--build-only`: no upload happened.
    BuiltOnly,
    /// No PDF renderer in this build; manual instructions were printed.
    RendererMissing,
}

impl RunStatus {
    /// Whether the process should exit non-zero.
    pub fn is_failure(self, strict: bool) -> bool {
        strict && self == RunStatus::Rejected
    }

    pub fn exit_code(self, strict: bool) -> ExitCode {
        if self.is_failure(strict) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub status: RunStatus,
    /// Where the PDF was written, if one was.
    pub pdf_path: Option<PathBuf>,
    /// The PDF at `pdf_path` was deleted at the end of the run.
    pub cleaned_up: bool,
}

impl RunReport {
    /// The PDF left on disk after the run, if any.
    pub fn kept_path(&self) -> Option<&Path> {
        self.pdf_path.as_deref().filter(|_| !self.cleaned_up)
    }
}

/// Runs the smoke test once, writing the console report to `out`.
///
/// Errors other than a missing renderer or a non-200 status are returned
/// unhandled.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunReport> {
    let fixture = config.resume_fixture()?;

    writeln!(out, "Creating test PDF...")?;
    let document = match build_document(&fixture, config.output.as_deref()) {
        Ok(document) => document,
        Err(BuildError::RendererUnavailable) => {
            warn!("Built without the `render` feature; skipping automated test");
            write_renderer_fallback(out, &config.url)?;
            return Ok(RunReport {
                status: RunStatus::RendererMissing,
                pdf_path: None,
                cleaned_up: false,
            });
        }
        Err(e) => return Err(e).context("Failed to build test PDF"),
    };
    writeln!(out, "Test PDF created at: {}", document.path().display())?;

    if config.build_only {
        let path = keep(document)?;
        return Ok(RunReport {
            status: RunStatus::BuiltOnly,
            pdf_path: Some(path),
            cleaned_up: false,
        });
    }

    writeln!(out, "\nTesting PDF parsing endpoint...")?;
    let prober = Prober::new(config.url.clone(), config.timeout())
        .context("Failed to build HTTP client")?;
    let outcome = prober
        .probe(document.path())
        .await
        .with_context(|| format!("Upload to {} failed", prober.url()))?;
    write_outcome(out, &outcome)?;

    let status = if outcome.is_success() {
        RunStatus::Passed
    } else {
        RunStatus::Rejected
    };

    let pdf_path = document.path().to_path_buf();
    let cleaned_up = document.cleanup().context("Failed to remove test PDF")?;
    if cleaned_up {
        writeln!(out, "\nTest PDF cleaned up.")?;
    } else {
        writeln!(out, "\nTest PDF kept at: {}", pdf_path.display())?;
    }

    Ok(RunReport {
        status,
        pdf_path: Some(pdf_path),
        cleaned_up,
    })
}

/// Persists a temp document so it outlives the run.
fn keep(document: BuiltDocument) -> Result<PathBuf> {
    match document {
        BuiltDocument::Temp(file) => {
            let (_, path) = file.keep().context("Failed to keep test PDF")?;
            Ok(path)
        }
        BuiltDocument::Kept(path) => Ok(path),
    }
}

/// Printed instead of the automated test when no renderer is compiled in.
pub fn write_renderer_fallback<W: Write>(out: &mut W, url: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "❌ PDF renderer not available. Rebuild with: cargo build --features render"
    )?;
    writeln!(out, "Testing with curl command instead...")?;
    writeln!(out, "\nYou can test PDF parsing manually with:")?;
    writeln!(out, "curl -X POST {url} -F 'file=@your_resume.pdf'")?;
    Ok(())
}
