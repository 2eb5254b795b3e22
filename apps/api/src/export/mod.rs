//! Export: capture a rendered surface as a raster, paginate it onto Letter pages and
//! serialize the pages as a PDF. Export is a read-only snapshot of the session.

pub mod capture;
pub mod handlers;
pub mod paginate;
pub mod pdf;
pub mod surface;

use thiserror::Error;
use tracing::info;

use capture::SurfaceCapture;
use paginate::{paginate, LETTER};
use surface::{Surface, SurfaceId};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("surface '{0}' is not currently rendered")]
    SurfaceNotFound(SurfaceId),

    #[error("failed to render surface: {0}")]
    Render(#[from] minijinja::Error),

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("captured raster is invalid: {0}")]
    InvalidRaster(String),

    #[error("failed to write PDF: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The downloadable document types, one fixed filename each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    InterviewPrep,
}

impl DocumentKind {
    pub fn filename(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume.pdf",
            DocumentKind::InterviewPrep => "interview-prep.pdf",
        }
    }

    pub fn surface(self) -> SurfaceId {
        match self {
            DocumentKind::Resume => SurfaceId::ResumePreview,
            DocumentKind::InterviewPrep => SurfaceId::InterviewQa,
        }
    }
}

/// Captures `surface` and returns the bytes of a Letter-sized, paginated PDF.
///
/// Nothing is produced unless every step succeeds.
pub async fn export_surface(
    capture: &dyn SurfaceCapture,
    surface: &Surface,
) -> Result<Vec<u8>, ExportError> {
    let raster = capture.capture(surface).await?;
    let plan = paginate(raster.width, raster.height, LETTER);
    let pages = plan.page_count();
    let bytes = tokio::task::spawn_blocking(move || pdf::write_pdf(&raster, &plan))
        .await
        .map_err(|e| ExportError::Pdf(e.to_string()))??;
    info!(surface = %surface.id, pages, bytes = bytes.len(), "document exported");
    Ok(bytes)
}
