use std::fmt;

use crate::render::{self, html};
use crate::session::Session;

use super::ExportError;

/// The rendered regions that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    ResumePreview,
    InterviewQa,
}

impl SurfaceId {
    /// DOM id of the surface's root element.
    pub fn root_id(self) -> &'static str {
        match self {
            SurfaceId::ResumePreview => html::RESUME_ROOT_ID,
            SurfaceId::InterviewQa => html::QA_ROOT_ID,
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_id())
    }
}

/// A standalone HTML page holding one rendered surface.
#[derive(Debug, Clone)]
pub struct Surface {
    pub id: SurfaceId,
    pub html: String,
}

/// Renders the session's current view of `id`.
///
/// The Q&A surface only exists once at least one question has been generated.
pub fn resolve(session: &Session, id: SurfaceId) -> Result<Surface, ExportError> {
    let html = match id {
        SurfaceId::ResumePreview => {
            let editor = &session.editor;
            html::to_html(&render::render(&editor.resume, editor.template))?
        }
        SurfaceId::InterviewQa => {
            let sheet = &session.interview_sheet;
            if sheet.qa_pairs.is_empty() {
                return Err(ExportError::SurfaceNotFound(id));
            }
            html::qa_html(&sheet.topic, &sheet.qa_pairs)?
        }
    };
    Ok(Surface { id, html })
}
