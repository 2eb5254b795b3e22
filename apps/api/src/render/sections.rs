//! Section builders shared by the layouts. Layouts differ in ordering and geometry,
//! never in what a section contains.

use crate::render::document::{Block, EntryView, SectionBody, SourceRef};
use crate::render::text::{date_range, description_bullets, link, non_blank};
use crate::resume::model::{Resume, SectionKind};

pub fn section(title: &str, body: SectionBody) -> Block {
    Block::Section {
        title: title.to_string(),
        body,
    }
}

pub fn experience(resume: &Resume) -> SectionBody {
    let entries = resume
        .experience
        .iter()
        .map(|exp| EntryView {
            subtitle: non_blank(&exp.company),
            meta: date_range(&exp.start_date, &exp.end_date),
            location: non_blank(&exp.location),
            bullets: description_bullets(&exp.description),
            ..EntryView::new(SectionKind::Experience, &exp.id, &exp.job_title)
        })
        .collect();
    SectionBody::Entries { entries }
}

/// How an education entry is headlined.
#[derive(Debug, Clone, Copy)]
pub enum EducationHeadline {
    /// Degree as title, school underneath.
    Degree,
    /// School as title, degree underneath.
    School,
}

pub fn education(resume: &Resume, headline: EducationHeadline, with_location: bool) -> SectionBody {
    let entries = resume
        .education
        .iter()
        .map(|edu| {
            let (title, subtitle) = match headline {
                EducationHeadline::Degree => (&edu.degree, &edu.school),
                EducationHeadline::School => (&edu.school, &edu.degree),
            };
            EntryView {
                subtitle: non_blank(subtitle),
                meta: non_blank(&edu.grad_date),
                location: if with_location {
                    non_blank(&edu.location)
                } else {
                    None
                },
                ..EntryView::new(SectionKind::Education, &edu.id, title)
            }
        })
        .collect();
    SectionBody::Entries { entries }
}

pub fn projects(resume: &Resume) -> SectionBody {
    let entries = resume
        .projects
        .iter()
        .map(|proj| EntryView {
            link: link(&proj.link),
            bullets: description_bullets(&proj.description),
            ..EntryView::new(SectionKind::Projects, &proj.id, &proj.name)
        })
        .collect();
    SectionBody::Entries { entries }
}

pub fn extracurriculars(resume: &Resume) -> SectionBody {
    let entries = resume
        .extracurriculars
        .iter()
        .map(|extra| EntryView {
            bullets: description_bullets(&extra.description),
            ..EntryView::new(SectionKind::Extracurriculars, &extra.id, &extra.activity)
        })
        .collect();
    SectionBody::Entries { entries }
}

/// Skills joined into one line with `separator`.
///
/// Blank names add no text, so the line never shows doubled separators, but every
/// skill keeps its source reference.
pub fn skills_delimited(resume: &Resume, separator: &str) -> SectionBody {
    let text = resume
        .skills
        .iter()
        .map(|skill| skill.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(separator);
    let sources = resume
        .skills
        .iter()
        .map(|skill| SourceRef {
            section: SectionKind::Skills,
            id: skill.id.clone(),
        })
        .collect();
    SectionBody::Delimited { text, sources }
}
