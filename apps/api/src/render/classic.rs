//! "classic" layout: centered serif page, objective as a bordered pull-quote,
//! skills on one delimited line.

use crate::render::document::{Block, Column, ColumnRole, Document, Layout, ObjectiveStyle, Typeface};
use crate::render::sections::{self, section, EducationHeadline};
use crate::render::text::contact_items;
use crate::render::TemplateKind;
use crate::resume::model::Resume;

const CONTACT_SEPARATOR: &str = " • ";
const SKILL_SEPARATOR: &str = " | ";

pub fn render(resume: &Resume) -> Document {
    let info = &resume.personal_info;

    let mut blocks = vec![
        Block::Masthead {
            name: info.full_name.to_uppercase(),
            contact: contact_items(&[&info.email, &info.phone_number, &info.address], &info.link),
            separator: Some(CONTACT_SEPARATOR.to_string()),
        },
        // The pull-quote frame is part of the classic page even when the objective is blank.
        Block::Objective {
            text: info.career_objective.clone(),
            style: ObjectiveStyle::PullQuote,
        },
        section("Experience", sections::experience(resume)),
        section(
            "Education",
            sections::education(resume, EducationHeadline::School, true),
        ),
        section("Projects", sections::projects(resume)),
        section(
            "Skills",
            sections::skills_delimited(resume, SKILL_SEPARATOR),
        ),
    ];

    if !resume.extracurriculars.is_empty() {
        blocks.push(section(
            "Extracurriculars",
            sections::extracurriculars(resume),
        ));
    }

    Document {
        template: TemplateKind::Classic,
        layout: Layout::Centered,
        typeface: Typeface::Serif,
        columns: vec![Column {
            role: ColumnRole::Main,
            blocks,
        }],
    }
}
