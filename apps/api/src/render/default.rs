//! "default" layout: single column, sans, top to bottom.

use crate::render::document::{Block, Column, ColumnRole, Document, Layout, ObjectiveStyle, Typeface};
use crate::render::sections::{self, section, EducationHeadline};
use crate::render::text::contact_items;
use crate::render::TemplateKind;
use crate::resume::model::Resume;

const SKILL_SEPARATOR: &str = "  •  ";

pub fn render(resume: &Resume) -> Document {
    let info = &resume.personal_info;
    let mut blocks = vec![Block::Masthead {
        name: info.full_name.clone(),
        contact: contact_items(&[&info.email, &info.phone_number, &info.address], &info.link),
        separator: None,
    }];

    if !info.career_objective.trim().is_empty() {
        blocks.push(Block::Objective {
            text: info.career_objective.clone(),
            style: ObjectiveStyle::Plain,
        });
    }

    blocks.push(section("Experience", sections::experience(resume)));
    blocks.push(section(
        "Education",
        sections::education(resume, EducationHeadline::Degree, true),
    ));
    blocks.push(section("Projects", sections::projects(resume)));
    blocks.push(section(
        "Skills",
        sections::skills_delimited(resume, SKILL_SEPARATOR),
    ));

    if !resume.extracurriculars.is_empty() {
        blocks.push(section(
            "Extracurricular Activities",
            sections::extracurriculars(resume),
        ));
    }

    Document {
        template: TemplateKind::Default,
        layout: Layout::SingleColumn,
        typeface: Typeface::Sans,
        columns: vec![Column {
            role: ColumnRole::Main,
            blocks,
        }],
    }
}
