//! "modern" layout: sidebar with identity, contact, skills, education and
//! extracurriculars; main column with experience and projects.

use crate::render::document::{
    Block, Column, ColumnRole, Document, Layout, ObjectiveStyle, SectionBody, Typeface,
};
use crate::render::sections::{self, section, EducationHeadline};
use crate::render::text::contact_items;
use crate::render::TemplateKind;
use crate::resume::model::Resume;

pub fn render(resume: &Resume) -> Document {
    let info = &resume.personal_info;

    let mut sidebar = vec![Block::Masthead {
        name: info.full_name.clone(),
        contact: Vec::new(),
        separator: None,
    }];
    if !info.career_objective.trim().is_empty() {
        sidebar.push(Block::Objective {
            text: info.career_objective.clone(),
            style: ObjectiveStyle::Plain,
        });
    }
    sidebar.push(section(
        "Contact",
        SectionBody::Contact {
            items: contact_items(&[&info.email, &info.phone_number, &info.address], &info.link),
        },
    ));
    sidebar.push(section("Skills", sections::skills_delimited(resume, ", ")));
    sidebar.push(section(
        "Education",
        sections::education(resume, EducationHeadline::Degree, false),
    ));
    if !resume.extracurriculars.is_empty() {
        sidebar.push(section(
            "Extracurriculars",
            sections::extracurriculars(resume),
        ));
    }

    let main = vec![
        section("Experience", sections::experience(resume)),
        section("Projects", sections::projects(resume)),
    ];

    Document {
        template: TemplateKind::Modern,
        layout: Layout::Sidebar,
        typeface: Typeface::Sans,
        columns: vec![
            Column {
                role: ColumnRole::Sidebar,
                blocks: sidebar,
            },
            Column {
                role: ColumnRole::Main,
                blocks: main,
            },
        ],
    }
}
