// Template rendering: a pure function from (resume, template) to a printable document.
// Layouts are a closed enum; adding one means one variant plus one module.

mod classic;
mod default;
pub mod document;
pub mod html;
mod modern;
mod sections;
pub mod text;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resume::model::Resume;

pub use document::Document;

/// The available visual layouts. Selection is per editing session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Default,
    Modern,
    Classic,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Default,
        TemplateKind::Modern,
        TemplateKind::Classic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Default => "default",
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown template '{s}'. Expected one of: default, modern, classic"))
    }
}

/// Renders the resume with the given layout. Pure: equal inputs give equal documents.
pub fn render(resume: &Resume, template: TemplateKind) -> Document {
    debug!(template = template.as_str(), "rendering resume");
    match template {
        TemplateKind::Default => default::render(resume),
        TemplateKind::Modern => modern::render(resume),
        TemplateKind::Classic => classic::render(resume),
    }
}
