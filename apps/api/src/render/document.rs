//! Printable document tree produced by the template renderer.
//!
//! A `Document` is layout-aware (columns, typeface, objective style) but carries no
//! markup. `html::to_html` turns any document into a page.

use serde::Serialize;

use crate::render::TemplateKind;
use crate::resume::model::{EntryId, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// One column, top to bottom.
    SingleColumn,
    /// Narrow sidebar on the left, main column on the right.
    Sidebar,
    /// One centered column.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Typeface {
    Sans,
    Serif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub template: TemplateKind,
    pub layout: Layout,
    pub typeface: Typeface,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub role: ColumnRole,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveStyle {
    Plain,
    /// Bordered top and bottom.
    PullQuote,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Masthead {
        name: String,
        contact: Vec<ContactItem>,
        /// Inline separator between contact items; `None` lays them out as a spaced row.
        separator: Option<String>,
    },
    Objective {
        text: String,
        style: ObjectiveStyle,
    },
    Section {
        title: String,
        body: SectionBody,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
    Entries { entries: Vec<EntryView> },
    Contact { items: Vec<ContactItem> },
    /// Items joined into a single line. `sources` lists every item, including ones
    /// whose text is blank.
    Delimited {
        text: String,
        sources: Vec<SourceRef>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContactItem {
    Text { text: String },
    Link { link: Link },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Which resume entry a rendered item was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub section: SectionKind,
    pub id: EntryId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub source: SourceRef,
    pub title: String,
    pub subtitle: Option<String>,
    /// Right-aligned date text next to the title.
    pub meta: Option<String>,
    pub location: Option<String>,
    pub link: Option<Link>,
    pub bullets: Vec<String>,
}

impl EntryView {
    pub fn new(section: SectionKind, id: &EntryId, title: &str) -> Self {
        Self {
            source: SourceRef {
                section,
                id: id.clone(),
            },
            title: title.to_string(),
            subtitle: None,
            meta: None,
            location: None,
            link: None,
            bullets: Vec::new(),
        }
    }
}
