//! Form editor state and its reducer.
//!
//! The editor owns exactly one authoritative value per session: the resume plus the
//! selected template. Every form event is an `EditorAction`, and `apply` is the only
//! way to produce the next state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::TemplateKind;
use crate::resume::model::{EntryId, Resume, SectionKind};
use crate::resume::ops;
use crate::resume::seed::seed_resume;

/// One field-level edit coming from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum EditorAction {
    SetPersonalField {
        field: String,
        value: String,
    },
    AddEntry {
        section: SectionKind,
    },
    UpdateEntryField {
        section: SectionKind,
        id: EntryId,
        field: String,
        value: String,
    },
    RemoveEntry {
        section: SectionKind,
        id: EntryId,
    },
    SelectTemplate {
        template: TemplateKind,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub resume: Resume,
    pub template: TemplateKind,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            resume: seed_resume(),
            template: TemplateKind::default(),
        }
    }
}

impl EditorState {
    /// Applies one action and returns the next state. Never fails.
    pub fn apply(&self, action: &EditorAction) -> EditorState {
        debug!("Applying editor action: {action:?}");
        match action {
            EditorAction::SetPersonalField { field, value } => EditorState {
                resume: ops::set_personal_info_field(&self.resume, field, value),
                template: self.template,
            },
            EditorAction::AddEntry { section } => EditorState {
                resume: ops::add_entry(&self.resume, *section),
                template: self.template,
            },
            EditorAction::UpdateEntryField {
                section,
                id,
                field,
                value,
            } => EditorState {
                resume: ops::update_entry_field(&self.resume, *section, id, field, value),
                template: self.template,
            },
            EditorAction::RemoveEntry { section, id } => EditorState {
                resume: ops::remove_entry(&self.resume, *section, id),
                template: self.template,
            },
            EditorAction::SelectTemplate { template } => EditorState {
                resume: self.resume.clone(),
                template: *template,
            },
        }
    }

    /// True when the action would delete the only remaining entry of its section.
    ///
    /// The form disables that delete button; the model itself allows it.
    pub fn removes_last_entry(&self, action: &EditorAction) -> bool {
        match action {
            EditorAction::RemoveEntry { section, id } => {
                self.resume.section_len(*section) == 1 && self.resume.contains(*section, id)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_seeded_with_default_template() {
        let state = EditorState::default();
        assert_eq!(state.template, TemplateKind::Default);
        assert_eq!(state.resume, seed_resume());
    }

    #[test]
    fn test_action_json_shape() {
        let action: EditorAction = serde_json::from_value(serde_json::json!({
            "type": "update_entry_field",
            "section": "experience",
            "id": "exp1",
            "field": "jobTitle",
            "value": "Staff Engineer"
        }))
        .unwrap();
        assert_eq!(
            action,
            EditorAction::UpdateEntryField {
                section: SectionKind::Experience,
                id: EntryId::from("exp1"),
                field: "jobTitle".to_string(),
                value: "Staff Engineer".to_string(),
            }
        );

        let select: EditorAction =
            serde_json::from_str(r#"{"type":"select_template","template":"classic"}"#).unwrap();
        assert_eq!(
            select,
            EditorAction::SelectTemplate {
                template: TemplateKind::Classic
            }
        );
    }

    #[test]
    fn test_unknown_template_in_action_is_rejected() {
        let result: Result<EditorAction, _> =
            serde_json::from_str(r#"{"type":"select_template","template":"fancy"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_template_keeps_resume() {
        let state = EditorState::default();
        let next = state.apply(&EditorAction::SelectTemplate {
            template: TemplateKind::Modern,
        });
        assert_eq!(next.template, TemplateKind::Modern);
        assert_eq!(next.resume, state.resume);
    }

    #[test]
    fn test_edit_keeps_template() {
        let state = EditorState::default().apply(&EditorAction::SelectTemplate {
            template: TemplateKind::Classic,
        });
        let next = state.apply(&EditorAction::SetPersonalField {
            field: "fullName".to_string(),
            value: "John Roe".to_string(),
        });
        assert_eq!(next.template, TemplateKind::Classic);
        assert_eq!(next.resume.personal_info.full_name, "John Roe");
    }

    #[test]
    fn test_removes_last_entry_detection() {
        let state = EditorState::default();
        let last_exp = EditorAction::RemoveEntry {
            section: SectionKind::Experience,
            id: EntryId::from("exp1"),
        };
        let one_of_many_skills = EditorAction::RemoveEntry {
            section: SectionKind::Skills,
            id: EntryId::from("skill1"),
        };
        let missing = EditorAction::RemoveEntry {
            section: SectionKind::Experience,
            id: EntryId::from("ghost"),
        };
        assert!(state.removes_last_entry(&last_exp));
        assert!(!state.removes_last_entry(&one_of_many_skills));
        assert!(!state.removes_last_entry(&missing));
    }
}
