//! Pure resume transformations.
//!
//! Every operation takes the current resume by reference and returns the next value.
//! Unknown ids and unknown field names are silent no-ops: the live preview loop must
//! never fail on a stale edit.

use tracing::debug;

use crate::resume::model::{
    Education, EntryId, Experience, Extracurricular, Project, Resume, SectionEntry, SectionKind,
    Skill,
};

/// Replaces one personal-info field. No-op for an unrecognized field name.
pub fn set_personal_info_field(resume: &Resume, field: &str, value: &str) -> Resume {
    let mut next = resume.clone();
    if !next.personal_info.set_field(field, value) {
        debug!("Ignoring unknown personal info field '{field}'");
    }
    next
}

/// Appends a blank entry with a freshly generated id to the end of a section.
pub fn add_entry(resume: &Resume, kind: SectionKind) -> Resume {
    add_entry_with_id(resume, kind, EntryId::generate())
}

/// Appends a blank entry with a caller-chosen id. No-op if the id already exists in
/// the section, so ids stay unique within a section.
pub fn add_entry_with_id(resume: &Resume, kind: SectionKind, id: EntryId) -> Resume {
    if resume.contains(kind, &id) {
        debug!("Refusing duplicate id {id} in {}", kind.as_str());
        return resume.clone();
    }
    let mut next = resume.clone();
    match kind {
        SectionKind::Experience => next.experience.push(Experience::blank(id)),
        SectionKind::Education => next.education.push(Education::blank(id)),
        SectionKind::Projects => next.projects.push(Project::blank(id)),
        SectionKind::Skills => next.skills.push(Skill::blank(id)),
        SectionKind::Extracurriculars => next.extracurriculars.push(Extracurricular::blank(id)),
    }
    next
}

/// Replaces exactly one field of the entry with the given id.
pub fn update_entry_field(
    resume: &Resume,
    kind: SectionKind,
    id: &EntryId,
    field: &str,
    value: &str,
) -> Resume {
    let mut next = resume.clone();
    let applied = match kind {
        SectionKind::Experience => update_in(&mut next.experience, id, field, value),
        SectionKind::Education => update_in(&mut next.education, id, field, value),
        SectionKind::Projects => update_in(&mut next.projects, id, field, value),
        SectionKind::Skills => update_in(&mut next.skills, id, field, value),
        SectionKind::Extracurriculars => update_in(&mut next.extracurriculars, id, field, value),
    };
    if !applied {
        debug!(
            "Update of {}.{field} for {id} matched nothing",
            kind.as_str()
        );
    }
    next
}

/// Removes the first entry with the given id. No-op if absent.
pub fn remove_entry(resume: &Resume, kind: SectionKind, id: &EntryId) -> Resume {
    let mut next = resume.clone();
    match kind {
        SectionKind::Experience => remove_in(&mut next.experience, id),
        SectionKind::Education => remove_in(&mut next.education, id),
        SectionKind::Projects => remove_in(&mut next.projects, id),
        SectionKind::Skills => remove_in(&mut next.skills, id),
        SectionKind::Extracurriculars => remove_in(&mut next.extracurriculars, id),
    }
    next
}

fn update_in<E: SectionEntry>(entries: &mut [E], id: &EntryId, field: &str, value: &str) -> bool {
    entries
        .iter_mut()
        .find(|entry| entry.id() == id)
        .map(|entry| entry.set_field(field, value))
        .unwrap_or(false)
}

fn remove_in<E: SectionEntry>(entries: &mut Vec<E>, id: &EntryId) {
    if let Some(pos) = entries.iter().position(|entry| entry.id() == id) {
        entries.remove(pos);
    }
}
