//! Resume data model: personal info plus five ordered, id-keyed sections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers and section kinds
// ────────────────────────────────────────────────────────────────────────────

/// Opaque, generated identifier of a section entry.
///
/// Only used to address mutations; never rendered and never compared for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh identifier (`id-<uuid>`), unique for the lifetime of the process.
    pub fn generate() -> Self {
        Self(format!("id-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The five repeatable resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Experience,
    Education,
    Projects,
    Skills,
    Extracurriculars,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Extracurriculars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Extracurriculars => "extracurriculars",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

/// Singleton contact block. All fields are free text; no format validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub link: String,
    pub career_objective: String,
}

impl PersonalInfo {
    /// Replaces the field named by its wire name. Returns `false` for unknown names.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "phoneNumber" => &mut self.phone_number,
            "address" => &mut self.address,
            "link" => &mut self.link,
            "careerObjective" => &mut self.career_objective,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Shared behaviour of every section entry.
pub trait SectionEntry: Clone {
    fn id(&self) -> &EntryId;

    /// A new entry with the given id and every domain field empty.
    fn blank(id: EntryId) -> Self;

    /// Replaces the field named by its wire name. The id is not addressable.
    /// Returns `false` for unknown names.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// One bullet per line, optionally prefixed with "- ".
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub grad_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extracurricular {
    pub id: EntryId,
    pub activity: String,
    pub description: String,
}

impl SectionEntry for Experience {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "jobTitle" => &mut self.job_title,
            "company" => &mut self.company,
            "location" => &mut self.location,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl SectionEntry for Education {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            degree: String::new(),
            school: String::new(),
            location: String::new(),
            grad_date: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "degree" => &mut self.degree,
            "school" => &mut self.school,
            "location" => &mut self.location,
            "gradDate" => &mut self.grad_date,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl SectionEntry for Project {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            link: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "link" => &mut self.link,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl SectionEntry for Skill {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => {
                self.name = value.to_string();
                true
            }
            _ => false,
        }
    }
}

impl SectionEntry for Extracurricular {
    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            activity: String::new(),
            description: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "activity" => &mut self.activity,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// The whole resume. Section order is insertion order and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub extracurriculars: Vec<Extracurricular>,
}

impl Resume {
    /// Number of entries currently in a section.
    pub fn section_len(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Experience => self.experience.len(),
            SectionKind::Education => self.education.len(),
            SectionKind::Projects => self.projects.len(),
            SectionKind::Skills => self.skills.len(),
            SectionKind::Extracurriculars => self.extracurriculars.len(),
        }
    }

    /// Ids of a section, in display order.
    pub fn section_ids(&self, kind: SectionKind) -> Vec<&EntryId> {
        fn ids<E: SectionEntry>(entries: &[E]) -> Vec<&EntryId> {
            entries.iter().map(SectionEntry::id).collect()
        }
        match kind {
            SectionKind::Experience => ids(&self.experience),
            SectionKind::Education => ids(&self.education),
            SectionKind::Projects => ids(&self.projects),
            SectionKind::Skills => ids(&self.skills),
            SectionKind::Extracurriculars => ids(&self.extracurriculars),
        }
    }

    pub fn contains(&self, kind: SectionKind, id: &EntryId) -> bool {
        self.section_ids(kind).into_iter().any(|existing| existing == id)
    }

    /// Flattens the resume into plain text suitable as free-form input for the AI operations.
    ///
    /// Blank fields and empty sections are skipped.
    pub fn to_plain_text(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        let p = &self.personal_info;

        push_non_blank(&mut out, &p.full_name);
        let contact = [&p.email, &p.phone_number, &p.address, &p.link]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ");
        push_non_blank(&mut out, &contact);

        if !p.career_objective.trim().is_empty() {
            out.push(String::new());
            out.push("OBJECTIVE".to_string());
            out.push(p.career_objective.trim().to_string());
        }

        if !self.experience.is_empty() {
            out.push(String::new());
            out.push("EXPERIENCE".to_string());
            for exp in &self.experience {
                out.push(join_non_blank(&[&exp.job_title, &exp.company, &exp.location], ", "));
                push_non_blank(&mut out, &join_non_blank(&[&exp.start_date, &exp.end_date], " - "));
                push_description(&mut out, &exp.description);
            }
        }

        if !self.education.is_empty() {
            out.push(String::new());
            out.push("EDUCATION".to_string());
            for edu in &self.education {
                out.push(join_non_blank(
                    &[&edu.degree, &edu.school, &edu.location, &edu.grad_date],
                    ", ",
                ));
            }
        }

        if !self.projects.is_empty() {
            out.push(String::new());
            out.push("PROJECTS".to_string());
            for proj in &self.projects {
                out.push(join_non_blank(&[&proj.name, &proj.link], " - "));
                push_description(&mut out, &proj.description);
            }
        }

        let skills = self
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>();
        if !skills.is_empty() {
            out.push(String::new());
            out.push("SKILLS".to_string());
            out.push(skills.join(", "));
        }

        if !self.extracurriculars.is_empty() {
            out.push(String::new());
            out.push("EXTRACURRICULAR ACTIVITIES".to_string());
            for extra in &self.extracurriculars {
                push_non_blank(&mut out, &extra.activity);
                push_description(&mut out, &extra.description);
            }
        }

        out.join("\n").trim().to_string()
    }
}

fn push_non_blank(out: &mut Vec<String>, text: &str) {
    if !text.trim().is_empty() {
        out.push(text.trim().to_string());
    }
}

fn join_non_blank(parts: &[&String], sep: &str) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn push_description(out: &mut Vec<String>, description: &str) {
    for line in description.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let line = line.strip_prefix("- ").unwrap_or(line);
        out.push(format!("- {line}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_generate_is_unique_and_prefixed() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("id-"));
    }

    #[test]
    fn test_personal_info_set_field_by_wire_name() {
        let mut info = PersonalInfo::default();
        assert!(info.set_field("fullName", "Ada Lovelace"));
        assert!(info.set_field("careerObjective", "Compute things"));
        assert_eq!(info.full_name, "Ada Lovelace");
        assert_eq!(info.career_objective, "Compute things");
    }

    #[test]
    fn test_personal_info_unknown_field_is_rejected() {
        let mut info = PersonalInfo::default();
        assert!(!info.set_field("full_name", "x"));
        assert!(!info.set_field("nickname", "x"));
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn test_entry_id_is_not_a_settable_field() {
        let mut exp = Experience::blank(EntryId::from("exp1"));
        assert!(!exp.set_field("id", "hijacked"));
        assert_eq!(exp.id.as_str(), "exp1");
    }

    #[test]
    fn test_resume_serializes_with_camel_case_wire_names() {
        let mut resume = Resume::default();
        resume.experience.push(Experience::blank(EntryId::from("e1")));
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("phoneNumber").is_some());
        assert_eq!(json["experience"][0]["id"], "e1");
        assert!(json["experience"][0].get("jobTitle").is_some());
    }

    #[test]
    fn test_plain_text_skips_blank_fields_and_strips_markers() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
        let mut exp = Experience::blank(EntryId::from("e1"));
        exp.job_title = "Engineer".to_string();
        exp.company = "Acme".to_string();
        exp.description = "- Did X\n\n- Did Y".to_string();
        resume.experience.push(exp);

        let text = resume.to_plain_text();
        assert!(text.starts_with("Jane Doe\njane@example.com"));
        assert!(text.contains("EXPERIENCE\nEngineer, Acme\n- Did X\n- Did Y"));
        assert!(!text.contains("EDUCATION"));
        assert!(!text.contains("OBJECTIVE"));
    }
}
