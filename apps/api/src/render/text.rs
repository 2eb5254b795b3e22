//! Text shaping shared by every template.

use crate::render::document::{ContactItem, Link};

/// Splits a multi-line description into bullet items.
///
/// Blank lines are dropped and one leading "- " marker is stripped. The stored text
/// is left as is; this only shapes what is displayed.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(|line| line.strip_prefix("- ").unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a link for a non-empty value. The scheme is never stored, so a
/// protocol-relative href is produced.
pub fn link(value: &str) -> Option<Link> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(Link {
        text: value.to_string(),
        href: format!("//{value}"),
    })
}

pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

/// Contact items for the non-empty plain fields followed by the optional link.
pub fn contact_items<S: AsRef<str>>(plain: &[S], link_value: &str) -> Vec<ContactItem> {
    let mut items: Vec<ContactItem> = plain
        .iter()
        .filter_map(|value| non_blank(value.as_ref()))
        .map(|text| ContactItem::Text { text })
        .collect();
    if let Some(link) = link(link_value) {
        items.push(ContactItem::Link { link });
    }
    items
}

/// "start - end", collapsing to whichever side is present.
pub fn date_range(start: &str, end: &str) -> Option<String> {
    match (non_blank(start), non_blank(end)) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_drop_empty_lines_and_strip_marker() {
        assert_eq!(description_bullets("A\n- B\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_bullets_drop_whitespace_only_and_bare_markers() {
        assert_eq!(description_bullets("  \n- \nX\r\n"), vec!["X"]);
    }

    #[test]
    fn test_bullets_strip_only_one_marker() {
        assert_eq!(description_bullets("- - nested"), vec!["- nested"]);
    }

    #[test]
    fn test_bullets_keep_dash_without_space() {
        assert_eq!(description_bullets("-tight"), vec!["-tight"]);
    }

    #[test]
    fn test_bullets_of_empty_description() {
        assert!(description_bullets("").is_empty());
    }

    #[test]
    fn test_link_prepends_protocol_relative_scheme() {
        let l = link("github.com/jane").unwrap();
        assert_eq!(l.href, "//github.com/jane");
        assert_eq!(l.text, "github.com/jane");
        assert!(link("   ").is_none());
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range("Jan 2020", "Present").as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(date_range("Jan 2020", "").as_deref(), Some("Jan 2020"));
        assert_eq!(date_range("", ""), None);
    }

    #[test]
    fn test_contact_items_skip_blank_fields() {
        let items = contact_items(&["a@b.c", "", "Berlin"], "");
        assert_eq!(items.len(), 2);
    }
}
