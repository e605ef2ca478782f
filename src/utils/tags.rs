use crate::models::Tag;

/// Split a comma-joined tag string into tags, dropping blanks.
pub fn parse_string_to_tag_array(raw: Option<&str>) -> Vec<Tag> {
    raw.unwrap_or_default()
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(Tag::new)
        .collect()
}

/// Join tag names with commas; `None` when there is nothing to join.
pub fn join_tag_names(tags: &[Tag]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(","))
}
