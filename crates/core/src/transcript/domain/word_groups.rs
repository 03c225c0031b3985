use crate::shared::language::Language;

/// Split a segment's text into display word groups.
///
/// Latin-script languages break wherever an ASCII capital letter starts a
/// new token; other scripts break on whitespace, falling back to the whole
/// text as a single group.
pub fn split_word_groups(text: &str, language: Language) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if language.uses_latin_script() {
        split_on_capitals(text)
    } else {
        split_on_whitespace(text)
    }
}

fn split_on_capitals(text: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_uppercase() && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

fn split_on_whitespace(text: &str) -> Vec<String> {
    let groups: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if groups.is_empty() {
        vec![text.to_string()]
    } else {
        groups
    }
}
