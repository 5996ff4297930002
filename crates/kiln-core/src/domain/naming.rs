//! Pure string helpers for class names and namespaces.
//!
//! Input names may use `\`, `/` or the configured separator to denote
//! sub-namespaces; output always uses the configured separator.

use heck::{ToKebabCase, ToSnakeCase};

/// Separators accepted in user input regardless of configuration.
const INPUT_SEPARATORS: [char; 2] = ['\\', '/'];

/// `true` if `c` splits namespace segments.
pub fn is_namespace_separator(c: char, separator: char) -> bool {
    c == separator || INPUT_SEPARATORS.contains(&c)
}

/// `true` if the name is already absolute (leading separator marker).
pub fn is_absolute(name: &str, separator: char) -> bool {
    name.starts_with(|c| is_namespace_separator(c, separator))
}

/// Split a name into namespace segments, dropping empty ones.
pub fn split_segments(value: &str, separator: char) -> Vec<&str> {
    value
        .split(|c| is_namespace_separator(c, separator))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Join namespace parts with `separator`, normalising each part and
/// skipping empty ones so no redundant separators are produced.
pub fn join_namespace<'a>(parts: impl IntoIterator<Item = &'a str>, separator: char) -> String {
    parts
        .into_iter()
        .flat_map(|part| split_segments(part, separator))
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Convert one segment to an identifier-safe class name.
///
/// Every non-alphanumeric character is a word break; the first letter of
/// each word is upper-cased and the rest is kept as typed, so
/// `featured product` becomes `FeaturedProduct` and `FooDTO` is unchanged.
pub fn as_class_segment(segment: &str) -> String {
    segment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append `suffix` unless `value` already ends with it (case-sensitive).
pub fn add_suffix(value: &str, suffix: &str) -> String {
    if suffix.is_empty() || value.ends_with(suffix) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

/// Normalise a user-supplied short name (optionally with sub-namespaces)
/// into a class name relative to its namespace hint.
///
/// The suffix is only ever applied to the last segment.
pub fn as_class_name(value: &str, suffix: &str, separator: char) -> String {
    let mut segments: Vec<String> = split_segments(value, separator)
        .into_iter()
        .map(as_class_segment)
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(last) = segments.last_mut() {
        *last = add_suffix(last, suffix);
    }

    segments.join(&separator.to_string())
}

/// Qualify an absolute name verbatim: the marker is stripped, separators are
/// normalised and the suffix guarantee is applied to the last segment.
pub fn as_absolute_class_name(value: &str, suffix: &str, separator: char) -> String {
    let mut segments: Vec<String> = split_segments(value, separator)
        .into_iter()
        .map(str::to_string)
        .collect();

    if let Some(last) = segments.last_mut() {
        *last = add_suffix(last, suffix);
    }

    segments.join(&separator.to_string())
}

/// Last segment of a qualified name.
pub fn short_name(full_name: &str, separator: char) -> &str {
    full_name
        .rsplit_once(separator)
        .map_or(full_name, |(_, short)| short)
}

/// Everything before the last segment (empty for a bare name).
pub fn namespace_of(full_name: &str, separator: char) -> &str {
    full_name
        .rsplit_once(separator)
        .map_or("", |(namespace, _)| namespace)
}

/// `snake_case` variant of a class name, for template variables.
pub fn snake_variant(name: &str) -> String {
    name.to_snake_case()
}

/// `kebab-case` variant of a class name, for template variables.
pub fn kebab_variant(name: &str) -> String {
    name.to_kebab_case()
}
