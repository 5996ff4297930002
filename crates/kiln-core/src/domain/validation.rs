use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").expect("identifier pattern is valid")
});

/// Words that cannot be used as a namespace segment, compared
/// case-insensitively.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "as", "break", "case", "catch", "class", "const", "continue", "default",
    "do", "else", "enum", "extends", "false", "final", "finally", "fn", "for", "function", "if",
    "implements", "import", "interface", "namespace", "new", "null", "or", "package", "parent",
    "private", "protected", "public", "return", "self", "static", "switch", "this", "throw",
    "trait", "true", "try", "use", "var", "void", "while", "yield",
];

/// Centralized naming validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that every segment of `name` is a legal, non-reserved identifier.
    pub fn validate_class_name(
        name: &str,
        separator: char,
        custom_message: Option<&str>,
    ) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let legal = name
            .split(separator)
            .all(|segment| Self::is_identifier(segment) && !Self::is_reserved(segment));

        if legal {
            Ok(())
        } else {
            Err(DomainError::invalid_name(name, custom_message))
        }
    }

    pub fn is_identifier(segment: &str) -> bool {
        IDENTIFIER.is_match(segment)
    }

    pub fn is_reserved(segment: &str) -> bool {
        let lower = segment.to_lowercase();
        RESERVED_WORDS.contains(&lower.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_qualified_names() {
        assert!(DomainValidator::validate_class_name("App.Entity.FeaturedProduct", '.', None).is_ok());
        assert!(DomainValidator::validate_class_name("_Private.Über", '.', None).is_ok());
    }

    #[test]
    fn rejects_empty_segments() {
        let err = DomainValidator::validate_class_name("App..Foo", '.', None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn rejects_reserved_words_any_case() {
        assert!(DomainValidator::validate_class_name("App.Class", '.', None).is_err());
        assert!(DomainValidator::validate_class_name("App.Entity.NAMESPACE", '.', None).is_err());
    }

    #[test]
    fn rejects_leading_digit_and_symbols() {
        assert!(DomainValidator::validate_class_name("App.1Foo", '.', None).is_err());
        assert!(DomainValidator::validate_class_name("App.Fo-o", '.', None).is_err());
    }

    #[test]
    fn custom_message_is_surfaced() {
        let err =
            DomainValidator::validate_class_name("App.1Foo", '.', Some("Pick another name")).unwrap_err();
        assert_eq!(err.to_string(), "Pick another name");
    }

    #[test]
    fn generic_message_names_the_value() {
        let err = DomainValidator::validate_class_name("App.1Foo", '.', None).unwrap_err();
        assert!(err.to_string().contains("App.1Foo"));
    }

    #[test]
    fn blank_name_is_empty_error() {
        assert_eq!(
            DomainValidator::validate_class_name("  ", '.', None),
            Err(DomainError::EmptyName)
        );
    }
}
