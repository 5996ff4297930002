//! Element kinds and their configured namespace/suffix.
//!
//! The set of kinds is closed; per-kind lookups are a `match` with optional
//! overrides loaded from configuration.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A kind of generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Controller,
    Entity,
    Repository,
    Command,
    Event,
    Listener,
    Middleware,
    Service,
    Test,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        Self::Controller,
        Self::Entity,
        Self::Repository,
        Self::Command,
        Self::Event,
        Self::Listener,
        Self::Middleware,
        Self::Service,
        Self::Test,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Command => "command",
            Self::Event => "event",
            Self::Listener => "listener",
            Self::Middleware => "middleware",
            Self::Service => "service",
            Self::Test => "test",
        }
    }

    /// Namespace (below the root namespace) used when nothing is configured.
    pub const fn default_namespace(self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Entity => "Entity",
            Self::Repository => "Repository",
            Self::Command => "Command",
            Self::Event => "Event",
            Self::Listener => "EventListener",
            Self::Middleware => "Middleware",
            Self::Service => "Service",
            Self::Test => "Tests",
        }
    }

    pub const fn default_suffix(self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Entity => "",
            Self::Repository => "Repository",
            Self::Command => "Command",
            Self::Event => "Event",
            Self::Listener => "Listener",
            Self::Middleware => "Middleware",
            Self::Service => "",
            Self::Test => "Test",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownElement(s.to_string()))
    }
}

/// Per-kind configuration override. `None` keeps the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Namespace/suffix lookup for every [`ElementKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementTable {
    overrides: BTreeMap<ElementKind, ElementOverride>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, kind: ElementKind, element: ElementOverride) -> Self {
        self.overrides.insert(kind, element);
        self
    }

    pub fn namespace_for(&self, kind: ElementKind) -> &str {
        self.overrides
            .get(&kind)
            .and_then(|o| o.namespace.as_deref())
            .unwrap_or(kind.default_namespace())
            .trim()
    }

    pub fn suffix_for(&self, kind: ElementKind) -> &str {
        self.overrides
            .get(&kind)
            .and_then(|o| o.suffix.as_deref())
            .unwrap_or(kind.default_suffix())
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Controller".parse::<ElementKind>().unwrap(), ElementKind::Controller);
        assert_eq!(" test ".parse::<ElementKind>().unwrap(), ElementKind::Test);
        assert!(matches!(
            "widget".parse::<ElementKind>(),
            Err(DomainError::UnknownElement(_))
        ));
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let table = ElementTable::new();
        assert_eq!(table.namespace_for(ElementKind::Controller), "Controller");
        assert_eq!(table.suffix_for(ElementKind::Controller), "Controller");
        assert_eq!(table.suffix_for(ElementKind::Entity), "");
    }

    #[test]
    fn override_replaces_only_given_fields() {
        let table = ElementTable::new().with_override(
            ElementKind::Controller,
            ElementOverride {
                namespace: Some("Http.Controller".into()),
                suffix: None,
            },
        );
        assert_eq!(table.namespace_for(ElementKind::Controller), "Http.Controller");
        assert_eq!(table.suffix_for(ElementKind::Controller), "Controller");
        assert_eq!(table.namespace_for(ElementKind::Entity), "Entity");
    }

    #[test]
    fn round_trips_every_kind_name() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
        }
    }
}
