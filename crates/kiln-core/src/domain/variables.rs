use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Template variables, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    /// Path of the generated file, relative to the project root.
    pub const RELATIVE_PATH: &'static str = "relative_path";
    /// Short class name of the generated class.
    pub const CLASS_NAME: &'static str = "class_name";
    /// Namespace of the generated class.
    pub const NAMESPACE: &'static str = "namespace";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Variables) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_overrides_existing_keys() {
        let mut base = Variables::new().with("a", "1").with("b", "2");
        base.extend(Variables::new().with("b", "3"));
        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
    }

    #[test]
    fn iterates_in_key_order() {
        let vars: Variables = [("z", "1"), ("a", "2")].into_iter().collect();
        let keys: Vec<_> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "z"]);
    }
}
