//! Captured path parameters.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Parameter name → captured value, in template order.
///
/// Only produced by a successful match. The default handler receives
/// `None` instead, so an empty `MatchArgs` always means "matched a template
/// without parameters".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchArgs {
    entries: Vec<(String, String)>,
}

impl MatchArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a capture. A repeated name keeps its first position and takes
    /// the new value.
    pub fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MatchArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = MatchArgs::new();
        for (k, v) in iter {
            args.insert(k.into(), v.into());
        }
        args
    }
}

impl Serialize for MatchArgs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
