// vim: tw=80
//! Labelled results collected by the fixture drivers.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// An insertion-ordered list of `(label, value)` pairs.
///
/// Labels describe the call that produced each value, for example
/// `dependency_one.one_hundred()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    entries: Vec<(String, Value)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `label`.  A repeated label replaces the earlier
    /// value but keeps its position.
    pub fn push<L, V>(&mut self, label: L, value: V)
        where L: Into<String>, V: Into<Value>
    {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries.iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S)
        -> Result<S::Ok, S::Error>
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
