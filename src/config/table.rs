//! Insertion-ordered state table.
//!
//! Query operations report states in declaration order, so the table
//! keeps its entries in a `Vec` instead of a hash map and round-trips
//! through serde as an ordinary JSON map without reordering keys.

use crate::config::StateDef;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Map from state identifier to [`StateDef`], preserving declaration
/// order.
///
/// Inserting an already-declared identifier replaces its definition but
/// keeps its original position, matching map semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(String, StateDef)>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up a state definition by identifier.
    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, def)| def)
    }

    /// Whether `name` is a declared state.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Declare a state, or replace the definition of an existing one
    /// without moving it.
    pub fn insert(&mut self, name: impl Into<String>, def: StateDef) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = def,
            None => self.entries.push((name, def)),
        }
    }

    /// Mutable access to a state definition, declaring the state with no
    /// transitions if it is new.
    pub fn entry(&mut self, name: impl Into<String>) -> &mut StateDef {
        let name = name.into();
        let position = match self.entries.iter().position(|(key, _)| *key == name) {
            Some(position) => position,
            None => {
                self.entries.push((name, StateDef::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    /// State identifiers in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StateTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, def) in &self.entries {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

struct StateTableVisitor;

impl<'de> Visitor<'de> for StateTableVisitor {
    type Value = StateTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of state identifiers to state definitions")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = StateTable::new();
        while let Some((name, def)) = access.next_entry::<String, StateDef>()? {
            table.insert(name, def);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StateTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(event: &str, target: &str) -> StateDef {
        let mut def = StateDef::default();
        def.transitions.insert(event.to_string(), target.to_string());
        def
    }

    #[test]
    fn insert_preserves_declaration_order() {
        let mut table = StateTable::new();
        table.insert("gamma", StateDef::default());
        table.insert("alpha", StateDef::default());
        table.insert("beta", StateDef::default());

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn reinsert_replaces_without_moving() {
        let mut table = StateTable::new();
        table.insert("a", StateDef::default());
        table.insert("b", StateDef::default());
        table.insert("a", def("go", "b"));

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(table.get("a").unwrap().transitions.contains_key("go"));
    }

    #[test]
    fn get_and_contains_find_declared_states() {
        let mut table = StateTable::new();
        table.insert("only", StateDef::default());

        assert!(table.contains("only"));
        assert!(!table.contains("missing"));
        assert!(table.get("only").is_some());
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn entry_declares_new_states_in_place() {
        let mut table = StateTable::new();
        table
            .entry("fresh")
            .transitions
            .insert("go".to_string(), "fresh".to_string());

        assert_eq!(table.len(), 1);
        assert!(table.get("fresh").unwrap().transitions.contains_key("go"));

        // A second entry call must not redeclare.
        table
            .entry("fresh")
            .transitions
            .insert("stay".to_string(), "fresh".to_string());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("fresh").unwrap().transitions.len(), 2);
    }

    #[test]
    fn deserializes_json_map_in_key_order() {
        let table: StateTable = serde_json::from_str(
            r#"{
                "zulu": { "transitions": {} },
                "alpha": { "transitions": { "go": "zulu" } },
                "mike": {}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
        assert_eq!(
            table.get("alpha").unwrap().transitions.get("go"),
            Some(&"zulu".to_string())
        );
        assert!(table.get("mike").unwrap().transitions.is_empty());
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let mut table = StateTable::new();
        table.insert("c", def("x", "b"));
        table.insert("b", StateDef::default());
        table.insert("a", def("y", "c"));

        let json = serde_json::to_string(&table).unwrap();
        let back: StateTable = serde_json::from_str(&json).unwrap();

        assert_eq!(table, back);
        let names: Vec<&str> = back.names().collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }
}
