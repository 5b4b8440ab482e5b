//! Field Name Resolution
//!
//! Every field has one canonical identifier (PascalCase, e.g. `GuildLeader`).
//! Consumers ask for the name under a [`NamingConvention`]; an explicit
//! override for that convention wins, otherwise the name is derived from the
//! canonical identifier.
//!
//! Derivations are pure functions of the canonical identifier:
//!
//! | convention   | derivation                | `GuildLeader`  |
//! |--------------|---------------------------|----------------|
//! | `canonical`  | identity                  | `GuildLeader`  |
//! | `serial`     | lowercase                 | `guildleader`  |
//! | `camel_case` | lowercase first character | `guildLeader`  |
//! | `snake_case` | snake case                | `guild_leader` |
//!
//! The wire derivation is deliberately naive; fields whose wire name differs
//! carry a `serial` override (`guild_leader`).

use std::collections::BTreeMap;

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An output naming convention
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NamingConvention {
    /// The canonical identifier itself
    Canonical,
    /// The property name in the wire format
    Serial,
    /// Identifiers that start with a lowercase letter
    CamelCase,
    /// Lowercase words separated by underscores
    SnakeCase,
}

impl NamingConvention {
    /// Derive a name for this convention from a canonical identifier
    pub fn derive(&self, canonical: &str) -> String {
        match self {
            NamingConvention::Canonical => canonical.to_string(),
            NamingConvention::Serial => canonical.to_lowercase(),
            NamingConvention::CamelCase => lower_first(canonical),
            NamingConvention::SnakeCase => canonical.to_snake_case(),
        }
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A field's canonical identifier plus per-convention overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldName {
    pub canonical: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<NamingConvention, String>,
}

impl FieldName {
    pub fn new(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Set an explicit name for one convention
    pub fn with_override(mut self, convention: NamingConvention, name: impl Into<String>) -> Self {
        self.overrides.insert(convention, name.into());
        self
    }

    /// Resolve the name under a convention
    pub fn resolve(&self, convention: NamingConvention) -> String {
        match self.overrides.get(&convention) {
            Some(name) => name.clone(),
            None => convention.derive(&self.canonical),
        }
    }

    /// The wire-format name
    pub fn serial(&self) -> String {
        self.resolve(NamingConvention::Serial)
    }
}

impl From<&str> for FieldName {
    fn from(canonical: &str) -> Self {
        FieldName::new(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_derivations() {
        let name = FieldName::new("GuildLeader");
        assert_eq!(name.resolve(NamingConvention::Canonical), "GuildLeader");
        assert_eq!(name.resolve(NamingConvention::Serial), "guildleader");
        assert_eq!(name.resolve(NamingConvention::CamelCase), "guildLeader");
        assert_eq!(name.resolve(NamingConvention::SnakeCase), "guild_leader");
    }

    #[test]
    fn test_overrides_win() {
        let name = FieldName::new("ID").with_override(NamingConvention::CamelCase, "id");
        assert_eq!(name.resolve(NamingConvention::CamelCase), "id");
        // No override for the wire format, so the derivation applies
        assert_eq!(name.serial(), "id");

        let wvw = FieldName::new("WvWRank")
            .with_override(NamingConvention::CamelCase, "wvwRank")
            .with_override(NamingConvention::Serial, "wvw_rank");
        assert_eq!(wvw.resolve(NamingConvention::CamelCase), "wvwRank");
        assert_eq!(wvw.serial(), "wvw_rank");
        assert_eq!(wvw.resolve(NamingConvention::Canonical), "WvWRank");
    }

    #[test]
    fn test_convention_parsing() {
        assert_eq!("camel_case".parse::<NamingConvention>().unwrap(), NamingConvention::CamelCase);
        assert_eq!(NamingConvention::Serial.to_string(), "serial");
        assert!("kebab".parse::<NamingConvention>().is_err());
    }

    #[test]
    fn test_empty_canonical() {
        assert_eq!(NamingConvention::CamelCase.derive(""), "");
    }
}
