//! Record fields and their version brackets

use serde::{Deserialize, Serialize};

use crate::naming::{FieldName, NamingConvention};
use crate::schema::SchemaNode;
use crate::version::{SchemaVersion, VersionRange};

/// A member of a record or of a conditional's shared fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: FieldName,
    #[serde(rename = "type")]
    pub ty: SchemaNode,
    pub description: String,
    #[serde(default)]
    pub optional: bool,
    /// Deprecated fields stay in projections; the flag is metadata only
    #[serde(default)]
    pub deprecated: bool,
    /// Versions in which the field is present
    pub bracket: VersionRange,
}

impl Field {
    pub fn new(name: impl Into<FieldName>, ty: impl Into<SchemaNode>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: description.into(),
            optional: false,
            deprecated: false,
            bracket: VersionRange::ALL,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// First version in which the field is present (inclusive)
    pub fn since(mut self, version: SchemaVersion) -> Self {
        self.bracket.since = version;
        self
    }

    /// First version in which the field is no longer present (exclusive)
    pub fn until(mut self, version: SchemaVersion) -> Self {
        self.bracket.until = Some(version);
        self
    }

    /// Explicit wire-format name
    pub fn serial_name(mut self, name: impl Into<String>) -> Self {
        self.name = self.name.with_override(NamingConvention::Serial, name);
        self
    }

    /// Explicit lowercase-leading name
    pub fn camel_case(mut self, name: impl Into<String>) -> Self {
        self.name = self.name.with_override(NamingConvention::CamelCase, name);
        self
    }

    pub fn is_visible_at(&self, version: SchemaVersion) -> bool {
        self.bracket.contains(version)
    }

    pub fn resolve_name(&self, convention: NamingConvention) -> String {
        self.name.resolve(convention)
    }
}

/// Name of `field` under `convention`
pub fn resolve_field_name(field: &Field, convention: NamingConvention) -> String {
    field.resolve_name(convention)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Primitive;

    #[test]
    fn test_field_defaults() {
        let field = Field::new("Name", Primitive::String, "the account name");
        assert!(!field.optional);
        assert!(!field.deprecated);
        assert_eq!(field.bracket, VersionRange::ALL);
        assert!(field.is_visible_at(SchemaVersion::Baseline));
    }

    #[test]
    fn test_inclusive_lower_bound() {
        let since = SchemaVersion::parse("2019-02-21").unwrap();
        let field = Field::new("LastModified", Primitive::String, "last change").since(since);

        assert!(!field.is_visible_at(SchemaVersion::parse("2019-01-01").unwrap()));
        assert!(field.is_visible_at(since));
        assert!(field.is_visible_at(SchemaVersion::parse("2020-01-01").unwrap()));
    }

    #[test]
    fn test_exclusive_upper_bound() {
        let until = SchemaVersion::parse("2019-12-19").unwrap();
        let field = Field::new("Achievement", Primitive::Integer, "legacy").until(until);

        assert!(field.is_visible_at(SchemaVersion::Baseline));
        assert!(!field.is_visible_at(until));
    }

    #[test]
    fn test_naming_overrides() {
        let field = Field::new("GuildLeader", SchemaNode::array(Primitive::String), "guilds led")
            .serial_name("guild_leader")
            .optional();
        assert_eq!(resolve_field_name(&field, NamingConvention::Serial), "guild_leader");
        assert_eq!(resolve_field_name(&field, NamingConvention::CamelCase), "guildLeader");
        assert!(field.optional);
    }
}
