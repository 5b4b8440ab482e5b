//! Version Resolution
//!
//! Projects an endpoint's schema for one requested version:
//!
//! 1. pick the schema table entry with the greatest floor `<=` the version
//! 2. drop every record field whose bracket does not contain the version
//! 3. keep everything else structurally as declared
//!
//! Deprecated fields are kept and flagged. Conditionals keep every variant;
//! only their fields are filtered. Projection is a pure function of the
//! endpoint and the version.

use serde::Serialize;

use crate::conditional::{ConditionalNode, Discriminator};
use crate::endpoint::Endpoint;
use crate::error::{Result, SchemaError};
use crate::field::Field;
use crate::naming::{FieldName, NamingConvention};
use crate::schema::{Primitive, RecordNode, SchemaNode};
use crate::version::SchemaVersion;

/// A version-specific view of an endpoint's response schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedSchema {
    pub endpoint: String,
    /// The version that was asked for
    pub requested: SchemaVersion,
    /// Floor of the schema table entry that was selected
    pub floor: SchemaVersion,
    pub root: ProjectedNode,
}

/// A node of a projected schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectedNode {
    Primitive(Primitive),
    Record(ProjectedRecord),
    Array {
        items: Box<ProjectedNode>,
        nullable_items: bool,
    },
    Map {
        keys: Primitive,
        values: Box<ProjectedNode>,
    },
    Conditional(ProjectedConditional),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRecord {
    pub description: String,
    pub fields: Vec<ProjectedField>,
}

impl ProjectedRecord {
    /// Find a field by canonical name
    pub fn get(&self, canonical: &str) -> Option<&ProjectedField> {
        self.fields.iter().find(|f| f.name.canonical == canonical)
    }

    /// Field names under a convention, in order
    pub fn names(&self, convention: NamingConvention) -> Vec<String> {
        self.fields.iter().map(|f| f.resolve_name(convention)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedField {
    pub name: FieldName,
    #[serde(rename = "type")]
    pub ty: ProjectedNode,
    pub description: String,
    pub optional: bool,
    pub deprecated: bool,
}

impl ProjectedField {
    pub fn resolve_name(&self, convention: NamingConvention) -> String {
        self.name.resolve(convention)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedVariant {
    pub key: String,
    pub record: ProjectedRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedConditional {
    pub description: String,
    pub discriminator: Discriminator,
    pub shared: Vec<ProjectedField>,
    pub variants: Vec<ProjectedVariant>,
}

impl ProjectedConditional {
    /// Materialize a variant with the shared fields prepended
    pub fn variant(&self, key: &str) -> Result<ProjectedRecord> {
        let variant = self
            .variants
            .iter()
            .find(|v| v.key == key)
            .ok_or_else(|| SchemaError::UnknownVariant(key.to_string()))?;
        Ok(ProjectedRecord {
            description: variant.record.description.clone(),
            fields: self.shared.iter().chain(&variant.record.fields).cloned().collect(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.key.as_str())
    }
}

impl ProjectedNode {
    pub fn as_record(&self) -> Option<&ProjectedRecord> {
        match self {
            ProjectedNode::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_conditional(&self) -> Option<&ProjectedConditional> {
        match self {
            ProjectedNode::Conditional(conditional) => Some(conditional),
            _ => None,
        }
    }

    /// Element node of an array
    pub fn items(&self) -> Option<&ProjectedNode> {
        match self {
            ProjectedNode::Array { items, .. } => Some(items),
            _ => None,
        }
    }
}

/// Project `endpoint` for `version`
pub fn resolve(endpoint: &Endpoint, version: SchemaVersion) -> Result<ProjectedSchema> {
    let entry = endpoint
        .schemas
        .iter()
        .filter(|entry| entry.floor <= version)
        .max_by_key(|entry| entry.floor)
        .ok_or_else(|| SchemaError::NoSchemaForVersion {
            endpoint: endpoint.path.clone(),
            version,
        })?;

    Ok(ProjectedSchema {
        endpoint: endpoint.path.clone(),
        requested: version,
        floor: entry.floor,
        root: project_node(&entry.schema, version),
    })
}

fn project_node(node: &SchemaNode, version: SchemaVersion) -> ProjectedNode {
    match node {
        SchemaNode::Primitive(primitive) => ProjectedNode::Primitive(*primitive),
        SchemaNode::Record(record) => ProjectedNode::Record(project_record(record, version)),
        SchemaNode::Array(array) => ProjectedNode::Array {
            items: Box::new(project_node(&array.items, version)),
            nullable_items: array.nullable_items,
        },
        SchemaNode::Map(map) => ProjectedNode::Map {
            keys: map.keys,
            values: Box::new(project_node(&map.values, version)),
        },
        SchemaNode::Conditional(conditional) => {
            ProjectedNode::Conditional(project_conditional(conditional, version))
        }
    }
}

fn project_record(record: &RecordNode, version: SchemaVersion) -> ProjectedRecord {
    ProjectedRecord {
        description: record.description.clone(),
        fields: project_fields(&record.fields, version),
    }
}

fn project_fields(fields: &[Field], version: SchemaVersion) -> Vec<ProjectedField> {
    fields
        .iter()
        .filter(|field| field.is_visible_at(version))
        .map(|field| ProjectedField {
            name: field.name.clone(),
            ty: project_node(&field.ty, version),
            description: field.description.clone(),
            optional: field.optional,
            deprecated: field.deprecated,
        })
        .collect()
}

fn project_conditional(conditional: &ConditionalNode, version: SchemaVersion) -> ProjectedConditional {
    ProjectedConditional {
        description: conditional.description.clone(),
        discriminator: conditional.discriminator.clone(),
        shared: project_fields(&conditional.shared, version),
        variants: conditional
            .variants
            .iter()
            .map(|variant| ProjectedVariant {
                key: variant.key.clone(),
                record: project_record(&variant.record, version),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::RecordNode;

    fn v(tag: &str) -> SchemaVersion {
        SchemaVersion::parse(tag).unwrap()
    }

    fn account() -> Endpoint {
        Endpoint::new("/Account").schema(
            RecordNode::new("Information about a player's account.")
                .field(Field::new("Name", Primitive::String, "the unique account name"))
                .field(
                    Field::new("LastModified", Primitive::String, "when the account last changed")
                        .serial_name("last_modified")
                        .since(v("2019-02-21")),
                )
                .field(Field::new("Legacy", Primitive::Integer, "an old field").deprecated().until(v("2019-12-19"))),
        )
    }

    fn field_names(schema: &ProjectedSchema) -> Vec<String> {
        schema.root.as_record().unwrap().names(NamingConvention::Canonical)
    }

    #[test]
    fn test_fields_follow_their_brackets() {
        let endpoint = account();
        let early = resolve(&endpoint, v("2019-01-01")).unwrap();
        assert_eq!(field_names(&early), vec!["Name", "Legacy"]);

        let exact = resolve(&endpoint, v("2019-02-21")).unwrap();
        assert_eq!(field_names(&exact), vec!["Name", "LastModified", "Legacy"]);

        let late = resolve(&endpoint, v("2019-12-19")).unwrap();
        assert_eq!(field_names(&late), vec!["Name", "LastModified"]);
    }

    #[test]
    fn test_deprecated_fields_are_flagged_not_removed() {
        let schema = resolve(&account(), SchemaVersion::Baseline).unwrap();
        let legacy = schema.root.as_record().unwrap().get("Legacy").unwrap();
        assert!(legacy.deprecated);
    }

    #[test]
    fn test_no_schema_before_first_floor() {
        let endpoint = Endpoint::new("/New").schema_at(v("2019-05-22"), RecordNode::new("New."));
        match resolve(&endpoint, v("2019-05-21")) {
            Err(SchemaError::NoSchemaForVersion { endpoint, version }) => {
                assert_eq!(endpoint, "/New");
                assert_eq!(version, v("2019-05-21"));
            }
            other => panic!("Expected NoSchemaForVersion, got {:?}", other),
        }
        assert_eq!(resolve(&endpoint, v("2019-05-22")).unwrap().floor, v("2019-05-22"));
    }

    #[test]
    fn test_nested_records_are_filtered() {
        let since = v("2019-12-19");
        let endpoint = Endpoint::new("/Professions").schema(
            RecordNode::new("A profession.").field(Field::new(
                "Weapons",
                SchemaNode::map(
                    Primitive::String,
                    RecordNode::new("A weapon.")
                        .field(Field::new("Flags", SchemaNode::array(Primitive::String), "flags"))
                        .field(Field::new("Palette", Primitive::Integer, "palette").since(since)),
                ),
                "weapons",
            )),
        );

        let weapon_fields = |version| {
            let schema = resolve(&endpoint, version).unwrap();
            let weapons = schema.root.as_record().unwrap().get("Weapons").unwrap().ty.clone();
            match weapons {
                ProjectedNode::Map { keys, values } => {
                    assert_eq!(keys, Primitive::String);
                    values.as_record().unwrap().names(NamingConvention::Canonical)
                }
                other => panic!("Expected Map, got {:?}", other),
            }
        };

        assert_eq!(weapon_fields(SchemaVersion::Baseline), vec!["Flags"]);
        assert_eq!(weapon_fields(since), vec!["Flags", "Palette"]);
    }

    #[test]
    fn test_conditional_keeps_every_variant() {
        let facts = ConditionalNode::new("A fact.", Discriminator::child())
            .shared_field(Field::new("Type", Primitive::String, "the fact type"))
            .shared_field(Field::new("Icon", Primitive::String, "the icon").optional().since(v("2019-05-22")))
            .with_variant("Buff", RecordNode::new("A buff.").field(Field::new("Status", Primitive::String, "status")))
            .with_variant("NoData", RecordNode::new("Nothing."));
        let endpoint = Endpoint::new("/Facts").schema(SchemaNode::array(facts));

        let schema = resolve(&endpoint, SchemaVersion::Baseline).unwrap();
        let conditional = schema.root.items().unwrap().as_conditional().unwrap();
        assert_eq!(conditional.keys().collect::<Vec<_>>(), vec!["Buff", "NoData"]);
        assert_eq!(conditional.shared.len(), 1);

        let buff = conditional.variant("Buff").unwrap();
        assert_eq!(buff.names(NamingConvention::Canonical), vec!["Type", "Status"]);
        assert!(matches!(conditional.variant("Staff"), Err(SchemaError::UnknownVariant(_))));

        let later = resolve(&endpoint, v("2019-05-22")).unwrap();
        let buff = later.root.items().unwrap().as_conditional().unwrap().variant("Buff").unwrap();
        assert_eq!(buff.names(NamingConvention::Canonical), vec!["Type", "Icon", "Status"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let endpoint = account();
        let first = resolve(&endpoint, v("2019-06-01")).unwrap();
        let second = resolve(&endpoint, v("2019-06-01")).unwrap();
        assert_eq!(first, second);
    }
}
