//! Schema node types
//!
//! A [`SchemaNode`] is a closed, recursive description of a response shape.
//! Children are owned, so a node can never contain itself and every tree has
//! finite depth.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::conditional::ConditionalNode;
use crate::error::{Result, SchemaError};
use crate::field::Field;

/// Scalar value kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Primitive {
    String,
    Integer,
    Decimal,
    Boolean,
}

/// A node in a schema tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaNode {
    Primitive(Primitive),
    Record(RecordNode),
    Array(ArrayNode),
    Map(MapNode),
    Conditional(ConditionalNode),
}

impl SchemaNode {
    /// An array whose elements are never absent
    pub fn array(items: impl Into<SchemaNode>) -> Self {
        SchemaNode::Array(ArrayNode {
            items: Box::new(items.into()),
            nullable_items: false,
        })
    }

    /// A map keyed by a primitive
    pub fn map(keys: Primitive, values: impl Into<SchemaNode>) -> Self {
        SchemaNode::Map(MapNode {
            keys,
            values: Box::new(values.into()),
        })
    }

    /// Short name of the node kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Primitive(_) => "primitive",
            SchemaNode::Record(_) => "record",
            SchemaNode::Array(_) => "array",
            SchemaNode::Map(_) => "map",
            SchemaNode::Conditional(_) => "conditional",
        }
    }
}

impl From<Primitive> for SchemaNode {
    fn from(primitive: Primitive) -> Self {
        SchemaNode::Primitive(primitive)
    }
}

impl From<RecordNode> for SchemaNode {
    fn from(record: RecordNode) -> Self {
        SchemaNode::Record(record)
    }
}

impl From<ArrayNode> for SchemaNode {
    fn from(array: ArrayNode) -> Self {
        SchemaNode::Array(array)
    }
}

impl From<MapNode> for SchemaNode {
    fn from(map: MapNode) -> Self {
        SchemaNode::Map(map)
    }
}

impl From<ConditionalNode> for SchemaNode {
    fn from(conditional: ConditionalNode) -> Self {
        SchemaNode::Conditional(conditional)
    }
}

/// An object with an ordered list of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordNode {
    pub description: String,
    pub fields: Vec<Field>,
}

impl RecordNode {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Find a field by canonical name
    pub fn get(&self, canonical: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.canonical == canonical)
    }
}

/// A homogeneous list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayNode {
    pub items: Box<SchemaNode>,
    /// Whether individual elements may be null
    pub nullable_items: bool,
}

impl ArrayNode {
    pub fn builder() -> ArrayBuilder {
        ArrayBuilder::default()
    }
}

/// Builder for [`ArrayNode`]; the element node is required
#[derive(Debug, Default)]
pub struct ArrayBuilder {
    items: Option<SchemaNode>,
    nullable_items: bool,
}

impl ArrayBuilder {
    pub fn items(mut self, items: impl Into<SchemaNode>) -> Self {
        self.items = Some(items.into());
        self
    }

    pub fn nullable_items(mut self, nullable: bool) -> Self {
        self.nullable_items = nullable;
        self
    }

    pub fn build(self) -> Result<ArrayNode> {
        let items = self
            .items
            .ok_or_else(|| SchemaError::invalid("array", "array node requires an element node"))?;
        Ok(ArrayNode {
            items: Box::new(items),
            nullable_items: self.nullable_items,
        })
    }
}

/// A dictionary from primitive keys to values of one node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub keys: Primitive,
    pub values: Box<SchemaNode>,
}

impl MapNode {
    pub fn builder(keys: Primitive) -> MapBuilder {
        MapBuilder { keys, values: None }
    }
}

/// Builder for [`MapNode`]; the value node is required
#[derive(Debug)]
pub struct MapBuilder {
    keys: Primitive,
    values: Option<SchemaNode>,
}

impl MapBuilder {
    pub fn values(mut self, values: impl Into<SchemaNode>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn build(self) -> Result<MapNode> {
        let values = self
            .values
            .ok_or_else(|| SchemaError::invalid("map", "map node requires a value node"))?;
        Ok(MapNode {
            keys: self.keys,
            values: Box::new(values),
        })
    }
}
