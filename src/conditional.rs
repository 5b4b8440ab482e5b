//! Tagged unions
//!
//! A [`ConditionalNode`] stands for one of several record shapes. Which one
//! applies is decided by a discriminator property in the response data; this
//! crate only maps discriminator values to variant records.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::field::Field;
use crate::schema::RecordNode;

/// Default discriminator property
pub const DEFAULT_DISCRIMINATOR: &str = "type";

/// Where the discriminator lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum Discriminator {
    /// A property of the enclosing record, next to the conditional
    EmbeddedSibling { property: String },
    /// One of the conditional's own shared fields
    EmbeddedChild { property: String },
}

impl Discriminator {
    pub fn sibling() -> Self {
        Discriminator::EmbeddedSibling {
            property: DEFAULT_DISCRIMINATOR.to_string(),
        }
    }

    pub fn child() -> Self {
        Discriminator::EmbeddedChild {
            property: DEFAULT_DISCRIMINATOR.to_string(),
        }
    }

    /// Wire name of the discriminator property
    pub fn property(&self) -> &str {
        match self {
            Discriminator::EmbeddedSibling { property } | Discriminator::EmbeddedChild { property } => property,
        }
    }
}

/// A variant of a conditional, keyed by its discriminator value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub key: String,
    pub record: RecordNode,
}

/// A discriminated union of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalNode {
    pub description: String,
    pub discriminator: Discriminator,
    /// Fields common to every variant
    pub shared: Vec<Field>,
    pub variants: Vec<Variant>,
}

impl ConditionalNode {
    pub fn new(description: impl Into<String>, discriminator: Discriminator) -> Self {
        Self {
            description: description.into(),
            discriminator,
            shared: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn shared_field(mut self, field: Field) -> Self {
        self.shared.push(field);
        self
    }

    pub fn shared_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.shared.extend(fields);
        self
    }

    /// Add a variant for a discriminator value
    pub fn with_variant(mut self, key: impl Into<String>, record: RecordNode) -> Self {
        self.variants.push(Variant {
            key: key.into(),
            record,
        });
        self
    }

    /// Discriminator values in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.key.as_str())
    }

    /// The declared variant record, without shared fields
    pub fn get(&self, key: &str) -> Option<&RecordNode> {
        self.variants.iter().find(|v| v.key == key).map(|v| &v.record)
    }

    /// Materialize a variant: shared fields followed by the variant's own
    pub fn variant(&self, key: &str) -> Result<RecordNode> {
        let record = self
            .get(key)
            .ok_or_else(|| SchemaError::UnknownVariant(key.to_string()))?;
        let fields = self.shared.iter().chain(&record.fields).cloned().collect();
        Ok(RecordNode {
            description: record.description.clone(),
            fields,
        })
    }
}
