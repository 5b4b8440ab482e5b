//! GW2 API Schemas
//!
//! A versioned type model for the Guild Wars 2 HTTP API, plus the resolution
//! engine that projects an endpoint's response schema for one schema version.
//!
//! ## Features
//!
//! - **Versioned Fields**: Every field carries a half-open `[since, until)` bracket
//! - **Schema Tables**: Endpoints may replace their whole schema at a version floor
//! - **Conditionals**: Discriminated unions with shared fields and keyed variants
//! - **Naming Conventions**: Canonical, serial, camelCase and snake_case field names
//! - **Sealed Registry**: Registration is validated up front, lookups are read-only
//!
//! ## Architecture
//!
//! ```text
//! VersionCatalog ─┐
//!                 ├─> RegistryBuilder ──register()──> Validator
//! definitions ────┘        │
//!                          └──seal()──> Registry ──resolve()──> ProjectedSchema
//!                                                                     │
//!                                                                     └─> Fingerprint
//! ```

pub mod checksum;
pub mod conditional;
pub mod config;
pub mod definitions;
pub mod endpoint;
pub mod error;
pub mod field;
pub mod naming;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod validation;
pub mod version;

pub use checksum::Fingerprint;
pub use conditional::{ConditionalNode, Discriminator, Variant};
pub use config::ApigenConfig;
pub use endpoint::{CachePolicy, Endpoint, Parameter, QueryVariant, TokenScope};
pub use error::{Result, SchemaError};
pub use field::{resolve_field_name, Field};
pub use naming::{FieldName, NamingConvention};
pub use registry::{Registry, RegistryBuilder};
pub use resolve::{resolve, ProjectedNode, ProjectedRecord, ProjectedSchema};
pub use schema::{ArrayNode, MapNode, Primitive, RecordNode, SchemaNode};
pub use version::{SchemaVersion, VersionCatalog, VersionRange};
