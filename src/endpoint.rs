//! Endpoint definitions
//!
//! An [`Endpoint`] carries request metadata (security, query variants,
//! parameters, caching) and a schema table: response schemas indexed by the
//! first version (floor) they apply to.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::schema::{Primitive, SchemaNode};
use crate::version::{SchemaVersion, VersionRange};

/// API key permission
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TokenScope {
    Account,
    Builds,
    Characters,
    Guilds,
    Inventories,
    Progression,
    Pvp,
    Tradingpost,
    Unlocks,
    Wallet,
}

/// Request shape supported by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QueryVariant {
    /// `?id=`
    ById,
    /// `?ids=`; `all` permits `?ids=all`
    ByIds { all: bool },
    /// `?page=&page_size=`
    ByPage,
}

impl QueryVariant {
    /// Variants that only differ in flags count as the same request shape
    pub fn same_shape(&self, other: &QueryVariant) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A named request parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Primitive,
    pub description: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Primitive, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            description: description.into(),
        }
    }
}

/// How long responses may be cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    #[default]
    None,
    For(Duration),
    /// The response never changes
    Forever,
}

impl CachePolicy {
    pub fn minutes(minutes: u64) -> Self {
        CachePolicy::For(Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn hours(hours: u64) -> Self {
        CachePolicy::For(Duration::from_secs(hours.saturating_mul(3600)))
    }
}

/// One row of an endpoint's schema table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaTableEntry {
    /// First version this schema applies to
    pub floor: SchemaVersion,
    pub schema: SchemaNode,
}

/// An addressable API endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,
    pub summary: String,
    pub cache: CachePolicy,
    pub localized: bool,
    /// Required scopes; a caller must hold all of them
    pub security: BTreeSet<TokenScope>,
    pub path_parameters: Vec<Parameter>,
    pub query_parameters: Vec<Parameter>,
    pub queries: Vec<QueryVariant>,
    /// Ordered by floor once registered
    pub schemas: Vec<SchemaTableEntry>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            summary: String::new(),
            cache: CachePolicy::None,
            localized: false,
            security: BTreeSet::new(),
            path_parameters: Vec::new(),
            query_parameters: Vec::new(),
            queries: Vec::new(),
            schemas: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    pub fn security(mut self, scopes: impl IntoIterator<Item = TokenScope>) -> Self {
        self.security.extend(scopes);
        self
    }

    pub fn path_parameter(mut self, name: impl Into<String>, ty: Primitive, description: impl Into<String>) -> Self {
        self.path_parameters.push(Parameter::new(name, ty, description));
        self
    }

    pub fn query_parameter(mut self, name: impl Into<String>, ty: Primitive, description: impl Into<String>) -> Self {
        self.query_parameters.push(Parameter::new(name, ty, description));
        self
    }

    pub fn queries(mut self, queries: impl IntoIterator<Item = QueryVariant>) -> Self {
        self.queries.extend(queries);
        self
    }

    /// Schema served from the baseline onwards
    pub fn schema(self, schema: impl Into<SchemaNode>) -> Self {
        self.schema_at(SchemaVersion::Baseline, schema)
    }

    /// Schema served from `floor` onwards
    pub fn schema_at(mut self, floor: SchemaVersion, schema: impl Into<SchemaNode>) -> Self {
        self.schemas.push(SchemaTableEntry {
            floor,
            schema: schema.into(),
        });
        self
    }

    /// Versions the endpoint serves: from its earliest floor onwards
    pub fn supported_range(&self) -> VersionRange {
        let since = self
            .schemas
            .iter()
            .map(|entry| entry.floor)
            .min()
            .unwrap_or(SchemaVersion::Baseline);
        VersionRange::starting_at(since)
    }

    /// Schema table floors in table order
    pub fn floors(&self) -> impl Iterator<Item = SchemaVersion> + '_ {
        self.schemas.iter().map(|entry| entry.floor)
    }

    pub fn supports_query(&self, query: QueryVariant) -> bool {
        self.queries.contains(&query)
    }

    /// True if `held` contains every required scope
    pub fn is_authorized(&self, held: &BTreeSet<TokenScope>) -> bool {
        self.security.is_subset(held)
    }

    /// Names of the `:Name` placeholders in the path
    pub fn path_placeholders(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }
}
