//! Endpoint Registry
//!
//! Registration happens on a [`RegistryBuilder`]. Sealing it yields the
//! read-only [`Registry`], which can be shared across threads without locks.
//! Once sealed, the builder rejects further registrations.

use indexmap::IndexMap;
use tracing::{debug, info, trace, warn};

use crate::config::ApigenConfig;
use crate::endpoint::Endpoint;
use crate::error::{Result, SchemaError};
use crate::resolve::{resolve, ProjectedSchema};
use crate::validation::Validator;
use crate::version::{SchemaVersion, VersionCatalog};

/// The registration phase of a registry
pub struct RegistryBuilder {
    catalog: VersionCatalog,
    /// Reject versions that are not in the catalog
    strict_versions: bool,
    endpoints: IndexMap<String, Endpoint>,
    sealed: bool,
}

impl RegistryBuilder {
    /// Create a builder that rejects unknown versions
    pub fn new(catalog: VersionCatalog) -> Self {
        Self {
            catalog,
            strict_versions: true,
            endpoints: IndexMap::new(),
            sealed: false,
        }
    }

    /// Create a builder from the `[catalog]` and `[registry]` sections
    pub fn from_config(config: &ApigenConfig) -> Result<Self> {
        let catalog = VersionCatalog::from_config(config)?;
        Ok(Self::new(catalog).strict_versions(config.registry.strict_versions))
    }

    pub fn strict_versions(mut self, strict: bool) -> Self {
        self.strict_versions = strict;
        self
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Validate and add an endpoint.
    ///
    /// Either the whole endpoint is added or the registry is left unchanged.
    pub fn register(&mut self, mut endpoint: Endpoint) -> Result<()> {
        if self.sealed {
            return Err(SchemaError::RegistryClosed);
        }
        if self.endpoints.contains_key(&endpoint.path) {
            return Err(SchemaError::DuplicatePath(endpoint.path));
        }

        let validator = Validator::new(&self.catalog, self.strict_versions);
        if let Err(e) = validator.validate(&endpoint) {
            warn!(path = %endpoint.path, error = %e, "rejected endpoint");
            return Err(e);
        }

        endpoint.schemas.sort_by_key(|entry| entry.floor);
        debug!(
            path = %endpoint.path,
            schemas = endpoint.schemas.len(),
            "registered endpoint"
        );
        self.endpoints.insert(endpoint.path.clone(), endpoint);

        Ok(())
    }

    /// Get a registered endpoint by path
    pub fn lookup(&self, path: &str) -> Result<&Endpoint> {
        self.endpoints
            .get(path)
            .ok_or_else(|| SchemaError::NotFound(path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Freeze the registry.
    ///
    /// Moves every endpoint into the returned [`Registry`]; afterwards this
    /// builder only answers `RegistryClosed`.
    pub fn seal(&mut self) -> Result<Registry> {
        if self.sealed {
            return Err(SchemaError::RegistryClosed);
        }
        self.sealed = true;

        let endpoints = std::mem::take(&mut self.endpoints);
        info!(endpoints = endpoints.len(), "sealed registry");

        Ok(Registry {
            catalog: self.catalog.clone(),
            endpoints,
        })
    }
}

/// A sealed, immutable endpoint registry
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: VersionCatalog,
    endpoints: IndexMap<String, Endpoint>,
}

impl Registry {
    pub fn builder(catalog: VersionCatalog) -> RegistryBuilder {
        RegistryBuilder::new(catalog)
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// Get an endpoint by path
    pub fn lookup(&self, path: &str) -> Result<&Endpoint> {
        self.endpoints
            .get(path)
            .ok_or_else(|| SchemaError::NotFound(path.to_string()))
    }

    /// All endpoints in registration order
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Project the schema of `path` for `version`
    pub fn resolve(&self, path: &str, version: SchemaVersion) -> Result<ProjectedSchema> {
        let endpoint = self.lookup(path)?;
        trace!(path, %version, "resolving");
        resolve(endpoint, version)
    }

    /// Project the schema of `path` for the newest catalog version
    pub fn resolve_latest(&self, path: &str) -> Result<ProjectedSchema> {
        self.resolve(path, self.catalog.latest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::naming::NamingConvention;
    use crate::schema::{Primitive, RecordNode};

    fn builder() -> RegistryBuilder {
        RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap())
    }

    fn build_endpoint() -> Endpoint {
        Endpoint::new("/Build")
            .summary("Returns the current build ID.")
            .schema(
                RecordNode::new("Information about the current game build.")
                    .field(Field::new("ID", Primitive::Integer, "the current build ID").camel_case("id")),
            )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut builder = builder();
        builder.register(build_endpoint()).unwrap();

        assert_eq!(builder.len(), 1);
        assert_eq!(builder.lookup("/Build").unwrap().summary, "Returns the current build ID.");
        assert!(matches!(builder.lookup("/Nope"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_path() {
        let mut builder = builder();
        builder.register(build_endpoint()).unwrap();

        match builder.register(build_endpoint()) {
            Err(SchemaError::DuplicatePath(path)) => assert_eq!(path, "/Build"),
            other => panic!("Expected DuplicatePath, got {:?}", other),
        }
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_seal_closes_builder() {
        let mut builder = builder();
        builder.register(build_endpoint()).unwrap();

        let registry = builder.seal().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(builder.is_sealed());

        let later = Endpoint::new("/Later").schema(RecordNode::new("Later."));
        assert!(matches!(builder.register(later), Err(SchemaError::RegistryClosed)));
        assert!(matches!(builder.seal(), Err(SchemaError::RegistryClosed)));
    }

    #[test]
    fn test_schema_table_sorted_on_register() {
        let late = SchemaVersion::parse("2019-05-22").unwrap();
        let endpoint = Endpoint::new("/TokenInfo")
            .schema_at(late, RecordNode::new("New."))
            .schema(RecordNode::new("Old."));

        let mut builder = builder();
        builder.register(endpoint).unwrap();
        let floors: Vec<_> = builder.lookup("/TokenInfo").unwrap().floors().collect();
        assert_eq!(floors, vec![SchemaVersion::Baseline, late]);
    }

    #[test]
    fn test_endpoints_keep_registration_order() {
        let mut builder = builder();
        for path in ["/Worlds", "/Build", "/Account"] {
            builder.register(Endpoint::new(path).schema(RecordNode::new("Something."))).unwrap();
        }

        let registry = builder.seal().unwrap();
        let paths: Vec<_> = registry.endpoints().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/Worlds", "/Build", "/Account"]);
    }

    #[test]
    fn test_name_collisions_rejected_under_any_config() {
        let mut config = ApigenConfig::default();
        config.registry.strict_versions = false;

        let twins = Endpoint::new("/Twins").schema(
            RecordNode::new("Twins.")
                .field(Field::new("ID", Primitive::Integer, "first"))
                .field(Field::new("ID", Primitive::Integer, "second")),
        );
        let mut builder = RegistryBuilder::from_config(&config).unwrap();
        match builder.register(twins) {
            Err(SchemaError::DuplicateFieldName { name, convention, .. }) => {
                assert_eq!(name, "ID");
                assert_eq!(convention, NamingConvention::Canonical);
            }
            other => panic!("Expected DuplicateFieldName, got {:?}", other),
        }

        // Distinct canonical names, same wire name
        let wire = Endpoint::new("/Wire").schema(
            RecordNode::new("Wire.")
                .field(Field::new("ItemID", Primitive::Integer, "the item"))
                .field(Field::new("ItemId", Primitive::Integer, "the item, again")),
        );
        match builder.register(wire) {
            Err(SchemaError::DuplicateFieldName { name, convention, .. }) => {
                assert_eq!(name, "itemid");
                assert_eq!(convention, NamingConvention::Serial);
            }
            other => panic!("Expected DuplicateFieldName, got {:?}", other),
        }
        assert!(builder.is_empty());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
