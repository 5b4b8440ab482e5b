//! Resolution Tests
//!
//! End-to-end checks of registration and version resolution against the v2
//! definitions and small hand-built endpoints.

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use gw2_api_schemas::{
    definitions, ConditionalNode, Discriminator, Endpoint, Field, Fingerprint, NamingConvention, Primitive,
    ProjectedNode, RecordNode, Registry, RegistryBuilder, SchemaError, SchemaNode, SchemaVersion, VersionCatalog,
};

fn v(tag: &str) -> SchemaVersion {
    SchemaVersion::parse(tag).unwrap()
}

fn registry() -> Registry {
    definitions::gw2_v2().unwrap()
}

fn top_level_names(registry: &Registry, path: &str, version: SchemaVersion, convention: NamingConvention) -> Vec<String> {
    let projected = registry.resolve(path, version).unwrap();
    let record = match &projected.root {
        ProjectedNode::Record(record) => record,
        ProjectedNode::Array { items, .. } => items.as_record().unwrap(),
        other => panic!("Expected record root, got {:?}", other),
    };
    record.names(convention)
}

// =============================================================================
// Schema Tables
// =============================================================================

#[test]
fn test_token_info_baseline() {
    let registry = registry();
    let names = top_level_names(&registry, "/TokenInfo", SchemaVersion::Baseline, NamingConvention::Serial);
    assert_eq!(names, vec!["id", "name", "permissions"]);
}

#[test]
fn test_token_info_switches_schema_at_floor() {
    let registry = registry();

    let before = registry.resolve("/TokenInfo", v("2019-05-21")).unwrap();
    assert_eq!(before.floor, SchemaVersion::Baseline);

    let after = registry.resolve("/TokenInfo", v("2019-05-22")).unwrap();
    assert_eq!(after.floor, v("2019-05-22"));
    assert_eq!(
        top_level_names(&registry, "/TokenInfo", v("2019-05-22"), NamingConvention::Serial),
        vec!["id", "name", "permissions", "type", "expires_at", "issued_at", "urls"]
    );
    assert_eq!(
        top_level_names(&registry, "/TokenInfo", v("2019-05-22"), NamingConvention::CamelCase),
        vec!["id", "name", "permissions", "type", "expiresAt", "issuedAt", "urls"]
    );

    let later = registry.resolve("/TokenInfo", v("2020-01-01")).unwrap();
    assert_eq!(later.floor, v("2019-05-22"));

    let record = later.root.as_record().unwrap();
    assert!(record.get("ExpiresAt").unwrap().optional);
    assert!(record.get("IssuedAt").unwrap().optional);
    assert!(record.get("URLs").unwrap().optional);
    assert!(!record.get("Type").unwrap().optional);
}

#[test]
fn test_latest_uses_newest_catalog_version() {
    let registry = registry();
    let latest = registry.resolve_latest("/TokenInfo").unwrap();
    assert_eq!(latest.requested, v("2019-12-19"));
    assert_eq!(latest.floor, v("2019-05-22"));
}

// =============================================================================
// Field Brackets
// =============================================================================

#[test]
fn test_since_is_inclusive() {
    let registry = registry();
    let at = |tag: &str| top_level_names(&registry, "/Account", v(tag), NamingConvention::Canonical);

    assert!(!at("2019-02-20").contains(&"LastModified".to_string()));
    assert!(at("2019-02-21").contains(&"LastModified".to_string()));
    assert!(at("2019-12-19").contains(&"LastModified".to_string()));
}

#[test]
fn test_visibility_is_monotonic_within_bracket() {
    let since = v("2019-03-22");
    let until = v("2019-05-22");
    let endpoint = Endpoint::new("/Window").schema(
        RecordNode::new("Window.")
            .field(Field::new("Always", Primitive::String, "always there"))
            .field(Field::new("Sometimes", Primitive::String, "in a window").since(since).until(until)),
    );

    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap());
    builder.register(endpoint).unwrap();
    let registry = builder.seal().unwrap();

    for version in registry.catalog().iter() {
        let names = top_level_names(&registry, "/Window", version, NamingConvention::Canonical);
        let visible = names.contains(&"Sometimes".to_string());
        assert_eq!(visible, since <= version && version < until, "at {}", version);
    }
}

#[test]
fn test_fields_added_in_later_versions() {
    let registry = registry();
    let before = top_level_names(&registry, "/Professions", v("2019-12-18"), NamingConvention::Serial);
    let after = top_level_names(&registry, "/Professions", v("2019-12-19"), NamingConvention::Serial);

    assert!(!before.contains(&"code".to_string()));
    assert!(after.contains(&"code".to_string()));
    assert!(after.contains(&"skills_by_palette".to_string()));
    assert_eq!(after.len(), before.len() + 2);
}

#[test]
fn test_deprecated_field_is_still_resolved() {
    let registry = registry();
    let titles = registry.resolve_latest("/Titles").unwrap();
    let achievement = titles.root.as_record().unwrap().get("Achievement").unwrap();
    assert!(achievement.deprecated);
    assert!(achievement.optional);
}

// =============================================================================
// Conditionals
// =============================================================================

#[test]
fn test_item_details_variants() {
    let registry = registry();
    let items = registry.resolve_latest("/Items").unwrap();
    let details = items.root.as_record().unwrap().get("Details").unwrap();
    let conditional = details.ty.as_conditional().unwrap();

    assert_eq!(conditional.discriminator, Discriminator::sibling());
    assert!(conditional.keys().any(|k| k == "Armor"));

    let armor = conditional.variant("Armor").unwrap();
    assert_eq!(armor.get("WeightClass").unwrap().resolve_name(NamingConvention::Serial), "weight_class");

    match conditional.variant("Staff") {
        Err(SchemaError::UnknownVariant(key)) => assert_eq!(key, "Staff"),
        other => panic!("Expected UnknownVariant, got {:?}", other),
    }
}

#[test]
fn test_trait_facts_share_fields() {
    let registry = registry();
    let traits = registry.resolve_latest("/Traits").unwrap();
    let facts = traits.root.as_record().unwrap().get("Facts").unwrap();
    let conditional = facts.ty.items().unwrap().as_conditional().unwrap();

    let buff = conditional.variant("Buff").unwrap();
    let names = buff.names(NamingConvention::Serial);
    assert_eq!(names[..4].to_vec(), vec!["type", "icon", "text", "status"]);
}

#[test]
fn test_nullable_inventory_slots() {
    let registry = registry();
    let inventory = registry.resolve_latest("/Characters/:ID/Inventory").unwrap();
    let bags = inventory.root.as_record().unwrap().get("Bags").unwrap();
    let bag = bags.ty.items().unwrap().as_record().unwrap();

    match &bag.get("Inventory").unwrap().ty {
        ProjectedNode::Array { nullable_items, .. } => assert!(*nullable_items),
        other => panic!("Expected Array, got {:?}", other),
    }
}

// =============================================================================
// Registration
// =============================================================================

fn conditional_with_duplicate_key() -> Endpoint {
    let details = ConditionalNode::new("Details.", Discriminator::sibling())
        .with_variant("Armor", RecordNode::new("Armor.").field(Field::new("Defense", Primitive::Integer, "defense")))
        .with_variant("Armor", RecordNode::new("Armor again."));

    Endpoint::new("/Items").schema(
        RecordNode::new("An item.")
            .field(Field::new("Type", Primitive::String, "the item type"))
            .field(Field::new("Details", details, "details")),
    )
}

#[test]
fn test_failed_registration_leaves_registry_unchanged() {
    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap());
    builder
        .register(Endpoint::new("/Build").schema(RecordNode::new("Build.").field(Field::new("ID", Primitive::Integer, "id"))))
        .unwrap();

    let result = builder.register(conditional_with_duplicate_key());
    assert!(matches!(result, Err(SchemaError::InvalidSchema { .. })));
    assert_eq!(builder.len(), 1);
    assert!(matches!(builder.lookup("/Items"), Err(SchemaError::NotFound(_))));
}

#[test]
fn test_serial_name_collision_is_rejected() {
    let endpoint = Endpoint::new("/Clash").schema(
        RecordNode::new("Clash.")
            .field(Field::new("ItemID", Primitive::Integer, "the item"))
            .field(Field::new("ItemId", Primitive::Integer, "the item, again")),
    );

    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap());
    match builder.register(endpoint) {
        Err(SchemaError::DuplicateFieldName { name, convention, .. }) => {
            assert_eq!(name, "itemid");
            assert_eq!(convention, NamingConvention::Serial);
        }
        other => panic!("Expected DuplicateFieldName, got {:?}", other),
    }
}

#[test]
fn test_same_name_in_disjoint_brackets() {
    let cut = v("2019-05-22");
    let endpoint = Endpoint::new("/Renamed").schema(
        RecordNode::new("Renamed.")
            .field(Field::new("Value", Primitive::Integer, "old").until(cut))
            .field(Field::new("Value", Primitive::String, "new").since(cut)),
    );

    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap());
    builder.register(endpoint).unwrap();
    let registry = builder.seal().unwrap();

    let old = registry.resolve("/Renamed", SchemaVersion::Baseline).unwrap();
    let new = registry.resolve("/Renamed", cut).unwrap();
    assert_eq!(old.root.as_record().unwrap().get("Value").unwrap().description, "old");
    assert_eq!(new.root.as_record().unwrap().get("Value").unwrap().description, "new");
}

#[test]
fn test_sealed_builder_rejects_registration() {
    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2().unwrap());
    let _registry = builder.seal().unwrap();

    let result = builder.register(Endpoint::new("/Late").schema(Primitive::String));
    assert!(matches!(result, Err(SchemaError::RegistryClosed)));
    assert!(matches!(builder.seal(), Err(SchemaError::RegistryClosed)));
}

#[test]
fn test_unknown_endpoint() {
    let registry = registry();
    assert!(matches!(
        registry.resolve("/Nope", SchemaVersion::Baseline),
        Err(SchemaError::NotFound(_))
    ));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_resolution_is_idempotent() {
    let registry = registry();
    for endpoint in registry.endpoints() {
        for version in registry.catalog().iter() {
            let first = registry.resolve(&endpoint.path, version).unwrap();
            let second = registry.resolve(&endpoint.path, version).unwrap();
            assert_eq!(first, second);
            assert_eq!(Fingerprint::of(&first).unwrap(), Fingerprint::of(&second).unwrap());
        }
    }
}

#[test]
fn test_every_endpoint_names_are_unique_under_every_convention() {
    let registry = registry();
    for endpoint in registry.endpoints() {
        let projected = registry.resolve_latest(&endpoint.path).unwrap();
        let record = match &projected.root {
            ProjectedNode::Record(record) => record,
            _ => continue,
        };
        for convention in NamingConvention::iter() {
            let mut names = record.names(convention);
            let count = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), count, "{} under {}", endpoint.path, convention);
        }
    }
}

#[test]
fn test_registry_is_shared_across_threads() {
    let registry = registry();
    let expected = registry.resolve_latest("/Items").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| registry.resolve_latest("/Items").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_wrapped_schemas_resolve() {
    let registry = registry();
    let dyes = registry.resolve_latest("/Account/Dyes").unwrap();
    assert_eq!(dyes.root.items(), Some(&ProjectedNode::Primitive(Primitive::Integer)));

    let exchange = registry.lookup("/Commerce/Exchange").unwrap();
    assert!(matches!(exchange.schemas[0].schema, SchemaNode::Array(_)));
}
