//! Registration-time validation
//!
//! Every invariant of the model is checked here, once, before an endpoint
//! enters the registry. Nothing is mutated, so a failed check leaves the
//! registry untouched.
//!
//! ## Checks
//! 1. **Table**: non-empty schema table with unique floors
//! 2. **Request**: path placeholders match the path parameters; no duplicate
//!    query parameters or query variants
//! 3. **Versions**: catalog membership (strict mode), `since < until`, and
//!    every field bracket intersects the window in which its record is
//!    visible
//! 4. **Names**: no two fields visible in the same version resolve to the
//!    same name under any convention
//! 5. **Conditionals**: unique discriminator values and a discriminator
//!    property that is visible wherever the conditional is

use std::collections::{BTreeSet, HashSet};
use std::ops::Bound;

use strum::IntoEnumIterator;

use crate::conditional::{ConditionalNode, Discriminator};
use crate::endpoint::Endpoint;
use crate::error::{Result, SchemaError};
use crate::field::Field;
use crate::naming::NamingConvention;
use crate::schema::SchemaNode;
use crate::version::{SchemaVersion, VersionCatalog, VersionRange};

/// Validates endpoints against a version catalog
pub struct Validator<'a> {
    catalog: &'a VersionCatalog,
    strict_versions: bool,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a VersionCatalog, strict_versions: bool) -> Self {
        Self {
            catalog,
            strict_versions,
        }
    }

    /// Check every invariant of `endpoint`
    pub fn validate(&self, endpoint: &Endpoint) -> Result<()> {
        self.check_request(endpoint)?;
        let floors = self.check_table(endpoint)?;

        for entry in &endpoint.schemas {
            // The entry applies until the next floor takes over
            let until = floors
                .range((Bound::Excluded(entry.floor), Bound::Unbounded))
                .next()
                .copied();
            let window = VersionRange::new(entry.floor, until);
            let location = format!("{}@{}", endpoint.path, entry.floor);
            self.check_node(&entry.schema, &location, window, None)?;
        }

        Ok(())
    }

    fn check_request(&self, endpoint: &Endpoint) -> Result<()> {
        if !endpoint.path.starts_with('/') {
            return Err(SchemaError::invalid(&endpoint.path, "path must start with '/'"));
        }

        let placeholders = endpoint.path_placeholders();
        let declared: Vec<&str> = endpoint.path_parameters.iter().map(|p| p.name.as_str()).collect();
        if placeholders != declared {
            return Err(SchemaError::invalid(
                &endpoint.path,
                format!("path placeholders {:?} do not match path parameters {:?}", placeholders, declared),
            ));
        }

        let mut seen = HashSet::new();
        for parameter in endpoint.path_parameters.iter().chain(&endpoint.query_parameters) {
            if !seen.insert(parameter.name.as_str()) {
                return Err(SchemaError::invalid(
                    &endpoint.path,
                    format!("duplicate parameter '{}'", parameter.name),
                ));
            }
        }

        for (i, query) in endpoint.queries.iter().enumerate() {
            if endpoint.queries[..i].iter().any(|q| q.same_shape(query)) {
                return Err(SchemaError::invalid(
                    &endpoint.path,
                    format!("query variant {:?} declared more than once", query),
                ));
            }
        }

        Ok(())
    }

    fn check_table(&self, endpoint: &Endpoint) -> Result<BTreeSet<SchemaVersion>> {
        if endpoint.schemas.is_empty() {
            return Err(SchemaError::invalid(&endpoint.path, "schema table is empty"));
        }

        let mut floors = BTreeSet::new();
        for floor in endpoint.floors() {
            if !floors.insert(floor) {
                return Err(SchemaError::invalid(
                    &endpoint.path,
                    format!("schema table has two entries for {}", floor),
                ));
            }
            self.check_known(&endpoint.path, floor)?;
        }

        Ok(floors)
    }

    fn check_known(&self, location: &str, version: SchemaVersion) -> Result<()> {
        if self.strict_versions && !self.catalog.contains(version) {
            return Err(SchemaError::invalid(
                location,
                format!("version {} is not in the catalog", version),
            ));
        }
        Ok(())
    }

    fn check_node(
        &self,
        node: &SchemaNode,
        location: &str,
        window: VersionRange,
        enclosing: Option<&[Field]>,
    ) -> Result<()> {
        match node {
            SchemaNode::Primitive(_) => Ok(()),
            SchemaNode::Array(array) => {
                self.check_node(&array.items, &format!("{location}[]"), window, enclosing)
            }
            SchemaNode::Map(map) => {
                self.check_node(&map.values, &format!("{location}{{}}"), window, enclosing)
            }
            SchemaNode::Record(record) => self.check_members(&record.fields, location, window),
            SchemaNode::Conditional(conditional) => {
                self.check_conditional(conditional, location, window, enclosing)
            }
        }
    }

    /// Check the fields of one record (or one materialized variant) and
    /// descend into their types
    fn check_members(&self, fields: &[Field], location: &str, window: VersionRange) -> Result<()> {
        for field in fields {
            self.check_bracket(field, location, window)?;
        }
        self.check_names(fields, location, window)?;

        for field in fields {
            let nested = window.intersection(&field.bracket);
            let location = format!("{location}.{}", field.name.canonical);
            self.check_node(&field.ty, &location, nested, Some(fields))?;
        }

        Ok(())
    }

    /// A bracket must be well formed and overlap the window in which its
    /// record is visible, or the field would never be projected.
    fn check_bracket(&self, field: &Field, location: &str, window: VersionRange) -> Result<()> {
        let location = format!("{location}.{}", field.name.canonical);
        if field.name.canonical.is_empty() {
            return Err(SchemaError::invalid(location, "field has an empty name"));
        }

        let bracket = field.bracket;
        self.check_known(&location, bracket.since)?;
        if let Some(until) = bracket.until {
            self.check_known(&location, until)?;
        }

        if bracket.is_empty() {
            return Err(SchemaError::invalid(
                location,
                format!("bracket {} is empty: since must precede until", bracket),
            ));
        }
        if !bracket.intersects(&window) {
            return Err(SchemaError::invalid(
                location,
                format!("bracket {} lies outside the visible window {}", bracket, window),
            ));
        }

        Ok(())
    }

    /// Visible field sets only change at bracket boundaries, so checking the
    /// window start and every boundary inside the window covers all versions.
    fn check_names(&self, fields: &[Field], location: &str, window: VersionRange) -> Result<()> {
        if window.is_empty() {
            return Ok(());
        }

        let mut points = BTreeSet::from([window.since]);
        for field in fields {
            points.insert(field.bracket.since);
            points.extend(field.bracket.until);
        }

        for version in points.into_iter().filter(|v| window.contains(*v)) {
            let visible: Vec<&Field> = fields.iter().filter(|f| f.is_visible_at(version)).collect();
            for convention in NamingConvention::iter() {
                let mut names = HashSet::new();
                for field in &visible {
                    let name = field.resolve_name(convention);
                    if !names.insert(name.clone()) {
                        return Err(SchemaError::DuplicateFieldName {
                            location: location.to_string(),
                            name,
                            convention,
                            version,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn check_conditional(
        &self,
        conditional: &ConditionalNode,
        location: &str,
        window: VersionRange,
        enclosing: Option<&[Field]>,
    ) -> Result<()> {
        let mut keys = HashSet::new();
        for key in conditional.keys() {
            if !keys.insert(key) {
                return Err(SchemaError::invalid(
                    location,
                    format!("discriminator value '{}' is declared more than once", key),
                ));
            }
        }

        let property = conditional.discriminator.property();
        let holder = match &conditional.discriminator {
            Discriminator::EmbeddedChild { .. } => Some(conditional.shared.as_slice()),
            Discriminator::EmbeddedSibling { .. } => enclosing,
        };
        let holder = holder.ok_or_else(|| {
            SchemaError::invalid(location, format!("discriminator property '{}' not found", property))
        })?;
        check_discriminator(holder, property, location, window)?;

        self.check_members(&conditional.shared, location, window)?;
        for variant in &conditional.variants {
            let members: Vec<Field> = conditional
                .shared
                .iter()
                .chain(&variant.record.fields)
                .cloned()
                .collect();
            self.check_members(&members, &format!("{location}<{}>", variant.key), window)?;
        }

        Ok(())
    }
}

/// The discriminator must be visible in every version the conditional is.
///
/// Like name collisions, visibility only changes at bracket boundaries.
fn check_discriminator(holder: &[Field], property: &str, location: &str, window: VersionRange) -> Result<()> {
    let candidates: Vec<&Field> = holder.iter().filter(|f| f.name.serial() == property).collect();
    if candidates.is_empty() {
        return Err(SchemaError::invalid(
            location,
            format!("discriminator property '{}' not found", property),
        ));
    }
    if window.is_empty() {
        return Ok(());
    }

    let mut points = BTreeSet::from([window.since]);
    for field in &candidates {
        points.insert(field.bracket.since);
        points.extend(field.bracket.until);
    }

    for version in points.into_iter().filter(|v| window.contains(*v)) {
        if !candidates.iter().any(|f| f.is_visible_at(version)) {
            return Err(SchemaError::invalid(
                location,
                format!("discriminator property '{}' is missing in version {}", property, version),
            ));
        }
    }

    Ok(())
}
