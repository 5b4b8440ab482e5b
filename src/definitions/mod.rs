//! API Definitions
//!
//! Endpoint data for the Guild Wars 2 API, expressed through the schema model.
//! Definitions register into a caller-provided [`RegistryBuilder`], so the
//! version catalog and validation settings stay under the caller's control.

pub mod v2;

use crate::config::ApigenConfig;
use crate::error::Result;
use crate::registry::{Registry, RegistryBuilder};
use crate::version::VersionCatalog;

/// Build and seal a registry holding the v2 API with default settings
pub fn gw2_v2() -> Result<Registry> {
    let mut builder = RegistryBuilder::new(VersionCatalog::gw2_v2()?);
    v2::register_all(&mut builder)?;
    builder.seal()
}

/// Build and seal a registry holding the v2 API using configured settings
pub fn gw2_v2_with(config: &ApigenConfig) -> Result<Registry> {
    let mut builder = RegistryBuilder::from_config(config)?;
    v2::register_all(&mut builder)?;
    builder.seal()
}
