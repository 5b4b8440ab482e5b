//! API Schema CLI
//!
//! Lists registered endpoints and prints version-specific projections.

use clap::{Parser, Subcommand};
use gw2_api_schemas::config::ApigenConfig;
use gw2_api_schemas::{definitions, Fingerprint, NamingConvention, ProjectedNode, Registry, SchemaVersion};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(about = "Inspect versioned API schemas")]
struct Cli {
    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered endpoints
    List,

    /// Show an endpoint's request metadata and schema table
    Show {
        /// Endpoint path, e.g. /TokenInfo
        path: String,
    },

    /// Print the projected schema as JSON
    Resolve {
        /// Endpoint path
        path: String,
        /// Schema version (defaults to the latest known version)
        #[arg(short, long)]
        version: Option<SchemaVersion>,
    },

    /// Print the top-level field names of a projection
    Fields {
        /// Endpoint path
        path: String,
        /// Schema version (defaults to the latest known version)
        #[arg(short, long)]
        version: Option<SchemaVersion>,
        /// Naming convention (defaults to `[export] convention`)
        #[arg(long)]
        convention: Option<NamingConvention>,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration to a file
    Init {
        #[arg(default_value = "apigen.toml")]
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApigenConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::List => {
            let registry = definitions::gw2_v2_with(&config)?;
            println!("📋 {} endpoints:", registry.len());
            for endpoint in registry.endpoints() {
                let floors: Vec<String> = endpoint.floors().map(|f| f.to_string()).collect();
                println!("  {} ({})", endpoint.path, floors.join(", "));
            }
            Ok(())
        }

        Commands::Show { path } => {
            let registry = definitions::gw2_v2_with(&config)?;
            let endpoint = registry.lookup(&path)?;

            println!("🔍 {}", endpoint.path);
            if !endpoint.summary.is_empty() {
                println!("  {}", endpoint.summary);
            }
            println!("  Cache: {:?}", endpoint.cache);
            println!("  Localized: {}", endpoint.localized);
            if !endpoint.security.is_empty() {
                let scopes: Vec<String> = endpoint.security.iter().map(|s| s.to_string()).collect();
                println!("  Security: {}", scopes.join(", "));
            }
            for parameter in &endpoint.path_parameters {
                println!("  Path parameter: {} ({})", parameter.name, parameter.ty);
            }
            for parameter in &endpoint.query_parameters {
                println!("  Query parameter: {} ({})", parameter.name, parameter.ty);
            }
            if !endpoint.queries.is_empty() {
                println!("  Queries: {:?}", endpoint.queries);
            }
            println!("  Supported: {}", endpoint.supported_range());
            println!();
            println!("  Schema table:");
            for entry in &endpoint.schemas {
                let projected = registry.resolve(&endpoint.path, entry.floor)?;
                println!(
                    "    {} -> {} [{}]",
                    entry.floor,
                    entry.schema.kind(),
                    Fingerprint::of(&projected)?.short()
                );
            }
            Ok(())
        }

        Commands::Resolve { path, version } => {
            let registry = definitions::gw2_v2_with(&config)?;
            let projected = resolve(&registry, &path, version)?;
            println!("{}", config.render_json(&projected)?);
            Ok(())
        }

        Commands::Fields {
            path,
            version,
            convention,
        } => {
            let registry = definitions::gw2_v2_with(&config)?;
            let projected = resolve(&registry, &path, version)?;
            let convention = convention.unwrap_or(config.export.convention);

            println!("📄 {} @ {} (floor {})", projected.endpoint, projected.requested, projected.floor);
            match top_level_record(&projected.root) {
                Some(record) => {
                    for field in &record.fields {
                        let mut flags = Vec::new();
                        if field.optional {
                            flags.push("optional");
                        }
                        if field.deprecated {
                            flags.push("deprecated");
                        }
                        if flags.is_empty() {
                            println!("  {}", field.resolve_name(convention));
                        } else {
                            println!("  {} ({})", field.resolve_name(convention), flags.join(", "));
                        }
                    }
                }
                None => println!("  (no record at the top level)"),
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init { path } => {
                ApigenConfig::default().save(&path)?;
                println!("✅ Wrote default configuration to {}", path);
                Ok(())
            }
        },
    }
}

fn resolve(
    registry: &Registry,
    path: &str,
    version: Option<SchemaVersion>,
) -> gw2_api_schemas::Result<gw2_api_schemas::ProjectedSchema> {
    match version {
        Some(version) => registry.resolve(path, version),
        None => registry.resolve_latest(path),
    }
}

/// The record at the root, looking through arrays
fn top_level_record(node: &ProjectedNode) -> Option<&gw2_api_schemas::ProjectedRecord> {
    match node {
        ProjectedNode::Record(record) => Some(record),
        ProjectedNode::Array { items, .. } => top_level_record(items),
        _ => None,
    }
}
