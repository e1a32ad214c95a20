//! maillage: command-line interface for maillage-core
//!
//! Loads a mesh dataset into memory and answers the resolver queries from
//! the terminal: statistics, lookups, children, breadcrumbs, nearest
//! siblings and ranked search.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ maillage stats
//!
//! - Ancestors of Dijon
//!   $ maillage breadcrumb 21231
//!
//! - Six nearest communes, as JSON
//!   $ maillage --json near 21231 --secondary
//!
//! - Départements matching a term
//!   $ maillage search "saone" --level departement
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample dataset bundled with `maillage-core`
//! and caches a binary version next to it for subsequent runs. Use
//! `--data <path>` (or `MAILLAGE_DATA`) for another export and
//! `--config <path>` (or `MAILLAGE_CONFIG`) to tune limits.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use maillage_core::api::{MeshUnitView, ProximityView, SearchHitView};
use maillage_core::loader::default_dataset_path;
use maillage_core::{MemoryStore, MeshResolver, MeshUnit, ResolverConfig};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_unit(unit: &MeshUnit) {
    println!("{:<12} {:<6} {}", unit.niveau, unit.code, unit.libelle);
}

fn print_units(units: &[MeshUnit], json: bool) -> anyhow::Result<()> {
    if json {
        let views: Vec<_> = units.iter().map(MeshUnitView).collect();
        return print_json(&views);
    }
    for unit in units {
        print_unit(unit);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging()?;

    let config = match &args.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading resolver config");
            ResolverConfig::from_path(path)
                .with_context(|| format!("reading config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };

    let data = args.data.unwrap_or_else(default_dataset_path);
    let store = MemoryStore::load_from_path(&data)
        .with_context(|| format!("loading dataset {}", data.display()))?;
    tracing::info!(path = %data.display(), units = store.len(), "dataset ready");
    let resolver = MeshResolver::with_config(store, config);
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = resolver.stats()?;
            if json {
                print_json(&stats)?;
            } else {
                println!("Mesh statistics:");
                println!("  Regions: {}", stats.regions);
                println!("  Départements: {}", stats.departements);
                println!("  Communes: {}", stats.communes);
            }
        }

        Commands::Unit { code, level } => match resolver.unit(&code, level)? {
            Some(unit) if json => print_json(&MeshUnitView(&unit))?,
            Some(unit) => {
                println!("Libellé: {}", unit.libelle);
                println!("Code: {}", unit.code);
                println!("Niveau: {}", unit.niveau);
                println!("Identifiant: {}", unit.id);
                match unit.lat_lng() {
                    Some(p) => println!("Centre: {:.5}, {:.5}", p.lat, p.lon),
                    None => println!("Centre: -"),
                }
            }
            None => eprintln!("No {level} found for code: {code}"),
        },

        Commands::Id { id } => match resolver.unit_by_id(&id)? {
            Some(unit) if json => print_json(&MeshUnitView(&unit))?,
            Some(unit) => print_unit(&unit),
            None => eprintln!("No unit found for identifier: {id}"),
        },

        Commands::Level { level, limit } => {
            print_units(&resolver.units_by_level(level, limit)?, json)?;
        }

        Commands::Children { code, level, limit } => {
            print_units(&resolver.children(&code, level, limit)?, json)?;
        }

        Commands::Breadcrumb { code, level } => {
            let chain = resolver.breadcrumb(&code, level)?;
            if json {
                print_json(&chain)?;
            } else {
                let labels: Vec<_> = chain.iter().map(|c| c.libelle.as_str()).collect();
                println!("{}", labels.join(" > "));
            }
        }

        Commands::Near {
            code,
            level,
            limit,
            exclude_self,
            secondary,
        } => {
            let mut options = if secondary {
                resolver.config().secondary_proximity
            } else {
                resolver.config().proximity
            };
            if let Some(limit) = limit {
                options = options.with_limit(limit);
            }
            if exclude_self {
                options = options.excluding_self();
            }

            match resolver.neighbours_with(&code, level, &options)? {
                Some(found) if json => print_json(&ProximityView(&found))?,
                Some(found) => {
                    println!("Near {} ({}):", found.target.libelle, found.target.code);
                    for n in &found.neighbours {
                        let distance = n
                            .distance_m
                            .map(|d| format!("{:.1} km", d / 1000.0))
                            .unwrap_or_else(|| "-".into());
                        println!("  {:>10}  {:<6} {}", distance, n.unit.code, n.unit.libelle);
                    }
                }
                None => eprintln!("No {level} found for code: {code}"),
            }
        }

        Commands::Search { query, level, limit } => {
            let hits = resolver.search(&query, level, limit)?;
            if json {
                let views: Vec<_> = hits.iter().map(SearchHitView).collect();
                print_json(&views)?;
            } else {
                for hit in &hits {
                    print!("[{}] ", hit.tier.rank());
                    print_unit(&hit.unit);
                }
            }
        }

        Commands::Build { output } => {
            resolver
                .store()
                .save_as(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {} units to {}", resolver.store().len(), output.display());
        }
    }

    Ok(())
}
