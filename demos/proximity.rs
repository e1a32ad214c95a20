//! Nearest-sibling example for maillage-core
//!
//! Ranks the communes of Dijon's region by geodesic distance, with both
//! neighbour presets, and prints the JSON view an HTTP layer would send.

use maillage_core::prelude::*;

fn main() -> Result<()> {
    let resolver = MeshResolver::new(MemoryStore::load_default()?);

    println!("--- Nine nearest (target included) ---");
    if let Some(near) = resolver.neighbours("21231", Level::Commune)? {
        for n in &near.neighbours {
            match n.distance_m {
                Some(d) => println!("{:>8.1} km  {}", d / 1000.0, n.unit.libelle),
                None => println!("{:>11}  {}", "-", n.unit.libelle),
            }
        }
    }
    println!();

    println!("--- Secondary set, target excluded ---");
    let options = resolver.config().secondary_proximity.excluding_self();
    if let Some(near) = resolver.neighbours_with("21231", Level::Commune, &options)? {
        println!("{}", serde_json::to_string_pretty(&ProximityView(&near))?);
    }

    println!("--- Départements never have neighbours ---");
    if let Some(near) = resolver.neighbours("21", Level::Departement)? {
        println!("{}: {} neighbours", near.target.libelle, near.neighbours.len());
    }

    Ok(())
}
