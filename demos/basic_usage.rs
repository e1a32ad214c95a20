//! Basic usage example for maillage-core
//!
//! This example demonstrates how to:
//! - Load the bundled sample mesh (cached as binary after the first run)
//! - Look units up by code and by identifier
//! - Walk the hierarchy: children and breadcrumbs
//! - Search labels

use maillage_core::prelude::*;

fn main() -> Result<()> {
    println!("=== maillage-core Basic Usage Example ===\n");

    println!("Loading sample mesh...");
    let resolver = MeshResolver::new(MemoryStore::load_default()?);
    let stats = resolver.stats()?;
    println!(
        "✓ {} units loaded ({} regions, {} départements, {} communes)\n",
        stats.total(),
        stats.regions,
        stats.departements,
        stats.communes
    );

    // Example 1: Lookup by code
    println!("--- Example 1: Find a commune by code ---");
    if let Some(dijon) = resolver.unit("21231", Level::Commune)? {
        println!("Found: {} ({})", dijon.libelle, dijon.id);
        if let Some(p) = dijon.lat_lng() {
            println!("Centre: {:.4}, {:.4}", p.lat, p.lon);
        }
    }
    println!();

    // Example 2: Decode an identifier
    println!("--- Example 2: Identifier anatomy ---");
    let id = MeshId::parse("212121231")?;
    println!("Level: {}", id.level());
    println!("Region ancestor: {}", id.region_ancestor());
    println!("Department ancestor: {}", id.department_ancestor());
    println!("Region pattern: {}", id.sibling_pattern().to_like());
    println!();

    // Example 3: Children
    println!("--- Example 3: Départements of a region ---");
    for dept in resolver.children("27", Level::Region, None)? {
        println!("- {} ({})", dept.libelle, dept.code);
    }
    println!();

    // Example 4: Breadcrumb
    println!("--- Example 4: Breadcrumb ---");
    let chain = resolver.breadcrumb("21231", Level::Commune)?;
    let labels: Vec<_> = chain.iter().map(|c| c.libelle.as_str()).collect();
    println!("{}", labels.join(" > "));
    println!();

    // Example 5: Search
    println!("--- Example 5: Search \"saone\" ---");
    for hit in resolver.search("saone", None, 10)? {
        println!("[{:?}] {} ({})", hit.tier, hit.unit.libelle, hit.unit.niveau);
    }

    Ok(())
}
